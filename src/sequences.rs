/// Access to the two sequences that are being compared.
///
/// The engine never looks at elements.  All it needs is the length of
/// each sequence and whether the element at `index0` in sequence 0 is the
/// same as the element at `index1` in sequence 1.
///
/// `equal` must answer the same way every time it is asked about the same
/// pair during one diff, and is only ever called with
/// `index0 < len0()` and `index1 < len1()`.
pub trait Sequences {
    /// Length of sequence 0.
    fn len0(&self) -> usize;

    /// Length of sequence 1.
    fn len1(&self) -> usize;

    /// Compares an element of sequence 0 with an element of sequence 1.
    fn equal(&self, index0: usize, index1: usize) -> bool;
}

impl<'a, S: Sequences + ?Sized + 'a> Sequences for &'a S {
    fn len0(&self) -> usize {
        (**self).len0()
    }

    fn len1(&self) -> usize {
        (**self).len1()
    }

    fn equal(&self, index0: usize, index1: usize) -> bool {
        (**self).equal(index0, index1)
    }
}

/// Two slices compared with [`PartialEq`].
#[derive(Debug, Clone, Copy)]
pub struct SlicePair<'a, 'b, A, B> {
    seq0: &'a [A],
    seq1: &'b [B],
}

impl<'a, 'b, A, B> SlicePair<'a, 'b, A, B>
where
    B: PartialEq<A>,
{
    /// Creates a new pair from two slices.
    pub fn new(seq0: &'a [A], seq1: &'b [B]) -> SlicePair<'a, 'b, A, B> {
        SlicePair { seq0, seq1 }
    }
}

impl<'a, 'b, A, B> Sequences for SlicePair<'a, 'b, A, B>
where
    B: PartialEq<A>,
{
    #[inline(always)]
    fn len0(&self) -> usize {
        self.seq0.len()
    }

    #[inline(always)]
    fn len1(&self) -> usize {
        self.seq1.len()
    }

    #[inline(always)]
    fn equal(&self, index0: usize, index1: usize) -> bool {
        self.seq1[index1] == self.seq0[index0]
    }
}

/// Sequences described by two lengths and an equality closure.
///
/// This is returned from [`from_fn`].
pub struct FnSequences<F> {
    len0: usize,
    len1: usize,
    eq: F,
}

impl<F> std::fmt::Debug for FnSequences<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FnSequences")
            .field("len0", &self.len0)
            .field("len1", &self.len1)
            .finish()
    }
}

impl<F> Sequences for FnSequences<F>
where
    F: Fn(usize, usize) -> bool,
{
    fn len0(&self) -> usize {
        self.len0
    }

    fn len1(&self) -> usize {
        self.len1
    }

    fn equal(&self, index0: usize, index1: usize) -> bool {
        (self.eq)(index0, index1)
    }
}

/// Creates [`Sequences`] from two lengths and an equality function.
///
/// ```rust
/// # use editscript::{diff, from_fn, DiffOperator};
/// let old = ["a", "b", "c"];
/// let new = ["a", "x", "c"];
/// let ops = diff(&from_fn(old.len(), new.len(), |i0, i1| old[i0] == new[i1]));
/// assert_eq!(ops[1].op, DiffOperator::Modified);
/// ```
pub fn from_fn<F>(len0: usize, len1: usize, eq: F) -> FnSequences<F>
where
    F: Fn(usize, usize) -> bool,
{
    FnSequences { len0, len1, eq }
}

#[test]
fn test_slice_pair() {
    let a = [1, 2, 3];
    let b = [3, 2];
    let s = SlicePair::new(&a[..], &b[..]);
    assert_eq!(s.len0(), 3);
    assert_eq!(s.len1(), 2);
    assert!(s.equal(1, 1));
    assert!(s.equal(2, 0));
    assert!(!s.equal(0, 0));
}

#[test]
fn test_from_fn_by_ref() {
    let s = from_fn(4, 2, |i0, i1| i0 == i1 * 2);
    let r = &s;
    assert_eq!(r.len0(), 4);
    assert!(r.equal(2, 1));
    assert!(!r.equal(1, 1));
}
