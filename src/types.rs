use std::fmt;
use std::ops::Range;

/// The kind of a [`DiffOperation`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
pub enum DiffOperator {
    /// Elements of sequence 1 were inserted.
    Inserted,
    /// A block of sequence 0 was replaced by a block of sequence 1.
    Modified,
    /// Elements of sequence 0 were deleted.
    Deleted,
    /// The elements are equal in both sequences.
    Unchanged,
}

impl fmt::Display for DiffOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                DiffOperator::Inserted => '+',
                DiffOperator::Modified => '~',
                DiffOperator::Deleted => '-',
                DiffOperator::Unchanged => ' ',
            }
        )
    }
}

/// One run of a single operator.
///
/// `from0`/`from1` are the start indexes into sequence 0 and sequence 1,
/// `count0`/`count1` the number of elements the run consumes from each.
/// A run that consumes nothing on one axis still carries the position the
/// other sequence's cursor stands at, so consecutive operations always
/// line up: the next operation starts at `from + count` on both axes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct DiffOperation {
    pub op: DiffOperator,
    pub from0: usize,
    pub from1: usize,
    pub count0: usize,
    pub count1: usize,
}

impl DiffOperation {
    /// Creates an [`DiffOperator::Unchanged`] run of `len` elements.
    pub fn unchanged(from0: usize, from1: usize, len: usize) -> DiffOperation {
        DiffOperation {
            op: DiffOperator::Unchanged,
            from0,
            from1,
            count0: len,
            count1: len,
        }
    }

    /// Creates a [`DiffOperator::Deleted`] run.
    ///
    /// `from1` is the position in sequence 1 the deletion happens at.
    pub fn deleted(from0: usize, from1: usize, count0: usize) -> DiffOperation {
        DiffOperation {
            op: DiffOperator::Deleted,
            from0,
            from1,
            count0,
            count1: 0,
        }
    }

    /// Creates an [`DiffOperator::Inserted`] run.
    ///
    /// `from0` is the position in sequence 0 the insertion happens at.
    pub fn inserted(from0: usize, from1: usize, count1: usize) -> DiffOperation {
        DiffOperation {
            op: DiffOperator::Inserted,
            from0,
            from1,
            count0: 0,
            count1,
        }
    }

    /// Creates a [`DiffOperator::Modified`] run.
    pub fn modified(from0: usize, from1: usize, count0: usize, count1: usize) -> DiffOperation {
        DiffOperation {
            op: DiffOperator::Modified,
            from0,
            from1,
            count0,
            count1,
        }
    }

    /// Returns the covered range in sequence 0.
    pub fn range0(&self) -> Range<usize> {
        self.from0..self.from0 + self.count0
    }

    /// Returns the covered range in sequence 1.
    pub fn range1(&self) -> Range<usize> {
        self.from1..self.from1 + self.count1
    }

    /// Returns `true` unless this is an unchanged run.
    pub fn is_change(&self) -> bool {
        self.op != DiffOperator::Unchanged
    }
}

impl fmt::Display for DiffOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?}",
            self.op,
            self.range0(),
            self.range1()
        )
    }
}

#[test]
fn test_ranges() {
    let op = DiffOperation::deleted(3, 5, 2);
    assert_eq!(op.range0(), 3..5);
    assert_eq!(op.range1(), 5..5);
    assert!(op.is_change());
    assert!(!DiffOperation::unchanged(0, 0, 4).is_change());
}

#[test]
fn test_display() {
    assert_eq!(
        DiffOperation::modified(1, 1, 2, 1).to_string(),
        "Modified 1..3 1..2"
    );
    assert_eq!(DiffOperator::Inserted.to_string(), "+");
    assert_eq!(DiffOperator::Unchanged.to_string(), " ");
}
