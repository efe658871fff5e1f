//! Myers' greedy edit graph search.
//!
//! * time: `O((N+M)D)`
//! * space `O(D²)` for the endpoint trace, which is bounded by `O((N+M)D)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The search walks the edit graph one edit distance `d` at a time and
//! remembers the furthest reaching point of every diagonal `k = i0 - i1`
//! for every level.  Once `(len0, len1)` is reached the remembered levels
//! are walked backwards to recover the matched index pairs.

use crate::sequences::Sequences;

/// Marks a diagonal that has no valid endpoint at a level.
const UNREACHED: isize = -1;

/// The result of [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPath {
    matches: Vec<(usize, usize)>,
    distance: usize,
}

impl EditPath {
    /// The matched `(index0, index1)` pairs in increasing order.
    ///
    /// This is a longest common subsequence of the two sequences.
    pub fn matches(&self) -> &[(usize, usize)] {
        &self.matches
    }

    /// The number of inserted plus deleted elements.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Converts the path into the matched pairs.
    pub fn into_matches(self) -> Vec<(usize, usize)> {
        self.matches
    }
}

/// Furthest reaching `i0` per level and diagonal.
///
/// Level `d` holds the `d + 1` diagonals `-d, -d + 2, ..., d` and is stored
/// right after level `d - 1` in one flat buffer.
#[derive(Default)]
struct Trace {
    endpoints: Vec<isize>,
}

impl Trace {
    fn level_start(d: isize) -> usize {
        (d * (d + 1) / 2) as usize
    }

    fn get(&self, d: isize, k: isize) -> isize {
        if d < 0 || k < -d || k > d {
            return UNREACHED;
        }
        self.endpoints
            .get(Trace::level_start(d) + ((k + d) / 2) as usize)
            .copied()
            .unwrap_or(UNREACHED)
    }

    fn push(&mut self, x: isize) {
        self.endpoints.push(x);
    }
}

/// Picks the non-diagonal move that enters diagonal `k` at level `d`.
///
/// Returns the `i0` right after the move and the diagonal it came from.
/// Moves that would leave the `n` by `m` grid are never taken.  When both
/// neighbours qualify the one giving the larger `i0` wins, the horizontal
/// one on a tie.
fn predecessor(trace: &Trace, d: isize, k: isize, n: isize, m: isize) -> Option<(isize, isize)> {
    let right = trace.get(d - 1, k - 1);
    let right = if right != UNREACHED && right < n {
        Some(right + 1)
    } else {
        None
    };
    let down = trace.get(d - 1, k + 1);
    let down = if down != UNREACHED && down - (k + 1) < m {
        Some(down)
    } else {
        None
    };
    match (right, down) {
        (Some(r), Some(dn)) if dn > r => Some((dn, k + 1)),
        (Some(r), _) => Some((r, k - 1)),
        (None, Some(dn)) => Some((dn, k + 1)),
        (None, None) => None,
    }
}

#[inline(always)]
fn probe<S: Sequences + ?Sized>(seqs: &S, i0: isize, i1: isize) -> bool {
    debug_assert!(i0 >= 0 && (i0 as usize) < seqs.len0());
    debug_assert!(i1 >= 0 && (i1 as usize) < seqs.len1());
    seqs.equal(i0 as usize, i1 as usize)
}

/// Finds a shortest edit path from `(0, 0)` to `(len0, len1)`.
///
/// If either sequence is empty no comparisons are made at all.
pub fn search<S: Sequences + ?Sized>(seqs: &S) -> EditPath {
    let len0 = seqs.len0();
    let len1 = seqs.len1();
    if len0 == 0 || len1 == 0 {
        return EditPath {
            matches: Vec::new(),
            distance: len0 + len1,
        };
    }

    let n = len0 as isize;
    let m = len1 as isize;
    let mut trace = Trace::default();

    for d in 0..=(n + m) {
        for k in (-d..=d).step_by(2) {
            let start = if d == 0 {
                Some(0)
            } else {
                predecessor(&trace, d, k, n, m).map(|(x, _)| x)
            };
            let mut x = match start {
                Some(x) => x,
                None => {
                    trace.push(UNREACHED);
                    continue;
                }
            };
            let mut y = x - k;
            while x < n && y < m && probe(seqs, x, y) {
                x += 1;
                y += 1;
            }
            trace.push(x);

            if x == n && y == m {
                return EditPath {
                    matches: backtrack(&trace, d, k, n, m),
                    distance: d as usize,
                };
            }
        }
    }

    unreachable!("the edit graph search always reaches the end point")
}

fn backtrack(trace: &Trace, d: isize, k: isize, n: isize, m: isize) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    let mut d = d;
    let mut k = k;
    let mut end = trace.get(d, k);

    while d > 0 {
        let (start, prev_k) = match predecessor(trace, d, k, n, m) {
            Some(step) => step,
            None => unreachable!("endpoint at level {} has no predecessor", d),
        };
        for x in (start..end).rev() {
            matches.push((x as usize, (x - k) as usize));
        }
        d -= 1;
        k = prev_k;
        end = trace.get(d, k);
    }

    // the initial snake along the main diagonal
    for x in (0..end).rev() {
        matches.push((x as usize, x as usize));
    }

    matches.reverse();
    matches
}

#[cfg(test)]
fn search_slices<T: PartialEq>(a: &[T], b: &[T]) -> EditPath {
    search(&crate::sequences::SlicePair::new(a, b))
}

#[test]
fn test_level_start() {
    assert_eq!(Trace::level_start(0), 0);
    assert_eq!(Trace::level_start(1), 1);
    assert_eq!(Trace::level_start(2), 3);
    assert_eq!(Trace::level_start(3), 6);
}

#[test]
fn test_identical() {
    let path = search_slices(&[1, 2, 3, 4], &[1, 2, 3, 4]);
    assert_eq!(path.distance(), 0);
    assert_eq!(path.matches(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_substitution() {
    let path = search_slices(&['A', 'B', 'C'], &['A', 'X', 'C']);
    assert_eq!(path.distance(), 2);
    assert_eq!(path.matches(), &[(0, 0), (2, 2)]);
}

#[test]
fn test_empty_sides() {
    let path = search_slices::<u8>(&[], &[]);
    assert_eq!(path.distance(), 0);
    assert!(path.matches().is_empty());

    let path = search_slices(&[1, 2, 3], &[]);
    assert_eq!(path.distance(), 3);
    assert!(path.matches().is_empty());

    let path = search_slices(&[], &[1, 2]);
    assert_eq!(path.distance(), 2);
    assert!(path.into_matches().is_empty());
}

#[test]
fn test_disjoint() {
    let path = search_slices(&[1, 2], &[3, 4, 5]);
    assert_eq!(path.distance(), 5);
    assert!(path.matches().is_empty());
}

#[test]
fn test_tie_prefers_deletion_path() {
    // both [A] and [B] are longest common subsequences
    let path = search_slices(&['A', 'B'], &['B', 'A']);
    assert_eq!(path.distance(), 2);
    assert_eq!(path.matches(), &[(0, 1)]);
}

#[test]
fn test_paper_example() {
    let a: Vec<char> = "ABCABBA".chars().collect();
    let b: Vec<char> = "CBABAC".chars().collect();
    let path = search_slices(&a, &b);
    assert_eq!(path.distance(), 5);
    assert_eq!(path.matches().len(), 4);
    for pair in path.matches().windows(2) {
        assert!(pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1);
    }
    for &(i0, i1) in path.matches() {
        assert_eq!(a[i0], b[i1]);
    }
}

#[test]
fn test_never_probes_out_of_range() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let seqs = crate::sequences::from_fn(5, 3, |i0, i1| {
        assert!(i0 < 5 && i1 < 3);
        calls.set(calls.get() + 1);
        false
    });
    let path = search(&seqs);
    assert_eq!(path.distance(), 8);
    assert!(calls.get() > 0);
}
