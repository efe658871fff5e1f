//! Checking edit scripts against the sequences they describe.
use std::fmt;

use crate::sequences::Sequences;
use crate::types::{DiffOperation, DiffOperator};

/// Names one of the two sequences in a [`ScriptError`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Axis {
    /// Sequence 0.
    Seq0,
    /// Sequence 1.
    Seq1,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Seq0 => write!(f, "sequence 0"),
            Axis::Seq1 => write!(f, "sequence 1"),
        }
    }
}

/// The ways an operation list can fail to describe two sequences.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ScriptError {
    /// The counts do not fit the operator, e.g. an empty run or a
    /// deletion that consumes elements of sequence 1.
    #[error("operation {index} has invalid counts for {op:?} ({count0}/{count1})")]
    Shape {
        /// Position of the operation in the list.
        index: usize,
        /// The operator of the offending run.
        op: DiffOperator,
        /// Elements consumed from sequence 0.
        count0: usize,
        /// Elements consumed from sequence 1.
        count1: usize,
    },
    /// An operation does not start where the previous one ended.
    #[error("operation {index} starts at {found} in {axis}, expected {expected}")]
    Gap {
        /// Position of the operation in the list.
        index: usize,
        /// The sequence the gap or overlap is in.
        axis: Axis,
        /// Where the operation should start.
        expected: usize,
        /// Where it actually starts.
        found: usize,
    },
    /// The operations consume too few or too many elements.
    #[error("operations cover {found} elements of {axis}, expected {expected}")]
    Coverage {
        /// The sequence that is not covered exactly.
        axis: Axis,
        /// Length of that sequence.
        expected: usize,
        /// Elements consumed so far.
        found: usize,
    },
    /// An unchanged run pairs elements the oracle considers different.
    #[error("operation {index} marks unequal elements {index0}/{index1} as unchanged")]
    Mismatch {
        /// Position of the operation in the list.
        index: usize,
        /// Index into sequence 0.
        index0: usize,
        /// Index into sequence 1.
        index1: usize,
    },
}

/// Checks that the counts of the operation at `index` fit its operator.
pub(crate) fn check_shape(index: usize, op: &DiffOperation) -> Result<(), ScriptError> {
    let shape_ok = match op.op {
        DiffOperator::Unchanged => op.count0 == op.count1 && op.count0 > 0,
        DiffOperator::Deleted => op.count0 > 0 && op.count1 == 0,
        DiffOperator::Inserted => op.count0 == 0 && op.count1 > 0,
        DiffOperator::Modified => op.count0 > 0 && op.count1 > 0,
    };
    if shape_ok {
        Ok(())
    } else {
        Err(ScriptError::Shape {
            index,
            op: op.op,
            count0: op.count0,
            count1: op.count1,
        })
    }
}

/// Verifies that `ops` is a valid edit script for `seqs`.
///
/// Every operation must have counts matching its operator, the operations
/// must follow each other without gaps or overlaps on both axes, together
/// they must cover both sequences, and every element pair inside an
/// unchanged run must compare equal.
pub fn verify_script<S: Sequences + ?Sized>(
    seqs: &S,
    ops: &[DiffOperation],
) -> Result<(), ScriptError> {
    let len0 = seqs.len0();
    let len1 = seqs.len1();
    let mut pos0 = 0;
    let mut pos1 = 0;

    for (index, op) in ops.iter().enumerate() {
        check_shape(index, op)?;
        if op.from0 != pos0 {
            return Err(ScriptError::Gap {
                index,
                axis: Axis::Seq0,
                expected: pos0,
                found: op.from0,
            });
        }
        if op.from1 != pos1 {
            return Err(ScriptError::Gap {
                index,
                axis: Axis::Seq1,
                expected: pos1,
                found: op.from1,
            });
        }
        pos0 = pos0.saturating_add(op.count0);
        pos1 = pos1.saturating_add(op.count1);
        if pos0 > len0 {
            return Err(ScriptError::Coverage {
                axis: Axis::Seq0,
                expected: len0,
                found: pos0,
            });
        }
        if pos1 > len1 {
            return Err(ScriptError::Coverage {
                axis: Axis::Seq1,
                expected: len1,
                found: pos1,
            });
        }
        if op.op == DiffOperator::Unchanged {
            for (index0, index1) in op.range0().zip(op.range1()) {
                if !seqs.equal(index0, index1) {
                    return Err(ScriptError::Mismatch {
                        index,
                        index0,
                        index1,
                    });
                }
            }
        }
    }

    if pos0 != len0 {
        return Err(ScriptError::Coverage {
            axis: Axis::Seq0,
            expected: len0,
            found: pos0,
        });
    }
    if pos1 != len1 {
        return Err(ScriptError::Coverage {
            axis: Axis::Seq1,
            expected: len1,
            found: pos1,
        });
    }
    Ok(())
}

#[test]
fn test_valid_script() {
    let a = ['A', 'B', 'C'];
    let b = ['A', 'X', 'C', 'D'];
    let seqs = crate::sequences::SlicePair::new(&a[..], &b[..]);
    let ops = crate::diff(&seqs);
    assert_eq!(verify_script(&seqs, &ops), Ok(()));
}

#[test]
fn test_gap() {
    let seqs = crate::sequences::from_fn(3, 3, |a, b| a == b);
    let err = verify_script(
        &seqs,
        &[
            DiffOperation::unchanged(0, 0, 1),
            DiffOperation::unchanged(2, 2, 1),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScriptError::Gap {
            index: 1,
            axis: Axis::Seq0,
            expected: 1,
            found: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "operation 1 starts at 2 in sequence 0, expected 1"
    );
}

#[test]
fn test_coverage() {
    let seqs = crate::sequences::from_fn(3, 2, |a, b| a == b);
    let err = verify_script(&seqs, &[DiffOperation::unchanged(0, 0, 2)]).unwrap_err();
    assert_eq!(
        err,
        ScriptError::Coverage {
            axis: Axis::Seq0,
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn test_mismatch() {
    let seqs = crate::sequences::from_fn(2, 2, |a, b| a == 0 && b == 0);
    let err = verify_script(&seqs, &[DiffOperation::unchanged(0, 0, 2)]).unwrap_err();
    assert_eq!(
        err,
        ScriptError::Mismatch {
            index: 0,
            index0: 1,
            index1: 1,
        }
    );
}

#[test]
fn test_shape() {
    let seqs = crate::sequences::from_fn(1, 1, |_, _| false);
    let bad = DiffOperation {
        op: DiffOperator::Deleted,
        from0: 0,
        from1: 0,
        count0: 1,
        count1: 1,
    };
    assert!(matches!(
        verify_script(&seqs, &[bad]),
        Err(ScriptError::Shape { index: 0, .. })
    ));
}

#[test]
fn test_empty_unchanged_run() {
    assert_eq!(
        check_shape(2, &DiffOperation::unchanged(5, 5, 0)),
        Err(ScriptError::Shape {
            index: 2,
            op: DiffOperator::Unchanged,
            count0: 0,
            count1: 0,
        })
    );
}
