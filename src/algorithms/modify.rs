//! Folding of deleted/inserted pairs into modified runs.
use std::cmp::min;

use crate::types::{DiffOperation, DiffOperator};

/// Reclassifies every deleted run that is directly followed by an inserted
/// run.
///
/// The overlapping part becomes one [`DiffOperator::Modified`] run.  If one
/// side is longer the surplus stays behind as a trailing deleted or
/// inserted run that starts where the modified run ends.  Coverage of both
/// sequences is not changed, and running this on its own output does
/// nothing.
pub fn merge(ops: Vec<DiffOperation>) -> Vec<DiffOperation> {
    let mut rv = Vec::with_capacity(ops.len());
    let mut iter = ops.into_iter().peekable();

    while let Some(op) = iter.next() {
        if op.op != DiffOperator::Deleted {
            rv.push(op);
            continue;
        }
        let ins = match iter.peek() {
            Some(next) if next.op == DiffOperator::Inserted => *next,
            _ => {
                rv.push(op);
                continue;
            }
        };
        iter.next();

        let common = min(op.count0, ins.count1);
        rv.push(DiffOperation::modified(op.from0, ins.from1, common, common));
        if op.count0 > common {
            rv.push(DiffOperation::deleted(
                op.from0 + common,
                ins.from1 + common,
                op.count0 - common,
            ));
        } else if ins.count1 > common {
            rv.push(DiffOperation::inserted(
                op.from0 + common,
                ins.from1 + common,
                ins.count1 - common,
            ));
        }
    }

    rv
}

#[test]
fn test_equal_counts() {
    let ops = merge(vec![
        DiffOperation::unchanged(0, 0, 1),
        DiffOperation::deleted(1, 1, 2),
        DiffOperation::inserted(3, 1, 2),
        DiffOperation::unchanged(3, 3, 1),
    ]);
    assert_eq!(
        ops,
        vec![
            DiffOperation::unchanged(0, 0, 1),
            DiffOperation::modified(1, 1, 2, 2),
            DiffOperation::unchanged(3, 3, 1),
        ]
    );
}

#[test]
fn test_surplus_deletion() {
    let ops = merge(vec![
        DiffOperation::deleted(0, 0, 3),
        DiffOperation::inserted(3, 0, 1),
    ]);
    assert_eq!(
        ops,
        vec![
            DiffOperation::modified(0, 0, 1, 1),
            DiffOperation::deleted(1, 1, 2),
        ]
    );
}

#[test]
fn test_surplus_insertion() {
    let ops = merge(vec![
        DiffOperation::unchanged(0, 0, 2),
        DiffOperation::deleted(2, 2, 1),
        DiffOperation::inserted(3, 2, 3),
    ]);
    assert_eq!(
        ops,
        vec![
            DiffOperation::unchanged(0, 0, 2),
            DiffOperation::modified(2, 2, 1, 1),
            DiffOperation::inserted(3, 3, 2),
        ]
    );
}

#[test]
fn test_lone_runs_untouched() {
    let raw = vec![
        DiffOperation::inserted(0, 0, 1),
        DiffOperation::unchanged(0, 1, 1),
        DiffOperation::deleted(1, 2, 1),
    ];
    assert_eq!(merge(raw.clone()), raw);
}

#[test]
fn test_idempotent() {
    let once = merge(vec![
        DiffOperation::deleted(0, 0, 4),
        DiffOperation::inserted(4, 0, 2),
        DiffOperation::unchanged(4, 2, 1),
        DiffOperation::deleted(5, 3, 1),
        DiffOperation::inserted(6, 3, 1),
    ]);
    assert_eq!(merge(once.clone()), once);
}
