//! Run-length encoding of a match list into raw operations.
use crate::types::DiffOperation;

/// Encodes the matched index pairs as an ordered list of raw operations.
///
/// Consecutive matches become one unchanged run.  The gap before, between
/// and after matches becomes a deleted run, an inserted run, or a deleted
/// run directly followed by an inserted run when both sequences have
/// unmatched elements there.  No modified runs are produced here, see
/// [`merge`](crate::algorithms::modify::merge) for that.
///
/// `matches` must be strictly increasing on both axes and lie within
/// `len0` by `len1`.
pub fn encode(len0: usize, len1: usize, matches: &[(usize, usize)]) -> Vec<DiffOperation> {
    let mut ops = Vec::new();
    let mut pos0 = 0;
    let mut pos1 = 0;
    let mut eq: Option<DiffOperation> = None;

    for &(i0, i1) in matches {
        debug_assert!(i0 >= pos0 && i1 >= pos1 && i0 < len0 && i1 < len1);
        if i0 > pos0 || i1 > pos1 {
            if let Some(run) = eq.take() {
                ops.push(run);
            }
            push_gap(&mut ops, pos0, pos1, i0 - pos0, i1 - pos1);
        }
        match eq {
            Some(ref mut run) => {
                run.count0 += 1;
                run.count1 += 1;
            }
            None => eq = Some(DiffOperation::unchanged(i0, i1, 1)),
        }
        pos0 = i0 + 1;
        pos1 = i1 + 1;
    }

    if let Some(run) = eq.take() {
        ops.push(run);
    }
    push_gap(&mut ops, pos0, pos1, len0 - pos0, len1 - pos1);
    ops
}

fn push_gap(ops: &mut Vec<DiffOperation>, pos0: usize, pos1: usize, count0: usize, count1: usize) {
    if count0 > 0 {
        ops.push(DiffOperation::deleted(pos0, pos1, count0));
    }
    if count1 > 0 {
        ops.push(DiffOperation::inserted(pos0 + count0, pos1, count1));
    }
}

#[test]
fn test_empty() {
    assert!(encode(0, 0, &[]).is_empty());
    assert_eq!(encode(0, 2, &[]), vec![DiffOperation::inserted(0, 0, 2)]);
    assert_eq!(encode(3, 0, &[]), vec![DiffOperation::deleted(0, 0, 3)]);
}

#[test]
fn test_gap_order() {
    assert_eq!(
        encode(2, 3, &[]),
        vec![
            DiffOperation::deleted(0, 0, 2),
            DiffOperation::inserted(2, 0, 3),
        ]
    );
}

#[test]
fn test_runs() {
    // A B C D E vs A B X D E F
    let ops = encode(5, 6, &[(0, 0), (1, 1), (3, 3), (4, 4)]);
    assert_eq!(
        ops,
        vec![
            DiffOperation::unchanged(0, 0, 2),
            DiffOperation::deleted(2, 2, 1),
            DiffOperation::inserted(3, 2, 1),
            DiffOperation::unchanged(3, 3, 2),
            DiffOperation::inserted(5, 5, 1),
        ]
    );
}

#[test]
fn test_adjacent_matches_on_one_axis() {
    // A B C D vs A D
    let ops = encode(4, 2, &[(0, 0), (3, 1)]);
    assert_eq!(
        ops,
        vec![
            DiffOperation::unchanged(0, 0, 1),
            DiffOperation::deleted(1, 1, 2),
            DiffOperation::unchanged(3, 1, 1),
        ]
    );
}
