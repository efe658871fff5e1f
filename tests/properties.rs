//! Property-based tests for the diff engine.
//!
//! Uses proptest to generate sequences over a small alphabet so that
//! repeated elements and ties are common.

use editscript::algorithms::merge;
use editscript::verify::verify_script;
use editscript::{
    diff, from_fn, group_operations, DiffConfig, DiffOperation, DiffOperator, SlicePair,
};
use proptest::prelude::*;

/// Strategy to generate short sequences with many repeated elements
fn sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..16)
}

/// Length of a longest common subsequence by dynamic programming.
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    table[0][0]
}

fn changed_elements(ops: &[DiffOperation]) -> usize {
    ops.iter()
        .filter(|op| op.is_change())
        .map(|op| op.count0 + op.count1)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every result covers both sequences contiguously and
    /// unchanged runs only pair equal elements.
    #[test]
    fn script_is_valid(a in sequence_strategy(), b in sequence_strategy()) {
        let seqs = SlicePair::new(&a[..], &b[..]);
        let ops = diff(&seqs);
        prop_assert_eq!(verify_script(&seqs, &ops), Ok(()));
    }

    /// Property: the unchanged elements form a longest common subsequence.
    #[test]
    fn script_is_minimal(a in sequence_strategy(), b in sequence_strategy()) {
        let seqs = SlicePair::new(&a[..], &b[..]);
        let ops = DiffConfig::default().merge_modified(false).diff(&seqs);
        prop_assert_eq!(
            changed_elements(&ops),
            a.len() + b.len() - 2 * lcs_len(&a, &b)
        );
    }

    /// Property: merging is a pure reclassification of the raw script.
    #[test]
    fn merge_is_idempotent(a in sequence_strategy(), b in sequence_strategy()) {
        let seqs = SlicePair::new(&a[..], &b[..]);
        let raw = DiffConfig::default().merge_modified(false).diff(&seqs);
        prop_assert!(raw.iter().all(|op| op.op != DiffOperator::Modified));
        prop_assert_eq!(verify_script(&seqs, &raw), Ok(()));

        let merged = merge(raw);
        prop_assert_eq!(&merged, &diff(&seqs));
        prop_assert_eq!(merge(merged.clone()), merged.clone());
        for pair in merged.windows(2) {
            prop_assert!(
                !(pair[0].op == DiffOperator::Deleted && pair[1].op == DiffOperator::Inserted)
            );
        }
    }

    /// Property: grouping keeps every change exactly once, never emits
    /// empty runs and keeps each group contiguous.
    #[test]
    fn groups_are_well_formed(
        a in sequence_strategy(),
        b in sequence_strategy(),
        n in 0usize..4,
    ) {
        let ops = diff(&SlicePair::new(&a[..], &b[..]));
        let groups = group_operations(ops.clone(), n);

        let grouped_changes: Vec<DiffOperation> = groups
            .iter()
            .flatten()
            .filter(|op| op.is_change())
            .copied()
            .collect();
        let changes: Vec<DiffOperation> =
            ops.iter().filter(|op| op.is_change()).copied().collect();
        prop_assert_eq!(grouped_changes, changes);

        for group in &groups {
            prop_assert!(group.iter().any(DiffOperation::is_change));
            for op in group {
                prop_assert!(op.count0 > 0 || op.count1 > 0, "empty run {:?}", op);
                if !op.is_change() {
                    prop_assert!(op.count0 <= 2 * n);
                }
            }
            for pair in group.windows(2) {
                prop_assert_eq!(pair[0].range0().end, pair[1].from0);
                prop_assert_eq!(pair[0].range1().end, pair[1].from1);
            }
        }
    }

    /// Property: repeated invocations give identical results.
    #[test]
    fn diff_is_deterministic(a in sequence_strategy(), b in sequence_strategy()) {
        let seqs = SlicePair::new(&a[..], &b[..]);
        prop_assert_eq!(diff(&seqs), diff(&seqs));
    }

    /// Property: a sequence diffed against itself is one unchanged run,
    /// no matter what the oracle says about other pairs.
    #[test]
    fn identity_law(len in 1usize..64, noise in any::<bool>()) {
        let seqs = from_fn(len, len, |i0, i1| i0 == i1 || noise);
        prop_assert_eq!(diff(&seqs), vec![DiffOperation::unchanged(0, 0, len)]);
    }

    /// Property: with an oracle that never matches the whole overlap is
    /// modified and the surplus is a single trailing run.
    #[test]
    fn total_mismatch_law(len0 in 0usize..32, len1 in 0usize..32) {
        let seqs = from_fn(len0, len1, |_, _| false);
        let ops = diff(&seqs);
        let common = len0.min(len1);
        let mut expected = Vec::new();
        if common > 0 {
            expected.push(DiffOperation::modified(0, 0, common, common));
        }
        if len0 > common {
            expected.push(DiffOperation::deleted(common, common, len0 - common));
        } else if len1 > common {
            expected.push(DiffOperation::inserted(common, common, len1 - common));
        }
        prop_assert_eq!(ops, expected);
    }
}

#[test]
fn concurrent_invocations() {
    let a: Vec<u32> = (0..200).map(|x| x % 7).collect();
    let b: Vec<u32> = (0..180).map(|x| x % 5).collect();
    let expected = diff(&SlicePair::new(&a[..], &b[..]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = a.clone();
            let b = b.clone();
            std::thread::spawn(move || diff(&SlicePair::new(&a[..], &b[..])))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
