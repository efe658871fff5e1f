use crate::algorithms::{encode, merge, search};
use crate::sequences::{Sequences, SlicePair};
use crate::types::DiffOperation;

/// A builder type config for computing diffs.
#[derive(Clone, Debug)]
pub struct DiffConfig {
    merge_modified: bool,
}

impl Default for DiffConfig {
    fn default() -> DiffConfig {
        DiffConfig {
            merge_modified: true,
        }
    }
}

impl DiffConfig {
    /// Changes whether deleted runs directly followed by inserted runs are
    /// folded into [`DiffOperator::Modified`](crate::DiffOperator::Modified) runs.
    ///
    /// The default is `true`.  With `false` the raw run-length encoded
    /// operations are returned and modified runs never appear.
    pub fn merge_modified(&mut self, yes: bool) -> &mut Self {
        self.merge_modified = yes;
        self
    }

    /// Computes the operations that turn sequence 0 into sequence 1.
    pub fn diff<S: Sequences + ?Sized>(&self, seqs: &S) -> Vec<DiffOperation> {
        let len0 = seqs.len0();
        let len1 = seqs.len1();
        let _span = tracing::trace_span!("diff", len0, len1).entered();

        if len0 == 0 || len1 == 0 {
            tracing::trace!("one side is empty, skipping search");
            return encode(len0, len1, &[]);
        }
        let path = search(seqs);
        tracing::trace!(
            distance = path.distance(),
            matches = path.matches().len(),
            "edit graph search finished"
        );

        let ops = encode(len0, len1, path.matches());
        let ops = if self.merge_modified { merge(ops) } else { ops };
        tracing::trace!(ops = ops.len(), "encoded edit script");
        ops
    }
}

/// Computes the operations that turn sequence 0 into sequence 1.
///
/// This is a shortcut for `DiffConfig::default().diff(seqs)`.
pub fn diff<S: Sequences + ?Sized>(seqs: &S) -> Vec<DiffOperation> {
    DiffConfig::default().diff(seqs)
}

/// Shortcut for diffing two slices.
pub fn diff_slices<T: PartialEq>(seq0: &[T], seq1: &[T]) -> Vec<DiffOperation> {
    diff(&SlicePair::new(seq0, seq1))
}

/// Returns a measure of similarity in the range `0..=1`.
///
/// This is twice the number of unchanged elements divided by the combined
/// length of both sequences.  Two empty sequences have a ratio of `1.0`.
pub fn diff_ratio(ops: &[DiffOperation], len0: usize, len1: usize) -> f32 {
    let unchanged: usize = ops
        .iter()
        .filter(|op| !op.is_change())
        .map(|op| op.count0)
        .sum();
    match len0 + len1 {
        0 => 1.0,
        total => 2.0 * unchanged as f32 / total as f32,
    }
}

/// Slices `len` elements starting `skip` elements into an unchanged run.
fn context(op: &DiffOperation, skip: usize, len: usize) -> Option<DiffOperation> {
    if len == 0 {
        return None;
    }
    Some(DiffOperation::unchanged(op.from0 + skip, op.from1 + skip, len))
}

/// Splits a script into clusters of changes.
///
/// Each group holds one or more changes and at most `n` unchanged elements
/// of context before and after them.  Changes separated by more than
/// `2 * n` unchanged elements land in different groups.  Unchanged runs
/// never come out empty, so with `n == 0` a group holds only changes.
pub fn group_operations(ops: Vec<DiffOperation>, n: usize) -> Vec<Vec<DiffOperation>> {
    let mut groups = Vec::new();
    let mut current: Vec<DiffOperation> = Vec::new();
    let last = ops.len().saturating_sub(1);

    for (idx, op) in ops.into_iter().enumerate() {
        if op.is_change() {
            current.push(op);
            continue;
        }

        let len = op.count0;
        let open = current.iter().any(DiffOperation::is_change);
        if open && idx != last && len <= n * 2 {
            current.push(op);
            continue;
        }

        if open {
            current.extend(context(&op, 0, len.min(n)));
            groups.push(std::mem::take(&mut current));
        }
        // leading context of the next group
        current.clear();
        if idx != last {
            let keep = len.min(n);
            current.extend(context(&op, len - keep, keep));
        }
    }

    if current.iter().any(DiffOperation::is_change) {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
fn render(ops: &[DiffOperation]) -> String {
    ops.iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_substitution() {
    let ops = diff_slices(&['A', 'B', 'C'], &['A', 'X', 'C']);
    insta::assert_snapshot!(render(&ops), @r###"
    Unchanged 0..1 0..1
    Modified 1..2 1..2
    Unchanged 2..3 2..3
    "###);
}

#[test]
fn test_insert_into_empty() {
    let ops = diff_slices(&[], &['A', 'B']);
    assert_eq!(ops, vec![DiffOperation::inserted(0, 0, 2)]);
}

#[test]
fn test_delete_middle() {
    let ops = diff_slices(&['A', 'B', 'C', 'D'], &['A', 'D']);
    insta::assert_snapshot!(render(&ops), @r###"
    Unchanged 0..1 0..1
    Deleted 1..3 1..1
    Unchanged 3..4 1..2
    "###);
}

#[test]
fn test_append() {
    let ops = diff_slices(&['A', 'B'], &['A', 'B', 'C', 'D']);
    assert_eq!(
        ops,
        vec![
            DiffOperation::unchanged(0, 0, 2),
            DiffOperation::inserted(2, 2, 2),
        ]
    );
}

#[test]
fn test_empty_vs_empty() {
    assert!(diff_slices::<u8>(&[], &[]).is_empty());
}

#[test]
fn test_identical() {
    let a = [1, 2, 3, 4, 5];
    assert_eq!(diff_slices(&a, &a), vec![DiffOperation::unchanged(0, 0, 5)]);
}

#[test]
fn test_total_mismatch() {
    let seqs = crate::sequences::from_fn(3, 3, |_, _| false);
    assert_eq!(diff(&seqs), vec![DiffOperation::modified(0, 0, 3, 3)]);

    let seqs = crate::sequences::from_fn(4, 2, |_, _| false);
    assert_eq!(
        diff(&seqs),
        vec![
            DiffOperation::modified(0, 0, 2, 2),
            DiffOperation::deleted(2, 2, 2),
        ]
    );
}

#[test]
fn test_raw_config() {
    let seqs = crate::sequences::from_fn(2, 3, |_, _| false);
    let ops = DiffConfig::default().merge_modified(false).diff(&seqs);
    assert_eq!(
        ops,
        vec![
            DiffOperation::deleted(0, 0, 2),
            DiffOperation::inserted(2, 0, 3),
        ]
    );
}

#[test]
fn test_mixed_lines() {
    let a = [">>>>", "a", "b", "c", "====", "d", "e", "f", "<<<<"];
    let b = [">>>>", "x", "b", "c", "====", "y", "z", "e", "f", "<<<<"];
    let ops = diff_slices(&a, &b);
    insta::assert_snapshot!(render(&ops), @r###"
    Unchanged 0..1 0..1
    Modified 1..2 1..2
    Unchanged 2..5 2..5
    Modified 5..6 5..6
    Inserted 6..6 6..7
    Unchanged 6..9 7..10
    "###);
}

#[test]
fn test_ratio() {
    let ops = diff_slices(&['a', 'b', 'c', 'd'], &['b', 'c', 'd', 'e']);
    assert_eq!(diff_ratio(&ops, 4, 4), 0.75);
    assert_eq!(diff_ratio(&[], 0, 0), 1.0);
}

#[test]
fn test_ratio_extremes() {
    let a = [1, 2, 3];
    assert_eq!(diff_ratio(&diff_slices(&a, &a), 3, 3), 1.0);
    assert_eq!(diff_ratio(&diff_slices(&a, &[4, 5]), 3, 2), 0.0);
    assert_eq!(diff_ratio(&diff_slices(&[], &[4, 5]), 0, 2), 0.0);
    assert_eq!(diff_ratio(&diff_slices(&a, &[]), 3, 0), 0.0);
}

#[cfg(test)]
fn assert_well_formed(groups: &[Vec<DiffOperation>]) {
    for group in groups {
        assert!(group.iter().any(DiffOperation::is_change), "{:?}", group);
        for (index, op) in group.iter().enumerate() {
            assert_eq!(crate::verify::check_shape(index, op), Ok(()));
        }
        for pair in group.windows(2) {
            assert_eq!(pair[0].range0().end, pair[1].from0);
            assert_eq!(pair[0].range1().end, pair[1].from1);
        }
    }
}

#[test]
fn test_group_operations() {
    let a: Vec<usize> = (0..20).collect();
    let mut b = a.clone();
    b[3] = 100;
    b[16] = 200;
    let groups = group_operations(diff_slices(&a, &b), 2);
    assert_eq!(
        groups,
        vec![
            vec![
                DiffOperation::unchanged(1, 1, 2),
                DiffOperation::modified(3, 3, 1, 1),
                DiffOperation::unchanged(4, 4, 2),
            ],
            vec![
                DiffOperation::unchanged(14, 14, 2),
                DiffOperation::modified(16, 16, 1, 1),
                DiffOperation::unchanged(17, 17, 2),
            ],
        ]
    );
    assert!(group_operations(diff_slices(&a, &a), 2).is_empty());
}

#[test]
fn test_group_operations_without_context() {
    let a: Vec<usize> = (0..10).collect();
    let mut b = a.clone();
    b[5] = 99;
    let groups = group_operations(diff_slices(&a, &b), 0);
    assert_well_formed(&groups);
    assert_eq!(groups, vec![vec![DiffOperation::modified(5, 5, 1, 1)]]);

    b[7] = 98;
    let groups = group_operations(diff_slices(&a, &b), 0);
    assert_well_formed(&groups);
    assert_eq!(
        groups,
        vec![
            vec![DiffOperation::modified(5, 5, 1, 1)],
            vec![DiffOperation::modified(7, 7, 1, 1)],
        ]
    );
}

#[test]
fn test_group_operations_changes_at_edges() {
    let ops = diff_slices(&[1, 2, 3, 4, 5], &[9, 2, 3, 4, 8]);
    let groups = group_operations(ops.clone(), 1);
    assert_well_formed(&groups);
    assert_eq!(
        groups,
        vec![
            vec![
                DiffOperation::modified(0, 0, 1, 1),
                DiffOperation::unchanged(1, 1, 1),
            ],
            vec![
                DiffOperation::unchanged(3, 3, 1),
                DiffOperation::modified(4, 4, 1, 1),
            ],
        ]
    );

    // enough context keeps everything in one group
    let groups = group_operations(ops.clone(), 2);
    assert_well_formed(&groups);
    assert_eq!(groups, vec![ops]);
}

#[test]
fn test_group_operations_nothing_changed() {
    assert!(group_operations(Vec::new(), 3).is_empty());
    let a = [1, 2, 3];
    for n in 0..4 {
        assert!(group_operations(diff_slices(&a, &a), n).is_empty());
    }
}
