//! `HunkAnalyzer`: pure inspection of a contiguous run of
//! [`Change`] records.

use crate::change::Change;
use crate::ignore::IgnorePolicy;
use crate::line_index::FileView;

/// Classification of a hunk's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkKind {
    /// Every line touched by the run is ignorable; suppress the hunk.
    Unchanged,
    /// Only deletions are materially significant.
    Old,
    /// Only insertions are materially significant.
    New,
    /// Both deletions and insertions are materially significant.
    Changed,
}

/// The result of [`analyze`]: a hunk's kind and the internal line-number
/// extents it spans on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkExtent {
    pub kind: HunkKind,
    pub first0: i64,
    pub last0: i64,
    pub first1: i64,
    pub last1: i64,
}

/// Inspect the contiguous run `changes` (a sub-slice of a [`ChangeScript`]
/// taken in lockstep order) and classify it.
///
/// `policy` is consulted to decide whether every line the run touches is
/// ignorable; when `None`, suppression is never considered (this is the
/// fast path where neither `ignore_blank_lines` nor
/// `ignore_regex` is active).
#[must_use]
pub fn analyze(changes: &[Change], file0: &FileView, file1: &FileView, policy: Option<&IgnorePolicy>) -> HunkExtent {
    assert!(!changes.is_empty(), "analyze() requires a non-empty run");

    let first = changes[0];
    let last = *changes.last().unwrap();

    let first0 = first.line0;
    let first1 = first.line1;
    // Edge case: a side contributing zero lines yields an
    // empty range positioned at the insertion/deletion point.
    let last0 = last.line0 + last.deleted as i64 - 1;
    let last1 = last.line1 + last.inserted as i64 - 1;

    let any_deletions = changes.iter().any(|c| c.deleted > 0);
    let any_insertions = changes.iter().any(|c| c.inserted > 0);

    let unchanged = match policy {
        Some(policy) => changes
            .iter()
            .all(|c| policy.change_is_ignorable(c, file0, file1)),
        None => false,
    };

    let kind = if unchanged {
        HunkKind::Unchanged
    } else {
        match (any_deletions, any_insertions) {
            (true, true) => HunkKind::Changed,
            (true, false) => HunkKind::Old,
            (false, true) => HunkKind::New,
            (false, false) => unreachable!("a Change must touch a line"),
        }
    };

    HunkExtent {
        kind,
        first0,
        last0,
        first1,
        last1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_index::FileTime;

    fn view(lines: &[&str]) -> FileView {
        FileView::new(
            "f",
            lines.iter().map(|l| l.as_bytes().to_vec()).collect(),
            0,
            FileTime { seconds: 0, nanos: 0 },
            false,
        )
    }

    #[test]
    fn delete_only_run_is_old() {
        let f0 = view(&["a\n", "b\n", "c\n"]);
        let f1 = view(&["a\n", "c\n"]);
        let changes = [Change::new(1, 1, 1, 0)];
        let extent = analyze(&changes, &f0, &f1, None);
        assert_eq!(extent.kind, HunkKind::Old);
        assert_eq!((extent.first0, extent.last0), (1, 1));
        // Zero lines contributed on the insert side: empty range at the
        // insertion point.
        assert_eq!((extent.first1, extent.last1), (1, 0));
    }

    #[test]
    fn insert_only_run_is_new() {
        let f0 = view(&["a\n", "b\n"]);
        let f1 = view(&["a\n", "x\n", "b\n"]);
        let changes = [Change::new(1, 1, 0, 1)];
        let extent = analyze(&changes, &f0, &f1, None);
        assert_eq!(extent.kind, HunkKind::New);
        assert_eq!((extent.first0, extent.last0), (1, 0));
    }

    #[test]
    fn mixed_run_is_changed() {
        let f0 = view(&["a\n"]);
        let f1 = view(&["b\n"]);
        let changes = [Change::new(0, 0, 1, 1)];
        let extent = analyze(&changes, &f0, &f1, None);
        assert_eq!(extent.kind, HunkKind::Changed);
    }

    #[test]
    fn multi_change_run_spans_first_to_last() {
        let f0 = view(&["a\n", "b\n", "c\n", "d\n", "e\n"]);
        let f1 = view(&["a\n", "B\n", "c\n", "D\n", "e\n"]);
        let changes = [Change::new(1, 1, 1, 1), Change::new(3, 3, 1, 1)];
        let extent = analyze(&changes, &f0, &f1, None);
        assert_eq!(extent.first0, 1);
        assert_eq!(extent.last0, 3);
        assert_eq!(extent.first1, 1);
        assert_eq!(extent.last1, 3);
    }
}
