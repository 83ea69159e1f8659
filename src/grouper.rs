//! `HunkGrouper`: coalesces adjacent changes into a single
//! displayed hunk whenever the context windows around them would overlap
//! or abut.

use crate::change::Change;

/// Given `changes[start..]`, returns the index (exclusive) one past the
/// last [`Change`] belonging to the same displayed hunk as `changes[start]`.
///
/// Walks forward while the gap between consecutive changes, measured in
/// file 0, is strictly less than the threshold (`context_lines` if the next
/// change is ignorable, `2 * context_lines + 1` otherwise). Asserts the gap
/// measured in file 1 agrees — an inconsistent script is a bug in the
/// engine and is not recoverable.
#[must_use]
pub fn group_end(changes: &[Change], start: usize, context_lines: u32) -> usize {
    assert!(start < changes.len(), "start must be a valid index");

    let mut end = start + 1;
    while end < changes.len() {
        let prev = &changes[end - 1];
        let next = &changes[end];

        let gap0 = next.line0 - prev.line0_end();
        let gap1 = next.line1 - prev.line1_end();
        assert_eq!(
            gap0, gap1,
            "inconsistent change script: gap in file 0 ({gap0}) does not match gap in file 1 ({gap1})"
        );

        let threshold: i64 = if next.ignore {
            context_lines as i64
        } else {
            2 * context_lines as i64 + 1
        };

        if gap0 < threshold {
            end += 1;
        } else {
            break;
        }
    }
    end
}

/// Split the whole script into displayed-hunk groups, each a `(start, end)`
/// index range into `changes` (`end` exclusive).
#[must_use]
pub fn group_all(changes: &[Change], context_lines: u32) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < changes.len() {
        let end = group_end(changes, start, context_lines);
        groups.push((start, end));
        start = end;
    }
    groups
}
