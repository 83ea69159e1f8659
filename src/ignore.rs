//! `IgnorePolicy` and script preparation.

use crate::change::{Change, ChangeScript};
use crate::hunk::{self, HunkKind};
use crate::line_index::FileView;
use crate::matcher::Matcher;
use std::rc::Rc;

/// Decides whether a line, or a whole [`Change`], is ignorable.
#[derive(Clone, Default)]
pub struct IgnorePolicy {
    pub ignore_blank_lines: bool,
    pub ignore_regex: Option<Rc<dyn Matcher>>,
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| b == b' ' || b == b'\t' || b == b'\n' || b == b'\r')
}

impl IgnorePolicy {
    #[must_use]
    pub fn new(ignore_blank_lines: bool, ignore_regex: Option<Rc<dyn Matcher>>) -> Self {
        Self {
            ignore_blank_lines,
            ignore_regex,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ignore_blank_lines || self.ignore_regex.is_some()
    }

    /// A line of either file is ignorable iff it is blank and
    /// `ignore_blank_lines` is on, OR `ignore_regex` is present and matches.
    #[must_use]
    pub fn is_ignorable_line(&self, line: &[u8]) -> bool {
        if self.ignore_blank_lines && is_blank(line) {
            return true;
        }
        if let Some(re) = &self.ignore_regex {
            // Exclude the trailing newline from the search window, matching
            // the source's `line length = linbuf[i+1] - linbuf[i] - 1`.
            let len = line.len().saturating_sub(usize::from(line.ends_with(b"\n")));
            if re.search(line, 0, len).is_some() {
                return true;
            }
        }
        false
    }

    /// True iff every deleted line (file 0) and every inserted line (file 1)
    /// of `change` is ignorable.
    #[must_use]
    pub fn change_is_ignorable(&self, change: &Change, file0: &FileView, file1: &FileView) -> bool {
        (0..change.deleted as i64).all(|k| self.is_ignorable_line(file0.line(change.line0 + k)))
            && (0..change.inserted as i64)
                .all(|k| self.is_ignorable_line(file1.line(change.line1 + k)))
    }
}

/// Pre-mark every [`Change`] in `script` with its `ignore` flag.
///
/// This is the only place `Change::ignore` is ever written; emitters treat
/// it as read-only afterward.
pub fn mark_ignorable_changes(script: &mut ChangeScript, policy: &IgnorePolicy, file0: &FileView, file1: &FileView) {
    if !policy.is_active() {
        for c in script.as_mut_slice() {
            c.ignore = false;
        }
        return;
    }

    for i in 0..script.len() {
        let change = *script.get(i).unwrap();
        let single = [change];
        let extent = hunk::analyze(&single, file0, file1, Some(policy));
        script.set_ignore(i, extent.kind == HunkKind::Unchanged);
    }
}
