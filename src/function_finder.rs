//! `FunctionFinder`: locates the nearest function-header
//! line preceding a hunk, with a search cursor carried across invocations
//! within a single emit pass.

use crate::line_index::FileView;
use crate::matcher::Matcher;

/// Memoization cursor for one emit pass. Not global state —
/// construct one per call to
/// [`crate::format::context::emit`] / [`crate::format::unified::emit`] and
/// thread it through every hunk of that pass.
#[derive(Debug, Clone)]
pub struct FunctionFinder {
    last_search: i64,
    last_match: Option<i64>,
}

impl FunctionFinder {
    /// Reinitialize to `-prefix_lines` / "none".
    #[must_use]
    pub fn new(prefix_lines: i64) -> Self {
        Self {
            last_search: -prefix_lines,
            last_match: None,
        }
    }

    /// Find the nearest line before `linenum` in `file` matching `regex`.
    ///
    /// Returns the internal line index of the match, if any. Sticky: if the
    /// downward scan from `linenum` back to the previous search point finds
    /// nothing new, the previous match (if any) is returned again.
    pub fn find(&mut self, file: &FileView, linenum: i64, regex: &dyn Matcher) -> Option<i64> {
        let previous = self.last_search;
        self.last_search = linenum;

        let mut i = linenum - 1;
        while previous <= i {
            let line = file.line(i);
            let len = line.len() - usize::from(line.ends_with(b"\n"));
            if regex.search(line, 0, len).is_some() {
                self.last_match = Some(i);
                return self.last_match;
            }
            i -= 1;
        }
        self.last_match
    }
}

/// Render a matched function-header line for display: skip leading
/// whitespace, keep at most 40 bytes, stop at the first newline, and
/// right-trim trailing whitespace.
#[must_use]
pub fn truncate_label(line: &[u8]) -> Vec<u8> {
    const MAX_LEN: usize = 40;

    let stripped_start = line
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    let rest = &line[stripped_start..];

    let content_end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let capped_end = content_end.min(MAX_LEN);
    let mut out = rest[..capped_end].to_vec();

    while matches!(out.last(), Some(b' ') | Some(b'\t') | Some(b'\r')) {
        out.pop();
    }
    out
}
