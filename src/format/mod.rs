//! Output formatters driving the core: [`context`] (classic context diff)
//! and [`unified`] (unified diff).

pub mod context;
pub mod header;
pub mod line_output;
pub mod range;
pub mod unified;

use crate::change::Change;
use crate::config::ConfigOptions;
use crate::hunk::{self, HunkExtent};
use crate::ignore::IgnorePolicy;
use crate::line_index::FileView;

fn build_policy(config: &ConfigOptions) -> Option<IgnorePolicy> {
    if config.ignore_policy_active() {
        Some(IgnorePolicy::new(
            config.ignore_blank_lines,
            config.ignore_regex.clone(),
        ))
    } else {
        None
    }
}

/// Expand a hunk's line-number window with `context_lines` of surrounding
/// context, clamped to each file's valid range. Shared verbatim by both
/// emitters.
fn expand_window(extent: HunkExtent, context_lines: u32, file0: &FileView, file1: &FileView) -> HunkExtent {
    let context_lines = context_lines as i64;
    HunkExtent {
        first0: (extent.first0 - context_lines).max(-file0.prefix_lines()),
        first1: (extent.first1 - context_lines).max(-file1.prefix_lines()),
        last0: (extent.last0 + context_lines).min(file0.line_count() - 1),
        last1: (extent.last1 + context_lines).min(file1.line_count() - 1),
        ..extent
    }
}

/// Re-analyze a contiguous run using the same policy script preparation
/// used, so emitters never need the original `ChangeScript` wrapper — a
/// plain `&[Change]` slice suffices.
fn analyze_group(changes: &[Change], file0: &FileView, file1: &FileView, policy: Option<&IgnorePolicy>) -> HunkExtent {
    hunk::analyze(changes, file0, file1, policy)
}
