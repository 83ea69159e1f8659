//! Unified-diff output.

use std::io::Write;

use crate::change::ChangeScript;
use crate::config::ConfigOptions;
use crate::error::EmitError;
use crate::function_finder::{truncate_label, FunctionFinder};
use crate::grouper::group_all;
use crate::hunk::HunkKind;
use crate::line_index::FileView;

use super::header::{emit_header, Style};
use super::line_output::print_1_line;
use super::range::unified_range;
use super::{analyze_group, build_policy, expand_window};

/// Emit a unified diff for `script` onto `out`. Emits nothing at all if
/// `script` is empty or every hunk it contains is suppressed as ignorable.
/// Returns whether anything was written.
pub fn emit(
    out: &mut dyn Write,
    file0: &FileView,
    file1: &FileView,
    script: &ChangeScript,
    config: &ConfigOptions,
) -> Result<bool, EmitError> {
    if script.is_empty() {
        return Ok(false);
    }

    let policy = build_policy(config);
    let changes = script.as_slice();

    let groups: Vec<_> = group_all(changes, config.context_lines)
        .into_iter()
        .map(|(start, end)| (start, end, analyze_group(&changes[start..end], file0, file1, policy.as_ref())))
        .filter(|(_, _, extent)| extent.kind != HunkKind::Unchanged)
        .collect();

    if groups.is_empty() {
        return Ok(false);
    }

    emit_header(out, file0, file1, Style::Unified, config)?;

    let mut finder = config
        .function_regex
        .as_ref()
        .map(|_| FunctionFinder::new(file0.prefix_lines()));

    for (start, end, extent) in groups {
        let run = &changes[start..end];
        let extent = expand_window(extent, config.context_lines, file0, file1);

        let (ta0, tb0) = file0.translate(extent.first0, extent.last0);
        let (ta1, tb1) = file1.translate(extent.first1, extent.last1);
        write!(out, "@@ -{} +{} @@", unified_range(ta0, tb0), unified_range(ta1, tb1))?;
        if let (Some(finder), Some(regex)) = (finder.as_mut(), config.function_regex.as_ref()) {
            if let Some(idx) = finder.find(file0, extent.first0, regex.as_ref()) {
                let label = truncate_label(file0.line(idx));
                out.write_all(b" ")?;
                out.write_all(&label)?;
            }
        }
        writeln!(out)?;

        let mut i = extent.first0;
        let mut j = extent.first1;
        let mut next = 0usize;

        while i <= extent.last0 || j <= extent.last1 {
            let at_context = next >= run.len() || i < run[next].line0;
            if at_context {
                let line = file0.line(i);
                let prefix = context_line_prefix(config.initial_tab, config.suppress_blank_empty, line);
                let missing = file0.line_is_missing_newline(i) || file1.line_is_missing_newline(j);
                print_1_line(out, Some(&prefix), line, config.expand_tabs, config.tabsize, missing)?;
                i += 1;
                j += 1;
            } else {
                let change = run[next];
                for k in 0..change.deleted as i64 {
                    let line = file0.line(i + k);
                    let prefix = changed_line_prefix(b'-', config.initial_tab, config.suppress_blank_empty, line);
                    print_1_line(
                        out,
                        Some(&prefix),
                        line,
                        config.expand_tabs,
                        config.tabsize,
                        file0.line_is_missing_newline(i + k),
                    )?;
                }
                i += change.deleted as i64;

                for k in 0..change.inserted as i64 {
                    let line = file1.line(j + k);
                    let prefix = changed_line_prefix(b'+', config.initial_tab, config.suppress_blank_empty, line);
                    print_1_line(
                        out,
                        Some(&prefix),
                        line,
                        config.expand_tabs,
                        config.tabsize,
                        file1.line_is_missing_newline(j + k),
                    )?;
                }
                j += change.inserted as i64;
                next += 1;
            }
        }
    }

    Ok(true)
}

fn context_line_prefix(initial_tab: bool, suppress_blank_empty: bool, line: &[u8]) -> Vec<u8> {
    if suppress_blank_empty && line == b"\n" {
        return Vec::new();
    }
    vec![if initial_tab { b'\t' } else { b' ' }]
}

fn changed_line_prefix(marker: u8, initial_tab: bool, suppress_blank_empty: bool, line: &[u8]) -> Vec<u8> {
    let mut prefix = vec![marker];
    if initial_tab && !(suppress_blank_empty && line == b"\n") {
        prefix.push(b'\t');
    }
    prefix
}
