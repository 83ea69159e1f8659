//! Classic context-diff output.

use std::io::Write;

use crate::change::{Change, ChangeScript};
use crate::config::ConfigOptions;
use crate::error::EmitError;
use crate::function_finder::{truncate_label, FunctionFinder};
use crate::grouper::group_all;
use crate::hunk::HunkKind;
use crate::line_index::FileView;

use super::header::{emit_header, Style};
use super::line_output::print_1_line;
use super::range::context_range;
use super::{analyze_group, build_policy, expand_window};

/// Emit a classic context diff for `script` onto `out`. Emits nothing at
/// all (not even a header) if `script` is empty or every hunk it contains
/// is suppressed as ignorable. Returns whether anything was written.
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

    emit_header(out, file0, file1, Style::Context, config)?;

    let mut finder = config
        .function_regex
        .as_ref()
        .map(|_| FunctionFinder::new(file0.prefix_lines()));

    for (start, end, extent) in groups {
        let run = &changes[start..end];
        let extent = expand_window(extent, config.context_lines, file0, file1);

        write!(out, "***************")?;
        if let (Some(finder), Some(regex)) = (finder.as_mut(), config.function_regex.as_ref()) {
            if let Some(idx) = finder.find(file0, extent.first0, regex.as_ref()) {
                let label = truncate_label(file0.line(idx));
                out.write_all(b" ")?;
                out.write_all(&label)?;
            }
        }
        writeln!(out)?;

        let (ta0, tb0) = file0.translate(extent.first0, extent.last0);
        writeln!(out, "*** {} ****", context_range(ta0, tb0))?;
        if matches!(extent.kind, HunkKind::Old | HunkKind::Changed) {
            emit_side(out, file0, run, extent.first0, extent.last0, Side::Old, config)?;
        }

        let (ta1, tb1) = file1.translate(extent.first1, extent.last1);
        writeln!(out, "--- {} ----", context_range(ta1, tb1))?;
        if matches!(extent.kind, HunkKind::New | HunkKind::Changed) {
            emit_side(out, file1, run, extent.first1, extent.last1, Side::New, config)?;
        }
    }

    Ok(true)
}

#[derive(Clone, Copy)]
enum Side {
    Old,
    New,
}

fn emit_side(
    out: &mut dyn Write,
    file: &FileView,
    run: &[Change],
    first: i64,
    last: i64,
    side: Side,
    config: &ConfigOptions,
) -> std::io::Result<()> {
    let mut idx = 0usize;
    for i in first..=last {
        while idx < run.len() && enclosing_end(&run[idx], side) <= i {
            idx += 1;
        }
        let marker = if idx < run.len() && i >= enclosing_start(&run[idx], side) && i < enclosing_end(&run[idx], side) {
            let c = run[idx];
            if c.deleted > 0 && c.inserted > 0 {
                b'!'
            } else {
                match side {
                    Side::Old => b'-',
                    Side::New => b'+',
                }
            }
        } else {
            b' '
        };

        print_1_line(
            out,
            Some(&[marker, b' ']),
            file.line(i),
            config.expand_tabs,
            config.tabsize,
            file.line_is_missing_newline(i),
        )?;
    }
    Ok(())
}

fn enclosing_start(c: &Change, side: Side) -> i64 {
    match side {
        Side::Old => c.line0,
        Side::New => c.line1,
    }
}

fn enclosing_end(c: &Change, side: Side) -> i64 {
    match side {
        Side::Old => c.line0_end(),
        Side::New => c.line1_end(),
    }
}
