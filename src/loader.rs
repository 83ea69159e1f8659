//! Reads two files into [`FileView`]s and an initial [`ChangeScript`].
//!
//! File I/O sits outside the core formatting logic, but the `difflace`
//! binary needs a concrete producer of the two read-only line-indexed file
//! views the formatters assume they are handed. This module is that
//! producer; it never touches the formatter internals.

use std::fs;
use std::io;
use std::path::Path;

use crate::engine;
use crate::line_index::{FileTime, FileView};

/// Split `content` into lines, each retaining its trailing `\n` except
/// possibly the last. Returns the lines and whether the final line is
/// missing its trailing newline.
fn split_lines(content: &[u8]) -> (Vec<Vec<u8>>, bool) {
    if content.is_empty() {
        return (Vec::new(), false);
    }
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &b) in content.iter().enumerate() {
        if b == b'\n' {
            lines.push(content[start..=i].to_vec());
            start = i + 1;
        }
    }
    let missing_newline = start < content.len();
    if missing_newline {
        lines.push(content[start..].to_vec());
    }
    (lines, missing_newline)
}

fn common_prefix_len(a: &[Vec<u8>], b: &[Vec<u8>]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn mtime(path: &Path) -> io::Result<FileTime> {
    let meta = fs::metadata(path)?;
    let modified = meta.modified()?;
    let duration = modified
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(FileTime {
        seconds: duration.as_secs() as i64,
        nanos: duration.subsec_nanos(),
    })
}

/// Load both files and compute the edit script between them (via
/// `crate::engine`. The common leading run of
/// identical lines is tracked as each [`FileView`]'s `prefix_lines` rather
/// than being re-diffed.
pub fn load_pair(path0: &Path, path1: &Path) -> io::Result<(FileView, FileView, crate::change::ChangeScript)> {
    let raw0 = fs::read(path0)?;
    let raw1 = fs::read(path1)?;
    let (lines0, missing0) = split_lines(&raw0);
    let (lines1, missing1) = split_lines(&raw1);

    let prefix = common_prefix_len(&lines0, &lines1);
    let script = engine::diff_lines(&lines0[prefix..], &lines1[prefix..]);

    let view0 = FileView::new(
        path0.to_string_lossy().to_string(),
        lines0,
        prefix as i64,
        mtime(path0)?,
        missing0,
    );
    let view1 = FileView::new(
        path1.to_string_lossy().to_string(),
        lines1,
        prefix as i64,
        mtime(path1)?,
        missing1,
    );

    Ok((view0, view1, script))
}
