//! A minimal LCS-based diff engine producing a [`ChangeScript`].
//!
//! The diffing algorithm itself is treated as a pluggable external
//! collaborator with a specified interface (a prebuilt [`ChangeScript`]);
//! this module is the concrete instantiation provided so the `difflace`
//! binary has something to hand the formatters. It is deliberately narrow
//! (`O(n*m)` dynamic programming, no Myers-style heuristics) and is not
//! meant to compete with `diff(1)`'s engine.

use crate::change::{Change, ChangeScript};

/// Compute an edit script turning `a` into `b`, where each slice holds one
/// file's lines (as compared by byte equality).
#[must_use]
pub fn diff_lines(a: &[Vec<u8>], b: &[Vec<u8>]) -> ChangeScript {
    let ops = longest_common_subsequence_ops(a, b);
    ChangeScript::new(group_into_changes(&ops))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Keep,
    Delete,
    Insert,
}

/// Backtrack a standard LCS dynamic-programming table into a sequence of
/// keep/delete/insert operations in forward (0-indexed) order.
fn longest_common_subsequence_ops(a: &[Vec<u8>], b: &[Vec<u8>]) -> Vec<Op> {
    let (m, n) = (a.len(), b.len());
    let mut table = vec![vec![0u32; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < m && j < n {
        if a[i] == b[j] {
            ops.push(Op::Keep);
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            ops.push(Op::Delete);
            i += 1;
        } else {
            ops.push(Op::Insert);
            j += 1;
        }
    }
    ops.extend(std::iter::repeat(Op::Delete).take(m - i));
    ops.extend(std::iter::repeat(Op::Insert).take(n - j));
    ops
}

/// Collapse a run of `Delete`/`Insert` ops between `Keep`s into a single
/// [`Change`], matching the source's convention of one `Change` per
/// contiguous non-equal region rather than one per line.
fn group_into_changes(ops: &[Op]) -> Vec<Change> {
    let mut changes = Vec::new();
    let (mut line0, mut line1) = (0i64, 0i64);
    let mut idx = 0usize;

    while idx < ops.len() {
        match ops[idx] {
            Op::Keep => {
                line0 += 1;
                line1 += 1;
                idx += 1;
            }
            Op::Delete | Op::Insert => {
                let start0 = line0;
                let start1 = line1;
                let mut deleted = 0u32;
                let mut inserted = 0u32;
                while idx < ops.len() && ops[idx] != Op::Keep {
                    match ops[idx] {
                        Op::Delete => {
                            deleted += 1;
                            line0 += 1;
                        }
                        Op::Insert => {
                            inserted += 1;
                            line1 += 1;
                        }
                        Op::Keep => unreachable!(),
                    }
                    idx += 1;
                }
                changes.push(Change::new(start0, start1, deleted, inserted));
            }
        }
    }

    changes
}
