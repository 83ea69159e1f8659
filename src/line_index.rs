//! Read-only, line-indexed access to a file's contents.
//!
//! Internal line numbers are origin-0 and may be negative in
//! `[-prefix_lines, 0)` to address lines in a common prefix that the diff
//! engine skipped over without hashing. User-visible ("real") line numbers
//! are origin-1 and are produced by [`FileView::translate`].

/// Seconds-and-nanoseconds modification time, independent of any particular
/// time library so the core stays decoupled from the formatter used to
/// render it (see [`crate::time_format`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTime {
    pub seconds: i64,
    pub nanos: u32,
}

/// A read-only, line-indexed view over one side of a comparison.
#[derive(Debug, Clone)]
pub struct FileView {
    name: String,
    label: Option<String>,
    modification_time: FileTime,
    /// Number of leading lines common to both files and skipped by the
    /// diff engine's hashing pass. Addressable via negative indices.
    prefix_lines: i64,
    /// Lines in origin-0 order, including the `prefix_lines` common lines
    /// at the front so `line(i)` can serve negative indices too.
    lines: Vec<Vec<u8>>,
    /// True if the final line in `lines` has no trailing newline.
    missing_newline: bool,
}

impl FileView {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        lines: Vec<Vec<u8>>,
        prefix_lines: i64,
        modification_time: FileTime,
        missing_newline: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: None,
            modification_time,
            prefix_lines,
            lines,
            missing_newline,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of lines past the common prefix, i.e. the valid range for
    /// `line(i)` is `[-prefix_lines, line_count)`.
    #[must_use]
    pub fn line_count(&self) -> i64 {
        self.lines.len() as i64 - self.prefix_lines
    }

    #[must_use]
    pub fn prefix_lines(&self) -> i64 {
        self.prefix_lines
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn modification_time(&self) -> FileTime {
        self.modification_time
    }

    /// Whether the physically last line (internal index `line_count - 1`)
    /// lacks a trailing newline.
    #[must_use]
    pub fn missing_newline(&self) -> bool {
        self.missing_newline
    }

    fn storage_index(&self, i: i64) -> usize {
        (i + self.prefix_lines) as usize
    }

    /// Bytes of line `i`, `i ∈ [-prefix_lines, line_count)`, including its
    /// trailing newline unless it is the final, newline-less line.
    #[must_use]
    pub fn line(&self, i: i64) -> &[u8] {
        &self.lines[self.storage_index(i)]
    }

    /// True if the physical line at internal index `i` is the file's last
    /// line and that line has no trailing newline.
    #[must_use]
    pub fn line_is_missing_newline(&self, i: i64) -> bool {
        self.missing_newline && i == self.line_count() - 1
    }

    /// Translate an internal origin-0 half-open-ish pair `(a, b)` — where
    /// `b` may be `a - 1` to denote an empty range — into real origin-1
    /// numbers. Real numbers are always `>= 1` even when `a`/`b` fall in
    /// the negative prefix range, matching the source convention that an
    /// empty range at the very start of the file is still reported as line
    /// 1 minus the usual "before" adjustment performed by the caller.
    #[must_use]
    pub fn translate(&self, a: i64, b: i64) -> (i64, i64) {
        (self.real_line(a), self.real_line(b))
    }

    /// Internal index `i` lives at storage slot `i + prefix_lines`
    /// (see [`Self::storage_index`]); the real, origin-1 line number is
    /// that same shift plus one.
    fn real_line(&self, internal: i64) -> i64 {
        internal + self.prefix_lines + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn line_count_excludes_prefix() {
        let v = FileView::new(
            "f",
            vec![b"a\n".to_vec(), b"b\n".to_vec(), b"c\n".to_vec()],
            1,
            FileTime { seconds: 0, nanos: 0 },
            false,
        );
        assert_eq!(v.line_count(), 2);
        assert_eq!(v.line(-1), b"a\n");
        assert_eq!(v.line(0), b"b\n");
        assert_eq!(v.line(1), b"c\n");
    }

    #[test]
    fn translate_is_origin_1() {
        let v = view(&["a\n", "b\n"]);
        assert_eq!(v.translate(0, 1), (1, 2));
    }

    #[test]
    fn translate_accounts_for_nonzero_prefix() {
        // "a\nb\n" shared, then "c\nd\ne\n" as the post-prefix tail.
        let v = FileView::new(
            "f",
            vec![
                b"a\n".to_vec(),
                b"b\n".to_vec(),
                b"c\n".to_vec(),
                b"d\n".to_vec(),
                b"e\n".to_vec(),
            ],
            2,
            FileTime { seconds: 0, nanos: 0 },
            false,
        );
        assert_eq!(v.translate(-2, 2), (1, 5));
    }

    #[test]
    fn missing_newline_only_on_last_line() {
        let mut v = view(&["a\n", "b"]);
        v.missing_newline = true;
        assert!(!v.line_is_missing_newline(0));
        assert!(v.line_is_missing_newline(1));
    }

    #[test]
    fn label_overrides_name_for_display() {
        let v = view(&["a\n"]).with_label("custom.txt");
        assert_eq!(v.name(), "f");
        assert_eq!(v.label(), Some("custom.txt"));
    }
}
