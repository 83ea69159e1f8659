//! Diff header emission.

use crate::config::ConfigOptions;
use crate::line_index::FileView;
use crate::time_format::format_time;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Context,
    Unified,
}

/// Emit the pair of file-identification lines preceding the body.
pub fn emit_header(
    out: &mut dyn Write,
    file0: &FileView,
    file1: &FileView,
    style: Style,
    config: &ConfigOptions,
) -> io::Result<()> {
    let (marker0, marker1) = match style {
        Style::Context => ("***", "---"),
        Style::Unified => ("---", "+++"),
    };

    let line0 = identification_line(file0, config.file_labels[0].as_deref(), config.time_format.as_deref());
    let line1 = identification_line(file1, config.file_labels[1].as_deref(), config.time_format.as_deref());

    writeln!(out, "{marker0} {line0}")?;
    writeln!(out, "{marker1} {line1}")?;
    Ok(())
}

fn identification_line(file: &FileView, label: Option<&str>, time_format: Option<&str>) -> String {
    if let Some(label) = label {
        return label.to_string();
    }
    let time = format_time(time_format, file.modification_time());
    format!("{}\t{}", file.name(), time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_index::FileTime;

    fn view(name: &str) -> FileView {
        FileView::new(
            name,
            vec![b"a\n".to_vec()],
            0,
            FileTime { seconds: 0, nanos: 0 },
            false,
        )
    }

    #[test]
    fn unified_header_uses_dash_dash_dash_then_plus_plus_plus() {
        let f0 = view("a.txt");
        let f1 = view("b.txt");
        let mut buf = Vec::new();
        emit_header(&mut buf, &f0, &f1, Style::Unified, &ConfigOptions::new(3)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("--- a.txt\t"));
        assert!(text.contains("+++ b.txt\t"));
    }

    #[test]
    fn context_header_uses_stars_then_dashes() {
        let f0 = view("a.txt");
        let f1 = view("b.txt");
        let mut buf = Vec::new();
        emit_header(&mut buf, &f0, &f1, Style::Context, &ConfigOptions::new(3)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("*** a.txt\t"));
        assert!(text.contains("--- b.txt\t"));
    }

    #[test]
    fn label_override_replaces_name_and_time_verbatim() {
        let f0 = view("a.txt");
        let f1 = view("b.txt");
        let cfg = ConfigOptions::new(3).with_labels(Some("custom label".to_string()), None);
        let mut buf = Vec::new();
        emit_header(&mut buf, &f0, &f1, Style::Unified, &cfg).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("--- custom label\n"));
    }
}
