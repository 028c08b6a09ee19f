//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line
//! as soon as the walker reports it, for use with `StreamingWalker`.

use std::io::{self, Write};
use std::path::Path;

use crate::tree::{Entry, StreamingOutput, WalkSummary};

const HEADER_LABEL: &str = "Tree structure for: ";

/// Plain text formatter over any writer.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: Write> {
    out: W,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_header(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "{}{}", HEADER_LABEL, root.display())
    }

    fn output_entry(&mut self, entry: &Entry, is_last: bool) -> io::Result<()> {
        writeln!(self.out, "{}", entry.line(is_last))
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn entry(name: &str, prefix: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_dir: false,
            prefix: prefix.to_string(),
        }
    }

    fn written(formatter: StreamingFormatter<Vec<u8>>) -> String {
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_header_line() {
        let mut formatter = StreamingFormatter::new(Vec::new());
        formatter.output_header(Path::new("/tmp/project")).unwrap();
        assert_eq!(written(formatter), "Tree structure for: /tmp/project\n");
    }

    #[test]
    fn test_entry_lines() {
        let mut formatter = StreamingFormatter::new(Vec::new());
        formatter.output_entry(&entry("a.txt", ""), false).unwrap();
        formatter.output_entry(&entry("b.txt", "│   "), true).unwrap();
        formatter.output_entry(&entry("c.txt", ""), true).unwrap();
        assert_eq!(
            written(formatter),
            "├── a.txt\n│   └── b.txt\n└── c.txt\n"
        );
    }

    #[test]
    fn test_finish_writes_nothing() {
        let mut formatter = StreamingFormatter::new(Vec::new());
        formatter.finish(&WalkSummary::default()).unwrap();
        assert!(written(formatter).is_empty());
    }

    /// Writer that refuses every write.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let mut formatter = StreamingFormatter::new(ClosedPipe);
        let err = formatter.output_entry(&entry("a", ""), true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
