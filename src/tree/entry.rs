//! Per-entry record produced during traversal

use std::path::PathBuf;

/// One filesystem entry as seen by the walker.
///
/// Entries live only long enough to be rendered and, for directories,
/// descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name, lossily converted for display.
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Guides accumulated from ancestors (`│   ` or four spaces per level).
    pub prefix: String,
}

impl Entry {
    /// The connector drawn before this entry's name.
    pub fn connector(is_last: bool) -> &'static str {
        if is_last { "└── " } else { "├── " }
    }

    /// The prefix handed to this entry's children.
    pub fn child_prefix(&self, is_last: bool) -> String {
        if is_last {
            format!("{}    ", self.prefix)
        } else {
            format!("{}│   ", self.prefix)
        }
    }

    /// Full rendered line without a trailing newline.
    pub fn line(&self, is_last: bool) -> String {
        format!("{}{}{}", self.prefix, Self::connector(is_last), self.name)
    }
}
