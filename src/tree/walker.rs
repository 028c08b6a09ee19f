//! StreamingWalker - streams entries without building the tree in memory

use std::io;
use std::path::Path;

use log::debug;

use crate::error::{Result, TreeError};
use crate::file_utils::absolute_path;

use super::config::TreeConfig;
use super::entry::Entry;

/// Callback for streaming output - receives entries in display order.
pub trait StreamingOutput {
    /// Called once, before any entry, with the resolved root path.
    fn output_header(&mut self, root: &Path) -> io::Result<()>;

    fn output_entry(&mut self, entry: &Entry, is_last: bool) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// Counts of rendered entries. The root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

/// Depth-first tree walker that outputs entries as it finds them.
/// Uses O(depth) memory: one sorted sibling list per level being visited.
pub struct StreamingWalker {
    config: TreeConfig,
}

impl StreamingWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream the header and every entry to `output`.
    ///
    /// The root must exist and be a directory. Directories below it that
    /// cannot be listed render with no children.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary> {
        if !root.exists() {
            return Err(TreeError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let resolved = absolute_path(root)?;
        output.output_header(&resolved)?;

        let mut summary = WalkSummary::default();
        self.walk_dir(root, "", output, &mut summary)?;
        output.finish(&summary)?;

        debug!(
            "rendered {} directories, {} files under {}",
            summary.directories,
            summary.files,
            resolved.display()
        );
        Ok(summary)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        let Some(entries) = self.read_entries(path, prefix) else {
            return Ok(());
        };

        let count = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == count;
            output.output_entry(entry, is_last)?;

            if entry.is_dir {
                summary.directories += 1;
                let child_prefix = entry.child_prefix(is_last);
                self.walk_dir(&entry.path, &child_prefix, output, summary)?;
            } else {
                summary.files += 1;
            }
        }
        Ok(())
    }

    /// Read, sort, and filter the children of `path`.
    ///
    /// Returns `None` when the directory cannot be listed.
    fn read_entries(&self, path: &Path, prefix: &str) -> Option<Vec<Entry>> {
        let entries = match std::fs::read_dir(path) {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable directory {}: {}", path.display(), err);
                return None;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        Some(
            entries
                .into_iter()
                .filter_map(|dir_entry| {
                    let file_name = dir_entry.file_name();
                    let entry_path = dir_entry.path();
                    let is_dir = entry_path.is_dir();

                    if is_dir
                        && file_name
                            .to_str()
                            .is_some_and(|name| self.config.is_excluded(name))
                    {
                        debug!("skipping excluded directory {}", entry_path.display());
                        return None;
                    }

                    Some(Entry {
                        name: file_name.to_string_lossy().into_owned(),
                        path: entry_path,
                        is_dir,
                        prefix: prefix.to_string(),
                    })
                })
                .collect(),
        )
    }
}

impl Default for StreamingWalker {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}
