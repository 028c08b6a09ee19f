//! Tree formatting and display
//!
//! `StreamingFormatter` renders entries as plain text lines the moment the
//! walker hands them over. `render_to_string` runs a full walk into memory.

mod streaming;

pub use streaming::StreamingFormatter;

use std::path::Path;

use crate::error::Result;
use crate::tree::{StreamingWalker, TreeConfig};

/// Render the tree under `root` into a `String`.
pub fn render_to_string(root: &Path, config: TreeConfig) -> Result<String> {
    let mut formatter = StreamingFormatter::new(Vec::new());
    StreamingWalker::new(config).walk_streaming(root, &mut formatter)?;
    Ok(String::from_utf8_lossy(&formatter.into_inner()).into_owned())
}
