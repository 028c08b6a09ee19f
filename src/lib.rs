//! Twig - print a directory as a tree, skipping build and dependency folders

pub mod error;
pub mod file_utils;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use file_utils::absolute_path;
pub use output::{StreamingFormatter, render_to_string};
pub use tree::{
    DEFAULT_EXCLUDED_DIRS, Entry, StreamingOutput, StreamingWalker, TreeConfig, WalkSummary,
};
