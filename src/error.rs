//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a render.
///
/// Unreadable directories below the root are not errors; the walker skips them.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
