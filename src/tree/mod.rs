//! Directory tree walking logic
//!
//! `StreamingWalker` visits a directory depth-first and hands each entry to a
//! `StreamingOutput` sink as soon as it is discovered, so memory stays
//! O(depth) regardless of how many files the tree holds.

mod config;
mod entry;
mod walker;

pub use config::{DEFAULT_EXCLUDED_DIRS, TreeConfig};
pub use entry::Entry;
pub use walker::{StreamingOutput, StreamingWalker, WalkSummary};
