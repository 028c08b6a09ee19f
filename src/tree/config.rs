//! Configuration types for the tree walker

use std::collections::BTreeSet;

/// Directory names skipped unless a caller supplies its own set.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "__pycache__"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Directory names that are neither printed nor descended into.
    /// Matched against the exact entry name; files are never excluded.
    pub excluded_dirs: BTreeSet<String>,
}

impl TreeConfig {
    /// Build a config with an alternate exclusion set.
    pub fn with_excluded_dirs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_dirs: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_dirs.contains(dir_name)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::with_excluded_dirs(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_build_dirs() {
        let config = TreeConfig::default();
        assert!(config.is_excluded("node_modules"));
        assert!(config.is_excluded("dist"));
        assert!(config.is_excluded("__pycache__"));
        assert_eq!(config.excluded_dirs.len(), 3);
    }

    #[test]
    fn test_exclusion_is_exact_match() {
        let config = TreeConfig::default();
        assert!(!config.is_excluded("dist2"));
        assert!(!config.is_excluded("Dist"));
        assert!(!config.is_excluded("node_module"));
    }

    #[test]
    fn test_custom_exclusion_set() {
        let config = TreeConfig::with_excluded_dirs(["target", ".git"]);
        assert!(config.is_excluded("target"));
        assert!(config.is_excluded(".git"));
        assert!(!config.is_excluded("node_modules"));
    }

    #[test]
    fn test_empty_exclusion_set() {
        let config = TreeConfig::with_excluded_dirs(Vec::<String>::new());
        assert!(!config.is_excluded("dist"));
    }
}
