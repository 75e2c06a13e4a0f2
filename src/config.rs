// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Construction parameters for trees.

/// Tree construction parameters.
///
/// ```
/// use ordtree::config::TreeConfig;
///
/// let config = TreeConfig::default().with_capacity(1024).check_invariants(true);
/// assert_eq!(config.capacity, 1024);
/// assert!(config.check_invariants);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of node slots reserved up front.
    pub capacity: usize,
    /// Validate the whole tree after every mutation and panic on a violation.
    /// O(n) per operation, so it defaults to on only in debug builds.
    pub check_invariants: bool,
}

impl TreeConfig {
    pub fn with_capacity(mut self, capacity: usize) -> TreeConfig {
        self.capacity = capacity;
        return self;
    }

    pub fn check_invariants(mut self, enabled: bool) -> TreeConfig {
        self.check_invariants = enabled;
        return self;
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        return TreeConfig {
            capacity: 0,
            check_invariants: cfg!(debug_assertions),
        };
    }
}
