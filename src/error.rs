// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Recoverable errors surfaced by the trees and their queue collaborator.

/// Error returned by tree and queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The requested value is not stored in the tree. No mutation occurred.
    #[error("value not found")]
    NotFound,
    /// The operation needs a non-empty structure.
    #[error("structure is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(TreeError::NotFound.to_string(), "value not found");
        assert_eq!(TreeError::Empty.to_string(), "structure is empty");
    }
}
