//! Error types for kigdoc operations.
//!
//! This module provides the main error type [`KigError`]. Structural errors
//! (dangling parents, bad arity, unknown kinds) are fatal for the session:
//! once one occurs the session is poisoned and will not produce a document.
//! Cosmetic problems, such as an unrecognized point or line style, are not
//! errors at all; they are absorbed as warn-and-ignore by the setters.

use std::io;

use thiserror::Error;

use kigdoc_core::identifier::NodeId;

/// The main error type for kigdoc operations.
#[derive(Debug, Error)]
pub enum KigError {
    /// A construction referenced a parent node never created in this
    /// session. The document would carry a dangling reference, so the whole
    /// session is aborted.
    #[error("construction `{type_tag}` references parent node {parent}, which was never created in this session")]
    DanglingParent {
        /// Type tag of the failing request.
        type_tag: String,
        /// The offending parent reference.
        parent: NodeId,
    },

    /// A node was given the wrong number of parents: a property with other
    /// than exactly one, or a catalog kind called with the wrong argument
    /// count.
    #[error("`{type_tag}` takes {expected} parent(s), got {got}")]
    InvalidArity {
        /// Type tag of the failing request.
        type_tag: String,
        /// Expected parent count.
        expected: usize,
        /// Supplied parent count.
        got: usize,
    },

    /// A catalog lookup failed.
    #[error("unknown construction kind `{0}`")]
    UnknownKind(String),

    /// Finalize was called on a session that already hit a structural
    /// error. No partial document is ever emitted.
    #[error("session aborted by an earlier structural error; no document can be produced")]
    Poisoned,

    /// The output sink could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_parent_names_the_request() {
        let err = KigError::DanglingParent {
            type_tag: "SegmentAB".to_string(),
            parent: NodeId::from_raw(99),
        };
        let message = err.to_string();
        assert!(message.contains("SegmentAB"));
        assert!(message.contains("99"));
    }

    #[test]
    fn test_invalid_arity_message() {
        let err = KigError::InvalidArity {
            type_tag: "mid-point".to_string(),
            expected: 1,
            got: 3,
        };
        assert_eq!(err.to_string(), "`mid-point` takes 1 parent(s), got 3");
    }
}
