//! Construction-time errors.

use thiserror::Error;

/// Errors raised while assembling nodes or building a tree.
///
/// Every variant is detected synchronously at construction; a tree that was
/// built successfully never fails a query. None of these are recoverable
/// internally: the caller supplies corrected input and rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleTreeError {
    /// A node was given exactly one child; nodes have two children or none.
    #[error("a node must have either two children or none")]
    InvalidTopology,

    /// A childless node was constructed without an explicit value.
    #[error("a leaf node must carry an explicit value")]
    MissingValue,

    /// A two-child node was constructed with an explicit value; internal
    /// node values are derived from the children.
    #[error("an internal node must not be given a value")]
    UnexpectedValue,

    /// The same leaf value was supplied more than once.
    #[error("duplicate leaf value {0:?}")]
    DuplicateLeaf(String),

    /// No leaf values were supplied; no root can be formed from zero leaves.
    #[error("cannot build a tree from an empty leaf sequence")]
    EmptyInput,
}
