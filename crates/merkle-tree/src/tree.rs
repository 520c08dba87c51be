//! Merkle tree construction and membership queries.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::MerkleTreeError;
use crate::hasher::{Sha3Hasher, TreeHasher};
use crate::node::Node;

/// Binary hash tree over an ordered sequence of distinct leaf values.
///
/// Built once from the full leaf sequence and immutable afterwards; a new
/// leaf set means a new tree. On every pairing round the current nodes pair
/// left-to-right and each complete pair hashes into a parent. An odd node
/// out is promoted to the next round unchanged and may travel several
/// rounds before it finally pairs or becomes the root.
#[derive(Clone, Debug)]
pub struct MerkleTree<H: TreeHasher = Sha3Hasher> {
    /// Leaf values in insertion order.
    leaves: Vec<String>,
    /// Insertion position of each leaf value.
    positions: HashMap<String, usize>,
    /// Root of the fully built tree; the leaf itself for a one-leaf tree.
    root: Node,
    _hasher: PhantomData<H>,
}

impl MerkleTree {
    /// Builds a tree over `leaves` with the default SHA3-256 hasher.
    ///
    /// `leaves` carries pre-hashed values; hashing raw payloads into leaf
    /// values is the caller's job. The sequence must be non-empty and free
    /// of duplicates.
    pub fn new<I, S>(leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_hasher(leaves)
    }
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Builds a tree over `leaves` with a caller-chosen hasher.
    pub fn with_hasher<I, S>(leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut positions = HashMap::new();
        for value in leaves {
            let value = value.into();
            if positions.insert(value.clone(), ordered.len()).is_some() {
                return Err(MerkleTreeError::DuplicateLeaf(value));
            }
            ordered.push(value);
        }
        if ordered.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        debug!(leaves = ordered.len(), "building merkle tree");
        let base = ordered.iter().map(|value| Node::leaf(value.as_str())).collect();
        let root = build_root::<H>(base)?;

        Ok(Self {
            leaves: ordered,
            positions,
            root,
            _hasher: PhantomData,
        })
    }

    /// The root node's value.
    pub fn root_hash(&self) -> &str {
        self.root.value()
    }

    /// The root node. For a single-leaf tree this is the leaf itself.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Leaf values in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = &str> {
        self.leaves.iter().map(String::as_str)
    }

    /// Number of leaves the tree was built over.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Whether `leaf_value` is one of the values the tree was built over.
    pub fn contains_leaf(&self, leaf_value: &str) -> bool {
        self.positions.contains_key(leaf_value)
    }

    /// Checks that `leaf_value` belongs to the original leaf set and that
    /// `claimed_root_hash` equals this tree's root hash.
    ///
    /// The two conditions are independent: no authentication path from the
    /// leaf up to the root is reconstructed, so this does not prove that
    /// the leaf hashes up to the claimed root. Callers needing
    /// cryptographic inclusion evidence need a sibling-path proof, which
    /// this tree does not produce.
    pub fn is_valid_leaf(&self, claimed_root_hash: &str, leaf_value: &str) -> bool {
        self.contains_leaf(leaf_value) && claimed_root_hash == self.root_hash()
    }
}

impl<H: TreeHasher> fmt::Display for MerkleTree<H> {
    /// Renders the whole tree via the root node's dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// Reduces a non-empty level of nodes to a single root by repeated pairing.
fn build_root<H: TreeHasher>(mut nodes: Vec<Node>) -> Result<Node, MerkleTreeError> {
    while nodes.len() > 1 {
        trace!(width = nodes.len(), "pairing round");
        let mut next = Vec::with_capacity(nodes.len().div_ceil(2));
        let mut level = nodes.into_iter();
        while let Some(left) = level.next() {
            match level.next() {
                Some(right) => next.push(Node::internal::<H>(left, right)),
                // odd node out: carried into the next round as-is
                None => next.push(left),
            }
        }
        nodes = next;
    }
    nodes.pop().ok_or(MerkleTreeError::EmptyInput)
}
