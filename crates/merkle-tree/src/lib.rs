//! Binary Merkle tree over an ordered collection of leaf values.
//!
//! The tree is built bottom-up from a non-empty, duplicate-free, ordered
//! sequence of pre-hashed leaf values:
//! - Leaves pair left-to-right; each complete pair hashes into a parent node.
//! - An odd node out is promoted to the next round unchanged. It is never
//!   duplicated or hashed with itself, so root hashes differ from
//!   conventions that pad the trailing node (e.g. Bitcoin's).
//! - A single-leaf tree's root is that leaf; its root hash is the supplied
//!   value verbatim.
//!
//! Hashing is pluggable through [`TreeHasher`]; [`Sha3Hasher`] (SHA3-256,
//! lowercase hex) is the default. A tree is immutable once built (rebuild
//! from a new leaf sequence instead of mutating), which also makes shared
//! read access safe without locking.

mod error;
mod hasher;
mod node;
mod tree;

pub use error::MerkleTreeError;
pub use hasher::{Sha3Hasher, TreeHasher};
pub use node::{Node, Walk};
pub use tree::MerkleTree;

/// Length in characters of the hex digests produced by [`Sha3Hasher`].
pub const DIGEST_HEX_LEN: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_over_transaction_digests() {
        let digests: Vec<String> = ["hello", "world"]
            .iter()
            .map(|tx| Sha3Hasher::hash(tx))
            .collect();

        let tree = MerkleTree::new(digests.clone()).unwrap();
        let expected = Sha3Hasher::hash(&format!("{}{}", digests[0], digests[1]));
        assert_eq!(tree.root_hash(), expected);
        assert_eq!(tree.root_hash().len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn membership_is_checked_against_the_built_tree() {
        let digests: Vec<String> = ["hello", "world", "my"]
            .iter()
            .map(|tx| Sha3Hasher::hash(tx))
            .collect();

        let tree = MerkleTree::new(digests.clone()).unwrap();
        let root = tree.root_hash().to_owned();
        assert!(tree.is_valid_leaf(&root, &digests[0]));
        assert!(!tree.is_valid_leaf(&root, &Sha3Hasher::hash("absent")));
    }
}
