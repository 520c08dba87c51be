//! Demo binary: builds a Merkle tree over a fixed list of transactions.
//!
//! Takes no arguments. Each transaction payload is hashed into a leaf
//! digest, the tree is built over the digests, and the pairings, root hash
//! and full tree dump are printed.

use anyhow::Result;
use merkle_tree::{MerkleTree, Sha3Hasher, TreeHasher};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Illustrative transaction payloads, hashed before insertion.
const TRANSACTIONS: [&str; 5] = ["hello", "world", "my", "favorite", "person"];

fn main() -> Result<()> {
    // Setup logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(transactions = TRANSACTIONS.len(), "building merkle tree");

    let digests: Vec<String> = TRANSACTIONS
        .iter()
        .map(|tx| Sha3Hasher::hash(tx))
        .collect();
    let tree = MerkleTree::new(digests.clone())?;

    for (tx, digest) in TRANSACTIONS.iter().zip(&digests) {
        println!("{tx} :: {digest}");
    }
    println!("------------------------------------------------");
    println!("root :: {}", tree.root_hash());
    println!("------------------------------------------------");
    print!("{tree}");

    Ok(())
}
