//! Hashing for tree nodes.

use tiny_keccak::{Hasher, Sha3};

/// Digest used to derive node values.
///
/// Implementations must be deterministic and collision resistant, and must
/// return a lowercase hex string of a fixed length for every input. The
/// empty string is a normal input, not an error. The tree never inspects
/// digests beyond concatenating and comparing them.
pub trait TreeHasher {
    /// Hashes `input` into a fixed-length lowercase hex digest.
    fn hash(input: &str) -> String;
}

/// SHA3-256 hasher producing 64-character lowercase hex digests.
#[derive(Debug, Clone, Default)]
pub struct Sha3Hasher;

impl TreeHasher for Sha3Hasher {
    fn hash(input: &str) -> String {
        let mut hasher = Sha3::v256();
        hasher.update(input.as_bytes());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        hex::encode(output)
    }
}
