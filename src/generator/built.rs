//! The built, in-memory form of a generated pack.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// A successfully built resource pack, held in memory for runtime consumers
/// (upload endpoints, client handshakes) alongside the on-disk artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPack {
    bytes: Vec<u8>,
    hash: String,
    built_at: DateTime<Utc>,
}

impl BuiltPack {
    /// Wrap finished archive bytes, computing their content hash.
    pub fn new(bytes: Vec<u8>) -> Self {
        let hash = format!("{:x}", Sha256::digest(&bytes));
        Self {
            bytes,
            hash,
            built_at: Utc::now(),
        }
    }

    /// The zip archive bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex SHA-256 of the archive bytes.
    ///
    /// Stable for identical content: two runs over unchanged inputs produce
    /// the same hash, so consumers can skip redundant redistribution.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// When this pack was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Size of the archive in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
