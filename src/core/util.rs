//! Content fingerprinting
//!
//! Digests are change-detection tokens only. They must be deterministic across
//! runs, nothing more.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Hash algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Xxh3,
    Sha1,
}

/// Compute hash of bytes
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Xxh3 => format!("{:016x}", xxh3_64(data)),
        HashAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(data);
            format!("{:x}", hasher.finalize())
        }
    }
}

/// Read a file and return its raw bytes together with their digest
pub fn read_and_hash(path: &Path, algorithm: HashAlgorithm) -> std::io::Result<(Vec<u8>, String)> {
    let data = fs::read(path)?;
    let digest = hash_bytes(&data, algorithm);
    Ok((data, digest))
}
