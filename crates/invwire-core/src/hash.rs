//! Content hashes — opaque 32-byte identifiers for gossiped payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a content hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Content-addressing digest of the referenced payload.
///
/// Nothing is assumed about the bytes beyond their length. `digest` produces
/// a BLAKE3 hash for callers that need to derive one locally; hashes received
/// from peers are taken as-is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash([u8; HASH_SIZE]);

impl ContentHash {
    /// The all-zero hash.
    pub const ZERO: ContentHash = ContentHash([0u8; HASH_SIZE]);

    /// Wrap raw hash bytes.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// BLAKE3 hash of `data`.
    pub fn digest(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Parse 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut out = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; HASH_SIZE]> for ContentHash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; HASH_SIZE]> for ContentHash {
    fn from(bytes: &[u8; HASH_SIZE]) -> Self {
        Self(*bytes)
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}
