//! Inventory descriptors — a kind tag plus a content hash.
//!
//! A descriptor names one piece of gossiped data (a transaction, a block)
//! that a peer has, wants, or could not find. It is a plain value: fields are
//! private, there are no setters, and it is `Copy`, so a descriptor handed to
//! another component can never change under it.

use std::fmt;

use serde::{Deserialize, Serialize};
use zerocopy::{AsBytes, FromBytes};

use crate::error::InvError;
use crate::hash::{ContentHash, HASH_SIZE};
use crate::kind::InventoryKind;
use crate::wire::{DescriptorRecord, DESCRIPTOR_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    kind: InventoryKind,
    hash: ContentHash,
}

impl Descriptor {
    /// Build a descriptor, copying `hash` out of the caller's buffer.
    pub fn new(kind: InventoryKind, hash: &[u8; HASH_SIZE]) -> Self {
        Self {
            kind,
            hash: ContentHash::from(hash),
        }
    }

    pub const fn from_parts(kind: InventoryKind, hash: ContentHash) -> Self {
        Self { kind, hash }
    }

    pub const fn tx(hash: ContentHash) -> Self {
        Self::from_parts(InventoryKind::TX, hash)
    }

    pub const fn block(hash: ContentHash) -> Self {
        Self::from_parts(InventoryKind::BLOCK, hash)
    }

    pub const fn kind(&self) -> InventoryKind {
        self.kind
    }

    pub const fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// The 36-byte wire form.
    pub fn to_bytes(&self) -> [u8; DESCRIPTOR_SIZE] {
        let mut out = [0u8; DESCRIPTOR_SIZE];
        out.copy_from_slice(DescriptorRecord::from(self).as_bytes());
        out
    }

    /// Parse the first 36 bytes of `bytes`. Trailing bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvError> {
        DescriptorRecord::read_from_prefix(bytes)
            .map(Descriptor::from)
            .ok_or_else(|| InvError::truncated(bytes.len()))
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.hash)
    }
}
