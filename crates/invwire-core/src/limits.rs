//! Per-message descriptor limits.
//!
//! Announce, request, and not-found messages all carry a count-prefixed list
//! of descriptors and all share one cap. Whoever assembles or parses such a
//! list must check the count before doing any work proportional to it: a
//! hostile peer can put any number in a length prefix.

use std::io::{Read, Write};

use crate::codec;
use crate::descriptor::Descriptor;
use crate::error::InvError;
use crate::wire::ProtocolVersion;

/// Maximum number of inventory descriptors in a single message.
pub const MAX_PER_MESSAGE: usize = 50_000;

/// Reject `count` if it exceeds `MAX_PER_MESSAGE`.
pub fn check_count(count: u64) -> Result<(), InvError> {
    check_count_within(count, MAX_PER_MESSAGE)
}

/// Reject `count` if it exceeds `limit`. A limit above `MAX_PER_MESSAGE` is
/// clamped down to it.
pub fn check_count_within(count: u64, limit: usize) -> Result<(), InvError> {
    let max = limit.min(MAX_PER_MESSAGE);
    if count > max as u64 {
        tracing::warn!(count, max, "rejecting oversized inventory list");
        return Err(InvError::ExcessiveCount { count, max });
    }
    Ok(())
}

/// Write every descriptor in `list`, back to back.
///
/// The count is checked first; an oversized list writes nothing.
pub fn write_list<W: Write + ?Sized>(
    w: &mut W,
    pver: ProtocolVersion,
    list: &[Descriptor],
) -> Result<(), InvError> {
    check_count(list.len() as u64)?;
    tracing::debug!(count = list.len(), "writing inventory list");
    for descriptor in list {
        codec::encode(w, pver, descriptor)?;
    }
    Ok(())
}

/// Read `count` descriptors, where `count` came off the wire.
///
/// The count is checked before anything is allocated or read.
pub fn read_list<R: Read + ?Sized>(
    r: &mut R,
    pver: ProtocolVersion,
    count: u64,
) -> Result<Vec<Descriptor>, InvError> {
    check_count(count)?;
    // Bounded by MAX_PER_MESSAGE above.
    let count = count as usize;
    tracing::debug!(count, "reading inventory list");
    let mut list = Vec::with_capacity(count);
    for _ in 0..count {
        list.push(codec::decode(r, pver)?);
    }
    Ok(list)
}

// ── InventoryList ─────────────────────────────────────────────────────────────

/// Ordered descriptors for one message, never longer than its limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryList {
    items: Vec<Descriptor>,
    limit: usize,
}

impl Default for InventoryList {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryList {
    /// Empty list bounded by `MAX_PER_MESSAGE`.
    pub fn new() -> Self {
        Self::with_limit(MAX_PER_MESSAGE)
    }

    /// Empty list bounded by `limit`, clamped to `MAX_PER_MESSAGE`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.min(MAX_PER_MESSAGE),
        }
    }

    /// Append a descriptor. Fails once the list is full; the list is left
    /// unchanged.
    pub fn push(&mut self, descriptor: Descriptor) -> Result<(), InvError> {
        check_count_within(self.items.len() as u64 + 1, self.limit)?;
        self.items.push(descriptor);
        Ok(())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Descriptor] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Descriptor> {
        self.items
    }

    /// Serialize all descriptors. The count prefix is the caller's job.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W, pver: ProtocolVersion) -> Result<(), InvError> {
        write_list(w, pver, &self.items)
    }

    /// Read `count` descriptors into a list bounded by `limit`.
    pub fn read_from<R: Read + ?Sized>(
        r: &mut R,
        pver: ProtocolVersion,
        count: u64,
        limit: usize,
    ) -> Result<Self, InvError> {
        check_count_within(count, limit)?;
        let items = read_list(r, pver, count)?;
        Ok(Self {
            items,
            limit: limit.min(MAX_PER_MESSAGE),
        })
    }
}

impl TryFrom<Vec<Descriptor>> for InventoryList {
    type Error = InvError;

    fn try_from(items: Vec<Descriptor>) -> Result<Self, Self::Error> {
        check_count(items.len() as u64)?;
        Ok(Self {
            items,
            limit: MAX_PER_MESSAGE,
        })
    }
}

impl<'a> IntoIterator for &'a InventoryList {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for InventoryList {
    type Item = Descriptor;
    type IntoIter = std::vec::IntoIter<Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
