//! Inventory descriptor wire format.
//!
//! This type IS the protocol record. Field order, byte order, and total size
//! are fixed: 4 bytes of little-endian kind followed by 32 raw hash bytes,
//! no padding, no length prefix. Changing anything here breaks every peer.
//!
//! The layout is a zerocopy struct of unaligned fields so that encoding is a
//! plain byte view and decoding never touches unsafe code.

use static_assertions::assert_eq_size;
use zerocopy::byteorder::{LittleEndian, U32};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

use crate::descriptor::Descriptor;
use crate::hash::{ContentHash, HASH_SIZE};
use crate::kind::InventoryKind;

// ── Versioning ────────────────────────────────────────────────────────────────

/// Protocol version a peer negotiated. Threaded through every codec call so a
/// future format change stays local to the codec.
pub type ProtocolVersion = u32;

/// Protocol version spoken by this implementation.
pub const PROTOCOL_VERSION: ProtocolVersion = 70001;

// ── Descriptor Record ─────────────────────────────────────────────────────────

/// On-wire inventory descriptor.
///
/// Wire size: 36 bytes, for every protocol version.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
#[repr(C)]
pub struct DescriptorRecord {
    /// Inventory kind, little-endian.
    pub kind: U32<LittleEndian>,

    /// Content hash, raw bytes in transmission order.
    pub hash: [u8; HASH_SIZE],
}

// Compile-time size guard. If this fails, the wire format has silently changed.
assert_eq_size!(DescriptorRecord, [u8; 36]);

/// Size of the kind field in bytes.
pub const KIND_SIZE: usize = 4;

/// Serialized size of one descriptor in bytes.
pub const DESCRIPTOR_SIZE: usize = KIND_SIZE + HASH_SIZE;

impl From<&Descriptor> for DescriptorRecord {
    fn from(d: &Descriptor) -> Self {
        DescriptorRecord {
            kind: U32::new(d.kind().value()),
            hash: *d.hash().as_bytes(),
        }
    }
}

impl From<DescriptorRecord> for Descriptor {
    fn from(r: DescriptorRecord) -> Self {
        Descriptor::from_parts(InventoryKind(r.kind.get()), ContentHash::new(r.hash))
    }
}
