//! invwire-core — inventory descriptors and their wire format.
//!
//! An inventory descriptor names one piece of gossiped data by kind and
//! content hash, so peers can announce or request it without sending it.

pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod hash;
pub mod kind;
pub mod limits;
pub mod wire;

pub use codec::{decode, encode};
pub use config::{ConfigError, LimitsConfig};
pub use descriptor::Descriptor;
pub use error::InvError;
pub use hash::{ContentHash, HASH_SIZE};
pub use kind::InventoryKind;
pub use limits::{check_count, InventoryList, MAX_PER_MESSAGE};
pub use wire::{ProtocolVersion, DESCRIPTOR_SIZE, PROTOCOL_VERSION};
