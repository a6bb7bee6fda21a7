//! Inventory kinds — what an inventory descriptor refers to.
//!
//! The tag space is open. Only three values have names today, but any u32
//! is a valid kind and must survive a decode/encode cycle untouched so that
//! peers running newer software can announce kinds we do not understand yet.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-bit inventory kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryKind(pub u32);

impl InventoryKind {
    /// Sentinel for "no data" / unknown. Never announced on purpose.
    pub const ERROR: InventoryKind = InventoryKind(0);

    /// A transaction.
    pub const TX: InventoryKind = InventoryKind(1);

    /// A block.
    pub const BLOCK: InventoryKind = InventoryKind(2);

    /// Raw numeric value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// True for the three named kinds.
    pub const fn is_known(self) -> bool {
        matches!(self.0, 0..=2)
    }

    /// Human-readable name. Total over the whole u32 domain.
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Self::ERROR => Cow::Borrowed("ERROR"),
            Self::TX => Cow::Borrowed("MSG_TX"),
            Self::BLOCK => Cow::Borrowed("MSG_BLOCK"),
            Self(other) => Cow::Owned(format!("Unknown InventoryKind ({other})")),
        }
    }
}

impl fmt::Display for InventoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<u32> for InventoryKind {
    fn from(value: u32) -> Self {
        InventoryKind(value)
    }
}

impl From<InventoryKind> for u32 {
    fn from(kind: InventoryKind) -> u32 {
        kind.0
    }
}
