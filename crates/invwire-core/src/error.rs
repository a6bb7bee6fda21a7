//! Errors raised while framing inventory descriptors.

use std::io;

use crate::wire::DESCRIPTOR_SIZE;

/// Everything that can go wrong reading, writing, or bounding descriptors.
///
/// Unknown inventory kinds are deliberately absent: any u32 decodes.
#[derive(Debug, thiserror::Error)]
pub enum InvError {
    /// The stream ended before a full 36-byte record was read.
    #[error("truncated inventory descriptor: read {read} of {needed} bytes")]
    TruncatedInput { needed: usize, read: usize },

    /// Any read error other than end-of-stream, passed through untouched.
    #[error(transparent)]
    Read(io::Error),

    /// The sink rejected or failed a write.
    #[error("failed to write inventory descriptor: {0}")]
    WriteFailure(#[source] io::Error),

    /// A single message carries more descriptors than allowed.
    #[error("too many inventory descriptors for one message: {count} > {max}")]
    ExcessiveCount { count: u64, max: usize },
}

impl InvError {
    pub(crate) fn truncated(read: usize) -> Self {
        InvError::TruncatedInput {
            needed: DESCRIPTOR_SIZE,
            read,
        }
    }

    /// True for `ExcessiveCount`, whatever the limit that was hit.
    pub fn is_excessive_count(&self) -> bool {
        matches!(self, InvError::ExcessiveCount { .. })
    }
}
