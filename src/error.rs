//! Error types for the binary property codec.

use crate::types::RbxType;

/// Errors that can occur while packing or unpacking property values.
///
/// Every error is terminal for the current call; the codec never returns a
/// partially decoded array.
#[derive(Debug, thiserror::Error)]
pub enum RbxError {
    #[error("invalid type identifier (0x{0:02X})")]
    InvalidType(u8),

    #[error("element {index} is of type {found} where {expected} is expected")]
    KindMismatch {
        index: usize,
        expected: RbxType,
        found: RbxType,
    },

    #[error("bad length: {0}")]
    BadLength(String),

    #[error("truncated data: {0}")]
    Truncated(String),

    #[error("array codec for {0} is not implemented")]
    NotImplemented(RbxType),

    #[error("interleave: {0}")]
    InterleaveArg(String),
}
