//! Binary packing for property value arrays.
//!
//! A property column is stored as one blob per homogeneous value array. The
//! blob layout is chosen per kind to favor LZ-style compression downstream:
//! scalar integers are zigzag-encoded, 32-bit floats carry their sign at the
//! LSB, multi-byte values are transposed so that like bytes group together,
//! and references are stored as deltas.

pub mod decode;
pub mod encode;
pub mod interleave;
pub mod scalar;

pub use decode::{decode_value, values_from_bytes};
pub use encode::{encode_value, values_to_bytes};

use crate::types::RbxType;

/// Field widths, in declaration order, for the field-split interleaved
/// kinds. `None` for every other kind.
pub(crate) fn field_widths(type_id: RbxType) -> Option<&'static [usize]> {
    match type_id {
        RbxType::UDim | RbxType::Vector2 => Some(&[4, 4]),
        RbxType::UDim2 | RbxType::Rect2D => Some(&[4, 4, 4, 4]),
        RbxType::Color3 | RbxType::Vector3 => Some(&[4, 4, 4]),
        // Stride-1 columns transpose to themselves, but the column offsets
        // still shape the layout.
        RbxType::Color3uint8 => Some(&[1, 1, 1]),
        _ => None,
    }
}
