//! Encoding: `RbxValue` → packed bytes.

use bytes::{BufMut, Bytes, BytesMut};

use super::interleave::interleave;
use super::{field_widths, scalar};
use crate::error::RbxError;
use crate::types::{RbxType, RbxValue, RbxVector2, RbxVector3};

/// Appends the canonical single-value byte form of `value`.
///
/// This is the layout used by the plain-concatenation array kinds and by the
/// XML collaborator when it round-trips individual property values.
pub fn encode_value(buf: &mut BytesMut, value: &RbxValue) {
    match value {
        RbxValue::String(s) => {
            buf.put_u32_le(s.len() as u32);
            buf.put_slice(s);
        }
        RbxValue::Bool(b) => buf.put_u8(u8::from(*b)),
        RbxValue::Int(i) => buf.put_u32(scalar::zigzag32_encode(*i)),
        RbxValue::Float(x) => put_float(buf, *x),
        RbxValue::Double(x) => buf.put_f64_le(*x),
        RbxValue::UDim(u) => {
            put_float(buf, u.scale);
            buf.put_u32(scalar::zigzag32_encode(u.offset));
        }
        RbxValue::UDim2(u) => {
            put_float(buf, u.scale_x);
            put_float(buf, u.scale_y);
            buf.put_u32(scalar::zigzag32_encode(u.offset_x));
            buf.put_u32(scalar::zigzag32_encode(u.offset_y));
        }
        RbxValue::Ray(r) => {
            buf.put_f32_le(r.origin_x);
            buf.put_f32_le(r.origin_y);
            buf.put_f32_le(r.origin_z);
            buf.put_f32_le(r.direction_x);
            buf.put_f32_le(r.direction_y);
            buf.put_f32_le(r.direction_z);
        }
        RbxValue::Faces(fa) => {
            let flags = [fa.right, fa.top, fa.back, fa.left, fa.bottom, fa.front];
            buf.put_u8(pack_bits(&flags));
        }
        RbxValue::Axes(a) => buf.put_u8(pack_bits(&[a.x, a.y, a.z])),
        RbxValue::BrickColor(c) => buf.put_u32(*c),
        RbxValue::Color3(c) => {
            put_float(buf, c.r);
            put_float(buf, c.g);
            put_float(buf, c.b);
        }
        RbxValue::Vector2(v) => put_vector2(buf, v),
        RbxValue::Vector3(v) => put_vector3(buf, v),
        RbxValue::Vector2int16(v) => {
            buf.put_i16_le(v.x);
            buf.put_i16_le(v.y);
        }
        RbxValue::CFrame(cf) => {
            buf.put_u8(cf.special);
            if cf.special == 0 {
                for r in cf.rotation {
                    buf.put_f32_le(r);
                }
            }
            put_vector3(buf, &cf.position);
        }
        RbxValue::Token(t) => buf.put_u32(*t),
        RbxValue::Reference(r) => buf.put_u32(scalar::zigzag32_encode(*r)),
        RbxValue::Vector3int16(v) => {
            buf.put_i16_le(v.x);
            buf.put_i16_le(v.y);
            buf.put_i16_le(v.z);
        }
        RbxValue::NumberSequence(ks) => {
            buf.put_u32_le(ks.len() as u32);
            for k in ks {
                buf.put_f32_le(k.time);
                buf.put_f32_le(k.value);
                buf.put_f32_le(k.envelope);
            }
        }
        RbxValue::ColorSequence(ks) => {
            buf.put_u32_le(ks.len() as u32);
            for k in ks {
                buf.put_f32_le(k.time);
                buf.put_f32_le(k.color.r);
                buf.put_f32_le(k.color.g);
                buf.put_f32_le(k.color.b);
                buf.put_f32_le(k.envelope);
            }
        }
        RbxValue::NumberRange(r) => {
            buf.put_f32_le(r.min);
            buf.put_f32_le(r.max);
        }
        RbxValue::Rect2D(r) => {
            put_vector2(buf, &r.min);
            put_vector2(buf, &r.max);
        }
        RbxValue::PhysicalProperties(p) => {
            buf.put_u8(p.custom_physics);
            if p.custom_physics != 0 {
                buf.put_f32_le(p.density);
                buf.put_f32_le(p.friction);
                buf.put_f32_le(p.elasticity);
                buf.put_f32_le(p.friction_weight);
                buf.put_f32_le(p.elasticity_weight);
            }
        }
        RbxValue::Color3uint8(c) => {
            buf.put_u8(c.r);
            buf.put_u8(c.g);
            buf.put_u8(c.b);
        }
        RbxValue::Int64(i) => buf.put_u64(scalar::zigzag64_encode(*i)),
        RbxValue::SharedString(s) => buf.put_u32(*s),
    }
}

/// Packs a homogeneous array of values into a single blob.
///
/// The byte layout is chosen per kind: plain concatenation, whole-blob
/// interleave, field-split interleave, or the CFrame/Reference special
/// forms. Every element must be of kind `type_id`.
pub fn values_to_bytes(type_id: RbxType, values: &[RbxValue]) -> Result<Bytes, RbxError> {
    for (index, v) in values.iter().enumerate() {
        if v.type_id() != type_id {
            return Err(RbxError::KindMismatch {
                index,
                expected: type_id,
                found: v.type_id(),
            });
        }
    }

    tracing::trace!(%type_id, count = values.len(), "packing value array");

    let blob = match type_id {
        // Concatenation of canonical forms. PhysicalProperties lands here
        // too: its array layout is exactly its discriminated single-value
        // layout back to back.
        RbxType::String
        | RbxType::Bool
        | RbxType::Double
        | RbxType::Ray
        | RbxType::Faces
        | RbxType::Axes
        | RbxType::Vector3int16
        | RbxType::NumberSequence
        | RbxType::ColorSequence
        | RbxType::NumberRange
        | RbxType::PhysicalProperties => concat_values(values),

        // Concatenate, then transpose the whole blob.
        RbxType::Int
        | RbxType::Float
        | RbxType::BrickColor
        | RbxType::Token
        | RbxType::SharedString => {
            let mut buf = concat_values(values);
            interleave(buf.as_mut(), 4)?;
            buf
        }
        RbxType::Int64 => {
            let mut buf = concat_values(values);
            interleave(buf.as_mut(), 8)?;
            buf
        }

        // Per-field columns, each transposed independently.
        RbxType::UDim
        | RbxType::UDim2
        | RbxType::Color3
        | RbxType::Vector2
        | RbxType::Vector3
        | RbxType::Rect2D
        | RbxType::Color3uint8 => interleave_fields(type_id, values)?,

        RbxType::CFrame => encode_cframes(values)?,
        RbxType::Reference => encode_references(values)?,

        RbxType::Vector2int16 => return Err(RbxError::NotImplemented(type_id)),
    };

    Ok(blob.freeze())
}

fn concat_values(values: &[RbxValue]) -> BytesMut {
    let mut buf = BytesMut::new();
    for v in values {
        encode_value(&mut buf, v);
    }
    buf
}

/// Lays the nth field of every value contiguously (one column per field),
/// then interleaves each column with its own field width.
pub(super) fn interleave_fields(
    type_id: RbxType,
    values: &[RbxValue],
) -> Result<BytesMut, RbxError> {
    let widths = field_widths(type_id).expect("kind has a field-split layout");
    if values.is_empty() {
        return Ok(BytesMut::new());
    }

    let count = values.len();
    let value_size: usize = widths.iter().sum();

    // Column f of the output spans offsets[f]..offsets[f + 1].
    let mut offsets = vec![0usize; widths.len() + 1];
    for (f, &w) in widths.iter().enumerate() {
        offsets[f + 1] = offsets[f] + w * count;
    }

    let mut out = BytesMut::zeroed(value_size * count);
    let mut scratch = BytesMut::with_capacity(value_size);
    for (i, v) in values.iter().enumerate() {
        scratch.clear();
        encode_value(&mut scratch, v);
        debug_assert_eq!(scratch.len(), value_size);

        // The canonical form is the fields in declaration order; slice it
        // apart into the columns.
        let mut field_start = 0;
        for (f, &w) in widths.iter().enumerate() {
            let dst = offsets[f] + i * w;
            out[dst..dst + w].copy_from_slice(&scratch[field_start..field_start + w]);
            field_start += w;
        }
    }

    for (f, &w) in widths.iter().enumerate() {
        interleave(&mut out[offsets[f]..offsets[f + 1]], w)?;
    }

    Ok(out)
}

/// Matrix region (one discriminator byte, plus 36 rotation bytes when zero)
/// for every value, followed by the positions packed as a Vector3 array.
fn encode_cframes(values: &[RbxValue]) -> Result<BytesMut, RbxError> {
    let mut buf = BytesMut::new();
    let mut positions = Vec::with_capacity(values.len());
    for v in values {
        if let RbxValue::CFrame(cf) = v {
            buf.put_u8(cf.special);
            if cf.special == 0 {
                for r in cf.rotation {
                    buf.put_f32_le(r);
                }
            }
            positions.push(RbxValue::Vector3(cf.position.clone()));
        }
    }
    let position_block = interleave_fields(RbxType::Vector3, &positions)?;
    buf.extend_from_slice(&position_block);
    Ok(buf)
}

/// References are written as deltas against the previous value; consecutive
/// ids then produce long runs of small numbers that compress well.
fn encode_references(values: &[RbxValue]) -> Result<BytesMut, RbxError> {
    if values.is_empty() {
        return Ok(BytesMut::new());
    }
    let mut buf = BytesMut::with_capacity(values.len() * 4);
    let mut prev = 0i32;
    for (i, v) in values.iter().enumerate() {
        if let RbxValue::Reference(r) = v {
            let delta = if i == 0 { *r } else { r.wrapping_sub(prev) };
            buf.put_u32(scalar::zigzag32_encode(delta));
            prev = *r;
        }
    }
    interleave(buf.as_mut(), 4)?;
    Ok(buf)
}

fn put_float(buf: &mut BytesMut, x: f32) {
    buf.put_u32(scalar::float_encode(x));
}

fn put_vector2(buf: &mut BytesMut, v: &RbxVector2) {
    put_float(buf, v.x);
    put_float(buf, v.y);
}

fn put_vector3(buf: &mut BytesMut, v: &RbxVector3) {
    put_float(buf, v.x);
    put_float(buf, v.y);
    put_float(buf, v.z);
}

fn pack_bits(flags: &[bool]) -> u8 {
    let mut b = 0u8;
    for (i, &flag) in flags.iter().enumerate() {
        if flag {
            b |= 1 << i;
        }
    }
    b
}
