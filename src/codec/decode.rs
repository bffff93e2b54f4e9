//! Decoding: packed bytes → `RbxValue`.

use bytes::Buf;

use super::interleave::deinterleave;
use super::{field_widths, scalar};
use crate::error::RbxError;
use crate::types::{
    RbxAxes, RbxCFrame, RbxColor3, RbxColor3uint8, RbxColorSequenceKeypoint, RbxFaces,
    RbxNumberRange, RbxNumberSequenceKeypoint, RbxPhysicalProperties, RbxRay, RbxRect2D, RbxType,
    RbxUDim, RbxUDim2, RbxValue, RbxVector2, RbxVector2int16, RbxVector3, RbxVector3int16,
};

/// Parses the canonical single-value byte form of one value.
///
/// The input must be exactly the expected length for the kind; for the two
/// discriminated kinds (CFrame, PhysicalProperties) the expected length is
/// chosen from the leading discriminator byte, then validated.
pub fn decode_value(type_id: RbxType, b: &[u8]) -> Result<RbxValue, RbxError> {
    match type_id {
        RbxType::String => {
            if b.len() < 4 {
                return Err(RbxError::BadLength(format!(
                    "String value needs a 4-byte length prefix, got {} bytes",
                    b.len()
                )));
            }
            let mut cur = b;
            let declared = cur.get_u32_le() as usize;
            if cur.len() != declared {
                return Err(RbxError::BadLength(format!(
                    "String data is {} bytes where the prefix declares {declared}",
                    cur.len()
                )));
            }
            Ok(RbxValue::String(cur.to_vec()))
        }
        RbxType::Bool => {
            check_len(type_id, b, 1)?;
            Ok(RbxValue::Bool(b[0] != 0))
        }
        RbxType::Int => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::Int(scalar::zigzag32_decode(cur.get_u32())))
        }
        RbxType::Float => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::Float(get_float(&mut cur)))
        }
        RbxType::Double => {
            check_len(type_id, b, 8)?;
            let mut cur = b;
            Ok(RbxValue::Double(cur.get_f64_le()))
        }
        RbxType::UDim => {
            check_len(type_id, b, 8)?;
            let mut cur = b;
            Ok(RbxValue::UDim(RbxUDim {
                scale: get_float(&mut cur),
                offset: scalar::zigzag32_decode(cur.get_u32()),
            }))
        }
        RbxType::UDim2 => {
            check_len(type_id, b, 16)?;
            let mut cur = b;
            Ok(RbxValue::UDim2(RbxUDim2 {
                scale_x: get_float(&mut cur),
                scale_y: get_float(&mut cur),
                offset_x: scalar::zigzag32_decode(cur.get_u32()),
                offset_y: scalar::zigzag32_decode(cur.get_u32()),
            }))
        }
        RbxType::Ray => {
            check_len(type_id, b, 24)?;
            let mut cur = b;
            Ok(RbxValue::Ray(RbxRay {
                origin_x: cur.get_f32_le(),
                origin_y: cur.get_f32_le(),
                origin_z: cur.get_f32_le(),
                direction_x: cur.get_f32_le(),
                direction_y: cur.get_f32_le(),
                direction_z: cur.get_f32_le(),
            }))
        }
        RbxType::Faces => {
            check_len(type_id, b, 1)?;
            Ok(RbxValue::Faces(RbxFaces {
                right: b[0] & (1 << 0) != 0,
                top: b[0] & (1 << 1) != 0,
                back: b[0] & (1 << 2) != 0,
                left: b[0] & (1 << 3) != 0,
                bottom: b[0] & (1 << 4) != 0,
                front: b[0] & (1 << 5) != 0,
            }))
        }
        RbxType::Axes => {
            check_len(type_id, b, 1)?;
            Ok(RbxValue::Axes(RbxAxes {
                x: b[0] & (1 << 0) != 0,
                y: b[0] & (1 << 1) != 0,
                z: b[0] & (1 << 2) != 0,
            }))
        }
        RbxType::BrickColor => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::BrickColor(cur.get_u32()))
        }
        RbxType::Color3 => {
            check_len(type_id, b, 12)?;
            let mut cur = b;
            Ok(RbxValue::Color3(get_color3(&mut cur)))
        }
        RbxType::Vector2 => {
            check_len(type_id, b, 8)?;
            let mut cur = b;
            Ok(RbxValue::Vector2(get_vector2(&mut cur)))
        }
        RbxType::Vector3 => {
            check_len(type_id, b, 12)?;
            let mut cur = b;
            Ok(RbxValue::Vector3(get_vector3(&mut cur)))
        }
        RbxType::Vector2int16 => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::Vector2int16(RbxVector2int16 {
                x: cur.get_i16_le(),
                y: cur.get_i16_le(),
            }))
        }
        RbxType::CFrame => {
            let special = first_byte(type_id, b)?;
            check_len(type_id, b, if special == 0 { 49 } else { 13 })?;
            let mut rotation = [0.0f32; 9];
            let mut cur = &b[1..];
            if special == 0 {
                for r in rotation.iter_mut() {
                    *r = cur.get_f32_le();
                }
            }
            let position = get_vector3(&mut cur);
            Ok(RbxValue::CFrame(RbxCFrame {
                special,
                rotation,
                position,
            }))
        }
        RbxType::Token => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::Token(cur.get_u32()))
        }
        RbxType::Reference => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::Reference(scalar::zigzag32_decode(cur.get_u32())))
        }
        RbxType::Vector3int16 => {
            check_len(type_id, b, 6)?;
            let mut cur = b;
            Ok(RbxValue::Vector3int16(RbxVector3int16 {
                x: cur.get_i16_le(),
                y: cur.get_i16_le(),
                z: cur.get_i16_le(),
            }))
        }
        RbxType::NumberSequence => {
            let declared = sequence_count(type_id, b, 12)?;
            let mut cur = &b[4..];
            let mut keypoints = Vec::with_capacity(declared);
            for _ in 0..declared {
                keypoints.push(RbxNumberSequenceKeypoint {
                    time: cur.get_f32_le(),
                    value: cur.get_f32_le(),
                    envelope: cur.get_f32_le(),
                });
            }
            Ok(RbxValue::NumberSequence(keypoints))
        }
        RbxType::ColorSequence => {
            let declared = sequence_count(type_id, b, 20)?;
            let mut cur = &b[4..];
            let mut keypoints = Vec::with_capacity(declared);
            for _ in 0..declared {
                keypoints.push(RbxColorSequenceKeypoint {
                    time: cur.get_f32_le(),
                    color: RbxColor3 {
                        r: cur.get_f32_le(),
                        g: cur.get_f32_le(),
                        b: cur.get_f32_le(),
                    },
                    envelope: cur.get_f32_le(),
                });
            }
            Ok(RbxValue::ColorSequence(keypoints))
        }
        RbxType::NumberRange => {
            check_len(type_id, b, 8)?;
            let mut cur = b;
            Ok(RbxValue::NumberRange(RbxNumberRange {
                min: cur.get_f32_le(),
                max: cur.get_f32_le(),
            }))
        }
        RbxType::Rect2D => {
            check_len(type_id, b, 16)?;
            let mut cur = b;
            Ok(RbxValue::Rect2D(RbxRect2D {
                min: get_vector2(&mut cur),
                max: get_vector2(&mut cur),
            }))
        }
        RbxType::PhysicalProperties => {
            let custom_physics = first_byte(type_id, b)?;
            check_len(type_id, b, if custom_physics != 0 { 21 } else { 1 })?;
            let mut value = RbxPhysicalProperties {
                custom_physics,
                ..RbxPhysicalProperties::default()
            };
            if custom_physics != 0 {
                let mut cur = &b[1..];
                value.density = cur.get_f32_le();
                value.friction = cur.get_f32_le();
                value.elasticity = cur.get_f32_le();
                value.friction_weight = cur.get_f32_le();
                value.elasticity_weight = cur.get_f32_le();
            }
            Ok(RbxValue::PhysicalProperties(value))
        }
        RbxType::Color3uint8 => {
            check_len(type_id, b, 3)?;
            Ok(RbxValue::Color3uint8(RbxColor3uint8 {
                r: b[0],
                g: b[1],
                b: b[2],
            }))
        }
        RbxType::Int64 => {
            check_len(type_id, b, 8)?;
            let mut cur = b;
            Ok(RbxValue::Int64(scalar::zigzag64_decode(cur.get_u64())))
        }
        RbxType::SharedString => {
            check_len(type_id, b, 4)?;
            let mut cur = b;
            Ok(RbxValue::SharedString(cur.get_u32()))
        }
    }
}

/// Unpacks an array blob produced by [`values_to_bytes`][super::values_to_bytes].
pub fn values_from_bytes(type_id: RbxType, b: &[u8]) -> Result<Vec<RbxValue>, RbxError> {
    tracing::trace!(%type_id, len = b.len(), "unpacking value array");

    match type_id {
        RbxType::Bool | RbxType::Faces | RbxType::Axes => fixed_values(type_id, b, 1),
        RbxType::Vector3int16 => fixed_values(type_id, b, 6),
        RbxType::Double | RbxType::NumberRange => fixed_values(type_id, b, 8),
        RbxType::Ray => fixed_values(type_id, b, 24),

        RbxType::String => prefixed_values(type_id, b, 1),
        RbxType::NumberSequence => prefixed_values(type_id, b, 12),
        RbxType::ColorSequence => prefixed_values(type_id, b, 20),

        RbxType::Int
        | RbxType::Float
        | RbxType::BrickColor
        | RbxType::Token
        | RbxType::SharedString => deinterleaved_values(type_id, b, 4),
        RbxType::Int64 => deinterleaved_values(type_id, b, 8),

        RbxType::UDim
        | RbxType::UDim2
        | RbxType::Color3
        | RbxType::Vector2
        | RbxType::Vector3
        | RbxType::Rect2D
        | RbxType::Color3uint8 => deinterleave_fields(type_id, b),

        RbxType::CFrame => decode_cframes(b),
        RbxType::Reference => decode_references(b),
        RbxType::PhysicalProperties => decode_physical_properties(b),

        RbxType::Vector2int16 => Err(RbxError::NotImplemented(type_id)),
    }
}

/// Splits the blob into `size`-byte values.
fn fixed_values(type_id: RbxType, b: &[u8], size: usize) -> Result<Vec<RbxValue>, RbxError> {
    if b.len() % size != 0 {
        return Err(RbxError::BadLength(format!(
            "array of {type_id}: length {} is not a multiple of the value size {size}",
            b.len()
        )));
    }
    b.chunks_exact(size)
        .map(|chunk| decode_value(type_id, chunk))
        .collect()
}

/// Reads length-prefixed values back to back; `unit` is the byte size per
/// declared count unit (1 for String, the keypoint size for sequences).
fn prefixed_values(type_id: RbxType, b: &[u8], unit: usize) -> Result<Vec<RbxValue>, RbxError> {
    let mut values = Vec::new();
    let mut rest = b;
    while !rest.is_empty() {
        if rest.len() < 4 {
            return Err(RbxError::Truncated(format!(
                "array of {type_id}: expected a 4-byte length prefix, {} bytes remain",
                rest.len()
            )));
        }
        let declared = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        let payload = declared * unit;
        if rest.len() - 4 < payload {
            return Err(RbxError::Truncated(format!(
                "array of {type_id}: value needs {payload} bytes after the length prefix, {} remain",
                rest.len() - 4
            )));
        }
        values.push(decode_value(type_id, &rest[..4 + payload])?);
        rest = &rest[4 + payload..];
    }
    Ok(values)
}

/// Undoes the whole-blob transpose, then splits into `stride`-byte values.
fn deinterleaved_values(
    type_id: RbxType,
    b: &[u8],
    stride: usize,
) -> Result<Vec<RbxValue>, RbxError> {
    if b.len() % stride != 0 {
        return Err(RbxError::BadLength(format!(
            "array of {type_id}: length {} is not a multiple of the value stride {stride}",
            b.len()
        )));
    }
    let mut copy = b.to_vec();
    deinterleave(&mut copy, stride)?;
    copy.chunks_exact(stride)
        .map(|chunk| decode_value(type_id, chunk))
        .collect()
}

/// Inverse of the field-split packing: undo each column's transpose, then
/// stitch the per-value field slices back into canonical forms.
pub(super) fn deinterleave_fields(type_id: RbxType, b: &[u8]) -> Result<Vec<RbxValue>, RbxError> {
    let widths = field_widths(type_id).expect("kind has a field-split layout");
    let value_size: usize = widths.iter().sum();
    if b.len() % value_size != 0 {
        return Err(RbxError::BadLength(format!(
            "array of {type_id}: length {} is not divisible by the value size {value_size}",
            b.len()
        )));
    }
    let count = b.len() / value_size;
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut offsets = vec![0usize; widths.len() + 1];
    for (f, &w) in widths.iter().enumerate() {
        offsets[f + 1] = offsets[f] + w * count;
    }

    let mut copy = b.to_vec();
    for (f, &w) in widths.iter().enumerate() {
        deinterleave(&mut copy[offsets[f]..offsets[f + 1]], w)?;
    }

    let mut values = Vec::with_capacity(count);
    let mut scratch = vec![0u8; value_size];
    for i in 0..count {
        let mut at = 0;
        for (f, &w) in widths.iter().enumerate() {
            let src = offsets[f] + i * w;
            scratch[at..at + w].copy_from_slice(&copy[src..src + w]);
            at += w;
        }
        values.push(decode_value(type_id, &scratch)?);
    }
    Ok(values)
}

/// Greedy scan of the CFrame matrix region: every byte is matrix data as
/// long as more than 12 bytes per already-parsed value remain; the exact
/// remainder is then the interleaved position block, which must cover the
/// same number of values.
fn decode_cframes(b: &[u8]) -> Result<Vec<RbxValue>, RbxError> {
    let mut headers = Vec::new();
    let mut i = 0usize;
    let mut position_bytes = 0usize;
    while b.len() - i > position_bytes {
        let special = b[i];
        i += 1;
        let mut rotation = [0.0f32; 9];
        if special == 0 {
            let Some(mut cur) = b.get(i..i + 36) else {
                return Err(RbxError::Truncated(format!(
                    "array of CFrame: rotation matrix needs 36 bytes, {} remain",
                    b.len() - i
                )));
            };
            for r in rotation.iter_mut() {
                *r = cur.get_f32_le();
            }
            i += 36;
        }
        headers.push((special, rotation));
        position_bytes += 12;
    }

    let positions = deinterleave_fields(RbxType::Vector3, &b[i..])?;
    if positions.len() != headers.len() {
        return Err(RbxError::BadLength(format!(
            "array of CFrame: {} positions for {} matrices",
            positions.len(),
            headers.len()
        )));
    }

    let mut values = Vec::with_capacity(headers.len());
    for ((special, rotation), position) in headers.into_iter().zip(positions) {
        if let RbxValue::Vector3(position) = position {
            values.push(RbxValue::CFrame(RbxCFrame {
                special,
                rotation,
                position,
            }));
        }
    }
    Ok(values)
}

/// Undoes the delta chain: each decoded value after the first is relative to
/// its predecessor.
fn decode_references(b: &[u8]) -> Result<Vec<RbxValue>, RbxError> {
    if b.is_empty() {
        return Ok(Vec::new());
    }
    if b.len() % 4 != 0 {
        return Err(RbxError::BadLength(format!(
            "array of Reference: length {} is not a multiple of 4",
            b.len()
        )));
    }
    let mut copy = b.to_vec();
    deinterleave(&mut copy, 4)?;

    let mut values = Vec::with_capacity(copy.len() / 4);
    let mut prev = 0i32;
    for (i, mut chunk) in copy.chunks_exact(4).enumerate() {
        let delta = scalar::zigzag32_decode(chunk.get_u32());
        let absolute = if i == 0 { delta } else { prev.wrapping_add(delta) };
        values.push(RbxValue::Reference(absolute));
        prev = absolute;
    }
    Ok(values)
}

/// Values are 1 or 21 bytes each depending on their leading discriminator;
/// the end of the buffer is the stop condition.
fn decode_physical_properties(b: &[u8]) -> Result<Vec<RbxValue>, RbxError> {
    let mut values = Vec::new();
    let mut rest = b;
    while let Some((&custom_physics, tail)) = rest.split_first() {
        if custom_physics != 0 {
            if tail.len() < 20 {
                return Err(RbxError::Truncated(format!(
                    "array of PhysicalProperties: custom fields need 20 bytes, {} remain",
                    tail.len()
                )));
            }
            values.push(decode_value(RbxType::PhysicalProperties, &rest[..21])?);
            rest = &rest[21..];
        } else {
            values.push(decode_value(RbxType::PhysicalProperties, &rest[..1])?);
            rest = tail;
        }
    }
    Ok(values)
}

fn check_len(type_id: RbxType, b: &[u8], expected: usize) -> Result<(), RbxError> {
    if b.len() != expected {
        return Err(RbxError::BadLength(format!(
            "{type_id} value must be {expected} bytes, got {}",
            b.len()
        )));
    }
    Ok(())
}

fn first_byte(type_id: RbxType, b: &[u8]) -> Result<u8, RbxError> {
    b.first().copied().ok_or_else(|| {
        RbxError::BadLength(format!("{type_id} value must not be empty"))
    })
}

fn get_float(cur: &mut &[u8]) -> f32 {
    scalar::float_decode(cur.get_u32())
}

fn get_vector2(cur: &mut &[u8]) -> RbxVector2 {
    RbxVector2 {
        x: get_float(cur),
        y: get_float(cur),
    }
}

fn get_vector3(cur: &mut &[u8]) -> RbxVector3 {
    RbxVector3 {
        x: get_float(cur),
        y: get_float(cur),
        z: get_float(cur),
    }
}

fn get_color3(cur: &mut &[u8]) -> RbxColor3 {
    RbxColor3 {
        r: get_float(cur),
        g: get_float(cur),
        b: get_float(cur),
    }
}

/// Validates a length-prefixed sequence value and returns the declared
/// keypoint count.
fn sequence_count(type_id: RbxType, b: &[u8], keypoint_size: usize) -> Result<usize, RbxError> {
    if b.len() < 4 {
        return Err(RbxError::BadLength(format!(
            "{type_id} value needs a 4-byte count prefix, got {} bytes",
            b.len()
        )));
    }
    let declared = u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize;
    let data = b.len() - 4;
    if data != declared * keypoint_size {
        return Err(RbxError::BadLength(format!(
            "{type_id} data is {data} bytes where the prefix declares {declared} keypoints of {keypoint_size} bytes"
        )));
    }
    Ok(declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::values_to_bytes;

    #[test]
    fn int_array_scenario_round_trips() {
        let blob = [
            0x00, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x00, 0x01, 0x02, 0x04,
        ];
        let values = values_from_bytes(RbxType::Int, &blob).unwrap();
        let expected: Vec<RbxValue> = [0, -1, 1, 2].into_iter().map(RbxValue::Int).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn reference_array_accumulates_deltas() {
        let blob = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0x14, 0x04, 0x05];
        let values = values_from_bytes(RbxType::Reference, &blob).unwrap();
        let expected: Vec<RbxValue> = [10, 12, 9].into_iter().map(RbxValue::Reference).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn bool_array_treats_any_nonzero_as_true() {
        let values = values_from_bytes(RbxType::Bool, &[0x02, 0x00, 0xFF]).unwrap();
        assert_eq!(
            values,
            vec![
                RbxValue::Bool(true),
                RbxValue::Bool(false),
                RbxValue::Bool(true),
            ]
        );
    }

    #[test]
    fn empty_blob_decodes_to_empty_array() {
        for t in RbxType::ALL {
            if t == RbxType::Vector2int16 {
                continue;
            }
            assert_eq!(values_from_bytes(t, &[]).unwrap(), vec![], "failed for {t}");
        }
    }

    #[test]
    fn vector3_blob_must_be_a_multiple_of_12() {
        let err = values_from_bytes(RbxType::Vector3, &[0u8; 13]).unwrap_err();
        assert!(matches!(err, RbxError::BadLength(_)));
    }

    #[test]
    fn vector2int16_arrays_are_not_implemented() {
        let err = values_from_bytes(RbxType::Vector2int16, &[0u8; 4]).unwrap_err();
        assert!(matches!(err, RbxError::NotImplemented(RbxType::Vector2int16)));
    }

    #[test]
    fn special_cframe_normalizes_rotation_to_zero() {
        // One value: discriminator 2 carries no rotation bytes, so the
        // matrix region is a single byte followed by the position block.
        let mut blob = vec![0x02];
        blob.extend_from_slice(&[0x7F, 0, 0, 0]); // x = 1.0
        blob.extend_from_slice(&[0x80, 0, 0, 0]); // y = 2.0
        blob.extend_from_slice(&[0x80, 0x80, 0, 0]); // z = 3.0
        let values = values_from_bytes(RbxType::CFrame, &blob).unwrap();
        assert_eq!(values.len(), 1);
        match &values[0] {
            RbxValue::CFrame(cf) => {
                assert_eq!(cf.special, 2);
                assert_eq!(cf.rotation, [0.0; 9]);
                assert_eq!(
                    cf.position,
                    RbxVector3 {
                        x: 1.0,
                        y: 2.0,
                        z: 3.0,
                    }
                );
            }
            other => panic!("unexpected value: {other}"),
        }
    }

    #[test]
    fn cframe_position_count_must_match_matrices() {
        // Two discriminator bytes but only one Vector3 worth of positions.
        let blob = [0x02, 0x03, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let err = values_from_bytes(RbxType::CFrame, &blob).unwrap_err();
        assert!(matches!(err, RbxError::BadLength(_)));
    }

    #[test]
    fn cframe_truncated_rotation_fails() {
        // Discriminator 0 demands 36 rotation bytes that are not there.
        let blob = [0x00, 0x01, 0x02];
        let err = values_from_bytes(RbxType::CFrame, &blob).unwrap_err();
        assert!(matches!(err, RbxError::Truncated(_)));
    }

    #[test]
    fn physical_properties_read_one_or_21_bytes() {
        let custom = RbxPhysicalProperties {
            custom_physics: 1,
            density: 0.7,
            friction: 0.3,
            elasticity: 0.5,
            friction_weight: 1.0,
            elasticity_weight: 1.0,
        };
        let values = vec![
            RbxValue::PhysicalProperties(RbxPhysicalProperties::default()),
            RbxValue::PhysicalProperties(custom.clone()),
            RbxValue::PhysicalProperties(RbxPhysicalProperties::default()),
        ];
        let blob = values_to_bytes(RbxType::PhysicalProperties, &values).unwrap();
        assert_eq!(blob.len(), 1 + 21 + 1);
        assert_eq!(values_from_bytes(RbxType::PhysicalProperties, &blob).unwrap(), values);
    }

    #[test]
    fn physical_properties_truncated_fields_fail() {
        let blob = [0x01, 0x00, 0x00];
        let err = values_from_bytes(RbxType::PhysicalProperties, &blob).unwrap_err();
        assert!(matches!(err, RbxError::Truncated(_)));
    }

    #[test]
    fn string_prefix_past_buffer_fails() {
        // Prefix declares 10 bytes, only 2 follow.
        let blob = [0x0A, 0x00, 0x00, 0x00, b'h', b'i'];
        let err = values_from_bytes(RbxType::String, &blob).unwrap_err();
        assert!(matches!(err, RbxError::Truncated(_)));
    }

    #[test]
    fn decode_one_rejects_wrong_lengths() {
        assert!(matches!(
            decode_value(RbxType::Int, &[0u8; 3]),
            Err(RbxError::BadLength(_))
        ));
        assert!(matches!(
            decode_value(RbxType::CFrame, &[0u8; 13]),
            Err(RbxError::BadLength(_))
        ));
        assert!(matches!(
            decode_value(RbxType::PhysicalProperties, &[1u8; 1]),
            Err(RbxError::BadLength(_))
        ));
        assert!(matches!(
            decode_value(RbxType::CFrame, &[]),
            Err(RbxError::BadLength(_))
        ));
    }

    #[test]
    fn vector2int16_single_value_still_round_trips() {
        let v = RbxValue::Vector2int16(RbxVector2int16 { x: -5, y: 300 });
        let mut buf = bytes::BytesMut::new();
        crate::codec::encode_value(&mut buf, &v);
        assert_eq!(decode_value(RbxType::Vector2int16, &buf).unwrap(), v);
    }
}
