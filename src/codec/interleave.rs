//! Byte-matrix transpose used to group like bytes before compression.

use crate::error::RbxError;

/// Transposes `buf` viewed as a `rows x stride` byte matrix, in place.
///
/// The byte at `r * stride + c` moves to `c * rows + r`, so the nth bytes of
/// each `stride`-sized group end up contiguous:
///
/// ```text
/// original:    abcd1234
/// interleaved: a1b2c3d4
/// ```
///
/// `stride` must be greater than zero and divide the buffer length.
pub fn interleave(buf: &mut [u8], stride: usize) -> Result<(), RbxError> {
    check_stride(buf, stride)?;
    transpose(buf, stride);
    Ok(())
}

/// Inverse of [`interleave`] for the same stride.
pub fn deinterleave(buf: &mut [u8], stride: usize) -> Result<(), RbxError> {
    check_stride(buf, stride)?;
    transpose(buf, buf.len() / stride);
    Ok(())
}

fn check_stride(buf: &[u8], stride: usize) -> Result<(), RbxError> {
    if stride == 0 {
        return Err(RbxError::InterleaveArg(
            "stride must be greater than 0".into(),
        ));
    }
    if buf.len() % stride != 0 {
        return Err(RbxError::InterleaveArg(format!(
            "stride {stride} is not a divisor of buffer length {}",
            buf.len()
        )));
    }
    Ok(())
}

fn transpose(buf: &mut [u8], cols: usize) {
    if buf.is_empty() {
        return;
    }
    let rows = buf.len() / cols;
    if rows == cols {
        // Square: swap across the diagonal in place.
        for r in 0..rows {
            for c in 0..r {
                buf.swap(r * cols + c, c * cols + r);
            }
        }
    } else {
        // Rectangular: one scratch buffer of the same size.
        let mut tmp = vec![0u8; buf.len()];
        for r in 0..rows {
            for c in 0..cols {
                tmp[c * rows + r] = buf[r * cols + c];
            }
        }
        buf.copy_from_slice(&tmp);
    }
}
