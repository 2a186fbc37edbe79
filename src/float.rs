//! Sortable codecs for the IEEE-754 float domains.
//!
//! For non-negative floats the IEEE-754 bit pattern already increases with
//! the value when read as an unsigned integer, so setting the sign bit lifts
//! them above every encoded negative. Negative floats carry the sign bit and
//! magnitude bits that grow toward more negative values; complementing every
//! byte clears the top bit and reverses their internal order in one step.
//!
//! `-0.0` satisfies `value >= 0.0` and therefore encodes identically to
//! `+0.0`. NaN never satisfies it, so every NaN takes the complement branch;
//! where NaN and the infinities land in the byte order follows from the raw
//! bit transform and is pinned by tests rather than special-cased.

use crate::int::expect_width;
use crate::{Domain, Result};

/// Map big-endian IEEE-754 bytes onto sortable bytes. `non_negative` must
/// be the result of `value >= 0.0` on the source float.
fn normalize_float<const N: usize>(
    mut bytes: [u8; N],
    non_negative: bool,
) -> [u8; N] {
    if non_negative {
        bytes[0] |= 0x80;
    } else {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

/// Undo [`normalize_float`], branching on the stored top bit.
fn denormalize_float<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    if bytes[0] & 0x80 != 0 {
        bytes[0] ^= 0x80;
    } else {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

/// Encode a 32-bit float as four sortable bytes.
pub fn encode_f32(value: f32) -> [u8; 4] {
    normalize_float(value.to_be_bytes(), value >= 0.0)
}

/// Decode four bytes produced by [`encode_f32`].
pub fn decode_f32(bytes: &[u8]) -> Result<f32> {
    let b = expect_width(Domain::Float32, bytes)?;
    Ok(f32::from_be_bytes(denormalize_float(b)))
}

/// Encode a 64-bit float as eight sortable bytes.
pub fn encode_f64(value: f64) -> [u8; 8] {
    normalize_float(value.to_be_bytes(), value >= 0.0)
}

/// Decode eight bytes produced by [`encode_f64`].
pub fn decode_f64(bytes: &[u8]) -> Result<f64> {
    let b = expect_width(Domain::Float64, bytes)?;
    Ok(f64::from_be_bytes(denormalize_float(b)))
}
