use core::fmt;

use crate::{
    Domain, Error, Result, decode_f32, decode_f64, decode_i8, decode_i16,
    decode_i32, decode_i64, decode_u8, decode_u16, decode_u32, decode_u64,
    encode_f32, encode_f64, encode_i8, encode_i16, encode_i32, encode_i64,
    encode_u8, encode_u16, encode_u32, encode_u64,
};

/// A numeric key encoded to sortable bytes, together with the domain it was
/// encoded from.
///
/// The wire representation is [`as_bytes`](Self::as_bytes) alone: exactly
/// `domain().width()` big-endian bytes with no embedded tag. The domain
/// travels only in memory so that decoding can be checked: converting back
/// to a primitive fails unless the requested type matches the domain.
///
/// Keys order by `(domain, bytes)`: different domains group separately, and
/// within a domain byte order equals numeric order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortableBytes {
    domain: Domain,
    bytes: Vec<u8>,
}

impl SortableBytes {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Encode an integer value into `domain` after checking it against the
    /// domain's exact bounds.
    ///
    /// Every integer domain is checked the same way; out-of-range input is
    /// rejected, never truncated. Float domains reject with [`Error::Kind`].
    pub fn from_int(domain: Domain, value: i128) -> Result<Self> {
        let Some((min, max)) = domain.int_bounds() else {
            return Err(Error::Kind { domain, requested: "integer" });
        };
        if value < min || value > max {
            return Err(Error::OutOfRange { domain, value });
        }
        let bytes = match domain {
            Domain::Int8 => encode_i8(value as i8).to_vec(),
            Domain::Uint8 => encode_u8(value as u8).to_vec(),
            Domain::Int16 => encode_i16(value as i16).to_vec(),
            Domain::Uint16 => encode_u16(value as u16).to_vec(),
            Domain::Int32 => encode_i32(value as i32).to_vec(),
            Domain::Uint32 => encode_u32(value as u32).to_vec(),
            Domain::Int64 => encode_i64(value as i64).to_vec(),
            Domain::Uint64 => encode_u64(value as u64).to_vec(),
            Domain::Float32 | Domain::Float64 => {
                unreachable!("int_bounds is Some only for integer domains")
            }
        };
        Ok(Self { domain, bytes })
    }

    /// Encode a float value into `domain`. `Float32` narrows with an `as`
    /// cast (standard numeric conversion); integer domains reject with
    /// [`Error::Kind`].
    pub fn from_float(domain: Domain, value: f64) -> Result<Self> {
        let bytes = match domain {
            Domain::Float32 => encode_f32(value as f32).to_vec(),
            Domain::Float64 => encode_f64(value).to_vec(),
            _ => return Err(Error::Kind { domain, requested: "float" }),
        };
        Ok(Self { domain, bytes })
    }

    /// Adopt already-encoded big-endian sortable bytes for `domain`.
    /// Validates only the length; any bit pattern of the right width is a
    /// decodable key.
    pub fn from_be_bytes(
        domain: Domain,
        bytes: impl AsRef<[u8]>,
    ) -> Result<Self> {
        let b = bytes.as_ref();
        if b.len() != domain.width() {
            return Err(Error::Length {
                domain,
                expected: domain.width(),
                got: b.len(),
            });
        }
        Ok(Self { domain, bytes: b.to_vec() })
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    /// Domain the key was encoded from.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        self.domain.width()
    }

    /// The sortable bytes, big-endian, exactly [`width`](Self::width) long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    // ───────────────────────────── Decoders ─────────────────────────────────

    /// Decode an integer-domain key back to its value, widened to `i128`.
    pub fn to_int(&self) -> Result<i128> {
        match self.domain {
            Domain::Int8 => Ok(decode_i8(&self.bytes)? as i128),
            Domain::Uint8 => Ok(decode_u8(&self.bytes)? as i128),
            Domain::Int16 => Ok(decode_i16(&self.bytes)? as i128),
            Domain::Uint16 => Ok(decode_u16(&self.bytes)? as i128),
            Domain::Int32 => Ok(decode_i32(&self.bytes)? as i128),
            Domain::Uint32 => Ok(decode_u32(&self.bytes)? as i128),
            Domain::Int64 => Ok(decode_i64(&self.bytes)? as i128),
            Domain::Uint64 => Ok(decode_u64(&self.bytes)? as i128),
            Domain::Float32 | Domain::Float64 => Err(Error::Kind {
                domain: self.domain,
                requested: "integer",
            }),
        }
    }

    /// Decode a float-domain key back to its value, widened to `f64`.
    pub fn to_float(&self) -> Result<f64> {
        match self.domain {
            Domain::Float32 => Ok(decode_f32(&self.bytes)? as f64),
            Domain::Float64 => decode_f64(&self.bytes),
            d => Err(Error::Kind { domain: d, requested: "float" }),
        }
    }
}

// ─────────────────────── Primitive → Key Conversions ────────────────────────

impl From<i8> for SortableBytes {
    fn from(value: i8) -> Self {
        Self { domain: Domain::Int8, bytes: encode_i8(value).to_vec() }
    }
}

impl From<u8> for SortableBytes {
    fn from(value: u8) -> Self {
        Self { domain: Domain::Uint8, bytes: encode_u8(value).to_vec() }
    }
}

impl From<i16> for SortableBytes {
    fn from(value: i16) -> Self {
        Self { domain: Domain::Int16, bytes: encode_i16(value).to_vec() }
    }
}

impl From<u16> for SortableBytes {
    fn from(value: u16) -> Self {
        Self { domain: Domain::Uint16, bytes: encode_u16(value).to_vec() }
    }
}

impl From<i32> for SortableBytes {
    fn from(value: i32) -> Self {
        Self { domain: Domain::Int32, bytes: encode_i32(value).to_vec() }
    }
}

impl From<u32> for SortableBytes {
    fn from(value: u32) -> Self {
        Self { domain: Domain::Uint32, bytes: encode_u32(value).to_vec() }
    }
}

impl From<i64> for SortableBytes {
    fn from(value: i64) -> Self {
        Self { domain: Domain::Int64, bytes: encode_i64(value).to_vec() }
    }
}

impl From<u64> for SortableBytes {
    fn from(value: u64) -> Self {
        Self { domain: Domain::Uint64, bytes: encode_u64(value).to_vec() }
    }
}

impl From<f32> for SortableBytes {
    fn from(value: f32) -> Self {
        Self { domain: Domain::Float32, bytes: encode_f32(value).to_vec() }
    }
}

impl From<f64> for SortableBytes {
    fn from(value: f64) -> Self {
        Self { domain: Domain::Float64, bytes: encode_f64(value).to_vec() }
    }
}

// ─────────────────────── Key → Primitive Conversions ────────────────────────

fn require(key: &SortableBytes, domain: Domain) -> Result<()> {
    if key.domain != domain {
        return Err(Error::Kind {
            domain: key.domain,
            requested: match domain {
                Domain::Int8 => "int8",
                Domain::Uint8 => "uint8",
                Domain::Int16 => "int16",
                Domain::Uint16 => "uint16",
                Domain::Int32 => "int32",
                Domain::Uint32 => "uint32",
                Domain::Int64 => "int64",
                Domain::Uint64 => "uint64",
                Domain::Float32 => "float32",
                Domain::Float64 => "float64",
            },
        });
    }
    Ok(())
}

impl TryFrom<SortableBytes> for i8 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Int8)?;
        decode_i8(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for u8 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Uint8)?;
        decode_u8(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for i16 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Int16)?;
        decode_i16(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for u16 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Uint16)?;
        decode_u16(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for i32 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Int32)?;
        decode_i32(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for u32 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Uint32)?;
        decode_u32(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for i64 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Int64)?;
        decode_i64(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for u64 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Uint64)?;
        decode_u64(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for f32 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Float32)?;
        decode_f32(&key.bytes)
    }
}

impl TryFrom<SortableBytes> for f64 {
    type Error = Error;
    fn try_from(key: SortableBytes) -> Result<Self> {
        require(&key, Domain::Float64)?;
        decode_f64(&key.bytes)
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for SortableBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(h'{}')", self.domain, hex::encode(&self.bytes))
    }
}
