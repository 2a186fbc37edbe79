//! Order-Preserving Byte Encodings for Fixed-Width Numeric Keys
//!
//! This crate converts signed/unsigned integers of 8/16/32/64 bits and
//! IEEE-754 floats of 32/64 bits into byte strings whose unsigned
//! lexicographic order matches the numeric order of the source values, and
//! back. A byte-ordered store (a sorted key-value index such as LMDB, sled,
//! or an SSTable) can hold numeric keys encoded this way and still iterate
//! them numerically.
//!
//! Encoded bytes are always exactly as wide as the source type and always
//! big-endian (network byte order), regardless of host architecture. No type
//! tag is embedded on the wire: the caller must pair each encoded value with
//! the matching decoder, or use [`SortableBytes`] to carry the domain
//! alongside the bytes in memory.

mod sortable;
pub use sortable::*;
mod domain;
pub use domain::*;
mod int;
pub use int::*;
mod float;
pub use float::*;
mod error;
pub use error::*;
