//! Cursor Codec - Raw Integer Read/Write over Byte Regions
//!
//! Arsitektur:
//! - Cursor: `(region, offset)` di atas memory milik caller
//! - Width: 8/16/32-bit unsigned values
//! - Byte order: Little, Big, atau Native (host)
//! - Errors: `BufferUnderflow`, `BufferOverflow`, `ValueOutOfRange`

pub mod codec;
pub mod error;

pub use codec::{ByteOrder, Cursor, Scalar, Width};
pub use error::{CodecError, Result};
