//! Codec Layer: Cursor-Based Integer Encoding
//!
//! Prinsip desain:
//! - No allocation: region selalu milik caller
//! - Explicit byte order: shift-and-mask, bukan pointer cast
//! - Alignment-free: semua access byte-wise
//! - Explicit safety: checked `Result` path + `unsafe` unchecked path

mod byte_order;
mod cursor;
mod scalar;
pub mod slice;
mod width;

pub use byte_order::ByteOrder;
pub use cursor::Cursor;
pub use scalar::Scalar;
pub use width::Width;
