//! Error taxonomy untuk checked codec operations
//!
//! Semua kegagalan dikembalikan ke caller langsung. Tidak ada retry
//! di layer ini, cursor dan region tidak berubah saat error.

use thiserror::Error;

use crate::codec::Width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Read (atau skip) butuh lebih banyak byte dari yang tersisa
    #[error("buffer underflow: need {needed} bytes, {remaining} remaining")]
    BufferUnderflow { needed: usize, remaining: usize },

    /// Write butuh lebih banyak ruang dari yang tersisa
    #[error("buffer overflow: need {needed} bytes, {remaining} remaining")]
    BufferOverflow { needed: usize, remaining: usize },

    /// Value tidak muat di width target
    #[error("value {value} does not fit in {width}")]
    ValueOutOfRange { value: u32, width: Width },
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CodecError::BufferUnderflow {
            needed: 4,
            remaining: 3,
        };
        assert_eq!(err.to_string(), "buffer underflow: need 4 bytes, 3 remaining");

        let err = CodecError::ValueOutOfRange {
            value: 300,
            width: Width::U8,
        };
        assert_eq!(err.to_string(), "value 300 does not fit in u8");
    }
}
