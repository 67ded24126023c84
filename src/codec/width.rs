//! Value widths yang didukung codec: 8, 16, 32 bit

use std::fmt;

use crate::error::{CodecError, Result};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    U8 = 1,
    U16 = 2,
    U32 = 4,
}

impl Width {
    /// Jumlah byte yang dipakai value di region
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Nilai terbesar yang representable di width ini
    #[inline(always)]
    pub const fn max_value(self) -> u32 {
        match self {
            Self::U8 => u8::MAX as u32,
            Self::U16 => u16::MAX as u32,
            Self::U32 => u32::MAX,
        }
    }

    #[inline(always)]
    pub fn from_bytes(n: usize) -> Option<Self> {
        match n {
            1 => Some(Self::U8),
            2 => Some(Self::U16),
            4 => Some(Self::U32),
            _ => None,
        }
    }

    /// Pastikan `value` muat tanpa truncation
    #[inline(always)]
    pub fn check(self, value: u32) -> Result<u32> {
        if value > self.max_value() {
            return Err(CodecError::ValueOutOfRange { value, width: self });
        }
        Ok(value)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
        }
    }
}
