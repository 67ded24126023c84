//! Fixed-width unsigned integers yang bisa lewat cursor
//!
//! Dipakai untuk generic `Cursor::read::<T>()` / `Cursor::write(v)`.

use super::width::Width;

pub trait Scalar: Copy {
    /// Ukuran encoded value
    const WIDTH: Width;

    fn to_u32(self) -> u32;

    /// Bit di atas `WIDTH` dibuang
    fn from_u32(value: u32) -> Self;

    #[inline(always)]
    fn size_of() -> usize {
        Self::WIDTH.bytes()
    }
}

impl Scalar for u8 {
    const WIDTH: Width = Width::U8;

    #[inline(always)]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value as u8
    }
}

impl Scalar for u16 {
    const WIDTH: Width = Width::U16;

    #[inline(always)]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value as u16
    }
}

impl Scalar for u32 {
    const WIDTH: Width = Width::U32;

    #[inline(always)]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value
    }
}
