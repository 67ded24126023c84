//! Cursor over a caller-owned byte region
//!
//! Cursor = `(region, offset, byte order)`. Region tidak pernah dialokasi,
//! di-resize, atau di-free oleh cursor; cursor hanya memindahkan offset.
//!
//! Dua varian per operasi:
//! - Checked (`read_u16`, `write_u32`, ...): return `Result`, cursor dan
//!   region tidak berubah saat gagal.
//! - Unchecked (`read_u16_unchecked`, ...): `unsafe`, caller menjamin
//!   cukup byte tersisa. Untuk hot path yang sudah divalidasi.

use super::byte_order::ByteOrder;
use super::scalar::Scalar;
use super::width::Width;
use crate::error::{CodecError, Result};

/// Mutable position ke dalam byte region
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    inner: T,
    pos: usize,
    order: ByteOrder,
}

impl<T> Cursor<T> {
    /// Cursor di posisi 0 dengan native byte order
    pub fn new(inner: T) -> Self {
        Self::with_order(inner, ByteOrder::Native)
    }

    pub fn with_order(inner: T, order: ByteOrder) -> Self {
        Self {
            inner,
            pos: 0,
            order,
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Pindah ke `pos`. Boleh melewati akhir region; operasi checked
    /// berikutnya akan gagal, bukan panic.
    #[inline(always)]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Reset cursor ke awal region untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    #[inline(always)]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    #[inline(always)]
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: AsRef<[u8]>> Cursor<T> {
    /// Total panjang region
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.as_ref().len()
    }

    /// Byte yang tersisa dari posisi cursor sampai akhir region
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.pos)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Byte sebelum posisi cursor (data yang sudah ditulis/dibaca)
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        let buf = self.inner.as_ref();
        &buf[..self.pos.min(buf.len())]
    }

    /// Lompati `n` byte tanpa membaca
    pub fn skip(&mut self, n: usize) -> Result<()> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::BufferUnderflow {
                needed: n,
                remaining,
            });
        }
        self.pos += n;
        Ok(())
    }

    /// Ambil `width` byte di posisi cursor lalu advance
    #[inline(always)]
    fn take(&mut self, width: Width) -> Result<&[u8]> {
        let needed = width.bytes();
        let remaining = self.remaining();
        if needed > remaining {
            return Err(CodecError::BufferUnderflow { needed, remaining });
        }

        let start = self.pos;
        self.pos += needed;
        Ok(&self.inner.as_ref()[start..start + needed])
    }

    /// Baca unsigned integer selebar `width`, hasil di-widen ke u32
    #[inline(always)]
    pub fn read_uint(&mut self, width: Width) -> Result<u32> {
        let order = self.order;
        let bytes = self.take(width)?;
        Ok(order.assemble(bytes))
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read::<u8>()
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read::<u16>()
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read::<u32>()
    }

    /// Generic read untuk semua `Scalar`
    #[inline(always)]
    pub fn read<S: Scalar>(&mut self) -> Result<S> {
        self.read_uint(S::WIDTH).map(S::from_u32)
    }

    /// Baca tanpa bounds check
    ///
    /// # Safety
    /// Minimal `width.bytes()` byte harus tersisa dari posisi cursor.
    #[inline(always)]
    pub unsafe fn read_uint_unchecked(&mut self, width: Width) -> u32 {
        let needed = width.bytes();
        debug_assert!(needed <= self.remaining(), "read past end of region");

        let start = self.pos;
        self.pos += needed;
        let bytes = self.inner.as_ref().get_unchecked(start..start + needed);
        self.order.assemble(bytes)
    }

    /// # Safety
    /// Minimal 1 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn read_u8_unchecked(&mut self) -> u8 {
        self.read_uint_unchecked(Width::U8) as u8
    }

    /// # Safety
    /// Minimal 2 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn read_u16_unchecked(&mut self) -> u16 {
        self.read_uint_unchecked(Width::U16) as u16
    }

    /// # Safety
    /// Minimal 4 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn read_u32_unchecked(&mut self) -> u32 {
        self.read_uint_unchecked(Width::U32)
    }
}

impl<T: AsMut<[u8]>> Cursor<T> {
    #[inline(always)]
    fn remaining_mut(&mut self) -> usize {
        self.inner.as_mut().len().saturating_sub(self.pos)
    }

    #[inline(always)]
    fn take_mut(&mut self, width: Width) -> Result<&mut [u8]> {
        let needed = width.bytes();
        let remaining = self.remaining_mut();
        if needed > remaining {
            return Err(CodecError::BufferOverflow { needed, remaining });
        }

        let start = self.pos;
        self.pos += needed;
        Ok(&mut self.inner.as_mut()[start..start + needed])
    }

    /// Tulis `value` selebar `width`
    ///
    /// Range dicek dulu, lalu ruang. Gagal = tidak ada byte yang ditulis.
    #[inline(always)]
    pub fn write_uint(&mut self, width: Width, value: u32) -> Result<()> {
        let value = width.check(value)?;
        let order = self.order;
        let out = self.take_mut(width)?;
        order.disassemble(value, out);
        Ok(())
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(value)
    }

    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write(value)
    }

    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write(value)
    }

    /// Generic write untuk semua `Scalar`
    #[inline(always)]
    pub fn write<S: Scalar>(&mut self, value: S) -> Result<()> {
        self.write_uint(S::WIDTH, value.to_u32())
    }

    /// Tulis tanpa bounds check dan tanpa range check
    ///
    /// Bit di atas `width` dibuang.
    ///
    /// # Safety
    /// Minimal `width.bytes()` byte harus tersisa dari posisi cursor.
    #[inline(always)]
    pub unsafe fn write_uint_unchecked(&mut self, width: Width, value: u32) {
        let needed = width.bytes();
        debug_assert!(needed <= self.remaining_mut(), "write past end of region");

        let start = self.pos;
        self.pos += needed;
        let order = self.order;
        let out = self.inner.as_mut().get_unchecked_mut(start..start + needed);
        order.disassemble(value, out);
    }

    /// # Safety
    /// Minimal 1 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn write_u8_unchecked(&mut self, value: u8) {
        self.write_uint_unchecked(Width::U8, value as u32);
    }

    /// # Safety
    /// Minimal 2 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn write_u16_unchecked(&mut self, value: u16) {
        self.write_uint_unchecked(Width::U16, value as u32);
    }

    /// # Safety
    /// Minimal 4 byte harus tersisa.
    #[inline(always)]
    pub unsafe fn write_u32_unchecked(&mut self, value: u32) {
        self.write_uint_unchecked(Width::U32, value);
    }
}
