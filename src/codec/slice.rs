//! Advancing-slice codec
//!
//! Slice itu sendiri adalah cursor: setelah operasi sukses, slice
//! di-reborrow mulai `width` byte lebih jauh. Saat gagal slice tidak
//! berubah.
//!
//! ```
//! use cursor_codec::codec::{slice, ByteOrder};
//!
//! let mut region = [0u8; 3];
//! let mut out = &mut region[..];
//! slice::write_u8(&mut out, 0xAB, ByteOrder::Native).unwrap();
//! slice::write_u16(&mut out, 0x1234, ByteOrder::Big).unwrap();
//! assert!(out.is_empty());
//!
//! let mut input = &region[..];
//! assert_eq!(slice::read_u8(&mut input, ByteOrder::Native), Ok(0xAB));
//! assert_eq!(slice::read_u16(&mut input, ByteOrder::Big), Ok(0x1234));
//! ```

use super::byte_order::ByteOrder;
use super::width::Width;
use crate::error::{CodecError, Result};

pub fn read_uint(buf: &mut &[u8], width: Width, order: ByteOrder) -> Result<u32> {
    let needed = width.bytes();
    if buf.len() < needed {
        return Err(CodecError::BufferUnderflow {
            needed,
            remaining: buf.len(),
        });
    }

    let (bytes, rest) = buf.split_at(needed);
    *buf = rest;
    Ok(order.assemble(bytes))
}

#[inline(always)]
pub fn read_u8(buf: &mut &[u8], order: ByteOrder) -> Result<u8> {
    read_uint(buf, Width::U8, order).map(|v| v as u8)
}

#[inline(always)]
pub fn read_u16(buf: &mut &[u8], order: ByteOrder) -> Result<u16> {
    read_uint(buf, Width::U16, order).map(|v| v as u16)
}

#[inline(always)]
pub fn read_u32(buf: &mut &[u8], order: ByteOrder) -> Result<u32> {
    read_uint(buf, Width::U32, order)
}

pub fn write_uint(buf: &mut &mut [u8], width: Width, value: u32, order: ByteOrder) -> Result<()> {
    let value = width.check(value)?;
    let needed = width.bytes();
    if buf.len() < needed {
        return Err(CodecError::BufferOverflow {
            needed,
            remaining: buf.len(),
        });
    }

    let (head, rest) = std::mem::take(buf).split_at_mut(needed);
    order.disassemble(value, head);
    *buf = rest;
    Ok(())
}

#[inline(always)]
pub fn write_u8(buf: &mut &mut [u8], value: u8, order: ByteOrder) -> Result<()> {
    write_uint(buf, Width::U8, value as u32, order)
}

#[inline(always)]
pub fn write_u16(buf: &mut &mut [u8], value: u16, order: ByteOrder) -> Result<()> {
    write_uint(buf, Width::U16, value as u32, order)
}

#[inline(always)]
pub fn write_u32(buf: &mut &mut [u8], value: u32, order: ByteOrder) -> Result<()> {
    write_uint(buf, Width::U32, value, order)
}
