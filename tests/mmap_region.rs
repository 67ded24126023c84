//! Cursor di atas region file-backed (memmap2)
//!
//! Region dimiliki mmap, cursor hanya meminjam. Data harus bertahan
//! setelah file di-map ulang.

use std::fs::{self, OpenOptions};
use std::io;

use cursor_codec::{ByteOrder, Cursor};
use memmap2::{MmapMut, MmapOptions};

fn open_region(path: &str, len: usize) -> io::Result<MmapMut> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(len as u64)?;

    // SAFETY: File hanya dipakai oleh test ini
    unsafe { MmapOptions::new().len(len).map_mut(&file) }
}

#[test]
fn test_cursor_over_mmap() {
    let path = "test_cursor_mmap.dat";

    {
        let mut mmap = open_region(path, 4096).unwrap();
        let mut cursor = Cursor::new(&mut mmap[..]);

        cursor.write_u8(0xAB).unwrap();
        cursor.write_u16(0x1234).unwrap();
        cursor.write_u32(0xDEAD_BEEF).unwrap();
        assert_eq!(cursor.position(), 7);

        cursor.reset();
        assert_eq!(cursor.read_u8().unwrap(), 0xAB);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0xDEAD_BEEF);
    }

    fs::remove_file(path).ok();
}

#[test]
fn test_mmap_persistence() {
    let path = "test_cursor_persistence.dat";

    // Write data
    {
        let mut mmap = open_region(path, 4096).unwrap();
        let mut cursor = Cursor::with_order(&mut mmap[..], ByteOrder::Big);
        cursor.write_u32(0x4355_5253).unwrap();
        cursor.write_u16(0x4F52).unwrap();
        mmap.flush().unwrap();
    }

    // Reopen and verify
    {
        let mmap = open_region(path, 4096).unwrap();
        assert_eq!(&mmap[..6], b"CURSOR");

        let mut cursor = Cursor::with_order(&mmap[..], ByteOrder::Big);
        assert_eq!(cursor.read_u32().unwrap(), 0x4355_5253);
        assert_eq!(cursor.read_u16().unwrap(), 0x4F52);
    }

    fs::remove_file(path).ok();
}

#[test]
fn test_mmap_region_end() {
    let path = "test_cursor_end.dat";

    {
        let mut mmap = open_region(path, 16).unwrap();
        let mut cursor = Cursor::new(&mut mmap[..]);
        cursor.set_position(14);

        assert!(cursor.write_u32(1).is_err());
        assert_eq!(cursor.position(), 14);
        cursor.write_u16(0xFFFF).unwrap();
        assert!(cursor.is_empty());
    }

    fs::remove_file(path).ok();
}
