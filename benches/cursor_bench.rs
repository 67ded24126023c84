//! Criterion benchmark untuk Cursor Codec
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cursor_codec::codec::slice;
use cursor_codec::{ByteOrder, Cursor, Width};

const REGION_SIZE: usize = 64 * 1024;

fn bench_checked(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_checked");
    group.throughput(Throughput::Elements(1));

    for width in [Width::U8, Width::U16, Width::U32] {
        group.bench_function(format!("write_{}", width), |b| {
            let mut region = vec![0u8; REGION_SIZE];
            let mut cursor = Cursor::new(&mut region[..]);
            let mut i = 0u32;
            b.iter(|| {
                if cursor.write_uint(width, black_box(i & width.max_value())).is_err() {
                    cursor.reset();
                }
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(format!("read_{}", width), |b| {
            let region = vec![0xA5u8; REGION_SIZE];
            let mut cursor = Cursor::new(&region[..]);
            b.iter(|| match cursor.read_uint(width) {
                Ok(v) => {
                    black_box(v);
                }
                Err(_) => cursor.reset(),
            });
        });
    }

    group.finish();
}

fn bench_unchecked(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_unchecked");
    group.throughput(Throughput::Elements(1));

    group.bench_function("write_read_u32", |b| {
        let mut region = vec![0u8; REGION_SIZE];
        let mut cursor = Cursor::new(&mut region[..]);
        let mut i = 0u32;
        b.iter(|| {
            if cursor.remaining() < 4 {
                cursor.reset();
            }
            let pos = cursor.position();
            // SAFETY: remaining() >= 4
            unsafe { cursor.write_u32_unchecked(black_box(i)) };
            cursor.set_position(pos);
            black_box(unsafe { cursor.read_u32_unchecked() });
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_byte_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_order");

    // Frame u8 + u16 + u32 per order
    for order in [ByteOrder::Native, ByteOrder::Little, ByteOrder::Big] {
        group.throughput(Throughput::Bytes(7));
        group.bench_function(format!("frame_{:?}", order), |b| {
            let mut region = [0u8; 7];
            b.iter(|| {
                let mut out = &mut region[..];
                let _ = slice::write_u8(&mut out, black_box(0xAB), order);
                let _ = slice::write_u16(&mut out, black_box(0x1234), order);
                let _ = slice::write_u32(&mut out, black_box(0xDEAD_BEEF), order);

                let mut input = &region[..];
                black_box(slice::read_u8(&mut input, order).ok());
                black_box(slice::read_u16(&mut input, order).ok());
                black_box(slice::read_u32(&mut input, order).ok());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_checked, bench_unchecked, bench_byte_order);
criterion_main!(benches);
