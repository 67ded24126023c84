//! Cursor Codec - latency benchmark runner
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>   Jumlah operasi per benchmark (default: 1000000)
//!   --order <ORDER>    native | little | big (default: native)
//!   --mmap <PATH>      Jalankan juga round-trip di atas file mmap
//!   --verbose          Tampilkan detail per width

use std::fs::OpenOptions;
use std::hint::black_box;
use std::io;
use std::path::Path;
use std::time::Instant;

use cursor_codec::{ByteOrder, Cursor, Width};
use memmap2::MmapOptions;

/// Benchmark configuration
struct BenchConfig {
    iterations: usize,
    order: ByteOrder,
    mmap_path: Option<String>,
    verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            order: ByteOrder::Native,
            mmap_path: None,
            verbose: false,
        }
    }
}

const REGION_SIZE: usize = 64 * 1024; // 64KB
const WIDTHS: [Width; 3] = [Width::U8, Width::U16, Width::U32];

fn main() {
    let config = parse_args();

    println!("🚀 Cursor Codec - Benchmark");
    println!("===========================\n");
    println!("  Byte order: {:?}", config.order);
    println!("  Iterations: {}\n", config.iterations);

    benchmark_checked(&config);
    benchmark_unchecked(&config);

    if let Some(path) = &config.mmap_path {
        if let Err(e) = mmap_roundtrip(path, config.order) {
            eprintln!("❌ Mmap round-trip failed: {}", e);
            std::process::exit(1);
        }
    }

    println!("\n✅ All benchmarks complete!");
}

fn benchmark_checked(config: &BenchConfig) {
    println!("📊 Checked Cursor (bounds + range checks)");
    println!("-----------------------------------------");

    let mut region = vec![0u8; REGION_SIZE];

    for width in WIDTHS {
        let mut cursor = Cursor::with_order(&mut region[..], config.order);
        let mask = width.max_value();

        let start = Instant::now();
        for i in 0..config.iterations {
            if cursor.remaining() < width.bytes() {
                cursor.reset();
            }
            // Nilai selalu muat karena di-mask
            let _ = cursor.write_uint(width, black_box(i as u32 & mask));
        }
        let write_duration = start.elapsed();

        cursor.reset();
        let start = Instant::now();
        for _ in 0..config.iterations {
            if cursor.remaining() < width.bytes() {
                cursor.reset();
            }
            let _ = black_box(cursor.read_uint(width));
        }
        let read_duration = start.elapsed();

        report(config, width, write_duration.as_nanos(), read_duration.as_nanos());
    }
    println!();
}

fn benchmark_unchecked(config: &BenchConfig) {
    println!("📊 Unchecked Cursor (caller-guaranteed bounds)");
    println!("----------------------------------------------");

    let mut region = vec![0u8; REGION_SIZE];

    for width in WIDTHS {
        let mut cursor = Cursor::with_order(&mut region[..], config.order);
        let mask = width.max_value();

        let start = Instant::now();
        for i in 0..config.iterations {
            if cursor.remaining() < width.bytes() {
                cursor.reset();
            }
            // SAFETY: remaining() dicek di atas
            unsafe { cursor.write_uint_unchecked(width, black_box(i as u32 & mask)) };
        }
        let write_duration = start.elapsed();

        cursor.reset();
        let start = Instant::now();
        for _ in 0..config.iterations {
            if cursor.remaining() < width.bytes() {
                cursor.reset();
            }
            // SAFETY: remaining() dicek di atas
            black_box(unsafe { cursor.read_uint_unchecked(width) });
        }
        let read_duration = start.elapsed();

        report(config, width, write_duration.as_nanos(), read_duration.as_nanos());
    }
}

fn report(config: &BenchConfig, width: Width, write_ns_total: u128, read_ns_total: u128) {
    let write_ns = write_ns_total as f64 / config.iterations as f64;
    let read_ns = read_ns_total as f64 / config.iterations as f64;

    println!(
        "  {:<4} write: {:.2} ns/op   read: {:.2} ns/op",
        width.to_string(),
        write_ns,
        read_ns
    );

    if config.verbose {
        let bytes = (config.iterations * width.bytes()) as f64;
        println!(
            "       write throughput: {:.2} MB/sec",
            bytes / (write_ns_total as f64 / 1e9) / 1_000_000.0
        );
    }
}

/// Round-trip di atas region file-backed (memory milik mmap, bukan cursor)
fn mmap_roundtrip<P: AsRef<Path>>(path: P, order: ByteOrder) -> io::Result<()> {
    println!("\n📊 Mmap Region Round-Trip");
    println!("-------------------------");

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path.as_ref())?;
    file.set_len(REGION_SIZE as u64)?;

    // SAFETY: File dibuka read/write dan tidak di-resize selama mapping hidup
    let mut mmap = unsafe { MmapOptions::new().len(REGION_SIZE).map_mut(&file)? };

    let count = REGION_SIZE / 7;
    let mut cursor = Cursor::with_order(&mut mmap[..], order);

    let start = Instant::now();
    for i in 0..count {
        let v = i as u32;
        cursor
            .write_u8(v as u8)
            .and_then(|_| cursor.write_u16(v as u16))
            .and_then(|_| cursor.write_u32(v))
            .map_err(|e| io::Error::new(io::ErrorKind::UnexpectedEof, e))?;
    }
    let elapsed = start.elapsed();

    cursor.reset();
    for i in 0..count {
        let v = i as u32;
        let frame = (cursor.read_u8(), cursor.read_u16(), cursor.read_u32());
        match frame {
            (Ok(a), Ok(b), Ok(c)) if a == v as u8 && b == v as u16 && c == v => {}
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("mismatch at frame {}", i),
                ))
            }
        }
    }

    mmap.flush()?;

    println!("  Frames: {} (u8 + u16 + u32)", count);
    println!("  Write time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Verified: ✅");

    Ok(())
}

/// Parse command line arguments
fn parse_args() -> BenchConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--order" | "-o" => {
                if i + 1 < args.len() {
                    config.order = match args[i + 1].as_str() {
                        "little" | "le" => ByteOrder::Little,
                        "big" | "be" => ByteOrder::Big,
                        _ => ByteOrder::Native,
                    };
                    i += 1;
                }
            }
            "--mmap" | "-m" => {
                if i + 1 < args.len() {
                    config.mmap_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Cursor Codec Benchmark\n");
                println!("Usage: cursor-codec [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --iterations <N>  Operations per benchmark (default: 1000000)");
                println!("  -o, --order <ORDER>   native | little | big (default: native)");
                println!("  -m, --mmap <PATH>     Also run a round-trip over a mapped file");
                println!("  -v, --verbose         Show throughput per width");
                println!("  -h, --help            Show this help message");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}
