//! Byte order: explicit shift-and-mask assembly
//!
//! Tidak ada reinterpretasi memory (`*(u16*)ptr`). Setiap value dirakit
//! byte per byte, jadi aman untuk offset yang tidak aligned dan hasilnya
//! sama di semua arsitektur untuk `Little`/`Big`.

/// Urutan byte untuk multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least-significant byte dulu
    Little,
    /// Most-significant byte dulu (network order)
    Big,
    /// Byte order host. Pakai ini untuk kompatibilitas dengan data
    /// yang ditulis langsung dari memory host.
    #[default]
    Native,
}

impl ByteOrder {
    /// `Native` yang sudah di-resolve ke `Little` atau `Big`
    #[cfg(target_endian = "little")]
    pub const NATIVE_RESOLVED: Self = Self::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE_RESOLVED: Self = Self::Big;

    #[inline(always)]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => Self::NATIVE_RESOLVED,
            other => other,
        }
    }

    /// Rakit `bytes` (panjang 1, 2, atau 4) menjadi unsigned integer
    #[inline(always)]
    pub fn assemble(self, bytes: &[u8]) -> u32 {
        debug_assert!(matches!(bytes.len(), 1 | 2 | 4));
        match self.resolve() {
            Self::Big => bytes
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | b as u32),
            _ => bytes
                .iter()
                .rev()
                .fold(0u32, |acc, &b| (acc << 8) | b as u32),
        }
    }

    /// Pecah `value` ke `out`. Hanya `out.len()` byte terendah yang ditulis.
    #[inline(always)]
    pub fn disassemble(self, value: u32, out: &mut [u8]) {
        debug_assert!(matches!(out.len(), 1 | 2 | 4));
        let last = out.len() - 1;
        let big = self.resolve() == Self::Big;
        for (i, slot) in out.iter_mut().enumerate() {
            let shift = if big { (last - i) * 8 } else { i * 8 };
            *slot = ((value >> shift) & 0xFF) as u8;
        }
    }
}
