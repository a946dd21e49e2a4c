/// FNV-1a 64-bit hasher used for stable content fingerprints.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self::new(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Round to two decimal places.
///
/// Generated values go through this so that their textual form is identical no matter
/// which libm produced the last few bits.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Map a `[-1, 1]` wave sample to a `[0, 100]` percentage.
pub(crate) fn wave_to_percent(wave: f64) -> f64 {
    ((wave * 0.5 + 0.5) * 100.0).clamp(0.0, 100.0)
}

/// Floating modulo for the non-negative index formulas (`(i * step) % m`).
pub(crate) fn fmod(v: f64, m: f64) -> f64 {
    v.rem_euclid(m)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
