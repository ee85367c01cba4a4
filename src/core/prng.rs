// Small deterministic PRNG and integer hash (no external crates).
//
// Not cryptographically secure. Used for synthetic chart data and
// pseudo-metrics that must reproduce bit-for-bit on every platform.

const ZERO_STATE_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// splitmix64 finalizer. Bijective on `u64`, good avalanche.
#[inline]
pub fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Map the top 53 bits of `bits` to `[0, 1)`.
#[inline]
pub fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Hash a float seed together with a small integer offset into `[0, 1)`.
///
/// `-0.0` and `0.0` hash identically; every NaN payload is treated as `0.0`.
pub fn hash_unit(seed: f64, offset: u64) -> f64 {
    let seed = if seed == 0.0 || seed.is_nan() { 0.0 } else { seed };
    let h = mix64(seed.to_bits() ^ mix64(offset));
    unit_f64(h)
}

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero.
        let seed = if seed == 0 { ZERO_STATE_REPLACEMENT } else { seed };
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prng_is_reproducible_per_seed() {
        let mut a = Prng::new(7);
        let mut b = Prng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut p = Prng::new(0);
        let first = p.next_u64();
        assert_ne!(first, 0);
        assert_ne!(first, p.next_u64());
    }

    #[test]
    fn unit_values_stay_in_half_open_range() {
        assert_eq!(unit_f64(0), 0.0);
        assert!(unit_f64(u64::MAX) < 1.0);

        let mut p = Prng::new(99);
        for _ in 0..1000 {
            let v = p.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn hash_unit_normalizes_signed_zero_and_nan() {
        assert_eq!(hash_unit(0.0, 3).to_bits(), hash_unit(-0.0, 3).to_bits());
        assert_eq!(hash_unit(f64::NAN, 3).to_bits(), hash_unit(0.0, 3).to_bits());
    }

    #[test]
    fn hash_unit_separates_offsets() {
        let seed = 123.456;
        let values: Vec<f64> = (1..=6).map(|o| hash_unit(seed, o)).collect();
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a.to_bits(), b.to_bits());
            }
        }
    }
}
