/// Largest supported number of variables (patterns are stored in `u32`).
pub const MAX_VARS: usize = 32;

/// Mask with the lowest `num_vars` bits set.
///
/// ```text
/// full_mask(3) = 0b111
/// ```
pub fn full_mask(num_vars: usize) -> u32 {
    assert!(num_vars <= MAX_VARS, "At most {} variables are supported", MAX_VARS);
    if num_vars == 0 {
        0
    } else {
        u32::MAX >> (MAX_VARS - num_vars)
    }
}

/// Returns `true` if exactly one bit of `x` is set.
pub fn is_single_bit(x: u32) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// [Szudzik pairing function][szudzik-pairing].
///
/// ```text
/// (a, b) -> if (a<b) then (b^2 + a) else (a^2 + a + b)
/// ```
///
/// [szudzik-pairing]: http://szudzik.com/ElegantPairing.pdf
pub fn pairing_szudzik(a: u64, b: u64) -> u64 {
    if a < b {
        b * b + a
    } else {
        a * a + a + b
    }
}

/// [Pairing function][pairing] for two `u64` values.
///
/// [pairing]: https://en.wikipedia.org/wiki/Pairing_function
pub fn pairing2(a: u64, b: u64) -> u64 {
    pairing_szudzik(a, b)
}

pub trait MyHash {
    /// Perfect hash function.
    fn hash(&self) -> u64;
}

impl MyHash for (u32, u32) {
    fn hash(&self) -> u64 {
        pairing2(self.0 as u64, self.1 as u64)
    }
}
