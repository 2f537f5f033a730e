//! Implicants: partial assignments encoded as `(value, mask)` bit patterns.
//!
//! Bit `i` of `mask` is set when bit `i` of the assignment is fixed; a cleared
//! mask bit is a don't-care. Bits of `value` outside the mask are always kept
//! at zero, so two implicants describing the same cube compare equal.

use std::fmt;

use crate::types::Var;
use crate::utils::{full_mask, is_single_bit, MyHash};

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Implicant {
    value: u32,
    mask: u32,
}

impl Implicant {
    /// Creates an implicant; `value` bits outside `mask` are dropped.
    pub const fn new(value: u32, mask: u32) -> Self {
        Self {
            value: value & mask,
            mask,
        }
    }

    /// The fully specified implicant of a single minterm.
    pub fn from_minterm(minterm: u32, num_vars: usize) -> Self {
        Self::new(minterm, full_mask(num_vars))
    }

    /// The implicant with no fixed bits (constant true).
    pub const fn tautology() -> Self {
        Self::new(0, 0)
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Number of ones among the fixed bits.
    pub const fn weight(&self) -> u32 {
        (self.value & self.mask).count_ones()
    }

    /// Number of literals in the product term (fixed bits).
    pub const fn literal_count(&self) -> u32 {
        self.mask.count_ones()
    }

    pub const fn is_tautology(&self) -> bool {
        self.mask == 0
    }

    /// Check whether this implicant covers the given minterm.
    pub const fn covers(&self, minterm: u32) -> bool {
        (minterm & self.mask) == self.value
    }

    /// Merge two implicants that differ in exactly one fixed bit.
    ///
    /// Returns `None` when the masks differ or when the values differ in zero
    /// or several fixed bits. The differing bit becomes a don't-care.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.mask != other.mask {
            return None;
        }
        let diff = (self.value ^ other.value) & self.mask;
        if !is_single_bit(diff) {
            return None;
        }
        Some(Implicant::new(self.value, self.mask & !diff))
    }

    /// Polarity of `var` in this term: `Some(true)` for `x`, `Some(false)` for `¬x`,
    /// `None` when the variable does not occur.
    pub fn literal(&self, var: Var, num_vars: usize) -> Option<bool> {
        let bit = 1u32 << var.bit(num_vars);
        if self.mask & bit == 0 {
            None
        } else {
            Some(self.value & bit != 0)
        }
    }

    /// The minterms (among all `2^num_vars`) this implicant covers, in ascending order.
    pub fn minterms(&self, num_vars: usize) -> impl Iterator<Item = u32> + '_ {
        let free = full_mask(num_vars) & !self.mask;
        // Walk the submasks of the free bits in increasing order.
        let mut next = Some(0u32);
        std::iter::from_fn(move || {
            let sub = next?;
            next = if sub == free {
                None
            } else {
                Some((sub | !free).wrapping_add(1) & free)
            };
            Some(self.value | sub)
        })
    }
}

impl MyHash for Implicant {
    fn hash(&self) -> u64 {
        (self.value, self.mask).hash()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#b}, {:#b})", self.value, self.mask)
    }
}
