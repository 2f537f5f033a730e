//! Type-safe wrappers for variables and implicant identifiers.
//!
//! This module provides newtype wrappers that keep variable indices, bit
//! positions and arena identifiers apart, preventing common mistakes when
//! juggling several kinds of small integers at once.

use std::fmt;

/// A variable index (0-based, most-significant-first).
///
/// Variables are listed left to right, so variable `0` is the highest bit
/// of a minterm and variable `num_vars - 1` is the lowest one.
///
/// # Invariants
///
/// - A variable is only meaningful together with the `num_vars` of the function
/// - `index < num_vars` must hold whenever the bit position is computed
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(usize);

impl Var {
    /// Creates a new variable with the given index.
    pub fn new(index: usize) -> Self {
        Var(index)
    }

    /// Returns the raw variable index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the bit position of this variable inside a `num_vars`-bit pattern.
    ///
    /// # Panics
    ///
    /// Panics if the variable does not belong to a function of `num_vars` variables.
    pub fn bit(self, num_vars: usize) -> u32 {
        assert!(
            self.0 < num_vars,
            "Variable index {} out of range for {} variables",
            self.0,
            num_vars
        );
        (num_vars - 1 - self.0) as u32
    }

    /// Iterates over all variables of a `num_vars`-variable function, in listing order.
    pub fn all(num_vars: usize) -> impl Iterator<Item = Var> {
        (0..num_vars).map(Var)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0 + 1)
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A stable identifier of an implicant inside a [`Table`][crate::table::Table] arena.
///
/// Identifiers are handed out once, at creation, and never re-derived by value lookup.
/// Id `0` is reserved for the arena sentinel and never refers to a real implicant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ImplicantId(u32);

impl ImplicantId {
    /// Wraps a raw arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index == 0` (the sentinel slot).
    pub fn new(index: usize) -> Self {
        assert_ne!(index, 0, "Implicant ids must be >= 1");
        ImplicantId(index as u32)
    }

    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ImplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_var_bit_is_msb_first() {
        assert_eq!(Var::new(0).bit(3), 2);
        assert_eq!(Var::new(1).bit(3), 1);
        assert_eq!(Var::new(2).bit(3), 0);
        assert_eq!(Var::new(0).bit(1), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_var_bit_out_of_range() {
        Var::new(3).bit(3);
    }

    #[test]
    fn test_var_all() {
        let vars: Vec<usize> = Var::all(4).map(usize::from).collect();
        assert_eq!(vars, vec![0, 1, 2, 3]);
        assert_eq!(Var::new(0).to_string(), "x1");
    }

    #[test]
    fn test_implicant_id() {
        let id = ImplicantId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "#7");
        assert!(ImplicantId::new(1) < id);
    }

    #[test]
    #[should_panic(expected = "Implicant ids must be >= 1")]
    fn test_implicant_id_zero_panics() {
        ImplicantId::new(0);
    }
}
