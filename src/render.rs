//! Human-readable rendering of minimization results.
//!
//! The minimization core only returns structured data; this module turns it
//! into text:
//!
//! - **Bit patterns**: one character per variable, most significant first,
//!   `1`/`0` for fixed bits and `-` for don't-cares (`1-0`).
//! - **Product terms**: fixed variables joined by `·`, negated ones prefixed
//!   with `¬` (`a·¬c`). The empty product is `1`.
//! - **Sums**: terms joined by ` + `. The empty sum is `0`.
//! - **Coverage chart**: one row per prime implicant, one column per minterm,
//!   with a check mark where the implicant covers the minterm.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::render::Renderer;
//!
//! let m = minimize(3, [0, 1, 2, 3, 7]).unwrap();
//! let r = Renderer::new(["a", "b", "c"]).unwrap();
//! assert_eq!(r.dnf(&m.minimal_implicants()), "¬a + b·c");
//! ```

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::minimize::Minimization;
use crate::types::Var;
use crate::utils::{full_mask, MAX_VARS};

fn assert_fits(implicant: &Implicant, num_vars: usize) {
    assert!(
        implicant.mask() & !full_mask(num_vars) == 0,
        "implicant {} has fixed bits beyond {} variables",
        implicant,
        num_vars
    );
}

/// Bit pattern of an implicant over `num_vars` variables, e.g. `1-0`.
///
/// # Panics
///
/// Panics if the implicant fixes a bit at or above position `num_vars`.
pub fn bit_pattern(implicant: &Implicant, num_vars: usize) -> String {
    assert_fits(implicant, num_vars);
    Var::all(num_vars)
        .map(|var| match implicant.literal(var, num_vars) {
            Some(true) => '1',
            Some(false) => '0',
            None => '-',
        })
        .collect()
}

/// Default variable names: `x1`, `x2`, ..., `xn`.
pub fn default_names(num_vars: usize) -> Vec<String> {
    Var::all(num_vars).map(|v| v.to_string()).collect()
}

/// Renders terms using a fixed list of variable names.
#[derive(Debug, Clone)]
pub struct Renderer {
    names: Vec<String>,
}

impl Renderer {
    /// Creates a renderer; the `i`-th name belongs to variable `i` (most significant first).
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::NoVariables);
        }
        if names.len() > MAX_VARS {
            return Err(Error::TooManyVariables {
                num_vars: names.len(),
                max: MAX_VARS,
            });
        }
        Ok(Self { names })
    }

    /// Renderer with [default names][default_names] for `num_vars` variables.
    pub fn with_default_names(num_vars: usize) -> Result<Self> {
        Self::new(default_names(num_vars))
    }

    /// Creates a renderer for the given minimization, checking the number of names.
    pub fn for_minimization<S: Into<String>>(
        minimization: &Minimization,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let renderer = Self::new(names)?;
        if renderer.num_vars() != minimization.num_vars() {
            return Err(Error::VarNamesMismatch {
                expected: minimization.num_vars(),
                found: renderer.num_vars(),
            });
        }
        Ok(renderer)
    }

    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Bit pattern of an implicant over this renderer's variables.
    pub fn pattern(&self, implicant: &Implicant) -> String {
        bit_pattern(implicant, self.num_vars())
    }

    /// Product term of an implicant, e.g. `a·¬c`, or `1` for the tautology.
    ///
    /// # Panics
    ///
    /// Panics if the implicant fixes a variable this renderer has no name for.
    pub fn term(&self, implicant: &Implicant) -> String {
        assert_fits(implicant, self.num_vars());
        let literals: Vec<String> = Var::all(self.num_vars())
            .filter_map(|var| {
                let name = &self.names[var.index()];
                implicant
                    .literal(var, self.num_vars())
                    .map(|positive| if positive { name.clone() } else { format!("¬{}", name) })
            })
            .collect();
        if literals.is_empty() {
            "1".to_string()
        } else {
            literals.join("·")
        }
    }

    /// Sum of product terms, e.g. `¬a + b·c`, or `0` for no terms.
    pub fn dnf<'a>(&self, implicants: impl IntoIterator<Item = &'a Implicant>) -> String {
        let terms: Vec<String> = implicants.into_iter().map(|i| self.term(i)).collect();
        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }

    /// Coverage chart: a header of minterms, then one row per prime implicant.
    pub fn chart(&self, minimization: &Minimization) -> String {
        let minterms = minimization.minterms();
        let labels: Vec<String> = minterms.iter().map(|m| format!("m{}", m)).collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = minimization.coverage().entries();
        let id_width = format!("P{}", rows.len().saturating_sub(1)).len();

        let mut out = String::new();
        write!(&mut out, "{:id_width$} ", "").unwrap();
        for label in &labels {
            write!(&mut out, " {:>width$}", label).unwrap();
        }
        out.push('\n');

        for (i, entry) in rows.iter().enumerate() {
            write!(&mut out, "{:<id_width$} ", format!("P{}", i)).unwrap();
            for j in 0..minterms.len() {
                let mark = if entry.covered.contains(j) { "✓" } else { "." };
                write!(&mut out, " {:>width$}", mark).unwrap();
            }
            writeln!(&mut out, "  {}", self.pattern(&entry.implicant)).unwrap();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::minimize::minimize;

    #[test]
    fn test_bit_pattern() {
        assert_eq!(bit_pattern(&Implicant::new(0b100, 0b101), 3), "1-0");
        assert_eq!(bit_pattern(&Implicant::tautology(), 2), "--");
        assert_eq!(bit_pattern(&Implicant::from_minterm(1, 4), 4), "0001");
    }

    #[test]
    fn test_term() {
        let r = Renderer::new(["a", "b", "c"]).unwrap();
        assert_eq!(r.term(&Implicant::new(0b100, 0b101)), "a·¬c");
        assert_eq!(r.term(&Implicant::new(0b010, 0b111)), "¬a·b·¬c");
        assert_eq!(r.term(&Implicant::tautology()), "1");
    }

    #[test]
    fn test_dnf() {
        let r = Renderer::with_default_names(2).unwrap();
        let terms = [Implicant::new(0b01, 0b11), Implicant::new(0b10, 0b11)];
        assert_eq!(r.dnf(&terms), "¬x1·x2 + x1·¬x2");
        assert_eq!(r.dnf(&[]), "0");
    }

    #[test]
    fn test_names_mismatch() {
        let m = minimize(3, [1]).unwrap();
        let err = Renderer::for_minimization(&m, ["a", "b"]).unwrap_err();
        assert_eq!(err, Error::VarNamesMismatch { expected: 3, found: 2 });
        assert!(Renderer::for_minimization(&m, ["p", "q", "r"]).is_ok());
        assert_eq!(Renderer::new(Vec::<String>::new()).unwrap_err(), Error::NoVariables);
    }

    #[test]
    fn test_chart() {
        let m = minimize(2, [1, 2, 3]).unwrap();
        let r = Renderer::new(["a", "b"]).unwrap();
        // Primes: -1 (b) and 1- (a).
        let expected = "    m1 m2 m3\n\
                        P0   ✓  .  ✓  -1\n\
                        P1   .  ✓  ✓  1-\n";
        assert_eq!(r.chart(&m), expected);
    }

    #[test]
    fn test_too_many_names() {
        let names: Vec<String> = default_names(MAX_VARS + 1);
        assert_eq!(
            Renderer::new(names).unwrap_err(),
            Error::TooManyVariables { num_vars: 33, max: 32 }
        );
        assert!(Renderer::with_default_names(MAX_VARS).is_ok());
    }

    #[test]
    #[should_panic(expected = "beyond 2 variables")]
    fn test_term_rejects_wider_implicant() {
        let r = Renderer::new(["a", "b"]).unwrap();
        r.term(&Implicant::new(0b100, 0b100));
    }

    #[test]
    #[should_panic(expected = "beyond 2 variables")]
    fn test_bit_pattern_rejects_wider_implicant() {
        bit_pattern(&Implicant::new(0b101, 0b111), 2);
    }

    #[test]
    fn test_dont_care_high_bits_are_accepted() {
        // Unfixed bits above the width carry no literal, so nothing is lost.
        let r = Renderer::new(["a", "b"]).unwrap();
        assert_eq!(r.term(&Implicant::new(0b01, 0b01)), "b");
        assert_eq!(r.pattern(&Implicant::new(0b01, 0b01)), "-1");
    }
}
