//! Minimization pipeline.
//!
//! [`minimize`] validates its input, fixes the minterm order (ascending, no
//! duplicates), and then runs the stages in sequence:
//!
//! 1. [prime implicant generation][crate::combine],
//! 2. [coverage table construction][crate::coverage],
//! 3. [essential implicant detection][crate::essential],
//! 4. [greedy cover selection][crate::cover].
//!
//! Every stage reads the output of the previous one and produces a new value;
//! nothing is modified in place. The same input always yields the same
//! [`Minimization`].
//!
//! # Optimality
//!
//! The selected cover always covers every minterm, and always contains every
//! essential implicant, but it is chosen greedily and may use more terms or
//! literals than the true minimum.

use log::debug;

use crate::combine::Combiner;
use crate::cover::select_cover;
use crate::coverage::CoverageTable;
use crate::error::{Error, Result};
use crate::essential::find_essential;
use crate::implicant::Implicant;
use crate::utils::MAX_VARS;

/// Everything computed for one Boolean function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimization {
    num_vars: usize,
    prime_implicants: Vec<Implicant>,
    coverage: CoverageTable,
    essential_indices: Vec<usize>,
    minimal_cover_indices: Vec<usize>,
}

impl Minimization {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The input minterms, sorted ascending and deduplicated.
    ///
    /// Bit `j` of every coverage row refers to `minterms()[j]`.
    pub fn minterms(&self) -> &[u32] {
        self.coverage.minterms()
    }

    /// All prime implicants, ascending by `value`, then by `mask`.
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.prime_implicants
    }

    /// Coverage rows, aligned with [`prime_implicants`][Self::prime_implicants].
    pub fn coverage(&self) -> &CoverageTable {
        &self.coverage
    }

    /// Indices (into the prime implicants) of the essential implicants.
    pub fn essential_indices(&self) -> &[usize] {
        &self.essential_indices
    }

    /// Indices (into the prime implicants) of the selected cover, in selection order.
    pub fn minimal_cover_indices(&self) -> &[usize] {
        &self.minimal_cover_indices
    }

    /// The selected cover as implicants, in selection order.
    pub fn minimal_implicants(&self) -> Vec<Implicant> {
        self.minimal_cover_indices
            .iter()
            .map(|&i| self.prime_implicants[i])
            .collect()
    }

    /// Total number of literals in the selected cover.
    pub fn literal_count(&self) -> u32 {
        self.minimal_cover_indices
            .iter()
            .map(|&i| self.prime_implicants[i].literal_count())
            .sum()
    }

    /// The function has no minterms.
    pub fn is_constant_false(&self) -> bool {
        self.prime_implicants.is_empty()
    }

    /// The function is true everywhere.
    pub fn is_constant_true(&self) -> bool {
        matches!(self.prime_implicants.as_slice(), [p] if p.is_tautology())
    }
}

/// Reusable minimizer for functions of a fixed number of variables.
#[derive(Debug, Copy, Clone)]
pub struct Minimizer {
    num_vars: usize,
}

impl Minimizer {
    /// Creates a minimizer for functions of `num_vars` variables.
    ///
    /// Fails if `num_vars` is `0` or larger than 32.
    pub fn new(num_vars: usize) -> Result<Self> {
        if num_vars == 0 {
            return Err(Error::NoVariables);
        }
        if num_vars > MAX_VARS {
            return Err(Error::TooManyVariables {
                num_vars,
                max: MAX_VARS,
            });
        }
        Ok(Self { num_vars })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Validate and normalize a minterm collection: ascending, no duplicates.
    pub fn normalize(&self, minterms: impl IntoIterator<Item = u32>) -> Result<Vec<u32>> {
        let mut minterms: Vec<u32> = minterms.into_iter().collect();
        if let Some(&minterm) = minterms
            .iter()
            .find(|&&m| self.num_vars < MAX_VARS && m >> self.num_vars != 0)
        {
            return Err(Error::MintermOutOfRange {
                minterm,
                num_vars: self.num_vars,
            });
        }
        minterms.sort_unstable();
        minterms.dedup();
        Ok(minterms)
    }

    /// Minimize the function with the given minterms.
    pub fn minimize(&self, minterms: impl IntoIterator<Item = u32>) -> Result<Minimization> {
        let minterms = self.normalize(minterms)?;
        debug!(
            "minimize(num_vars = {}, {} minterms)",
            self.num_vars,
            minterms.len()
        );

        let prime_implicants = Combiner::new(self.num_vars).run(&minterms);
        let coverage = CoverageTable::build(&prime_implicants, &minterms);
        let essential_indices: Vec<usize> = find_essential(&coverage)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        let minimal_cover_indices = select_cover(&coverage, &essential_indices);

        Ok(Minimization {
            num_vars: self.num_vars,
            prime_implicants,
            coverage,
            essential_indices,
            minimal_cover_indices,
        })
    }
}

/// Minimize the function of `num_vars` variables that is true exactly on `minterms`.
///
/// Duplicate minterms are ignored. Fails before doing any work if `num_vars`
/// is not in `1..=32` or if a minterm is not below `2^num_vars`.
///
/// ```
/// use qmc_rs::implicant::Implicant;
/// use qmc_rs::minimize::minimize;
///
/// let m = minimize(3, [4, 5, 6, 7]).unwrap();
/// assert_eq!(m.prime_implicants(), &[Implicant::new(0b100, 0b100)]);
/// assert_eq!(m.minimal_cover_indices(), &[0]);
/// ```
pub fn minimize(num_vars: usize, minterms: impl IntoIterator<Item = u32>) -> Result<Minimization> {
    Minimizer::new(num_vars)?.minimize(minterms)
}
