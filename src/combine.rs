//! Prime implicant generation by iterative merging.
//!
//! The working set starts with one fully specified implicant per minterm.
//! Each round groups the working set by [weight][Implicant::weight] and tries
//! to merge every implicant of weight `w` with every implicant of weight
//! `w + 1`. Merged results form the next working set; everything that merged
//! with nothing is prime. The number of fixed bits drops by one per round, so
//! the process stops after at most `num_vars + 1` rounds.
//!
//! All implicants live in a hash-consing [`Table`], so "the same implicant"
//! always means "the same [`ImplicantId`]", never a lookup by value in a list.
//!
//! # Example
//!
//! ```
//! use qmc_rs::combine::prime_implicants;
//! use qmc_rs::implicant::Implicant;
//!
//! // f(a, b) = a: minterms 10 and 11
//! let primes = prime_implicants(&[2, 3], 2);
//! assert_eq!(primes, vec![Implicant::new(0b10, 0b10)]);
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::implicant::Implicant;
use crate::table::Table;
use crate::types::ImplicantId;

/// Result of one merging round, computed from an unmodified snapshot of the working set.
#[derive(Debug, Default)]
struct Round {
    /// Deduplicated merge results, in order of first creation.
    merged: Vec<ImplicantId>,
    /// Members of the working set that merged with nothing.
    unused: Vec<ImplicantId>,
}

/// Prime implicant generator over a single arena.
#[derive(Debug)]
pub struct Combiner {
    num_vars: usize,
    table: Table<Implicant>,
    rounds: usize,
}

impl Combiner {
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            table: Table::new(num_vars.max(4)),
            rounds: 0,
        }
    }

    /// Number of rounds performed so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Every implicant created so far (minterms, intermediate merges and primes).
    pub fn table(&self) -> &Table<Implicant> {
        &self.table
    }

    /// Compute the prime implicants covering exactly the given minterms.
    ///
    /// The minterms must be unique and fit into `num_vars` bits. The result is
    /// sorted ascending by `value`, then by `mask`.
    ///
    /// # Panics
    ///
    /// Panics if a minterm does not fit into `num_vars` bits.
    pub fn run(&mut self, minterms: &[u32]) -> Vec<Implicant> {
        let mut current: Vec<ImplicantId> = minterms
            .iter()
            .map(|&m| {
                assert!(
                    self.num_vars == 32 || m >> self.num_vars == 0,
                    "minterm {} does not fit into {} variables",
                    m,
                    self.num_vars
                );
                self.table.put(Implicant::from_minterm(m, self.num_vars))
            })
            .collect();

        let mut seen = BitSet::default();
        let mut primes = Vec::new();

        while !current.is_empty() {
            self.rounds += 1;
            let round = self.round(&current);
            debug!(
                "round {}: {} implicants -> {} merged, {} prime",
                self.rounds,
                current.len(),
                round.merged.len(),
                round.unused.len()
            );

            for id in round.unused {
                if seen.insert(id.index()) {
                    primes.push(self.table[id]);
                }
            }
            current = round.merged;
        }

        primes.sort();
        debug!("found {} prime implicants", primes.len());
        primes
    }

    fn round(&mut self, current: &[ImplicantId]) -> Round {
        // Group positions of the working set by weight.
        let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (pos, &id) in current.iter().enumerate() {
            groups.entry(self.table[id].weight()).or_default().push(pos);
        }

        // Scan adjacent weight groups. Nothing is mutated during the scan.
        let mut merges: Vec<(usize, usize, Implicant)> = Vec::new();
        for ((&w1, low), (&w2, high)) in groups.iter().zip(groups.iter().skip(1)) {
            if w2 - w1 != 1 {
                continue;
            }
            for &i in low {
                for &j in high {
                    let a = &self.table[current[i]];
                    let b = &self.table[current[j]];
                    if let Some(c) = a.combine(b) {
                        trace!("merge {} + {} -> {}", a, b, c);
                        merges.push((i, j, c));
                    }
                }
            }
        }

        let mut used = BitSet::new(current.len());
        let mut fresh = BitSet::default();
        let mut round = Round::default();
        for (i, j, c) in merges {
            used.insert(i);
            used.insert(j);
            let id = self.table.put(c);
            if fresh.insert(id.index()) {
                round.merged.push(id);
            }
        }
        round.unused = current
            .iter()
            .enumerate()
            .filter(|&(pos, _)| !used.contains(pos))
            .map(|(_, &id)| id)
            .collect();
        round
    }
}

/// Compute all prime implicants of the function with the given (unique) minterms.
///
/// Returns an empty list for an empty minterm set. Output is sorted ascending by
/// `value`, then by `mask`.
pub fn prime_implicants(minterms: &[u32], num_vars: usize) -> Vec<Implicant> {
    Combiner::new(num_vars).run(minterms)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    /// Reference generator: all-pairs merging without weight grouping.
    fn prime_implicants_all_pairs(minterms: &[u32], num_vars: usize) -> Vec<Implicant> {
        let mut current: Vec<Implicant> = minterms
            .iter()
            .map(|&m| Implicant::from_minterm(m, num_vars))
            .collect();
        let mut primes = Vec::new();
        while !current.is_empty() {
            let mut next = Vec::new();
            let mut used = vec![false; current.len()];
            for i in 0..current.len() {
                for j in i + 1..current.len() {
                    if let Some(c) = current[i].combine(&current[j]) {
                        used[i] = true;
                        used[j] = true;
                        if !next.contains(&c) {
                            next.push(c);
                        }
                    }
                }
            }
            for (i, imp) in current.iter().enumerate() {
                if !used[i] && !primes.contains(imp) {
                    primes.push(*imp);
                }
            }
            current = next;
        }
        primes.sort();
        primes
    }

    #[test]
    fn test_empty() {
        assert!(prime_implicants(&[], 3).is_empty());
    }

    #[test]
    fn test_single_minterm() {
        let primes = prime_implicants(&[5], 3);
        assert_eq!(primes, vec![Implicant::new(0b101, 0b111)]);
    }

    #[test]
    fn test_non_combinable() {
        let primes = prime_implicants(&[1, 2], 2);
        assert_eq!(
            primes,
            vec![Implicant::new(0b01, 0b11), Implicant::new(0b10, 0b11)]
        );
    }

    #[test]
    fn test_full_domain_is_tautology() {
        let primes = prime_implicants(&[0, 1, 2, 3], 2);
        assert_eq!(primes, vec![Implicant::tautology()]);

        let all: Vec<u32> = (0..32).collect();
        let primes = prime_implicants(&all, 5);
        assert_eq!(primes, vec![Implicant::tautology()]);
    }

    #[test]
    fn test_dominant_variable() {
        let primes = prime_implicants(&[4, 5, 6, 7], 3);
        assert_eq!(primes, vec![Implicant::new(0b100, 0b100)]);
    }

    #[test]
    fn test_classic_example() {
        // f = Σm(0, 1, 2, 5, 6, 7): six primes, a cyclic core.
        let primes = prime_implicants(&[0, 1, 2, 5, 6, 7], 3);
        let expected = {
            let mut v = vec![
                Implicant::new(0b000, 0b110), // 00-
                Implicant::new(0b000, 0b101), // 0-0
                Implicant::new(0b001, 0b011), // -01
                Implicant::new(0b010, 0b011), // -10
                Implicant::new(0b101, 0b101), // 1-1
                Implicant::new(0b110, 0b110), // 11-
            ];
            v.sort();
            v
        };
        assert_eq!(primes, expected);
    }

    #[test]
    fn test_intermediate_duplicates_merge_once() {
        // 0,1,2,3 produce "0-" / "-0" style duplicates in the second round.
        let mut combiner = Combiner::new(3);
        let primes = combiner.run(&[0, 1, 2, 3, 7]);
        assert_eq!(
            primes,
            vec![Implicant::new(0b000, 0b100), Implicant::new(0b011, 0b011)]
        );
        assert_eq!(combiner.rounds(), 3);
        // 00-, 0-0, 0-1, 01- and -11 are created once each; 0-- once.
        let patterns = combiner.table().len();
        assert_eq!(patterns, 5 + 5 + 1);
    }

    #[test]
    fn test_matches_all_pairs() {
        for f in 0u32..256 {
            let minterms: Vec<u32> = (0..8).filter(|m| f & (1 << m) != 0).collect();
            assert_eq!(
                prime_implicants(&minterms, 3),
                prime_implicants_all_pairs(&minterms, 3),
                "minterms = {:?}",
                minterms
            );
        }
    }

    #[test]
    fn test_order_of_input_is_irrelevant() {
        let a = prime_implicants(&[0, 1, 2, 5, 6, 7, 9, 13, 15], 4);
        let b = prime_implicants(&[15, 13, 9, 7, 6, 5, 2, 1, 0], 4);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "minterm 8 does not fit into 3 variables")]
    fn test_out_of_range_minterm_panics() {
        prime_implicants(&[1, 8], 3);
    }
}
