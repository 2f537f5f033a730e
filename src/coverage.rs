//! Coverage table: which minterms each prime implicant covers.

use crate::bitset::BitSet;
use crate::implicant::Implicant;

/// One row of the coverage table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub implicant: Implicant,
    /// Bit `j` is set iff the implicant covers the `j`-th minterm.
    pub covered: BitSet,
}

/// Rows aligned with the prime implicant list; columns aligned with the minterm list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTable {
    minterms: Vec<u32>,
    entries: Vec<CoverageEntry>,
}

impl CoverageTable {
    /// Build the table for `implicants` over the ordered `minterms`.
    pub fn build(implicants: &[Implicant], minterms: &[u32]) -> Self {
        let entries = implicants
            .iter()
            .map(|&implicant| CoverageEntry {
                implicant,
                covered: minterms
                    .iter()
                    .enumerate()
                    .filter(|&(_, &m)| implicant.covers(m))
                    .map(|(j, _)| j)
                    .collect(),
            })
            .collect();
        Self {
            minterms: minterms.to_vec(),
            entries,
        }
    }

    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    pub fn entries(&self) -> &[CoverageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The row of the `index`-th implicant.
    pub fn entry(&self, index: usize) -> &CoverageEntry {
        &self.entries[index]
    }

    /// Bitmask with one bit per minterm, all set.
    pub fn full(&self) -> BitSet {
        BitSet::full(self.minterms.len())
    }

    /// Indices of the implicants covering the `j`-th minterm, in table order.
    pub fn coverers(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.covered.contains(j))
            .map(|(i, _)| i)
    }

    /// Union of the rows of the given implicants.
    pub fn union_of(&self, indices: &[usize]) -> BitSet {
        let mut covered = BitSet::new(self.minterms.len());
        for &i in indices {
            covered.union_with(&self.entries[i].covered);
        }
        covered
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_build() {
        let implicants = [Implicant::new(0b000, 0b110), Implicant::new(0b001, 0b011)];
        let minterms = [0, 1, 5];
        let table = CoverageTable::build(&implicants, &minterms);

        assert_eq!(table.len(), 2);
        assert_eq!(table.entry(0).implicant, implicants[0]);
        assert_eq!(table.entry(0).covered.iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(table.entry(1).covered.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_coverers_and_union() {
        let implicants = [Implicant::new(0b000, 0b110), Implicant::new(0b001, 0b011)];
        let table = CoverageTable::build(&implicants, &[0, 1, 5]);

        assert_eq!(table.coverers(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(table.coverers(1).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(table.coverers(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(table.union_of(&[0, 1]), table.full());
        assert_ne!(table.union_of(&[1]), table.full());
    }

    #[test]
    fn test_empty() {
        let table = CoverageTable::build(&[], &[]);
        assert!(table.is_empty());
        assert!(table.full().is_empty());
        assert_eq!(table.union_of(&[]), table.full());
    }

    #[test]
    fn test_tautology_covers_all() {
        let minterms: Vec<u32> = (0..100).collect();
        let table = CoverageTable::build(&[Implicant::tautology()], &minterms);
        assert_eq!(table.entry(0).covered, table.full());
        assert_eq!(table.entry(0).covered.len(), 100);
    }
}
