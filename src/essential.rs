//! Essential implicants: sole coverers of at least one minterm.

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::coverage::CoverageTable;
use crate::implicant::Implicant;

/// Find the essential implicants of a coverage table.
///
/// Minterms are visited in table order; an implicant is reported the first time
/// it turns out to be the only coverer of a minterm, and never again. Entries
/// are deduplicated by index, so equal implicants at different rows stay apart.
pub fn find_essential(table: &CoverageTable) -> Vec<(usize, Implicant)> {
    let mut seen = BitSet::new(table.len());
    let mut essential = Vec::new();

    for (j, &m) in table.minterms().iter().enumerate() {
        let mut coverers = table.coverers(j);
        let (Some(i), None) = (coverers.next(), coverers.next()) else {
            continue;
        };
        if seen.insert(i) {
            trace!("minterm {} is covered only by #{}", m, i);
            essential.push((i, table.entry(i).implicant));
        }
    }

    debug!("found {} essential implicants", essential.len());
    essential
}
