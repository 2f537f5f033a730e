//! Greedy cover selection.
//!
//! Starting from the essential implicants, the selector repeatedly adds the
//! implicant that covers the most still-uncovered minterms, until every minterm
//! is covered. This is the classical greedy set-cover approximation: the result
//! is a valid cover, but it is **not** guaranteed to have the minimum number of
//! terms or literals.

use log::{debug, trace};

use crate::coverage::CoverageTable;

/// Select implicant indices whose rows together cover every minterm.
///
/// `essential` seeds the selection (duplicates are ignored). Ties between
/// equally good candidates go to the lowest index. Stops early, returning a
/// partial cover, if no remaining candidate adds new coverage.
pub fn select_cover(table: &CoverageTable, essential: &[usize]) -> Vec<usize> {
    let full = table.full();

    let mut selected: Vec<usize> = Vec::new();
    for &i in essential {
        if !selected.contains(&i) {
            selected.push(i);
        }
    }
    let mut covered = table.union_of(&selected);
    if covered == full {
        debug!("essential implicants cover all {} minterms", full.len());
        return selected;
    }

    let mut remaining: Vec<usize> = (0..table.len()).filter(|i| !selected.contains(i)).collect();

    while covered != full {
        let mut best: Option<(usize, usize)> = None;
        for (pos, &i) in remaining.iter().enumerate() {
            let gain = table.entry(i).covered.count_difference(&covered);
            if gain > best.map_or(0, |(_, g)| g) {
                best = Some((pos, gain));
            }
        }

        let Some((pos, gain)) = best else {
            debug!(
                "no candidate adds coverage; {} of {} minterms covered",
                covered.len(),
                full.len()
            );
            break;
        };

        let i = remaining.remove(pos);
        trace!("pick #{} covering {} new minterms", i, gain);
        covered.union_with(&table.entry(i).covered);
        selected.push(i);
    }

    debug!("selected {} implicants ({} essential)", selected.len(), essential.len());
    selected
}
