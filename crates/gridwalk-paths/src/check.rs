//! Path sanity checks.

use gridwalk_core::Cell;

use crate::traits::EnergyPather;

/// Whether every consecutive pair of cells differs by one step along a
/// single axis. Empty and single-cell paths are connected.
pub fn is_connected(path: &[Cell]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

/// Replay `path` with an energy budget of `full` and return the energy left
/// on each cell, starting with `full` on the first one.
///
/// Returns `None` if the walk would need to step with no energy left. Refill
/// cells (other than the first cell) reset the energy to `full`.
pub fn energy_profile<P: EnergyPather>(pather: &P, path: &[Cell], full: u32) -> Option<Vec<u32>> {
    let mut profile = Vec::with_capacity(path.len());
    let mut energy = full;
    for (i, &c) in path.iter().enumerate() {
        if i > 0 {
            if energy == 0 {
                return None;
            }
            energy = if pather.refills(c) { full } else { energy - 1 };
        }
        profile.push(energy);
    }
    Some(profile)
}
