use std::collections::HashSet;

use log::trace;

use crate::engine::{SearchEngine, StateKey, Strategy};
use crate::traits::EnergyPather;

impl<P: EnergyPather> SearchEngine<'_, P> {
    /// Depth-first search over `(cell, remaining energy)` states.
    ///
    /// Every step costs one unit of energy, except entering a refill cell,
    /// which restores the full budget. A state with no energy left is a dead
    /// end. The search stops as soon as the goal shows up among the
    /// neighbors of the popped state, so the path is the first one found in
    /// depth-first order, not the shortest.
    pub fn dfs(&mut self) -> bool {
        self.reset();
        let full = self.energy;
        let start = StateKey::charged(self.start, full);

        if self.start == self.goal {
            self.terminal = Some(start);
            return self.finish(Strategy::Dfs, true);
        }

        let mut stack = vec![start];
        let mut visited: HashSet<StateKey> = HashSet::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = stack.pop() else {
                break 'search false;
            };
            self.expanded += 1;
            visited.insert(current);

            let energy = current.energy.unwrap_or(0);
            if energy == 0 {
                continue;
            }

            nbuf.clear();
            self.pather.neighbors(current.cell, &mut nbuf);

            for &next in nbuf.iter() {
                let e = if self.pather.refills(next) { full } else { energy - 1 };
                let key = StateKey::charged(next, e);
                if next == self.goal {
                    self.came_from.insert(key, current);
                    self.terminal = Some(key);
                    break 'search true;
                }
                if !visited.contains(&key) {
                    stack.push(key);
                    self.came_from.insert(key, current);
                }
            }

            trace!(
                "dfs: expanded {} with {energy} energy, {} stacked",
                current.cell,
                stack.len()
            );
        };

        self.nbuf = nbuf;
        self.finish(Strategy::Dfs, found)
    }
}
