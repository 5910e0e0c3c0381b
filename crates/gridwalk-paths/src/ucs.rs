use std::collections::HashMap;

use log::trace;

use crate::engine::{SearchEngine, StateKey, Strategy};
use crate::queue::PriorityQueue;
use crate::traits::EnergyPather;

impl<P: EnergyPather> SearchEngine<'_, P> {
    /// Uniform-cost search over `(cell, remaining energy)` states, one unit
    /// of cost per step.
    ///
    /// Energy follows the same rules as [`dfs`](Self::dfs). The first popped
    /// state standing on the goal cell ends the search. The path is traced
    /// from the goal state pushed last, so its remaining energy is the one
    /// recorded by the final improvement reaching the goal.
    pub fn ucs(&mut self) -> bool {
        self.reset();
        let full = self.energy;
        let start = StateKey::charged(self.start, full);

        let mut g_score: HashMap<StateKey, i32> = HashMap::new();
        g_score.insert(start, 0);

        let mut open: PriorityQueue<StateKey> = PriorityQueue::new();
        open.push(0, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((_, current)) = open.pop() else {
                break 'search false;
            };
            self.expanded += 1;

            if current.cell == self.goal {
                // Only the start can be popped on the goal without a push.
                self.terminal.get_or_insert(current);
                break 'search true;
            }

            let energy = current.energy.unwrap_or(0);
            if energy == 0 {
                continue;
            }
            let Some(&current_g) = g_score.get(&current) else {
                continue;
            };

            nbuf.clear();
            self.pather.neighbors(current.cell, &mut nbuf);

            for &next in nbuf.iter() {
                let e = if self.pather.refills(next) { full } else { energy - 1 };
                let key = StateKey::charged(next, e);
                let new_g = current_g + 1;
                if g_score.get(&key).is_some_and(|&g| new_g >= g) {
                    continue;
                }
                g_score.insert(key, new_g);
                open.push(new_g, key);
                self.came_from.insert(key, current);
                if next == self.goal {
                    self.terminal = Some(key);
                }
            }

            trace!(
                "ucs: expanded {} at cost {current_g} with {energy} energy, {} open",
                current.cell,
                open.len()
            );
        };

        self.nbuf = nbuf;
        self.finish(Strategy::Ucs, found)
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::Cell;

    use crate::check::{energy_profile, is_connected};
    use crate::{Grid, SearchEngine, manhattan};

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn open_grid_is_shortest() {
        let g = Grid::uniform(4, 5, [], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 20).unwrap();
        assert!(engine.ucs());
        let path = engine.trace_path().unwrap();
        assert_eq!(path.len() - 1, manhattan(c(0, 0), c(3, 4)) as usize);
        assert!(is_connected(&path));
        assert_eq!(engine.goal_energy(), Some(13));
    }

    #[test]
    fn exact_budget_suffices() {
        let g = Grid::uniform(3, 3, [], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 4).unwrap();
        assert!(engine.ucs());
        assert_eq!(engine.trace_path().unwrap().len(), 5);
        assert_eq!(engine.goal_energy(), Some(0));

        let mut engine = SearchEngine::new(&g, c(0, 0), 3).unwrap();
        assert!(!engine.ucs());
    }

    #[test]
    fn shortest_detour_through_refill() {
        // Energy 3 cannot cover the 4-step direct route, so the path must
        // cross the refill at (0, 1) and stays 4 steps long.
        let g = Grid::uniform(3, 3, [], [c(0, 1)]).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 3).unwrap();
        assert!(engine.ucs());
        let path = engine.trace_path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[1], c(0, 1));
        assert_eq!(energy_profile(&g, &path, 3), Some(vec![3, 3, 2, 1, 0]));
        assert_eq!(engine.goal_energy(), Some(0));
    }

    #[test]
    fn backtracks_to_refill() {
        // The refill sits in a side pocket; the only way to reach the goal
        // with 4 energy is to step in, top up and come back out.
        // _____
        // ##!#_
        let walls = [c(1, 0), c(1, 1), c(1, 3)];
        let g = Grid::uniform(2, 5, walls, [c(1, 2)]).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 4).unwrap();
        assert!(engine.ucs());
        let path = engine.trace_path().unwrap();
        assert_eq!(
            path,
            vec![
                c(0, 0),
                c(0, 1),
                c(0, 2),
                c(1, 2),
                c(0, 2),
                c(0, 3),
                c(0, 4),
                c(1, 4)
            ]
        );
        assert_eq!(
            energy_profile(&g, &path, 4),
            Some(vec![4, 3, 2, 4, 3, 2, 1, 0])
        );

        let mut engine = SearchEngine::new(&g, c(0, 0), 3).unwrap();
        assert!(!engine.ucs());
    }

    #[test]
    fn traces_from_last_goal_push() {
        // (1, 1) is reached with 3 and 4 energy at equal cost. The fuller
        // state sorts second, so its goal push is the last one.
        // _!_
        // __#
        // ___
        let g = Grid::uniform(3, 3, [c(1, 2)], [c(0, 1)]).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 5).unwrap();
        assert!(engine.ucs());
        assert_eq!(
            engine.trace_path().unwrap(),
            vec![c(0, 0), c(0, 1), c(1, 1), c(2, 1), c(2, 2)]
        );
        assert_eq!(engine.goal_energy(), Some(2));
    }

    #[test]
    fn start_on_goal_keeps_full_energy() {
        let g = Grid::uniform(2, 2, [], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(1, 1), 3).unwrap();
        assert!(engine.ucs());
        assert_eq!(engine.trace_path().unwrap(), vec![c(1, 1)]);
        assert_eq!(engine.goal_energy(), Some(3));
    }

    #[test]
    fn enclosed_goal() {
        let g = Grid::uniform(3, 3, [c(1, 2), c(2, 1)], [c(0, 1)]).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 9).unwrap();
        assert!(!engine.ucs());
    }
}
