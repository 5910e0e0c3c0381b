use std::collections::VecDeque;

use log::trace;

use crate::engine::{SearchEngine, StateKey, Strategy};
use crate::traits::Pather;

impl<P: Pather> SearchEngine<'_, P> {
    /// Breadth-first search with unit step cost, ignoring energy.
    ///
    /// Finds a path with the fewest steps. Cells are marked visited when
    /// queued, so each one is reached through its first discoverer.
    pub fn bfs(&mut self) -> bool {
        self.reset();
        let goal = self.goal;

        let mut visited = vec![false; self.range.len()];
        let mut queue = VecDeque::new();
        if let Some(si) = self.range.index(self.start) {
            visited[si] = true;
            queue.push_back(self.start);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = queue.pop_front() else {
                break 'search false;
            };
            self.expanded += 1;

            if current == goal {
                break 'search true;
            }

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                let Some(ni) = self.range.index(next) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                queue.push_back(next);
                self.came_from
                    .insert(StateKey::plain(next), StateKey::plain(current));
            }

            trace!("bfs: expanded {current}, {} queued", queue.len());
        };

        self.nbuf = nbuf;

        if found {
            self.terminal = Some(StateKey::plain(goal));
        }
        self.finish(Strategy::Bfs, found)
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::Cell;

    use crate::check::is_connected;
    use crate::{Grid, SearchEngine, manhattan};

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn open_3x3() {
        let g = Grid::uniform(3, 3, [], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 5).unwrap();
        assert!(engine.bfs());
        let path = engine.trace_path().unwrap();
        // Neighbor order +row first, so BFS goes down before right.
        assert_eq!(path, vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn open_grids_match_manhattan() {
        for (rows, cols) in [(1, 1), (1, 6), (4, 4), (7, 3), (10, 10)] {
            let g = Grid::uniform(rows, cols, [], []).unwrap();
            for start in g.range() {
                let mut engine = SearchEngine::new(&g, start, 0).unwrap();
                assert!(engine.bfs());
                let path = engine.trace_path().unwrap();
                assert_eq!(path.len() - 1, manhattan(start, g.goal()) as usize);
                assert!(is_connected(&path));
            }
        }
    }

    #[test]
    fn centre_blocked() {
        let g = Grid::uniform(3, 3, [c(1, 1)], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 5).unwrap();
        assert!(engine.bfs());
        let path = engine.trace_path().unwrap();
        assert!(!path.contains(&c(1, 1)));
        assert!(path.len() - 1 >= 4);
        assert!(is_connected(&path));
    }

    #[test]
    fn detour_is_shortest() {
        // ____
        // ###_
        // ____
        // _###
        // ____
        let walls = [c(1, 0), c(1, 1), c(1, 2), c(3, 1), c(3, 2), c(3, 3)];
        let g = Grid::uniform(5, 4, walls, []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 0).unwrap();
        assert!(engine.bfs());
        let path = engine.trace_path().unwrap();
        assert_eq!(path.len() - 1, 3 + 2 + 3 + 2 + 3);
        assert!(is_connected(&path));
    }

    #[test]
    fn enclosed_goal() {
        let g = Grid::uniform(4, 4, [c(2, 3), c(3, 2), c(2, 2)], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 5).unwrap();
        assert!(!engine.bfs());
        // Everything reachable was expanded: 16 cells minus 3 walls minus goal.
        assert_eq!(engine.expanded(), 12);
    }
}
