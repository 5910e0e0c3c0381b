use std::collections::HashMap;

use gridwalk_core::Cell;
use log::trace;

use crate::engine::{SearchEngine, StateKey, Strategy};
use crate::queue::PriorityQueue;
use crate::traits::AstarPather;

impl<P: AstarPather> SearchEngine<'_, P> {
    /// A* from the start to the goal, ignoring energy.
    ///
    /// There is no closed set: a cell is re-queued every time its best-known
    /// cost improves and stale queue entries are expanded again. The goal
    /// check happens when a cell is popped.
    pub fn astar(&mut self) -> bool {
        self.reset();
        let goal = self.goal;

        let mut g_score: HashMap<Cell, i32> = HashMap::new();
        g_score.insert(self.start, 0);

        let mut open: PriorityQueue<Cell> = PriorityQueue::new();
        open.push(self.pather.estimate(self.start, goal), self.start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((_, current)) = open.pop() else {
                break 'search false;
            };
            self.expanded += 1;

            if current == goal {
                break 'search true;
            }

            let Some(&current_g) = g_score.get(&current) else {
                continue;
            };

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                let tentative_g = current_g.saturating_add(self.pather.cost(current, next));
                if g_score.get(&next).is_some_and(|&g| tentative_g >= g) {
                    continue;
                }
                g_score.insert(next, tentative_g);
                open.push(
                    tentative_g.saturating_add(self.pather.estimate(next, goal)),
                    next,
                );
                self.came_from
                    .insert(StateKey::plain(next), StateKey::plain(current));
            }

            trace!("astar: expanded {current}, {} open", open.len());
        };

        self.nbuf = nbuf;

        if found {
            self.terminal = Some(StateKey::plain(goal));
        }
        self.finish(Strategy::AStar, found)
    }
}
