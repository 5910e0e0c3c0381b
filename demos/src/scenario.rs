//! Scenario configuration and the builder that turns it into a [`Grid`].

use std::fmt;
use std::io;
use std::path::Path;

use gridwalk_core::{Cell, Range};
use gridwalk_paths::{Grid, SearchEngine, SearchError, Strategy};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Energy budget of the classic scenario, also used for random ones.
pub const DEFAULT_ENERGY: u32 = 5;

/// Everything needed to set up one search scenario.
///
/// Cells are `[row, col]` pairs. When `costs` is absent the A* cost matrix is
/// all zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: (i32, i32),
    pub energy: u32,
    pub walls: Vec<(i32, i32)>,
    pub refills: Vec<(i32, i32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<Vec<Vec<i32>>>,
}

impl Default for ScenarioConfig {
    /// The classic 10x10 maze: 18 walls, 7 refill cells, 5 units of energy.
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            start: (0, 0),
            energy: DEFAULT_ENERGY,
            walls: vec![
                (0, 3), (1, 5), (2, 2), (2, 5), (3, 1), (3, 7), (4, 4), (5, 1), (5, 6),
                (6, 2), (6, 3), (7, 5), (7, 6), (7, 8), (8, 0), (8, 3), (8, 5), (9, 4),
            ],
            refills: vec![(0, 9), (1, 4), (4, 2), (4, 8), (6, 4), (7, 7), (9, 0)],
            costs: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from JSON. Missing fields fall back to the classic
    /// scenario's values.
    pub fn from_json_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON scenario file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        debug!("loaded scenario from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate a random `rows` x `cols` scenario from `seed`. Roughly one
    /// cell in five is a wall and one in fifteen a refill; the start (top
    /// left) and goal (bottom right) are always left clear.
    pub fn random(rows: i32, cols: i32, energy: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Cell::new(0, 0);
        let goal = Cell::new(rows - 1, cols - 1);
        let mut walls = Vec::new();
        let mut refills = Vec::new();
        for c in Range::with_size(rows, cols) {
            if c == start || c == goal {
                continue;
            }
            match rng.random_range(0..15u32) {
                0..=2 => walls.push(c.into()),
                3 => refills.push(c.into()),
                _ => {}
            }
        }
        Self {
            rows,
            cols,
            start: start.into(),
            energy,
            walls,
            refills,
            costs: None,
        }
    }
}

/// A built scenario: the grid plus the search parameters.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub energy: u32,
}

/// Outcome of running one strategy on a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub strategy: Strategy,
    pub found: bool,
    pub path: Vec<Cell>,
    pub expanded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_energy: Option<u32>,
}

impl RunReport {
    /// Number of steps on the path, zero when nothing was found.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Build the grid described by `cfg`.
pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Scenario, ScenarioError> {
    let walls = cfg.walls.iter().copied().map(Cell::from);
    let refills = cfg.refills.iter().copied().map(Cell::from);
    let grid = match &cfg.costs {
        Some(costs) => {
            let cols = costs.first().map_or(0, Vec::len);
            if costs.len() != cfg.rows as usize || cols != cfg.cols as usize {
                return Err(ScenarioError::CostShape {
                    rows: cfg.rows,
                    cols: cfg.cols,
                });
            }
            Grid::new(costs.clone(), walls, refills)?
        }
        None => Grid::uniform(cfg.rows, cfg.cols, walls, refills)?,
    };
    let scenario = Scenario {
        grid,
        start: cfg.start.into(),
        energy: cfg.energy,
    };
    // Reject bad endpoints up front rather than at search time.
    scenario.engine()?;
    info!(
        "scenario {}x{}: {} walls, {} refills, energy {}",
        cfg.rows,
        cfg.cols,
        scenario.grid.walls().len(),
        scenario.grid.refill_cells().len(),
        cfg.energy
    );
    Ok(scenario)
}

impl Scenario {
    /// A fresh search engine over this scenario.
    pub fn engine(&self) -> Result<SearchEngine<'_, Grid>, SearchError> {
        SearchEngine::new(&self.grid, self.start, self.energy)
    }

    /// Run `strategy` and collect its outcome.
    pub fn run(&self, strategy: Strategy) -> Result<RunReport, SearchError> {
        let mut engine = self.engine()?;
        let found = engine.run(strategy);
        let path = if found { engine.trace_path()? } else { Vec::new() };
        Ok(RunReport {
            strategy,
            found,
            path,
            expanded: engine.expanded(),
            goal_energy: engine.goal_energy(),
        })
    }
}

/// Errors raised while loading or building a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    Io(io::Error),
    /// The scenario JSON is malformed.
    Json(serde_json::Error),
    /// The cost matrix does not match the declared dimensions.
    CostShape { rows: i32, cols: i32 },
    /// The grid or the search endpoints are invalid.
    Search(SearchError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "scenario: {e}"),
            Self::Json(e) => write!(f, "scenario: invalid JSON: {e}"),
            Self::CostShape { rows, cols } => {
                write!(f, "scenario: cost matrix must be {rows}x{cols}")
            }
            Self::Search(e) => write!(f, "scenario: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::CostShape { .. } => None,
            Self::Search(e) => Some(e),
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<SearchError> for ScenarioError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
