//! Search settings.

/// How the open set is prioritised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Order by `f = g + h`. Returns a lowest-cost path.
    #[default]
    AStar,
    /// Order by `h` alone. Greedy and faster, but not optimal.
    BestFirst,
}

/// Which moves a unit may take from a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// East, west, north and south only.
    #[default]
    Cardinal,
    /// Cardinal moves plus diagonals costing
    /// [`DIAGONAL_COST`](crate::DIAGONAL_COST) times the tile weight.
    /// Diagonals never cut past a wall.
    Diagonal,
}

/// Settings for [`Pathfinder::search`](crate::Pathfinder::search).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub movement: Movement,
    /// Weight of tiles with no cell set. Must be positive and finite,
    /// otherwise 1 is used.
    pub default_weight: f64,
    /// Abort once the open set holds this many entries. Can only tighten the
    /// built-in bound of one entry per grid tile.
    pub max_open: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::AStar,
            movement: Movement::Cardinal,
            default_weight: 1.0,
            max_open: None,
        }
    }
}

impl SearchConfig {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    pub fn with_max_open(mut self, max_open: usize) -> Self {
        self.max_open = Some(max_open);
        self
    }
}
