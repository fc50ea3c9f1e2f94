//! A weighted tile grid for map representation.
//!
//! [`Cell`] is a newtype over the `f64` cost of stepping onto a tile.
//! [`Grid`] is a fixed-size, row-major 2D array of optional cells: a tile
//! with no cell is "unset" and pathfinders fall back to a default weight
//! for it.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Weight reserved for impassable tiles.
pub const MAX_WEIGHT: f64 = f64::MAX;

/// A map cell: the cost of entering the tile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Cell(f64);

impl Cell {
    /// Impassable tile.
    pub const WALL: Self = Self(MAX_WEIGHT);
    /// Plain ground, weight 1.
    pub const FLOOR: Self = Self(1.0);

    /// Create a cell with the given weight.
    ///
    /// Returns `None` unless `weight` is positive and finite, or exactly
    /// [`MAX_WEIGHT`].
    pub fn new(weight: f64) -> Option<Self> {
        if weight == MAX_WEIGHT || (weight.is_finite() && weight > 0.0) {
            Some(Self(weight))
        } else {
            None
        }
    }

    #[inline]
    pub const fn weight(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self.0 < MAX_WEIGHT
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::FLOOR
    }
}

impl TryFrom<f64> for Cell {
    type Error = GridError;

    fn try_from(weight: f64) -> Result<Self, GridError> {
        Self::new(weight).ok_or(GridError::InvalidWeight {
            pos: Point::ZERO,
            weight,
        })
    }
}

impl From<Cell> for f64 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A fixed-size 2D grid of weighted cells, anchored at (0, 0).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    /// Create a grid whose cells are all unset.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_cells(width, height, None)
    }

    /// Create a grid with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, cell: Cell) -> Result<Self, GridError> {
        Self::with_cells(width, height, Some(cell))
    }

    fn with_cells(width: i32, height: i32, cell: Option<Cell>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        })
    }

    /// Build a grid from a row-major buffer of weights.
    ///
    /// Use [`MAX_WEIGHT`] for walls.
    pub fn from_weights(width: i32, height: i32, weights: Vec<f64>) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        let expected = grid.cells.len();
        if weights.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                got: weights.len(),
            });
        }
        for (i, w) in weights.into_iter().enumerate() {
            let pos = grid.point(i);
            let cell = Cell::new(w).ok_or(GridError::InvalidWeight { pos, weight: w })?;
            grid.cells[i] = Some(cell);
        }
        Ok(grid)
    }

    /// Build a grid from rows of weights. All rows must have the same width.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut weights = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    got: r.len(),
                });
            }
            weights.extend_from_slice(r);
        }
        Self::from_weights(width as i32, rows.len() as i32, weights)
    }

    /// Parse a grid from ASCII art.
    ///
    /// `.` is a weight-1 floor, `#` a wall, `1`–`9` a tile of that weight and
    /// `?` an unset tile. Surrounding whitespace is trimmed from the whole
    /// string, not from individual lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut cells = Vec::new();
        let mut height = 0usize;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0usize;
            for ch in line.chars() {
                let pos = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '.' => Some(Cell::FLOOR),
                    '#' => Some(Cell::WALL),
                    '?' => None,
                    '1'..='9' => Some(Cell(f64::from(ch as u8 - b'0'))),
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                };
                cells.push(cell);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::RaggedRows {
                        row: y,
                        expected: w,
                        got: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        if width <= 0 || height == 0 {
            return Err(GridError::InvalidDimensions {
                width,
                height: height as i32,
            });
        }
        Ok(Self {
            width,
            height: height as i32,
            cells,
        })
    }

    /// Returns the bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`. `None` if `p` is out of bounds or the tile is unset.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).and_then(|i| self.cells[i])
    }

    /// Weight of the cell at `p`, if there is one.
    pub fn weight(&self, p: Point) -> Option<f64> {
        self.at(p).map(Cell::weight)
    }

    /// Whether `p` is in bounds and not a wall. Unset tiles are passable.
    pub fn is_passable(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.cells[i].is_none_or(Cell::is_passable),
            None => false,
        }
    }

    /// Set the cell at `p`. Returns `false` if `p` is out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = Some(cell);
                true
            }
            None => false,
        }
    }

    /// Clear the cell at `p`. Returns `false` if `p` is out of bounds.
    pub fn unset(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = None;
                true
            }
            None => false,
        }
    }

    /// Fill the whole grid with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(Some(cell));
    }

    /// Fill the part of `rng` that overlaps the grid with `cell`.
    pub fn fill_range(&mut self, rng: Range, cell: Cell) {
        for p in self.bounds().intersect(rng) {
            self.set(p, cell);
        }
    }

    /// Number of passable tiles.
    pub fn count_passable(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_none_or(Cell::is_passable))
            .count()
    }

    /// Row-major iterator over every tile position and its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Cell>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (self.point(i), *c))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    cells: Vec<Option<Cell>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let mut grid = Self::new(raw.width, raw.height)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(GridError::SizeMismatch {
                expected: grid.cells.len(),
                got: raw.cells.len(),
            });
        }
        grid.cells = raw.cells;
        Ok(grid)
    }
}
