//! Ships, the cells that make up their hulls, and the placements that
//! define them.

use crate::board::Coordinate;

/// A (start, end) coordinate pair defining a ship's span at construction
/// time. Both endpoints are part of the span.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// First coordinate of the span.
    pub start: Coordinate,
    /// Last coordinate of the span, inclusive.
    pub end: Coordinate,
}

impl Placement {
    /// Construct a [`Placement`] from the given endpoints.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Iterate every coordinate in the inclusive span between the
    /// endpoints, row by row. Endpoints that differ in both row and
    /// column span a rectangular block; a reversed span yields nothing.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let Placement { start, end } = *self;
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| Coordinate::new(row, col)))
    }
}

impl From<(Coordinate, Coordinate)> for Placement {
    /// Construct a [`Placement`] from a (start, end) pair.
    fn from((start, end): (Coordinate, Coordinate)) -> Self {
        Self::new(start, end)
    }
}

impl From<((usize, usize), (usize, usize))> for Placement {
    /// Construct a [`Placement`] from a ((row, col), (row, col)) pair.
    fn from((start, end): ((usize, usize), (usize, usize))) -> Self {
        Self::new(start.into(), end.into())
    }
}

/// A single cell of a ship's hull, tracking whether it has been hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell {
    /// Row this cell occupies.
    row: usize,

    /// Column this cell occupies.
    col: usize,

    /// Whether this cell has not been hit yet.
    alive: bool,
}

impl Cell {
    /// Construct a living cell at the given position.
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    /// Row this cell occupies.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column this cell occupies.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether this cell has not been hit yet.
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// The position of this cell as a [`Coordinate`].
    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}

/// A ship covering the inclusive span between two coordinates. The ship
/// owns one [`Cell`] per covered coordinate and aggregates their hit
/// state into a drowned flag.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// First endpoint of the span this ship was built from.
    start: Coordinate,

    /// Last endpoint of the span, inclusive.
    end: Coordinate,

    /// Cells of the hull, in span order.
    cells: Vec<Cell>,

    /// Whether every cell of the hull is dead. Refreshed after each hit,
    /// never cleared once set.
    drowned: bool,
}

impl Ship {
    /// Construct a ship covering the inclusive span of the given
    /// placement. Equal endpoints produce a single cell; endpoints that
    /// differ in both row and column produce the full rectangular block
    /// between them; a reversed span produces a ship with no cells.
    pub fn new<P: Into<Placement>>(placement: P) -> Self {
        let placement = placement.into();
        Self {
            start: placement.start,
            end: placement.end,
            cells: placement
                .coords()
                .map(|coord| Cell::new(coord.row, coord.col))
                .collect(),
            drowned: false,
        }
    }

    // TODO: index cells by coordinate so get_cell is O(1) instead of a
    // scan. Not worth the extra map while ships stay at most 5 cells.

    /// Get the cell at the given position, or `None` if this ship does
    /// not own it.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
    }

    /// Record a shot at the given position. Kills the matching cell and
    /// refreshes the drowned flag; a position this ship does not own is
    /// ignored. Re-firing a dead cell leaves the hull unchanged.
    pub fn fire(&mut self, row: usize, col: usize) {
        let cell = self
            .cells
            .iter_mut()
            .find(|cell| cell.row == row && cell.col == col);
        if let Some(cell) = cell {
            cell.alive = false;
            self.update_status();
        }
    }

    /// Refresh the drowned flag from the cells. Drowned is one-way: it is
    /// set once every cell is dead and never cleared afterwards.
    fn update_status(&mut self) {
        if self.cells.iter().all(|cell| !cell.alive) {
            self.drowned = true;
        }
    }

    /// Whether every cell of this ship has been hit.
    pub fn is_drowned(&self) -> bool {
        self.drowned
    }

    /// First endpoint of the span this ship was built from.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Last endpoint of the span, inclusive.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of cells this ship owns.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The cells of this ship's hull, in span order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the coordinates of this ship and whether each has been
    /// hit.
    pub fn hits(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        self.cells.iter().map(|cell| (cell.coord(), !cell.alive))
    }
}
