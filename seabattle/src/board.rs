//! The board: the ship arena, the coordinate index, firing, and the
//! debug dump.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::ships::{Placement, Ship};

pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, PlaceError},
};

mod coordinate;
mod errors;

/// Width and height of the displayed grid. Also the bound enforced by
/// [`Board::try_new`].
pub const BOARD_SIZE: usize = 10;

/// Glyph shown for a cell owned by a ship with at least one living cell.
const ALIVE_GLYPH: char = '\u{25A1}';
/// Glyph shown for a cell owned by a fully dead ship.
const SUNK_GLYPH: char = 'x';
/// Glyph shown for open water.
const WATER_GLYPH: char = '~';

/// Result of a shot at the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The shot did not land on any ship.
    Miss,
    /// The shot landed on a ship that still has living cells.
    Hit,
    /// The shot landed on a ship whose cells are now all dead.
    Sunk,
}

impl Outcome {
    /// The verbatim text of this outcome. Callers may pattern-match on
    /// it, so the casing and wording are part of the contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Miss => "Miss",
            Outcome::Hit => "Hit",
            Outcome::Sunk => "Sunk",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single player's board: the fleet, and an index from occupied
/// coordinate to the ship occupying it.
#[derive(Debug)]
pub struct Board {
    /// The placements the fleet was built from, in construction order.
    placements: Vec<Placement>,

    /// The ships, in placement order. Ships are never removed; a sunk
    /// ship stays on the board for status queries.
    ships: Vec<Ship>,

    /// Index from occupied coordinate to the position of the owning ship
    /// in `ships`. Populated once at construction.
    index: HashMap<Coordinate, usize>,
}

impl Board {
    /// Build a board from the given placements.
    ///
    /// Nothing is validated: spans may run off the displayed grid, cover
    /// rectangular blocks, or overlap each other. Where placements
    /// overlap, the ship placed later claims the shared coordinate in
    /// the index; the earlier ship keeps its cell but can no longer be
    /// reached there. Use [`Board::try_new`] to reject such fleets
    /// instead.
    pub fn new<P>(placements: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Placement>,
    {
        let placements: Vec<Placement> = placements.into_iter().map(Into::into).collect();
        let mut ships = Vec::with_capacity(placements.len());
        let mut index = HashMap::new();
        for &placement in &placements {
            let ship = Ship::new(placement);
            for cell in ship.cells() {
                index.insert(cell.coord(), ships.len());
            }
            ships.push(ship);
        }
        Self {
            placements,
            ships,
            index,
        }
    }

    /// Build a board from the given placements, rejecting malformed
    /// fleets.
    ///
    /// This is stricter than the game demands: every span must be an
    /// axis-aligned run inside the `BOARD_SIZE` grid, and no two spans
    /// may share a coordinate. Returns the first offending placement.
    /// [`Board::new`] accepts all of these without complaint.
    pub fn try_new<P>(placements: P) -> Result<Self, PlaceError>
    where
        P: IntoIterator,
        P::Item: Into<Placement>,
    {
        let placements: Vec<Placement> = placements.into_iter().map(Into::into).collect();
        let mut claimed = HashSet::new();
        for &placement in &placements {
            let Placement { start, end } = placement;
            if start.row != end.row && start.col != end.col {
                return Err(PlaceError::new(CannotPlaceReason::NotAxisAligned, placement));
            }
            if start.row >= BOARD_SIZE
                || start.col >= BOARD_SIZE
                || end.row >= BOARD_SIZE
                || end.col >= BOARD_SIZE
            {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, placement));
            }
            for coord in placement.coords() {
                if !claimed.insert(coord) {
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied,
                        placement,
                    ));
                }
            }
        }
        Ok(Self::new(placements))
    }

    /// Fire a shot at the given location.
    ///
    /// An unoccupied location is a [`Miss`][Outcome::Miss] and mutates
    /// nothing. An occupied location kills the matching cell of the
    /// owning ship and reports [`Sunk`][Outcome::Sunk] once that ship has
    /// no living cells left, [`Hit`][Outcome::Hit] otherwise. Firing at
    /// an already-dead cell reports `Hit` or `Sunk` again rather than a
    /// distinct outcome.
    pub fn fire<C: Into<Coordinate>>(&mut self, location: C) -> Outcome {
        let location = location.into();
        match self.index.get(&location) {
            None => Outcome::Miss,
            Some(&idx) => {
                let ship = &mut self.ships[idx];
                ship.fire(location.row, location.col);
                if ship.is_drowned() {
                    Outcome::Sunk
                } else {
                    Outcome::Hit
                }
            }
        }
    }

    /// The placements this board was built from, in construction order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Get an iterator over all ships on the board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Get the ship occupying the given location, if any. A coordinate
    /// claimed by overlapping placements resolves to the ship placed
    /// there last.
    pub fn ship_at<C: Into<Coordinate>>(&self, location: C) -> Option<&Ship> {
        self.index.get(&location.into()).map(|&idx| &self.ships[idx])
    }

    /// Returns true when every ship on the board has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_drowned())
    }
}

impl fmt::Display for Board {
    /// Render the debug dump: a `BOARD_SIZE` by `BOARD_SIZE` grid of
    /// tab-separated glyphs with a blank line after each row. Occupied
    /// cells show the alive glyph while the owning ship has at least one
    /// living cell and the sunk glyph afterwards; everything else is
    /// water.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let glyph = match self.ship_at((row, col)) {
                    Some(ship) if ship.cells().iter().any(|cell| cell.alive()) => ALIVE_GLYPH,
                    Some(_) => SUNK_GLYPH,
                    None => WATER_GLYPH,
                };
                write!(f, "{}\t", glyph)?;
            }
            write!(f, "\n\n")?;
        }
        Ok(())
    }
}
