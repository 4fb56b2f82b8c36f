//! Single-player implementation of the classic game Battleship.
//!
//! A [`Board`][board::Board] is built once from a list of
//! [`Placement`][ships::Placement]s, each of which spans the inclusive
//! run of cells between its two endpoints. Shots are then fired at the
//! board one coordinate at a time, and every shot reports one of three
//! [`Outcome`][board::Outcome]s: `Miss`, `Hit`, or `Sunk`. Sunk ships
//! stay on the board for status queries.
//!
//! ```
//! use seabattle::board::{Board, Outcome};
//!
//! let mut board = Board::new(vec![((0, 0), (0, 2))]);
//! assert_eq!(board.fire((0, 0)), Outcome::Hit);
//! assert_eq!(board.fire((0, 1)), Outcome::Hit);
//! assert_eq!(board.fire((0, 2)), Outcome::Sunk);
//! assert_eq!(board.fire((5, 5)), Outcome::Miss);
//! ```

pub mod board;
#[cfg(feature = "rng_gen")]
pub mod fleet;
pub mod ships;
