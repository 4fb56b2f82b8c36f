// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Random fleet generation for the standard board.

use std::collections::HashSet;

use rand::Rng;

use crate::{
    board::{Coordinate, BOARD_SIZE},
    ships::Placement,
};

/// Cell lengths of the standard five-ship fleet: carrier, battleship,
/// cruiser, submarine, destroyer.
pub const STANDARD_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Attempts to fit a single ship before giving up on the fleet.
const MAX_ATTEMPTS: usize = 100;

/// Generate non-overlapping, axis-aligned placements for the standard
/// five-ship fleet on the `BOARD_SIZE` grid.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Vec<Placement> {
    random_placements(rng, &STANDARD_FLEET)
}

/// Generate a non-overlapping, axis-aligned placement for each of the
/// given ship lengths, in order. Each ship is retried at fresh random
/// positions until it fits the cells left open by the ships before it.
///
/// Panics if any length is zero or exceeds `BOARD_SIZE`, or if a ship
/// still does not fit after `MAX_ATTEMPTS` tries.
pub fn random_placements<R: Rng>(rng: &mut R, lengths: &[usize]) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(lengths.len());
    let mut claimed = HashSet::new();
    for &len in lengths {
        let placement = random_placement(rng, len, &claimed);
        claimed.extend(placement.coords());
        placements.push(placement);
    }
    placements
}

/// Pick a random axis-aligned placement of the given length avoiding the
/// claimed cells.
fn random_placement<R: Rng>(
    rng: &mut R,
    len: usize,
    claimed: &HashSet<Coordinate>,
) -> Placement {
    assert!(
        len > 0 && len <= BOARD_SIZE,
        "ship length {} does not fit the board",
        len
    );
    for _ in 0..MAX_ATTEMPTS {
        let placement = if rng.gen::<bool>() {
            // horizontal
            let row = rng.gen_range(0, BOARD_SIZE);
            let col = rng.gen_range(0, BOARD_SIZE - len + 1);
            Placement::new(
                Coordinate::new(row, col),
                Coordinate::new(row, col + len - 1),
            )
        } else {
            // vertical
            let row = rng.gen_range(0, BOARD_SIZE - len + 1);
            let col = rng.gen_range(0, BOARD_SIZE);
            Placement::new(
                Coordinate::new(row, col),
                Coordinate::new(row + len - 1, col),
            )
        };
        if placement.coords().all(|coord| !claimed.contains(&coord)) {
            return placement;
        }
    }
    panic!("no room left for a ship of length {}", len);
}
