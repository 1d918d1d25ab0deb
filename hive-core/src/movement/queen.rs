//! Queen: one sliding step along the hive

use super::MoveGenerator;
use crate::board::{are_neighbors, ground_neighbors, Coordinate};
use crate::hive::{can_slide, Occupancy};
use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct QueenMovement;

impl MoveGenerator for QueenMovement {
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
        let from = from.to_ground();
        let around = ground_neighbors(from);

        around
            .iter()
            .copied()
            .filter(|dest| !rest.column_occupied(*dest) && can_slide(from, *dest, rest))
            // A destination sealed off from every other free hex around the
            // queen is a pocket, not a step along the edge
            .filter(|dest| {
                around.iter().any(|other| {
                    other != dest && are_neighbors(*dest, *other) && !rest.column_occupied(*other)
                })
            })
            .collect()
    }
}
