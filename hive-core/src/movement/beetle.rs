//! Beetle: one step in any direction, climbing on and off stacks

use super::MoveGenerator;
use crate::board::{ground_neighbors, Coordinate};
use crate::hive::{can_slide, Occupancy};
use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct BeetleMovement;

impl MoveGenerator for BeetleMovement {
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
        let mut moves = FxHashSet::default();

        for column in ground_neighbors(from) {
            let landing = rest.top_elevation(column).unwrap_or(-1) + 1;
            if landing != from.z {
                // climbing up or dropping down skips the pinch check
                moves.insert(column.at_elevation(landing));
                continue;
            }
            let dest = column.at_elevation(from.z);
            if can_slide(from, dest, rest) {
                moves.insert(dest);
            }
        }

        moves
    }
}
