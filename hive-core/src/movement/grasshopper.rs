//! Grasshopper: jumps in a straight line over a run of pieces

use super::MoveGenerator;
use crate::board::{Coordinate, Direction};
use crate::hive::Occupancy;
use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct GrasshopperMovement;

impl MoveGenerator for GrasshopperMovement {
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
        let from = from.to_ground();
        Direction::ALL
            .iter()
            .filter_map(|&direction| jump(from, direction, rest))
            .collect()
    }
}

/// First free hex past the run of occupied hexes next to `from`
fn jump(from: Coordinate, direction: Direction, rest: &Occupancy) -> Option<Coordinate> {
    let mut current = from.step(direction);
    if !rest.column_occupied(current) {
        return None;
    }
    while rest.column_occupied(current) {
        current = current.step(direction);
    }
    Some(current)
}
