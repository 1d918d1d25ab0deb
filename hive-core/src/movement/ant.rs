//! Ant: any number of crawling steps around the hive

use super::{slide_steps, MoveGenerator};
use crate::board::Coordinate;
use crate::hive::Occupancy;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default)]
pub struct AntMovement;

impl MoveGenerator for AntMovement {
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
        let start = from.to_ground();
        let mut seen = FxHashSet::default();
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut reached = FxHashSet::default();

        while let Some(current) = queue.pop_front() {
            for next in slide_steps(current, rest) {
                if seen.insert(next) {
                    reached.insert(next);
                    queue.push_back(next);
                }
            }
        }

        reached
    }
}
