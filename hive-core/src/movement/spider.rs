//! Spider: exactly three crawling steps, never retracing its path

use super::{slide_steps, MoveGenerator};
use crate::board::Coordinate;
use crate::hive::Occupancy;
use rustc_hash::FxHashSet;

/// Steps in every spider move
pub const SPIDER_STEPS: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct SpiderMovement;

impl MoveGenerator for SpiderMovement {
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
        let mut endpoints = FxHashSet::default();
        let mut path = vec![from.to_ground()];
        walk(&mut path, rest, &mut endpoints);
        endpoints
    }
}

fn walk(path: &mut Vec<Coordinate>, rest: &Occupancy, endpoints: &mut FxHashSet<Coordinate>) {
    let Some(&current) = path.last() else {
        return;
    };
    if path.len() == SPIDER_STEPS + 1 {
        endpoints.insert(current);
        return;
    }
    for next in slide_steps(current, rest) {
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        walk(path, rest, endpoints);
        path.pop();
    }
}
