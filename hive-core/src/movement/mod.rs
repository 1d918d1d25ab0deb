//! Legal destination generators, one per piece type
//!
//! Every generator works on the board with the moving piece lifted off it.
//! Its candidates then pass two shared filters: a destination must touch the
//! remaining hive, and the hive must be one connected whole once the piece
//! lands there.

pub mod ant;
pub mod beetle;
pub mod grasshopper;
pub mod queen;
pub mod spider;

use crate::board::{ground_neighbors, pinch_hexes, Coordinate};
use crate::error::{HiveError, Result};
use crate::hive::{can_slide, is_connected, Occupancy};
use crate::pieces::{Board, Move, Piece, PieceType};
use rustc_hash::FxHashSet;

pub use ant::AntMovement;
pub use beetle::BeetleMovement;
pub use grasshopper::GrasshopperMovement;
pub use queen::QueenMovement;
pub use spider::SpiderMovement;

/// Movement rule of one piece type
pub trait MoveGenerator {
    /// Raw destinations for a piece standing at `from`, where `rest` is the
    /// board without that piece
    fn candidates(&self, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate>;
}

/// Dispatch table from piece type to its movement rule
pub fn generator_for(kind: PieceType) -> &'static dyn MoveGenerator {
    match kind {
        PieceType::Queen => &QueenMovement,
        PieceType::Ant => &AntMovement,
        PieceType::Spider => &SpiderMovement,
        PieceType::Grasshopper => &GrasshopperMovement,
        PieceType::Beetle => &BeetleMovement,
    }
}

/// All destinations `piece` may move to on `board`
pub fn generate_moves(piece: &Piece, board: &Board) -> Result<FxHashSet<Coordinate>> {
    let from = placed_position(piece, board)?;
    let rest = Occupancy::without(board, piece.id);
    let remaining: Vec<Coordinate> = board
        .values()
        .filter(|p| p.id != piece.id)
        .filter_map(|p| p.position)
        .collect();

    let moves = rule_moves(piece.kind, from, &rest);
    // With the rest already whole, touching it is enough
    if is_connected(&remaining) {
        return Ok(moves);
    }
    Ok(moves
        .into_iter()
        .filter(|d| rejoins(&remaining, *d))
        .collect())
}

/// Destinations the piece type's own rule allows that border the remaining
/// hive, before the one-hive check
fn rule_moves(kind: PieceType, from: Coordinate, rest: &Occupancy) -> FxHashSet<Coordinate> {
    generator_for(kind)
        .candidates(from, rest)
        .into_iter()
        .filter(|d| *d != from && rest.touches(*d))
        .collect()
}

/// Landing on `to` joins the split `remaining` back into one hive
fn rejoins(remaining: &[Coordinate], to: Coordinate) -> bool {
    let mut after = remaining.to_vec();
    after.push(to);
    is_connected(&after)
}

/// Whether `mv` is among the generated destinations of its piece
pub fn is_legal(mv: &Move, board: &Board) -> Result<bool> {
    let piece = board
        .get(&mv.piece)
        .ok_or(HiveError::PieceNotOnBoard(mv.piece))?;
    Ok(generate_moves(piece, board)?.contains(&mv.to))
}

/// Shared precondition check run before any type-specific logic
fn placed_position(piece: &Piece, board: &Board) -> Result<Coordinate> {
    match board.get(&piece.id) {
        Some(stored) if stored == piece => {}
        _ => return Err(HiveError::PieceNotOnBoard(piece.id)),
    }
    piece.position.ok_or(HiveError::MissingCoordinates(piece.id))
}

/// One ground-level crawl step from `from`: onto a free hex that borders the
/// hive and is not pinched shut
pub(crate) fn slide_steps(from: Coordinate, rest: &Occupancy) -> Vec<Coordinate> {
    let from = from.to_ground();
    ground_neighbors(from)
        .into_iter()
        .filter(|next| !rest.column_occupied(*next))
        .filter(|next| {
            pinch_hexes(from, *next)
                .iter()
                .any(|flank| rest.column_occupied(*flank))
        })
        .filter(|next| can_slide(from, *next, rest))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::pieces::{Color, PieceId};

    pub fn ground(coords: &[(i32, i32)]) -> Vec<Coordinate> {
        coords.iter().map(|&(x, y)| Coordinate::ground(x, y)).collect()
    }

    pub fn set(coords: &[Coordinate]) -> FxHashSet<Coordinate> {
        coords.iter().copied().collect()
    }

    /// Board holding the mover (id 1) plus plain pieces at `others`
    pub fn board_with(kind: PieceType, at: Coordinate, others: &[Coordinate]) -> (Piece, Board) {
        let mover = Piece::new(1, kind, Color::White).at(at);
        let mut board = Board::default();
        board.insert(mover.id, mover);
        for (i, pos) in others.iter().enumerate() {
            let id = i as PieceId + 2;
            board.insert(id, Piece::new(id, PieceType::Ant, Color::Black).at(*pos));
        }
        (mover, board)
    }

    pub fn moves_of(kind: PieceType, at: Coordinate, others: &[Coordinate]) -> FxHashSet<Coordinate> {
        let (mover, board) = board_with(kind, at, others);
        generate_moves(&mover, &board).unwrap()
    }

    /// What the piece type's rule alone allows, even where the mover holds
    /// the hive together
    pub fn steps_of(kind: PieceType, at: Coordinate, others: &[Coordinate]) -> FxHashSet<Coordinate> {
        let rest = Occupancy::from_positions(others.iter().copied());
        rule_moves(kind, at, &rest)
    }
}
