//! Piece type definitions

use crate::board::Coordinate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique piece identifier (sequential from 1 within a game)
pub type PieceId = u32;

/// On-board pieces keyed by id
pub type Board = FxHashMap<PieceId, Piece>;

/// The five insect kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceType {
    Queen,
    Ant,
    Spider,
    Grasshopper,
    Beetle,
}

impl PieceType {
    /// Hand order used when dealing a starting set
    pub const ALL: [PieceType; 5] = [
        PieceType::Queen,
        PieceType::Ant,
        PieceType::Spider,
        PieceType::Grasshopper,
        PieceType::Beetle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Queen => "Queen",
            PieceType::Ant => "Ant",
            PieceType::Spider => "Spider",
            PieceType::Grasshopper => "Grasshopper",
            PieceType::Beetle => "Beetle",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seat at the table; the first player moves first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// A piece, in hand (no position) or on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceType,
    pub owner: Color,
    pub position: Option<Coordinate>,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceType, owner: Color) -> Self {
        Self {
            id,
            kind,
            owner,
            position: None,
        }
    }

    /// Same piece, placed at `position`
    pub fn at(self, position: Coordinate) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

/// A put or relocation: piece id + destination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceId,
    pub to: Coordinate,
}

impl Move {
    pub fn new(piece: PieceId, to: Coordinate) -> Self {
        Self { piece, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} -> {}", self.piece, self.to)
    }
}
