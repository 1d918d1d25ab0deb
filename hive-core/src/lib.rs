//! Hive Core - Rules engine
//!
//! This crate decides which puts and moves are legal and applies them:
//! - Board geometry (offset hex grid with stack elevation)
//! - Hive connectivity and the pinch rule
//! - Movement generators for the five piece types
//! - Game state with validate-and-apply transitions
//! - Rule set configuration

pub mod board;
pub mod error;
pub mod game;
pub mod hive;
pub mod movement;
pub mod pieces;
pub mod rules;

// Re-exports for convenient access
pub use board::{are_connected_3d, are_neighbors, ground_neighbors, Coordinate, Direction};
pub use error::HiveError;
pub use game::{GameState, Player};
pub use hive::{can_slide, is_connected, is_essential, is_surrounded, Occupancy};
pub use movement::{generate_moves, generator_for, is_legal, MoveGenerator};
pub use pieces::{Board, Color, Move, Piece, PieceId, PieceType};
pub use rules::RuleSet;
