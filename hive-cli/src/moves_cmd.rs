//! Moves command - list where one piece may go after a recorded game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: destinations(), report_destinations()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use hive_core::{Coordinate, GameState, PieceId};

use crate::record::GameRecord;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MovesArgs {
    /// Game record JSON file
    #[arg(value_name = "FILE")]
    pub record: PathBuf,

    /// Piece to query
    #[arg(long)]
    pub piece: PieceId,

    /// Output the destinations as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: MovesArgs) -> Result<()> {
    let state = GameRecord::load(&args.record)?.replay()?;
    let found = destinations(&state, args.piece)?;
    report_destinations(&state, args.piece, &found, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Puts for a piece in hand, moves for a piece on the board, sorted
pub fn destinations(state: &GameState, piece: PieceId) -> Result<Vec<Coordinate>> {
    let found = match state.piece(piece) {
        None => bail!("Piece {} does not exist in game {}", piece, state.id()),
        Some(p) if p.is_placed() => state.available_moves(piece)?,
        Some(_) => state.available_puts(piece)?,
    };
    let mut sorted: Vec<Coordinate> = found.into_iter().collect();
    sorted.sort();
    Ok(sorted)
}

fn report_destinations(
    state: &GameState,
    piece: PieceId,
    found: &[Coordinate],
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(found)?);
        return Ok(());
    }

    let action = if state.board().contains_key(&piece) { "move" } else { "put" };
    println!("Piece {} can {} to {} destination(s)", piece, action, found.len());
    for c in found {
        println!("  {}", c);
    }
    Ok(())
}
