//! New command - create a game and print its starting state
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: create_game(), report_state()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hive_core::{GameState, RuleSet};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct NewArgs {
    /// White player's name
    #[arg(long)]
    pub white: String,

    /// Black player's name
    #[arg(long)]
    pub black: String,

    /// Rule set JSON file (standard game if omitted)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Game identifier
    #[arg(long)]
    pub id: Option<u64>,

    /// Output the state as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: NewArgs) -> Result<()> {
    let state = create_game(&args)?;
    report_state(&state, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

pub fn create_game(args: &NewArgs) -> Result<GameState> {
    let rules = match &args.rules {
        Some(path) => RuleSet::load(path)?,
        None => RuleSet::default(),
    };

    let mut state =
        GameState::with_rules(&args.white, &args.black, rules).context("Failed to create game")?;
    if let Some(id) = args.id {
        state = state.with_id(id);
    }
    Ok(state)
}

/// Print a state as JSON or as the readable summary
pub fn report_state(state: &GameState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        print!("{}", state);
    }
    Ok(())
}
