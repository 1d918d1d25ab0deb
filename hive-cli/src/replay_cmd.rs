//! Replay command - apply a recorded game and print where it ended
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: GameRecord::load(), GameRecord::replay(), report_state()

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::new_cmd::report_state;
use crate::record::GameRecord;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    /// Game record JSON file
    #[arg(value_name = "FILE")]
    pub record: PathBuf,

    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: ReplayArgs) -> Result<()> {
    let record = GameRecord::load(&args.record)?;

    tracing::info!(
        "Replaying {} vs {} ({} moves)",
        record.white,
        record.black,
        record.moves.len()
    );

    let state = record.replay()?;
    report_state(&state, args.json)
}
