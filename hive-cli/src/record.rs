//! Game records - JSON files holding players, rules and a move list
//!
//! ```json
//! {
//!   "white": "alice",
//!   "black": "bob",
//!   "rules": "quick.json",
//!   "moves": [
//!     { "player": "alice", "piece": 1, "to": { "x": 0, "y": 0 } },
//!     { "player": "bob", "piece": 12, "to": { "x": 0, "y": 1 } }
//!   ]
//! }
//! ```
//!
//! A relative `rules` path is resolved against the record's directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hive_core::{Coordinate, GameState, PieceId, RuleSet};

/// One recorded action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: String,
    pub piece: PieceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Coordinate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub moves: Vec<RecordedMove>,
}

impl GameRecord {
    /// Load from JSON file, anchoring a relative rules path to the file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read game record: {}", path.display()))?;
        let mut record: GameRecord = serde_json::from_str(&content)
            .with_context(|| format!("Invalid game record JSON: {}", path.display()))?;

        if let (Some(rules), Some(dir)) = (&record.rules, path.parent()) {
            if rules.is_relative() {
                record.rules = Some(dir.join(rules));
            }
        }
        Ok(record)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write game record: {}", path.display()))?;
        Ok(())
    }

    pub fn load_rules(&self) -> Result<RuleSet> {
        match &self.rules {
            Some(path) => RuleSet::load(path),
            None => Ok(RuleSet::default()),
        }
    }

    /// The game before any recorded move
    pub fn start(&self) -> Result<GameState> {
        let rules = self.load_rules()?;
        let mut state = GameState::with_rules(&self.white, &self.black, rules)
            .context("Failed to create game")?;
        if let Some(id) = self.id {
            state = state.with_id(id);
        }
        Ok(state)
    }

    /// Apply every recorded move in order
    ///
    /// The first refused move aborts the replay, naming its ply.
    pub fn replay(&self) -> Result<GameState> {
        let mut state = self.start()?;
        for (ply, mv) in self.moves.iter().enumerate() {
            state = state
                .apply_move(mv.piece, mv.to, &mv.player)
                .with_context(|| {
                    format!("Ply {}: {} could not play piece {}", ply, mv.player, mv.piece)
                })?;
        }
        Ok(state)
    }
}
