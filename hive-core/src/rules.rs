//! RuleSet - starting hand composition and queen deadline

use crate::pieces::PieceType;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game configuration, loadable from JSON
///
/// Missing fields fall back to the standard game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub name: String,
    pub queens: u8,
    pub ants: u8,
    pub spiders: u8,
    pub grasshoppers: u8,
    pub beetles: u8,
    /// Placement number (per player) by which the queen must be down
    pub queen_deadline: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            queens: 1,
            ants: 3,
            spiders: 2,
            grasshoppers: 3,
            beetles: 2,
            queen_deadline: 4,
        }
    }
}

impl RuleSet {
    /// Starting count of one piece type
    pub fn count(&self, kind: PieceType) -> u8 {
        match kind {
            PieceType::Queen => self.queens,
            PieceType::Ant => self.ants,
            PieceType::Spider => self.spiders,
            PieceType::Grasshopper => self.grasshoppers,
            PieceType::Beetle => self.beetles,
        }
    }

    /// Pieces dealt to each player, in hand order
    pub fn hand(&self) -> Vec<PieceType> {
        PieceType::ALL
            .iter()
            .flat_map(|&kind| std::iter::repeat(kind).take(self.count(kind) as usize))
            .collect()
    }

    pub fn hand_size(&self) -> usize {
        PieceType::ALL.iter().map(|&k| self.count(k) as usize).sum()
    }

    /// Plies (0-based, both players counted) on which a player still
    /// missing their queen may only put the queen
    pub fn forced_queen_plies(&self) -> [usize; 2] {
        let first = (self.queen_deadline as usize).saturating_sub(1) * 2;
        [first, first + 1]
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.queens == 1, "rule set {:?} must deal exactly one queen", self.name);
        ensure!(
            self.queen_deadline >= 2,
            "queen deadline must be at least the second placement, got {}",
            self.queen_deadline
        );
        ensure!(
            self.queen_deadline as usize <= self.hand_size(),
            "queen deadline {} exceeds hand size {}",
            self.queen_deadline,
            self.hand_size()
        );
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule set: {}", path.display()))?;
        let rules: RuleSet = serde_json::from_str(&content)
            .with_context(|| format!("Invalid rule set JSON: {}", path.display()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
