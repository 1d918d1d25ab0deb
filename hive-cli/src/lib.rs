//! Hive CLI - command implementations
//!
//! Commands:
//! - new: Create a game and print its starting state
//! - replay: Replay a recorded game and print the final state
//! - moves: List where one piece may go after a recorded game

pub mod moves_cmd;
pub mod new_cmd;
pub mod record;
pub mod replay_cmd;

pub use record::{GameRecord, RecordedMove};
