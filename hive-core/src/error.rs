//! Rule and precondition violations

use crate::pieces::PieceId;

/// Every failure the engine reports; all are raised before any state change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HiveError {
    #[error("player identity is missing")]
    MissingPlayer,

    #[error("both players share the identity {0:?}")]
    DuplicatePlayer(String),

    #[error("invalid rule set: {0}")]
    InvalidRules(String),

    #[error("piece collection is empty")]
    EmptyPieces,

    #[error("piece {0} has no coordinates")]
    MissingCoordinates(PieceId),

    #[error("destination coordinates are missing")]
    MissingDestination,

    #[error("piece {0} does not exist in this game")]
    PieceNotFound(PieceId),

    #[error("piece {0} is not on the board")]
    PieceNotOnBoard(PieceId),

    #[error("player {0:?} is not part of this game")]
    PlayerNotFound(String),

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(String),

    #[error("piece {0} cannot be put there")]
    PutNotAvailable(PieceId),

    #[error("piece {0} cannot move there")]
    MoveNotAvailable(PieceId),
}

pub type Result<T> = std::result::Result<T, HiveError>;
