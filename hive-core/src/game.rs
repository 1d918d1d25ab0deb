//! Game state and the validate-and-apply transition

use crate::board::{ground_neighbors, Coordinate};
use crate::error::{HiveError, Result};
use crate::hive::{self, Occupancy};
use crate::movement;
use crate::pieces::{Board, Color, Move, Piece, PieceId, PieceType};
use crate::rules::RuleSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Id of the first piece dealt; later pieces count up from here
const FIRST_PIECE_ID: PieceId = 1;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A seat at the table: identity plus the pieces not yet put
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    hand: BTreeMap<PieceId, Piece>,
}

impl Player {
    fn new(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color,
            hand: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Pieces in hand, by id
    pub fn hand(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.hand.values()
    }

    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    pub fn holds(&self, id: PieceId) -> bool {
        self.hand.contains_key(&id)
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to mutate)
///
/// Every change goes through [`GameState::apply_move`], which validates the
/// whole request before producing the next state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    id: u64,
    rules: RuleSet,
    white: Player,
    black: Player,

    /// Board: piece id -> piece (position always present)
    board: Board,

    /// Accepted puts and moves, oldest first
    history: Vec<Move>,

    current: Color,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Standard game; `white` moves first
    pub fn new(white: &str, black: &str) -> Result<Self> {
        Self::with_rules(white, black, RuleSet::default())
    }

    /// Game with a custom starting hand and queen deadline
    pub fn with_rules(white: &str, black: &str, rules: RuleSet) -> Result<Self> {
        if white.trim().is_empty() || black.trim().is_empty() {
            return Err(HiveError::MissingPlayer);
        }
        if white == black {
            return Err(HiveError::DuplicatePlayer(white.to_string()));
        }
        rules
            .validate()
            .map_err(|e| HiveError::InvalidRules(e.to_string()))?;

        let mut white = Player::new(white, Color::White);
        let mut black = Player::new(black, Color::Black);
        let mut next_id = FIRST_PIECE_ID;
        for player in [&mut white, &mut black] {
            for kind in rules.hand() {
                player
                    .hand
                    .insert(next_id, Piece::new(next_id, kind, player.color));
                next_id += 1;
            }
        }

        tracing::info!(
            "Game created: {} vs {} ({} pieces each, rules {:?})",
            white.name,
            black.name,
            white.hand.len(),
            rules.name
        );

        Ok(Self {
            id: 0,
            rules,
            white,
            black,
            board: Board::default(),
            history: Vec::new(),
            current: Color::White,
        })
    }

    /// Tag the game with the id its host knows it by
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted puts and moves so far
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Look a piece up on the board, then in either hand
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board
            .get(&id)
            .or_else(|| self.white.hand.get(&id))
            .or_else(|| self.black.hand.get(&id))
    }

    /// Topmost piece in the column of `column`
    pub fn top_piece_at(&self, column: Coordinate) -> Option<&Piece> {
        hive::top_piece_at(column, self.board.values())
    }

    pub fn queen_placed(&self, color: Color) -> bool {
        self.board
            .values()
            .any(|p| p.owner == color && p.kind == PieceType::Queen)
    }

    fn resolve_player(&self, name: &str) -> Result<Color> {
        if self.white.name == name {
            Ok(Color::White)
        } else if self.black.name == name {
            Ok(Color::Black)
        } else {
            Err(HiveError::PlayerNotFound(name.to_string()))
        }
    }

    // ========================================================================
    // AVAILABLE ACTIONS
    // ========================================================================

    /// Where a piece in hand may be put; empty once the piece is on the board
    pub fn available_puts(&self, id: PieceId) -> Result<FxHashSet<Coordinate>> {
        let piece = self.piece(id).ok_or(HiveError::PieceNotFound(id))?;
        if piece.is_placed() {
            return Ok(FxHashSet::default());
        }
        Ok(self.puts_for(piece))
    }

    /// Where a piece on the board may move, exactly as `apply_move` would accept
    pub fn available_moves(&self, id: PieceId) -> Result<FxHashSet<Coordinate>> {
        let piece = self.piece(id).ok_or(HiveError::PieceNotFound(id))?;
        if !piece.is_placed() {
            return Err(HiveError::PieceNotOnBoard(id));
        }
        if self.is_pinned(piece)? {
            return Ok(FxHashSet::default());
        }
        movement::generate_moves(piece, &self.board)
    }

    fn puts_for(&self, piece: &Piece) -> FxHashSet<Coordinate> {
        let ply = self.ply();
        match (ply, self.board.len()) {
            (0, 0) => return FxHashSet::from_iter([Coordinate::ORIGIN]),
            (1, 1) => {
                return self
                    .board
                    .values()
                    .filter_map(|p| p.position)
                    .flat_map(ground_neighbors)
                    .collect()
            }
            _ => {}
        }

        if self.rules.forced_queen_plies().contains(&ply)
            && piece.kind != PieceType::Queen
            && !self.queen_placed(piece.owner)
        {
            return FxHashSet::default();
        }

        let occupancy = Occupancy::of_board(&self.board);
        let mut puts = FxHashSet::default();
        for position in self.board.values().filter_map(|p| p.position) {
            for spot in ground_neighbors(position) {
                if occupancy.column_occupied(spot) || puts.contains(&spot) {
                    continue;
                }
                if !self.touches_opponent(spot, piece.owner) {
                    puts.insert(spot);
                }
            }
        }
        puts
    }

    /// A neighboring column of `spot` is topped by a piece not owned by `owner`
    fn touches_opponent(&self, spot: Coordinate, owner: Color) -> bool {
        ground_neighbors(spot).iter().any(|column| {
            self.top_piece_at(*column)
                .map_or(false, |top| top.owner != owner)
        })
    }

    /// Covered by another piece, or holding the hive together
    fn is_pinned(&self, piece: &Piece) -> Result<bool> {
        let position = piece
            .position
            .ok_or(HiveError::MissingCoordinates(piece.id))?;
        let above = position.at_elevation(position.z + 1);
        if self.board.values().any(|p| p.position == Some(above)) {
            return Ok(true);
        }
        let on_board: Vec<Piece> = self.board.values().copied().collect();
        hive::is_essential(piece, &on_board)
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Validate and apply a put or a move, returning the next state
    ///
    /// On failure nothing changes and the turn does not pass.
    pub fn apply_move(
        &self,
        id: PieceId,
        destination: Option<Coordinate>,
        acting: &str,
    ) -> Result<Self> {
        match self.validate_move(id, destination, acting) {
            Ok(mv) => {
                let mut next = self.clone();
                next.apply_move_internal(mv);
                tracing::debug!(
                    "Game {}: ply {} {} played {}",
                    self.id,
                    self.ply(),
                    acting,
                    mv
                );
                Ok(next)
            }
            Err(err) => {
                tracing::debug!("Game {}: rejected piece {} for {}: {}", self.id, id, acting, err);
                Err(err)
            }
        }
    }

    fn validate_move(
        &self,
        id: PieceId,
        destination: Option<Coordinate>,
        acting: &str,
    ) -> Result<Move> {
        let piece = self.piece(id).ok_or(HiveError::PieceNotFound(id))?;
        let to = destination.ok_or(HiveError::MissingDestination)?;
        if self.resolve_player(acting)? != self.current {
            return Err(HiveError::NotYourTurn(acting.to_string()));
        }

        let mv = Move::new(id, to);
        if piece.is_placed() {
            if self.is_pinned(piece)? || !movement::is_legal(&mv, &self.board)? {
                return Err(HiveError::MoveNotAvailable(id));
            }
        } else if !self.puts_for(piece).contains(&to) {
            return Err(HiveError::PutNotAvailable(id));
        }
        Ok(mv)
    }

    fn apply_move_internal(&mut self, mv: Move) {
        if let Some(piece) = self.board.get_mut(&mv.piece) {
            piece.position = Some(mv.to);
        } else {
            let owner = self.piece(mv.piece).map(|p| p.owner);
            if let Some(piece) = owner.and_then(|o| self.player_mut(o).hand.remove(&mv.piece)) {
                self.board.insert(piece.id, piece.at(mv.to));
            }
        }
        self.history.push(mv);
        self.current = self.current.opponent();
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game {} [{}] ply {}, {} ({:?}) to move",
            self.id,
            self.rules.name,
            self.ply(),
            self.current_player().name,
            self.current
        )?;
        for player in [&self.white, &self.black] {
            writeln!(f, "  {} ({:?}): {} in hand", player.name, player.color, player.hand.len())?;
        }
        let mut placed: Vec<&Piece> = self.board.values().collect();
        placed.sort_by_key(|p| p.id);
        for piece in placed {
            if let Some(pos) = piece.position {
                writeln!(f, "  #{} {} ({:?}) at {}", piece.id, piece.kind, piece.owner, pos)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
