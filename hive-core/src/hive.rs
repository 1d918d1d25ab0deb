//! Hive connectivity: the one-hive rule, the pinch rule and occupancy views
//!
//! Pieces form a graph where two pieces share an edge when they are stacked
//! directly on each other or hex-adjacent at equal elevation. The board is
//! legal only while that graph is connected.

use crate::board::{are_connected_3d, level_neighbors, pinch_hexes, Coordinate};
use crate::error::{HiveError, Result};
use crate::pieces::{Board, Piece, PieceId};
use rustc_hash::{FxHashMap, FxHashSet};

// ============================================================================
// OCCUPANCY
// ============================================================================

/// Snapshot of which cells are taken, built from piece positions
///
/// Ground-level tests look at whole columns; the pinch test looks at a
/// column's height so that climbing pieces are judged at their own level.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: FxHashSet<Coordinate>,
    heights: FxHashMap<(i32, i32), i32>,
}

impl Occupancy {
    pub fn from_positions<I: IntoIterator<Item = Coordinate>>(positions: I) -> Self {
        let mut occupancy = Self::default();
        for c in positions {
            occupancy.insert(c);
        }
        occupancy
    }

    /// Every placed piece on the board
    pub fn of_board(board: &Board) -> Self {
        Self::from_positions(board.values().filter_map(|p| p.position))
    }

    /// The board as seen by a piece that has been lifted off it
    pub fn without(board: &Board, lifted: PieceId) -> Self {
        Self::from_positions(
            board
                .values()
                .filter(|p| p.id != lifted)
                .filter_map(|p| p.position),
        )
    }

    fn insert(&mut self, c: Coordinate) {
        self.cells.insert(c);
        let top = self.heights.entry((c.x, c.y)).or_insert(c.z);
        if c.z > *top {
            *top = c.z;
        }
    }

    /// Exact (x, y, z) occupancy
    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    /// Highest occupied elevation in the column, if any
    pub fn top_elevation(&self, c: Coordinate) -> Option<i32> {
        self.heights.get(&(c.x, c.y)).copied()
    }

    /// Anything in the column, at any elevation
    pub fn column_occupied(&self, c: Coordinate) -> bool {
        self.heights.contains_key(&(c.x, c.y))
    }

    /// The column reaches elevation `z`
    pub fn occupied_at_level(&self, c: Coordinate, z: i32) -> bool {
        self.top_elevation(c).map_or(false, |top| top >= z)
    }

    /// Some occupied cell shares a hive edge with `c`
    pub fn touches(&self, c: Coordinate) -> bool {
        self.contains(c.at_elevation(c.z + 1))
            || self.contains(c.at_elevation(c.z - 1))
            || level_neighbors(c).iter().any(|n| self.contains(*n))
    }
}

// ============================================================================
// PINCH RULE
// ============================================================================

/// Lateral move between adjacent hexes at equal elevation that is not
/// blocked on both flanks
pub fn can_slide(start: Coordinate, end: Coordinate, occupancy: &Occupancy) -> bool {
    if start == end || start.z != end.z {
        return false;
    }
    let pinch = pinch_hexes(start, end);
    if pinch.is_empty() {
        return false;
    }
    !pinch
        .iter()
        .all(|p| occupancy.occupied_at_level(*p, start.z))
}

/// `can_slide` onto a free cell
pub fn is_open_path(start: Coordinate, end: Coordinate, occupancy: &Occupancy) -> bool {
    !occupancy.contains(end) && can_slide(start, end, occupancy)
}

// ============================================================================
// CONNECTIVITY
// ============================================================================

/// Flood fill over the hive graph; vacuously true for 0 or 1 positions
pub fn is_connected(positions: &[Coordinate]) -> bool {
    let Some(&first) = positions.first() else {
        return true;
    };
    let remaining: FxHashSet<Coordinate> = positions.iter().copied().collect();
    if remaining.len() <= 1 {
        return true;
    }

    let mut seen = FxHashSet::default();
    seen.insert(first);
    let mut stack = vec![first];

    while let Some(c) = stack.pop() {
        let above = c.at_elevation(c.z + 1);
        let below = c.at_elevation(c.z - 1);
        let adjacent = level_neighbors(c);
        for next in adjacent.iter().copied().chain([above, below]) {
            if remaining.contains(&next) && seen.insert(next) {
                stack.push(next);
            }
        }
    }

    seen.len() == remaining.len()
}

/// Whether lifting `piece` would split the rest of the hive
pub fn is_essential(piece: &Piece, pieces: &[Piece]) -> Result<bool> {
    locate(piece, pieces)?;
    let rest: Vec<Coordinate> = pieces
        .iter()
        .filter(|p| p.id != piece.id)
        .filter_map(|p| p.position)
        .collect();
    Ok(!is_connected(&rest))
}

/// No two free hexes around `piece` (at its own elevation) are adjacent,
/// so nothing could slide in or out
pub fn is_surrounded(piece: &Piece, pieces: &[Piece]) -> Result<bool> {
    let own = locate(piece, pieces)?;
    let occupancy = Occupancy::from_positions(pieces.iter().filter_map(|p| p.position));
    let free: Vec<Coordinate> = level_neighbors(own)
        .into_iter()
        .filter(|n| !occupancy.contains(*n))
        .collect();

    let open_arc = free
        .iter()
        .enumerate()
        .any(|(i, a)| free[i + 1..].iter().any(|b| are_connected_3d(*a, *b)));
    Ok(!open_arc)
}

/// Topmost piece in the column of `column`
pub fn top_piece_at<'a, I>(column: Coordinate, pieces: I) -> Option<&'a Piece>
where
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .filter_map(|p| p.position.map(|pos| (pos, p)))
        .filter(|(pos, _)| pos.same_column(&column))
        .max_by_key(|(pos, _)| pos.z)
        .map(|(_, p)| p)
}

/// Position of `piece`, checking it is part of `pieces`
fn locate(piece: &Piece, pieces: &[Piece]) -> Result<Coordinate> {
    if pieces.is_empty() {
        return Err(HiveError::EmptyPieces);
    }
    let position = piece
        .position
        .ok_or(HiveError::MissingCoordinates(piece.id))?;
    if !pieces.iter().any(|p| p.id == piece.id) {
        return Err(HiveError::PieceNotOnBoard(piece.id));
    }
    Ok(position)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Color, PieceType};

    fn c(x: i32, y: i32, z: i32) -> Coordinate {
        Coordinate::new(x, y, z)
    }

    /// Ant pieces with sequential ids at the given positions
    fn pieces_at(coords: &[Coordinate]) -> Vec<Piece> {
        coords
            .iter()
            .enumerate()
            .map(|(i, pos)| Piece::new(i as PieceId + 1, PieceType::Ant, Color::White).at(*pos))
            .collect()
    }

    fn ground(coords: &[(i32, i32)]) -> Occupancy {
        Occupancy::from_positions(coords.iter().map(|&(x, y)| Coordinate::ground(x, y)))
    }

    fn check_all(expected: &[(Coordinate, bool)], f: fn(&Piece, &[Piece]) -> Result<bool>) {
        let coords: Vec<_> = expected.iter().map(|(c, _)| *c).collect();
        let pieces = pieces_at(&coords);
        for (piece, (pos, want)) in pieces.iter().zip(expected) {
            assert_eq!(f(piece, &pieces).unwrap(), *want, "piece at {}", pos);
        }
    }

    #[test]
    fn test_connected_trivial() {
        assert!(is_connected(&[]));
        assert!(is_connected(&[c(5, 5, 0)]));
        assert!(is_connected(&[c(0, 0, 0), c(0, 1, 0)]));
        assert!(!is_connected(&[c(0, 0, 0), c(0, 2, 0)]));
    }

    #[test]
    fn test_connected_through_stack() {
        assert!(is_connected(&[c(0, 0, 0), c(0, 0, 1), c(0, 0, 2)]));
        assert!(!is_connected(&[c(0, 0, 0), c(0, 0, 2)]));
        assert!(is_connected(&[c(0, 0, 0), c(0, 0, 1), c(1, 0, 1)]));
        assert!(!is_connected(&[c(0, 0, 0), c(1, 0, 1)]));
    }

    #[test]
    fn test_essential_green_set() {
        let expected = [
            (c(0, 0, 0), true),
            (c(0, 0, 1), true),
            (c(0, 0, 2), false),
            (c(-1, -1, 0), true),
            (c(-2, -1, 0), true),
            (c(-2, -2, 0), true),
            (c(-1, -3, 0), true),
            (c(-1, -4, 0), false),
            (c(0, -2, 0), true),
            (c(1, -2, 0), true),
            (c(2, -1, 0), false),
            (c(0, 1, 0), false),
            (c(0, 2, 0), false),
            (c(-1, 1, 0), false),
            (c(1, 1, 0), false),
            (c(1, 0, 0), false),
            (c(2, 1, 0), true),
            (c(3, 1, 0), true),
            (c(3, 2, 0), false),
        ];
        check_all(&expected, is_essential);
    }

    #[test]
    fn test_essential_red_set() {
        let expected = [
            (c(0, 0, 0), true),
            (c(0, 0, 1), true),
            (c(0, 0, 2), false),
            (c(-1, -1, 0), false),
            (c(-2, -1, 0), false),
            (c(-2, -2, 0), false),
            (c(-1, -3, 0), true),
            (c(-1, -4, 0), false),
            (c(0, -2, 0), false),
            (c(1, -2, 0), false),
            (c(2, -1, 0), false),
            (c(2, 0, 0), false),
            (c(0, 1, 0), false),
            (c(0, 2, 0), false),
            (c(-1, 1, 0), false),
            (c(1, 1, 0), false),
            (c(1, 0, 0), false),
            (c(2, 1, 0), true),
            (c(3, 1, 0), true),
            (c(3, 2, 0), false),
        ];
        check_all(&expected, is_essential);
    }

    #[test]
    fn test_essential_leaves_input_untouched() {
        let pieces = pieces_at(&[c(0, 0, 0), c(0, 1, 0), c(0, 2, 0)]);
        let before = pieces.clone();
        assert!(is_essential(&pieces[1], &pieces).unwrap());
        assert_eq!(pieces, before);
    }

    #[test]
    fn test_essential_preconditions() {
        let pieces = pieces_at(&[c(0, 0, 0), c(0, 1, 0)]);
        assert_eq!(is_essential(&pieces[0], &[]), Err(HiveError::EmptyPieces));

        let stray = Piece::new(99, PieceType::Queen, Color::Black).at(c(4, 4, 0));
        assert_eq!(is_essential(&stray, &pieces), Err(HiveError::PieceNotOnBoard(99)));

        let in_hand = Piece::new(1, PieceType::Ant, Color::White);
        assert_eq!(is_essential(&in_hand, &pieces), Err(HiveError::MissingCoordinates(1)));
    }

    #[test]
    fn test_surrounded_green_set() {
        let expected = [
            (c(0, 1, 0), false),
            (c(0, 0, 0), false),
            (c(0, -1, 0), false),
            (c(-1, -1, 0), true),
            (c(-2, 0, 0), false),
            (c(-2, -1, 0), false),
        ];
        check_all(&expected, is_surrounded);
    }

    #[test]
    fn test_surrounded_red_set() {
        let expected = [
            (c(0, 1, 0), false),
            (c(0, 0, 0), true),
            (c(0, -1, 0), false),
            (c(-1, 0, 0), false),
            (c(-1, -1, 0), false),
            (c(1, 0, 0), false),
        ];
        check_all(&expected, is_surrounded);
    }

    #[test]
    fn test_surrounded_brown_set() {
        let expected = [
            (c(-1, 0, 0), false),
            (c(-1, -1, 0), true),
            (c(-1, -2, 0), false),
            (c(-2, -1, 0), false),
            (c(0, 0, 0), false),
        ];
        check_all(&expected, is_surrounded);
    }

    #[test]
    fn test_surrounded_at_elevation() {
        let ring = [
            (c(0, 0, 0), true),
            (c(0, 1, 0), false),
            (c(1, 0, 0), false),
            (c(1, -1, 0), false),
            (c(0, -1, 0), false),
            (c(-1, 0, 0), false),
            (c(-1, -1, 0), false),
        ];
        let mut single = ring.to_vec();
        single.push((c(0, 0, 1), false));
        check_all(&single, is_surrounded);

        let mut layered = ring.to_vec();
        layered.push((c(0, 0, 1), true));
        for (x, y) in [(0, 1), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, -1)] {
            layered.push((c(x, y, 1), false));
        }
        check_all(&layered, is_surrounded);
    }

    #[test]
    fn test_surrounded_preconditions() {
        let pieces = pieces_at(&[c(0, 0, 0)]);
        assert_eq!(is_surrounded(&pieces[0], &[]), Err(HiveError::EmptyPieces));
    }

    #[test]
    fn test_open_path_ground_sets() {
        let ends = [
            c(-1, -1, 0),
            c(-1, 0, 0),
            c(0, 1, 0),
            c(1, 0, 0),
            c(1, -1, 0),
            c(0, -1, 0),
        ];
        let cases: [(&[(i32, i32)], [bool; 6]); 6] = [
            (&[(0, -1), (-1, -1), (0, 1), (0, 0)], [false, false, false, true, true, false]),
            (&[(-1, 0), (1, 0), (0, 0)], [true, false, false, false, true, true]),
            (&[(0, 1), (1, -1), (0, 0)], [true, true, false, false, false, true]),
            (&[(1, 0), (0, -1), (0, 0)], [true, true, true, false, false, false]),
            (&[(-1, -1), (1, -1), (0, 0)], [false, true, true, true, false, false]),
            (&[(-1, 0), (0, -1), (0, 0)], [false, false, true, true, true, false]),
        ];
        for (set, expected) in cases {
            let occupancy = ground(set);
            for (end, want) in ends.iter().zip(expected) {
                assert_eq!(
                    is_open_path(Coordinate::ORIGIN, *end, &occupancy),
                    want,
                    "{:?} -> {}",
                    set,
                    end
                );
            }
        }
    }

    #[test]
    fn test_slide_blocked_by_pinch() {
        let occupancy = ground(&[(0, -1), (-1, -1), (0, 1), (0, 0)]);
        // both flanks of (0,0)->(-1,0) are taken
        assert!(!can_slide(Coordinate::ORIGIN, c(-1, 0, 0), &occupancy));
        assert!(can_slide(Coordinate::ORIGIN, c(1, 0, 0), &occupancy));
    }

    #[test]
    fn test_slide_rejects_degenerate() {
        let occupancy = ground(&[(0, 0)]);
        assert!(!can_slide(c(2, 0, 0), c(2, 0, 0), &occupancy));
        assert!(!can_slide(Coordinate::ORIGIN, c(2, 0, 0), &occupancy));
        assert!(!can_slide(c(2, 1, 0), c(2, 0, 1), &occupancy));
    }

    #[test]
    fn test_open_path_on_stacks() {
        let occupancy = Occupancy::from_positions([
            c(0, 1, 0),
            c(0, 1, 1),
            c(1, 0, 0),
            c(1, 0, 1),
            c(1, -1, 0),
            c(1, -1, 1),
            c(1, -1, 2),
            c(1, 1, 0),
            c(0, 0, 0),
        ]);
        let start = c(1, 0, 1);
        assert!(is_open_path(start, c(1, 1, 1), &occupancy));
        assert!(is_open_path(start, c(2, 1, 1), &occupancy));
        assert!(is_open_path(start, c(2, 0, 1), &occupancy));
        assert!(!is_open_path(start, c(1, -1, 1), &occupancy));
        assert!(!is_open_path(start, c(0, 0, 1), &occupancy));
        assert!(!is_open_path(start, c(0, 1, 1), &occupancy));
    }

    #[test]
    fn test_occupancy_columns() {
        let occupancy = Occupancy::from_positions([c(10, 0, 1), c(12, -1, 0), c(-8, 4, 1)]);
        assert!(occupancy.column_occupied(c(10, 0, 0)));
        assert!(occupancy.column_occupied(c(12, -1, 4)));
        assert!(occupancy.column_occupied(c(-8, 4, 1)));
        assert!(!occupancy.column_occupied(c(66, 66, 0)));
        assert!(!occupancy.column_occupied(c(11, 0, 0)));
        assert_eq!(occupancy.top_elevation(c(10, 0, 0)), Some(1));
        assert!(occupancy.occupied_at_level(c(10, 0, 0), 1));
        assert!(!occupancy.occupied_at_level(c(10, 0, 0), 2));
    }

    #[test]
    fn test_touches() {
        let occupancy = Occupancy::from_positions([c(0, 0, 0), c(0, 0, 1)]);
        assert!(occupancy.touches(c(0, 1, 0)));
        assert!(occupancy.touches(c(1, 0, 1)));
        assert!(occupancy.touches(c(0, 0, 2)));
        assert!(!occupancy.touches(c(1, 0, 2)));
        assert!(!occupancy.touches(c(0, 2, 0)));
    }

    #[test]
    fn test_top_piece() {
        let stack = [
            (1, c(10, 10, 0), Color::White),
            (2, c(10, 10, 1), Color::White),
            (3, c(10, 10, 2), Color::Black),
            (4, c(20, -10, 0), Color::Black),
            (5, c(20, -9, 0), Color::White),
            (6, c(101, 101, 0), Color::White),
            (7, c(101, 101, 1), Color::Black),
            (8, c(101, 101, 2), Color::White),
            (9, c(101, 101, 3), Color::Black),
            (10, c(102, 101, 0), Color::White),
            (11, c(102, 101, 1), Color::White),
            (12, c(103, 101, 0), Color::White),
            (13, c(103, 101, 1), Color::Black),
        ];
        let pieces: Vec<Piece> = stack
            .iter()
            .map(|&(id, pos, owner)| Piece::new(id, PieceType::Beetle, owner).at(pos))
            .collect();

        let owner_at = |x, y| top_piece_at(Coordinate::ground(x, y), &pieces).map(|p| p.owner);
        assert_eq!(owner_at(10, 10), Some(Color::Black));
        assert_eq!(owner_at(20, -10), Some(Color::Black));
        assert_eq!(owner_at(20, -9), Some(Color::White));
        assert_eq!(owner_at(101, 101), Some(Color::Black));
        assert_eq!(owner_at(102, 101), Some(Color::White));
        assert_eq!(owner_at(103, 101), Some(Color::Black));
        assert_eq!(owner_at(0, 0), None);
    }
}
