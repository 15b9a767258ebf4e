//! Candidate path generation per material.
//!
//! Paths describe movement *shape* only. They are not cut at occupied
//! squares, and pawn paths do not check that the squares ahead are empty:
//! replaying a recorded game only needs an origin consistent with the shape
//! of the move. [`crate::Occupancy::Truncated`] layers occupancy on top in
//! the resolver.

use pawn_core::{Color, Direction, Material, Path, Piece, Position};

/// The eight knight jumps as compound single steps.
const KNIGHT_JUMPS: [[Direction; 3]; 8] = [
    [Direction::Up, Direction::Up, Direction::Left],
    [Direction::Up, Direction::Up, Direction::Right],
    [Direction::Down, Direction::Down, Direction::Left],
    [Direction::Down, Direction::Down, Direction::Right],
    [Direction::Left, Direction::Left, Direction::Up],
    [Direction::Left, Direction::Left, Direction::Down],
    [Direction::Right, Direction::Right, Direction::Up],
    [Direction::Right, Direction::Right, Direction::Down],
];

/// Returns the candidate paths for `piece` standing on `from`.
///
/// - Pawn: one step forward, or a two-position path from its starting rank.
/// - Knight: up to eight single-position paths; off-board jumps are omitted.
/// - Rook / Bishop / Queen: full rays to the board edge.
/// - King: the first step of each of the eight rays.
pub fn possible_paths(piece: Piece, from: Position) -> Vec<Path> {
    match piece.material {
        Material::Pawn => pawn_pushes(piece, from),
        Material::Knight => KNIGHT_JUMPS
            .iter()
            .filter_map(|jump| from.jump(jump).ok())
            .map(|to| Path::new(vec![to]))
            .collect(),
        Material::Rook => rays(from, &Direction::ORTHOGONAL),
        Material::Bishop => rays(from, &Direction::DIAGONAL),
        Material::Queen => rays(from, &Direction::ALL),
        Material::King => Direction::ALL
            .iter()
            .map(|&d| from.path(d).truncated(1))
            .filter(|path| !path.is_empty())
            .collect(),
    }
}

/// Returns the capture paths for `piece` standing on `from`.
///
/// Pawns capture on the two forward diagonals; every other material
/// captures the way it moves.
pub fn capture_paths(piece: Piece, from: Position) -> Vec<Path> {
    match piece.material {
        Material::Pawn => {
            let diagonals = match piece.color {
                Color::White => [Direction::UpLeft, Direction::UpRight],
                Color::Black => [Direction::DownLeft, Direction::DownRight],
            };
            diagonals
                .iter()
                .filter_map(|&d| from.step(d))
                .map(|to| Path::new(vec![to]))
                .collect()
        }
        _ => possible_paths(piece, from),
    }
}

fn pawn_pushes(piece: Piece, from: Position) -> Vec<Path> {
    let forward = piece.color.forward();
    let steps = if from.rank() == piece.color.pawn_rank() {
        2
    } else {
        1
    };
    let path = from.path(forward).truncated(steps);
    if path.is_empty() {
        Vec::new()
    } else {
        vec![path]
    }
}

fn rays(from: Position, directions: &[Direction]) -> Vec<Path> {
    directions
        .iter()
        .map(|&d| from.path(d))
        .filter(|path| !path.is_empty())
        .collect()
}
