//! Board geometry: single-step displacement and directional rays.

use crate::{File, Position, Rank};
use std::ops::Deref;
use thiserror::Error;

/// Errors from geometric construction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A step would leave the 8x8 board.
    #[error("position would leave the board")]
    InvalidPosition,
}

/// The eight compass directions, seen from White's side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions, orthogonals first.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the `(file, rank)` displacement of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}

/// An ordered ray of positions, nearest first, excluding its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn new(positions: Vec<Position>) -> Self {
        Path(positions)
    }

    /// Returns the path cut after its first `len` positions.
    pub fn truncated(mut self, len: usize) -> Self {
        self.0.truncate(len);
        self
    }
}

impl Deref for Path {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.0
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Path(positions)
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Position {
    /// Moves one step in `direction`, or `None` at the board edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (df, dr) = direction.delta();
        let file = File::from_index(self.file().index().checked_add_signed(df)?)?;
        let rank = Rank::from_index(self.rank().index().checked_add_signed(dr)?)?;
        Some(Position::new(file, rank))
    }

    /// Applies single steps in sequence.
    ///
    /// Fails the moment a step would leave the board; the remaining steps
    /// are not attempted.
    pub fn jump(self, directions: &[Direction]) -> Result<Position, GeometryError> {
        directions.iter().try_fold(self, |position, &direction| {
            position
                .step(direction)
                .ok_or(GeometryError::InvalidPosition)
        })
    }

    /// Returns the ray from this position (exclusive) to the board edge.
    pub fn path(self, direction: Direction) -> Path {
        std::iter::successors(self.step(direction), |p| p.step(direction)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn jump_single_steps() {
        assert_eq!(pos("e4").jump(&[Direction::Up]), Ok(pos("e5")));
        assert_eq!(pos("e4").jump(&[Direction::DownLeft]), Ok(pos("d3")));
        assert_eq!(pos("e4").jump(&[]), Ok(pos("e4")));
    }

    #[test]
    fn jump_compound() {
        let knight = [Direction::Up, Direction::Up, Direction::Right];
        assert_eq!(Position::A1.jump(&knight), Ok(pos("b3")));
    }

    #[test]
    fn jump_off_board_fails() {
        assert_eq!(
            Position::A1.jump(&[Direction::Left]),
            Err(GeometryError::InvalidPosition)
        );
        assert_eq!(
            Position::H8.jump(&[Direction::Down, Direction::Right]),
            Err(GeometryError::InvalidPosition)
        );
        assert_eq!(
            pos("a2").jump(&[Direction::Down, Direction::Down, Direction::Up]),
            Err(GeometryError::InvalidPosition)
        );
    }

    #[test]
    fn path_is_ordered_nearest_first() {
        let path = pos("c3").path(Direction::Up);
        let expected: Vec<Position> = ["c4", "c5", "c6", "c7", "c8"].map(pos).to_vec();
        assert_eq!(path.to_vec(), expected);

        let diagonal = pos("c3").path(Direction::DownLeft);
        assert_eq!(diagonal.to_vec(), vec![pos("b2"), pos("a1")]);
    }

    #[test]
    fn path_from_edge_is_empty() {
        assert!(Position::A1.path(Direction::Left).is_empty());
        assert!(Position::A1.path(Direction::Down).is_empty());
        assert!(Position::H8.path(Direction::UpRight).is_empty());
        assert!(Position::H1.path(Direction::DownLeft).is_empty());
    }

    #[test]
    fn path_full_length() {
        assert_eq!(Position::A1.path(Direction::UpRight).len(), 7);
        assert_eq!(Position::A1.path(Direction::Right).len(), 7);
        assert_eq!(pos("d4").path(Direction::UpLeft).len(), 3);
    }

    #[test]
    fn truncated_path() {
        let path = Position::A1.path(Direction::Up).truncated(2);
        assert_eq!(path.to_vec(), vec![pos("a2"), pos("a3")]);
    }

    proptest! {
        #[test]
        fn path_moves_away_and_ends_at_edge(index in 0u8..64, d in 0usize..8) {
            let origin = Position::from_index(index).unwrap();
            let direction = Direction::ALL[d];
            let path = origin.path(direction);

            prop_assert!(!path.contains(&origin));

            let mut previous = origin;
            for &p in &path {
                prop_assert_eq!(previous.step(direction), Some(p));
                previous = p;
            }
            prop_assert_eq!(previous.step(direction), None);
        }
    }
}
