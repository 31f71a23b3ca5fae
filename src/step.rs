use strum::VariantArray;

use crate::location::Location;

/// A cardinal step between neighbouring grid cells.
///
/// Adjacency on the grid is strictly 4-connected; routes never move
/// diagonally.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Towards smaller row indices.
    Up,
    /// Towards larger row indices.
    Down,
    /// Towards smaller column indices.
    Left,
    /// Towards larger column indices.
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Determine the direction from `a` to `b` by attempting every variant,
    /// or `None` if the two locations are not 4-connected neighbours.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
