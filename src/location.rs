use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// Scalar coordinate of a grid position.
pub type Coord = usize;
/// A nonzero grid extent.
pub type Dimension = NonZero<Coord>;

/// A position on the grid, as `(x, y)`: column, then row.
///
/// The derived ordering is lexicographic on `(x, y)`. It carries no spatial
/// meaning and exists only as the solver's tie-break between equal-risk
/// frontier entries.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location by a signed `(dx, dy)`, wrapping on underflow.
    ///
    /// A wrapped result indexes far outside any real grid and fails the
    /// caller's bounds check, the same as stepping off the far edge.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(
            self.0.wrapping_add_signed(rhs.0),
            self.1.wrapping_add_signed(rhs.1),
        )
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
