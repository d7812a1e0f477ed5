use ndarray::Ix;
use strum::VariantArray;

/// One component of a dense-grid [`Location`].
pub type Coord = usize;

/// A cell position on a dense 2-D grid, in `(x, y)` order.
///
/// Offsets are applied with wrapping arithmetic: stepping off the low edge produces a
/// huge index which any bounded array lookup then rejects, so "one past the edge"
/// probes need no special casing.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// This location as a row-major `(y, x)` array index.
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Move this location by `(dx, dy)`, wrapping on underflow.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

/// The eight compass directions of a 2-D Chebyshev neighborhood.
///
/// Variant order is the seek order used by [`Grid::neighbors`](crate::Grid::neighbors):
/// west first, then clockwise from north-west.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Compass {
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
}

impl Compass {
    /// The unit offset for one step in this direction, `(dx, dy)` with y growing
    /// downward.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
        }
    }

    /// Take one step from `location` in the direction specified by `self` and return
    /// the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.offset())
    }
}
