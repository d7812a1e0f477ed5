use itertools::Itertools;

/// A point on an unbounded integer lattice of fixed dimensionality `D`, in
/// `(x, y, z, ...)` order.
///
/// Points are plain values: offset arithmetic produces new points, and equality and
/// hashing are componentwise, so a point can key a sparse cell map.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point<const D: usize>(pub [i32; D]);

impl<const D: usize> Point<D> {
    /// The size of the Chebyshev-distance-1 neighborhood, `3^D - 1`.
    pub const NEIGHBOR_COUNT: usize = 3_usize.pow(D as u32) - 1;

    /// The all-zero point.
    pub fn origin() -> Self {
        Self([0; D])
    }

    /// The point at `(x, y)` on the plane embedded at zero along every further axis.
    pub fn on_plane(x: i32, y: i32) -> Self {
        let mut components = [0; D];
        if D > 0 {
            components[0] = x;
        }
        if D > 1 {
            components[1] = y;
        }
        Self(components)
    }

    /// All points reachable by moving at most one step along each axis, excluding
    /// `self`: exactly [`Self::NEIGHBOR_COUNT`] results, no duplicates.
    ///
    /// Offsets are composed generically as the cartesian product of `{-1, 0, 1}` per
    /// axis, with the single all-zero composite removed.
    pub fn neighbors(&self) -> Vec<Self> {
        (0..D)
            .map(|_| -1..=1)
            .multi_cartesian_product()
            .filter(|offset| offset.iter().any(|&delta| delta != 0))
            .map(|offset| {
                let mut moved = self.0;
                for (component, delta) in moved.iter_mut().zip(offset) {
                    *component += delta;
                }
                Self(moved)
            })
            .collect_vec()
    }
}
