use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::cell::CellState;
use crate::evolve::Automaton;
use crate::parse::{self, ParseError};
use crate::point::Point;

/// One generation of a sparse automaton over an unbounded `D`-dimensional lattice.
///
/// Only active points are stored; [`get`](Universe::get) answers
/// [`Inactive`](CellState::Inactive) for everything else, stored or not. There are no
/// bounds. Generations evolve under B3/S23: an active cell survives with 2 or 3
/// active neighbors, an inactive cell activates with exactly 3.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Universe<const D: usize> {
    active: FxHashSet<Point<D>>,
}

impl<const D: usize> Universe<D> {
    /// Parse a starting plane: each `#` becomes an active point at `(x, y, 0, ..., 0)`.
    ///
    /// Rows are normalized as for [`Grid::parse`](crate::Grid::parse); only `#` and
    /// `.` are legal symbols. A universe with fewer than two axes cannot embed the
    /// plane and is rejected outright.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if D < 2 {
            return Err(ParseError::UnsupportedDimension(D));
        }

        let rows = parse::rows(text)?;
        let mut active = FxHashSet::default();
        for (row, line) in rows.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                match CellState::from_symbol(symbol) {
                    Some(CellState::Active) => {
                        active.insert(Point::on_plane(column as i32, row as i32));
                    }
                    Some(CellState::Inactive) => {}
                    None => return Err(ParseError::UnknownSymbol { symbol, row, column }),
                }
            }
        }

        Ok(Self { active })
    }

    /// The state of the cell at `point`.
    pub fn get(&self, point: Point<D>) -> CellState {
        match self.active.contains(&point) {
            true => CellState::Active,
            false => CellState::Inactive,
        }
    }

    /// Advance one generation, evaluating every candidate against this (pre-tick)
    /// snapshot.
    ///
    /// The candidate set is every stored point plus all of its neighbors,
    /// de-duplicated; anything further away has zero active neighbors and stays
    /// inactive without being enumerated. The successor stores only the points that
    /// came out active.
    pub fn tick(&self) -> Self {
        let mut candidates = self.active.clone();
        for point in &self.active {
            candidates.extend(point.neighbors());
        }

        let active = candidates
            .into_iter()
            .filter(|candidate| {
                let active_neighbors = candidate
                    .neighbors()
                    .into_iter()
                    .filter(|neighbor| self.active.contains(neighbor))
                    .count();

                match self.active.contains(candidate) {
                    true => (2..=3).contains(&active_neighbors),
                    false => active_neighbors == 3,
                }
            })
            .collect();

        Self { active }
    }

    /// Number of active cells in this snapshot.
    pub fn count_active(&self) -> usize {
        self.active.len()
    }

    /// Render the 2-D slice whose trailing coordinates equal `plane`, sized to the
    /// bounding box of the slice's active cells, one row per line.
    ///
    /// Returns `None` if `plane` does not supply exactly the `D - 2` trailing
    /// coordinates, or if the slice has no active cells to give it an extent.
    pub fn render_plane(&self, plane: &[i32]) -> Option<String> {
        if plane.len() + 2 != D {
            return None;
        }

        let in_plane = self
            .active
            .iter()
            .filter(|point| &point.0[2..] == plane)
            .collect_vec();
        let (min_x, max_x) = in_plane.iter().map(|point| point.0[0]).minmax().into_option()?;
        let (min_y, max_y) = in_plane.iter().map(|point| point.0[1]).minmax().into_option()?;

        let mut out = String::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let mut components = [0; D];
                components[0] = x;
                components[1] = y;
                components[2..].copy_from_slice(plane);
                out.push(self.get(Point(components)).symbol());
            }
            out.push('\n');
        }

        Some(out)
    }
}

impl<const D: usize> Automaton for Universe<D> {
    fn tick(&self) -> Self {
        Universe::tick(self)
    }
}
