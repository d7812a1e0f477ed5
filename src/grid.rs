use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::Seat;
use crate::evolve::Automaton;
use crate::location::{Compass, Location};
use crate::parse::{self, ParseError};

/// How a grid decides which cells count as a cell's neighbors.
///
/// This is an injected strategy value, chosen once at construction via [`Rules`]; a
/// grid and every generation it produces share the same adjacency.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Adjacency {
    /// The up to eight cells one step away, skipping anything past the grid edge.
    Immediate,
    /// The first non-floor cell visible along each compass ray, walking outward one
    /// step at a time. A ray that reaches the grid edge without meeting a seat
    /// contributes no neighbor.
    LineOfSight,
}

impl Adjacency {
    /// Seek the neighbor of `origin` in `direction`, or `None` if there is none.
    fn seek(&self, grid: &Grid, origin: Location, direction: Compass) -> Option<Seat> {
        match self {
            Self::Immediate => grid.get(direction.attempt_from(origin)),
            Self::LineOfSight => {
                let mut next = direction.attempt_from(origin);
                while let Some(seat) = grid.get(next) {
                    if seat != Seat::Floor {
                        return Some(seat);
                    }
                    next = direction.attempt_from(next);
                }
                None
            }
        }
    }
}

/// The transition rule configuration of a [`Grid`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rules {
    /// The neighbor-finding strategy.
    pub adjacency: Adjacency,
    /// Occupied-neighbor count at or above which an occupied seat empties.
    pub tolerance: usize,
}

impl Default for Rules {
    /// Immediate adjacency with tolerance 4.
    fn default() -> Self {
        Self {
            adjacency: Adjacency::Immediate,
            tolerance: 4,
        }
    }
}

impl Rules {
    /// The canonical line-of-sight configuration: visible-seat adjacency with
    /// tolerance 5.
    pub fn line_of_sight() -> Self {
        Self {
            adjacency: Adjacency::LineOfSight,
            tolerance: 5,
        }
    }
}

/// A finite rectangular seat grid: one generation of the seat automaton.
///
/// Grids are snapshots; [`tick`](Grid::tick) returns a new, independent grid evaluated
/// entirely against this one. Equality and hashing cover dimensions and cell contents
/// only, which is what convergence detection compares.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Seat>,
    rules: Rules,
}

impl Grid {
    /// Parse a grid from its textual form under the default [`Rules`].
    ///
    /// Lines are trimmed and blank lines dropped; every remaining row must be as wide
    /// as the first, and every symbol must be `.`, `L`, or `#`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, Rules::default())
    }

    /// Parse a grid from its textual form under the given [`Rules`].
    pub fn parse_with(text: &str, rules: Rules) -> Result<Self, ParseError> {
        let rows = parse::rows(text)?;
        let height = rows.len();
        let width = rows[0].chars().count();

        let mut flat = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                match Seat::from_symbol(symbol) {
                    Some(seat) => flat.push(seat),
                    None => return Err(ParseError::UnknownSymbol { symbol, row, column }),
                }
            }
        }

        let cells = Array2::from_shape_vec((height, width), flat)
            .expect("row geometry was validated against the first row");
        Ok(Self { cells, rules })
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// The rules this grid and all of its successors tick under.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The cell at `location`, or `None` if it lies outside the grid.
    ///
    /// Out-of-bounds probes are routine (every edge cell's neighborhood reaches past
    /// the edge) and must never panic.
    pub fn get(&self, location: Location) -> Option<Seat> {
        self.cells.get(location.as_index()).copied()
    }

    /// The neighbors of `location` under this grid's [`Adjacency`], in compass seek
    /// order (west, then clockwise from north-west), with absent neighbors omitted.
    pub fn neighbors(&self, location: Location) -> Vec<Seat> {
        Compass::VARIANTS
            .iter()
            .filter_map(|direction| self.rules.adjacency.seek(self, location, *direction))
            .collect_vec()
    }

    /// Advance one generation, evaluating every cell against this (pre-tick) snapshot.
    ///
    /// An empty seat occupies iff it has zero occupied neighbors; an occupied seat
    /// empties iff its occupied-neighbor count reaches the tolerance; floor never
    /// changes.
    pub fn tick(&self) -> Self {
        let cells = Array2::from_shape_fn(self.cells.raw_dim(), |index| {
            let location = Location::from(index);
            let occupied = self
                .neighbors(location)
                .into_iter()
                .filter(|seat| *seat == Seat::Occupied)
                .count();

            match self.cells[index] {
                Seat::Empty if occupied == 0 => Seat::Occupied,
                Seat::Occupied if occupied >= self.rules.tolerance => Seat::Empty,
                unchanged => unchanged,
            }
        });

        Self { cells, rules: self.rules }
    }

    /// Total occupied seats in this snapshot.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|seat| **seat == Seat::Occupied).count()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.dim().hash(state);
        for seat in self.cells.iter() {
            seat.hash(state);
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));

        for row in self.cells.rows() {
            for seat in row {
                out.push(seat.symbol());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}

impl Automaton for Grid {
    fn tick(&self) -> Self {
        Grid::tick(self)
    }
}
