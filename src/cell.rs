/// One cell of a dense seat grid.
///
/// Floor is permanent: it never changes state and is never counted as occupied.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Seat {
    /// `.` — not a seat; skipped by line-of-sight rays.
    #[default]
    Floor,
    /// `L` — a seat nobody is sitting in.
    Empty,
    /// `#` — a seat somebody is sitting in.
    Occupied,
}

impl Seat {
    /// The cell for a grid symbol, or `None` if the symbol is not part of the seat
    /// alphabet.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Floor),
            'L' => Some(Self::Empty),
            '#' => Some(Self::Occupied),
            _ => None,
        }
    }

    /// The grid symbol for this cell.
    pub fn symbol(&self) -> char {
        match self {
            Self::Floor => '.',
            Self::Empty => 'L',
            Self::Occupied => '#',
        }
    }
}

/// One cell of a sparse universe.
///
/// Any point a [`Universe`](crate::Universe) does not store is implicitly
/// [`Inactive`](CellState::Inactive).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CellState {
    /// `#`
    Active,
    /// `.`
    #[default]
    Inactive,
}

impl CellState {
    /// The cell state for a universe symbol, or `None` if the symbol is not `#` or `.`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Active),
            '.' => Some(Self::Inactive),
            _ => None,
        }
    }

    /// The universe symbol for this cell state.
    pub fn symbol(&self) -> char {
        match self {
            Self::Active => '#',
            Self::Inactive => '.',
        }
    }
}
