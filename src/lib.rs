#![warn(missing_docs)]

//! # `lifelike`
//!
//! An engine for life-like cellular automata, with two concrete machines sharing one
//! transition discipline:
//!
//! - [`Grid`]: a finite, dense, rectangular seat grid in the style of a waiting room,
//!   with a pluggable [`Adjacency`] rule (immediately adjacent cells, or the first seat
//!   visible along each compass ray) and a configurable occupancy [`Rules::tolerance`].
//! - [`Universe`]: a sparse automaton over an unbounded integer lattice of any fixed
//!   dimensionality, storing only active cells against an implicitly inactive
//!   background and evolving under the B3/S23 rule.
//!
//! Both are driven the same way: parse a textual snapshot, then call `tick()` to obtain
//! the next generation, evaluated simultaneously against the pre-tick snapshot. The
//! [`fixed_point`] helper iterates either machine to convergence, detected by value
//! equality of consecutive generations.
//!
//! # Internals
//! A generation is an immutable snapshot; `tick()` never mutates in place, so no cell's
//! update can observe another cell's post-tick state. The dense grid stores every cell
//! (floor included) in a rectangular array and treats out-of-bounds probes as "no
//! neighbor". The sparse universe stores only active points in a hash set; each tick
//! re-evaluates the candidate set of every stored point and all of its `3^D - 1`
//! Chebyshev neighbors, which is sufficient because any point further away has zero
//! active neighbors and stays inactive.

pub use cell::{CellState, Seat};
pub use evolve::{fixed_point, Automaton};
pub use grid::{Adjacency, Grid, Rules};
pub use location::{Compass, Location};
pub use parse::ParseError;
pub use point::Point;
pub use universe::Universe;

pub(crate) mod cell;
pub(crate) mod evolve;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod parse;
pub(crate) mod point;
pub(crate) mod universe;
