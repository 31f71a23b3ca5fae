#![warn(missing_docs)]

//! # `thalweg`
//!
//! A minimum-risk route finder for rectangular grids of single-digit risk
//! levels, named for the line a river cuts along the lowest points of its
//! valley. Parse a [`Grid`] from digit-line text (one row per line, one risk
//! digit per cell), then call [`solve()`](Grid::solve) to obtain the cheapest
//! [`Route`] from the top-left cell to the bottom-right cell, where the cost
//! of a route is the sum of the risks of every cell it enters.
//!
//! # Internals
//! The grid is expressed as a directed graph. Each cell is a vertex, and each
//! pair of 4-connected neighbouring cells contributes two opposing edges,
//! weighted by the risk of the cell the edge enters. A uniform-cost search
//! finalizes cells in ascending cumulative-risk order (admissible since every
//! risk is at least 1) and records each improvement in a predecessor map,
//! which is walked once at the end to reconstruct the route.

pub use builder::{GridBuilder, ParseError};
pub use cell::{Cell, Risk};
pub use grid::Grid;
pub use location::{Coord, Dimension, Location};
pub use route::Route;
pub use solver::{GridSolver, SolveError};
pub use step::Step;

pub(crate) mod builder;
pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod route;
pub(crate) mod solver;
pub(crate) mod step;
mod tests;
