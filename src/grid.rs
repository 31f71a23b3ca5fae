use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;

use crate::cell::{Cell, Risk};
use crate::location::{Dimension, Location};
use crate::route::Route;
use crate::solver::{GridSolver, SolveError};

/// An immutable rectangular grid of risk cells.
///
/// [`Grid`]s are produced by a [`GridBuilder`](crate::GridBuilder),
/// most conveniently through [`str::parse`]. The grid is stored as a directed
/// graph whose edge `a -> b` carries the risk of entering `b`; only in-bounds
/// neighbour pairs ever become edges.
pub struct Grid {
    pub(crate) graph: DiGraphMap<Cell, Risk>,
    pub(crate) dims: (Dimension, Dimension),
}

impl Grid {
    /// The grid dimensions, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The route origin, at the top-left corner.
    pub fn start(&self) -> Cell {
        self.cell(Location(0, 0)).unwrap()
    }

    /// The route target, at the bottom-right corner.
    pub fn destination(&self) -> Cell {
        self.cell(Location(self.dims.0.get() - 1, self.dims.1.get() - 1))
            .unwrap()
    }

    /// Whether `location` lies inside the grid boundary.
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    /// The cell at `location`, or `None` if it is out of bounds.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        if !self.contains(location) {
            return None;
        }

        self.graph.nodes().find(|cell| cell.location == location)
    }

    /// Finds the minimum-risk route from [`start`](Self::start) to
    /// [`destination`](Self::destination), deferring to a [`GridSolver`].
    ///
    /// Returns according to the result of [`GridSolver::solve`].
    pub fn solve(&self) -> Result<Route, SolveError> {
        GridSolver::from(self).solve()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut board = Array2::from_elem((self.dims.1.get(), self.dims.0.get()), ' ');
        for cell in self.graph.nodes() {
            board[cell.location.as_index()] = cell.digit();
        }

        f.write_str(&print_board(board))
    }
}

/// Dump a character board row by row, one line per row.
pub(crate) fn print_board(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}
