use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::cell::{Cell, Risk};
use crate::grid::print_board;
use crate::location::Dimension;

/// An ordered walk over grid cells, from the start cell to the destination
/// cell.
///
/// Displaying a route overlays its cells' risk digits on an otherwise empty
/// board of the originating grid's dimensions.
pub struct Route {
    pub(crate) cells: Vec<Cell>,
    pub(crate) dims: (Dimension, Dimension),
}

impl Route {
    /// The cells on this route in traversal order, the start cell first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The total risk of this route: the sum of every cell's risk except the
    /// start cell's, which is never counted.
    pub fn risk(&self) -> Risk {
        self.cells.iter().skip(1).map(|cell| cell.risk).sum()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut board = Array2::from_elem((self.dims.1.get(), self.dims.0.get()), '.');
        for cell in &self.cells {
            board[cell.location.as_index()] = cell.digit();
        }

        f.write_str(&print_board(board))
    }
}
