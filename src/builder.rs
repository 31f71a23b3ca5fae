use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;
use strum::VariantArray;
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::step::Step;

/// Reasons grid text may fail to parse.
///
/// Any of these aborts the load; no partial [`Grid`] is ever produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The input contains no rows, or rows with no cells.
    #[error("input contains no cells")]
    Empty,
    /// A row's width differs from the first row's. Ragged input is rejected,
    /// never truncated.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A cell character is outside `'1'..='9'`.
    #[error("invalid risk {found:?} at row {row}, column {column}, expected a digit between 1 and 9")]
    InvalidRisk {
        /// Zero-based index of the offending row.
        row: usize,
        /// Zero-based index of the offending column.
        column: usize,
        /// The offending character.
        found: char,
    },
}

/// Parses digit-line text into the cell array backing a [`Grid`].
///
/// One line per row, one risk digit per cell, every line the same length.
/// [`parse`](Self::parse) performs all validation; [`build`](Self::build)
/// derives the grid graph and cannot fail.
#[derive(Clone)]
pub struct GridBuilder {
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
}

impl GridBuilder {
    /// Read one cell per character, one row per line.
    ///
    /// A trailing carriage return per line is tolerated, so CRLF input parses
    /// the same as LF input.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect_vec();

        let height = Dimension::new(lines.len()).ok_or(ParseError::Empty)?;
        let expected = lines[0].chars().count();
        let width = Dimension::new(expected).ok_or(ParseError::Empty)?;

        let mut cells = Vec::with_capacity(width.get() * height.get());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(ParseError::RaggedRow { row, expected, found });
            }

            for (column, ch) in line.chars().enumerate() {
                let risk = match ch.to_digit(10) {
                    Some(risk @ 1..=9) => risk,
                    _ => return Err(ParseError::InvalidRisk { row, column, found: ch }),
                };

                cells.push(Cell {
                    location: Location(column, row),
                    risk,
                });
            }
        }

        // row-major; infallible since the loop pushed exactly height * width cells
        let cells = Array2::from_shape_vec((height.get(), width.get()), cells).unwrap();

        debug!("parsed {width}x{height} grid");
        Ok(Self {
            dims: (width, height),
            cells,
        })
    }

    /// Convert the state of this builder into a [`Grid`].
    ///
    /// Every pair of 4-connected neighbouring cells becomes two directed
    /// edges, each weighted by the risk of the cell it enters. Steps off the
    /// grid fail the array lookup and contribute nothing.
    pub fn build(self) -> Grid {
        let (width, height) = self.dims;
        let mut graph = DiGraphMap::with_capacity(
            self.cells.len(),
            // two directed edges per adjacent pair
            2 * ((width.get() - 1) * height.get() + (height.get() - 1) * width.get()),
        );

        // a 1x1 grid has no edges at all, so nodes are added up front
        for cell in self.cells.iter() {
            graph.add_node(*cell);
        }

        for (index, cell) in self.cells.indexed_iter() {
            let location = Location::from(index);

            for step in Step::VARIANTS {
                if let Some(neighbour) = self.cells.get(step.attempt_from(location).as_index()) {
                    graph.add_edge(*cell, *neighbour, neighbour.risk);
                }
            }
        }

        Grid {
            graph,
            dims: self.dims,
        }
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridBuilder::parse(s).map(GridBuilder::build)
    }
}
