use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;
use thiserror::Error;

use crate::cell::{Cell, Risk};
use crate::grid::Grid;
use crate::location::Location;
use crate::route::Route;

/// Reasons a [`GridSolver`] may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SolveError {
    /// The frontier emptied before the destination was finalized.
    ///
    /// A parsed grid is always fully connected, so this cannot arise from
    /// well-formed input; it is still surfaced as a distinct condition
    /// rather than treated as unreachable.
    #[error("no route reaches the destination at {destination}")]
    Unreachable {
        /// The destination that was never reached.
        destination: Location,
    },
}

/// A discovered cell and its best-known cumulative risk at push time.
///
/// Entries made stale by a later improvement are skipped on pop via the
/// visited set.
#[derive(Copy, Clone, Eq, PartialEq)]
struct FrontierEntry {
    risk: Risk,
    cell: Cell,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops its maximum, so compare reversed: lowest risk
        // first, ties by lowest location
        other
            .risk
            .cmp(&self.risk)
            .then_with(|| other.cell.location.cmp(&self.cell.location))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search over a [`Grid`].
///
/// Repeatedly finalizes the frontier cell with the lowest best-known
/// cumulative risk until the destination is finalized, then reconstructs the
/// route by walking the predecessor map back to the start. Each location
/// moves unseen -> frontier -> visited at most once, never backward.
///
/// Equal-risk frontier entries pop in ascending [`Location`] order, so the
/// reported route is identical on every run.
pub struct GridSolver<'a> {
    grid: &'a Grid,
    risks: HashMap<Location, Risk>,
    predecessors: HashMap<Location, Cell>,
    visited: HashSet<Location>,
    frontier: BinaryHeap<FrontierEntry>,
}

impl<'a> From<&'a Grid> for GridSolver<'a> {
    fn from(grid: &'a Grid) -> Self {
        let start = grid.start();

        let mut risks = HashMap::new();
        risks.insert(start.location, 0);
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry { risk: 0, cell: start });

        Self {
            grid,
            risks,
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            frontier,
        }
    }
}

impl GridSolver<'_> {
    /// Run the search, yielding the minimum-risk [`Route`] from the grid's
    /// start to its destination, or [`SolveError::Unreachable`] if the
    /// destination was never finalized.
    pub fn solve(mut self) -> Result<Route, SolveError> {
        let grid = self.grid;
        let destination = grid.destination();

        while let Some(FrontierEntry { risk, cell }) = self.frontier.pop() {
            if !self.visited.insert(cell.location) {
                // stale entry; this location was already finalized cheaper
                continue;
            }

            if cell.location == destination.location {
                debug!(
                    "destination finalized at risk {} after visiting {} of {} cells",
                    risk,
                    self.visited.len(),
                    grid.graph.node_count()
                );
                return Ok(self.reconstruct(cell));
            }

            for (_, neighbour, &step_risk) in grid.graph.edges(cell) {
                if self.visited.contains(&neighbour.location) {
                    continue;
                }

                let candidate = risk + step_risk;
                let best = self
                    .risks
                    .get(&neighbour.location)
                    .copied()
                    .unwrap_or(Risk::MAX);
                if candidate < best {
                    self.risks.insert(neighbour.location, candidate);
                    self.predecessors.insert(neighbour.location, cell);
                    self.frontier.push(FrontierEntry {
                        risk: candidate,
                        cell: neighbour,
                    });
                }
            }
        }

        Err(SolveError::Unreachable {
            destination: destination.location,
        })
    }

    fn reconstruct(&self, destination: Cell) -> Route {
        let mut cells = vec![destination];
        let mut current = destination;
        while let Some(&predecessor) = self.predecessors.get(&current.location) {
            cells.push(predecessor);
            current = predecessor;
        }
        cells.reverse();

        Route {
            cells,
            dims: self.grid.dims(),
        }
    }
}
