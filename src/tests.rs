#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZero;

    use petgraph::graphmap::DiGraphMap;

    use crate::builder::ParseError;
    use crate::cell::{Cell, Risk};
    use crate::grid::Grid;
    use crate::location::Location;
    use crate::route::Route;
    use crate::solver::SolveError;
    use crate::step::Step;

    // the published 10x10 example grid; its minimum total risk is 40
    const EXAMPLE: &str = "1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    fn solve(text: &str) -> Route {
        text.parse::<Grid>().unwrap().solve().unwrap()
    }

    /// Exhaustive minimum over every simple path from the top-left to the
    /// bottom-right cell, pruned once a branch meets the best known total.
    fn brute_force_minimum(text: &str) -> Risk {
        fn explore(
            rows: &[Vec<Risk>],
            visited: &mut Vec<Vec<bool>>,
            r: usize,
            c: usize,
            total: Risk,
            best: &mut Risk,
        ) {
            if total >= *best {
                return;
            }
            if r == rows.len() - 1 && c == rows[0].len() - 1 {
                *best = total;
                return;
            }

            visited[r][c] = true;
            for (dr, dc) in [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)] {
                let (nr, nc) = (r.wrapping_add_signed(dr), c.wrapping_add_signed(dc));
                if nr < rows.len() && nc < rows[0].len() && !visited[nr][nc] {
                    explore(rows, visited, nr, nc, total + rows[nr][nc], best);
                }
            }
            visited[r][c] = false;
        }

        let rows: Vec<Vec<Risk>> = text
            .lines()
            .map(|line| line.chars().map(|ch| ch.to_digit(10).unwrap()).collect())
            .collect();
        let mut visited = vec![vec![false; rows[0].len()]; rows.len()];
        let mut best = Risk::MAX;
        explore(&rows, &mut visited, 0, 0, 0, &mut best);
        best
    }

    #[test]
    fn display_round_trips_input() {
        let grid: Grid = "116\n138\n213".parse().unwrap();

        assert_eq!(format!("{}", grid), "116
138
213
");
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            "116\n13\n213".parse::<Grid>().err(),
            Some(ParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn rejects_non_digit_cells() {
        assert_eq!(
            "116\n1a8\n213".parse::<Grid>().err(),
            Some(ParseError::InvalidRisk {
                row: 1,
                column: 1,
                found: 'a',
            })
        );
    }

    #[test]
    fn rejects_zero_risk_cells() {
        assert_eq!(
            "106".parse::<Grid>().err(),
            Some(ParseError::InvalidRisk {
                row: 0,
                column: 1,
                found: '0',
            })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Grid>().err(), Some(ParseError::Empty));
        assert_eq!("\n".parse::<Grid>().err(), Some(ParseError::Empty));
    }

    #[test]
    fn single_cell_grid() {
        let route = solve("5");

        assert_eq!(route.risk(), 0);
        assert_eq!(
            route.cells(),
            [Cell {
                location: Location(0, 0),
                risk: 5,
            }]
        );
        assert_eq!(format!("{}", route), "5\n");
    }

    #[test]
    fn uniform_grid_risk_is_path_length() {
        // every minimal-length 4-connected path costs (height - 1) + (width - 1)
        let route = solve("111111\n111111\n111111\n111111");

        assert_eq!(route.risk(), 8);
        assert_eq!(route.cells().len(), 9);
    }

    #[test]
    fn three_by_three_minimum_risk() {
        assert_eq!(solve("116\n138\n213").risk(), 7);
    }

    #[test]
    fn example_grid_minimum_risk() {
        assert_eq!(solve(EXAMPLE).risk(), 40);
    }

    #[test]
    fn corridor_grid_route() {
        // the single cheap corridor forces a unique optimal route
        let text = "19999\n19111\n19991\n19991\n19999";
        let route = solve(text);

        assert_eq!(route.risk(), 24);
        assert_eq!(route.risk(), brute_force_minimum(text));
        assert_eq!(format!("{}", route), "1....
19111
....1
....1
....9
");
    }

    #[test]
    fn route_is_connected_and_simple() {
        let route = solve(EXAMPLE);
        let cells = route.cells();

        assert_eq!(cells.first().unwrap().location, Location(0, 0));
        assert_eq!(cells.last().unwrap().location, Location(9, 9));

        for pair in cells.windows(2) {
            assert!(Step::direction_to(pair[0].location, pair[1].location).is_some());
        }

        let distinct: HashSet<_> = cells.iter().map(|cell| cell.location).collect();
        assert_eq!(distinct.len(), cells.len());

        assert_eq!(
            route.risk(),
            cells.iter().skip(1).map(|cell| cell.risk).sum::<Risk>()
        );
    }

    #[test]
    fn matches_brute_force_on_small_grids() {
        for text in [
            "116\n138\n213",
            "19999\n19111\n19991\n19991\n19999",
            "2191\n1191\n1219\n9111",
            "19111\n19191\n11191",
            "12345\n99991\n54321\n19999\n11111",
        ] {
            assert_eq!(solve(text).risk(), brute_force_minimum(text), "grid {text:?}");
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let grid: Grid = EXAMPLE.parse().unwrap();
        let first = grid.solve().unwrap();
        let second = grid.solve().unwrap();

        assert_eq!(first.risk(), second.risk());
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn unreachable_without_connecting_edges() {
        // a grid this degenerate cannot come out of the parser; build one by
        // hand to exercise the defensive contract
        let mut graph = DiGraphMap::new();
        graph.add_node(Cell {
            location: Location(0, 0),
            risk: 1,
        });
        graph.add_node(Cell {
            location: Location(1, 0),
            risk: 1,
        });
        let grid = Grid {
            graph,
            dims: (NonZero::new(2).unwrap(), NonZero::new(1).unwrap()),
        };

        assert_eq!(
            grid.solve().err(),
            Some(SolveError::Unreachable {
                destination: Location(1, 0),
            })
        );
    }
}
