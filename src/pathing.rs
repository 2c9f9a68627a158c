use log::debug;

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::grid::Grid;
use crate::observers::MazeObserver;

/// A route found through a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<GridCoordinate>,
    visited_count: usize,
}

impl Solution {
    /// Cells from the start to the target inclusive.
    pub fn path(&self) -> &[GridCoordinate] {
        &self.path
    }

    /// Number of moves along the path, one less than the number of cells on it.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// How many cells the search looked at, dead ends included.
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }
}

// One level of the depth first search: a cell, the open unvisited neighbours it had when it was
// entered and how many of those have been tried so far.
struct SearchFrame {
    coord: GridCoordinate,
    candidates: CoordinateSmallVec,
    next_candidate: usize,
}

impl SearchFrame {
    fn new(grid: &Grid, coord: GridCoordinate) -> SearchFrame {
        SearchFrame {
            coord,
            candidates: grid.neighbours_of(coord, true),
            next_candidate: 0,
        }
    }
}

/// Find the route from the maze entrance to the maze exit.
pub fn solve<O: MazeObserver>(grid: &mut Grid, observer: &mut O) -> Option<Solution> {
    let (start, target) = (grid.entrance(), grid.exit());
    solve_from(grid, start, target, observer)
}

/// Depth first search with backtracking from `start` to `target`, only moving through broken
/// walls.
///
/// Neighbours are tried in the order left, right, top, bottom. Every step towards a neighbour is
/// reported to the observer, and when that neighbour turns out to lead nowhere the step back is
/// reported as an undo move. The search stops at the first route found; on a perfect maze that
/// is the only route. No cell is entered twice, so the search always ends, and on a grid with
/// no route at all the result is None.
///
/// Traversal flags are cleared again before returning, leaving the grid ready for another pass.
pub fn solve_from<O: MazeObserver>(grid: &mut Grid,
                                   start: GridCoordinate,
                                   target: GridCoordinate,
                                   observer: &mut O)
                                   -> Option<Solution> {

    if !grid.is_valid_coordinate(start) || !grid.is_valid_coordinate(target) {
        return None;
    }

    let mut visited_count = 1;
    grid.mark_visited(start);
    observer.step();

    let solution = if start == target {
        Some(Solution {
            path: vec![start],
            visited_count,
        })
    } else {
        let mut stack = vec![SearchFrame::new(grid, start)];
        let mut found = None;

        while let Some(frame) = stack.last_mut() {

            if frame.next_candidate < frame.candidates.len() {
                let from = frame.coord;
                let to = frame.candidates[frame.next_candidate];
                frame.next_candidate += 1;

                // reached already by another route: only possible on a grid with loops
                if grid.is_visited(to) {
                    continue;
                }

                notify_move(grid, observer, from, to, false);
                grid.mark_visited(to);
                visited_count += 1;
                observer.step();

                if to == target {
                    let mut path = stack.iter().map(|frame| frame.coord).collect::<Vec<_>>();
                    path.push(to);
                    found = Some(Solution { path, visited_count });
                    break;
                }

                stack.push(SearchFrame::new(grid, to));

            } else {
                // every way on from this cell is a dead end
                let dead_end = frame.coord;
                let _ = stack.pop();
                if let Some(parent) = stack.last() {
                    notify_move(grid, observer, parent.coord, dead_end, true);
                }
            }
        }

        found
    };

    grid.reset_visited();
    match solution {
        Some(ref s) => debug!("solved in {} steps after visiting {} cells", s.steps(), s.visited_count()),
        None => debug!("no route from {:?} to {:?} after visiting {} cells", start, target, visited_count),
    }
    solution
}

fn notify_move<O: MazeObserver>(grid: &Grid, observer: &mut O, from: GridCoordinate, to: GridCoordinate, is_undo: bool) {
    if let (Some(from_bounds), Some(to_bounds)) = (grid.cell_bounds(from), grid.cell_bounds(to)) {
        observer.moved(from, from_bounds, to, to_bounds, is_undo);
    }
}
