use log::debug;
use rand::{self, Rng, SeedableRng, XorShiftRng};

use crate::cells::{GridCoordinate, WallSide};
use crate::errors::*;
use crate::grid::Grid;
use crate::observers::MazeObserver;

/// The random number generator mazes are carved with.
pub type MazeRng = XorShiftRng;

/// A fast, non cryptographic random number generator seeded from a single integer.
/// The same seed always yields the same stream, and so the same maze for a given grid size.
pub fn seeded_rng(seed: u64) -> MazeRng {
    let (low, high) = (seed as u32, (seed >> 32) as u32);
    // xorshift must not start from an all zero state
    XorShiftRng::from_seed([low, high, low ^ 0x9E37_79B9, high ^ 0x7F4A_7C15])
}

/// A seeded generator when a seed is given, otherwise one seeded from the operating system.
pub fn maze_rng(seed: Option<u64>) -> MazeRng {
    match seed {
        Some(s) => seeded_rng(s),
        None => rand::weak_rng(),
    }
}

/// Carve a perfect maze into a freshly built grid with the recursive backtracker algorithm.
///
/// Opens the entrance (top of the first cell) and the exit (bottom of the last cell), then
/// performs a randomised depth first walk from the entrance cell. At each cell a random
/// unvisited neighbour is picked, the wall to it knocked down and the walk continues from
/// there. A cell with no unvisited neighbours left is a dead end and the walk backs up to the
/// previous cell, which looks again for any neighbour that is still unvisited. Every cell is
/// reached exactly once, so the passages form a spanning tree of the grid: a single route
/// between any two cells.
///
/// The walk keeps its own stack of cells rather than recursing, so grid size is not limited by
/// the native call stack. Traversal flags are cleared once the maze is carved.
pub fn recursive_backtracker<R, O>(grid: &mut Grid, rng: &mut R, observer: &mut O) -> Result<()>
    where R: Rng,
          O: MazeObserver
{
    grid.open_entrance_and_exit();
    let (entrance, exit) = (grid.entrance(), grid.exit());
    notify_wall_broken(grid, observer, entrance, WallSide::Top);
    notify_wall_broken(grid, observer, exit, WallSide::Bottom);

    grid.mark_visited(entrance);
    observer.step();
    let mut stack = Vec::with_capacity(grid.size());
    stack.push(entrance);

    while let Some(&current) = stack.last() {

        let candidates = grid.neighbours_of(current, false);
        let next = match rng.choose(&candidates[..]) {
            Some(&coord) => coord,
            None => {
                // dead end, back up
                let _ = stack.pop();
                continue;
            }
        };

        grid.break_wall_between(current, next)?;
        if let Some(side) = current.side_facing(next) {
            notify_wall_broken(grid, observer, current, side);
            notify_wall_broken(grid, observer, next, side.opposite());
        }

        grid.mark_visited(next);
        observer.step();
        stack.push(next);
    }

    grid.reset_visited();
    debug!("carved {} passages into a {} x {} grid",
           grid.passages_count(),
           grid.rows().0,
           grid.columns().0);
    Ok(())
}

fn notify_wall_broken<O: MazeObserver>(grid: &Grid, observer: &mut O, coord: GridCoordinate, side: WallSide) {
    if let Some(bounds) = grid.cell_bounds(coord) {
        observer.wall_state(coord, bounds, side, false);
    }
}

#[cfg(test)]
mod tests {

    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::observers::{MazeEvent, NoopObserver, RecordingObserver};
    use crate::units::{ColumnsCount, RowsCount};

    fn small_grid(rows: usize, columns: usize) -> Grid {
        Grid::with_dimensions(RowsCount(rows), ColumnsCount(columns))
            .expect("grid dimensions should be valid")
    }

    fn carved_grid(rows: usize, columns: usize, seed: u64) -> Grid {
        let mut g = small_grid(rows, columns);
        recursive_backtracker(&mut g, &mut seeded_rng(seed), &mut NoopObserver)
            .expect("generation should not fail");
        g
    }

    fn walls_layout(g: &Grid) -> Vec<[bool; 4]> {
        g.iter()
            .map(|coord| {
                let cell = g.cell(coord).unwrap();
                [cell.has_wall(WallSide::Left),
                 cell.has_wall(WallSide::Right),
                 cell.has_wall(WallSide::Top),
                 cell.has_wall(WallSide::Bottom)]
            })
            .collect()
    }

    // The plain recursive walk that the explicit stack unrolls: a cell keeps drawing from its
    // remaining unvisited neighbours until none are left.
    fn recursive_carve<R: Rng>(g: &mut Grid, rng: &mut R, coord: GridCoordinate) {
        g.mark_visited(coord);
        loop {
            let candidates = g.neighbours_of(coord, false);
            let next = match rng.choose(&candidates[..]) {
                Some(&next) => next,
                None => return,
            };
            g.break_wall_between(coord, next).expect("adjacent cells");
            recursive_carve(g, rng, next);
        }
    }

    fn is_perfect_maze(g: &Grid) -> bool {
        let graph = g.passage_graph();
        g.passages_count() == g.size() - 1 &&
        connected_components(&graph) == 1 &&
        !is_cyclic_undirected(&graph)
    }

    fn walls_consistent(g: &Grid) -> bool {
        g.iter().all(|coord| {
            WallSide::ALL.iter().all(|side| {
                g.neighbour_at_direction(coord, *side).map_or(true, |neighbour_coord| {
                    g.cell(coord).unwrap().has_wall(*side) ==
                    g.cell(neighbour_coord).unwrap().has_wall(side.opposite())
                })
            })
        })
    }

    #[test]
    fn single_cell_maze() {
        let g = carved_grid(1, 1, 7);
        assert_eq!(g.passages_count(), 0);
        assert!(g.is_entrance_open());
        assert!(g.is_exit_open());
        assert_eq!(g.cell(GridCoordinate::new(0, 0)).unwrap().walls_count(), 2);
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn two_by_two_maze_has_three_passages() {
        let g = carved_grid(2, 2, 42);
        assert_eq!(g.passages_count(), 3);
        assert!(is_perfect_maze(&g));
        assert_eq!(walls_layout(&g), walls_layout(&carved_grid(2, 2, 42)));
    }

    #[test]
    fn mazes_are_spanning_trees() {
        let sizes = [(1, 2), (2, 1), (1, 10), (10, 1), (3, 3), (5, 8), (16, 9), (20, 20)];
        for (seed, &(rows, columns)) in sizes.iter().enumerate() {
            let g = carved_grid(rows, columns, seed as u64);
            assert!(is_perfect_maze(&g), "{} x {} maze is not perfect", rows, columns);
            assert!(walls_consistent(&g));
            assert!(g.is_entrance_open());
            assert!(g.is_exit_open());
        }
    }

    #[test]
    fn traversal_flags_are_cleared_after_carving() {
        let g = carved_grid(6, 7, 3);
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        for seed in 0..5 {
            assert_eq!(walls_layout(&carved_grid(12, 9, seed)),
                       walls_layout(&carved_grid(12, 9, seed)));
        }
    }

    #[test]
    fn different_seeds_different_mazes() {
        assert_ne!(walls_layout(&carved_grid(15, 15, 1)),
                   walls_layout(&carved_grid(15, 15, 2)));
    }

    #[test]
    fn unseeded_generation_still_makes_perfect_mazes() {
        let mut g = small_grid(9, 11);
        recursive_backtracker(&mut g, &mut maze_rng(None), &mut NoopObserver)
            .expect("generation should not fail");
        assert!(is_perfect_maze(&g));
    }

    #[test]
    fn observer_sees_every_visit_and_broken_wall() {
        let (rows, columns) = (4, 6);
        let mut g = small_grid(rows, columns);
        let mut observer = RecordingObserver::new();
        recursive_backtracker(&mut g, &mut seeded_rng(11), &mut observer)
            .expect("generation should not fail");

        let cells_count = rows * columns;
        assert_eq!(observer.steps_count(), cells_count);
        assert_eq!(observer.moves_count(), (0, 0));

        let wall_events = observer.events()
            .iter()
            .filter_map(|event| match *event {
                MazeEvent::WallState { coord, side, is_present, .. } => Some((coord, side, is_present)),
                _ => None,
            })
            .collect::<Vec<_>>();
        // entrance, exit, then both sides of every passage
        assert_eq!(wall_events.len(), 2 + 2 * (cells_count - 1));
        assert_eq!(wall_events[0], (GridCoordinate::new(0, 0), WallSide::Top, false));
        assert_eq!(wall_events[1], (GridCoordinate::new(3, 5), WallSide::Bottom, false));
        for &(coord, side, is_present) in &wall_events {
            assert!(!is_present);
            assert!(!g.cell(coord).unwrap().has_wall(side));
        }
    }

    #[test]
    fn same_maze_as_the_recursive_walk() {
        let sizes = [(1, 1), (1, 9), (9, 1), (2, 2), (3, 3), (4, 7), (7, 11), (12, 12)];
        for seed in 0..100 {
            for &(rows, columns) in sizes.iter() {
                let mut expected = small_grid(rows, columns);
                expected.open_entrance_and_exit();
                let entrance = expected.entrance();
                recursive_carve(&mut expected, &mut seeded_rng(seed), entrance);

                assert_eq!(walls_layout(&carved_grid(rows, columns, seed)),
                           walls_layout(&expected),
                           "{} x {} seed {}", rows, columns, seed);
            }
        }
    }

    #[test]
    fn observer_does_not_change_the_maze() {
        let mut watched = small_grid(8, 8);
        recursive_backtracker(&mut watched, &mut seeded_rng(5), &mut RecordingObserver::new())
            .expect("generation should not fail");
        assert_eq!(walls_layout(&watched), walls_layout(&carved_grid(8, 8, 5)));
    }

    #[test]
    fn large_mazes_do_not_exhaust_the_stack() {
        let g = carved_grid(300, 300, 99);
        assert_eq!(g.passages_count(), 300 * 300 - 1);
    }

    #[test]
    fn quickcheck_generated_mazes_are_perfect() {
        fn prop(rows: u8, columns: u8, seed: u64) -> TestResult {
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let g = carved_grid(rows, columns, seed);
            let same = carved_grid(rows, columns, seed);
            TestResult::from_bool(is_perfect_maze(&g) &&
                                  walls_consistent(&g) &&
                                  g.is_entrance_open() &&
                                  g.is_exit_open() &&
                                  g.visited_count() == 0 &&
                                  walls_layout(&g) == walls_layout(&same))
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
