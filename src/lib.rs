//! **mazes** generates perfect mazes on a rectangular grid with the recursive backtracker
//! algorithm and finds the route from the entrance to the exit with a depth first search.
//!
//! Progress of both passes can be watched through a `MazeObserver`, which is where a renderer
//! plugs in.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod geometry;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod observers;
pub mod pathing;
pub mod units;
mod utils;
