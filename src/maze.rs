//! A maze in one piece: build the grid, carve it, and optionally solve it.

use serde_derive::Deserialize;

use crate::errors::*;
use crate::generators;
use crate::geometry::Point;
use crate::grid::Grid;
use crate::observers::MazeObserver;
use crate::pathing::{self, Solution};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

/// Size, placement and seed of a maze.
///
/// Deserializes from any serde format, missing fields falling back to the defaults: a 20 x 20
/// grid of unit cells at the origin with an unseeded generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub x: f64,
    pub y: f64,
    pub rows: usize,
    pub columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            x: 0.0,
            y: 0.0,
            rows: 20,
            columns: 20,
            cell_width: 1.0,
            cell_height: 1.0,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new() -> MazeConfig {
        MazeConfig::default()
    }

    pub fn origin(mut self, x: f64, y: f64) -> MazeConfig {
        self.x = x;
        self.y = y;
        self
    }

    pub fn dimensions(mut self, rows: usize, columns: usize) -> MazeConfig {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn cell_size(mut self, width: f64, height: f64) -> MazeConfig {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    fn build_grid(&self) -> Result<Grid> {
        Grid::new(Point::new(self.x, self.y),
                  RowsCount(self.rows),
                  ColumnsCount(self.columns),
                  Width(self.cell_width),
                  Height(self.cell_height))
    }
}

#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    config: MazeConfig,
}

impl Maze {
    /// Build the grid described by `config` and carve a perfect maze into it, reporting the
    /// carving to `observer`.
    pub fn new<O: MazeObserver>(config: MazeConfig, observer: &mut O) -> Result<Maze> {
        let mut grid = config.build_grid()?;
        let mut rng = generators::maze_rng(config.seed);
        generators::recursive_backtracker(&mut grid, &mut rng, observer)?;
        Ok(Maze { grid, config })
    }

    /// Route from the entrance to the exit, None if there is none.
    pub fn solve<O: MazeObserver>(&mut self, observer: &mut O) -> Option<Solution> {
        pathing::solve(&mut self.grid, observer)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }
}
