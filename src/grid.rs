use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cell, CoordinateSmallVec, GridCoordinate, WallSide};
use crate::errors::*;
use crate::geometry::{CellBounds, Point};
use crate::grid_iterators::{BatchIter, CellIter};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

/// Graph view of a grid: one node per cell (weighted with its coordinate), one edge per passage.
pub type PassageGraph = UnGraph<GridCoordinate, ()>;

/// A rectangular grid of square cells and the walls between them.
///
/// Cells are stored row major, `(row, column)` addressing. Walls between neighbouring cells are
/// always broken in pairs so that a cell's wall facing its neighbour matches the neighbour's wall
/// facing back.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: RowsCount,
    columns: ColumnsCount,
    origin: Point,
    cell_width: Width,
    cell_height: Height,
}

impl Grid {
    /// Build a grid of fully walled, unvisited cells.
    ///
    /// The origin and cell size only place cells in drawing space for observers.
    pub fn new(origin: Point,
               rows: RowsCount,
               columns: ColumnsCount,
               cell_width: Width,
               cell_height: Height)
               -> Result<Grid> {

        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        if rows_count == 0 || columns_count == 0 {
            bail!(ErrorKind::InvalidDimension(rows_count, columns_count));
        }

        let (Width(w), Height(h)) = (cell_width, cell_height);
        let is_positive = |length: f64| length.is_finite() && length > 0.0;
        if !is_positive(w) || !is_positive(h) {
            bail!(ErrorKind::InvalidCellSize(w, h));
        }

        let cells_count = rows_count.checked_mul(columns_count)
            .ok_or_else(|| ErrorKind::InvalidDimension(rows_count, columns_count))?;

        Ok(Grid {
            cells: vec![Cell::default(); cells_count],
            rows,
            columns,
            origin,
            cell_width,
            cell_height,
        })
    }

    /// A grid at the drawing origin with unit sized cells.
    pub fn with_dimensions(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        Grid::new(Point::default(), rows, columns, Width(1.0), Height(1.0))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The cell whose top wall is the maze entrance.
    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(0, 0)
    }

    /// The cell whose bottom wall is the maze exit.
    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    #[inline]
    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }

    /// Where the cell sits in drawing space.
    pub fn cell_bounds(&self, coord: GridCoordinate) -> Option<CellBounds> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let (Width(w), Height(h)) = (self.cell_width, self.cell_height);
        let x1 = self.origin.x + coord.column as f64 * w;
        let y1 = self.origin.y + coord.row as f64 * h;
        Some(CellBounds {
            top_left: Point::new(x1, y1),
            bottom_right: Point::new(x1 + w, y1 + h),
        })
    }

    pub fn neighbour_at_direction(&self, coord: GridCoordinate, side: WallSide) -> Option<GridCoordinate> {
        coord.offset(side).and_then(|neighbour_coord| {
            if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            }
        })
    }

    /// Cells that are left, right, above or below a particular cell, but not necessarily joined
    /// to it by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        if !self.is_valid_coordinate(coord) {
            return CoordinateSmallVec::new();
        }
        WallSide::ALL
            .iter()
            .filter_map(|side| self.neighbour_at_direction(coord, *side))
            .collect()
    }

    /// Unvisited neighbours of a cell, ordered left, right, top, bottom.
    ///
    /// When `respect_walls` is set a neighbour only counts if the wall between it and `coord` is
    /// already broken (the solver's view); otherwise wall state is ignored (the generator's view,
    /// choosing which wall to break next).
    pub fn neighbours_of(&self, coord: GridCoordinate, respect_walls: bool) -> CoordinateSmallVec {
        let current_cell = match self.cell(coord) {
            Some(cell) => cell,
            None => return CoordinateSmallVec::new(),
        };

        WallSide::ALL
            .iter()
            .filter(|side| !respect_walls || !current_cell.has_wall(**side))
            .filter_map(|side| self.neighbour_at_direction(coord, *side))
            .filter(|neighbour_coord| !self.is_visited(*neighbour_coord))
            .collect()
    }

    /// Clear the facing walls of two adjacent cells. Breaking an already broken wall is a no-op.
    pub fn break_wall_between(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        let a_index = self.grid_coordinate_to_index(a)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(a))?;
        let b_index = self.grid_coordinate_to_index(b)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(b))?;
        let side = a.side_facing(b)
            .ok_or_else(|| ErrorKind::NotAdjacent(a, b))?;

        self.cells[a_index].clear_wall(side);
        self.cells[b_index].clear_wall(side.opposite());
        Ok(())
    }

    /// Open the top wall of the entrance cell and the bottom wall of the exit cell.
    /// These are outer walls, so there is no neighbour to keep consistent with.
    pub fn open_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        if let Some(index) = self.grid_coordinate_to_index(entrance) {
            self.cells[index].clear_wall(WallSide::Top);
        }
        if let Some(index) = self.grid_coordinate_to_index(exit) {
            self.cells[index].clear_wall(WallSide::Bottom);
        }
    }

    pub fn is_entrance_open(&self) -> bool {
        self.cell(self.entrance()).map_or(false, |cell| !cell.has_wall(WallSide::Top))
    }

    pub fn is_exit_open(&self) -> bool {
        self.cell(self.exit()).map_or(false, |cell| !cell.has_wall(WallSide::Bottom))
    }

    /// Are two cells in the grid joined by a passage?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        match (self.cell(a), self.cell(b), a.side_facing(b)) {
            (Some(a_cell), Some(_), Some(side)) => !a_cell.has_wall(side),
            _ => false,
        }
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, side: WallSide) -> bool {
        self.neighbour_at_direction(coord, side)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Cells that are joined to a particular cell by a passage.
    /// Returns None for a coordinate outside the grid.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked_cells = self.neighbours(coord)
            .iter()
            .cloned()
            .filter(|neighbour_coord| self.is_linked(coord, *neighbour_coord))
            .collect();
        Some(linked_cells)
    }

    /// Number of broken walls between cells of the grid, each shared wall counted once.
    /// The entrance and exit are outer walls and do not count.
    pub fn passages_count(&self) -> usize {
        self.iter()
            .map(|coord| {
                [WallSide::Right, WallSide::Bottom]
                    .iter()
                    .filter(|side| self.is_neighbour_linked(coord, **side))
                    .count()
            })
            .sum()
    }

    /// Build an undirected graph of the passages, node indices following the row major order of
    /// the cells.
    pub fn passage_graph(&self) -> PassageGraph {
        let mut graph = PassageGraph::with_capacity(self.size(), self.passages_count());
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }

        for coord in self.iter() {
            for side in [WallSide::Right, WallSide::Bottom].iter() {
                if let Some(neighbour_coord) = self.neighbour_at_direction(coord, *side) {
                    if self.is_linked(coord, neighbour_coord) {
                        let a = self.grid_coordinate_to_index(coord);
                        let b = self.grid_coordinate_to_index(neighbour_coord);
                        if let (Some(a_index), Some(b_index)) = (a, b) {
                            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
                        }
                    }
                }
            }
        }

        graph
    }

    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cell(coord).map_or(false, Cell::is_visited)
    }

    pub(crate) fn mark_visited(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index].set_visited(true);
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Clear the traversal flag of every cell, ready for the next pass over the grid.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::rows(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::columns(self.rows, self.columns)
    }
}
