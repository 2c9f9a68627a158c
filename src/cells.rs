use smallvec::SmallVec;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

/// Position of a cell in a grid: `(0, 0)` is the top left cell.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        let (RowIndex(row), ColumnIndex(column)) = (row_index, col_index);
        GridCoordinate::new(row, column)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new(index / width, index % width)
    }

    /// Creates a new coordinate offset 1 cell away on the given side.
    /// Returns None if the coordinate would leave the range of `usize`; grid bounds are the grid's business.
    pub fn offset(&self, side: WallSide) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match side {
            WallSide::Left => {
                if column > 0 {
                    Some(GridCoordinate::new(row, column - 1))
                } else {
                    None
                }
            }
            WallSide::Right => column.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            WallSide::Top => {
                if row > 0 {
                    Some(GridCoordinate::new(row - 1, column))
                } else {
                    None
                }
            }
            WallSide::Bottom => row.checked_add(1).map(|r| GridCoordinate::new(r, column)),
        }
    }

    /// The side of `self` that faces `other`, if the two coordinates are exactly one step apart.
    pub fn side_facing(&self, other: GridCoordinate) -> Option<WallSide> {
        WallSide::ALL
            .iter()
            .cloned()
            .find(|side| self.offset(*side) == Some(other))
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// One of the four walls of a square cell.
///
/// The declaration order is the order neighbour candidates are produced in, which keeps
/// seeded maze generation reproducible.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [WallSide::Left, WallSide::Right, WallSide::Top, WallSide::Bottom];

    pub fn opposite(self) -> WallSide {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
            WallSide::Top => WallSide::Bottom,
            WallSide::Bottom => WallSide::Top,
        }
    }
}

/// Wall state of a single grid cell plus the traversal flag shared by the generation and
/// solving passes. Walls start present and are only ever cleared.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    has_left_wall: bool,
    has_right_wall: bool,
    has_top_wall: bool,
    has_bottom_wall: bool,
    visited: bool,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            has_left_wall: true,
            has_right_wall: true,
            has_top_wall: true,
            has_bottom_wall: true,
            visited: false,
        }
    }
}

impl Cell {
    #[inline]
    pub fn has_wall(&self, side: WallSide) -> bool {
        match side {
            WallSide::Left => self.has_left_wall,
            WallSide::Right => self.has_right_wall,
            WallSide::Top => self.has_top_wall,
            WallSide::Bottom => self.has_bottom_wall,
        }
    }

    /// Count of the walls still standing around this cell.
    pub fn walls_count(&self) -> usize {
        WallSide::ALL.iter().filter(|side| self.has_wall(**side)).count()
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    // Crate private: clearing one side on its own would break the paired wall invariant that
    // the grid maintains.
    #[inline]
    pub(crate) fn clear_wall(&mut self, side: WallSide) {
        match side {
            WallSide::Left => self.has_left_wall = false,
            WallSide::Right => self.has_right_wall = false,
            WallSide::Top => self.has_top_wall = false,
            WallSide::Bottom => self.has_bottom_wall = false,
        }
    }

    #[inline]
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_cells_are_closed_and_unvisited() {
        let cell = Cell::default();
        for side in WallSide::ALL.iter() {
            assert!(cell.has_wall(*side));
        }
        assert_eq!(cell.walls_count(), 4);
        assert!(!cell.is_visited());
    }

    #[test]
    fn clearing_a_wall_only_touches_that_side() {
        let mut cell = Cell::default();
        cell.clear_wall(WallSide::Right);
        assert!(!cell.has_wall(WallSide::Right));
        assert!(cell.has_wall(WallSide::Left));
        assert!(cell.has_wall(WallSide::Top));
        assert!(cell.has_wall(WallSide::Bottom));
        assert_eq!(cell.walls_count(), 3);

        // clearing twice is harmless
        cell.clear_wall(WallSide::Right);
        assert_eq!(cell.walls_count(), 3);
    }

    #[test]
    fn opposite_sides() {
        for side in WallSide::ALL.iter() {
            assert_ne!(side.opposite(), *side);
            assert_eq!(side.opposite().opposite(), *side);
        }
        assert_eq!(WallSide::Top.opposite(), WallSide::Bottom);
        assert_eq!(WallSide::Left.opposite(), WallSide::Right);
    }

    #[test]
    fn offsets() {
        let gc = |row, column| GridCoordinate::new(row, column);
        assert_eq!(gc(0, 0).offset(WallSide::Left), None);
        assert_eq!(gc(0, 0).offset(WallSide::Top), None);
        assert_eq!(gc(0, 0).offset(WallSide::Right), Some(gc(0, 1)));
        assert_eq!(gc(0, 0).offset(WallSide::Bottom), Some(gc(1, 0)));
        assert_eq!(gc(3, 2).offset(WallSide::Left), Some(gc(3, 1)));
        assert_eq!(gc(3, 2).offset(WallSide::Top), Some(gc(2, 2)));
    }

    #[test]
    fn facing_sides() {
        let gc = |row, column| GridCoordinate::new(row, column);
        assert_eq!(gc(1, 1).side_facing(gc(1, 0)), Some(WallSide::Left));
        assert_eq!(gc(1, 1).side_facing(gc(1, 2)), Some(WallSide::Right));
        assert_eq!(gc(1, 1).side_facing(gc(0, 1)), Some(WallSide::Top));
        assert_eq!(gc(1, 1).side_facing(gc(2, 1)), Some(WallSide::Bottom));
        assert_eq!(gc(1, 1).side_facing(gc(1, 1)), None);
        assert_eq!(gc(1, 1).side_facing(gc(2, 2)), None);
        assert_eq!(gc(1, 1).side_facing(gc(1, 3)), None);
    }

    #[test]
    fn row_major_index_conversion() {
        let columns = ColumnsCount(3);
        assert_eq!(GridCoordinate::from_row_major_index(0, columns), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(2, columns), GridCoordinate::new(0, 2));
        assert_eq!(GridCoordinate::from_row_major_index(4, columns), GridCoordinate::new(1, 1));
        assert_eq!(GridCoordinate::from_row_column_indices(RowIndex(2), ColumnIndex(1)),
                   GridCoordinate::new(2, 1));
        assert_eq!(GridCoordinate::from((2, 1)), GridCoordinate::new(2, 1));
    }
}
