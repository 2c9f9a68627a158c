use std::fmt;

use crate::cells::{GridCoordinate, WallSide};
use crate::grid::Grid;
use crate::utils::{self, FnvHashSet};

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";
const OPEN_3: &str = "   ";

/// Decides what is drawn inside each cell of a text rendered grid. Bodies are three characters
/// wide.
pub trait GridDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String;
}

/// Marks every cell on a route through the maze.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from(OPEN_3)
        }
    }
}

/// Marks a start cell with an 'S' and an end cell with an 'E'.
#[derive(Debug, Copy, Clone)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }

    /// The maze entrance and exit of a grid.
    pub fn entrance_and_exit(grid: &Grid) -> StartEndPointsDisplay {
        StartEndPointsDisplay::new(grid.entrance(), grid.exit())
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from(OPEN_3)
        }
    }
}

/// A grid together with the cell bodies to draw in it, see `Grid::display_with`.
pub struct DecoratedGrid<'a> {
    grid: &'a Grid,
    displayer: &'a dyn GridDisplay,
}

impl<'a> fmt::Display for DecoratedGrid<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_grid(self.grid, Some(self.displayer)))
    }
}

impl Grid {
    pub fn display_with<'a>(&'a self, displayer: &'a dyn GridDisplay) -> DecoratedGrid<'a> {
        DecoratedGrid { grid: self, displayer }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_grid(self, None))
    }
}

// The glyph where up to four wall segments meet.
fn wall_junction(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        (false, false, false, false) => " ",
    }
}

fn render_grid(grid: &Grid, displayer: Option<&dyn GridDisplay>) -> String {

    let has_wall = |coord: GridCoordinate, side: WallSide| {
        grid.cell(coord).map_or(false, |cell| cell.has_wall(side))
    };
    let neighbour_has_wall = |coord: GridCoordinate, direction: WallSide, side: WallSide| {
        grid.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| has_wall(neighbour_coord, side))
    };
    let wall_or_gap = |is_wall: bool, wall_text: &'static str, gap_text: &'static str| {
        if is_wall { wall_text } else { gap_text }
    };

    // The north most boundary is special cased, every row below draws only its own body, its
    // eastern walls and its southern walls. A cell uses the southern wall of the cell above as
    // its own northern wall.
    let mut output = String::new();
    if let Some(first_grid_row) = grid.iter_row().next() {
        if let Some(&first) = first_grid_row.first() {
            output.push_str(wall_junction(false, has_wall(first, WallSide::Top), false, true));
        }
        for &coord in &first_grid_row {
            let top = has_wall(coord, WallSide::Top);
            output.push_str(wall_or_gap(top, WALL_LR_3, OPEN_3));
            output.push_str(wall_junction(top,
                                          neighbour_has_wall(coord, WallSide::Right, WallSide::Top),
                                          false,
                                          has_wall(coord, WallSide::Right)));
        }
        output.push_str("\n");
    }

    for row in grid.iter_row() {

        let mut row_middle_section_render = String::new();
        let mut row_bottom_section_render = String::new();

        // west most boundary of the row
        if let Some(&first) = row.first() {
            let west = has_wall(first, WallSide::Left);
            row_middle_section_render.push_str(wall_or_gap(west, WALL_UD, " "));
            row_bottom_section_render.push_str(
                wall_junction(false,
                              has_wall(first, WallSide::Bottom),
                              west,
                              neighbour_has_wall(first, WallSide::Bottom, WallSide::Left)));
        }

        for &cell_coord in &row {
            match displayer {
                Some(displayer) => row_middle_section_render.push_str(&displayer.render_cell_body(cell_coord)),
                None => row_middle_section_render.push_str(OPEN_3),
            }

            let east = has_wall(cell_coord, WallSide::Right);
            let south = has_wall(cell_coord, WallSide::Bottom);
            row_middle_section_render.push_str(wall_or_gap(east, WALL_UD, " "));
            row_bottom_section_render.push_str(wall_or_gap(south, WALL_LR_3, OPEN_3));

            // south east corner, shared with up to three other cells
            let corner = wall_junction(south,
                                       neighbour_has_wall(cell_coord, WallSide::Right, WallSide::Bottom),
                                       east,
                                       neighbour_has_wall(cell_coord, WallSide::Bottom, WallSide::Right));
            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push_str("\n");
        output.push_str(&row_bottom_section_render);
        output.push_str("\n");
    }

    output
}
