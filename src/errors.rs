// Other modules in this crate `use crate::errors::*;` to get the Error, ErrorKind,
// ResultExt and Result types that `error_chain!` creates.
use error_chain::*;

use crate::cells::GridCoordinate;

error_chain! {

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} x {}, rows and columns must be positive", rows, columns)
        }

        InvalidCellSize(width: f64, height: f64) {
            description("invalid cell size")
            display("invalid cell size {} x {}, width and height must be positive", width, height)
        }

        NotAdjacent(a: GridCoordinate, b: GridCoordinate) {
            description("cells are not adjacent")
            display("cannot break a wall between non adjacent cells {:?} and {:?}", a, b)
        }

        InvalidCoordinate(coord: GridCoordinate) {
            description("grid coordinate out of bounds")
            display("grid coordinate {:?} is outside the grid", coord)
        }
    }
}
