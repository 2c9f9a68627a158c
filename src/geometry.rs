//! Drawing space positions handed to maze observers.
//!
//! None of this takes part in generating or solving a maze, it only lets a renderer know where
//! a cell sits on its canvas.

#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Axis aligned box covering one cell, `top_left` to `bottom_right`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellBounds {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl CellBounds {
    pub fn centre(&self) -> Point {
        Point::new((self.top_left.x + self.bottom_right.x) / 2.0,
                   (self.top_left.y + self.bottom_right.y) / 2.0)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.bottom_right.x, self.top_left.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom_right.y)
    }
}
