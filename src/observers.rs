//! The seam between the maze algorithms and whatever draws them.
//!
//! Generators and solvers report their progress to a `MazeObserver` as they go. Observers only
//! watch: nothing they do can change how a maze is carved or solved, so the `NoopObserver` is
//! always a valid choice.

use log::trace;

use crate::cells::{GridCoordinate, WallSide};
use crate::geometry::CellBounds;

pub trait MazeObserver {
    /// A wall of a cell was set, `is_present == false` meaning it has just been broken.
    fn wall_state(&mut self, _coord: GridCoordinate, _bounds: CellBounds, _side: WallSide, _is_present: bool) {}

    /// The solver stepped from one cell to the next, or is backing out of a dead end
    /// (`is_undo`). An undo names the same `from` and `to` cells as the forward move it reverses.
    fn moved(&mut self,
             _from: GridCoordinate,
             _from_bounds: CellBounds,
             _to: GridCoordinate,
             _to_bounds: CellBounds,
             _is_undo: bool) {
    }

    /// One cell was visited. Renderers use this to pace an animation.
    fn step(&mut self) {}
}

impl<'a, O: MazeObserver + ?Sized> MazeObserver for &'a mut O {
    fn wall_state(&mut self, coord: GridCoordinate, bounds: CellBounds, side: WallSide, is_present: bool) {
        (**self).wall_state(coord, bounds, side, is_present)
    }

    fn moved(&mut self,
             from: GridCoordinate,
             from_bounds: CellBounds,
             to: GridCoordinate,
             to_bounds: CellBounds,
             is_undo: bool) {
        (**self).moved(from, from_bounds, to, to_bounds, is_undo)
    }

    fn step(&mut self) {
        (**self).step()
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct NoopObserver;

impl MazeObserver for NoopObserver {}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum MazeEvent {
    WallState {
        coord: GridCoordinate,
        bounds: CellBounds,
        side: WallSide,
        is_present: bool,
    },
    Move {
        from: GridCoordinate,
        from_bounds: CellBounds,
        to: GridCoordinate,
        to_bounds: CellBounds,
        is_undo: bool,
    },
    Step,
}

/// Keeps every event in the order it was reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<MazeEvent>,
}

impl RecordingObserver {
    pub fn new() -> RecordingObserver {
        RecordingObserver::default()
    }

    pub fn events(&self) -> &[MazeEvent] {
        &self.events
    }

    pub fn steps_count(&self) -> usize {
        self.events.iter().filter(|event| **event == MazeEvent::Step).count()
    }

    /// Forward and undo move counts.
    pub fn moves_count(&self) -> (usize, usize) {
        self.events.iter().fold((0, 0), |(forward, undo), event| match *event {
            MazeEvent::Move { is_undo: false, .. } => (forward + 1, undo),
            MazeEvent::Move { is_undo: true, .. } => (forward, undo + 1),
            _ => (forward, undo),
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl MazeObserver for RecordingObserver {
    fn wall_state(&mut self, coord: GridCoordinate, bounds: CellBounds, side: WallSide, is_present: bool) {
        self.events.push(MazeEvent::WallState { coord, bounds, side, is_present });
    }

    fn moved(&mut self,
             from: GridCoordinate,
             from_bounds: CellBounds,
             to: GridCoordinate,
             to_bounds: CellBounds,
             is_undo: bool) {
        self.events.push(MazeEvent::Move { from, from_bounds, to, to_bounds, is_undo });
    }

    fn step(&mut self) {
        self.events.push(MazeEvent::Step);
    }
}

/// Writes every event to the `log` facade at trace level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LoggingObserver {
    steps: usize,
}

impl LoggingObserver {
    pub fn new() -> LoggingObserver {
        LoggingObserver::default()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl MazeObserver for LoggingObserver {
    fn wall_state(&mut self, coord: GridCoordinate, _bounds: CellBounds, side: WallSide, is_present: bool) {
        trace!("cell ({}, {}) {:?} wall present: {}", coord.row, coord.column, side, is_present);
    }

    fn moved(&mut self,
             from: GridCoordinate,
             from_bounds: CellBounds,
             to: GridCoordinate,
             to_bounds: CellBounds,
             is_undo: bool) {
        let (a, b) = (from_bounds.centre(), to_bounds.centre());
        let action = if is_undo { "undo move" } else { "move" };
        trace!("{} cell ({}, {}) -> ({}, {}), centre ({}, {}) -> ({}, {})",
               action, from.row, from.column, to.row, to.column, a.x, a.y, b.x, b.y);
    }

    fn step(&mut self) {
        self.steps += 1;
        trace!("step {}", self.steps);
    }
}
