use crate::board::{CellKind, Position};
use crate::engine::GameEngine;
use crate::snake::{Direction, Status};

/// An owned, read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellKind>,
    pub status: Status,
    pub head: Position,
    pub direction: Direction,
    pub length: u32,
    pub score: u32,
    pub interval_ms: u64,
}

impl GameSnapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = engine.board();
        GameSnapshot {
            width: board.width(),
            height: board.height(),
            cells: board.cells().iter().map(|c| c.kind()).collect(),
            status: engine.status(),
            head: engine.head(),
            direction: engine.direction(),
            length: engine.length(),
            score: engine.score(),
            interval_ms: engine.interval().as_millis() as u64,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> CellKind {
        if x < self.width && y < self.height {
            self.cells[x + y * self.width]
        } else {
            CellKind::Empty
        }
    }

    /// Cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellKind)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(id, kind)| (id % width, id / width, *kind))
    }

    pub fn is_over(&self) -> bool {
        !self.status.is_walking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_matches_engine() {
        let engine = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        let snap = engine.snapshot();

        assert_eq!(snap.width, 14);
        assert_eq!(snap.height, 16);
        assert_eq!(snap.cells.len(), 14 * 16);
        assert_eq!(snap.cell(0, 0), CellKind::Snake);
        assert_eq!(snap.status, Status::Walking);
        assert!(!snap.is_over());

        let food = engine.food().unwrap();
        assert_eq!(snap.cell(food.x as usize, food.y as usize), CellKind::Food);
        assert_eq!(snap.iter().filter(|(_, _, k)| *k == CellKind::Food).count(), 1);
        assert_eq!(snap.cell(99, 0), CellKind::Empty);
    }

    #[test]
    fn test_snapshot_is_detached_from_engine() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        let before = engine.snapshot();
        engine.change_direction(Direction::Up);
        engine.tick();

        assert_eq!(before.status, Status::Walking);
        assert_eq!(engine.snapshot().status, Status::HitWall);
        assert!(engine.snapshot().is_over());
    }
}
