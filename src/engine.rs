//! The per-tick rules of the game.
//!
//! The snake has no explicit body list. Every occupied cell holds a countdown
//! of how many more ticks it stays occupied; the head is stamped with the
//! current length and each tick without food ages every segment by one, so
//! the tail vacates on its own. Eating skips the aging step for one tick,
//! which is what makes the snake grow.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Position};
use crate::config::GameConfig;
use crate::snake::{Collision, Direction, Status, TickOutcome::{self, *}};
use crate::snapshot::GameSnapshot;

/// Callbacks fired by [`GameEngine::tick_observed`]. All methods default to
/// doing nothing.
pub trait GameObserver {
    fn on_food_eaten(&mut self) {}
    fn on_collision(&mut self, _collision: Collision) {}
    fn on_board_full(&mut self) {}
}

impl GameObserver for () {}

pub struct GameEngine {
    config: GameConfig,
    board: Board,
    head: Position,
    direction: Direction,
    length: u32,
    interval_ms: u64,
    status: Status,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`GameEngine::new`] but food placement is reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let mut engine = GameEngine {
            board: Board::new(config.width, config.height),
            head: Position::new(0, 0),
            direction: Direction::Right,
            length: config.initial_length,
            interval_ms: config.initial_interval_ms,
            status: Status::Walking,
            score: 0,
            ticks: 0,
            rng,
            config,
        };

        engine.stamp_head();
        if engine.place_food().is_none() {
            engine.status = Status::BoardFull;
        }

        debug!("new game on a {}x{} board, food at {:?}", engine.config.width, engine.config.height, engine.food());
        Ok(engine)
    }

    /// Turn the snake. Reversing straight into the neck is silently refused.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            trace!("ignoring reversal {:?} -> {:?}", self.direction, requested);
            return false;
        }

        self.direction = requested;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.status.is_walking() {
            return Halted;
        }

        self.ticks += 1;
        let target = self.head.step(self.direction);

        if let Some(collision) = self.check_collision(target) {
            self.status = collision.into();
            info!("collision {:?} at {:?} after {} ticks, score {}", collision, target, self.ticks, self.score);
            return Crashed(collision);
        }

        let has_food = self.board.get(target).map_or(false, |cell| cell.food);
        let outcome = if has_food {
            let food = self.eat_food(target);
            Ate { head: target, food }
        } else {
            self.board.age_segments();
            Moved { head: target }
        };

        self.head = target;
        self.stamp_head();

        trace!("tick {}: {:?}", self.ticks, outcome);
        outcome
    }

    /// [`GameEngine::tick`], reporting what happened to `observer`.
    pub fn tick_observed(&mut self, observer: &mut dyn GameObserver) -> TickOutcome {
        let outcome = self.tick();

        match outcome {
            Ate { food, .. } => {
                observer.on_food_eaten();
                if food.is_none() {
                    observer.on_board_full();
                }
            }
            Crashed(collision) => observer.on_collision(collision),
            Moved { .. } | Halted => {}
        }

        outcome
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Foods eaten so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn food(&self) -> Option<Position> {
        self.board.food_positions().first().copied()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn check_collision(&self, target: Position) -> Option<Collision> {
        match self.board.get(target) {
            None => Some(Collision::Wall),
            Some(cell) if cell.has_snake() => Some(Collision::SelfHit),
            Some(_) => None,
        }
    }

    fn eat_food(&mut self, target: Position) -> Option<Position> {
        self.length += 1;
        self.score += 1;
        self.interval_ms = self.interval_ms.saturating_sub(self.config.speed_step_ms);

        // The eaten cell still holds food here, so the new one can't land on it.
        let food = self.place_food();
        if let Some(cell) = self.board.get_mut(target) {
            cell.food = false;
        }

        match food {
            Some(pos) => debug!("ate food at {:?}, length {}, next food at {:?}", target, self.length, pos),
            None => {
                warn!("no free cell left for food, length {}", self.length);
                self.status = Status::BoardFull;
            }
        }

        food
    }

    fn place_food(&mut self) -> Option<Position> {
        let free = self.board.free_positions();
        let pos = *free.choose(&mut self.rng)?;
        self.board.get_mut(pos)?.food = true;
        Some(pos)
    }

    fn stamp_head(&mut self) {
        let length = self.length;
        if let Some(cell) = self.board.get_mut(self.head) {
            cell.snake = length;
        }
    }
}
