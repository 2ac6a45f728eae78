//! Drives the engine on its own clock.
//!
//! The caller polls with the current time as often as it likes; a tick runs
//! only once the interval since the previous one has elapsed. The next tick
//! is scheduled after the current one has finished and only while the snake
//! is still walking, so ticks never overlap and the loop winds down by
//! itself once the game is over.

use std::time::{Duration, Instant};

use log::debug;

use crate::engine::{GameEngine, GameObserver};
use crate::snake::{Direction, TickOutcome};

pub struct RunController {
    engine: GameEngine,
    next_due: Option<Instant>,
    paused: bool,
}

impl RunController {
    pub fn new(engine: GameEngine, now: Instant) -> Self {
        let next_due = if engine.status().is_walking() { Some(now + engine.interval()) } else { None };
        RunController { engine, next_due, paused: false }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Applied right away; the next tick reads whatever was accepted last.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }
        self.engine.change_direction(direction)
    }

    pub fn is_running(&self) -> bool {
        self.engine.status().is_walking()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time left until the next tick, `None` once nothing is scheduled.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        if self.paused {
            return None;
        }
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if paused == self.paused {
            return;
        }

        self.paused = paused;
        if !paused && self.is_running() {
            // A resumed game gets a full interval before it moves again.
            self.next_due = Some(now + self.engine.interval());
        }
        debug!("game {}", if paused { "paused" } else { "resumed" });
    }

    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        self.poll_observed(now, &mut ())
    }

    /// Runs at most one tick if it is due.
    pub fn poll_observed(&mut self, now: Instant, observer: &mut dyn GameObserver) -> Option<TickOutcome> {
        if self.paused {
            return None;
        }

        let due = self.next_due?;
        if now < due {
            return None;
        }

        let outcome = self.engine.tick_observed(observer);
        self.next_due = if self.is_running() { Some(now + self.engine.interval()) } else { None };

        Some(outcome)
    }
}
