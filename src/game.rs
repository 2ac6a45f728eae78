use std::{thread::sleep, time::{Duration, Instant}};

use crate::config::GameConfig;
use crate::engine::{GameEngine, GameObserver};
use crate::input::{is_ctrl_c, map_key, Command};
use crate::snake::{Collision, Status};
use crate::term::{BoardLayout, TermManager};
use crate::ticker::RunController;

use anyhow::{bail, Result};
use log::info;

const POLL_INTERVAL_MS: u64 = 5;

const WALKING_MSG: &str = "Snake walking! Take care!";

/// Whether the player wants another round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Keeps the points and the status line up to date from engine callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub points: u32,
    pub message: String,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard { points: 0, message: WALKING_MSG.to_owned() }
    }

    pub fn line(&self) -> String {
        format!("{}  Points: {}", self.message, self.points)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for Scoreboard {
    fn on_food_eaten(&mut self) {
        self.points += 1;
    }

    fn on_collision(&mut self, collision: Collision) {
        self.message = status_message(collision.into()).to_owned();
    }

    fn on_board_full(&mut self) {
        self.message = status_message(Status::BoardFull).to_owned();
    }
}

pub fn status_message(status: Status) -> &'static str {
    match status {
        Status::Walking => WALKING_MSG,
        Status::HitWall => "You hit the wall! Game Over!",
        Status::HitSelf => "You hit yourself! Game Over!",
        Status::BoardFull => "Board full! You won!",
    }
}

pub struct SnakeGame {
    config: GameConfig,
    seed: Option<u64>,
    term: TermManager,
    layout: BoardLayout,
    games_played: u64,
}

impl SnakeGame {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let term = TermManager::new()?;
        let layout = BoardLayout::centered(term.get_terminal_size(), config.width, config.height);

        if !layout.fits(term.get_terminal_size()) {
            let (w, h) = term.get_terminal_size();
            bail!(
                "terminal is {}x{}, the board needs at least {}x{}",
                w, h, layout.outer_width, layout.outer_height + 2
            );
        }

        Ok(SnakeGame { config, seed, term, layout, games_played: 0 })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    pub fn show_intro(&mut self) -> Result<Flow> {
        let lines = &[
            "Arrow keys to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Continue)
    }

    pub fn play(&mut self) -> Result<Flow> {
        self.term.clear()?;
        self.term.draw_borders(&self.layout)?;
        self.term.hide_message()?;

        let mut controller = RunController::new(self.new_engine()?, Instant::now());
        let mut scoreboard = Scoreboard::new();
        self.games_played += 1;
        info!("starting game {}", self.games_played);

        self.redraw(&controller, &scoreboard)?;

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match map_key(&key_ev) {
                    Command::Quit => return Ok(Flow::Quit),
                    Command::Turn(dir) => {
                        controller.request_direction(dir);
                    }
                    Command::TogglePause => self.toggle_pause(&mut controller)?,
                    Command::None => {}
                }
            }

            if controller.poll_observed(Instant::now(), &mut scoreboard).is_some() {
                self.redraw(&controller, &scoreboard)?;
            }

            if !controller.is_running() {
                break;
            }
        }

        let engine = controller.engine();
        info!("game {} over: {:?}, {} points in {} ticks", self.games_played, engine.status(), scoreboard.points, engine.ticks());
        self.game_over(engine.status(), scoreboard.points)?;

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }
        Ok(Flow::Continue)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn new_engine(&self) -> Result<GameEngine> {
        match self.seed {
            // Each round gets its own food sequence, reproducible across runs.
            Some(seed) => GameEngine::with_seed(self.config.clone(), seed.wrapping_add(self.games_played)),
            None => GameEngine::new(self.config.clone()),
        }
    }

    fn redraw(&mut self, controller: &RunController, scoreboard: &Scoreboard) -> Result<()> {
        let snap = controller.engine().snapshot();
        self.term.draw_board(&self.layout, &snap)?;

        let status_row = self.layout.origin.1.saturating_sub(2);
        self.term.print_line((self.layout.origin.0, status_row), &scoreboard.line())
    }

    fn game_over(&mut self, status: Status, points: u32) -> Result<()> {
        self.term.show_message(&[
            status_message(status),
            &*format!("Points: {}", points),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])
    }

    fn toggle_pause(&mut self, controller: &mut RunController) -> Result<()> {
        let paused = !controller.is_paused();

        if paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        controller.set_paused(paused, Instant::now());
        Ok(())
    }
}
