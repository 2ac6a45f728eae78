use crate::{TermInt, Coords};
use crate::board::CellKind;
use crate::snapshot::GameSnapshot;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const SNAKE_CHAR: char = '\u{2588}';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';
const EMPTY_CHAR: char = ' ';

/// Each board cell is drawn this many columns wide so it looks square.
const CELL_WIDTH: TermInt = 2;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

/// Where a board of a given size lands on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub origin: Coords,
    pub outer_width: TermInt,
    pub outer_height: TermInt,
}

impl BoardLayout {
    /// Centers the bordered board, leaving one line above it for the status.
    pub fn centered(term_size: Coords, board_width: usize, board_height: usize) -> Self {
        let outer_width = board_width as TermInt * CELL_WIDTH + 2;
        let outer_height = board_height as TermInt + 2;
        let x = term_size.0.saturating_sub(outer_width) / 2;
        let y = (term_size.1.saturating_sub(outer_height) / 2).max(2);
        BoardLayout { origin: (x, y), outer_width, outer_height }
    }

    /// Screen position of the left column of board cell (x, y).
    pub fn cell_origin(&self, x: usize, y: usize) -> Coords {
        (self.origin.0 + 1 + x as TermInt * CELL_WIDTH, self.origin.1 + 1 + y as TermInt)
    }

    pub fn fits(&self, term_size: Coords) -> bool {
        self.origin.0 + self.outer_width <= term_size.0 && self.origin.1 + self.outer_height <= term_size.1
    }
}

pub fn cell_char(kind: CellKind, crashed: bool) -> char {
    match kind {
        CellKind::Snake if crashed => DEAD_SNAKE_CHAR,
        CellKind::Snake => SNAKE_CHAR,
        CellKind::Food => FOOD_CHAR,
        CellKind::Empty => EMPTY_CHAR,
    }
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking).context("Error showing cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("Error reading key")? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("Error polling events")? {
            if let Event::Key(ev) = read().context("Error reading event")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn draw_borders(&mut self, layout: &BoardLayout) -> Result<()> {
        let (left, top) = layout.origin;
        let end_x = left + layout.outer_width - 1;
        let end_y = top + layout.outer_height - 1;

        for x in left..=end_x {
            let ch = if x == left || x == end_x {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in top + 1..end_y {
            self.print_at((left, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    /// Redraws every board cell from the snapshot.
    pub fn draw_board(&mut self, layout: &BoardLayout, snap: &GameSnapshot) -> Result<()> {
        let crashed = snap.status.collision().is_some();

        for (x, y, kind) in snap.iter() {
            let ch = if kind == CellKind::Snake && !crashed && snap.head.x as usize == x && snap.head.y as usize == y {
                snap.direction.head_char()
            } else {
                cell_char(kind, crashed)
            };

            let (sx, sy) = layout.cell_origin(x, y);
            for dx in 0..CELL_WIDTH {
                self.print_at((sx + dx, sy), ch)?;
            }
        }

        self.flush()
    }

    /// Writes `text` on row `y` starting at column `x`, blanking the rest of the row.
    pub fn print_line(&mut self, (x, y): Coords, text: &str) -> Result<()> {
        for col in x..self.width {
            self.print_at((col, y), ' ')?;
        }
        for (i, ch) in text.chars().enumerate() {
            let col = x + i as TermInt;
            if col >= self.width {
                break;
            }
            self.print_at((col, y), ch)?;
        }
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        // Restore the content from the screen buffer
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let (x, y) = (msg.top_left.0 + x_diff, msg.top_left.1 + y_diff);
                if let Some(ch) = self.screen_char((x, y)) {
                    self.print_at_no_save((x, y), ch)?;
                }
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        if let Some(idx) = self.screen_index(pos) {
            self.screen[idx] = ch;
        }
        self.print_at_no_save(pos, ch)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn screen_index(&self, pos: Coords) -> Option<usize> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(self.width as usize * pos.1 as usize + pos.0 as usize)
        } else {
            None
        }
    }

    fn screen_char(&self, pos: Coords) -> Option<char> {
        self.screen_index(pos).map(|idx| self.screen[idx])
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).context("Error queueing output")
    }
}
