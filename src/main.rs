use anyhow::Result;
use clap::Parser;
use log::info;

use grid_snake::config::GameConfig;
use grid_snake::game::{Flow, SnakeGame};

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Snake on a 14x16 board")]
struct Cli {
    /// Seed for food placement; the same seed replays the same food sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the key help shown before the first game
    #[arg(long)]
    no_intro: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr: `RUST_LOG=debug grid-snake 2>snake.log` keeps them off the board.
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut game = SnakeGame::new(GameConfig::default(), cli.seed)?;
    game.initialize()?;
    info!("terminal ready, seed {:?}", cli.seed);

    let result = run(&mut game, cli.no_intro);

    // The terminal is put back even if the game loop failed.
    game.restore()?;
    result
}

fn run(game: &mut SnakeGame, no_intro: bool) -> Result<()> {
    if !no_intro && game.show_intro()? == Flow::Quit {
        return Ok(());
    }

    // The main game loop takes care of exiting cleanly on CTRL+C
    while game.play()? == Flow::Continue {}

    Ok(())
}
