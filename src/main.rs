//! Gogol-Rust: a Go board-state engine.
//!
//! ## Usage
//!
//! - `gogol-rust` - Show a demo
//! - `gogol-rust gtp` - Start GTP server for GUI integration
//! - `gogol-rust demo` - Run the demo

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use gogol_rust::board::Board;
use gogol_rust::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use gogol_rust::gtp::GtpEngine;
use gogol_rust::suggest::{MoveSuggester, RandomSuggester, play_suggestion};

/// Gogol-Rust: a Go board-state engine
#[derive(Parser)]
#[command(name = "gogol-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the random opponent (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the engine
    Demo {
        /// Number of random moves to play after the capture example
        #[arg(long, default_value_t = 20)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(MIN_SIZE..=MAX_SIZE).contains(&cli.size) {
        bail!("board size must be in {MIN_SIZE}..={MAX_SIZE}, got {}", cli.size);
    }

    let suggester = match cli.seed {
        Some(seed) => RandomSuggester::with_seed(seed),
        None => RandomSuggester::new(),
    };

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::with_suggester(cli.size, Box::new(suggester));
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Demo { moves }) => run_demo(cli.size, moves, suggester)?,
        None => run_demo(cli.size, 20, suggester)?,
    }
    Ok(())
}

fn run_demo(size: usize, moves: usize, mut bot: RandomSuggester) -> Result<()> {
    println!("Gogol-Rust: Go board-state engine\n");

    // Demo 1: a single stone surrounded and captured
    println!("=== Capture Demo ===");
    let mut board = Board::new(5);
    for (x, y) in [(2, 2), (2, 1), (0, 0), (2, 3), (4, 4), (1, 2), (0, 4)] {
        let color = board.to_move();
        board
            .try_place(x, y)
            .with_context(|| format!("{color} at ({x},{y})"))?;
    }
    let placed = board.try_place(3, 2).context("White at (3,2)")?;
    println!("White at (3,2) captured {} stone(s)", placed.captured);
    println!("{board}");
    for g in board.groups() {
        println!("group {} {}: {} stone(s), {} liberties", g.id, g.color, g.len(), g.liberties);
    }

    // Demo 2: random play
    println!("\n=== Random Play Demo ({size}x{size}) ===");
    let mut board = Board::new(size);
    for _ in 0..moves {
        let color = board.to_move();
        let Ok(suggestion) = bot.suggest(&board, color) else {
            break;
        };
        if !play_suggestion(&mut board, suggestion) {
            eprintln!("rejected suggestion {},{}", suggestion.x, suggestion.y);
        }
    }
    println!("{board}");
    println!(
        "{} stones in {} groups, {} to move",
        board.stone_count(),
        board.groups().count(),
        board.to_move()
    );
    Ok(())
}
