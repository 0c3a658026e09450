mod config;
mod interactive;

use anyhow::{bail, Context, Result};
use config::PlayConfig;
use interactive::InteractiveGame;
use skak_core::{legal_moves, positions, Color, GameState, Square};
use std::env;

fn display_board(state: &GameState) {
    println!("\n  a b c d e f g h");
    println!("  ---------------");

    for rank_idx in (0..8).rev() {
        print!("{} ", rank_idx + 1);

        for file_idx in 0..8 {
            let symbol = Square::from_coords(file_idx, rank_idx)
                .ok()
                .and_then(|square| state.piece_at(square))
                .map_or('.', |piece| piece.symbol());
            print!("{} ", symbol);
        }

        println!("| {}", rank_idx + 1);
    }

    println!("  ---------------");
    println!("  a b c d e f g h\n");

    println!("{} to move", state.side_to_move());
    for color in [Color::White, Color::Black] {
        if state.is_in_check(color) {
            println!("{} is in check", color);
        }
    }
}

fn parse_state(fen: Option<&String>) -> Result<GameState> {
    match fen {
        Some(fen) => {
            GameState::from_fen(fen).with_context(|| format!("Error parsing FEN '{fen}'"))
        }
        None => Ok(GameState::new()),
    }
}

fn print_usage(program: &str) {
    println!("skak - play chess against a random mover");
    println!("Usage:");
    println!("  {program} [play] [--ai white|black] [--seed N]  - Play in the terminal");
    println!("  {program} show [fen]                          - Display a position");
    println!("  {program} moves <square> [fen]                - List a piece's moves");
    println!("  {program} help                                - Show this message");
    println!("\nFEN needs only the placement and side to move, e.g.");
    println!("  {}", positions::STARTING);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("skak", String::as_str);

    match args.get(1).map(String::as_str) {
        None => InteractiveGame::new(PlayConfig::default()).run(),
        Some("help") | Some("-h") | Some("--help") => {
            print_usage(program);
            Ok(())
        }
        Some(flag) if flag.starts_with("--") => {
            InteractiveGame::new(PlayConfig::from_args(&args[1..])?).run()
        }
        Some("play") => InteractiveGame::new(PlayConfig::from_args(&args[2..])?).run(),
        Some("show") => {
            let state = parse_state(args.get(2))?;
            display_board(&state);
            println!("FEN: {}", state.to_fen());
            Ok(())
        }
        Some("moves") => {
            let name = args.get(2).context("moves needs a square, e.g. `moves e2`")?;
            let square =
                Square::from_algebraic(name).with_context(|| format!("invalid square '{name}'"))?;
            let state = parse_state(args.get(3))?;

            let Some(piece) = state.piece_at(square) else {
                println!("{square} is empty");
                return Ok(());
            };
            let destinations: Vec<String> = legal_moves(state.board(), square)
                .iter()
                .map(|to| to.to_string())
                .collect();
            println!(
                "{} {} on {}: {}",
                piece.color,
                piece.piece_type.name(),
                square,
                if destinations.is_empty() {
                    "no moves".to_string()
                } else {
                    destinations.join(" ")
                }
            );
            Ok(())
        }
        Some(other) => bail!("unknown command '{other}', see `{program} help`"),
    }
}
