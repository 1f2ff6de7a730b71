use crate::commands::console::ConsolePlayer;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use trinim::game::Game;
use trinim::player::{AutoPlayer, Player};
use trinim::position::{Pile, Position};
use trinim::solver::TranspositionTable;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerKind {
    /// Solver-backed player
    Automated,
    /// Reads moves from the console
    Manual,
}

/// Play a game between two players.
#[derive(Debug, Parser)]
pub struct Args {
    /// Kind of the first player (White)
    #[arg(value_enum)]
    white: PlayerKind,

    /// Kind of the second player (Black)
    #[arg(value_enum)]
    black: PlayerKind,

    /// Starting size of the red pile
    red: u8,

    /// Starting size of the green pile
    green: u8,

    /// Starting size of the blue pile
    blue: u8,
}

fn make_player(kind: PlayerKind, table: &Arc<TranspositionTable>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Automated => Box::new(AutoPlayer::with_table(Arc::clone(table))),
        PlayerKind::Manual => Box::new(ConsolePlayer::new()),
    }
}

fn render(position: &Position) {
    println!("   RED   |  GREEN  |  BLUE   ");
    println!("=========+=========+=========");
    println!(
        "   {:02}    |   {:02}    |   {:02}    ",
        position.count(Pile::Red),
        position.count(Pile::Green),
        position.count(Pile::Blue),
    );
    println!("------------------------------");
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    // Both automated sides share one table for the lifetime of the process.
    let table = Arc::new(TranspositionTable::new());
    let mut game = Game::new(
        Position::new(args.red, args.green, args.blue),
        make_player(args.white, &table),
        make_player(args.black, &table),
    );

    loop {
        render(game.position());
        let mover = game.turn();
        match game.advance() {
            Some(m) => println!("==> {mover} {m}"),
            None => break,
        }
    }

    let winner = game.winner().context("game ended without a winner")?;
    println!("WINNER: {winner}");
    Ok(())
}
