use std::sync::Arc;
use trinim::game::Game;
use trinim::player::AutoPlayer;
use trinim::position::{Move, Position, Side};
use trinim::solver::TranspositionTable;

fn play_out(red: u8, green: u8, blue: u8) -> (Side, Vec<Move>) {
    let table = Arc::new(TranspositionTable::new());
    let mut game = Game::new(
        Position::new(red, green, blue),
        Box::new(AutoPlayer::with_table(Arc::clone(&table))),
        Box::new(AutoPlayer::with_table(table)),
    );

    let mut moves = Vec::new();
    while let Some(m) = game.advance() {
        moves.push(m);
        assert!(moves.len() <= 1000, "game failed to terminate");
    }
    (game.winner().expect("ended game must be decided"), moves)
}

fn tokens_removed(moves: &[Move]) -> u32 {
    moves.iter().map(|m| u32::from(m.count)).sum()
}

#[test]
fn three_four_five_plays_out_every_token() {
    let (winner, moves) = play_out(3, 4, 5);
    assert_eq!(winner, Side::White);
    assert_eq!(tokens_removed(&moves), 12);
}

#[test]
fn replays_with_fresh_tables_are_reproducible() {
    assert_eq!(play_out(3, 4, 5), play_out(3, 4, 5));
}

#[test]
fn balanced_start_is_won_by_the_second_player() {
    // (1, 2, 3) is a loss for the side to move; the game still plays out
    // every token before the board empties.
    let (winner, moves) = play_out(1, 2, 3);
    assert_eq!(winner, Side::Black);
    assert_eq!(tokens_removed(&moves), 6);
}
