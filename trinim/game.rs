//! Turn-by-turn game loop between two move providers.

use crate::player::Player;
use crate::position::{Move, Position, Side};

/// A running game: the authoritative position plus one [`Player`] per side.
///
/// The game is either in progress ([`Game::winner`] is `None`) or decided;
/// once decided it never changes again.
pub struct Game {
    position: Position,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    winner: Option<Side>,
}

impl Game {
    /// Start a game from `position` between the two given players
    pub fn new(position: Position, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Game {
            position,
            white,
            black,
            winner: None,
        }
    }

    /// Current position
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Side to move
    pub const fn turn(&self) -> Side {
        self.position.turn()
    }

    /// Winner, once the game is decided
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Play a single turn.
    ///
    /// Asks the side to move for a move and applies it to the shared
    /// position. Returns `None` — recording the winner — when the game is
    /// over: either the board is empty (the previous mover won) or the side
    /// to move produced no move and thereby resigned.
    pub fn advance(&mut self) -> Option<Move> {
        if self.winner.is_some() {
            return None;
        }

        if self.position.is_finished() {
            self.winner = Some(self.position.turn().opponent());
            return None;
        }

        let player = match self.position.turn() {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        };

        match player.next_move(&self.position) {
            Some(m) => {
                self.position.forward(m);
                Some(m)
            }
            None => {
                self.winner = Some(self.position.turn().opponent());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::AutoPlayer;
    use crate::position::Pile;

    fn auto_game(red: u8, green: u8, blue: u8) -> Game {
        Game::new(
            Position::new(red, green, blue),
            Box::new(AutoPlayer::new()),
            Box::new(AutoPlayer::new()),
        )
    }

    #[test]
    fn empty_board_is_a_win_for_the_second_player() {
        let mut game = auto_game(0, 0, 0);
        assert_eq!(game.advance(), None);
        assert_eq!(game.winner(), Some(Side::Black));
    }

    #[test]
    fn single_token_game_ends_after_one_move() {
        let mut game = auto_game(1, 0, 0);
        assert_eq!(
            game.advance(),
            Some(Move {
                pile: Pile::Red,
                count: 1
            })
        );
        assert_eq!(game.winner(), None);

        assert_eq!(game.advance(), None);
        assert_eq!(game.winner(), Some(Side::White));

        // A decided game stays decided.
        assert_eq!(game.advance(), None);
        assert_eq!(game.winner(), Some(Side::White));
    }

    #[test]
    fn resigning_player_loses() {
        struct Resigner;
        impl Player for Resigner {
            fn next_move(&mut self, _position: &Position) -> Option<Move> {
                None
            }
        }

        let mut game = Game::new(
            Position::new(5, 0, 0),
            Box::new(Resigner),
            Box::new(AutoPlayer::new()),
        );
        assert_eq!(game.advance(), None);
        assert_eq!(game.winner(), Some(Side::Black));
    }
}
