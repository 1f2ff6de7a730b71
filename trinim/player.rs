//! Move providers for the game loop.

use crate::position::{Fingerprint, Move, Position};
use crate::solver::{Analysis, Solver, TranspositionTable};
use std::collections::VecDeque;
use std::sync::Arc;

/// A side's move provider.
///
/// `None` means "no move": the board is already empty, or the player gives
/// up. The game loop treats it as a loss for the requesting side.
pub trait Player {
    /// Choose the next move for the side to move in `position`
    fn next_move(&mut self, position: &Position) -> Option<Move>;
}

/// Remainder of a previously computed line together with the fingerprint of
/// the position it continues from.
#[derive(Debug, Clone)]
struct CachedLine {
    expected: Fingerprint,
    line: VecDeque<Move>,
}

/// Solver-backed player.
///
/// Keeps the tail of the last computed line; as long as the opponent keeps
/// playing the predicted replies, subsequent moves come straight from the
/// cache instead of a fresh search. Any deviation is caught by the
/// fingerprint check on the next request and answered with a re-solve, so a
/// misprediction can cost time but never a wrong move.
#[derive(Debug, Default)]
pub struct AutoPlayer {
    solver: Solver,
    cached: Option<CachedLine>,
}

impl AutoPlayer {
    /// Create a player with its own fresh table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player sharing `table` with other solvers in the process
    pub const fn with_table(table: Arc<TranspositionTable>) -> Self {
        AutoPlayer {
            solver: Solver::with_table(table),
            cached: None,
        }
    }

    /// Underlying solver
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }
}

impl Player for AutoPlayer {
    fn next_move(&mut self, position: &Position) -> Option<Move> {
        let fingerprint = position.fingerprint();
        let mut cached = match self.cached.take() {
            Some(cached) if cached.expected == fingerprint => cached,
            _ => {
                let Analysis { line, .. } = self.solver.solve(position);
                CachedLine {
                    expected: fingerprint,
                    line: line.into(),
                }
            }
        };

        // An empty line means the board is finished: nothing to play.
        let chosen = cached.line.pop_front()?;

        // Keep the tail only while it still holds a predicted reply plus at
        // least one own follow-up; anything shorter re-solves next turn.
        if cached.line.len() >= 2 {
            let mut scratch = *position;
            scratch.forward(chosen);
            if let Some(reply) = cached.line.pop_front() {
                scratch.forward(reply);
            }
            self.cached = Some(CachedLine {
                expected: scratch.fingerprint(),
                line: cached.line,
            });
        }

        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Pile;

    const fn take(pile: Pile, count: u8) -> Move {
        Move { pile, count }
    }

    #[test]
    fn finished_board_yields_no_move() {
        let mut player = AutoPlayer::new();
        assert_eq!(player.next_move(&Position::new(0, 0, 0)), None);
    }

    #[test]
    fn winning_side_plays_the_first_winning_move() {
        let mut player = AutoPlayer::new();
        let m = player.next_move(&Position::new(1, 0, 0));
        assert_eq!(m, Some(take(Pile::Red, 1)));
    }

    #[test]
    fn losing_side_still_moves_while_tokens_remain() {
        let mut player = AutoPlayer::new();
        let position = Position::new(1, 1, 0);
        let m = player.next_move(&position).unwrap();
        assert!(position.legal_moves().contains(&m));
    }

    #[test]
    fn predicted_reply_is_served_from_the_cached_line() {
        let table = Arc::new(TranspositionTable::new());
        let mut player = AutoPlayer::with_table(Arc::clone(&table));
        let mut position = Position::new(1, 1, 1);

        let first = player.next_move(&position).unwrap();
        assert_eq!(first, take(Pile::Red, 1));
        position.forward(first);

        // Opponent answers exactly as anticipated.
        position.forward(take(Pile::Blue, 1));

        let entries = table.len();
        let second = player.next_move(&position).unwrap();
        assert_eq!(second, take(Pile::Green, 1));
        // No new positions were solved for the cached continuation.
        assert_eq!(table.len(), entries);
    }

    #[test]
    fn unexpected_reply_forces_a_fresh_solve() {
        let mut player = AutoPlayer::new();
        let mut position = Position::new(1, 1, 1);

        let first = player.next_move(&position).unwrap();
        position.forward(first);

        // Opponent deviates from the predicted blue take.
        position.forward(take(Pile::Green, 1));

        let second = player.next_move(&position).unwrap();
        assert_eq!(second, take(Pile::Blue, 1));
    }
}
