//! Exhaustive search for the forced winner of a position.

use crate::position::{Fingerprint, Move, Position, Side};
use dashmap::DashMap;
use std::sync::Arc;

/// Thread safe memoization table mapping solved positions to their forced
/// winner.
///
/// The winner is a pure function of the fingerprint, so entries are never
/// evicted or invalidated, and racing inserts of the same key are
/// idempotent. The table is an explicit shared structure (handed around via
/// [`Arc`]) rather than a global, so tests can build a fresh one per case.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    winners: DashMap<Fingerprint, Side, ahash::RandomState>,
}

impl TranspositionTable {
    /// Create new empty table
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of solved positions
    #[inline]
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    /// Check if the table stores any position
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Look up the winner of a previously solved position
    #[inline]
    pub fn lookup(&self, fingerprint: Fingerprint) -> Option<Side> {
        self.winners.get(&fingerprint).map(|winner| *winner)
    }

    /// Record the winner of a solved position
    #[inline]
    pub fn insert(&self, fingerprint: Fingerprint, winner: Side) {
        self.winners.insert(fingerprint, winner);
    }
}

/// Result of [`Solver::solve`]: the forced winner and a line realizing the
/// forced result.
///
/// The line is empty exactly when the position is already finished. When
/// the side to move is lost, every one of its moves loses equally, so at
/// such points the line records the largest take from the last nonempty
/// pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Side that wins under optimal play from both sides
    pub winner: Side,
    /// Moves from the analyzed position to the end of the game
    pub line: Vec<Move>,
}

/// Exhaustive minimax solver over a shared [`TranspositionTable`].
///
/// Recursion depth equals the number of tokens on the board at the search
/// root, so byte sized piles stay well inside the default call stack.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    table: Arc<TranspositionTable>,
}

impl Solver {
    /// Create a solver with its own fresh table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver backed by an existing shared table
    pub const fn with_table(table: Arc<TranspositionTable>) -> Self {
        Solver { table }
    }

    /// Memoization table backing this solver
    pub const fn table(&self) -> &Arc<TranspositionTable> {
        &self.table
    }

    /// Determine the forced winner of `position` and a full line realizing
    /// the result.
    pub fn solve(&self, position: &Position) -> Analysis {
        let mut scratch = *position;
        let winner = self.search(&mut scratch, 0);
        let line = self.principal_line(*position);
        Analysis { winner, line }
    }

    /// Full recursive search.
    ///
    /// The outer call never takes the memo shortcut, so the position
    /// actually asked about is always computed fresh; deeper calls both
    /// consult and populate the table.
    fn search(&self, position: &mut Position, depth: u16) -> Side {
        if position.is_finished() {
            // Normal play: whoever just emptied the board has won.
            return position.turn().opponent();
        }

        let fingerprint = position.fingerprint();
        if depth > 0 {
            if let Some(winner) = self.table.lookup(fingerprint) {
                return winner;
            }
        }

        let mover = position.turn();
        for m in position.legal_moves() {
            position.forward(m);
            let winner = self.search(position, depth + 1);
            position.back(m);

            // First winning move in enumeration order decides; remaining
            // alternatives are never explored.
            if winner == mover {
                self.table.insert(fingerprint, mover);
                return mover;
            }
        }

        let winner = mover.opponent();
        self.table.insert(fingerprint, winner);
        winner
    }

    /// Replay a line from `position` to the end of the game out of the
    /// table [`Self::search`] has just filled in.
    ///
    /// Every probe evaluates a child at depth 1 and therefore resolves via
    /// the memo, so the replay performs no further expansion.
    fn principal_line(&self, mut position: Position) -> Vec<Move> {
        let mut line = Vec::new();
        while !position.is_finished() {
            let mover = position.turn();
            let moves = position.legal_moves();
            let winning = moves.iter().copied().find(|&m| {
                position.forward(m);
                let winner = self.search(&mut position, 1);
                position.back(m);
                winner == mover
            });

            // A lost side has no winning move; grab a whole pile instead.
            let Some(chosen) = winning.or_else(|| moves.last().copied()) else {
                break;
            };
            line.push(chosen);
            position.forward(chosen);
        }
        line
    }
}
