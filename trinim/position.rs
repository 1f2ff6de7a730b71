//! Board state of the three-pile subtraction game.

use crate::display;
use std::fmt::Display;

/// One of the three piles.
///
/// The colors are labels only; the game does not distinguish piles beyond
/// their identity and the fixed [`Pile::ALL`] enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pile {
    /// First pile
    Red,
    /// Second pile
    Green,
    /// Third pile
    Blue,
}

impl Pile {
    /// All piles, in the order used by [`Position::legal_moves`]
    pub const ALL: [Pile; 3] = [Pile::Red, Pile::Green, Pile::Blue];

    /// Parse a pile from its single-letter selector, case insensitive
    pub const fn from_letter(letter: char) -> Option<Pile> {
        match letter {
            'r' | 'R' => Some(Pile::Red),
            'g' | 'G' => Some(Pile::Green),
            'b' | 'B' => Some(Pile::Blue),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Red => write!(f, "red"),
            Pile::Green => write!(f, "green"),
            Pile::Blue => write!(f, "blue"),
        }
    }
}

/// A playing side. White moves first; every move passes the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Side making the first move
    White,
    /// Side making the second move
    Black,
}

impl Side {
    /// Opposite side
    #[inline(always)]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A single action: remove `count` tokens from `pile`.
///
/// `count` is strictly positive for any move produced by
/// [`Position::legal_moves`]. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Pile to take from
    pub pile: Pile,
    /// Number of tokens to remove
    pub count: u8,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.pile, self.count)
    }
}

/// Compact lossless encoding of a [`Position`], used as the memoization key.
///
/// Each pile count occupies one byte of the packed value and the side to
/// move the fourth, so two positions are equal if and only if their
/// fingerprints are. Pile counts beyond one byte are unrepresentable by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Get the underlying packed value
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Pile counts plus the side to move.
///
/// The search mutates a position in place via [`Position::forward`] /
/// [`Position::back`] pairs; the type is also `Copy`, so scratch copies for
/// speculative play are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    counts: [u8; 3],
    turn: Side,
}

impl Position {
    /// Create a starting position with the given pile sizes. White moves
    /// first.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Position {
            counts: [red, green, blue],
            turn: Side::White,
        }
    }

    /// Number of tokens left in `pile`
    #[inline]
    pub const fn count(&self, pile: Pile) -> u8 {
        self.counts[pile.index()]
    }

    /// Side to move
    #[inline]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    /// Total number of tokens on the board
    pub fn total(&self) -> u16 {
        self.counts.iter().map(|&count| u16::from(count)).sum()
    }

    /// Apply a move: remove its tokens and pass the turn.
    ///
    /// The move must come from [`Self::legal_moves`]; legality is not
    /// re-checked in release builds.
    pub fn forward(&mut self, m: Move) {
        debug_assert!(m.count > 0 && m.count <= self.count(m.pile));
        self.counts[m.pile.index()] -= m.count;
        self.turn = self.turn.opponent();
    }

    /// Exact inverse of [`Self::forward`]: put the tokens back and return
    /// the turn. Used to backtrack during search without allocating.
    pub fn back(&mut self, m: Move) {
        self.counts[m.pile.index()] += m.count;
        self.turn = self.turn.opponent();
    }

    /// All legal moves: for each nonempty pile in [`Pile::ALL`] order, one
    /// move per count from 1 up to the pile size.
    ///
    /// The order is significant — the solver commits to the first winning
    /// move it encounters in it. Empty exactly when [`Self::is_finished`].
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(usize::from(self.total()));
        for pile in Pile::ALL {
            for count in 1..=self.count(pile) {
                moves.push(Move { pile, count });
            }
        }
        moves
    }

    /// True when every pile is empty, i.e. the side to move has no move
    /// left and the previous mover has won.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.counts[0] == 0 && self.counts[1] == 0 && self.counts[2] == 0
    }

    /// Pack the position into its [`Fingerprint`].
    #[inline]
    pub const fn fingerprint(&self) -> Fingerprint {
        Fingerprint(
            self.counts[0] as u32
                | (self.counts[1] as u32) << 8
                | (self.counts[2] as u32) << 16
                | (matches!(self.turn, Side::White) as u32) << 24,
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position")?;
        display::parens(f, |f| display::commas(f, &self.counts))
    }
}

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for Pile {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&Pile::ALL).unwrap_or(&Pile::Red)
        }
    }

    impl Arbitrary for Side {
        fn arbitrary(g: &mut Gen) -> Self {
            if Arbitrary::arbitrary(g) {
                Side::White
            } else {
                Side::Black
            }
        }
    }

    impl Arbitrary for Position {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut position =
                Position::new(u8::arbitrary(g), u8::arbitrary(g), u8::arbitrary(g));
            position.turn = Side::arbitrary(g);
            position
        }
    }
}
