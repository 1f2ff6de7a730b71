//! Three-pile subtraction game with an exhaustive solver.
//!
//! Two players alternately remove any positive number of tokens from one of
//! three piles; whoever empties the board wins (normal play). The
//! [solver](crate::solver::Solver) determines the forced winner of any
//! [position](crate::position::Position) by full search over a shared
//! memoization table, and [`AutoPlayer`](crate::player::AutoPlayer) turns it
//! into a move provider for the [game loop](crate::game::Game).

#![warn(missing_docs)]

pub mod game;
pub mod player;
pub mod position;
pub mod solver;

mod display;
