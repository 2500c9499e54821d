//! Optimal Tic-Tac-Toe agent
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board model with terminal detection
//! - Minimax search with alpha-beta pruning over a mutably borrowed board
//! - Difficulty policies that weaken the search's best-move output
//! - Console front end for interactive play, simulation, and analysis

pub mod cli;
pub mod error;
pub mod minimax;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minimax::{Difficulty, DifficultyPolicy, MinimaxAgent, Policy, RandomPolicy, play_game};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Player};
