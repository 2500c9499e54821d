//! Common test utilities for the agent test suite.
//!
//! This module provides game-driving helpers used across multiple tests.

use tictactoe_agent::{Outcome, Player, Policy, play_game};

/// Win/loss/draw counts from X's perspective
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Play `games` full games between the two policies, X moving first,
/// and tally the outcomes.
pub fn tally_games(x: &mut dyn Policy, o: &mut dyn Policy, games: usize) -> GameTally {
    let mut tally = GameTally::default();
    for _ in 0..games {
        match play_game(x, o).expect("game should run to completion") {
            Outcome::Win(Player::X) => tally.x_wins += 1,
            Outcome::Win(Player::O) => tally.o_wins += 1,
            Outcome::Draw => tally.draws += 1,
            Outcome::Ongoing => unreachable!("play_game only returns terminal outcomes"),
        }
    }
    tally
}
