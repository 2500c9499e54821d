//! Move-selection policies layered over the search.
//!
//! Difficulty tiers are not part of the search contract: they wrap
//! [`MinimaxAgent::best_move`] and sometimes substitute a uniformly
//! random legal move instead. The search itself never sees a difficulty
//! setting.

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::agent::MinimaxAgent;
use crate::tictactoe::{Board, Game, Move, Outcome, Player};

/// A source of moves for one side.
///
/// Implementors receive the board mutably because the optimal policy
/// walks it in place during search; every implementation must return the
/// board in its pre-call state.
pub trait Policy {
    /// Select a move on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty cell.
    fn select_move(&mut self, board: &mut Board) -> crate::Result<Move>;

    /// Policy name for reports and prompts
    fn name(&self) -> &str;
}

impl Policy for MinimaxAgent {
    fn select_move(&mut self, board: &mut Board) -> crate::Result<Move> {
        self.best_move(board)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}

/// Baseline policy: a uniformly random legal move
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random policy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn select_move(&mut self, board: &mut Board) -> crate::Result<Move> {
        random_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

fn random_move(board: &Board, rng: &mut StdRng) -> crate::Result<Move> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(crate::Error::NoValidMoves);
    }
    let index = rng.random_range(0..moves.len());
    Ok(moves[index])
}

/// Difficulty tier for play against the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Always a random legal move
    Easy,
    /// Optimal 70% of the time, random otherwise
    Medium,
    /// Always the search's best move
    Hard,
}

impl Difficulty {
    /// Probability of answering with the search's best move
    pub fn optimal_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 1.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Decorator that weakens an agent to a difficulty tier.
///
/// With probability `difficulty.optimal_probability()` the wrapped
/// agent's best move is played; otherwise a uniformly random legal move
/// is substituted.
pub struct DifficultyPolicy {
    agent: MinimaxAgent,
    difficulty: Difficulty,
    rng: StdRng,
}

impl DifficultyPolicy {
    pub fn new(agent: MinimaxAgent, difficulty: Difficulty) -> Self {
        Self::with_seed(agent, difficulty, random())
    }

    /// Create a difficulty policy with a deterministic seed
    pub fn with_seed(agent: MinimaxAgent, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            agent,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Policy for DifficultyPolicy {
    fn select_move(&mut self, board: &mut Board) -> crate::Result<Move> {
        let p = self.difficulty.optimal_probability();
        if p >= 1.0 || (p > 0.0 && self.rng.random::<f64>() < p) {
            self.agent.best_move(board)
        } else {
            random_move(board, &mut self.rng)
        }
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Drive one full game between two policies, X moving first.
///
/// # Errors
///
/// Propagates any policy error; a policy returning an illegal move
/// surfaces as [`Error::InvalidMove`](crate::Error::InvalidMove).
pub fn play_game(x: &mut dyn Policy, o: &mut dyn Policy) -> crate::Result<Outcome> {
    let mut game = Game::new();
    loop {
        let mv = match game.to_move() {
            Player::X => x.select_move(game.board_mut())?,
            Player::O => o.select_move(game.board_mut())?,
        };
        let outcome = game.play(mv)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}
