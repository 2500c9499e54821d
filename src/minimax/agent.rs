//! Minimax search with alpha-beta pruning.
//!
//! The agent explores the full remaining game tree by mutating the
//! borrowed board in place: apply a trial move, recurse, undo. No board
//! copies are made anywhere in the recursion, and every search call must
//! return the board byte-for-byte identical to its pre-call state.

use crate::tictactoe::{Board, Move, Outcome, Player};

/// Terminal score for a win by the maximizing side
const WIN_SCORE: i32 = 10;

/// Exhaustive game-tree search for one fixed side.
///
/// The agent is constructed for the side it plays (the maximizing side);
/// the opponent is the minimizing side. Both identities are immutable
/// after construction, and the agent holds no other state, so one
/// instance can be reused across any number of boards and games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxAgent {
    maximizer: Player,
    minimizer: Player,
}

impl MinimaxAgent {
    /// Create an agent playing as `agent_player`
    pub fn new(agent_player: Player) -> Self {
        MinimaxAgent {
            maximizer: agent_player,
            minimizer: agent_player.opponent(),
        }
    }

    /// The side this agent plays (the maximizing side)
    pub fn player(&self) -> Player {
        self.maximizer
    }

    /// The opposing side (the minimizing side)
    pub fn opponent(&self) -> Player {
        self.minimizer
    }

    /// Score a terminal board: +10 if the agent has won, -10 if the
    /// opponent has won, 0 otherwise. Pure function of `board.outcome()`.
    pub fn evaluate_terminal(&self, board: &Board) -> i32 {
        match board.outcome() {
            Outcome::Win(winner) if winner == self.maximizer => WIN_SCORE,
            Outcome::Win(_) => -WIN_SCORE,
            _ => 0,
        }
    }

    /// Minimax value of `board` for the side indicated by `maximizing`,
    /// assuming optimal play from both sides, with alpha-beta pruning.
    ///
    /// Alpha and beta start fresh at this call; within the call they are
    /// threaded by value through every level below. Terminal leaves are
    /// depth-biased so the agent prefers the quickest forced win and the
    /// slowest forced loss among otherwise equal continuations.
    pub fn score(&self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.score_bounded(board, depth, maximizing, i32::MIN, i32::MAX)
    }

    fn score_bounded(
        &self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if board.outcome().is_terminal() {
            // Depth bias applies at every leaf, not only at the root.
            let raw = self.evaluate_terminal(board);
            return if raw > 0 {
                raw - depth
            } else if raw < 0 {
                raw + depth
            } else {
                0
            };
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in board.available_moves() {
                let applied = board.apply_move(mv.row, mv.col, self.maximizer);
                debug_assert!(applied, "moves from available_moves are valid");

                let value = self.score_bounded(board, depth + 1, false, alpha, beta);
                board.clear_cell(mv);

                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in board.available_moves() {
                let applied = board.apply_move(mv.row, mv.col, self.minimizer);
                debug_assert!(applied, "moves from available_moves are valid");

                let value = self.score_bounded(board, depth + 1, true, alpha, beta);
                board.clear_cell(mv);

                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Score every legal move for the agent, in row-major order.
    ///
    /// Each candidate is applied, scored with a fresh alpha-beta window
    /// (pruning state is not shared across root candidates), and undone.
    pub fn evaluate_moves(&self, board: &mut Board) -> Vec<(Move, i32)> {
        let mut scored = Vec::new();
        for mv in board.available_moves() {
            let applied = board.apply_move(mv.row, mv.col, self.maximizer);
            debug_assert!(applied, "moves from available_moves are valid");

            let value = self.score(board, 1, false);
            board.clear_cell(mv);
            scored.push((mv, value));
        }
        scored
    }

    /// Pick the move maximizing the agent's guaranteed outcome.
    ///
    /// Candidates are tried in row-major order and the incumbent is only
    /// replaced on strict improvement, so the first of several
    /// equal-value moves wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board has no empty cell. Callers should check `outcome()` before
    /// asking for a move.
    pub fn best_move(&self, board: &mut Board) -> crate::Result<Move> {
        let mut best: Option<(Move, i32)> = None;
        for (mv, value) in self.evaluate_moves(board) {
            match best {
                Some((_, incumbent)) if value <= incumbent => {}
                _ => best = Some((mv, value)),
            }
        }
        best.map(|(mv, _)| mv).ok_or(crate::Error::NoValidMoves)
    }
}
