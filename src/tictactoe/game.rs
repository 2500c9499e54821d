//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// A game session: board, side to move, and the moves played so far.
///
/// Turn alternation lives here, in the caller layer. The [`Board`] itself
/// never tracks whose turn it is, and the outcome is always derived from
/// the board rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with X to move first
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Create a new game with a specified first player
    pub fn with_first_player(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, used to hand the board to the search for
    /// the duration of a `select_move` call.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Derive the current outcome from the board
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Play a move for the side to move.
    ///
    /// On success the mark is written, the move recorded, the turn
    /// flipped, and the resulting outcome returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) if the game
    /// already ended, or [`Error::InvalidMove`](crate::Error::InvalidMove)
    /// if the cell is occupied or out of bounds. Both leave the session
    /// unchanged; the console loop treats them as re-prompt signals.
    pub fn play(&mut self, mv: Move) -> crate::Result<Outcome> {
        if self.board.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if !self.board.apply_move(mv.row, mv.col, self.to_move) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        self.moves.push(mv);
        self.to_move = self.to_move.opponent();
        Ok(self.board.outcome())
    }

    /// Reset the session in place for a new game
    pub fn reset(&mut self, first: Player) {
        self.board.reset();
        self.to_move = first;
        self.moves.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Cell;

    #[test]
    fn test_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);

        game.play(Move::new(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().cell(0, 0), Cell::X);

        game.play(Move::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_invalid_move_rejected() {
        let mut game = Game::new();
        game.play(Move::new(0, 0)).unwrap();

        let err = game.play(Move::new(0, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 0, col: 0 }));
        // Session unchanged: still O to move
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.moves().len(), 1);

        let err = game.play(Move::new(3, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 3, col: 1 }));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        // X takes the top row
        game.play(Move::new(0, 0)).unwrap(); // X
        game.play(Move::new(1, 0)).unwrap(); // O
        game.play(Move::new(0, 1)).unwrap(); // X
        game.play(Move::new(1, 1)).unwrap(); // O
        let outcome = game.play(Move::new(0, 2)).unwrap(); // X

        assert_eq!(outcome, Outcome::Win(Player::X));
        assert_eq!(game.outcome(), Outcome::Win(Player::X));

        let err = game.play(Move::new(2, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.play(Move::new(0, 0)).unwrap();
        game.reset(Player::O);

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::O);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_draw_game() {
        let mut game = Game::new();
        // Classic draw sequence
        for (row, col) in [
            (0, 0), // X
            (0, 1), // O
            (0, 2), // X
            (1, 1), // O
            (1, 0), // X
            (2, 0), // O
            (1, 2), // X
            (2, 2), // O
            (2, 1), // X
        ] {
            game.play(Move::new(row, col)).unwrap();
        }

        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
