//! Behavioral scenarios for the minimax agent through the public API.

use tictactoe_agent::{Board, MinimaxAgent, Move, Outcome, Player};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

#[test]
fn agent_blocks_the_open_row() {
    // X threatens the top row; the agent must block at (0, 2) even though
    // the position is lost against optimal X, because the block delays
    // the loss.
    let mut b = board("XX. ... ...");
    let agent = MinimaxAgent::new(Player::O);

    assert_eq!(agent.best_move(&mut b).unwrap(), Move::new(0, 2));
}

#[test]
fn agent_wins_immediately_when_possible() {
    let mut b = board("OO. X.. X..");
    let agent = MinimaxAgent::new(Player::O);

    assert_eq!(agent.best_move(&mut b).unwrap(), Move::new(0, 2));
}

#[test]
fn agent_prefers_the_quicker_of_two_forced_wins() {
    // Every legal move here wins for O eventually, but only (1, 2) wins
    // on the spot. The depth bias must select it over the earlier
    // row-major candidates.
    let mut b = board("..X OO. X..");
    let agent = MinimaxAgent::new(Player::O);

    assert_eq!(agent.best_move(&mut b).unwrap(), Move::new(1, 2));
}

#[test]
fn search_leaves_the_board_unchanged() {
    let mut b = board("X.O .X. ...");
    let snapshot = b;
    let agent = MinimaxAgent::new(Player::O);

    agent.score(&mut b, 0, true);
    assert_eq!(b, snapshot);

    agent.best_move(&mut b).unwrap();
    assert_eq!(b, snapshot);
}

#[test]
fn terminal_evaluation_follows_the_agent_perspective() {
    let agent = MinimaxAgent::new(Player::O);
    assert_eq!(agent.evaluate_terminal(&board("OOO XX. ...")), 10);
    assert_eq!(agent.evaluate_terminal(&board("XXX OO. ...")), -10);
}

#[test]
fn outcomes_derive_from_the_board() {
    assert_eq!(board("XO. ... ...").outcome(), Outcome::Ongoing);
    assert_eq!(board("XOX XOO OXX").outcome(), Outcome::Draw);
    assert_eq!(
        board("OOO XX. X..").outcome(),
        Outcome::Win(Player::O),
        "a completed line decides the outcome"
    );
}

#[test]
fn available_moves_match_empty_cells_in_row_major_order() {
    let b = board("X.O .X. ...");
    let moves = b.available_moves();

    assert_eq!(moves.len(), 9 - b.occupied_count());
    assert_eq!(
        moves,
        vec![
            Move::new(0, 1),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 0),
            Move::new(2, 1),
            Move::new(2, 2),
        ]
    );
}
