//! Analyze command - minimax values for every legal move in a position

use anyhow::Result;
use clap::Parser;

use super::play::parse_player_token;
use crate::{cli::output, minimax::MinimaxAgent, tictactoe::Board};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every legal move")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters in row-major order ('.' for empty),
    /// e.g. "XX.O....."
    pub board: String,

    /// Which side the agent plays
    #[arg(long, default_value = "o")]
    pub agent: String,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board: Board = args.board.parse()?;
    let agent_player = parse_player_token(&args.agent, "--agent")?;
    let agent = MinimaxAgent::new(agent_player);

    output::print_section("Position analysis");
    println!("{}", output::render_board(&board));

    let outcome = board.outcome();
    if outcome.is_terminal() {
        println!("Position is terminal: {outcome:?}");
        return Ok(());
    }

    println!("Move values for {agent_player} (positive favors the agent):\n");
    for (mv, value) in agent.evaluate_moves(&mut board) {
        output::print_kv(&mv.to_string(), &value.to_string());
    }

    let best = agent.best_move(&mut board)?;
    println!("\nBest move for {agent_player}: {best}");

    Ok(())
}
