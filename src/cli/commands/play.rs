//! Play command - interactive console game against the agent

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    minimax::{Difficulty, DifficultyPolicy, MinimaxAgent, Policy},
    tictactoe::{Game, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the agent in the console")]
pub struct PlayArgs {
    /// Difficulty tier (easy, medium, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: String,

    /// Which token the human controls (`x` or `o`); X always moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Random seed for the easy/medium tiers
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse a player token from a CLI flag with flag context in the error
pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse::<Player>()
        .map_err(|err| anyhow::anyhow!("{flag}: {err}"))
}

/// Per-session score tally, reported from the human's perspective
#[derive(Debug, Default, Clone, Copy)]
struct Scoreboard {
    wins: usize,
    losses: usize,
    draws: usize,
}

impl Scoreboard {
    fn record(&mut self, outcome: Outcome, human: Player) {
        match outcome {
            Outcome::Win(winner) if winner == human => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    fn print(&self) {
        println!(
            "\nWins: {} | Losses: {} | Draws: {}",
            self.wins, self.losses, self.draws
        );
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let human = parse_player_token(&args.human, "--human")?;
    let agent_player = human.opponent();

    let agent = MinimaxAgent::new(agent_player);
    let mut policy = match args.seed {
        Some(seed) => DifficultyPolicy::with_seed(agent, difficulty, seed),
        None => DifficultyPolicy::new(agent, difficulty),
    };

    output::print_section("Tic-Tac-Toe vs AI");
    println!("You are {human}, the agent is {agent_player} (difficulty: {difficulty}).");
    println!("Enter moves as: row col (both 0-2).");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut scoreboard = Scoreboard::default();

    loop {
        let outcome = play_one_game(&mut input, &mut policy, human)?;
        scoreboard.record(outcome, human);
        scoreboard.print();

        if !prompt_yes_no(&mut input, "\nPlay again? (y/n): ")? {
            break;
        }
    }

    Ok(())
}

fn play_one_game(
    input: &mut impl BufRead,
    policy: &mut DifficultyPolicy,
    human: Player,
) -> Result<Outcome> {
    let mut game = Game::new();
    println!("\n{}", output::render_board(game.board()));

    loop {
        let mover = game.to_move();
        let mv = if mover == human {
            prompt_human_move(input, &game, human)?
        } else {
            let mv = policy.select_move(game.board_mut())?;
            println!("Agent plays {mv}");
            mv
        };

        let outcome = game.play(mv)?;
        println!("\n{}", output::render_board(game.board()));

        match outcome {
            Outcome::Ongoing => {}
            Outcome::Draw => {
                println!("It's a draw!");
                return Ok(outcome);
            }
            Outcome::Win(winner) if winner == human => {
                println!("You won!");
                return Ok(outcome);
            }
            Outcome::Win(_) => {
                println!("The agent wins!");
                return Ok(outcome);
            }
        }
    }
}

/// Prompt until the human enters a parseable, valid move.
///
/// Invalid input is never fatal: parse failures and occupied or
/// out-of-range cells print a hint and re-prompt.
fn prompt_human_move(input: &mut impl BufRead, game: &Game, human: Player) -> Result<Move> {
    loop {
        print!("Your move ({human}), row col: ");
        std::io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            anyhow::bail!("input closed before the game finished");
        };

        let mut parts = line.split_whitespace();
        let coords = (
            parts.next().and_then(|t| t.parse::<usize>().ok()),
            parts.next().and_then(|t| t.parse::<usize>().ok()),
        );
        let (Some(row), Some(col)) = coords else {
            println!("Please enter two numbers between 0 and 2.");
            continue;
        };

        if game.board().is_valid_move(row, col) {
            return Ok(Move::new(row, col));
        }
        println!("Invalid move! Cell is either occupied or out of bounds.");
    }
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    match read_line(input)? {
        Some(line) => Ok(line.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}

/// Read one line, returning `None` on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
