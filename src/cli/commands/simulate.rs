//! Simulate command - run many games between two policies

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output,
    minimax::{Difficulty, DifficultyPolicy, MinimaxAgent, Policy, RandomPolicy, play_game},
    tictactoe::{Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Simulate games between two policies")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Policy for X (optimal, random, easy, medium, hard)
    #[arg(long, default_value = "optimal")]
    pub x: String,

    /// Policy for O (optimal, random, easy, medium, hard)
    #[arg(long, default_value = "random")]
    pub o: String,

    /// Base random seed; per-side seeds are derived from it
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Results of a simulation run, from X's perspective
#[derive(Debug, Default)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// Build a policy from its CLI token
fn build_policy(token: &str, player: Player, seed: u64) -> Result<Box<dyn Policy>> {
    match token.to_lowercase().as_str() {
        "optimal" => Ok(Box::new(MinimaxAgent::new(player))),
        "random" => Ok(Box::new(RandomPolicy::with_seed(seed))),
        tier => {
            let difficulty: Difficulty = tier.parse().map_err(|_| {
                anyhow::anyhow!(
                    "Unknown policy '{token}'. Supported: optimal, random, easy, medium, hard"
                )
            })?;
            Ok(Box::new(DifficultyPolicy::with_seed(
                MinimaxAgent::new(player),
                difficulty,
                seed,
            )))
        }
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let base_seed = args.seed.unwrap_or_else(rand::random);
    let mut x_policy = build_policy(&args.x, Player::X, base_seed)?;
    let mut o_policy = build_policy(&args.o, Player::O, base_seed.wrapping_add(1))?;

    output::print_section("Simulation");
    output::print_kv("X policy", x_policy.name());
    output::print_kv("O policy", o_policy.name());
    output::print_kv("Games", &args.games.to_string());
    output::print_kv("Seed", &base_seed.to_string());

    let pb = output::create_game_progress(args.games as u64);
    let mut tally = Tally::default();

    for _ in 0..args.games {
        let outcome = play_game(x_policy.as_mut(), o_policy.as_mut())?;
        tally.record(outcome);
        pb.set_message(format!(
            "X {} / O {} / draw {}",
            tally.x_wins, tally.o_wins, tally.draws
        ));
        pb.inc(1);
    }
    pb.finish();

    let total = args.games.max(1) as f64;
    output::print_section("Results");
    output::print_kv(
        "X wins",
        &format!("{} ({:.1}%)", tally.x_wins, tally.x_wins as f64 / total * 100.0),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({:.1}%)", tally.o_wins, tally.o_wins as f64 / total * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", tally.draws, tally.draws as f64 / total * 100.0),
    );

    if let Some(export_path) = &args.export {
        export_results(&tally, &args, base_seed, export_path)?;
        println!("\nReport exported to: {}", export_path.display());
    }

    Ok(())
}

/// Export the simulation report to JSON
fn export_results(tally: &Tally, args: &SimulateArgs, seed: u64, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct SimulationExport {
        config: ConfigSection,
        results: ResultsSection,
    }

    #[derive(Serialize)]
    struct ConfigSection {
        x_policy: String,
        o_policy: String,
        games: usize,
        seed: u64,
    }

    #[derive(Serialize)]
    struct ResultsSection {
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    }

    let export = SimulationExport {
        config: ConfigSection {
            x_policy: args.x.clone(),
            o_policy: args.o.clone(),
            games: args.games,
            seed,
        },
        results: ResultsSection {
            x_wins: tally.x_wins,
            o_wins: tally.o_wins,
            draws: tally.draws,
        },
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_policy_tokens() {
        assert_eq!(build_policy("optimal", Player::X, 0).unwrap().name(), "optimal");
        assert_eq!(build_policy("random", Player::X, 0).unwrap().name(), "random");
        assert_eq!(build_policy("Medium", Player::O, 0).unwrap().name(), "medium");
        assert!(build_policy("chaotic", Player::O, 0).is_err());
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win(Player::X));
        tally.record(Outcome::Win(Player::O));
        tally.record(Outcome::Draw);
        tally.record(Outcome::Draw);

        assert_eq!(tally.x_wins, 1);
        assert_eq!(tally.o_wins, 1);
        assert_eq!(tally.draws, 2);
    }
}
