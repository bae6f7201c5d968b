//! Train command - Train the learning agent against an opponent

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::{AgentKind, play::play_session},
        output::{create_progress, format_number, print_kv, print_section, print_series},
    },
    config::RunConfig,
    pipeline::{Arena, SeriesResult},
    q_learning::QLearnerAgent,
    tictactoe::TicTacToe,
};

#[derive(Parser, Debug)]
#[command(about = "Train the learning agent")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    /// Opponent to train against
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    pub opponent: AgentKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with learning parameters and outcome scores
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Play against the trained agent afterwards
    #[arg(long)]
    pub play: bool,

    /// Learning rate used while playing against a human
    #[arg(long, default_value_t = 0.7)]
    pub play_learning_rate: f64,
}

#[derive(Debug, Serialize)]
struct TrainingSummary {
    opponent: &'static str,
    seed: Option<u64>,
    series: SeriesResult,
    learner: LearnerSummary,
}

#[derive(Debug, Serialize)]
struct LearnerSummary {
    episodes_learned: usize,
    known_states: usize,
    q_entries: usize,
    greedy_eps: f64,
    learning_rate: f64,
}

impl From<&QLearnerAgent<TicTacToe>> for LearnerSummary {
    fn from(learner: &QLearnerAgent<TicTacToe>) -> Self {
        Self {
            episodes_learned: learner.episodes_learned(),
            known_states: learner.known_states(),
            q_entries: learner.q_table_size(),
            greedy_eps: learner.greedy_eps(),
            learning_rate: learner.learning_rate(),
        }
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }
    if args.play && args.json {
        return Err(anyhow!("--play cannot be combined with --json"));
    }

    let run = match &args.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };
    let mut learning = run.learning.clone();
    if let Some(seed) = args.seed {
        learning.seed = Some(seed);
    }

    let mut learner = QLearnerAgent::<TicTacToe>::new("learner", &learning)?;
    let mut opponent = args.opponent.build(
        args.opponent.label(),
        args.seed.map(|seed| seed.wrapping_add(1)),
        &learning,
    )?;
    let arena = Arena::new(TicTacToe, run.scores);

    let progress = if args.json {
        None
    } else {
        print_section(&format!("Training learner vs {}", args.opponent.label()));
        Some(create_progress(args.games as u64)?)
    };
    let result = arena.run_series(&mut learner, opponent.as_mut(), args.games, |_, _| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    let learner_summary = LearnerSummary::from(&learner);
    if args.json {
        let summary = TrainingSummary {
            opponent: args.opponent.label(),
            seed: args.seed,
            series: result,
            learner: learner_summary,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_series(&result);
    print_kv("Known states", &format_number(learner_summary.known_states));
    print_kv("Q entries", &format_number(learner_summary.q_entries));
    print_kv("Greedy eps", &format!("{:.4}", learner_summary.greedy_eps));
    print_kv("Learning rate", &format!("{:.5}", learner_summary.learning_rate));

    if args.play {
        learner.set_learning_rate(args.play_learning_rate)?;
        play_session(&mut learner, false)?;
    }
    Ok(())
}
