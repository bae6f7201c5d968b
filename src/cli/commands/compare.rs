//! Compare command - Head-to-head series between two agents

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        commands::AgentKind,
        output::{create_progress, print_section, print_series},
    },
    config::RunConfig,
    pipeline::Arena,
    tictactoe::TicTacToe,
};

#[derive(Parser, Debug)]
#[command(about = "Compare two agents head-to-head")]
pub struct CompareArgs {
    /// Agent moving first (X)
    #[arg(value_enum)]
    pub first: AgentKind,

    /// Agent moving second (O)
    #[arg(value_enum)]
    pub second: AgentKind,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with learning parameters and outcome scores
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }
    let run = match &args.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };

    let (first_name, second_name) = if args.first == args.second {
        (
            format!("{}-1", args.first.label()),
            format!("{}-2", args.second.label()),
        )
    } else {
        (
            args.first.label().to_string(),
            args.second.label().to_string(),
        )
    };
    let mut first = args.first.build(first_name, args.seed, &run.learning)?;
    let mut second = args.second.build(
        second_name,
        args.seed.map(|seed| seed.wrapping_add(1)),
        &run.learning,
    )?;

    print_section(&format!("{} vs {}", first.name(), second.name()));
    let arena = Arena::new(TicTacToe, run.scores);
    let progress = create_progress(args.games as u64)?;
    let result = arena.run_series(first.as_mut(), second.as_mut(), args.games, |_, _| {
        progress.inc(1)
    })?;
    progress.finish_and_clear();

    print_series(&result);
    Ok(())
}
