//! Play command - Human versus agent on the terminal

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::AgentKind,
        human::HumanAgent,
        output::{print_section, print_series},
    },
    config::{LearningConfig, OutcomeScores},
    pipeline::{Arena, SeriesResult},
    ports::{Agent, GameOutcome},
    tictactoe::{Player, TicTacToe},
};

#[derive(Parser, Debug)]
#[command(about = "Play against an agent")]
pub struct PlayArgs {
    /// Agent to play against
    #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
    pub opponent: AgentKind,

    /// Take the first move (play X)
    #[arg(long)]
    pub human_first: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut agent = args
        .opponent
        .build(args.opponent.label(), args.seed, &LearningConfig::default())?;
    play_session(agent.as_mut(), args.human_first)
}

/// Play games between the terminal user and `agent` until the user stops.
pub(crate) fn play_session(agent: &mut dyn Agent<TicTacToe>, human_first: bool) -> Result<()> {
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    let mut human = HumanAgent::stdio("You");
    let mut tally = if human_first {
        SeriesResult::new(human.name(), agent.name())
    } else {
        SeriesResult::new(agent.name(), human.name())
    };

    print_section(&format!("You vs {}", agent.name()));
    loop {
        let outcome = if human_first {
            arena.play_episode(&mut human, agent)?
        } else {
            arena.play_episode(agent, &mut human)?
        };
        tally.record(&outcome, &Player::X);

        if let GameOutcome::Win(winner) = outcome {
            let you = if human_first { Player::X } else { Player::O };
            println!("{}", if winner == you { "You win!" } else { "You lose." });
        }
        if !human.confirm("Play again? [y/N] ")? {
            break;
        }
    }

    print_series(&tally);
    Ok(())
}
