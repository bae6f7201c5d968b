//! Subcommand implementations for the `xo` binary

pub mod compare;
pub mod play;
pub mod train;

use clap::ValueEnum;

use crate::{
    agents::{MinimaxAgent, RandomAgent},
    config::LearningConfig,
    ports::Agent,
    q_learning::QLearnerAgent,
    tictactoe::TicTacToe,
};

/// Agents that can be named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Random,
    Minimax,
    Learner,
}

impl AgentKind {
    pub fn label(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::Learner => "learner",
        }
    }

    /// Build an agent of this kind; `seed` makes random choices reproducible.
    pub fn build(
        self,
        name: impl Into<String>,
        seed: Option<u64>,
        learning: &LearningConfig,
    ) -> crate::Result<Box<dyn Agent<TicTacToe>>> {
        let name = name.into();
        let agent: Box<dyn Agent<TicTacToe>> = match self {
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                None => Box::new(RandomAgent::new(name)),
            },
            AgentKind::Minimax => Box::new(MinimaxAgent::<TicTacToe>::new(name)),
            AgentKind::Learner => {
                let mut config = learning.clone();
                if let Some(seed) = seed {
                    config.seed = Some(seed);
                }
                Box::new(QLearnerAgent::<TicTacToe>::new(name, &config)?)
            }
        };
        Ok(agent)
    }
}
