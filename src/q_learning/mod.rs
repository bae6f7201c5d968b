//! Tabular reinforcement learning from whole episodes
//!
//! The learning agent keeps three tables keyed by canonical state:
//!
//! | Table | Maps | Default |
//! |-------|------|---------|
//! | Q | state → action → value | 0 |
//! | V | state → best Q value | 0 (terminal states forced to 0) |
//! | policy | state → greedy action | random legal action on first visit |
//!
//! Nothing is learned during play. When the terminal observation arrives the
//! recorded trajectory is walked backward once; each action taken at a state
//! with score `s`, followed by an observation with score `s'`, is updated as
//!
//! ```text
//! Q[s][a] ← (1 - α) Q[s][a] + α (s' - s + γ V[next])
//! V[s]    ← max_a Q[s][a]
//! ```
//!
//! after which the exploration and learning rates decay.
//!
//! ## Usage Example
//!
//! ```no_run
//! use xo::{config::LearningConfig, q_learning::QLearnerAgent, tictactoe::TicTacToe};
//!
//! let config = LearningConfig::default().with_seed(7);
//! let learner: QLearnerAgent<TicTacToe> = QLearnerAgent::new("learner", &config).unwrap();
//! ```

pub mod agent;
pub mod episode;
pub mod tables;

// Public re-exports
pub use agent::QLearnerAgent;
pub use episode::{Episode, Step, Transition};
pub use tables::QTable;
