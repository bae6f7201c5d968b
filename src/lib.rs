//! Turn-based two-player game framework with tic-tac-toe and three agents
//!
//! This crate provides:
//! - The [`Game`](ports::Game) and [`Agent`](ports::Agent) ports
//! - Tic-tac-toe rules with a compact canonical state key
//! - A uniform-random agent, a memoized minimax agent and an episodic
//!   tabular learner
//! - An [`Arena`](pipeline::Arena) that runs episodes and tallies outcomes
//! - The `xo` command-line front end

pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
