//! Baseline agents: uniform-random play and exact game-tree search

pub mod minimax;
pub mod random;

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
