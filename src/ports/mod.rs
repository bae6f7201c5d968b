//! Ports (trait boundaries) between games, agents and the orchestrator.
//!
//! The core owns these traits. Concrete rule sets implement [`Game`], decision
//! makers implement [`Agent`], and the match driver only ever talks to the two
//! traits.

pub mod agent;
pub mod game;

pub use agent::Agent;
pub use game::{Game, GameOutcome};
