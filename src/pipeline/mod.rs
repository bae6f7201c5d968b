//! Match orchestration
//!
//! [`Arena`] drives two [`Agent`](crate::ports::Agent)s through episodes of a
//! [`Game`](crate::ports::Game) and tallies the outcomes in a [`SeriesResult`].

pub mod arena;

pub use arena::{Arena, SeriesResult};
