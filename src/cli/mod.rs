//! Command-line front end for training, comparing and playing against agents

pub mod commands;
pub mod human;
pub mod output;
