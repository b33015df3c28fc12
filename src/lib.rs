pub mod cli;
pub mod commands;
pub mod hamming;
pub mod split;

pub use self::{cli::Cli, split::Splitter};
