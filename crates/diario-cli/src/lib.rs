mod args;
mod commands;
mod handlers;
mod input;
mod style;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
