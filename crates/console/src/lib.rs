pub mod cli;
pub mod errors;
pub mod render;
pub mod commands;
pub mod startup;

pub use cli::Cli;
pub use startup::{run, Portal};
