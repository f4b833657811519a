//! CLI command implementations

mod config_gen;
mod generate;

pub use config_gen::*;
pub use generate::*;
