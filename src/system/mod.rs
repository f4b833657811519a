//! System-level modules
//!
//! - Logging initialization
//! - Panic handling per execution mode

pub mod logging;
pub mod panic_handler;
