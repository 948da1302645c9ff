//! Command-line front end for recurring-event expansion.

pub mod cli;
pub mod error;
