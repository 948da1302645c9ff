//! Shared configuration, errors and calendar-date helpers for the cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
