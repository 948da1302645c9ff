pub mod date;

pub use date::{format_date, parse_date};
