//! Ratatui widgets for the laylife palette.

pub mod command_bar;
pub mod help;
pub mod query_bar;
pub mod results;
pub mod status_bar;
