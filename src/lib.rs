//! laylife: site search for Laylife Pharmaceutical.
//!
//! The binary wires three surfaces over the same [`laylife_core`] index:
//!
//! ```text
//!                      ┌──► palette (laylife-tui)
//! content ──► index ───┼──► `search` subcommand
//!                      └──► HTTP endpoint (server)
//! ```
//!
//! This crate exposes the HTTP layer and the plain-text output format so
//! integration tests can drive them directly.

pub mod server;

use laylife_core::SearchRecord;

/// One line of `laylife search` output: `[Category] Title -> url`.
pub fn format_record_line(record: &SearchRecord) -> String {
    format!("[{}] {} -> {}", record.category, record.title, record.url)
}
