//! laylife-core: site search for Laylife Pharmaceutical.
//!
//! This crate holds the searchable record model, the static site content the
//! index is built from, the index builder and the query filter.
//!
//! # Architecture
//!
//! ```text
//! content ──► index (build_index / SearchIndex) ──► search (filter)
//!                                                      │
//!                                 palette, CLI, HTTP ◄─┘
//! ```
//!
//! Everything here is synchronous and side-effect free apart from
//! [`config::Config::load`].

pub mod config;
pub mod content;
pub mod index;
pub mod search;
pub mod types;

pub use index::{build_index, SearchIndex};
pub use search::{filter, filter_with_limit, highlight_spans, Query, MAX_RESULTS};
pub use types::{Category, Icon, SearchRecord};
