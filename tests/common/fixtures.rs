//! Static corpora used across harnesses.

use super::builders::record;
use laylife_core::{Category, SearchRecord};

/// The two-record corpus used throughout the filter scenarios:
/// `Careers / Join our team / Pages` and `News / Latest updates / News`.
pub fn careers_and_news() -> Vec<SearchRecord> {
    vec![
        record("Careers", "Join our team", Category::Pages),
        record("News", "Latest updates", Category::News),
    ]
}

/// A mixed corpus touching every category, with overlapping vocabulary so
/// multi-term queries narrow progressively.
pub fn mixed_corpus() -> Vec<SearchRecord> {
    vec![
        record("Home", "Welcome to the clinic", Category::Pages),
        record("Vaccine Programme", "Cold-chain distribution to every state", Category::Services),
        record("Vaccine Trial Results", "Phase III results published", Category::News),
        record("Rural Clinics", "Community health across rural states", Category::Impact),
        record("Privacy Policy", "How we protect your data", Category::Legal),
        record("Lab Technician", "Quality position in Lagos - Full-time", Category::Careers),
        record("Trial Coordinator", "Medical Affairs position in Abuja - Full-time", Category::Careers),
    ]
}

/// Query strings worth throwing at any corpus.
pub const SAMPLE_QUERIES: &[&str] = &[
    "",
    "   ",
    "news",
    "NEWS",
    "care team",
    "vaccine",
    "trial results",
    "position abuja",
    "zzz-nonexistent",
    "a",
    "e",
];
