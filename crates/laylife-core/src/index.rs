//! Search index builder.
//!
//! [`build_index`] turns the static tables in [`crate::content`] into the
//! ordered list of [`SearchRecord`] values. [`SearchIndex`] wraps such a list
//! with each record's lowercase haystack computed once up front, so repeated
//! queries (one per keystroke, or one per HTTP request) skip the
//! concatenation.

use crate::content::{self, StaticEntry, CAREERS_POSITIONS_URL};
use crate::search::{Query, MAX_RESULTS};
use crate::types::{Category, Icon, SearchRecord};

/// Build the ordered record list from the site's static content.
///
/// Pages first, then services, news, impact stories, legal documents and
/// finally job openings. The same call always yields the same sequence.
pub fn build_index() -> Vec<SearchRecord> {
    let sections: [(&[StaticEntry], Category); 5] = [
        (content::PAGES, Category::Pages),
        (content::SERVICES, Category::Services),
        (content::NEWS, Category::News),
        (content::IMPACT, Category::Impact),
        (content::LEGAL, Category::Legal),
    ];

    let mut records: Vec<SearchRecord> = sections
        .iter()
        .flat_map(|(entries, category)| {
            entries.iter().map(move |e| {
                SearchRecord::new(e.title, e.description, e.url, *category, e.icon)
            })
        })
        .collect();

    records.extend(content::JOB_OPENINGS.iter().map(|job| {
        SearchRecord::new(
            job.title,
            job.summary(),
            CAREERS_POSITIONS_URL,
            Category::Careers,
            Icon::Briefcase,
        )
    }));

    records
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    record: SearchRecord,
    haystack: String,
}

/// Immutable record list with precomputed haystacks.
///
/// Read-only after construction; share it behind an `Arc` when several
/// callers query concurrently.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedRecord>,
}

impl SearchIndex {
    /// Index the site's static content.
    pub fn build() -> Self {
        Self::from_records(build_index())
    }

    /// Index an arbitrary record list, keeping its order.
    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| {
                let haystack = record.haystack();
                IndexedRecord { record, haystack }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records in index order.
    pub fn records(&self) -> impl Iterator<Item = &SearchRecord> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    /// Matches for `query`, capped at [`MAX_RESULTS`].
    pub fn search(&self, query: &str) -> Vec<&SearchRecord> {
        self.search_with_limit(query, MAX_RESULTS)
    }

    /// Matches for `query`, capped at `limit`.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        let query = Query::parse(query);
        if query.is_empty() {
            return Vec::new();
        }

        let matches: Vec<&SearchRecord> = self
            .entries
            .iter()
            .filter(|e| query.matches(&e.haystack))
            .map(|e| &e.record)
            .take(limit)
            .collect();

        tracing::debug!(
            terms = query.terms().len(),
            matches = matches.len(),
            limit,
            "index search"
        );
        matches
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
