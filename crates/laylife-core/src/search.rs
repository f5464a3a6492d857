//! Query filter.
//!
//! A query is split into lowercase whitespace-delimited terms. A record
//! matches when every term occurs as a substring of its haystack
//! (`title description category`, lowercased). Matches keep the order of the
//! input records and are capped at [`MAX_RESULTS`]. There is no ranking.
//!
//! An empty or whitespace-only query yields no results at all.

use crate::types::SearchRecord;
use std::ops::Range;

/// Cap on the number of records a search returns.
pub const MAX_RESULTS: usize = 8;

/// A parsed free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn parse(input: &str) -> Self {
        let terms = input
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    /// Lowercase terms in the order they were typed.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when every term is a substring of `haystack`.
    ///
    /// `haystack` must already be lowercase. An empty query matches
    /// everything here; callers short-circuit it before filtering.
    pub fn matches(&self, haystack: &str) -> bool {
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

/// Records matching `query`, in input order, at most [`MAX_RESULTS`].
pub fn filter(query: &str, records: &[SearchRecord]) -> Vec<SearchRecord> {
    filter_with_limit(query, records, MAX_RESULTS)
}

/// Same as [`filter`] with a caller-chosen cap.
pub fn filter_with_limit(query: &str, records: &[SearchRecord], limit: usize) -> Vec<SearchRecord> {
    let query = Query::parse(query);
    if query.is_empty() {
        return Vec::new();
    }

    let matches: Vec<SearchRecord> = records
        .iter()
        .filter(|r| query.matches(&r.haystack()))
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(
        terms = query.terms.len(),
        records = records.len(),
        matches = matches.len(),
        "filter"
    );
    matches
}

/// Byte ranges of `text` where any term of `query` occurs, ignoring case.
///
/// Ranges are sorted, non-overlapping (touching or overlapping hits are
/// merged) and always fall on char boundaries of `text`.
pub fn highlight_spans(text: &str, query: &Query) -> Vec<Range<usize>> {
    if query.is_empty() || text.is_empty() {
        return Vec::new();
    }

    // Each lowercase char remembers the byte range of the source char it came
    // from; one source char may fold to several.
    let folded: Vec<(char, Range<usize>)> = text
        .char_indices()
        .flat_map(|(start, c)| {
            let end = start + c.len_utf8();
            c.to_lowercase().map(move |lc| (fold_sigma(lc), start..end))
        })
        .collect();

    let mut hits: Vec<Range<usize>> = Vec::new();
    for term in query.terms() {
        let needle: Vec<char> = term.chars().map(fold_sigma).collect();
        if needle.is_empty() || needle.len() > folded.len() {
            continue;
        }
        for i in 0..=folded.len() - needle.len() {
            let window = &folded[i..i + needle.len()];
            if window.iter().zip(&needle).all(|((c, _), n)| c == n) {
                hits.push(window[0].1.start..window[needle.len() - 1].1.end);
            }
        }
    }

    hits.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(hits.len());
    for hit in hits {
        match merged.last_mut() {
            Some(last) if hit.start <= last.end => last.end = last.end.max(hit.end),
            _ => merged.push(hit),
        }
    }
    merged
}

/// `str::to_lowercase` turns a word-final `Σ` into `ς`, per-char lowering
/// always gives `σ`. Compare both as `σ`.
fn fold_sigma(c: char) -> char {
    if c == 'ς' {
        'σ'
    } else {
        c
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Icon};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn two_records() -> Vec<SearchRecord> {
        vec![
            SearchRecord::new("Careers", "Join our team", "/careers", Category::Pages, Icon::Briefcase),
            SearchRecord::new("News", "Latest updates", "/news", Category::News, Icon::Newspaper),
        ]
    }

    fn titles(records: &[SearchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn parse_lowercases_and_splits_on_any_whitespace() {
        let q = Query::parse("  Care\tTEAM \n x ");
        assert_eq!(q.terms(), ["care", "team", "x"]);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n  ")]
    fn blank_query_returns_nothing(#[case] query: &str) {
        assert!(filter(query, &two_records()).is_empty());
    }

    #[test]
    fn single_term_matches_title_and_category() {
        assert_eq!(titles(&filter("news", &two_records())), ["News"]);
    }

    #[test]
    fn terms_may_match_different_fields() {
        // "care" hits the title, "team" the description.
        assert_eq!(titles(&filter("care team", &two_records())), ["Careers"]);
    }

    #[test]
    fn term_order_does_not_matter() {
        assert_eq!(
            filter("team care", &two_records()),
            filter("care team", &two_records())
        );
    }

    #[test]
    fn every_term_must_match() {
        assert!(filter("careers updates", &two_records()).is_empty());
    }

    #[test]
    fn unknown_term_returns_nothing() {
        assert!(filter("zzz-nonexistent", &two_records()).is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(filter("NEWS", &two_records()), filter("news", &two_records()));
    }

    #[test]
    fn substring_match_is_not_word_bounded() {
        // "date" lives inside "updates".
        assert_eq!(titles(&filter("date", &two_records())), ["News"]);
    }

    #[test]
    fn category_label_is_searchable() {
        assert_eq!(titles(&filter("pages", &two_records())), ["Careers"]);
    }

    #[test]
    fn results_are_capped() {
        let records: Vec<SearchRecord> = (0..20)
            .map(|i| {
                SearchRecord::new(
                    format!("Report {i}"),
                    "quarterly",
                    format!("/r/{i}"),
                    Category::News,
                    Icon::Newspaper,
                )
            })
            .collect();
        let found = filter("report", &records);
        assert_eq!(found.len(), MAX_RESULTS);
        assert_eq!(found[0].title, "Report 0");
        assert_eq!(found[7].title, "Report 7");
        assert_eq!(filter_with_limit("report", &records, 3).len(), 3);
    }

    #[test]
    fn highlight_finds_case_insensitive_hits() {
        let q = Query::parse("team");
        assert_eq!(highlight_spans("Join our TEAM", &q), vec![9..13]);
    }

    #[test]
    fn highlight_merges_overlapping_terms() {
        let q = Query::parse("care areer");
        assert_eq!(highlight_spans("Careers", &q), vec![0..6]);
    }

    #[test]
    fn highlight_reports_every_occurrence() {
        let q = Query::parse("a");
        assert_eq!(highlight_spans("banana", &q), vec![1..2, 3..4, 5..6]);
    }

    #[test]
    fn highlight_stays_on_char_boundaries() {
        let q = Query::parse("é");
        let text = "Caf\u{c9} au thé";
        let spans = highlight_spans(text, &q);
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert!(text.is_char_boundary(span.start));
            assert!(text.is_char_boundary(span.end));
            assert_eq!(text[span.clone()].to_lowercase(), "é");
        }
    }

    #[test]
    fn highlight_agrees_with_filter_on_final_sigma() {
        let records = vec![SearchRecord::new("ΟΔΟΣ", "", "/odos", Category::Pages, Icon::Building)];
        let q = Query::parse("ΟΔΟΣ");
        assert_eq!(q.terms(), ["οδος"]);
        assert_eq!(filter("ΟΔΟΣ", &records).len(), 1);
        assert_eq!(highlight_spans("ΟΔΟΣ", &q), vec![0..8]);
        assert_eq!(highlight_spans("ΟΔΟΣ ΝΕΟΣ", &Query::parse("οσ")), vec![4..8, 13..17]);
    }

    #[test]
    fn highlight_with_empty_query_is_empty() {
        assert!(highlight_spans("anything", &Query::default()).is_empty());
    }

    proptest::proptest! {
        #[test]
        fn highlight_spans_are_sorted_disjoint_and_on_boundaries(
            text in "[a-zA-Zé ]{0,30}",
            query in "[a-zé ]{0,8}",
        ) {
            let q = Query::parse(&query);
            let spans = highlight_spans(&text, &q);
            for span in &spans {
                proptest::prop_assert!(span.start < span.end);
                proptest::prop_assert!(text.is_char_boundary(span.start));
                proptest::prop_assert!(text.is_char_boundary(span.end));
            }
            for pair in spans.windows(2) {
                proptest::prop_assert!(pair[0].end < pair[1].start);
            }
            for span in &spans {
                let covered = text[span.clone()].to_lowercase();
                proptest::prop_assert!(
                    q.terms().iter().any(|t| covered.contains(t.as_str())),
                    "span {:?} ({:?}) holds no term of {:?}",
                    span,
                    covered,
                    q.terms()
                );
            }
        }
    }
}
