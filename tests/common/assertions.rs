//! Domain-specific assertion macros for laylife harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* search guarantee was violated.

/// Assert that a result list has exactly these titles, in order.
///
/// ```rust
/// assert_titles!(filter("news", &records), ["News"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($results:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<String> = $results.iter().map(|r| r.title.clone()).collect();
        let expected: Vec<String> = vec![$($title.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "result titles differ");
    }};
}

/// Assert that every returned record contains every lowercase term of
/// `query` in its haystack.
#[macro_export]
macro_rules! assert_all_match {
    ($results:expr, $query:expr) => {{
        let query = laylife_core::Query::parse($query);
        for r in $results.iter() {
            let haystack = r.haystack();
            for term in query.terms() {
                if !haystack.contains(term.as_str()) {
                    panic!(
                        "assert_all_match! failed: term {:?} missing from {:?}\n  haystack: {:?}",
                        term, r.title, haystack
                    );
                }
            }
        }
    }};
}

/// Assert that `results` appear in `records` in the same relative order.
#[macro_export]
macro_rules! assert_subsequence {
    ($results:expr, $records:expr) => {{
        let mut rest = $records.iter();
        for r in $results.iter() {
            if !rest.any(|candidate| candidate == r) {
                panic!(
                    "assert_subsequence! failed: {:?} is out of order or not in the corpus",
                    r.title
                );
            }
        }
    }};
}
