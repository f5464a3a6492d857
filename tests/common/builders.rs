//! Test builders: ergonomic constructors for `SearchRecord` corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use laylife_core::{Category, Icon, SearchRecord};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("Careers")
///     .description("Join our team")
///     .category(Category::Pages)
///     .build();
/// ```
pub struct RecordBuilder {
    title: String,
    description: String,
    url: Option<String>,
    category: Category,
    icon: Icon,
}

impl RecordBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: None,
            category: Category::Pages,
            icon: Icon::FileText,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Without an explicit url, one is derived from the title.
    pub fn build(self) -> SearchRecord {
        let url = self
            .url
            .unwrap_or_else(|| format!("/{}", self.title.to_lowercase().replace(' ', "-")));
        SearchRecord::new(self.title, self.description, url, self.category, self.icon)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Shorthand for a record with title, description and category.
pub fn record(title: &str, description: &str, category: Category) -> SearchRecord {
    RecordBuilder::new(title)
        .description(description)
        .category(category)
        .build()
}

/// Build `n` news records titled `Bulletin 0`, `Bulletin 1`, …
pub fn bulletins(n: usize) -> Vec<SearchRecord> {
    (0..n)
        .map(|i| {
            RecordBuilder::new(format!("Bulletin {i}"))
                .description("Weekly update from the lab")
                .category(Category::News)
                .icon(Icon::Newspaper)
                .build()
        })
        .collect()
}

/// Titles of `records`, in order.
pub fn titles<'a>(records: impl IntoIterator<Item = &'a SearchRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.title.clone()).collect()
}
