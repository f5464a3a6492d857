//! Core types for laylife-core.
//!
//! This module defines the searchable [`SearchRecord`] together with the two
//! closed label sets it carries: the display [`Category`] and the symbolic
//! [`Icon`].

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One searchable entity of the site: a page, service, news item, legal
/// document, impact story or job opening.
///
/// Records are built once by [`crate::index::build_index`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Short display string. Never empty for records built from site content.
    pub title: String,
    /// Longer display string, may be empty.
    pub description: String,
    /// Destination path. Opaque, not validated.
    pub url: String,
    /// Display grouping. Contributes its label to the haystack.
    pub category: Category,
    /// Display-only glyph reference. Irrelevant to matching.
    pub icon: Icon,
}

impl SearchRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        category: Category,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            category,
            icon,
        }
    }

    /// The lowercase text a query is matched against:
    /// `title description category`, space-separated.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category).to_lowercase()
    }
}

/// Display grouping of a [`SearchRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Pages,
    Services,
    News,
    Impact,
    Legal,
    Careers,
}

static CATEGORY_LABELS: phf::Map<&'static str, Category> = phf_map! {
    "pages" => Category::Pages,
    "services" => Category::Services,
    "news" => Category::News,
    "impact" => Category::Impact,
    "legal" => Category::Legal,
    "careers" => Category::Careers,
};

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Pages,
        Category::Services,
        Category::News,
        Category::Impact,
        Category::Legal,
        Category::Careers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Pages => "Pages",
            Category::Services => "Services",
            Category::News => "News",
            Category::Impact => "Impact",
            Category::Legal => "Legal",
            Category::Careers => "Careers",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup of a category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORY_LABELS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Symbolic glyph shown next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Building,
    Users,
    Briefcase,
    Newspaper,
    FileText,
}

static ICON_LABELS: phf::Map<&'static str, Icon> = phf_map! {
    "building" => Icon::Building,
    "users" => Icon::Users,
    "briefcase" => Icon::Briefcase,
    "newspaper" => Icon::Newspaper,
    "filetext" => Icon::FileText,
    "file_text" => Icon::FileText,
};

impl Icon {
    pub fn label(self) -> &'static str {
        match self {
            Icon::Building => "Building",
            Icon::Users => "Users",
            Icon::Briefcase => "Briefcase",
            Icon::Newspaper => "Newspaper",
            Icon::FileText => "FileText",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ICON_LABELS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// A label that names none of the [`Category`] variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

/// A label that names none of the [`Icon`] variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: {0:?}")]
pub struct UnknownIcon(pub String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
