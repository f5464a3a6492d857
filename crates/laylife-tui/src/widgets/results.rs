//! Results widget: the list of matches under the query bar.
//!
//! Three states, as on the website's search modal:
//!
//! - empty query: a hint inviting the user to type, with sample queries;
//! - query without matches: `No results found for "<query>"`;
//! - otherwise one entry per match (icon, title, category badge and,
//!   optionally, the description) with query terms highlighted.
//!
//! `Nav(Up)` / `Nav(Down)` move the selection; it is clamped to the list and
//! reset to the first row whenever a new result set arrives.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use laylife_core::{highlight_spans, Icon, Query, SearchRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub const EMPTY_HINT: &str = "Start typing to search across the website";
pub const EMPTY_EXAMPLES: &str = "Try: \"careers\", \"manufacturing\", \"news\"";
pub const NO_RESULTS_HINT: &str = "Try different keywords";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsState {
    /// Query text the results were computed for, as typed.
    pub raw_query: String,
    query: Query,
    pub results: Vec<SearchRecord>,
    /// Index into `results` of the highlighted row.
    pub selected: usize,
}

impl ResultsState {
    /// Replace the result set. Selection goes back to the first row.
    pub fn set(&mut self, raw_query: &str, results: Vec<SearchRecord>) {
        self.raw_query = raw_query.to_string();
        self.query = Query::parse(raw_query);
        self.results = results;
        self.selected = 0;
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn selected_record(&self) -> Option<&SearchRecord> {
        self.results.get(self.selected)
    }

    pub fn handle(&mut self, event: &AppEvent) {
        if self.results.is_empty() {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
                tracing::debug!(selected = self.selected, "results: up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
                tracing::debug!(selected = self.selected, "results: down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    state: &'a ResultsState,
    show_descriptions: bool,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(state: &'a ResultsState, show_descriptions: bool, theme: &'a Theme) -> Self {
        Self { state, show_descriptions, theme }
    }

    fn record_lines(&self, record: &'a SearchRecord, selected: bool) -> Vec<Line<'a>> {
        let query = self.state.query();
        let marker = if selected { "▶ " } else { "  " };

        let mut head = vec![
            Span::raw(marker),
            Span::styled(icon_glyph(record.icon), self.theme.result_icon),
            Span::raw(" "),
        ];
        head.extend(highlighted(
            &record.title,
            query,
            self.theme.result_title,
            self.theme.search_highlight,
        ));
        head.push(Span::raw("  "));
        head.push(Span::styled(
            format!("[{}]", record.category),
            self.theme.result_category,
        ));

        let mut lines = vec![Line::from(head)];
        if self.show_descriptions {
            let mut body = vec![Span::raw("    ")];
            body.extend(highlighted(
                &record.description,
                query,
                self.theme.result_description,
                self.theme.search_highlight,
            ));
            lines.push(Line::from(body));
        }

        if selected {
            lines = lines.into_iter().map(|l| l.patch_style(self.theme.selected)).collect();
        }
        lines
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Results ")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.query().is_empty() {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(EMPTY_HINT, self.theme.hint)),
                Line::from(Span::styled(EMPTY_EXAMPLES, self.theme.hint)),
            ];
            Paragraph::new(lines).alignment(Alignment::Center).render(inner, buf);
            return;
        }

        if self.state.results.is_empty() {
            let lines = vec![
                Line::default(),
                Line::from(format!("No results found for \"{}\"", self.state.raw_query)),
                Line::from(Span::styled(NO_RESULTS_HINT, self.theme.hint)),
            ];
            Paragraph::new(lines).alignment(Alignment::Center).render(inner, buf);
            return;
        }

        // Keep the selected record on screen.
        let per_record = if self.show_descriptions { 2 } else { 1 };
        let fits = (inner.height as usize / per_record).max(1);
        let offset = self.state.selected.saturating_sub(fits - 1);

        let lines: Vec<Line> = self
            .state
            .results
            .iter()
            .enumerate()
            .skip(offset)
            .take(fits)
            .flat_map(|(i, record)| self.record_lines(record, i == self.state.selected))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Single-width glyph standing in for a record's icon.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Building => "⌂",
        Icon::Users => "☺",
        Icon::Briefcase => "▣",
        Icon::Newspaper => "≡",
        Icon::FileText => "¶",
    }
}

/// Split `text` into spans, applying `hl` on top of `base` where a query
/// term occurs.
fn highlighted<'a>(text: &'a str, query: &Query, base: Style, hl: Style) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut pos = 0;
    for range in highlight_spans(text, query) {
        if range.start > pos {
            spans.push(Span::styled(&text[pos..range.start], base));
        }
        spans.push(Span::styled(&text[range.clone()], base.patch(hl)));
        pos = range.end;
    }
    if pos < text.len() {
        spans.push(Span::styled(&text[pos..], base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
