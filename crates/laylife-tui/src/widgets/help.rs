//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `F1` or `:help`; close with `F1` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub const BINDINGS: &[(&str, &str)] = &[
    ("type", "Search pages, services, news, careers"),
    ("↑  /  Ctrl+p", "Select previous result"),
    ("↓  /  Ctrl+n", "Select next result"),
    ("Enter", "Open the selected result"),
    ("← / →  Home / End", "Move the cursor in the query"),
    ("Ctrl+u", "Clear the query"),
    ("Escape", "Clear the query, or close when empty"),
    (":", "Command line (when the query is empty)"),
    ("F1", "Toggle this help popup"),
    ("Ctrl+c", "Quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" laylife keybindings (F1 to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
