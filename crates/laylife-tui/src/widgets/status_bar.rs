//! Status bar widget: the footer row under the results.
//!
//! Shows the close hint on the left and the result counter on the right.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub const CLOSE_HINT: &str = " Press ESC to close";

pub struct StatusBar<'a> {
    count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(count: usize, theme: &'a Theme) -> Self {
        Self { count, theme }
    }
}

/// `1 result`, `0 results`, `8 results`.
pub fn result_counter(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} result{plural}")
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(area.x, area.y, CLOSE_HINT, self.theme.hint);

        let counter = format!("{} ", result_counter(self.count));
        let x = area.right().saturating_sub(counter.len() as u16);
        buf.set_string(x, area.y, counter, self.theme.hint);
    }
}
