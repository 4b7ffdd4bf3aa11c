//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Two lines under the maze: level and progress, then the latest message
pub struct StatusWidget<'a> {
    level: u32,
    best_level: Option<u32>,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    /// `level` is 1-based; `best_level` is `None` when progress is not kept
    pub fn new(level: u32, best_level: Option<u32>, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            level,
            best_level,
            message,
            theme,
        }
    }

    pub fn summary(&self) -> String {
        match self.best_level {
            Some(best) => format!("Level:{} Best:{}", self.level, best),
            None => format!("Level:{}", self.level),
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let width = usize::from(area.width);
        buf.set_stringn(
            area.x,
            area.y,
            self.summary(),
            width,
            Style::default().fg(self.theme.text),
        );
        if area.height > 1 {
            buf.set_stringn(
                area.x,
                area.y + 1,
                self.message,
                width,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
