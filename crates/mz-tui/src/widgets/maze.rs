//! Maze display widget
//!
//! Plays back the draw commands of one session frame. A layout unit is two
//! terminal columns wide and one row high, which keeps tiles roughly square.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};

use mz_core::{DrawCommand, Frame as MazeFrame, Rect as TileRect, SpriteBank, SpriteRef};

use crate::input::arrow;
use crate::theme::Theme;

/// Terminal columns per layout unit
pub const CELL_WIDTH: u16 = 2;

/// Hedge glyphs indexed by wall links (N=1, S=2, E=4, W=8)
const HEDGE_GLYPHS: [char; 16] = [
    '■', '╹', '╻', '┃', '╺', '┗', '┏', '┣', '╸', '┛', '┓', '┫', '━', '┻', '┳', '╋',
];

/// Trail glyphs indexed by the directions walked through a tile
const TRAIL_GLYPHS: [char; 16] = [
    ' ', '╵', '╷', '│', '╶', '└', '┌', '├', '╴', '┘', '┐', '┤', '─', '┴', '┬', '┼',
];

const EAST: u8 = 4;

const GOAL_GLYPH: char = '✿';

/// Intro bee, one wing pose per animation frame
const MASCOT_WINGS: [&str; 4] = ["\\ /", "- -", "/ \\", "- -"];
const MASCOT_BODY: &str = "(@)";

/// Glyph for a tile sprite at one-unit scale
pub fn sprite_glyph(sprite: SpriteRef) -> char {
    let index = usize::from(sprite.index & 0x0f);
    match sprite.bank {
        SpriteBank::Hedge => HEDGE_GLYPHS[index],
        SpriteBank::Floor => TRAIL_GLYPHS[index],
    }
}

/// Glyph for the right-hand column of a one-unit tile, continuing any
/// eastward line
fn sprite_fill(sprite: SpriteRef) -> char {
    if sprite.index & EAST == 0 {
        return ' ';
    }
    match sprite.bank {
        SpriteBank::Hedge => HEDGE_GLYPHS[usize::from(EAST | 8)],
        SpriteBank::Floor => TRAIL_GLYPHS[usize::from(EAST | 8)],
    }
}

/// Layout viewport (in units) for a maze drawn inside `inner`
pub fn viewport_for(inner: Rect) -> (u32, u32) {
    (
        u32::from(inner.width / CELL_WIDTH),
        u32::from(inner.height),
    )
}

/// Units to shift a frame by so the player stays in view when the maze is
/// larger than the `view_width x view_height` area.
pub fn scroll_for(frame: &MazeFrame, view_width: i32, view_height: i32) -> (i32, i32) {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    let mut player = None;
    for command in frame {
        match command {
            DrawCommand::Tile { rect, .. } => {
                let right = rect.x + rect.width as i32;
                let bottom = rect.y + rect.height as i32;
                bounds = Some(match bounds {
                    None => (rect.x, rect.y, right, bottom),
                    Some((l, t, r, b)) => {
                        (l.min(rect.x), t.min(rect.y), r.max(right), b.max(bottom))
                    }
                });
            }
            DrawCommand::Player { rect, .. } => player = Some(*rect),
            _ => {}
        }
    }

    let (Some((left, top, right, bottom)), Some(player)) = (bounds, player) else {
        return (0, 0);
    };
    (
        scroll_axis(left, right, player.x, view_width),
        scroll_axis(top, bottom, player.y, view_height),
    )
}

/// Centre on `at` without scrolling past either end of `start..end`
fn scroll_axis(start: i32, end: i32, at: i32, view: i32) -> i32 {
    if start >= 0 && end <= view {
        return 0;
    }
    if end - start <= view {
        return (view - (end - start)) / 2 - start;
    }
    (view / 2 - at).clamp(view - end, -start)
}

/// Widget for rendering one maze frame
pub struct MazeWidget<'a> {
    frame: &'a MazeFrame,
    theme: &'a Theme,
    /// Shift in units, set when the maze overflows the area
    scroll: (i32, i32),
}

impl<'a> MazeWidget<'a> {
    pub fn new(frame: &'a MazeFrame, theme: &'a Theme) -> Self {
        Self {
            frame,
            theme,
            scroll: (0, 0),
        }
    }

    fn shifted(&self, rect: TileRect) -> TileRect {
        TileRect {
            x: rect.x + self.scroll.0,
            y: rect.y + self.scroll.1,
            ..rect
        }
    }

    pub fn block(theme: &Theme) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Amazed ")
    }

    /// Area left for the maze once the border is drawn
    pub fn inner(area: Rect, theme: &Theme) -> Rect {
        Self::block(theme).inner(area)
    }

    fn draw_tile(&self, inner: Rect, rect: TileRect, sprite: SpriteRef, buf: &mut Buffer) {
        let rect = self.shifted(rect);
        let Some(area) = to_screen(inner, rect) else {
            return;
        };
        let color = match sprite.bank {
            SpriteBank::Hedge => self.theme.hedge,
            SpriteBank::Floor => self.theme.trail,
        };
        let style = Style::default().fg(color);

        if rect.width <= 1 {
            put(buf, area.x, area.y, sprite_glyph(sprite), style);
            if area.width > 1 {
                put(buf, area.x + 1, area.y, sprite_fill(sprite), style);
            }
            return;
        }

        let fill = match sprite.bank {
            SpriteBank::Hedge => '█',
            SpriteBank::Floor => ' ',
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                put(buf, x, y, fill, style);
            }
        }
        if sprite.bank == SpriteBank::Floor && sprite.index != 0 {
            let mid_x = area.x + area.width / 2;
            let mid_y = area.y + area.height / 2;
            put(buf, mid_x, mid_y, '·', style);
        }
    }

    fn draw_marker(&self, inner: Rect, rect: TileRect, ch: char, style: Style, buf: &mut Buffer) {
        if let Some(area) = to_screen(inner, self.shifted(rect)) {
            put(buf, area.x, area.y, ch, style);
        }
    }

    fn draw_banner(&self, inner: Rect, heading: &str, prompt: &str, buf: &mut Buffer) {
        let text_width = heading.chars().count().max(prompt.chars().count()) as u16;
        let width = (text_width + 4).min(inner.width);
        let height = 4.min(inner.height);
        let area = Rect::new(
            inner.x + (inner.width - width) / 2,
            inner.y + (inner.height - height) / 2,
            width,
            height,
        );

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_banner));
        let body = block.inner(area);
        block.render(area, buf);

        centered(
            buf,
            body,
            body.y,
            heading,
            Style::default().fg(self.theme.accent).bold(),
        );
        if body.height > 1 {
            centered(
                buf,
                body,
                body.y + 1,
                prompt,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}

impl Widget for MazeWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let block = Self::block(self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let (view_width, view_height) = viewport_for(inner);
        self.scroll = scroll_for(self.frame, view_width as i32, view_height as i32);

        let middle = inner.y + inner.height / 2;
        for command in self.frame {
            match command {
                DrawCommand::Background => {
                    buf.set_style(inner, Style::default().bg(self.theme.floor));
                }
                DrawCommand::Tile { rect, sprite } => {
                    self.draw_tile(inner, *rect, *sprite, buf);
                }
                DrawCommand::Goal { rect } => {
                    let style = Style::default().fg(self.theme.goal).bold();
                    self.draw_marker(inner, *rect, GOAL_GLYPH, style, buf);
                }
                DrawCommand::Player {
                    rect,
                    facing,
                    frame,
                } => {
                    let mut style = Style::default().fg(self.theme.player);
                    if frame % 2 == 0 {
                        style = style.bold();
                    }
                    self.draw_marker(inner, *rect, arrow(*facing), style, buf);
                }
                DrawCommand::Mascot { frame, .. } => {
                    let style = Style::default().fg(self.theme.player);
                    let wings = MASCOT_WINGS[*frame as usize % MASCOT_WINGS.len()];
                    let top = middle.saturating_sub(3).max(inner.y);
                    centered(buf, inner, top, wings, style);
                    centered(buf, inner, top + 1, MASCOT_BODY, style.bold());
                }
                DrawCommand::Title(title) => {
                    let style = Style::default().fg(self.theme.accent).bold();
                    centered(buf, inner, middle, title, style);
                }
                DrawCommand::Prompt(prompt) => {
                    let style = Style::default().fg(self.theme.text_dim);
                    centered(buf, inner, middle + 2, prompt, style);
                }
                DrawCommand::Banner { heading, prompt } => {
                    self.draw_banner(inner, heading, prompt, buf);
                }
            }
        }
    }
}

/// Terminal area covered by a layout rectangle, clipped to `inner`.
/// Zero-sized sprites still cover one unit.
fn to_screen(inner: Rect, rect: TileRect) -> Option<Rect> {
    let cell_width = i32::from(CELL_WIDTH);
    let left = i32::from(inner.x) + rect.x * cell_width;
    let top = i32::from(inner.y) + rect.y;
    let right = left + rect.width.max(1) as i32 * cell_width;
    let bottom = top + rect.height.max(1) as i32;

    let left = left.max(i32::from(inner.left()));
    let top = top.max(i32::from(inner.top()));
    let right = right.min(i32::from(inner.right()));
    let bottom = bottom.min(i32::from(inner.bottom()));
    if left >= right || top >= bottom {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if y < area.top() || y >= area.bottom() {
        return;
    }
    let width = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, usize::from(area.width), style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hedge(index: u8) -> SpriteRef {
        SpriteRef {
            bank: SpriteBank::Hedge,
            index,
        }
    }

    #[test]
    fn test_glyph_tables_follow_direction_bits() {
        // N | S is a vertical run, E | W a horizontal one
        assert_eq!(sprite_glyph(hedge(1 | 2)), '┃');
        assert_eq!(sprite_glyph(hedge(4 | 8)), '━');
        let floor = SpriteRef {
            bank: SpriteBank::Floor,
            index: 0,
        };
        assert_eq!(sprite_glyph(floor), ' ');
    }

    #[test]
    fn test_fill_continues_east() {
        assert_eq!(sprite_fill(hedge(4)), '━');
        assert_eq!(sprite_fill(hedge(8)), ' ');
    }

    #[test]
    fn test_scroll_axis() {
        // Fits: no shift
        assert_eq!(scroll_axis(0, 8, 3, 10), 0);
        // Overflows: centre on the player...
        assert_eq!(scroll_axis(0, 40, 20, 10), -15);
        // ...but never past either end
        assert_eq!(scroll_axis(0, 40, 1, 10), 0);
        assert_eq!(scroll_axis(0, 40, 39, 10), -30);
        assert_eq!(scroll_axis(-5, 30, 0, 10), 5);
    }

    #[test]
    fn test_viewport_halves_width() {
        assert_eq!(viewport_for(Rect::new(0, 0, 41, 20)), (20, 20));
    }

    #[test]
    fn test_to_screen_clips() {
        let inner = Rect::new(1, 1, 10, 5);
        let rect = TileRect {
            x: 4,
            y: 4,
            width: 2,
            height: 2,
        };
        assert_eq!(to_screen(inner, rect), Some(Rect::new(9, 5, 2, 1)));

        let outside = TileRect {
            x: -3,
            y: 0,
            width: 1,
            height: 1,
        };
        assert_eq!(to_screen(inner, outside), None);
    }

    #[test]
    fn test_zero_sized_sprite_covers_a_unit() {
        let inner = Rect::new(0, 0, 10, 10);
        let rect = TileRect {
            x: 2,
            y: 3,
            width: 0,
            height: 0,
        };
        assert_eq!(to_screen(inner, rect), Some(Rect::new(4, 3, 2, 1)));
    }
}
