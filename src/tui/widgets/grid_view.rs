//! Grid widget: paints a grid session into a ratatui buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    symbols::line,
    widgets::{Clear, Widget},
};

use super::theme::Theme;
use crate::grid::{
    Clock, FrameScheduler, GridSession, ItemColor, Point, Rect2, StrokeStyle, Surface,
};

/// [`Surface`] over a buffer region; one layout unit is one cell.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub const fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Write one symbol at surface cell `(x, y)` if it lies inside the area.
    fn put(&mut self, x: i64, y: i64, symbol: &str, fg: Color) {
        let Some(position) = self.position(x, y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_symbol(symbol).set_fg(fg);
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn position(&self, x: i64, y: i64) -> Option<Position> {
        let inside = (0..i64::from(self.area.width)).contains(&x)
            && (0..i64::from(self.area.height)).contains(&y);
        inside.then(|| Position::new(self.area.x + x as u16, self.area.y + y as u16))
    }

    /// Cells covered by `rect`, as `(x0, y0, x1, y1)` with exclusive ends.
    #[allow(clippy::cast_possible_truncation)]
    fn cell_bounds(rect: Rect2) -> (i64, i64, i64, i64) {
        (
            rect.x.floor() as i64,
            rect.y.floor() as i64,
            (rect.x + rect.width).floor() as i64,
            (rect.y + rect.height).floor() as i64,
        )
    }

    /// Part of `start..end` inside `0..extent`.
    fn visible(start: i64, end: i64, extent: u16) -> std::ops::Range<i64> {
        start.max(0)..end.min(i64::from(extent))
    }
}

impl Surface for BufferSurface<'_> {
    fn clear(&mut self) {
        Clear.render(self.area, self.buf);
    }

    fn fill_rect(&mut self, rect: Rect2, color: ItemColor) {
        let (x0, y0, x1, y1) = Self::cell_bounds(rect);
        let style = Style::new().bg(Theme::item_fill(color));
        for y in Self::visible(y0, y1, self.area.height) {
            for x in Self::visible(x0, x1, self.area.width) {
                if let Some(cell) = self.position(x, y).and_then(|p| self.buf.cell_mut(p)) {
                    cell.set_symbol(" ").set_style(style);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect2, style: StrokeStyle) {
        let (x0, y0, x1, y1) = Self::cell_bounds(rect);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let (set, fg) = match style {
            StrokeStyle::ItemOutline => (line::NORMAL, Theme::ITEM_OUTLINE),
            StrokeStyle::Focus => (line::THICK, Theme::FOCUS_OUTLINE),
        };
        let (right, bottom) = (x1 - 1, y1 - 1);

        for x in Self::visible(x0, x1, self.area.width) {
            self.put(x, y0, set.horizontal, fg);
            self.put(x, bottom, set.horizontal, fg);
        }
        for y in Self::visible(y0, y1, self.area.height) {
            self.put(x0, y, set.vertical, fg);
            self.put(right, y, set.vertical, fg);
        }
        self.put(x0, y0, set.top_left, fg);
        self.put(right, y0, set.top_right, fg);
        self.put(x0, bottom, set.bottom_left, fg);
        self.put(right, bottom, set.bottom_right, fg);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn fill_text_centered(&mut self, text: &str, center: Point) {
        let width = text.chars().count() as i64;
        let start = center.x.floor() as i64 - width / 2;
        let y = center.y.floor() as i64;
        let mut utf8 = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i64, y, ch.encode_utf8(&mut utf8), Theme::ITEM_LABEL);
        }
    }
}

/// Widget painting the visible part of a grid session.
pub struct GridView<'a, C, S> {
    session: &'a GridSession<C, S>,
}

impl<'a, C, S> GridView<'a, C, S> {
    pub const fn new(session: &'a GridSession<C, S>) -> Self {
        Self { session }
    }
}

impl<C: Clock, S: FrameScheduler> Widget for GridView<'_, C, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area);
        self.session.paint(&mut surface);
    }
}
