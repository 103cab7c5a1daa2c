//! Vertical scroll bookkeeping for section bodies.
//!
//! Offsets are in terminal rows. The content and viewport heights are measured
//! on every render, so the offset is clamped whenever either one changes.

use crate::ui::input::ViewAction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Records the latest measurements and clamps the offset to them.
    pub fn measure(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scrolls by `delta` rows (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let next = (i32::from(self.offset) + i32::from(delta)).clamp(0, i32::from(self.max_offset()));
        self.offset = next as u16;
    }

    pub fn scroll_pages(&mut self, pages: i16) {
        let delta = i32::from(self.viewport_height.max(1)).saturating_mul(i32::from(pages));
        self.scroll_lines(delta.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scrolls the least amount needed to bring `row` into view.
    pub fn reveal(&mut self, row: u16) {
        if row < self.offset {
            self.offset = row;
        } else if self.viewport_height > 0 && row >= self.offset + self.viewport_height {
            self.offset = row + 1 - self.viewport_height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Applies a scrolling action. Returns `false` for actions that are not
    /// about scrolling.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::ScrollLines(delta) => self.scroll_lines(delta),
            ViewAction::ScrollPages(pages) => self.scroll_pages(pages),
            ViewAction::Top => self.scroll_to_top(),
            ViewAction::Bottom => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut metrics = ScrollMetrics::default();
        metrics.measure(20, 5);

        metrics.scroll_lines(3);
        assert_eq!(metrics.offset(), 3);
        metrics.scroll_lines(-10);
        assert_eq!(metrics.offset(), 0);
        metrics.scroll_to_bottom();
        assert_eq!(metrics.offset(), 15);

        // Content shrinking below the offset pulls it back.
        metrics.measure(8, 5);
        assert_eq!(metrics.offset(), 3);
    }

    #[test]
    fn pages_follow_viewport_height() {
        let mut metrics = ScrollMetrics::default();
        metrics.measure(40, 4);
        assert!(metrics.apply(ViewAction::ScrollPages(2)));
        assert_eq!(metrics.offset(), 8);
        assert!(metrics.apply(ViewAction::ScrollPages(-1)));
        assert_eq!(metrics.offset(), 4);
        assert!(!metrics.apply(ViewAction::Open));
    }

    #[test]
    fn reveal_scrolls_minimally() {
        let mut metrics = ScrollMetrics::default();
        metrics.measure(30, 10);
        metrics.reveal(4);
        assert_eq!(metrics.offset(), 0);
        metrics.reveal(12);
        assert_eq!(metrics.offset(), 3);
        metrics.reveal(1);
        assert_eq!(metrics.offset(), 1);
        metrics.reveal(29);
        assert_eq!(metrics.offset(), 20);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut metrics = ScrollMetrics::default();
        metrics.measure(3, 10);
        metrics.scroll_lines(2);
        assert_eq!(metrics.offset(), 0);
        assert!(!metrics.is_scrollable());
    }
}
