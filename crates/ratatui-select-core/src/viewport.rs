/// Vertical scroll state for the option list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    pub fn is_overflowing(&self) -> bool {
        self.content_h > self.viewport_h as u32
    }

    /// Content row shown at viewport row `row`, if any.
    pub fn content_row(&self, row: u16) -> Option<usize> {
        if row >= self.viewport_h {
            return None;
        }
        let idx = self.y as u64 + row as u64;
        (idx < self.content_h as u64).then_some(idx as usize)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut s = ViewportState::default();
        s.set_viewport(3);
        s.set_content(10);
        s.scroll_y_by(99);
        assert_eq!(s.y, 7);
        s.scroll_y_by(-2);
        assert_eq!(s.y, 5);
        s.set_content(4);
        assert_eq!(s.y, 1);
    }

    #[test]
    fn content_row_maps_viewport_rows() {
        let mut s = ViewportState::default();
        s.set_viewport(3);
        s.set_content(4);
        s.scroll_y_by(1);
        assert_eq!(s.content_row(0), Some(1));
        assert_eq!(s.content_row(2), Some(3));
        assert_eq!(s.content_row(3), None);

        s.set_content(1);
        assert_eq!(s.content_row(0), Some(0));
        assert_eq!(s.content_row(1), None);
    }
}
