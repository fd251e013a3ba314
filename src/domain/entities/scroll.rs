/// Rows currently on screen, as reported by the list widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleRange {
    pub first_visible: usize,
    pub visible_count: usize,
    pub total_count: usize,
}

impl VisibleRange {
    /// Derives the visible rows of a list made of fixed-height rows.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_offset(
        offset_y: f32,
        viewport_height: f32,
        row_height: f32,
        total_count: usize,
    ) -> Self {
        if row_height <= 0.0 {
            return Self {
                first_visible: 0,
                visible_count: total_count,
                total_count,
            };
        }
        let first_visible = (offset_y.max(0.0) / row_height).floor() as usize;
        let visible_count = (viewport_height.max(0.0) / row_height).ceil() as usize;
        Self {
            first_visible: first_visible.min(total_count),
            visible_count,
            total_count,
        }
    }

    /// True once the last row is on screen. An empty list never reaches its end.
    pub const fn reaches_end(&self) -> bool {
        self.total_count > 0
            && self.first_visible.saturating_add(self.visible_count) >= self.total_count
    }
}
