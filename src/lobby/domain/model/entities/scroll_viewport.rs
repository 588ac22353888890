/// Horizontal scroll container state for the categories bar and the
/// per-category game rows. Arrow visibility is derived from the same
/// measurements the browser exposes: scroll offset, content width and
/// viewport width.
#[derive(Clone, Debug)]
pub struct ScrollViewport {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
    edge_threshold: f64,
}

impl ScrollViewport {
    pub fn new(content_width: f64, viewport_width: f64, edge_threshold: f64) -> Self {
        Self {
            offset: 0.0,
            content_width,
            viewport_width,
            edge_threshold,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn shows_left_arrow(&self) -> bool {
        self.offset > 0.0
    }

    /// The right arrow hides slightly before the true edge so a sub-pixel
    /// remainder does not leave a dead arrow visible.
    pub fn shows_right_arrow(&self) -> bool {
        self.offset < self.content_width - self.viewport_width - self.edge_threshold
    }

    pub fn scroll_right(&mut self, step: f64) {
        self.offset = (self.offset + step).min(self.max_offset());
    }

    pub fn scroll_left(&mut self, step: f64) {
        self.offset = (self.offset - step).max(0.0);
    }

    pub fn resize(&mut self, content_width: f64, viewport_width: f64) {
        self.content_width = content_width;
        self.viewport_width = viewport_width;
        self.offset = self.offset.min(self.max_offset());
    }
}
