use tracing::trace;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// drawing backend, and keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.line_count();
        self.last_rect_count = frame.rect_count();
        self.last_text_count = frame.text_count();
        self.last_frame = Some(frame.clone());
        trace!(
            lines = self.last_line_count,
            rects = self.last_rect_count,
            texts = self.last_text_count,
            "null renderer accepted frame"
        );
        Ok(())
    }
}
