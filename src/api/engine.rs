use tracing::trace;

use crate::core::{PlotArea, StepRecordStore, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{
    ChartEngineConfig, DateLabelFormatterFn, DayAxisLabelFormatterFn, RenderStyle,
    StepAxisLabelFormatterFn,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the record batch and the view-local interaction state
/// (selection and annotation toggle), and turns them into render frames. All
/// mutation goes through `&mut self`; frame building is a pure read.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) plot: PlotArea,
    pub(super) style: RenderStyle,
    pub(super) store: StepRecordStore,
    pub(super) interaction: InteractionState,
    pub(super) date_label_formatter: DateLabelFormatterFn,
    pub(super) day_axis_label_formatter: DayAxisLabelFormatterFn,
    pub(super) step_axis_label_formatter: StepAxisLabelFormatterFn,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            bars = frame.bars.len(),
            rule = frame.rule.is_some(),
            annotation = frame.annotation.is_some(),
            "render frame"
        );
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
