use tracing::debug;

use crate::core::{StepRecordStore, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::label_formatter::{
    default_date_label_formatter, default_day_axis_label_formatter,
    default_step_axis_label_formatter,
};
use super::{ChartEngine, ChartEngineConfig, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty record batch and no selection.
    ///
    /// Hosts call `generate_records` once the view appears.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let viewport = config.viewport();
        let plot = config.plot_area_for(viewport)?;
        debug!(
            container_width = config.container.width,
            container_height = config.container.height,
            side = viewport.width,
            fit_to_chart = config.fit_to_chart,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            viewport,
            plot,
            style: RenderStyle::default(),
            store: StepRecordStore::default(),
            interaction: InteractionState::with_fit_to_chart(config.fit_to_chart),
            date_label_formatter: default_date_label_formatter(config.locale),
            day_axis_label_formatter: default_day_axis_label_formatter(config.locale),
            step_axis_label_formatter: default_step_axis_label_formatter(config.locale),
        })
    }

    /// Re-fits the square chart viewport into a resized host container.
    pub fn set_container_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::square_fit(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        let plot = self.config.plot_area_for(viewport)?;
        self.config.container = Viewport::new(width, height);
        self.viewport = viewport;
        self.plot = plot;
        debug!(width, height, side = viewport.width, "container resized");
        Ok(())
    }
}
