use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{ChartEngine, HorizontalOverflowStrategy};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn selected(&self) -> Option<NaiveDateTime> {
        self.interaction.selected()
    }

    /// Sets or clears the selection directly.
    ///
    /// Any instant is accepted, including days the batch doesn't cover.
    pub fn select(&mut self, selected: Option<NaiveDateTime>) {
        if self.interaction.select(selected) {
            trace!(?selected, "selection changed");
        }
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Instant under horizontal pixel `x`, clamped to the plotting area.
    ///
    /// Returns `None` while the batch is empty (there is no axis yet).
    pub fn instant_at_pixel(&self, x: f64) -> ChartResult<Option<NaiveDateTime>> {
        if !x.is_finite() {
            return Err(ChartError::InvalidData(
                "selection pointer x must be finite".to_owned(),
            ));
        }
        let Some(day_scale) = self.day_scale()? else {
            return Ok(None);
        };
        let instant = day_scale.pixel_to_instant(self.plot.clamp_x(x), self.plot)?;
        Ok(Some(day_scale.clamp_instant(instant)))
    }

    /// Hover selection: follows the pointer across the chart.
    pub fn pointer_move(&mut self, x: f64) -> ChartResult<()> {
        let instant = self.instant_at_pixel(x)?;
        if instant.is_some() {
            self.select(instant);
        }
        Ok(())
    }

    /// Pointer left the chart; drops a hover selection but not a drag in progress.
    pub fn pointer_leave(&mut self) {
        if self.interaction.mode() == InteractionMode::Idle {
            self.clear_selection();
        }
    }

    pub fn selection_drag_start(&mut self, x: f64) -> ChartResult<()> {
        let instant = self.instant_at_pixel(x)?;
        self.interaction.on_selection_start();
        if instant.is_some() {
            self.select(instant);
        }
        Ok(())
    }

    pub fn selection_drag_move(&mut self, x: f64) -> ChartResult<()> {
        if self.interaction.mode() != InteractionMode::Selecting {
            return Ok(());
        }
        let instant = self.instant_at_pixel(x)?;
        if instant.is_some() {
            self.select(instant);
        }
        Ok(())
    }

    /// Ends the drag gesture; lifting the pointer deselects.
    pub fn selection_drag_end(&mut self) {
        self.interaction.on_selection_end();
        self.clear_selection();
    }

    #[must_use]
    pub fn fit_to_chart(&self) -> bool {
        self.interaction.fit_to_chart()
    }

    /// Switches the annotation strategy. The selection is left as is; the next
    /// frame places the annotation under the new strategy.
    pub fn set_fit_to_chart(&mut self, fit_to_chart: bool) {
        if self.interaction.set_fit_to_chart(fit_to_chart) {
            debug!(
                fit_to_chart,
                strategy = ?self.horizontal_overflow_strategy(),
                "annotation strategy toggled"
            );
        }
    }

    pub fn toggle_fit_to_chart(&mut self) {
        self.set_fit_to_chart(!self.fit_to_chart());
    }

    #[must_use]
    pub fn horizontal_overflow_strategy(&self) -> HorizontalOverflowStrategy {
        HorizontalOverflowStrategy::from_fit_to_chart(self.fit_to_chart())
    }
}
