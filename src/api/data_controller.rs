use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::core::{
    DayScale, StepBarGeometry, StepRecord, StepRecordStore, StepValueScale, project_step_bars,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the batch with fresh random records ending today (local time).
    pub fn generate_records(&mut self) {
        let today = Local::now().date_naive();
        self.generate_records_with(today, &mut rand::rng());
    }

    /// Replaces the batch with random records ending at `today`.
    pub fn generate_records_with<G: Rng>(&mut self, today: NaiveDate, rng: &mut G) {
        self.store = StepRecordStore::generate(today, rng);
        debug!(
            count = self.store.len(),
            newest = %today,
            "generated step records"
        );
    }

    /// Replaces the batch with caller-provided records (most recent first).
    pub fn set_records(&mut self, records: Vec<StepRecord>) -> ChartResult<()> {
        self.store = StepRecordStore::from_records(records)?;
        debug!(count = self.store.len(), "set step records");
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        self.store.records()
    }

    #[must_use]
    pub fn record_store(&self) -> &StepRecordStore {
        &self.store
    }

    /// Horizontal day axis covering the batch, or `None` while it is empty.
    pub fn day_scale(&self) -> ChartResult<Option<DayScale>> {
        match (self.store.oldest_day(), self.store.newest_day()) {
            (Some(oldest), Some(newest)) => DayScale::spanning(oldest, newest).map(Some),
            _ => Ok(None),
        }
    }

    pub fn value_scale(&self) -> ChartResult<StepValueScale> {
        StepValueScale::fit(f64::from(self.store.max_steps().unwrap_or(0)))
    }

    /// Bar geometry for the current batch in viewport pixels.
    pub fn project_bars(&self) -> ChartResult<Vec<StepBarGeometry>> {
        let Some(day_scale) = self.day_scale()? else {
            return Ok(Vec::new());
        };
        project_step_bars(
            self.store.records(),
            day_scale,
            self.value_scale()?,
            self.plot,
            self.config.bar_band_inset_ratio,
        )
    }
}
