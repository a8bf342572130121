use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotArea, StepBarGeometry, StepRecord, Viewport};
use crate::error::ChartResult;
use crate::interaction::{AnnotationStrategyToggle, SelectionState};
use crate::render::Renderer;

use super::{AnnotationPlacement, ChartEngine, HorizontalOverflowStrategy};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub records: Vec<StepRecord>,
    pub selection: SelectionState,
    pub toggle: AnnotationStrategyToggle,
    pub strategy: HorizontalOverflowStrategy,
    pub bars: Vec<StepBarGeometry>,
    pub annotation: Option<AnnotationPlacement>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            viewport: self.viewport,
            plot: self.plot,
            records: self.store.records().to_vec(),
            selection: self.interaction.selection(),
            toggle: self.interaction.toggle(),
            strategy: self.horizontal_overflow_strategy(),
            bars: self.project_bars()?,
            annotation: self.annotation_placement()?,
        })
    }

    /// Restores records, selection and toggle from a snapshot.
    ///
    /// Geometry is not restored; it is recomputed for the current viewport.
    pub fn restore_snapshot(&mut self, snapshot: &EngineSnapshot) -> ChartResult<()> {
        self.set_records(snapshot.records.clone())?;
        self.select(snapshot.selection.selected);
        self.set_fit_to_chart(snapshot.toggle.fit_to_chart);
        debug!(records = snapshot.records.len(), "restored engine snapshot");
        Ok(())
    }
}
