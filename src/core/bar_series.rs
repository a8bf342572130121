use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DayScale, PlotArea, StepRecord, StepValueScale};
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for one daily step bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepBarGeometry {
    pub date: NaiveDate,
    pub steps: u32,
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Projects step records into one bar per record.
///
/// Each bar is centered in its day band and narrowed by `band_inset_ratio`
/// (fraction of the band left empty, split on both sides). Bars grow from the
/// plot bottom up to the mapped step count.
pub fn project_step_bars(
    records: &[StepRecord],
    day_scale: DayScale,
    value_scale: StepValueScale,
    plot: PlotArea,
    band_inset_ratio: f64,
) -> ChartResult<Vec<StepBarGeometry>> {
    if !band_inset_ratio.is_finite() || !(0.0..1.0).contains(&band_inset_ratio) {
        return Err(ChartError::InvalidData(
            "bar band inset ratio must be finite and in [0, 1)".to_owned(),
        ));
    }

    let half_width = day_scale.band_width(plot) * (1.0 - band_inset_ratio) * 0.5;
    let mut bars = Vec::with_capacity(records.len());
    for record in records {
        let x_center = day_scale.day_center_x(record.date(), plot);
        let y_value = value_scale.value_to_pixel(f64::from(record.steps()), plot)?;
        bars.push(StepBarGeometry {
            date: record.date(),
            steps: record.steps(),
            x_center,
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(plot.bottom),
            y_bottom: plot.bottom,
        });
    }

    Ok(bars)
}
