use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

const TARGET_TICK_INTERVALS: f64 = 4.0;
const NICE_STEP_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Zero-based vertical axis for step counts.
///
/// The top of the domain is the data maximum rounded up to a "nice" tick step
/// so grid lines land on round numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepValueScale {
    domain_max: f64,
    tick_step: f64,
}

impl StepValueScale {
    /// Fits the axis to `max_value`; an empty or all-zero batch yields `0..=1`.
    pub fn fit(max_value: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale maximum must be finite and >= 0".to_owned(),
            ));
        }
        if max_value == 0.0 {
            return Ok(Self {
                domain_max: 1.0,
                tick_step: 0.25,
            });
        }

        let tick_step = nice_step(max_value / TARGET_TICK_INTERVALS);
        let domain_max = (max_value / tick_step).ceil() * tick_step;
        Ok(Self {
            domain_max,
            tick_step,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn tick_step(self) -> f64 {
        self.tick_step
    }

    /// Tick values from zero up to and including the domain maximum.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        let count = (self.domain_max / self.tick_step).round() as usize;
        (0..=count)
            .map(|index| index as f64 * self.tick_step)
            .collect()
    }

    pub fn value_to_pixel(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        LinearScale::new(0.0, self.domain_max)?.domain_to_pixel(value, (plot.bottom, plot.top))
    }
}

fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let multiplier = NICE_STEP_MULTIPLIERS
        .into_iter()
        .find(|candidate| *candidate >= normalized)
        .unwrap_or(10.0);
    multiplier * magnitude
}

#[cfg(test)]
mod tests {
    use super::StepValueScale;

    #[test]
    fn rounds_domain_up_to_tick_step() {
        let scale = StepValueScale::fit(999.0).expect("scale");
        assert!((scale.tick_step() - 250.0).abs() <= 1e-9);
        assert!((scale.domain_max() - 1000.0).abs() <= 1e-9);
        assert_eq!(scale.ticks().len(), 5);
    }

    #[test]
    fn empty_batch_uses_unit_domain() {
        let scale = StepValueScale::fit(0.0).expect("scale");
        assert!((scale.domain_max() - 1.0).abs() <= 1e-9);
    }
}
