use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Horizontal calendar-day axis.
///
/// The axis covers `day_count` whole days starting at `first_day` midnight, so
/// each day owns a band of `plot.width() / day_count` pixels. Positions inside
/// a band are continuous: a pointer anywhere in the band maps to an instant of
/// that day, and marks placed "by day" sit at the band center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScale {
    first_day: NaiveDate,
    day_count: u32,
}

impl DayScale {
    pub fn new(first_day: NaiveDate, day_count: u32) -> ChartResult<Self> {
        if day_count == 0 {
            return Err(ChartError::InvalidData(
                "day scale must cover at least one day".to_owned(),
            ));
        }
        Ok(Self {
            first_day,
            day_count,
        })
    }

    /// Builds the axis spanning `oldest..=newest`.
    pub fn spanning(oldest: NaiveDate, newest: NaiveDate) -> ChartResult<Self> {
        let span = newest.signed_duration_since(oldest).num_days();
        if span < 0 {
            return Err(ChartError::InvalidData(format!(
                "day scale start {oldest} is after end {newest}"
            )));
        }
        let day_count = u32::try_from(span + 1).map_err(|_| {
            ChartError::InvalidData(format!("day scale span of {span} days is too large"))
        })?;
        Self::new(oldest, day_count)
    }

    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first_day + Days::new(u64::from(self.day_count - 1))
    }

    #[must_use]
    pub fn day_count(self) -> u32 {
        self.day_count
    }

    #[must_use]
    pub fn band_width(self, plot: PlotArea) -> f64 {
        plot.width() / f64::from(self.day_count)
    }

    /// Maps an instant onto the horizontal pixel axis without snapping.
    ///
    /// Instants outside the covered days extrapolate beyond the plot edges.
    pub fn instant_to_pixel(self, instant: NaiveDateTime, plot: PlotArea) -> ChartResult<f64> {
        let offset = self.seconds_from_origin(instant);
        self.linear()?.domain_to_pixel(offset, (plot.left, plot.right))
    }

    /// Maps a horizontal pixel back to the instant under it.
    pub fn pixel_to_instant(self, x: f64, plot: PlotArea) -> ChartResult<NaiveDateTime> {
        let offset = self
            .linear()?
            .pixel_to_domain(x, (plot.left, plot.right))?;
        let delta = TimeDelta::try_seconds(offset.round() as i64).ok_or_else(|| {
            ChartError::InvalidData(format!("pixel {x} maps outside the calendar range"))
        })?;
        self.origin().checked_add_signed(delta).ok_or_else(|| {
            ChartError::InvalidData(format!("pixel {x} maps outside the calendar range"))
        })
    }

    /// Clamps `instant` into the covered days, `first_day 00:00` to the last
    /// second of `last_day`.
    #[must_use]
    pub fn clamp_instant(self, instant: NaiveDateTime) -> NaiveDateTime {
        let start = self.origin();
        let end = TimeDelta::try_seconds(i64::from(self.day_count) * 86_400 - 1)
            .and_then(|span| start.checked_add_signed(span))
            .unwrap_or(start);
        instant.clamp(start, end)
    }

    /// Center of the band that owns `day`.
    ///
    /// Days outside the axis extrapolate band by band past the plot edges.
    #[must_use]
    pub fn day_center_x(self, day: NaiveDate, plot: PlotArea) -> f64 {
        let offset = day.signed_duration_since(self.first_day).num_days() as f64;
        plot.left + (offset + 0.5) * self.band_width(plot)
    }

    /// Zero-based band index of `day`, or `None` when the axis doesn't cover it.
    #[must_use]
    pub fn index_of(self, day: NaiveDate) -> Option<u32> {
        let offset = day.signed_duration_since(self.first_day).num_days();
        u32::try_from(offset)
            .ok()
            .filter(|index| *index < self.day_count)
    }

    fn origin(self) -> NaiveDateTime {
        self.first_day.and_time(NaiveTime::MIN)
    }

    fn seconds_from_origin(self, instant: NaiveDateTime) -> f64 {
        let delta = instant.signed_duration_since(self.origin());
        delta.num_milliseconds() as f64 / 1000.0
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(0.0, f64::from(self.day_count) * SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::DayScale;
    use crate::core::PlotArea;

    #[test]
    fn pixel_round_trip_stays_inside_band() {
        let first = NaiveDate::from_ymd_opt(2024, 11, 1).expect("date");
        let scale = DayScale::new(first, 16).expect("scale");
        let plot = PlotArea::new(0.0, 0.0, 320.0, 200.0).expect("plot");

        let instant = scale.pixel_to_instant(25.0, plot).expect("instant");
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2024, 11, 2).expect("date"));
        assert_eq!(scale.index_of(instant.date()), Some(1));
        let center = scale.day_center_x(instant.date(), plot);
        assert!((center - 30.0).abs() <= 1e-9);
    }

    #[test]
    fn right_edge_clamps_to_last_covered_day() {
        let first = NaiveDate::from_ymd_opt(2024, 11, 1).expect("date");
        let scale = DayScale::new(first, 16).expect("scale");
        let plot = PlotArea::new(0.0, 0.0, 320.0, 200.0).expect("plot");

        let edge = scale.pixel_to_instant(plot.right, plot).expect("instant");
        assert_eq!(edge.date(), NaiveDate::from_ymd_opt(2024, 11, 17).expect("date"));
        assert_eq!(scale.clamp_instant(edge).date(), scale.last_day());
    }
}
