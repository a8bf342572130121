use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChartError, ChartResult};

/// Number of daily records produced by one generated batch (today + 15 days back).
pub const STEP_RECORD_COUNT: usize = 16;

/// Inclusive range of generated daily step counts.
pub const STEP_COUNT_RANGE: RangeInclusive<u32> = 500..=999;

/// One immutable daily step-count sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    id: Uuid,
    date: NaiveDate,
    steps: u32,
}

impl StepRecord {
    #[must_use]
    pub fn new(date: NaiveDate, steps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            steps,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

/// Ordered batch of step records, most recent day first.
///
/// The batch is replaced wholesale; individual records are never updated or
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecordStore {
    records: Vec<StepRecord>,
}

impl StepRecordStore {
    /// Generates `STEP_RECORD_COUNT` records ending at `today`, most recent first.
    pub fn generate<G: Rng>(today: NaiveDate, rng: &mut G) -> Self {
        let records = (0..STEP_RECORD_COUNT as u64)
            .map(|offset| {
                let date = today - Days::new(offset);
                StepRecord::new(date, rng.random_range(STEP_COUNT_RANGE))
            })
            .collect();
        Self { records }
    }

    /// Wraps a caller-provided batch after checking the day sequence.
    ///
    /// Dates must be unique and strictly consecutive, descending by one day.
    pub fn from_records(records: Vec<StepRecord>) -> ChartResult<Self> {
        for pair in records.windows(2) {
            let newer = pair[0].date;
            let older = pair[1].date;
            if newer.pred_opt() != Some(older) {
                return Err(ChartError::InvalidData(format!(
                    "step records must be consecutive descending days: {newer} followed by {older}"
                )));
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Most recent day covered by the batch.
    #[must_use]
    pub fn newest_day(&self) -> Option<NaiveDate> {
        self.records.first().map(StepRecord::date)
    }

    /// Oldest day covered by the batch.
    #[must_use]
    pub fn oldest_day(&self) -> Option<NaiveDate> {
        self.records.last().map(StepRecord::date)
    }

    #[must_use]
    pub fn max_steps(&self) -> Option<u32> {
        self.records.iter().map(StepRecord::steps).max()
    }

    #[must_use]
    pub fn record_for(&self, day: NaiveDate) -> Option<&StepRecord> {
        self.records.iter().find(|record| record.date == day)
    }
}
