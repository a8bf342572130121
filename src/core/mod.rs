pub mod bar_series;
pub mod day_scale;
pub mod scale;
pub mod step_record;
pub mod types;
pub mod value_scale;

pub use bar_series::{StepBarGeometry, project_step_bars};
pub use day_scale::DayScale;
pub use scale::LinearScale;
pub use step_record::{STEP_COUNT_RANGE, STEP_RECORD_COUNT, StepRecord, StepRecordStore};
pub use types::{PlotArea, Viewport};
pub use value_scale::StepValueScale;
