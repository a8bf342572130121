use chrono::{NaiveDate, NaiveDateTime};

use crate::render::Renderer;

use super::label_formatter::{
    default_date_label, default_date_label_formatter, default_day_axis_label,
    default_day_axis_label_formatter, default_step_axis_label, default_step_axis_label_formatter,
};
use super::{ChartEngine, DateLabelFormatterFn, DayAxisLabelFormatterFn, StepAxisLabelFormatterFn};

impl<R: Renderer> ChartEngine<R> {
    /// Sets the formatter used for the selection annotation text.
    pub fn set_date_label_formatter(&mut self, formatter: DateLabelFormatterFn) {
        self.date_label_formatter = formatter;
    }

    /// Restores the default annotation format for the configured locale.
    pub fn clear_date_label_formatter(&mut self) {
        self.date_label_formatter = default_date_label_formatter(self.config.locale);
    }

    pub fn set_day_axis_label_formatter(&mut self, formatter: DayAxisLabelFormatterFn) {
        self.day_axis_label_formatter = formatter;
    }

    pub fn clear_day_axis_label_formatter(&mut self) {
        self.day_axis_label_formatter = default_day_axis_label_formatter(self.config.locale);
    }

    pub fn set_step_axis_label_formatter(&mut self, formatter: StepAxisLabelFormatterFn) {
        self.step_axis_label_formatter = formatter;
    }

    pub fn clear_step_axis_label_formatter(&mut self) {
        self.step_axis_label_formatter = default_step_axis_label_formatter(self.config.locale);
    }

    /// Annotation text for the current selection, if any.
    #[must_use]
    pub fn selected_date_label(&self) -> Option<String> {
        self.interaction
            .selected()
            .map(|instant| self.date_label_text(instant))
    }

    // Blank formatter output falls back to the locale default.
    pub(super) fn date_label_text(&self, instant: NaiveDateTime) -> String {
        non_empty_or((self.date_label_formatter)(instant), || {
            default_date_label(instant, self.config.locale)
        })
    }

    pub(super) fn day_axis_label_text(&self, day: NaiveDate) -> String {
        non_empty_or((self.day_axis_label_formatter)(day), || {
            default_day_axis_label(day, self.config.locale)
        })
    }

    pub(super) fn step_axis_label_text(&self, value: f64) -> String {
        non_empty_or((self.step_axis_label_formatter)(value), || {
            default_step_axis_label(value, self.config.locale)
        })
    }
}

fn non_empty_or(text: String, fallback: impl FnOnce() -> String) -> String {
    if text.trim().is_empty() { fallback() } else { text }
}
