use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Formats the selected instant shown inside the annotation.
pub type DateLabelFormatterFn = Arc<dyn Fn(NaiveDateTime) -> String + Send + Sync + 'static>;
/// Formats a day tick on the horizontal axis.
pub type DayAxisLabelFormatterFn = Arc<dyn Fn(NaiveDate) -> String + Send + Sync + 'static>;
/// Formats a step-count tick on the vertical axis.
pub type StepAxisLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Locale preset used by the default label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EnGb,
    EsEs,
    DeDe,
}

impl LabelLocale {
    fn date_time_pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y, %-I:%M %p",
            Self::EnGb => "%d/%m/%Y, %H:%M",
            Self::EsEs => "%-d/%-m/%Y, %-H:%M",
            Self::DeDe => "%d.%m.%Y, %H:%M",
        }
    }

    fn day_pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%b %-d",
            Self::EnGb => "%-d %b",
            Self::EsEs => "%-d/%-m",
            Self::DeDe => "%-d.%-m.",
        }
    }

    fn thousands_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb => ',',
            Self::EsEs | Self::DeDe => '.',
        }
    }
}

/// Numeric date plus short time, e.g. `11/13/2024, 3:42 PM` for `EnUs` or
/// `13.11.2024, 15:42` for `DeDe`.
#[must_use]
pub fn default_date_label(instant: NaiveDateTime, locale: LabelLocale) -> String {
    instant.format(locale.date_time_pattern()).to_string()
}

/// Short day tick, e.g. `Nov 13` for `EnUs`.
#[must_use]
pub fn default_day_axis_label(day: NaiveDate, locale: LabelLocale) -> String {
    day.format(locale.day_pattern()).to_string()
}

/// Whole step count with the locale's thousands separator.
#[must_use]
pub fn default_step_axis_label(value: f64, locale: LabelLocale) -> String {
    let digits = format!("{:.0}", value.abs());
    let sign = if value.round() < 0.0 { "-" } else { "" };
    let separator = locale.thousands_separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

pub(super) fn default_date_label_formatter(locale: LabelLocale) -> DateLabelFormatterFn {
    Arc::new(move |instant| default_date_label(instant, locale))
}

pub(super) fn default_day_axis_label_formatter(locale: LabelLocale) -> DayAxisLabelFormatterFn {
    Arc::new(move |day| default_day_axis_label(day, locale))
}

pub(super) fn default_step_axis_label_formatter(locale: LabelLocale) -> StepAxisLabelFormatterFn {
    Arc::new(move |value| default_step_axis_label(value, locale))
}
