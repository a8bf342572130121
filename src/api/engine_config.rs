use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

use super::LabelLocale;

/// Gutters between the square chart viewport and the plotting area.
///
/// `top` is the headroom the selection annotation is pinned into; `right` and
/// `bottom` hold value and day axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 8.0,
            top: 64.0,
            right: 52.0,
            bottom: 28.0,
        }
    }
}

impl PlotMargins {
    fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Geometry of the floating selection annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayoutConfig {
    pub font_size_px: f64,
    pub padding_x_px: f64,
    pub padding_y_px: f64,
    /// Gap between the annotation box bottom and the top of the rule.
    pub spacing_px: f64,
    pub corner_radius_px: f64,
}

impl Default for AnnotationLayoutConfig {
    fn default() -> Self {
        Self {
            font_size_px: 13.0,
            padding_x_px: 16.0,
            padding_y_px: 16.0,
            spacing_px: 4.0,
            corner_radius_px: 10.0,
        }
    }
}

impl AnnotationLayoutConfig {
    fn validate(self) -> ChartResult<Self> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "annotation font size must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("padding_x_px", self.padding_x_px),
            ("padding_y_px", self.padding_y_px),
            ("spacing_px", self.spacing_px),
            ("corner_radius_px", self.corner_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "annotation `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. `container` is the host area; the
/// chart itself always uses the largest square that fits inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub container: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub annotation: AnnotationLayoutConfig,
    /// Fraction of each day band left empty around its bar.
    #[serde(default = "default_bar_band_inset_ratio")]
    pub bar_band_inset_ratio: f64,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_max_day_labels")]
    pub max_day_labels: u32,
    /// Initial state of the annotation strategy toggle.
    #[serde(default)]
    pub fit_to_chart: bool,
    /// Locale of the default date, day and step labels.
    #[serde(default)]
    pub locale: LabelLocale,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(container: Viewport) -> Self {
        Self {
            container,
            margins: PlotMargins::default(),
            annotation: AnnotationLayoutConfig::default(),
            bar_band_inset_ratio: default_bar_band_inset_ratio(),
            axis_font_size_px: default_axis_font_size_px(),
            max_day_labels: default_max_day_labels(),
            fit_to_chart: false,
            locale: LabelLocale::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_annotation_layout(mut self, annotation: AnnotationLayoutConfig) -> Self {
        self.annotation = annotation;
        self
    }

    #[must_use]
    pub fn with_bar_band_inset_ratio(mut self, ratio: f64) -> Self {
        self.bar_band_inset_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_axis_font_size_px(mut self, font_size_px: f64) -> Self {
        self.axis_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_max_day_labels(mut self, max_day_labels: u32) -> Self {
        self.max_day_labels = max_day_labels;
        self
    }

    #[must_use]
    pub fn with_fit_to_chart(mut self, fit_to_chart: bool) -> Self {
        self.fit_to_chart = fit_to_chart;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Square chart viewport derived from the container.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::square_fit(self.container.width, self.container.height)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.container.width,
                height: self.container.height,
            });
        }
        self.margins.validate()?;
        self.annotation.validate()?;
        if !self.bar_band_inset_ratio.is_finite()
            || !(0.0..1.0).contains(&self.bar_band_inset_ratio)
        {
            return Err(ChartError::InvalidData(
                "bar band inset ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.axis_font_size_px.is_finite() || self.axis_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis font size must be finite and > 0".to_owned(),
            ));
        }
        if self.max_day_labels == 0 {
            return Err(ChartError::InvalidData(
                "max day labels must be >= 1".to_owned(),
            ));
        }
        self.plot_area_for(viewport).map(|_| ())
    }

    /// Plotting rectangle for `viewport` after removing the margins.
    pub fn plot_area_for(&self, viewport: Viewport) -> ChartResult<PlotArea> {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        PlotArea::new(
            self.margins.left,
            self.margins.top,
            width - self.margins.right,
            height - self.margins.bottom,
        )
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_bar_band_inset_ratio() -> f64 {
    0.2
}

fn default_axis_font_size_px() -> f64 {
    11.0
}

fn default_max_day_labels() -> u32 {
    6
}
