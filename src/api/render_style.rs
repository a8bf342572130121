use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub bar_color: Color,
    pub bar_corner_radius_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub rule_color: Color,
    pub rule_width: f64,
    pub annotation_fill_color: Color,
    pub annotation_text_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.0, 0.478, 1.0),
            bar_corner_radius_px: 2.0,
            grid_line_color: Color::rgba(0.24, 0.24, 0.26, 0.18),
            grid_line_width: 1.0,
            axis_label_color: Color::rgb(0.45, 0.45, 0.47),
            rule_color: Color::rgba(0.47, 0.47, 0.5, 0.3),
            rule_width: 2.0,
            annotation_fill_color: Color::rgb(0.91, 0.91, 0.93),
            annotation_text_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.bar_color,
            self.grid_line_color,
            self.axis_label_color,
            self.rule_color,
            self.annotation_fill_color,
            self.annotation_text_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("rule_width", self.rule_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.bar_corner_radius_px.is_finite() || self.bar_corner_radius_px < 0.0 {
            return Err(ChartError::InvalidData(
                "render style `bar_corner_radius_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
