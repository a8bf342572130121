//! Horizontal placement of the selection annotation.
//!
//! The annotation is pinned above the selection rule and is never moved
//! vertically: when the headroom above the plot is too small it is clipped by
//! the surface instead. Horizontal placement is delegated to a
//! [`HorizontalOverflowResolver`] chosen from [`HorizontalOverflowStrategy`].

use serde::{Deserialize, Serialize};

const OVERFLOW_EPSILON_PX: f64 = 1e-9;

/// Horizontal overflow strategy driven by the "fit to chart" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalOverflowStrategy {
    /// Centered on the rule; pushed back only when it would leave the chart
    /// surface. May extend past the plotting area into the axis gutters.
    #[default]
    Automatic,
    /// Kept fully inside the plotting area.
    FitToChart,
}

impl HorizontalOverflowStrategy {
    #[must_use]
    pub fn from_fit_to_chart(fit_to_chart: bool) -> Self {
        if fit_to_chart {
            Self::FitToChart
        } else {
            Self::Automatic
        }
    }

    #[must_use]
    pub fn resolver(self) -> &'static dyn HorizontalOverflowResolver {
        match self {
            Self::Automatic => &AutomaticOverflowResolver,
            Self::FitToChart => &FitToChartOverflowResolver,
        }
    }
}

/// Closed horizontal pixel interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBounds {
    pub left: f64,
    pub right: f64,
}

impl HorizontalBounds {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Total pixels of `[x, x + width]` lying outside these bounds.
    #[must_use]
    pub fn overflow_px(self, x: f64, width: f64) -> f64 {
        (self.left - x).max(0.0) + (x + width - self.right).max(0.0)
    }

    /// Shifts a box of `width` starting at `preferred_left` inward so it fits.
    ///
    /// A box wider than the bounds is centered on them, which keeps the total
    /// overflow at its minimum.
    #[must_use]
    pub fn contain(self, preferred_left: f64, width: f64) -> f64 {
        if width >= self.width() {
            return self.left + (self.width() - width) * 0.5;
        }
        preferred_left.clamp(self.left, self.right - width)
    }
}

/// Inputs for one annotation placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayoutRequest {
    /// Horizontal position of the selection rule.
    pub anchor_x: f64,
    /// Top of the selection rule; the box bottom sits `spacing_px` above it.
    pub anchor_top_y: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub spacing_px: f64,
    /// Plotting area (where bars and the rule live).
    pub plot_bounds: HorizontalBounds,
    /// Whole chart surface, gutters included.
    pub chart_bounds: HorizontalBounds,
}

impl AnnotationLayoutRequest {
    #[must_use]
    pub fn centered_left(&self) -> f64 {
        self.anchor_x - self.box_width * 0.5
    }
}

/// Resolves the left edge of the annotation box.
pub trait HorizontalOverflowResolver {
    fn resolve_left(&self, request: &AnnotationLayoutRequest) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutomaticOverflowResolver;

impl HorizontalOverflowResolver for AutomaticOverflowResolver {
    fn resolve_left(&self, request: &AnnotationLayoutRequest) -> f64 {
        request
            .chart_bounds
            .contain(request.centered_left(), request.box_width)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FitToChartOverflowResolver;

impl HorizontalOverflowResolver for FitToChartOverflowResolver {
    fn resolve_left(&self, request: &AnnotationLayoutRequest) -> f64 {
        request
            .plot_bounds
            .contain(request.centered_left(), request.box_width)
    }
}

/// Resolved annotation box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPlacement {
    pub strategy: HorizontalOverflowStrategy,
    pub anchor_x: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AnnotationPlacement {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn horizontal_overflow_px(self, bounds: HorizontalBounds) -> f64 {
        bounds.overflow_px(self.x, self.width)
    }

    /// Whether the box lies inside `bounds`, up to float rounding.
    #[must_use]
    pub fn is_within(self, bounds: HorizontalBounds) -> bool {
        self.horizontal_overflow_px(bounds) <= OVERFLOW_EPSILON_PX
    }
}

/// Places the annotation for `request` under `strategy`.
///
/// Vertical overflow resolution is disabled: `y` always puts the box bottom
/// `spacing_px` above `anchor_top_y`, even when that is above the surface.
#[must_use]
pub fn resolve_annotation_placement(
    request: &AnnotationLayoutRequest,
    strategy: HorizontalOverflowStrategy,
) -> AnnotationPlacement {
    let x = strategy.resolver().resolve_left(request);
    let y = request.anchor_top_y - request.spacing_px - request.box_height;
    AnnotationPlacement {
        strategy,
        anchor_x: request.anchor_x,
        x,
        y,
        width: request.box_width,
        height: request.box_height,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AnnotationLayoutRequest, HorizontalBounds, HorizontalOverflowStrategy,
        resolve_annotation_placement,
    };

    fn request(anchor_x: f64, box_width: f64) -> AnnotationLayoutRequest {
        AnnotationLayoutRequest {
            anchor_x,
            anchor_top_y: 64.0,
            box_width,
            box_height: 45.0,
            spacing_px: 4.0,
            plot_bounds: HorizontalBounds::new(8.0, 348.0),
            chart_bounds: HorizontalBounds::new(0.0, 400.0),
        }
    }

    #[test]
    fn automatic_keeps_centered_box_when_it_fits() {
        let placement = resolve_annotation_placement(
            &request(200.0, 100.0),
            HorizontalOverflowStrategy::Automatic,
        );
        assert!((placement.x - 150.0).abs() <= 1e-9);
        assert!((placement.y - 15.0).abs() <= 1e-9);
    }

    #[test]
    fn automatic_only_respects_chart_surface() {
        let placement = resolve_annotation_placement(
            &request(340.0, 120.0),
            HorizontalOverflowStrategy::Automatic,
        );
        assert!((placement.right() - 400.0).abs() <= 1e-9);
        assert!(placement.horizontal_overflow_px(HorizontalBounds::new(8.0, 348.0)) > 0.0);
    }

    #[test]
    fn fit_to_chart_clamps_into_plot() {
        let placement = resolve_annotation_placement(
            &request(340.0, 120.0),
            HorizontalOverflowStrategy::FitToChart,
        );
        assert!((placement.right() - 348.0).abs() <= 1e-9);
        assert!(placement.is_within(HorizontalBounds::new(8.0, 348.0)));
    }

    #[test]
    fn oversized_box_is_centered_on_plot() {
        let placement = resolve_annotation_placement(
            &request(20.0, 400.0),
            HorizontalOverflowStrategy::FitToChart,
        );
        assert!((placement.center_x() - 178.0).abs() <= 1e-9);
    }

    #[test]
    fn vertical_position_ignores_surface_top() {
        let mut req = request(200.0, 100.0);
        req.anchor_top_y = 10.0;
        let placement = resolve_annotation_placement(&req, HorizontalOverflowStrategy::FitToChart);
        assert!(placement.y < 0.0);
    }
}
