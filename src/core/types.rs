use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest square viewport that fits inside a `width` x `height` container.
    ///
    /// The chart keeps a 1:1 aspect ratio regardless of the host container.
    #[must_use]
    pub fn square_fit(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self {
            width: side,
            height: side,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Inner plotting rectangle in viewport pixel coordinates.
///
/// Bars, the selection rule and the fit-to-chart annotation bound all live
/// inside this rectangle; axis labels are drawn in the gutters around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        if !left.is_finite() || !top.is_finite() || !right.is_finite() || !bottom.is_finite() {
            return Err(ChartError::InvalidData(
                "plot area bounds must be finite".to_owned(),
            ));
        }
        if right <= left || bottom <= top {
            return Err(ChartError::InvalidData(format!(
                "plot area must be non-empty: left={left}, top={top}, right={right}, bottom={bottom}"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.clamp(self.left, self.right)
    }
}
