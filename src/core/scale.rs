use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a domain interval onto a pixel interval.
///
/// The pixel interval may be reversed (`range_start > range_end`), which is how
/// the value axis maps larger counts to smaller `y` coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range: (f64, f64)) -> ChartResult<f64> {
        validate_range(range)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.0 + normalized * (range.1 - range.0))
    }

    pub fn pixel_to_domain(self, pixel: f64, range: (f64, f64)) -> ChartResult<f64> {
        validate_range(range)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.0) / (range.1 - range.0);
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_range(range: (f64, f64)) -> ChartResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
        return Err(ChartError::InvalidData(
            "pixel range must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_onto_reversed_pixel_range() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let y = scale.domain_to_pixel(25.0, (400.0, 0.0)).expect("to pixel");
        assert!((y - 300.0).abs() <= 1e-9);
        let back = scale.pixel_to_domain(y, (400.0, 0.0)).expect("to domain");
        assert!((back - 25.0).abs() <= 1e-9);
    }

    #[test]
    fn rejects_degenerate_domain() {
        assert!(LinearScale::new(5.0, 5.0).is_err());
    }
}
