use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto an arbitrary pixel range.
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

    /// Builds a scale over `[min, max]`. When the observed values are all
    /// equal the domain is widened by 1, or by the smallest step that still
    /// changes `min` at very large magnitudes.
    pub fn from_extent(min: f64, max: f64) -> ChartResult<Self> {
        if max == min {
            let step = 1.0_f64.max(min.abs() * f64::EPSILON * 2.0);
            let end = min + step;
            return if end.is_finite() {
                Self::new(min, end)
            } else {
                Self::new(min - step, min)
            };
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Half the domain width. Stays finite for any pair of finite bounds.
    #[must_use]
    pub fn half_span(self) -> f64 {
        self.domain_end * 0.5 - self.domain_start * 0.5
    }

    /// Maps `value` so that `domain_start` lands on `range_start` and
    /// `domain_end` on `range_end`. Ranges may be inverted (screen-space y).
    pub fn map(self, value: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let normalized = (value * 0.5 - self.domain_start * 0.5) / self.half_span();
        Ok(range_start + normalized * (range_end - range_start))
    }

    /// Domain value sitting at `fraction` of the way from start to end.
    #[must_use]
    pub fn value_at(self, fraction: f64) -> f64 {
        self.domain_start * (1.0 - fraction) + self.domain_end * fraction
    }
}
