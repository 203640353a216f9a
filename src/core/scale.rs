use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel coordinate. Finite inputs only.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::scale`].
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Categorical band scale: each category owns one equal-width slot of the
/// pixel range, in domain order.
///
/// The band width is the full slot, `(range_end - range_start) / len`; the
/// inner/outer paddings only inset the bar inside its slot. Defining the
/// band as the slot is what makes the minimum-band widening rule exact:
/// growing the range by `len * (min - band)` lands the new band precisely
/// on `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range_start: f64,
    range_end: f64,
    inner_padding: f64,
    outer_padding: f64,
}

impl BandScale {
    pub fn new(
        domain: Vec<String>,
        range_start: f64,
        range_end: f64,
        inner_padding: f64,
        outer_padding: f64,
    ) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&inner_padding) || !(0.0..1.0).contains(&outer_padding) {
            return Err(ChartError::InvalidData(
                "band paddings must be in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
            inner_padding,
            outer_padding,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Re-ranges the scale in place, keeping domain and paddings.
    pub fn set_range(&mut self, range_start: f64, range_end: f64) -> ChartResult<()> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(())
    }

    /// Full slot width allotted to one category.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        ((self.range_end - self.range_start) / self.domain.len() as f64).max(0.0)
    }

    /// Width of the bar drawn inside a slot.
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.band_width() * (1.0 - self.inner_padding)
    }

    /// Left pixel edge of the bar for slot `index`.
    #[must_use]
    pub fn bar_x(&self, index: usize) -> f64 {
        let step = self.band_width();
        self.range_start + step * (index as f64 + self.outer_padding / 2.0)
    }

    /// Horizontal center of the bar for slot `index`; anchor for connected
    /// line series and horizontal labels.
    #[must_use]
    pub fn center(&self, index: usize) -> f64 {
        self.bar_x(index) + self.bar_width() / 2.0
    }

    /// Slot index of a category, by exact label match.
    #[must_use]
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.iter().position(|entry| entry == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn domain(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("cat {i}")).collect()
    }

    #[test]
    fn linear_scale_maps_and_inverts() {
        let scale = LinearScale::new(0.0, 100.0, 200.0, 0.0).expect("valid scale");
        assert_relative_eq!(scale.scale(0.0), 200.0);
        assert_relative_eq!(scale.scale(100.0), 0.0);
        assert_relative_eq!(scale.scale(50.0), 100.0);
        assert_relative_eq!(scale.invert(100.0), 50.0);
    }

    #[test]
    fn linear_scale_rejects_degenerate_domain() {
        assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
        assert!(LinearScale::new(f64::NAN, 5.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn band_width_is_range_over_len() {
        let scale = BandScale::new(domain(4), 100.0, 500.0, 0.2, 0.3).expect("valid scale");
        assert_relative_eq!(scale.band_width(), 100.0);
        assert_relative_eq!(scale.bar_width(), 80.0);
    }

    #[test]
    fn bars_stay_inside_the_range() {
        let scale = BandScale::new(domain(5), 50.0, 550.0, 0.2, 0.3).expect("valid scale");
        let last = scale.len() - 1;
        assert!(scale.bar_x(0) >= 50.0);
        assert!(scale.bar_x(last) + scale.bar_width() <= 550.0 + 1e-9);
    }

    #[test]
    fn empty_domain_has_zero_band() {
        let scale = BandScale::new(Vec::new(), 0.0, 100.0, 0.2, 0.3).expect("valid scale");
        assert_eq!(scale.band_width(), 0.0);
        assert!(scale.is_empty());
    }

    #[test]
    fn inverted_range_clamps_band_to_zero() {
        let scale = BandScale::new(domain(3), 500.0, 100.0, 0.2, 0.3).expect("valid scale");
        assert_eq!(scale.band_width(), 0.0);
    }

    #[test]
    fn index_lookup_matches_domain_order() {
        let scale = BandScale::new(domain(3), 0.0, 300.0, 0.2, 0.3).expect("valid scale");
        assert_eq!(scale.index_of("cat 1"), Some(1));
        assert_eq!(scale.index_of("missing"), None);
    }
}
