//! Tooltip text for one data point.

use smallvec::SmallVec;

use super::value_format::{ValueFormatter, decimal_places_of};
use super::view_model::BarChartDataPoint;

pub const YTD_TOOLTIP_LABEL: &str = "YTD Target";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipEntry {
    pub label: String,
    pub value: String,
}

/// Display-ready labeled values for one data point.
///
/// Each value renders with exactly as many decimals as its own literal
/// representation carries. The YTD entry appears only when the point has a
/// non-zero YTD value.
#[must_use]
pub fn format_tooltip(
    point: &BarChartDataPoint,
    measure_format: Option<&str>,
    target_format: Option<&str>,
) -> SmallVec<[TooltipEntry; 2]> {
    let mut entries = SmallVec::new();

    let value_text = point
        .value
        .map(|value| {
            ValueFormatter::new(measure_format, 1.0, decimal_places_of(value)).format(value)
        })
        .unwrap_or_default();
    entries.push(TooltipEntry {
        label: point.category.clone(),
        value: value_text,
    });

    if let Some(ytd) = point.ytd.filter(|value| *value != 0.0) {
        entries.push(TooltipEntry {
            label: YTD_TOOLTIP_LABEL.to_owned(),
            value: ValueFormatter::new(target_format, 1.0, decimal_places_of(ytd)).format(ytd),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn point(value: Option<f64>, ytd: Option<f64>) -> BarChartDataPoint {
        BarChartDataPoint {
            category: "Monday, July 4, 2016".into(),
            value,
            ytd,
            forecasted: None,
            color: Color::new("#01B8AA"),
            selection_key: 0,
        }
    }

    #[test]
    fn measure_only_point_yields_one_entry() {
        let entries = format_tooltip(&point(Some(42.0), None), None, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Monday, July 4, 2016");
        assert_eq!(entries[0].value, "42");
    }

    #[test]
    fn ytd_value_adds_a_second_entry() {
        let entries = format_tooltip(&point(Some(99.95), Some(100.5)), None, None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "99.95");
        assert_eq!(entries[1].label, YTD_TOOLTIP_LABEL);
        assert_eq!(entries[1].value, "100.5");
    }

    #[test]
    fn precision_tracks_each_literal_independently() {
        let entries = format_tooltip(&point(Some(10.125), Some(20.0)), None, None);
        assert_eq!(entries[0].value, "10.125");
        assert_eq!(entries[1].value, "20");
    }

    #[test]
    fn missing_measure_renders_empty_text() {
        let entries = format_tooltip(&point(None, None), None, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "");
    }
}
