//! Raw table → typed, ordered chart data points.

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::Color;
use crate::core::table::{CellValue, DataTable};

use super::settings::{ChartSettings, ResolvedSettings};
use super::value_format::format_category;
use super::zone::{TargetPresence, zone_color};

/// One bar of the chart, derived from one input row. Created fresh on every
/// transform and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartDataPoint {
    pub category: String,
    pub value: Option<f64>,
    pub ytd: Option<f64>,
    pub forecasted: Option<f64>,
    pub color: Color,
    /// Row ordinal; the host's interaction layer maps it to its own
    /// selection identity.
    pub selection_key: usize,
}

impl BarChartDataPoint {
    /// Forecast rows carry the literal indicator value `1`.
    #[must_use]
    pub fn is_forecast(&self) -> bool {
        self.forecasted == Some(1.0)
    }
}

/// Aggregate transform output, consumed by the layout and legend stages and
/// discarded after each render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub data_points: Vec<BarChartDataPoint>,
    /// Maximum across measure, YTD target, and full-year target; `0` means
    /// nothing to render.
    pub data_max: f64,
    pub full_year_target: Option<f64>,
    pub settings: ChartSettings,
    pub target_presence: TargetPresence,
    /// Display name of the YTD target series, for the legend.
    pub ytd_label: String,
    /// Display name of the full-year target series, for the legend.
    pub full_year_label: String,
    pub measure_format: Option<String>,
    pub target_format: Option<String>,
}

impl ViewModel {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Transforms the role-resolved table into a view model.
///
/// A table without a category or measure column degrades to the empty view
/// model; downstream layout treats `data_max == 0` as nothing to render.
#[must_use]
pub fn build_view_model(table: &DataTable, settings: &ResolvedSettings) -> ViewModel {
    let (Some(category), Some(measure)) = (table.category(), table.measure()) else {
        debug!("category or measure column missing, emitting empty view model");
        return ViewModel::empty();
    };

    let ytd = table.ytd_target();
    let forecasted = table.forecasted();
    let full_year_target = table.full_year_target().and_then(|column| column.series_max());

    let row_count = category.len().max(measure.len());
    let mut data_points = Vec::with_capacity(row_count);
    for index in 0..row_count {
        let value = measure.values.get(index).and_then(CellValue::as_f64);
        let ytd_value = ytd.and_then(|column| column.values.get(index)).and_then(CellValue::as_f64);
        let color = if ytd.is_some() {
            zone_color(&settings.zones, value, ytd_value)
        } else {
            settings.zones.default_color.clone()
        };

        data_points.push(BarChartDataPoint {
            category: category
                .values
                .get(index)
                .map(format_category)
                .unwrap_or_default(),
            value,
            ytd: ytd_value,
            forecasted: forecasted
                .and_then(|column| column.values.get(index))
                .and_then(CellValue::as_f64),
            color,
            selection_key: index,
        });
    }

    let data_max = [
        measure.series_max(),
        ytd.and_then(|column| column.series_max()),
        full_year_target,
    ]
    .into_iter()
    .map(|candidate| OrderedFloat(candidate.unwrap_or(0.0)))
    .max()
    .map(OrderedFloat::into_inner)
    .unwrap_or(0.0);

    ViewModel {
        data_points,
        data_max,
        full_year_target,
        settings: settings.chart,
        target_presence: TargetPresence::from_flags(ytd.is_some(), table.full_year_target().is_some()),
        ytd_label: ytd.map(|column| column.display_name.clone()).unwrap_or_default(),
        full_year_label: table
            .full_year_target()
            .map(|column| column.display_name.clone())
            .unwrap_or_default(),
        measure_format: measure.format.clone(),
        target_format: ytd.and_then(|column| column.format.clone()),
    }
}
