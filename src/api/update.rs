//! One-call refresh pipeline: settings → view model → legend → layout.

use crate::core::table::DataTable;
use crate::core::types::Viewport;

use super::layout::{LayoutPlan, layout_chart};
use super::legend::{LegendPlan, layout_legend};
use super::settings::ResolvedSettings;
use super::settings_resolver::{SettingsObjects, resolve_settings};
use super::text_measure::TextMeasurer;
use super::view_model::{ViewModel, build_view_model};

/// Output of one refresh. Every field is rebuilt from scratch; nothing is
/// carried across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub settings: ResolvedSettings,
    pub view_model: ViewModel,
    pub legend: LegendPlan,
    /// `None` when there is nothing to render.
    pub layout: Option<LayoutPlan>,
}

/// Runs the full transform for one host refresh.
///
/// The legend is laid out first so its height can be carved out of the plot
/// area; it stays hidden when the chart itself will not render.
#[must_use]
pub fn build_update(
    table: &DataTable,
    objects: &SettingsObjects,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartUpdate {
    let settings = resolve_settings(objects);
    let view_model = build_view_model(table, &settings);

    let renderable = view_model.data_max != 0.0
        && f64::from(viewport.height) > super::layout::MIN_VIEWPORT_HEIGHT;
    let legend = if renderable {
        layout_legend(
            &view_model,
            &settings.legend,
            f64::from(viewport.width),
            measurer,
        )
    } else {
        LegendPlan::hidden()
    };

    let layout = layout_chart(&view_model, viewport, &settings, measurer, legend.height);

    ChartUpdate {
        settings,
        view_model,
        legend,
        layout,
    }
}
