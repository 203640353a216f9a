pub mod display_unit;
pub mod layout;
pub mod legend;
pub mod settings;
pub mod settings_resolver;
pub mod text_measure;
pub mod tooltip;
pub mod update;
pub mod value_format;
pub mod view_model;
pub mod zone;

pub use display_unit::{auto_display_unit, resolve_display_unit};
pub use layout::{
    BarPlan, LayoutPlan, LinePoint, TargetLinePlan, TickPlan, XAxisLabels, layout_chart,
};
pub use legend::{LegendEntry, LegendEntryKind, LegendPlan, layout_legend};
pub use settings::{
    AxisSettings, ChartSettings, LegendSettings, ResolvedSettings, TargetLineSettings,
    ZoneSettings,
};
pub use settings_resolver::{SettingsObjects, resolve_settings};
pub use text_measure::{EstimatingTextMeasurer, TextMeasurer};
pub use tooltip::{TooltipEntry, format_tooltip};
pub use update::{ChartUpdate, build_update};
pub use value_format::{ValueFormatter, decimal_places_of, format_category};
pub use view_model::{BarChartDataPoint, ViewModel, build_view_model};
pub use zone::{TargetPresence, zone_color};
