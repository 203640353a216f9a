//! Resolved configuration structs.
//!
//! Each group mirrors one named object in the host configuration store.
//! Value-equality only; resolved once per render by
//! [`super::settings_resolver::resolve_settings`].

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Performance-zone thresholds (percent) and bar colors.
///
/// The thresholds partition `ratio = measure / ytd_target` into
/// `< zone1`, `[zone1, zone2)`, `>= zone2`. `default_color` applies when a
/// point has no target series at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneSettings {
    pub zone1_threshold: f64,
    pub zone2_threshold: f64,
    pub default_color: Color,
    pub zone1_color: Color,
    pub zone2_color: Color,
    pub zone3_color: Color,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            zone1_threshold: 90.0,
            zone2_threshold: 101.0,
            default_color: Color::new("#01B8AA"),
            zone1_color: Color::new("#fd625e"),
            zone2_color: Color::new("#f5d33f"),
            zone3_color: Color::new("#01b8aa"),
        }
    }
}

/// Y-axis label styling and unit selection.
///
/// `display_units` is the tick divisor; `0` selects the automatic unit from
/// the magnitude of the data maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub font_color: Color,
    pub font_size: f64,
    pub display_units: f64,
    pub decimal_places: usize,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            font_color: Color::new("#000000"),
            font_size: 12.0,
            display_units: 0.0,
            decimal_places: 0,
        }
    }
}

/// Styling for one target line (YTD polyline or full-year reference line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetLineSettings {
    pub show: bool,
    pub line_color: Color,
    pub stroke_size: f64,
}

impl Default for TargetLineSettings {
    fn default() -> Self {
        Self {
            show: true,
            line_color: Color::new("#000"),
            stroke_size: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub show: bool,
    pub label_color: Color,
    pub label_size: f64,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            show: true,
            label_color: Color::new("#000"),
            label_size: 12.0,
        }
    }
}

/// Chart-level toggles echoed into the view-model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub show_axis: bool,
}

/// Aggregate of every resolved setting group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedSettings {
    pub zones: ZoneSettings,
    pub axis: AxisSettings,
    pub ytd_target: TargetLineSettings,
    pub full_year_target: TargetLineSettings,
    pub legend: LegendSettings,
    pub chart: ChartSettings,
}
