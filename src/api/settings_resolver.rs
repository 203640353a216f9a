//! Settings resolution from the host's group/property configuration store.
//!
//! Resolution is total: absent groups, absent properties, and mistyped
//! values all fall back to the defaults, and out-of-range numbers are
//! clamped. Nothing here ever fails.

use indexmap::IndexMap;
use serde_json::Value;

use crate::core::Color;

use super::settings::{
    AxisSettings, ChartSettings, LegendSettings, ResolvedSettings, TargetLineSettings,
    ZoneSettings,
};

const DECIMAL_PLACES_RANGE: (usize, usize) = (0, 4);
const STROKE_SIZE_RANGE: (f64, f64) = (1.0, 5.0);

/// Raw host configuration: named groups of named JSON properties, with
/// get-with-default lookup semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsObjects {
    groups: IndexMap<String, IndexMap<String, Value>>,
}

impl SettingsObjects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        group: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(property.into(), value.into());
    }

    fn get(&self, group: &str, property: &str) -> Option<&Value> {
        self.groups.get(group)?.get(property)
    }

    fn f64_or(&self, group: &str, property: &str, default: f64) -> f64 {
        self.get(group, property)
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }

    fn bool_or(&self, group: &str, property: &str, default: bool) -> bool {
        self.get(group, property)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Color lookup; accepts either a plain CSS string or the host's
    /// structured fill shape `{"solid": {"color": "..."}}`.
    fn color_or(&self, group: &str, property: &str, default: &Color) -> Color {
        let Some(value) = self.get(group, property) else {
            return default.clone();
        };
        if let Some(css) = value.as_str() {
            return Color::new(css);
        }
        value
            .get("solid")
            .and_then(|solid| solid.get("color"))
            .and_then(Value::as_str)
            .map(Color::new)
            .unwrap_or_else(|| default.clone())
    }
}

fn clamp_decimal_places(raw: f64) -> usize {
    let (min, max) = DECIMAL_PLACES_RANGE;
    if !raw.is_finite() {
        return min;
    }
    (raw.max(min as f64) as usize).min(max)
}

fn clamp_stroke_size(raw: f64) -> f64 {
    let (min, max) = STROKE_SIZE_RANGE;
    if !raw.is_finite() {
        return min;
    }
    raw.clamp(min, max)
}

fn resolve_target_line(objects: &SettingsObjects, group: &str) -> TargetLineSettings {
    let defaults = TargetLineSettings::default();
    TargetLineSettings {
        show: objects.bool_or(group, "show", defaults.show),
        line_color: objects.color_or(group, "lineColor", &defaults.line_color),
        stroke_size: clamp_stroke_size(objects.f64_or(
            group,
            "strokeSize",
            defaults.stroke_size,
        )),
    }
}

/// Merges the host configuration with the hard defaults for every group.
#[must_use]
pub fn resolve_settings(objects: &SettingsObjects) -> ResolvedSettings {
    let zone_defaults = ZoneSettings::default();
    let zones = ZoneSettings {
        zone1_threshold: objects.f64_or("zoneSettings", "zone1Value", zone_defaults.zone1_threshold),
        zone2_threshold: objects.f64_or("zoneSettings", "zone2Value", zone_defaults.zone2_threshold),
        default_color: objects.color_or("zoneSettings", "defaultColor", &zone_defaults.default_color),
        zone1_color: objects.color_or("zoneSettings", "zone1Color", &zone_defaults.zone1_color),
        zone2_color: objects.color_or("zoneSettings", "zone2Color", &zone_defaults.zone2_color),
        zone3_color: objects.color_or("zoneSettings", "zone3Color", &zone_defaults.zone3_color),
    };

    let axis_defaults = AxisSettings::default();
    let axis = AxisSettings {
        font_color: objects.color_or("yAxis", "fill", &axis_defaults.font_color),
        font_size: objects.f64_or("yAxis", "fontSize", axis_defaults.font_size),
        display_units: objects.f64_or("yAxis", "displayUnits", axis_defaults.display_units),
        decimal_places: clamp_decimal_places(objects.f64_or(
            "yAxis",
            "decimalPlaces",
            axis_defaults.decimal_places as f64,
        )),
    };

    let legend_defaults = LegendSettings::default();
    let legend = LegendSettings {
        show: objects.bool_or("legend", "show", legend_defaults.show),
        label_color: objects.color_or("legend", "labelColor", &legend_defaults.label_color),
        label_size: objects.f64_or("legend", "fontSize", legend_defaults.label_size),
    };

    let chart = ChartSettings {
        show_axis: objects.bool_or("enableAxis", "show", ChartSettings::default().show_axis),
    };

    ResolvedSettings {
        zones,
        axis,
        ytd_target: resolve_target_line(objects, "yTDTarget"),
        full_year_target: resolve_target_line(objects, "fullYearTarget"),
        legend,
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_store_yields_defaults() {
        let resolved = resolve_settings(&SettingsObjects::new());
        assert_eq!(resolved, ResolvedSettings::default());
    }

    #[test]
    fn decimal_places_clamp_to_policy_bounds() {
        let mut objects = SettingsObjects::new();
        objects.set("yAxis", "decimalPlaces", -5);
        assert_eq!(resolve_settings(&objects).axis.decimal_places, 0);

        objects.set("yAxis", "decimalPlaces", 10);
        assert_eq!(resolve_settings(&objects).axis.decimal_places, 4);
    }

    #[test]
    fn stroke_size_clamps_to_policy_bounds() {
        let mut objects = SettingsObjects::new();
        objects.set("yTDTarget", "strokeSize", -5);
        objects.set("fullYearTarget", "strokeSize", 10);
        let resolved = resolve_settings(&objects);
        assert_eq!(resolved.ytd_target.stroke_size, 1.0);
        assert_eq!(resolved.full_year_target.stroke_size, 5.0);
    }

    #[test]
    fn structured_fill_colors_resolve() {
        let mut objects = SettingsObjects::new();
        objects.set("zoneSettings", "zone1Color", json!({"solid": {"color": "#123456"}}));
        objects.set("zoneSettings", "zone2Color", "#abcdef");
        let zones = resolve_settings(&objects).zones;
        assert_eq!(zones.zone1_color, Color::new("#123456"));
        assert_eq!(zones.zone2_color, Color::new("#abcdef"));
    }

    #[test]
    fn mistyped_values_fall_back_to_defaults() {
        let mut objects = SettingsObjects::new();
        objects.set("legend", "show", "definitely");
        objects.set("zoneSettings", "zone1Value", json!({"not": "a number"}));
        let resolved = resolve_settings(&objects);
        assert!(resolved.legend.show);
        assert_eq!(resolved.zones.zone1_threshold, 90.0);
    }
}
