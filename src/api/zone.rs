//! Performance-zone classification and target-series presence.

use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::settings::ZoneSettings;

/// Which optional target series the current data carries. Dispatched once
/// per refresh instead of re-deriving flags at every branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetPresence {
    #[default]
    NoTarget,
    YtdOnly,
    FullYearOnly,
    Both,
}

impl TargetPresence {
    #[must_use]
    pub fn from_flags(has_ytd: bool, has_full_year: bool) -> Self {
        match (has_ytd, has_full_year) {
            (true, true) => Self::Both,
            (true, false) => Self::YtdOnly,
            (false, true) => Self::FullYearOnly,
            (false, false) => Self::NoTarget,
        }
    }

    #[must_use]
    pub fn has_ytd(self) -> bool {
        matches!(self, Self::YtdOnly | Self::Both)
    }

    #[must_use]
    pub fn has_full_year(self) -> bool {
        matches!(self, Self::FullYearOnly | Self::Both)
    }
}

/// Classifies one data point against its YTD target.
///
/// `ratio = value / ytd`; `ratio < zone1/100` is zone 1,
/// `zone1/100 <= ratio < zone2/100` is zone 2, everything else zone 3.
/// An undefined ratio (missing value or target, divide by zero) compares
/// false on both bounds and lands in zone 3.
#[must_use]
pub fn zone_color(zones: &ZoneSettings, value: Option<f64>, ytd: Option<f64>) -> Color {
    let ratio = value.unwrap_or(f64::NAN) / ytd.unwrap_or(f64::NAN);
    if ratio < zones.zone1_threshold / 100.0 {
        zones.zone1_color.clone()
    } else if ratio < zones.zone2_threshold / 100.0 {
        zones.zone2_color.clone()
    } else {
        zones.zone3_color.clone()
    }
}
