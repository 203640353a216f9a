//! Legend layout for the optional target series.

use smallvec::SmallVec;

use super::settings::LegendSettings;
use super::text_measure::TextMeasurer;
use super::view_model::ViewModel;
use super::zone::TargetPresence;

/// Fixed chrome reserved next to each entry when both series share the row.
const SPLIT_ENTRY_CHROME: f64 = 60.0;
/// Fixed chrome reserved when a single series owns the whole row.
const SINGLE_ENTRY_CHROME: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendEntryKind {
    /// Solid swatch: the connected YTD target line.
    YtdTarget,
    /// Dashed swatch: the full-year reference line.
    FullYearTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub kind: LegendEntryKind,
    /// Label tailored to the entry's width budget.
    pub text: String,
    /// Untailored label, for host-side hover titles.
    pub full_text: String,
    pub max_width: f64,
}

/// Legend plan: what entries to draw and how much vertical space they cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendPlan {
    pub height: f64,
    pub entries: SmallVec<[LegendEntry; 2]>,
}

impl LegendPlan {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Decides legend entries from the target presence and splits the viewport
/// width between them.
///
/// Both series present: each entry gets half the width minus chrome; one
/// present: the full width minus the label size and chrome; none (or the
/// legend toggled off): a zero-height plan. Heights come from the text
/// measurement collaborator; the plan height is the tallest shown entry.
#[must_use]
pub fn layout_legend(
    view_model: &ViewModel,
    settings: &LegendSettings,
    viewport_width: f64,
    measurer: &dyn TextMeasurer,
) -> LegendPlan {
    if !settings.show || view_model.target_presence == TargetPresence::NoTarget {
        return LegendPlan::hidden();
    }

    let entry_width = match view_model.target_presence {
        TargetPresence::Both => (viewport_width / 2.0 - SPLIT_ENTRY_CHROME).max(0.0),
        _ => (viewport_width - settings.label_size - SINGLE_ENTRY_CHROME).max(0.0),
    };

    let mut entries: SmallVec<[LegendEntry; 2]> = SmallVec::new();
    let mut height: f64 = 0.0;

    if view_model.target_presence.has_ytd() {
        entries.push(entry(
            LegendEntryKind::YtdTarget,
            &view_model.ytd_label,
            entry_width,
            settings.label_size,
            measurer,
        ));
        height = height.max(measurer.text_height(settings.label_size));
    }
    if view_model.target_presence.has_full_year() {
        entries.push(entry(
            LegendEntryKind::FullYearTarget,
            &view_model.full_year_label,
            entry_width,
            settings.label_size,
            measurer,
        ));
        height = height.max(measurer.text_height(settings.label_size));
    }

    LegendPlan { height, entries }
}

fn entry(
    kind: LegendEntryKind,
    label: &str,
    max_width: f64,
    label_size: f64,
    measurer: &dyn TextMeasurer,
) -> LegendEntry {
    LegendEntry {
        kind,
        text: measurer.tailor(label, label_size, max_width),
        full_text: label.to_owned(),
        max_width,
    }
}
