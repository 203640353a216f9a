//! Chart layout: scales, margins, dynamic width, ticks, and mark geometry.

use tracing::debug;

use crate::core::scale::{BandScale, LinearScale};
use crate::core::types::{Color, Viewport};

use super::display_unit::resolve_display_unit;
use super::settings::ResolvedSettings;
use super::text_measure::TextMeasurer;
use super::value_format::ValueFormatter;
use super::view_model::ViewModel;

pub const INNER_PADDING: f64 = 0.2;
pub const OUTER_PADDING: f64 = 0.3;
/// Bands narrower than this widen the chart into horizontal overflow.
pub const MIN_BAND_WIDTH: f64 = 17.0;
/// Bands at least this wide keep horizontal labels and earn extra height.
pub const WIDE_BAND_WIDTH: f64 = 35.0;
pub const WIDE_BAND_HEIGHT_BONUS: f64 = 20.0;
pub const TOP_INSET: f64 = 10.0;
pub const BOTTOM_MARGIN: f64 = 90.0;
pub const AXIS_LABEL_FONT_SIZE: f64 = 12.0;
pub const LEFT_MARGIN_PADDING: f64 = 10.0;
/// Renders are suppressed entirely below this viewport height.
pub const MIN_VIEWPORT_HEIGHT: f64 = 100.0;
/// One requested tick per this many viewport pixels.
pub const TICK_SPACING: f64 = 80.0;
/// Linear domain headroom above the data maximum.
pub const HEADROOM: f64 = 1.1;
pub const ROTATED_LABEL_MAX_CHARS: usize = 13;
pub const ROTATED_LABEL_WIDTH: f64 = 70.0;
pub const ROTATED_LABEL_ANGLE_DEGREES: f64 = -45.0;
pub const WRAPPED_LABEL_MAX_HEIGHT: f64 = 50.0;

/// Geometry for one bar, in chart pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlan {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// Forecast bars render hollow/dashed on the host side.
    pub forecast: bool,
    pub selection_key: usize,
}

/// One y-axis tick: domain value, pixel position, display label, and
/// whether its grid line survives target-line de-duplication.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPlan {
    pub value: f64,
    pub y: f64,
    pub label: String,
    pub grid_line: bool,
}

/// The dashed full-year reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetLinePlan {
    pub value: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub color: Color,
    pub stroke_size: f64,
}

/// One vertex of the YTD polyline, at a slot center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// X-axis label strategy, decided by band width.
#[derive(Debug, Clone, PartialEq)]
pub enum XAxisLabels {
    /// Narrow bands: labels rotate and long ones are tailored to a fixed
    /// width budget.
    Rotated {
        angle_degrees: f64,
        labels: Vec<String>,
    },
    /// Wide bands: labels stay horizontal and word-wrap within the bar
    /// width, capped at a fixed block height.
    Horizontal {
        wrap_width: f64,
        max_height: f64,
        labels: Vec<String>,
    },
}

/// Everything the host needs to draw one refresh. Produced fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    /// Final chart width; exceeds the viewport width when the minimum band
    /// rule kicked in (the host scrolls horizontally).
    pub chart_width: f64,
    pub plot_height: f64,
    pub left_margin: f64,
    pub band_width: f64,
    pub display_unit: f64,
    pub bars: Vec<BarPlan>,
    pub ticks: Vec<TickPlan>,
    pub full_year_line: Option<TargetLinePlan>,
    /// Empty when the YTD series is absent or hidden.
    pub ytd_line: Vec<LinePoint>,
    pub x_labels: XAxisLabels,
}

/// Lays out one refresh.
///
/// Returns `None` when there is nothing to render: a viewport too short for
/// the chart, or a view model with `data_max == 0`.
#[must_use]
pub fn layout_chart(
    view_model: &ViewModel,
    viewport: Viewport,
    settings: &ResolvedSettings,
    measurer: &dyn TextMeasurer,
    legend_height: f64,
) -> Option<LayoutPlan> {
    if f64::from(viewport.height) <= MIN_VIEWPORT_HEIGHT {
        return None;
    }
    if view_model.data_max == 0.0 || view_model.data_points.is_empty() {
        debug!("empty view model, suppressing layout");
        return None;
    }

    let viewport_width = f64::from(viewport.width);
    let mut plot_height =
        (f64::from(viewport.height) - legend_height.max(0.0)).max(0.0) - BOTTOM_MARGIN;
    plot_height = plot_height.max(0.0);

    let display_unit = resolve_display_unit(settings.axis.display_units, view_model.data_max);
    let formatter = ValueFormatter::new(
        view_model.measure_format.as_deref(),
        display_unit,
        settings.axis.decimal_places,
    );

    let domain_max = view_model.data_max * HEADROOM;
    let max_label = formatter.format(domain_max);
    let left_margin =
        measurer.text_width(&max_label, AXIS_LABEL_FONT_SIZE) + LEFT_MARGIN_PADDING;

    let categories: Vec<String> = view_model
        .data_points
        .iter()
        .map(|point| point.category.clone())
        .collect();
    let mut band = BandScale::new(
        categories,
        left_margin,
        viewport_width,
        INNER_PADDING,
        OUTER_PADDING,
    )
    .ok()?;

    let mut chart_width = viewport_width;
    let band_width = band.band_width();
    if band_width < MIN_BAND_WIDTH {
        let point_count = view_model.data_points.len() as f64;
        chart_width = viewport_width + point_count * (MIN_BAND_WIDTH - band_width);
        band.set_range(left_margin, chart_width).ok()?;
        debug!(chart_width, "band below minimum, widening chart");
    } else if band_width >= WIDE_BAND_WIDTH {
        plot_height += WIDE_BAND_HEIGHT_BONUS;
    }
    let band_width = band.band_width();

    let y_scale = LinearScale::new(0.0, domain_max, plot_height, TOP_INSET).ok()?;

    let full_year_line = match view_model.full_year_target {
        Some(target) if settings.full_year_target.show && target != 0.0 => Some(TargetLinePlan {
            value: target,
            y: y_scale.scale(target),
            x1: left_margin,
            x2: chart_width,
            color: settings.full_year_target.line_color.clone(),
            stroke_size: settings.full_year_target.stroke_size,
        }),
        _ => None,
    };

    let requested_ticks = f64::from(viewport.height) / TICK_SPACING;
    let ticks = tick_values(domain_max, requested_ticks)
        .into_iter()
        .map(|value| {
            let y = y_scale.scale(value);
            let clashes_with_target = full_year_line
                .as_ref()
                .is_some_and(|line| line.y == y);
            TickPlan {
                value,
                y,
                label: formatter.format(value),
                grid_line: !clashes_with_target,
            }
        })
        .collect();

    let bars = view_model
        .data_points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| {
            let value = point.value?;
            let y = y_scale.scale(value);
            Some(BarPlan {
                x: band.bar_x(index),
                y,
                width: band.bar_width(),
                height: (plot_height - y).max(0.0),
                color: point.color.clone(),
                forecast: point.is_forecast(),
                selection_key: point.selection_key,
            })
        })
        .collect();

    let ytd_line = if settings.ytd_target.show {
        view_model
            .data_points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                // Zero YTD values are skipped, matching the host contract.
                let ytd = point.ytd.filter(|value| *value != 0.0)?;
                Some(LinePoint {
                    x: band.center(index),
                    y: y_scale.scale(ytd),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let x_labels = if band_width < WIDE_BAND_WIDTH {
        XAxisLabels::Rotated {
            angle_degrees: ROTATED_LABEL_ANGLE_DEGREES,
            labels: view_model
                .data_points
                .iter()
                .map(|point| {
                    if point.category.chars().count() <= ROTATED_LABEL_MAX_CHARS {
                        point.category.clone()
                    } else {
                        measurer.tailor(
                            &point.category,
                            AXIS_LABEL_FONT_SIZE,
                            ROTATED_LABEL_WIDTH,
                        )
                    }
                })
                .collect(),
        }
    } else {
        XAxisLabels::Horizontal {
            wrap_width: band.bar_width(),
            max_height: WRAPPED_LABEL_MAX_HEIGHT,
            labels: view_model
                .data_points
                .iter()
                .map(|point| point.category.clone())
                .collect(),
        }
    };

    Some(LayoutPlan {
        chart_width,
        plot_height,
        left_margin,
        band_width,
        display_unit,
        bars,
        ticks,
        full_year_line,
        ytd_line,
        x_labels,
    })
}

/// d3-style "nice" tick values over `[0, domain_max]`: a power-of-ten step
/// snapped to 1/2/5/10 so roughly `requested` ticks land inside the domain.
#[must_use]
pub fn tick_values(domain_max: f64, requested: f64) -> Vec<f64> {
    if !domain_max.is_finite() || domain_max <= 0.0 || !requested.is_finite() || requested <= 0.0 {
        return Vec::new();
    }

    let mut step = 10f64.powf((domain_max / requested).log10().floor());
    let err = requested / domain_max * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }

    let stop = (domain_max / step).floor() * step + step * 0.5;
    let mut ticks = Vec::new();
    let mut value = 0.0;
    let mut index = 0u32;
    while value < stop {
        ticks.push(value);
        index += 1;
        value = step * f64::from(index);
    }
    ticks
}
