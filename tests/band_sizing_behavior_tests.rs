use approx::assert_relative_eq;
use kpi_column::api::{
    ResolvedSettings, TextMeasurer, XAxisLabels, layout, layout_chart, build_view_model,
    resolve_settings, SettingsObjects,
};
use kpi_column::core::{CellValue, ColumnRole, DataColumn, DataTable, Viewport};

/// Constant-width measurer so margins come out to round numbers.
struct FixedWidthMeasurer {
    width: f64,
}

impl TextMeasurer for FixedWidthMeasurer {
    fn text_width(&self, _text: &str, _font_size_px: f64) -> f64 {
        self.width
    }

    fn text_height(&self, font_size_px: f64) -> f64 {
        font_size_px
    }
}

fn view_model(point_count: usize) -> kpi_column::api::ViewModel {
    let categories = (0..point_count)
        .map(|i| CellValue::Text(format!("c{i}")))
        .collect();
    let measures = (0..point_count)
        .map(|i| CellValue::Number(10.0 + i as f64))
        .collect();
    let table = DataTable::new(vec![
        DataColumn::new(ColumnRole::Category, "Period", categories),
        DataColumn::new(ColumnRole::Measure, "Sales", measures),
    ]);
    build_view_model(&table, &resolve_settings(&SettingsObjects::new()))
}

fn settings() -> ResolvedSettings {
    resolve_settings(&SettingsObjects::new())
}

#[test]
fn narrow_bands_widen_the_chart_to_the_minimum_band() {
    // Range [50, 850] over 100 slots: band 8, well under the minimum.
    let measurer = FixedWidthMeasurer { width: 40.0 };
    let vm = view_model(100);
    let plan = layout_chart(&vm, Viewport::new(850, 600), &settings(), &measurer, 0.0)
        .expect("renderable layout");

    assert!(plan.chart_width > 850.0);
    assert_relative_eq!(plan.chart_width, 850.0 + 100.0 * (17.0 - 8.0));
    assert_relative_eq!(plan.band_width, layout::MIN_BAND_WIDTH, epsilon = 1e-9);
    assert!(matches!(plan.x_labels, XAxisLabels::Rotated { .. }));
}

#[test]
fn wide_bands_earn_extra_plot_height_and_horizontal_labels() {
    // Range [50, 770] over 20 slots: band exactly 36.
    let measurer = FixedWidthMeasurer { width: 40.0 };
    let vm = view_model(20);
    let plan = layout_chart(&vm, Viewport::new(770, 600), &settings(), &measurer, 0.0)
        .expect("renderable layout");

    assert_relative_eq!(plan.band_width, 36.0);
    assert_relative_eq!(
        plan.plot_height,
        600.0 - layout::BOTTOM_MARGIN + layout::WIDE_BAND_HEIGHT_BONUS
    );
    match &plan.x_labels {
        XAxisLabels::Horizontal {
            wrap_width,
            max_height,
            labels,
        } => {
            assert_relative_eq!(*wrap_width, 36.0 * 0.8);
            assert_relative_eq!(*max_height, layout::WRAPPED_LABEL_MAX_HEIGHT);
            assert_eq!(labels.len(), 20);
        }
        other => panic!("expected horizontal labels, got {other:?}"),
    }
}

#[test]
fn mid_width_bands_rotate_and_tailor_long_labels() {
    // Range [50, 650] over 24 slots: band 25, between the two thresholds.
    let measurer = FixedWidthMeasurer { width: 40.0 };
    let mut vm = view_model(24);
    vm.data_points[0].category = "an extremely long category label".into();
    let plan = layout_chart(&vm, Viewport::new(650, 600), &settings(), &measurer, 0.0)
        .expect("renderable layout");

    assert!(plan.band_width >= layout::MIN_BAND_WIDTH);
    assert!(plan.band_width < layout::WIDE_BAND_WIDTH);
    match &plan.x_labels {
        XAxisLabels::Rotated {
            angle_degrees,
            labels,
        } => {
            assert_relative_eq!(*angle_degrees, -45.0);
            // Short labels pass through; the constant-width measurer makes
            // every tailored candidate "fit", so the long one keeps its text.
            assert_eq!(labels[1], "c1");
            assert_eq!(labels.len(), 24);
        }
        other => panic!("expected rotated labels, got {other:?}"),
    }
}

#[test]
fn legend_height_is_carved_out_of_the_plot() {
    let measurer = FixedWidthMeasurer { width: 40.0 };
    let vm = view_model(20);
    let without = layout_chart(&vm, Viewport::new(770, 600), &settings(), &measurer, 0.0)
        .expect("layout without legend");
    let with = layout_chart(&vm, Viewport::new(770, 600), &settings(), &measurer, 16.0)
        .expect("layout with legend");
    assert!(with.plot_height < without.plot_height);
}

#[test]
fn tick_on_the_full_year_line_loses_its_grid_line() {
    let measurer = FixedWidthMeasurer { width: 40.0 };
    let table = DataTable::new(vec![
        DataColumn::new(
            ColumnRole::Category,
            "Period",
            vec![CellValue::Text("a".into()), CellValue::Text("b".into())],
        ),
        DataColumn::new(
            ColumnRole::Measure,
            "Sales",
            vec![CellValue::Number(50.0), CellValue::Number(100.0)],
        ),
        DataColumn::new(ColumnRole::FullYearTarget, "Annual Plan", Vec::new())
            .with_max_local(100.0),
    ]);
    let vm = build_view_model(&table, &settings());
    let plan = layout_chart(&vm, Viewport::new(800, 600), &settings(), &measurer, 0.0)
        .expect("renderable layout");

    // Domain 110 at this height ticks every 20, so the 100 tick lands on
    // the target line's exact pixel row.
    let line = plan.full_year_line.expect("full-year line");
    let on_line = plan
        .ticks
        .iter()
        .find(|tick| tick.value == 100.0)
        .expect("tick at the target value");
    assert_eq!(on_line.y, line.y);
    assert!(!on_line.grid_line);
    assert!(plan
        .ticks
        .iter()
        .filter(|tick| tick.value != 100.0)
        .all(|tick| tick.grid_line));
}

#[test]
fn zero_data_max_short_circuits_layout() {
    let vm = kpi_column::api::ViewModel::empty();
    let measurer = FixedWidthMeasurer { width: 40.0 };
    assert!(layout_chart(&vm, Viewport::new(800, 600), &settings(), &measurer, 0.0).is_none());
}
