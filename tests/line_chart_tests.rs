mod support;

use genbi_charts::core::format::NumberLocale;
use genbi_charts::core::{ChartLayout, build_line_chart};
use support::{pair_records, shape_of};

#[test]
fn two_months_rise_left_to_right() {
    let records = pair_records("month", "sales", vec![("2024-01", 100), ("2024-02", 150)]);
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();
    let plot = layout.plot_area();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    assert_eq!(geometry.points.len(), 2);
    let first = &geometry.points[0];
    let second = &geometry.points[1];
    assert!((first.x - plot.left).abs() <= 1e-9);
    assert!((second.x - plot.right()).abs() <= 1e-9);
    assert!((first.y - plot.bottom()).abs() <= 1e-9);
    assert!((second.y - plot.top).abs() <= 1e-9);
    assert!(second.y < first.y);
    assert_eq!(first.label, "2024-01");
}

#[test]
fn grid_spans_the_observed_range() {
    let records = pair_records(
        "date",
        "visits",
        vec![("2024-01-01", 200), ("2024-01-02", 600), ("2024-01-03", 400)],
    );
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();
    let plot = layout.plot_area();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    assert_eq!(geometry.grid.len(), 5);
    let values: Vec<f64> = geometry.grid.iter().map(|line| line.value).collect();
    assert_eq!(values, vec![200.0, 300.0, 400.0, 500.0, 600.0]);
    assert!((geometry.grid[0].y - plot.bottom()).abs() <= 1e-9);
    assert!((geometry.grid[4].y - plot.top).abs() <= 1e-9);
    assert_eq!(geometry.grid[2].text, "400");
}

#[test]
fn flat_series_stays_finite() {
    let records = pair_records(
        "month",
        "sales",
        vec![("2024-01", 10), ("2024-02", 10), ("2024-03", 10)],
    );
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    for point in &geometry.points {
        assert!(point.x.is_finite());
        assert!((point.y - layout.plot_area().bottom()).abs() <= 1e-9);
    }
}

#[test]
fn single_point_is_centered() {
    let records = pair_records("year", "revenue", vec![(2024, 5)]);
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    assert_eq!(geometry.points.len(), 1);
    assert!((geometry.points[0].x - layout.plot_area().center_x()).abs() <= 1e-9);
    assert_eq!(geometry.x_labels.len(), 1);
}

#[test]
fn x_labels_thin_out_for_long_series() {
    let records = pair_records(
        "date",
        "count",
        (1..=30).map(|day| (format!("2024-03-{day:02}"), day)).collect(),
    );
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    assert_eq!(geometry.points.len(), 30);
    assert_eq!(geometry.label_step, 5);
    let indices: Vec<usize> = geometry.x_labels.iter().map(|label| label.index).collect();
    assert_eq!(indices, vec![0, 5, 10, 15, 20, 25]);
}

#[test]
fn line_charts_are_never_capped() {
    let records = pair_records(
        "date",
        "count",
        (0..120).map(|i| (format!("2024-01-01T00:{:02}:{:02}Z", i / 60, i % 60), i)).collect(),
    );
    let shape = shape_of(&records);

    let geometry = build_line_chart(&records, &shape, &ChartLayout::inline(), NumberLocale::En)
        .expect("line geometry");

    assert_eq!(geometry.points.len(), 120);
    assert_eq!(geometry.x_labels[0].text, "2024-01-01");
}

#[test]
fn x_positions_increase_with_row_index() {
    let records = pair_records(
        "month",
        "sales",
        vec![("2024-01", 5), ("2024-02", 1), ("2024-03", 9), ("2024-04", 3)],
    );
    let shape = shape_of(&records);

    let geometry = build_line_chart(&records, &shape, &ChartLayout::fullscreen(), NumberLocale::En)
        .expect("line geometry");

    assert!(
        geometry
            .points
            .windows(2)
            .all(|pair| pair[0].x < pair[1].x)
    );
}

#[test]
fn extreme_finite_values_still_build_a_line() {
    let records = pair_records(
        "date",
        "amount",
        vec![("2024-01-01", -1e308), ("2024-01-02", 0.0), ("2024-01-03", 1e308)],
    );
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();
    let plot = layout.plot_area();

    let geometry =
        build_line_chart(&records, &shape, &layout, NumberLocale::En).expect("line geometry");

    assert_eq!(geometry.points.len(), 3);
    assert!(geometry.points.iter().all(|point| point.y.is_finite()));
    assert!((geometry.points[0].y - plot.bottom()).abs() <= 1e-9);
    assert!((geometry.points[1].y - (plot.top + plot.height * 0.5)).abs() <= 1e-9);
    assert!((geometry.points[2].y - plot.top).abs() <= 1e-9);
    assert!(geometry.grid.iter().all(|line| line.value.is_finite()));
}
