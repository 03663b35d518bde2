mod support;

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use genbi_charts::core::format::NumberLocale;
use genbi_charts::core::{
    ChartLayout, ChartStyle, DEFAULT_PALETTE, Palette, build_pie_chart,
};
use support::{numbered_records, pair_records, shape_of};

#[test]
fn shares_become_proportional_sweeps() {
    let records = pair_records(
        "group",
        "share",
        vec![("Retail", 40), ("Wholesale", 35), ("Online", 25)],
    );
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();

    let geometry = build_pie_chart(
        &records,
        &shape,
        &layout,
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    assert_eq!(geometry.slices.len(), 3);
    assert_relative_eq!(geometry.total, 100.0);
    assert_relative_eq!(geometry.slices[0].sweep_fraction, 0.40, epsilon = 1e-12);
    assert_relative_eq!(geometry.slices[1].sweep_fraction, 0.35, epsilon = 1e-12);
    assert_relative_eq!(geometry.slices[2].sweep_fraction, 0.25, epsilon = 1e-12);

    assert_relative_eq!(geometry.slices[1].start_angle_fraction, 0.40, epsilon = 1e-12);
    assert_relative_eq!(geometry.slices[2].start_angle_fraction, 0.75, epsilon = 1e-12);

    assert_eq!(geometry.slices[0].percent_text, "40.0%");
    assert_eq!(geometry.slices[1].percent_text, "35.0%");
    assert_eq!(geometry.slices[2].value_text, "25");
}

#[test]
fn arcs_are_laid_out_along_the_circumference() {
    let records = pair_records("group", "share", vec![("a", 1.0), ("b", 3.0)]);
    let shape = shape_of(&records);
    let layout = ChartLayout::inline();

    let geometry = build_pie_chart(
        &records,
        &shape,
        &layout,
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    let circumference = TAU * layout.pie_radius;
    assert_relative_eq!(geometry.circumference, circumference, epsilon = 1e-9);
    assert_relative_eq!(geometry.slices[0].arc_length, circumference * 0.25, epsilon = 1e-9);
    assert_relative_eq!(geometry.slices[0].arc_offset, 0.0, epsilon = 1e-9);
    assert_relative_eq!(geometry.slices[1].arc_length, circumference * 0.75, epsilon = 1e-9);
    assert_relative_eq!(geometry.slices[1].arc_offset, -circumference * 0.25, epsilon = 1e-9);
}

#[test]
fn zero_total_yields_empty_arcs_without_nan() {
    let records = pair_records("group", "share", vec![("a", 0), ("b", 0)]);
    let shape = shape_of(&records);

    let geometry = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    for slice in &geometry.slices {
        assert_eq!(slice.sweep_fraction, 0.0);
        assert_eq!(slice.arc_length, 0.0);
        assert!(slice.arc_offset.is_finite());
        assert_eq!(slice.percent_text, "0%");
    }
}

#[test]
fn negative_values_are_clamped_out_of_the_total() {
    let records = pair_records("group", "share", vec![("a", 30.0), ("b", -10.0), ("c", 10.0)]);
    let shape = shape_of(&records);

    let geometry = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    assert_relative_eq!(geometry.total, 40.0);
    assert_eq!(geometry.slices[1].sweep_fraction, 0.0);
    assert_relative_eq!(geometry.slices[0].sweep_fraction, 0.75, epsilon = 1e-12);
    assert_eq!(geometry.slices[1].value_text, "-10");
    assert_eq!(geometry.slices[1].percent_text, "0.0%");
}

#[test]
fn huge_finite_values_still_split_the_circle() {
    let records = pair_records(
        "group",
        "share",
        vec![("a", 1e308), ("b", 1e308), ("c", 1e308)],
    );
    let shape = shape_of(&records);

    let geometry = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    let sum: f64 = geometry.slices.iter().map(|slice| slice.sweep_fraction).sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    for slice in &geometry.slices {
        assert_relative_eq!(slice.sweep_fraction, 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(slice.percent_text, "33.3%");
        assert!(slice.arc_length.is_finite() && slice.arc_length > 0.0);
    }
}

#[test]
fn slice_counts_follow_the_layout_cap() {
    let records = numbered_records("category", "count", 30);
    let shape = shape_of(&records);

    let inline = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");
    let fullscreen = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::fullscreen(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    assert_eq!(inline.slices.len(), 8);
    assert_eq!(fullscreen.slices.len(), 12);
    assert_eq!(inline.row_count, 30);

    let sum: f64 = inline.slices.iter().map(|slice| slice.sweep_fraction).sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
}

#[test]
fn slices_take_palette_colors_in_order_and_wrap() {
    let style = ChartStyle {
        palette: Some(vec!["#111111".to_owned(), "#222222".to_owned()]),
        ..ChartStyle::default()
    };
    let palette = style.resolve_palette().expect("palette");
    let records = numbered_records("category", "count", 3);
    let shape = shape_of(&records);

    let geometry = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &palette,
        NumberLocale::En,
    )
    .expect("pie geometry");

    assert_eq!(geometry.slices[0].color.to_hex(), "#111111");
    assert_eq!(geometry.slices[1].color.to_hex(), "#222222");
    assert_eq!(geometry.slices[2].color.to_hex(), "#111111");
}

#[test]
fn default_palette_distinguishes_every_fullscreen_slice() {
    let records = numbered_records("category", "count", 12);
    let shape = shape_of(&records);

    let geometry = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::fullscreen(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    for (slice, expected) in geometry.slices.iter().zip(DEFAULT_PALETTE) {
        assert_eq!(slice.color, expected);
    }
}

#[test]
fn inline_legend_truncates_and_fullscreen_does_not() {
    let label = "A very long customer segment name";
    let records = pair_records("group", "share", vec![(label, 1)]);
    let shape = shape_of(&records);

    let inline = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::inline(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");
    let fullscreen = build_pie_chart(
        &records,
        &shape,
        &ChartLayout::fullscreen(),
        &Palette::default(),
        NumberLocale::En,
    )
    .expect("pie geometry");

    assert_eq!(inline.slices[0].label, "A very long customer...");
    assert_eq!(fullscreen.slices[0].label, label);
}
