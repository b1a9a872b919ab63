use approx::assert_relative_eq;
use keyed_charts::charts::{
    ACCENT_COLOR, BASE_COLOR, ParallelCoordinatesConfig, ParallelCoordinatesPlot,
};
use keyed_charts::data::{Dataset, Record};
use keyed_charts::interaction::PointerEvent;

fn dataset_of(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            Record::new(format!("K{i}"), 3.0 + i as f64, 50.0 - 10.0 * i as f64)
                .expect("valid record")
        })
        .collect();
    Dataset::new(records, ["Exports".to_owned(), "Imports".to_owned()]).expect("valid dataset")
}

fn chart_of(count: usize) -> ParallelCoordinatesPlot {
    ParallelCoordinatesPlot::new(&dataset_of(count), ParallelCoordinatesConfig::default())
        .expect("chart")
}

#[test]
fn draws_one_line_per_record_for_any_dataset_size() {
    // Not just the original demo size: line and caption counts must follow
    // the record count.
    for count in [1, 3, 7, 12] {
        let chart = chart_of(count);
        let frame = chart.frame().expect("frame");

        let grouped = frame.paths.iter().filter(|path| path.group.is_some()).count();
        assert_eq!(grouped, count);

        let captions = frame
            .texts
            .iter()
            .filter(|text| text.text.starts_with('K'))
            .count();
        assert_eq!(captions, count);
    }
}

#[test]
fn single_record_collapses_both_axes_to_their_midpoints() {
    // One record gives every axis a collapsed domain; the chart must still
    // construct and draw its line at the vertical midpoint of each axis.
    let chart = chart_of(1);
    let frame = chart.frame().expect("frame");

    let line = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("K0"))
        .expect("line for K0");
    assert_relative_eq!(line.points[0].y, 30.0 + 230.0, max_relative = 1e-9);
    assert_relative_eq!(line.points[1].y, 30.0 + 230.0, max_relative = 1e-9);
    frame.validate().expect("valid frame");
}

#[test]
fn constant_column_collapses_only_that_axis() {
    // All y values equal: the second axis collapses, the first does not.
    let records = vec![
        Record::new("A", 3.0, 40.0).expect("valid record"),
        Record::new("B", 7.0, 40.0).expect("valid record"),
    ];
    let dataset =
        Dataset::new(records, ["Exports".to_owned(), "Imports".to_owned()]).expect("valid dataset");
    let chart = ParallelCoordinatesPlot::new(&dataset, ParallelCoordinatesConfig::default())
        .expect("chart");
    let frame = chart.frame().expect("frame");

    let line_a = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("A"))
        .expect("line for A");
    // x = 3 is the x minimum, mapped to the bottom of the first axis.
    assert_relative_eq!(line_a.points[0].y, 30.0 + 460.0, max_relative = 1e-9);
    assert_relative_eq!(line_a.points[1].y, 30.0 + 230.0, max_relative = 1e-9);
}

#[test]
fn axis_verticals_sit_at_point_scale_positions() {
    let chart = chart_of(3);
    let frame = chart.frame().expect("frame");

    // Inner width 680, point padding 1: thirds of the drawing area,
    // shifted by the 10 px left margin.
    let first = 10.0 + 680.0 / 3.0;
    let second = 10.0 + 680.0 / 3.0 * 2.0;

    for path in frame.paths.iter().filter(|path| path.group.is_some()) {
        assert_eq!(path.points.len(), 2);
        assert_relative_eq!(path.points[0].x, first, max_relative = 1e-9);
        assert_relative_eq!(path.points[1].x, second, max_relative = 1e-9);
    }
}

#[test]
fn each_axis_uses_its_own_independent_domain() {
    let chart = chart_of(3);
    let frame = chart.frame().expect("frame");

    // Record K0 holds the x minimum (3) and y maximum (50): its line runs
    // from the bottom of the first axis to the top of the second.
    let line = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("K0"))
        .expect("line for K0");
    assert_relative_eq!(line.points[0].y, 30.0 + 460.0, max_relative = 1e-9);
    assert_relative_eq!(line.points[1].y, 30.0, max_relative = 1e-9);
}

#[test]
fn resting_lines_use_base_stroke_and_dim_opacity() {
    let frame = chart_of(2).frame().expect("frame");

    for path in frame.paths.iter().filter(|path| path.group.is_some()) {
        assert_eq!(path.stroke, BASE_COLOR);
        assert_eq!(path.stroke_width, 2.5);
        assert_eq!(path.opacity, 0.4);
    }
}

#[test]
fn hovering_a_line_promotes_stroke_width_and_color() {
    let mut chart = chart_of(3);
    chart.pointer_event(&PointerEvent::Enter("K1".to_owned()));

    let frame = chart.frame().expect("frame");
    let hovered = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("K1"))
        .expect("hovered line");
    assert_eq!(hovered.stroke, ACCENT_COLOR);
    assert_eq!(hovered.stroke_width, 4.0);
    assert_eq!(hovered.opacity, 1.0);

    // Leaving reverts, because nothing is pinned.
    chart.pointer_event(&PointerEvent::Leave("K1".to_owned()));
    let frame = chart.frame().expect("frame");
    let rested = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("K1"))
        .expect("rested line");
    assert_eq!(rested.stroke, BASE_COLOR);
}

#[test]
fn pinned_line_survives_hovering_other_lines() {
    let mut chart = chart_of(3);
    chart.pointer_event(&PointerEvent::Click("K0".to_owned()));
    chart.pointer_event(&PointerEvent::Enter("K2".to_owned()));
    chart.pointer_event(&PointerEvent::Leave("K2".to_owned()));

    let frame = chart.frame().expect("frame");
    let pinned = frame
        .paths
        .iter()
        .find(|path| path.group.as_deref() == Some("K0"))
        .expect("pinned line");
    assert_eq!(pinned.stroke, ACCENT_COLOR);
    assert_eq!(pinned.opacity, 1.0);
}

#[test]
fn restyle_matches_a_fresh_frame() {
    let mut chart = chart_of(4);
    let mut stale = chart.frame().expect("initial frame");

    chart.pointer_event(&PointerEvent::Click("K3".to_owned()));
    let fresh = chart.frame().expect("fresh frame");
    chart.restyle(&mut stale);
    assert_eq!(stale, fresh);
}

#[test]
fn frame_validates_cleanly() {
    let frame = chart_of(5).frame().expect("frame");
    frame.validate().expect("valid frame");
}
