use approx::assert_relative_eq;
use keyed_charts::charts::{ACCENT_COLOR, BASE_COLOR, OneSidedBarChart, OneSidedBarConfig};
use keyed_charts::data::{Dataset, Record};
use keyed_charts::interaction::PointerEvent;

fn dataset() -> Dataset {
    let records = vec![
        Record::new("A", 3.0, 5.0).expect("valid record"),
        Record::new("B", 7.0, 2.0).expect("valid record"),
    ];
    Dataset::new(records, ["Exports".to_owned(), "Imports".to_owned()]).expect("valid dataset")
}

fn chart() -> OneSidedBarChart {
    OneSidedBarChart::new(&dataset(), OneSidedBarConfig::default()).expect("chart")
}

#[test]
fn draws_one_rect_per_interleaved_entry_plus_legend_swatches() {
    let frame = chart().frame().expect("frame");

    let grouped: Vec<_> = frame
        .rects
        .iter()
        .filter(|rect| rect.group.is_some())
        .collect();
    assert_eq!(grouped.len(), 4);
    assert_eq!(frame.rects.len(), 6);
    assert_eq!(frame.grouped_primitive_count(), 4);
}

#[test]
fn bar_widths_follow_the_shared_value_scale() {
    let chart = chart();
    let frame = chart.frame().expect("frame");

    // Entries interleave x then y per record: [3, 5, 7, 2] over ceiling 7.
    let expected = [3.0, 5.0, 7.0, 2.0].map(|value| value / 7.0 * 500.0);
    for (rect, expected_width) in frame.rects.iter().take(4).zip(expected) {
        assert_relative_eq!(rect.width, expected_width, max_relative = 1e-12);
    }
}

#[test]
fn paired_bars_alternate_series_colors() {
    let frame = chart().frame().expect("frame");

    assert_eq!(frame.rects[0].fill, ACCENT_COLOR);
    assert_eq!(frame.rects[1].fill, BASE_COLOR);
    assert_eq!(frame.rects[2].fill, ACCENT_COLOR);
    assert_eq!(frame.rects[3].fill, BASE_COLOR);
}

#[test]
fn rows_are_grouped_in_pairs_with_a_gap_between_groups() {
    let frame = chart().frame().expect("frame");

    assert_relative_eq!(frame.rects[0].y, 5.0, max_relative = 1e-12);
    assert_relative_eq!(frame.rects[1].y, 35.0, max_relative = 1e-12);
    assert_relative_eq!(frame.rects[2].y, 75.0, max_relative = 1e-12);
    assert_relative_eq!(frame.rects[3].y, 105.0, max_relative = 1e-12);
}

#[test]
fn key_captions_appear_once_per_group() {
    let frame = chart().frame().expect("frame");

    let key_captions: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.text == "A" || text.text == "B")
        .collect();
    assert_eq!(key_captions.len(), 2);
}

#[test]
fn viewport_accounts_for_gutters_and_axis_strip() {
    let chart = chart();
    // 50 label gutter + 500 chart + 250 legend; 4 bars + 2 gaps + axis strip.
    assert_eq!(chart.viewport().width, 800);
    assert_eq!(chart.viewport().height, 170);
}

#[test]
fn clicking_a_key_highlights_both_bars_of_its_group() {
    let mut chart = chart();
    chart.pointer_event(&PointerEvent::Click("A".to_owned()));

    let frame = chart.frame().expect("frame");
    for rect in frame.rects.iter().filter(|rect| rect.group.is_some()) {
        let expected = if rect.group.as_deref() == Some("A") {
            1.0
        } else {
            0.4
        };
        assert_eq!(rect.fill_opacity, expected);
    }
}

#[test]
fn restyle_matches_a_fresh_frame_after_a_selection_change() {
    let mut chart = chart();
    let mut stale = chart.frame().expect("initial frame");

    chart.pointer_event(&PointerEvent::Click("B".to_owned()));
    let fresh = chart.frame().expect("fresh frame");
    chart.restyle(&mut stale);

    assert_eq!(stale, fresh);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut chart = chart();
    chart.pointer_event(&PointerEvent::Click("nope".to_owned()));
    assert!(chart.selection().is_idle());
}

#[test]
fn frame_validates_cleanly() {
    let frame = chart().frame().expect("frame");
    frame.validate().expect("valid frame");
}
