use criterion::{Criterion, criterion_group, criterion_main};
use keyed_charts::charts::{
    OneSidedBarChart, OneSidedBarConfig, Scatterplot, ScatterplotConfig,
};
use keyed_charts::core::LinearScale;
use keyed_charts::data::{Dataset, Record};
use keyed_charts::interaction::{PointerEvent, SelectionState};
use keyed_charts::render::{Renderer, SvgRenderer};
use std::hint::black_box;

fn dataset_of(count: usize) -> Dataset {
    let records: Vec<Record> = (0..count)
        .map(|i| {
            let t = i as f64;
            Record::new(
                format!("key-{i}"),
                10.0 + (t * 0.7).sin().abs() * 90.0,
                10.0 + (t * 1.3).cos().abs() * 90.0,
            )
            .expect("valid generated record")
        })
        .collect();
    Dataset::new(records, ["Exports".to_owned(), "Imports".to_owned()])
        .expect("valid generated dataset")
}

fn bench_linear_scale_position(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1920.0)).expect("valid scale");

    c.bench_function("linear_scale_position", |b| {
        b.iter(|| {
            let _ = scale.position(black_box(4_321.123)).expect("position");
        })
    });
}

fn bench_scatter_frame_1k(c: &mut Criterion) {
    let dataset = dataset_of(1_000);
    let chart = Scatterplot::new(&dataset, ScatterplotConfig::default()).expect("chart init");

    c.bench_function("scatter_frame_1k", |b| {
        b.iter(|| {
            let frame = black_box(&chart).frame().expect("frame build");
            black_box(frame);
        })
    });
}

fn bench_restyle_vs_rebuild_1k(c: &mut Criterion) {
    let dataset = dataset_of(1_000);
    let mut chart = Scatterplot::new(&dataset, ScatterplotConfig::default()).expect("chart init");
    chart.pointer_event(&PointerEvent::Click("key-500".to_owned()));
    let frame = chart.frame().expect("frame build");

    c.bench_function("scatter_restyle_1k", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut stale| chart.restyle(black_box(&mut stale)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_selection_reducer_churn(c: &mut Criterion) {
    let events: Vec<PointerEvent> = (0..256)
        .map(|i| {
            let key = format!("key-{}", i % 16);
            match i % 3 {
                0 => PointerEvent::Enter(key),
                1 => PointerEvent::Leave(key),
                _ => PointerEvent::Click(key),
            }
        })
        .collect();

    c.bench_function("selection_reducer_256_events", |b| {
        b.iter(|| {
            let mut state = SelectionState::default();
            for event in &events {
                state = state.apply(black_box(event));
            }
            black_box(state)
        })
    });
}

fn bench_bar_chart_svg_document(c: &mut Criterion) {
    let chart = OneSidedBarChart::new(&Dataset::sample(), OneSidedBarConfig::default())
        .expect("chart init");
    let frame = chart.frame().expect("frame build");
    let mut renderer = SvgRenderer::new();

    c.bench_function("one_sided_bar_svg_document", |b| {
        b.iter(|| {
            renderer.render(black_box(&frame)).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_position,
    bench_scatter_frame_1k,
    bench_restyle_vs_rebuild_1k,
    bench_selection_reducer_churn,
    bench_bar_chart_svg_document
);
criterion_main!(benches);
