//! Filter + render cycle benchmarks.
//!
//! Every control event recomputes the filtered result from scratch and
//! re-renders every card, so the cost of one keystroke is one full pass over
//! the collection.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `index` | Building the facet option lists for every field |
//! | `filter` | Predicate pass alone: text term, one facet, term + two facets |
//! | `cycle` | `Explorer::dispatch` into a headless surface, as the TUI does per key |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench filter_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use paperscope_core::facets::FacetIndex;
use paperscope_core::{
    predicate, ControlEvent, Explorer, FacetField, FacetValue, FilterState, HeadlessSurface,
    Paper,
};

const SIGNALS: &[&str] = &["ECG", "EEG", "PPG", "EMG", "PCG"];
const TASKS: &[&str] = &["classification", "detection", "segmentation", "regression"];
const CONTEXTS: &[&str] = &["clinical", "wearable", "ambulatory"];

/// A synthetic collection the size of a few conference editions.
fn corpus(n: usize) -> Vec<Paper> {
    (0..n)
        .map(|i| Paper {
            title: format!("Paper {i} on {} analysis", SIGNALS[i % SIGNALS.len()]),
            abstract_public: Some(format!(
                "We study {} for {} in {} settings.",
                SIGNALS[i % SIGNALS.len()],
                TASKS[i % TASKS.len()],
                CONTEXTS[i % CONTEXTS.len()]
            )),
            pdf_url: (i % 3 != 0).then(|| format!("https://example.org/{i}.pdf")),
            signals: FacetValue::from(vec![SIGNALS[i % SIGNALS.len()]]),
            uses_dl: FacetValue::Scalar((i % 2 == 0).into()),
            task: FacetValue::from(vec![TASKS[i % TASKS.len()], TASKS[(i + 1) % TASKS.len()]]),
            context: FacetValue::from(vec![CONTEXTS[i % CONTEXTS.len()]]),
            ..Paper::default()
        })
        .collect()
}

fn state(events: Vec<ControlEvent>) -> FilterState {
    let mut state = FilterState::new();
    for e in events {
        state.apply(e);
    }
    state
}

fn index_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    for n in [100usize, 1_000, 10_000] {
        let papers = corpus(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &papers, |b, papers| {
            b.iter(|| FacetIndex::build(black_box(papers)))
        });
    }
    group.finish();
}

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let papers = corpus(1_000);
    group.throughput(Throughput::Elements(papers.len() as u64));

    let cases = [
        ("term", state(vec![ControlEvent::SetTerm("wearable".into())])),
        (
            "one_facet",
            state(vec![ControlEvent::select(FacetField::Task, ["detection"])]),
        ),
        (
            "term_and_two_facets",
            state(vec![
                ControlEvent::SetTerm("ecg".into()),
                ControlEvent::select(FacetField::Task, ["detection", "regression"]),
                ControlEvent::select(FacetField::UsesDl, ["true"]),
            ]),
        ),
    ];

    for (name, state) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), state, |b, state| {
            b.iter(|| predicate::filter(black_box(&papers), state).len())
        });
    }
    group.finish();
}

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    for n in [100usize, 1_000] {
        let papers = corpus(n);
        let mut explorer = Explorer::new(&papers);
        let mut surface = HeadlessSurface::new();
        if explorer.attach(&mut surface).is_err() {
            continue;
        }
        // Alternate between two terms so every dispatch changes the result.
        let terms = ["ecg", "eeg"];
        let mut i = 0;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("keystroke", n), |b| {
            b.iter(|| {
                i += 1;
                explorer.dispatch(
                    ControlEvent::SetTerm(terms[i % 2].to_string()),
                    &mut surface,
                );
            })
        });
    }
    group.finish();
}

criterion_group!(benches, index_bench, filter_bench, cycle_bench);
criterion_main!(benches);
