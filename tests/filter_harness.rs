#![allow(unused)]
//! Filtering integration harness.
//!
//! # What this covers
//!
//! - **Text match**: case-insensitive substring over title and abstract,
//!   trimmed and lowercased on input.
//! - **Facet match**: OR within a field, AND across fields, absent fields
//!   never match an active facet, booleans and numbers compared by their
//!   string form.
//! - **Facet options**: distinct, sorted, `null` dropped, stringified.
//! - **Properties** (proptest): results are an order-preserving subsequence,
//!   recomputing is idempotent, the empty state is the identity, widening a
//!   selection never shrinks the result and activating a field never grows it.
//!
//! # Running
//!
//! ```sh
//! cargo test --test filter_harness
//! ```

mod common;
use common::*;

use paperscope_core::facets::{build_options, FacetIndex};
use paperscope_core::predicate;
use paperscope_core::{ControlEvent, FacetField, FilterState, Paper};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

// ---------------------------------------------------------------------------
// Text search
// ---------------------------------------------------------------------------

#[rstest]
#[case::title("ecg", &["ECG Study"])]
#[case::abstract_only("no dl", &["MRI Atlas"])]
#[case::upper_and_padded("  ATLAS ", &["MRI Atlas"])]
#[case::both("learning", &["ECG Study"])]
#[case::none("transformer", &[])]
#[case::empty("", &["ECG Study", "MRI Atlas"])]
fn term_matches_title_or_abstract(#[case] term: &str, #[case] expected: &[&str]) {
    let papers = scenario_papers();
    let state = state_from([ControlEvent::SetTerm(term.into())]);
    assert_eq!(titles(&predicate::filter(&papers, &state)), expected);
}

#[test]
fn term_does_not_span_title_abstract_boundary_without_the_space() {
    let papers = vec![PaperBuilder::new("Atlas").abstract_text("brain").build()];
    let hit = state_from([ControlEvent::SetTerm("atlas brain".into())]);
    let miss = state_from([ControlEvent::SetTerm("atlasbrain".into())]);
    assert_eq!(predicate::filter(&papers, &hit).len(), 1);
    assert!(predicate::filter(&papers, &miss).is_empty());
}

#[test]
fn paper_without_title_is_searchable_by_abstract() {
    let papers = irregular_papers();
    let state = state_from([ControlEvent::SetTerm("without a title".into())]);
    assert_titles!(predicate::filter(&papers, &state), [""]);
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

#[test]
fn acceptance_scenario() {
    let papers = scenario_papers();

    let state = state_from([ControlEvent::SetTerm("ecg".into())]);
    assert_titles!(predicate::filter(&papers, &state), ["ECG Study"]);

    let state = state_from([ControlEvent::select(FacetField::Task, ["segmentation"])]);
    assert_titles!(predicate::filter(&papers, &state), ["MRI Atlas"]);

    let mut state = state_from([ControlEvent::select(
        FacetField::Task,
        ["classification", "segmentation"],
    )]);
    assert_titles!(predicate::filter(&papers, &state), ["ECG Study", "MRI Atlas"]);

    state.apply(ControlEvent::ClearAll);
    assert!(state.is_empty());
    assert_titles!(predicate::filter(&papers, &state), ["ECG Study", "MRI Atlas"]);
}

#[test]
fn fields_combine_with_and() {
    let papers = irregular_papers();
    let state = state_from([
        ControlEvent::select(FacetField::Task, ["detection"]),
        ControlEvent::select(FacetField::MedicalImaging, ["CT"]),
    ]);
    assert_titles!(
        predicate::filter(&papers, &state),
        ["CT lung nodule segmentation"]
    );
}

#[test]
fn absent_field_never_matches_active_facet() {
    let papers = irregular_papers();
    let state = state_from([ControlEvent::select(FacetField::Signals, ["EEG", "PPG", "ECG"])]);
    assert_titles!(
        predicate::filter(&papers, &state),
        [
            "Wearable EEG seizure detection",
            "Photoplethysmography heart-rate tracking"
        ]
    );
}

#[rstest]
#[case::bool_true("true", &["Wearable EEG seizure detection", "CT lung nodule segmentation"])]
#[case::bool_false("false", &["Photoplethysmography heart-rate tracking"])]
#[case::number("0", &["Ultrasound speckle reduction"])]
fn non_text_values_match_by_string_form(#[case] value: &str, #[case] expected: &[&str]) {
    let papers = irregular_papers();
    let state = state_from([ControlEvent::select(FacetField::UsesDl, [value])]);
    assert_eq!(titles(&predicate::filter(&papers, &state)), expected);
}

#[test]
fn scalar_facet_matches_like_single_element_sequence() {
    let papers = irregular_papers();
    let state = state_from([ControlEvent::select(FacetField::Task, ["regression"])]);
    assert_titles!(
        predicate::filter(&papers, &state),
        ["Photoplethysmography heart-rate tracking"]
    );
}

#[test]
fn options_are_distinct_sorted_strings() {
    let papers = irregular_papers();
    let index = FacetIndex::build(&papers);
    assert_eq!(index.options(FacetField::Signals), ["ECG", "EEG", "PPG"]);
    assert_eq!(index.options(FacetField::UsesDl), ["0", "false", "true"]);
    assert_eq!(
        index.options(FacetField::Task),
        ["detection", "regression", "segmentation"]
    );
    assert_eq!(index.options(FacetField::Context), ["", "clinical", "wearable"]);
    assert_eq!(build_options(&[], FacetField::DlType), Vec::<String>::new());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const WORDS: &[&str] = &["ecg", "mri", "deep", "atlas", "eeg", "net"];
const VALUES: &[&str] = &["a", "b", "c", "d"];

fn arb_values() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(json!(null)),
        proptest::sample::subsequence(VALUES, 0..=VALUES.len()).prop_map(|v| json!(v)),
        proptest::sample::select(VALUES).prop_map(|v| json!(v)),
        any::<bool>().prop_map(|b| json!(b)),
    ]
}

fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        proptest::sample::subsequence(WORDS, 0..=3),
        proptest::sample::subsequence(WORDS, 0..=3),
        arb_values(),
        arb_values(),
    )
        .prop_map(|(title, abs, task, signals)| {
            PaperBuilder::new(title.join(" "))
                .abstract_text(abs.join(" "))
                .value(FacetField::Task, task)
                .value(FacetField::Signals, signals)
                .build()
        })
}

fn arb_selection() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(VALUES, 0..=VALUES.len())
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(""), proptest::sample::select(WORDS)],
        arb_selection(),
        arb_selection(),
    )
        .prop_map(|(term, task, signals)| {
            state_from([
                ControlEvent::SetTerm(term.to_string()),
                ControlEvent::select(FacetField::Task, task),
                ControlEvent::select(FacetField::Signals, signals),
            ])
        })
}

proptest! {
    #[test]
    fn result_is_ordered_subsequence(
        papers in proptest::collection::vec(arb_paper(), 0..24),
        state in arb_state(),
    ) {
        let result = predicate::filter(&papers, &state);
        assert_subsequence!(result, papers);
    }

    #[test]
    fn recompute_is_idempotent(
        papers in proptest::collection::vec(arb_paper(), 0..24),
        state in arb_state(),
    ) {
        let first = titles(&predicate::filter(&papers, &state));
        let second = titles(&predicate::filter(&papers, &state));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_state_returns_everything(papers in proptest::collection::vec(arb_paper(), 0..24)) {
        let result = predicate::filter(&papers, &FilterState::new());
        prop_assert_eq!(result.len(), papers.len());
    }

    #[test]
    fn widening_a_selection_never_shrinks_result(
        papers in proptest::collection::vec(arb_paper(), 0..24),
        state in arb_state(),
        extra in proptest::sample::select(VALUES),
    ) {
        let mut wider = state.clone();
        if let Some(task) = state.selected(FacetField::Task) {
            let mut values = task.clone();
            values.insert(extra.to_string());
            wider.apply(ControlEvent::SetSelection { field: FacetField::Task, values });
        }
        let narrow = predicate::filter(&papers, &state);
        let wide = predicate::filter(&papers, &wider);
        assert_subset!(narrow, wide);
    }

    #[test]
    fn activating_a_field_never_grows_result(
        papers in proptest::collection::vec(arb_paper(), 0..24),
        state in arb_state(),
        context in proptest::sample::subsequence(VALUES, 1..=VALUES.len()),
    ) {
        let mut narrower = state.clone();
        narrower.apply(ControlEvent::select(FacetField::Context, context));
        let before = predicate::filter(&papers, &state);
        let after = predicate::filter(&papers, &narrower);
        assert_subset!(after, before);
    }
}
