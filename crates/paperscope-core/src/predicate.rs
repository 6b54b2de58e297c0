//! Predicate engine: narrows the collection to the papers matching a
//! [`FilterState`].
//!
//! Evaluation per paper short-circuits: text first, then each active facet.
//! Within a facet any selected value matches (OR); across facets every
//! active facet must match (AND). The output borrows from the input and
//! keeps its order.

use std::collections::BTreeSet;

use crate::filter::FilterState;
use crate::types::{FacetValue, Paper};

/// Return the papers that satisfy `state`, in source order.
pub fn filter<'a>(papers: &'a [Paper], state: &FilterState) -> Vec<&'a Paper> {
    papers.iter().filter(|p| matches(p, state)).collect()
}

/// Whether a single paper satisfies `state`.
pub fn matches(paper: &Paper, state: &FilterState) -> bool {
    let term = state.term();
    if !term.is_empty() && !text_matches(paper, term) {
        return false;
    }
    state
        .active_facets()
        .all(|(field, selected)| facet_matches(paper.facet(field), selected))
}

/// `term` must already be lowercased.
fn text_matches(paper: &Paper, term: &str) -> bool {
    let abstract_text = paper.abstract_public.as_deref().unwrap_or("");
    let blob = format!("{} {}", paper.title, abstract_text).to_lowercase();
    blob.contains(term)
}

fn facet_matches(value: &FacetValue, selected: &BTreeSet<String>) -> bool {
    match value {
        FacetValue::Absent => false,
        FacetValue::Scalar(s) => selected.contains(&s.facet_string()),
        FacetValue::Sequence(items) => items.iter().any(|s| selected.contains(&s.facet_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
