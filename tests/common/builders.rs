//! Test builders: ergonomic constructors for `Paper` and `FilterState`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use paperscope_core::{ControlEvent, FacetField, FacetValue, FilterState, Paper};
use serde_json::Value;

// ---------------------------------------------------------------------------
// PaperBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Paper`] test fixtures.
///
/// # Example
///
/// ```rust
/// let paper = PaperBuilder::new("ECG Study")
///     .abstract_text("deep learning on ECG")
///     .tags(FacetField::Task, &["classification", "detection"])
///     .value(FacetField::UsesDl, json!(true))
///     .build();
/// ```
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            paper: Paper {
                title: title.into(),
                ..Paper::default()
            },
        }
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.paper.abstract_public = Some(text.into());
        self
    }

    pub fn pdf(mut self, url: impl Into<String>) -> Self {
        self.paper.pdf_url = Some(url.into());
        self
    }

    /// Set a facet to a sequence of text values.
    pub fn tags(mut self, field: FacetField, values: &[&str]) -> Self {
        *self.paper.facet_mut(field) = FacetValue::from(values.to_vec());
        self
    }

    /// Set a facet from any JSON value, exactly as the loader would.
    pub fn value(mut self, field: FacetField, value: Value) -> Self {
        *self.paper.facet_mut(field) = FacetValue::from(value);
        self
    }

    pub fn build(self) -> Paper {
        self.paper
    }
}

// ---------------------------------------------------------------------------
// FilterState helpers
// ---------------------------------------------------------------------------

/// Build a filter state by applying `events` in order.
pub fn state_from(events: impl IntoIterator<Item = ControlEvent>) -> FilterState {
    let mut state = FilterState::new();
    for event in events {
        state.apply(event);
    }
    state
}

/// Titles of a filtered result, in order.
pub fn titles(papers: &[&Paper]) -> Vec<String> {
    papers.iter().map(|p| p.title.clone()).collect()
}
