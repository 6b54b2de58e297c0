//! Filter state and the control events that mutate it.
//!
//! [`FilterState::apply`] is the only mutation entry point. Every control
//! surface (terminal panel, headless CLI, tests) expresses user intent as a
//! [`ControlEvent`] and hands it to the explorer, which applies it here.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ExplorerError;
use crate::types::FacetField;

/// A user action on the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The free-text input changed to this raw text.
    SetTerm(String),
    /// The options currently selected in one facet control.
    SetSelection {
        field: FacetField,
        values: BTreeSet<String>,
    },
    /// "Quitar" on one facet control.
    ClearFacet(FacetField),
    /// "Limpiar filtros": empty the text input and every facet.
    ClearAll,
}

impl ControlEvent {
    /// Convenience constructor for [`ControlEvent::SetSelection`].
    pub fn select<I, S>(field: FacetField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ControlEvent::SetSelection {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Current text term plus the selected values per facet.
///
/// Invariant: `selected` never holds an empty set, so a key's presence means
/// the facet is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    term: String,
    selected: BTreeMap<FacetField, BTreeSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one control event.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SetTerm(raw) => {
                self.term = normalize_term(&raw);
            }
            ControlEvent::SetSelection { field, values } => {
                if values.is_empty() {
                    self.selected.remove(&field);
                } else {
                    self.selected.insert(field, values);
                }
            }
            ControlEvent::ClearFacet(field) => {
                self.selected.remove(&field);
            }
            ControlEvent::ClearAll => {
                self.term.clear();
                self.selected.clear();
            }
        }
    }

    /// Trimmed, lowercased search term. Empty means no text constraint.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Selected values for `field`, if the facet is active.
    pub fn selected(&self, field: FacetField) -> Option<&BTreeSet<String>> {
        self.selected.get(&field)
    }

    pub fn is_selected(&self, field: FacetField, value: &str) -> bool {
        self.selected.get(&field).is_some_and(|s| s.contains(value))
    }

    /// Active facets and their selections, in [`FacetField`] order.
    pub fn active_facets(&self) -> impl Iterator<Item = (FacetField, &BTreeSet<String>)> {
        self.selected.iter().map(|(f, s)| (*f, s))
    }

    /// True when neither the term nor any facet constrains the result.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.selected.is_empty()
    }
}

/// Trim then lowercase, as applied to every text input change.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a `field=value` expression into its parts.
///
/// Only the first `=` splits, so values may themselves contain `=`.
pub fn parse_facet_filter(expr: &str) -> Result<(FacetField, String), ExplorerError> {
    let (field, value) = expr
        .split_once('=')
        .ok_or_else(|| ExplorerError::InvalidFilter(expr.to_string()))?;
    Ok((field.parse()?, value.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
