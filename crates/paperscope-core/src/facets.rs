//! Facet index: the sorted, de-duplicated option list for every facet field.
//!
//! Built once from the full collection before any control is shown. Options
//! are compared and sorted as strings in code-point order, independent of
//! locale.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{FacetField, Paper};

/// Collect the distinct stringified values of `field` across `papers`,
/// sorted ascending. Absent values contribute nothing.
pub fn build_options(papers: &[Paper], field: FacetField) -> Vec<String> {
    let set: BTreeSet<String> = papers
        .iter()
        .flat_map(|p| p.facet(field).scalars())
        .map(|s| s.facet_string())
        .collect();
    set.into_iter().collect()
}

/// Option lists for every entry of [`FacetField::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetIndex {
    options: BTreeMap<FacetField, Vec<String>>,
}

impl FacetIndex {
    pub fn build(papers: &[Paper]) -> Self {
        let options = FacetField::ALL
            .into_iter()
            .map(|field| {
                let opts = build_options(papers, field);
                tracing::debug!(facet = %field, options = opts.len(), "facet options built");
                (field, opts)
            })
            .collect();
        Self { options }
    }

    /// Sorted options for `field`; empty when no paper carries a value.
    pub fn options(&self, field: FacetField) -> &[String] {
        self.options.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: FacetField, value: &str) -> bool {
        self.options(field)
            .binary_search_by(|o| o.as_str().cmp(value))
            .is_ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
