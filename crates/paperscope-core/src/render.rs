//! Renderer: turns a filtered result into a host-independent view-model.
//!
//! A [`RenderedView`] fully describes what a host should show: the result
//! count line and one [`PaperCard`] per paper. Hosts replace whatever they
//! showed before with the new view; nothing is diffed or retained here.

use serde::Serialize;

use crate::types::{FacetField, Paper};

/// Label of the outbound document link on every card that has one.
pub const LINK_LABEL: &str = "Ver PDF";
/// Browsing context the link opens in.
pub const LINK_TARGET: &str = "_blank";
/// Link relation: no opener handle, no referrer.
pub const LINK_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub count: usize,
    /// `"<count> resultado(s)"`.
    pub count_text: String,
    pub cards: Vec<PaperCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperCard {
    pub title: String,
    /// Badges from the display fields, sequences flattened, falsy values dropped.
    pub tags: Vec<String>,
    /// Empty when the paper has no public abstract.
    pub abstract_text: String,
    pub link: Option<DocumentLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl DocumentLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: LINK_LABEL,
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

/// Format the result count line.
pub fn count_text(count: usize) -> String {
    format!("{count} resultado(s)")
}

/// Build the view for a filtered result.
pub fn render(papers: &[&Paper]) -> RenderedView {
    RenderedView {
        count: papers.len(),
        count_text: count_text(papers.len()),
        cards: papers.iter().map(|p| card(p)).collect(),
    }
}

/// Build the card for one paper.
pub fn card(paper: &Paper) -> PaperCard {
    let tags = FacetField::DISPLAY
        .into_iter()
        .flat_map(|field| paper.facet(field).scalars())
        .filter(|s| s.is_truthy())
        .map(|s| s.facet_string())
        .collect();

    let link = paper
        .pdf_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(DocumentLink::new);

    PaperCard {
        title: paper.title.clone(),
        tags,
        abstract_text: paper.abstract_public.clone().unwrap_or_default(),
        link,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
