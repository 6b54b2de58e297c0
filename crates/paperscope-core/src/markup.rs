//! HTML markup for a [`RenderedView`].
//!
//! Produces the card structure a browser host mounts into the papers
//! container:
//!
//! ```text
//! div.paper-card
//!   h3            title
//!   div.tags      span.tag per badge
//!   p             abstract
//!   a             "Ver PDF" (only with a pdf_url)
//! ```
//!
//! All text and attribute values are escaped.

use std::fmt::Write;

use crate::render::{PaperCard, RenderedView};

/// Render the card list of `view` as HTML.
pub fn cards_html(view: &RenderedView) -> String {
    let mut out = String::new();
    for card in &view.cards {
        write_card(&mut out, card);
    }
    out
}

/// Render the count line and card list as a standalone fragment.
pub fn to_html(view: &RenderedView) -> String {
    format!(
        "<div id=\"result-count\">{}</div>\n<div id=\"papers-container\">\n{}</div>\n",
        escape(&view.count_text),
        cards_html(view)
    )
}

fn write_card(out: &mut String, card: &PaperCard) {
    out.push_str("<div class=\"paper-card\">");
    let _ = write!(out, "<h3>{}</h3>", escape(&card.title));
    out.push_str("<div class=\"tags\">");
    for tag in &card.tags {
        let _ = write!(out, "<span class=\"tag\">{}</span>", escape(tag));
    }
    out.push_str("</div>");
    let _ = write!(out, "<p>{}</p>", escape(&card.abstract_text));
    if let Some(link) = &card.link {
        let _ = write!(
            out,
            "<a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
            escape(&link.href),
            link.target,
            link.rel,
            escape(link.label)
        );
    }
    out.push_str("</div>\n");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
