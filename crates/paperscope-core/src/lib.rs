//! paperscope-core: faceted paper explorer core library.
//!
//! This crate holds everything that does not depend on a particular host:
//! the paper model, the facet index, the filter state, the predicate engine,
//! the renderer and the [`Explorer`] controller that ties them together.
//!
//! # Architecture
//!
//! ```text
//! Papers ──► FacetIndex ──► Surface (facet controls)
//!                              │
//!                        ControlEvent
//!                              ▼
//!            FilterState ──► predicate ──► render ──► Surface (cards + count)
//! ```
//!
//! Everything runs synchronously on the caller's thread. Hosts implement
//! [`Surface`]; the terminal UI lives in `paperscope-tui`.

pub mod config;
pub mod error;
pub mod explorer;
pub mod facets;
pub mod filter;
pub mod markup;
pub mod predicate;
pub mod render;
pub mod surface;
pub mod types;

pub use error::ExplorerError;
pub use explorer::Explorer;
pub use filter::{ControlEvent, FilterState};
pub use render::{PaperCard, RenderedView};
pub use surface::{HeadlessSurface, MountPoint, Surface};
pub use types::{FacetField, FacetValue, Paper, Scalar};
