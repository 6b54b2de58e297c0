//! Host surface contract.
//!
//! A [`Surface`] is whatever draws the explorer: the terminal UI, a browser
//! page, or the [`HeadlessSurface`] used by the CLI and the tests. It must
//! expose the four [`MountPoint`]s, accept the facet controls once, and
//! present every new [`RenderedView`] in full.

use crate::render::RenderedView;
use crate::types::FacetField;

/// Number of option rows a facet control shows without scrolling.
pub const FACET_VISIBLE_ROWS: usize = 5;

/// Containers a host must provide before the explorer can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    Filters,
    Search,
    ResultCount,
    Papers,
}

impl MountPoint {
    pub const REQUIRED: [MountPoint; 4] = [
        MountPoint::Filters,
        MountPoint::Search,
        MountPoint::ResultCount,
        MountPoint::Papers,
    ];

    /// Stable element identifier.
    pub fn id(self) -> &'static str {
        match self {
            MountPoint::Filters => "filters",
            MountPoint::Search => "search",
            MountPoint::ResultCount => "result-count",
            MountPoint::Papers => "papers-container",
        }
    }
}

impl std::fmt::Display for MountPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything a host needs to build one multi-select facet control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetControl {
    pub field: FacetField,
    pub label: &'static str,
    pub options: Vec<String>,
    pub visible_rows: usize,
}

pub trait Surface {
    /// Whether the host provides `mount`.
    fn has_mount(&self, mount: MountPoint) -> bool;

    /// Build the facet controls. Called once, before the first
    /// [`present`](Surface::present).
    fn build_controls(&mut self, controls: Vec<FacetControl>);

    /// Replace the visible result with `view`.
    fn present(&mut self, view: &RenderedView);
}

// ---------------------------------------------------------------------------
// HeadlessSurface
// ---------------------------------------------------------------------------

/// A surface that records what it was given instead of drawing it.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    mounts: Vec<MountPoint>,
    pub controls: Vec<FacetControl>,
    pub view: Option<RenderedView>,
    /// Number of times [`Surface::present`] has been called.
    pub presents: usize,
}

impl HeadlessSurface {
    /// A surface with every required mount point.
    pub fn new() -> Self {
        Self::with_mounts(&MountPoint::REQUIRED)
    }

    pub fn with_mounts(mounts: &[MountPoint]) -> Self {
        Self {
            mounts: mounts.to_vec(),
            controls: Vec::new(),
            view: None,
            presents: 0,
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    fn build_controls(&mut self, controls: Vec<FacetControl>) {
        self.controls = controls;
    }

    fn present(&mut self, view: &RenderedView) {
        self.view = Some(view.clone());
        self.presents += 1;
    }
}
