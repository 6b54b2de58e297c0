//! Explorer: owns the collection, the facet index and the filter state, and
//! runs the recompute + render cycle for every control event.
//!
//! ```text
//! ControlEvent ──► FilterState::apply ──► predicate::filter ──► render ──► Surface::present
//! ```
//!
//! Every cycle is synchronous and recomputes from scratch.

use crate::error::ExplorerError;
use crate::facets::FacetIndex;
use crate::filter::{ControlEvent, FilterState};
use crate::predicate;
use crate::render::{self, RenderedView};
use crate::surface::{FacetControl, MountPoint, Surface, FACET_VISIBLE_ROWS};
use crate::types::{FacetField, Paper};

#[derive(Debug, Clone)]
pub struct Explorer {
    papers: Vec<Paper>,
    index: FacetIndex,
    state: FilterState,
}

impl Explorer {
    /// Take a private copy of `papers` and index its facets.
    pub fn new(papers: &[Paper]) -> Self {
        let papers = papers.to_vec();
        let index = FacetIndex::build(&papers);
        tracing::debug!(papers = papers.len(), "explorer initialised");
        Self {
            papers,
            index,
            state: FilterState::new(),
        }
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// One control per facet field, options taken from the index.
    pub fn controls(&self) -> Vec<FacetControl> {
        FacetField::ALL
            .into_iter()
            .map(|field| FacetControl {
                field,
                label: field.label(),
                options: self.index.options(field).to_vec(),
                visible_rows: FACET_VISIBLE_ROWS,
            })
            .collect()
    }

    /// Verify the host's mount points, build its controls and present the
    /// initial view.
    pub fn attach<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), ExplorerError> {
        if let Some(missing) = MountPoint::REQUIRED
            .into_iter()
            .find(|m| !surface.has_mount(*m))
        {
            return Err(ExplorerError::MissingMount(missing));
        }
        surface.build_controls(self.controls());
        surface.present(&self.view());
        Ok(())
    }

    /// Apply `event` to the filter state without rendering.
    pub fn apply(&mut self, event: ControlEvent) {
        tracing::debug!(event = ?event, "control event");
        self.state.apply(event);
    }

    /// Apply `event`, recompute and present the new view.
    pub fn dispatch<S: Surface + ?Sized>(&mut self, event: ControlEvent, surface: &mut S) {
        self.apply(event);
        surface.present(&self.view());
    }

    /// Papers matching the current state, in source order.
    pub fn filtered(&self) -> Vec<&Paper> {
        predicate::filter(&self.papers, &self.state)
    }

    /// Recompute and render the current state.
    pub fn view(&self) -> RenderedView {
        let view = render::render(&self.filtered());
        tracing::debug!(
            term = %self.state.term(),
            active_facets = self.state.active_facets().count(),
            count = view.count,
            "view recomputed"
        );
        view
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;
    use crate::types::FacetValue;
    use pretty_assertions::assert_eq;

    fn papers() -> Vec<Paper> {
        vec![
            Paper {
                title: "ECG Study".into(),
                abstract_public: Some("deep learning on ECG".into()),
                uses_dl: FacetValue::Scalar("yes".into()),
                task: vec!["classification", "detection"].into(),
                ..Default::default()
            },
            Paper {
                title: "MRI Atlas".into(),
                abstract_public: Some("no DL used".into()),
                uses_dl: FacetValue::Scalar("no".into()),
                task: vec!["segmentation"].into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn attach_builds_controls_and_presents_everything() {
        let explorer = Explorer::new(&papers());
        let mut surface = HeadlessSurface::new();
        explorer.attach(&mut surface).unwrap();

        assert_eq!(surface.controls.len(), FacetField::ALL.len());
        let task = surface
            .controls
            .iter()
            .find(|c| c.field == FacetField::Task)
            .unwrap();
        assert_eq!(task.label, "Tarea");
        assert_eq!(task.options, vec!["classification", "detection", "segmentation"]);
        assert_eq!(task.visible_rows, 5);

        let view = surface.view.unwrap();
        assert_eq!(view.count_text, "2 resultado(s)");
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn attach_fails_without_mount_point() {
        let explorer = Explorer::new(&papers());
        let mut surface = HeadlessSurface::with_mounts(&[
            MountPoint::Filters,
            MountPoint::Search,
            MountPoint::Papers,
        ]);
        assert_eq!(
            explorer.attach(&mut surface),
            Err(ExplorerError::MissingMount(MountPoint::ResultCount))
        );
        assert!(surface.view.is_none());
    }

    #[test]
    fn dispatch_presents_after_each_event() {
        let mut explorer = Explorer::new(&papers());
        let mut surface = HeadlessSurface::new();
        explorer.attach(&mut surface).unwrap();

        explorer.dispatch(ControlEvent::SetTerm("ecg".into()), &mut surface);
        assert_eq!(surface.view.as_ref().unwrap().count, 1);
        explorer.dispatch(ControlEvent::ClearAll, &mut surface);
        assert_eq!(surface.view.as_ref().unwrap().count, 2);
        assert_eq!(surface.presents, 3);
    }

    #[test]
    fn source_copy_is_independent() {
        let mut source = papers();
        let explorer = Explorer::new(&source);
        source[0].title = "changed".into();
        assert_eq!(explorer.papers()[0].title, "ECG Study");
    }
}
