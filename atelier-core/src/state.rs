//! The single mutable selection state and its transitions.
//!
//! Two orthogonal axes: which collection/sub-project is active, and which
//! certification (if any) the lightbox is showing. Every transition either
//! applies or is ignored; invalid requests (unknown ids, empty galleries)
//! never disturb the prior state.

use crate::content::{Catalogue, Collection, ContentError, SubProject};

/// Result of a requested transition, so the controller knows whether any
/// re-render is warranted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The active selection: collection, optional sub-project, and optional
/// lightbox index. Single-writer; mutated only by the interaction
/// controller in response to discrete user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    collection_id: String,
    project_id: Option<String>,
    lightbox: Option<usize>,
}

impl Selection {
    /// Initial state: the first collection in declaration order with its
    /// featured sub-project selected, lightbox closed.
    ///
    /// An empty catalogue is the only unrecoverable condition in the
    /// system: there is no first card to select.
    pub fn initial(catalogue: &Catalogue) -> Result<Self, ContentError> {
        let first = catalogue.first().ok_or(ContentError::EmptyCatalogue)?;
        Ok(Self {
            collection_id: first.id.clone(),
            project_id: first.featured_id().map(str::to_owned),
            lightbox: None,
        })
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    /// The active collection record.
    pub fn active_collection<'a>(&self, catalogue: &'a Catalogue) -> Option<&'a Collection> {
        catalogue.get(&self.collection_id)
    }

    /// The active sub-project record, when one is selected.
    pub fn active_project<'a>(&self, catalogue: &'a Catalogue) -> Option<&'a SubProject> {
        let project_id = self.project_id.as_deref()?;
        self.active_collection(catalogue)?.project(project_id)
    }

    /// Switch to another collection. Unknown ids are ignored. On success
    /// the sub-project selection resets and immediately resolves to the new
    /// collection's featured project (`None` for an empty project list).
    pub fn select_collection(&mut self, catalogue: &Catalogue, id: &str) -> Transition {
        let Some(collection) = catalogue.get(id) else {
            tracing::debug!(id, "ignoring selection of unknown collection");
            return Transition::Ignored;
        };
        self.collection_id = collection.id.clone();
        self.project_id = collection.featured_id().map(str::to_owned);
        Transition::Applied
    }

    /// Select a sub-project of the active collection, or `None` to return
    /// to the collection's default view. Ids outside the active collection
    /// are ignored.
    pub fn select_project(&mut self, catalogue: &Catalogue, id: Option<&str>) -> Transition {
        let Some(id) = id else {
            self.project_id = None;
            return Transition::Applied;
        };
        let belongs = self
            .active_collection(catalogue)
            .is_some_and(|c| c.project(id).is_some());
        if !belongs {
            tracing::debug!(id, collection = %self.collection_id, "ignoring selection of unknown sub-project");
            return Transition::Ignored;
        }
        self.project_id = Some(id.to_owned());
        Transition::Applied
    }

    // ============================================================
    // Lightbox (independent of collection/project selection)
    // ============================================================

    /// Open the lightbox at `index`. Out-of-range indexes (including any
    /// index into an empty gallery) are ignored.
    pub fn open_lightbox(&mut self, index: usize, count: usize) -> Transition {
        if index >= count {
            tracing::debug!(index, count, "ignoring out-of-range lightbox open");
            return Transition::Ignored;
        }
        self.lightbox = Some(index);
        Transition::Applied
    }

    /// Advance to the next certification, wrapping at the end.
    pub fn lightbox_next(&mut self, count: usize) -> Transition {
        match self.lightbox {
            Some(index) if count > 0 => {
                self.lightbox = Some((index + 1) % count);
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// Step back to the previous certification, wrapping at the start.
    pub fn lightbox_prev(&mut self, count: usize) -> Transition {
        match self.lightbox {
            Some(index) if count > 0 => {
                self.lightbox = Some((index + count - 1) % count);
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// Close the lightbox. Ignored when it is already closed.
    pub fn close_lightbox(&mut self) -> Transition {
        match self.lightbox.take() {
            Some(_) => Transition::Applied,
            None => Transition::Ignored,
        }
    }
}
