//! Target-agnostic view descriptions.
//!
//! Every function here is a pure transform from (catalogue slice, selection)
//! to a plain value describing what a region should show. Re-invoking with
//! unchanged inputs reproduces a structurally equal value, so re-renders
//! after no-op transitions are safe, and the whole layer is testable without
//! a display surface. The `atelier` binary's terminal adapter is the only
//! code that turns these values into actual screen writes.

mod cards;
mod detail;
mod gallery;
mod visuals;

pub use cards::*;
pub use detail::*;
pub use gallery::*;
pub use visuals::*;

use crate::content::{Collection, Metric, SubProject, Tag};

/// Prompt shown in the detail pane when no sub-project is selected.
pub const SELECT_PROJECT_PROMPT: &str = "Select a project to see its highlights.";

/// Empty-state notice for a collection with no sub-projects.
pub const EMPTY_PROJECTS_NOTICE: &str =
    "Add project cards here once you are ready to showcase them.";

/// Placeholder when a collection has neither visuals nor workflow steps.
pub const NO_VISUALS_PLACEHOLDER: &str = "Visuals coming soon.";

/// Alt text applied to figures whose visual record left it blank.
pub const DEFAULT_FIGURE_ALT: &str = "Project visualization";

/// The collection header region: title, headline, description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionHeaderView {
    pub title: String,
    pub headline: String,
    pub description: String,
}

/// Build the header region for a collection.
pub fn collection_header(collection: &Collection) -> CollectionHeaderView {
    CollectionHeaderView {
        title: collection.title.clone(),
        headline: collection.headline.clone(),
        description: collection.description.clone(),
    }
}

/// One label/value row of the metrics region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricView {
    pub label: String,
    pub value: String,
}

/// Build the metrics region in declaration order. The result fully replaces
/// prior content; no stale rows survive a rebuild.
pub fn metrics(collection: &Collection) -> Vec<MetricView> {
    collection
        .metrics
        .iter()
        .map(|Metric { label, value }| MetricView {
            label: label.clone(),
            value: value.clone(),
        })
        .collect()
}

/// A rendered tag badge: inert text or a navigable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagView {
    Text(String),
    Link { label: String, url: String },
}

/// Map content tags onto their view shape.
pub fn tag_views(tags: &[Tag]) -> Vec<TagView> {
    tags.iter()
        .map(|tag| match tag {
            Tag::Plain(label) => TagView::Text(label.clone()),
            Tag::Link { label, url } => TagView::Link {
                label: label.clone(),
                url: url.clone(),
            },
        })
        .collect()
}

/// The live-region sentence narrating what just loaded.
///
/// Built from the same inputs as the visual pane so it always describes the
/// settled content: image figures announce "visuals loaded", the
/// workflow/placeholder fallback announces "snapshot loaded". The adapter
/// must publish this only after the swap commits.
pub fn announcement(collection: &Collection, project: Option<&SubProject>) -> String {
    let title = project.map_or(collection.title.as_str(), |p| p.title.as_str());
    match project_visuals(collection, project) {
        VisualPane::Figures(_) => format!("{title} visuals loaded"),
        VisualPane::Workflow(_) | VisualPane::Placeholder(_) => {
            format!("{title} snapshot loaded")
        }
    }
}
