use crate::content::{Collection, SubProject};

use super::{project_visuals, tag_views, TagView, VisualPane, SELECT_PROJECT_PROMPT};

/// The sub-project detail pane together with its visual grid. The two swap
/// as one unit during transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailView {
    /// Sub-project title, or the selection prompt when nothing is chosen.
    pub title: String,
    pub summary: Option<String>,
    pub tags: Vec<TagView>,
    /// Preformatted code block, rendered literally with no markup
    /// interpretation.
    pub snippet: Option<String>,
    pub visuals: VisualPane,
}

/// Build the detail pane. With no selection, the prompt is shown, the
/// optional fragments are cleared entirely, and the collection's default
/// visuals still render.
pub fn project_detail(collection: &Collection, project: Option<&SubProject>) -> ProjectDetailView {
    let visuals = project_visuals(collection, project);
    match project {
        Some(project) => ProjectDetailView {
            title: project.title.clone(),
            summary: Some(project.summary.clone()),
            tags: tag_views(&project.tags),
            snippet: project.snippet.clone(),
            visuals,
        },
        None => ProjectDetailView {
            title: SELECT_PROJECT_PROMPT.to_owned(),
            summary: None,
            tags: Vec::new(),
            snippet: None,
            visuals,
        },
    }
}
