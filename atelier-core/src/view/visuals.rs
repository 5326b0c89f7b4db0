use crate::content::{Collection, SubProject};

use super::{DEFAULT_FIGURE_ALT, NO_VISUALS_PLACEHOLDER};

/// What the visual grid shows: sub-project image figures, the collection's
/// numbered workflow outline, or a literal placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualPane {
    Figures(Vec<FigureView>),
    Workflow(Vec<WorkflowStepView>),
    Placeholder(&'static str),
}

/// One image figure: source, alt text, optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureView {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// One workflow entry, numbered from 1 with two-digit zero padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStepView {
    /// e.g. `01 · Collect`
    pub heading: String,
    pub detail: String,
}

/// The collection's default visual pane: its workflow outline when present,
/// otherwise the placeholder. This is the fallback whenever a sub-project
/// has no usable image visuals.
pub fn default_visuals(collection: &Collection) -> VisualPane {
    if collection.workflow.is_empty() {
        return VisualPane::Placeholder(NO_VISUALS_PLACEHOLDER);
    }
    let steps = collection
        .workflow
        .iter()
        .enumerate()
        .map(|(index, step)| WorkflowStepView {
            heading: format!("{:02} · {}", index + 1, step.label),
            detail: step.detail.clone(),
        })
        .collect();
    VisualPane::Workflow(steps)
}

/// The visual pane for a sub-project: its usable image visuals in list
/// order, or the owning collection's default pane when none exist (or no
/// sub-project is selected).
pub fn project_visuals(collection: &Collection, project: Option<&SubProject>) -> VisualPane {
    let figures: Vec<FigureView> = project
        .map(|p| {
            p.usable_visuals()
                .map(|visual| FigureView {
                    src: visual.src.clone(),
                    alt: if visual.alt.is_empty() {
                        DEFAULT_FIGURE_ALT.to_owned()
                    } else {
                        visual.alt.clone()
                    },
                    caption: visual.caption.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    if figures.is_empty() {
        default_visuals(collection)
    } else {
        VisualPane::Figures(figures)
    }
}
