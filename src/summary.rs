//! ASCII tree rendering for catalogue summaries.

use atelier_core::content::{Catalogue, Collection, SubProject};

const HAS_VISUALS: char = '●';
const WORKFLOW_FALLBACK: char = '○';
const FEATURED: char = '★';

/// Get the status symbol for a sub-project: filled when it has usable
/// image visuals, hollow when it will fall back to the workflow view.
fn project_symbol(project: &SubProject) -> char {
    if project.usable_visuals().next().is_some() {
        HAS_VISUALS
    } else {
        WORKFLOW_FALLBACK
    }
}

/// Render the catalogue as an ASCII tree with status symbols.
///
/// Example output:
/// ```text
/// Climate & Weather Forecasting
/// ├── ★ ● Weather CMIP Data Downscaling
/// └── ● FogNet-v2.0 Vision Transformer
/// ML Tools
/// └── (no projects yet)
/// ```
pub fn render_catalogue(catalogue: &Catalogue) -> String {
    let mut output = String::new();
    for collection in catalogue.collections() {
        render_collection(&mut output, collection);
    }
    output
}

/// Render one collection's title line and its sub-project branches in
/// display (featured-first) order.
fn render_collection(output: &mut String, collection: &Collection) {
    output.push_str(&collection.title);
    output.push('\n');

    let ordered = collection.ordered_projects();
    if ordered.is_empty() {
        output.push_str("└── (no projects yet)\n");
        return;
    }

    let featured = collection.featured_id();
    for (i, project) in ordered.iter().enumerate() {
        let is_last = i == ordered.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(branch);
        if featured == Some(project.id.as_str()) {
            output.push(FEATURED);
            output.push(' ');
        }
        output.push(project_symbol(project));
        output.push(' ');
        output.push_str(&project.title);
        output.push('\n');
    }
}
