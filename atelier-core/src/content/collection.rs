use serde::{Deserialize, Serialize};

use super::SubProject;

/// A themed grouping of sub-projects shown as one selectable card.
///
/// Collections are the top-level organizational unit of the catalogue. Each
/// one carries its own headline copy, a metrics list, a workflow outline
/// (used as the fallback visual when a sub-project has no usable imagery),
/// and an ordered list of sub-projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub headline: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub workflow: Vec<WorkflowStep>,
    #[serde(default)]
    pub projects: Vec<SubProject>,
    /// Sub-project shown first and selected by default. Absent or dangling
    /// ids resolve to the first project in declaration order.
    #[serde(default)]
    pub featured_project: Option<String>,
}

impl Collection {
    /// Look up a sub-project by id within this collection.
    pub fn project(&self, id: &str) -> Option<&SubProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve the featured sub-project id: the declared `featured_project`
    /// when it names an existing project, otherwise the first project in
    /// declaration order. `None` only when the project list is empty.
    pub fn featured_id(&self) -> Option<&str> {
        if let Some(featured) = &self.featured_project {
            if self.project(featured).is_some() {
                return Some(featured);
            }
        }
        self.projects.first().map(|p| p.id.as_str())
    }

    /// Sub-projects in display order: featured first, then the remainder in
    /// declaration order.
    pub fn ordered_projects(&self) -> Vec<&SubProject> {
        let Some(featured) = self.featured_id() else {
            return Vec::new();
        };
        let mut ordered = Vec::with_capacity(self.projects.len());
        if let Some(first) = self.project(featured) {
            ordered.push(first);
        }
        ordered.extend(self.projects.iter().filter(|p| p.id != featured));
        ordered
    }
}

/// A label/value pair shown in the details metrics list.
///
/// Serialized as a two-element array in the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl From<(String, String)> for Metric {
    fn from((label, value): (String, String)) -> Self {
        Self { label, value }
    }
}

impl From<Metric> for (String, String) {
    fn from(metric: Metric) -> Self {
        (metric.label, metric.value)
    }
}

/// One step of a collection's workflow outline.
///
/// Serialized as a two-element array in the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct WorkflowStep {
    pub label: String,
    pub detail: String,
}

impl From<(String, String)> for WorkflowStep {
    fn from((label, detail): (String, String)) -> Self {
        Self { label, detail }
    }
}

impl From<WorkflowStep> for (String, String) {
    fn from(step: WorkflowStep) -> Self {
        (step.label, step.detail)
    }
}
