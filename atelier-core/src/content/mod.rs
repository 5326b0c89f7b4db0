//! The read-only content catalogue.
//!
//! # Core Concepts
//!
//! - [`Collection`]: a themed grouping of sub-projects shown as one
//!   selectable card, with headline copy, metrics, and a workflow outline.
//! - [`SubProject`]: an individual showcased work item within a collection,
//!   carrying visuals, tags, and external links.
//! - [`Certification`]: a credential record shown in the gallery strip and
//!   the lightbox.
//! - [`Catalogue`]: the root container, deserialized once from a JSON
//!   fixture at startup and never mutated afterwards.

mod certification;
mod collection;
mod project;

pub use certification::*;
pub use collection::*;
pub use project::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or using the catalogue.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse catalogue fixture")]
    Fixture(#[from] serde_json::Error),
    #[error("catalogue has no collections")]
    EmptyCatalogue,
}

/// An invariant violation found by [`Catalogue::validate`].
///
/// Fatal violations make the fixture unusable; the rest describe data the
/// running UI silently degrades around (dangling featured ids resolve to the
/// first project in declaration order).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("duplicate collection id `{0}`")]
    DuplicateCollectionId(String),
    #[error("duplicate sub-project id `{project}` in collection `{collection}`")]
    DuplicateProjectId { collection: String, project: String },
    #[error("collection `{collection}` features unknown sub-project `{featured}`")]
    DanglingFeatured { collection: String, featured: String },
}

impl Violation {
    /// Whether this violation makes the fixture unusable (as opposed to
    /// something the UI degrades around).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DanglingFeatured { .. })
    }
}

/// The root content store: every collection plus the certification gallery,
/// in fixture declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    certifications: Vec<Certification>,
}

impl Catalogue {
    /// Parse a catalogue from JSON fixture text.
    pub fn from_json_str(text: &str) -> Result<Self, ContentError> {
        let catalogue: Self = serde_json::from_str(text)?;
        for violation in catalogue.validate() {
            tracing::warn!(%violation, "catalogue fixture violates an invariant");
        }
        Ok(catalogue)
    }

    /// Look up a collection by id. Unknown ids yield `None`; callers are
    /// expected to no-op rather than fail.
    pub fn get(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// The first collection in declaration order, if any.
    pub fn first(&self) -> Option<&Collection> {
        self.collections.first()
    }

    /// All collections in declaration order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Position of a collection id in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.collections.iter().position(|c| c.id == id)
    }

    /// The certification gallery in declaration order.
    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    /// Check the catalogue against its structural invariants.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (i, collection) in self.collections.iter().enumerate() {
            if self.collections[..i].iter().any(|c| c.id == collection.id) {
                violations.push(Violation::DuplicateCollectionId(collection.id.clone()));
            }

            for (j, project) in collection.projects.iter().enumerate() {
                if collection.projects[..j].iter().any(|p| p.id == project.id) {
                    violations.push(Violation::DuplicateProjectId {
                        collection: collection.id.clone(),
                        project: project.id.clone(),
                    });
                }
            }

            if let Some(featured) = &collection.featured_project {
                if collection.project(featured).is_none() {
                    violations.push(Violation::DanglingFeatured {
                        collection: collection.id.clone(),
                        featured: featured.clone(),
                    });
                }
            }
        }

        violations
    }
}
