use crate::content::Collection;

use super::{tag_views, TagView, EMPTY_PROJECTS_NOTICE};

/// The sub-project list region: one card per project in featured-first
/// order, or the empty-state notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectList {
    Cards(Vec<ProjectCardView>),
    Empty(&'static str),
}

impl ProjectList {
    pub fn cards(&self) -> &[ProjectCardView] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

/// One activatable sub-project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardView {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Explicit thumbnail, else the first visual's source.
    pub thumbnail: Option<String>,
    pub tags: Vec<TagView>,
    pub links: Vec<LinkView>,
    /// Position in the staggered entrance, starting at 0.
    pub reveal_index: usize,
}

/// An external reference on a card. Adapters that can navigate must open
/// the url in a new browsing context with no opener or referrer
/// back-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub url: String,
}

/// Build the sub-project card list for a collection, featured-first.
/// Links with empty urls are dropped rather than rendered dead.
pub fn project_cards(collection: &Collection) -> ProjectList {
    let ordered = collection.ordered_projects();
    if ordered.is_empty() {
        return ProjectList::Empty(EMPTY_PROJECTS_NOTICE);
    }

    let cards = ordered
        .into_iter()
        .enumerate()
        .map(|(reveal_index, project)| ProjectCardView {
            id: project.id.clone(),
            title: project.title.clone(),
            summary: project.summary.clone(),
            thumbnail: project.card_thumbnail().map(str::to_owned),
            tags: tag_views(&project.tags),
            links: project
                .links
                .iter()
                .filter(|link| !link.url.is_empty())
                .map(|link| LinkView {
                    label: link.label.clone(),
                    url: link.url.clone(),
                })
                .collect(),
            reveal_index,
        })
        .collect();
    ProjectList::Cards(cards)
}
