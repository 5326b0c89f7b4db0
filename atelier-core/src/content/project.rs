use serde::{Deserialize, Serialize};

/// An individual showcased work item within a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubProject {
    /// Unique within the parent collection's project list.
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Explicit card thumbnail. Cards fall back to the first visual's
    /// source when absent.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub visuals: Vec<Visual>,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    /// Opaque code block rendered as preformatted literal text.
    #[serde(default)]
    pub snippet: Option<String>,
}

impl SubProject {
    /// Visuals usable in the image grid: kind `image` with a non-empty
    /// source. Anything else defers to the collection's workflow view.
    pub fn usable_visuals(&self) -> impl Iterator<Item = &Visual> {
        self.visuals
            .iter()
            .filter(|v| v.kind == VisualKind::Image && !v.src.is_empty())
    }

    /// Card thumbnail source: the explicit `thumbnail` field, else the
    /// first visual's source.
    pub fn card_thumbnail(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .or_else(|| self.visuals.first().map(|v| v.src.as_str()))
    }
}

/// A badge attached to a sub-project: either inert text or a navigable
/// link. The fixture writes plain tags as bare strings and link tags as
/// `{label, url}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Link { label: String, url: String },
    Plain(String),
}

impl Tag {
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } => label,
            Self::Plain(label) => label,
        }
    }
}

/// An image asset with accessible alt text and optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    #[serde(rename = "type")]
    pub kind: VisualKind,
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// The kind of a visual. Only images exist today; unrecognized kinds are
/// preserved verbatim and never reach the image grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualKind {
    Image,
    Other(String),
}

impl VisualKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::Other(kind) => kind,
        }
    }
}

impl Serialize for VisualKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VisualKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "image" => Self::Image,
            _ => Self::Other(kind),
        })
    }
}

/// An external reference attached to a sub-project card. Adapters that can
/// navigate must open these in a new browsing context with no opener or
/// referrer back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}
