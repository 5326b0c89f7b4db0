use serde::{Deserialize, Serialize};

/// A credential record shown in the certification gallery and lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Full-size image shown in the lightbox.
    pub image: String,
    /// Grid thumbnail. Cards fall back to the full-size image when this is
    /// absent or fails to load.
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub alt: String,
    pub caption: String,
}

impl Certification {
    /// The source a gallery card should display.
    pub fn display_thumbnail(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.image)
    }
}
