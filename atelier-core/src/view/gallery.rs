use crate::content::Certification;

/// One activatable certification card in the gallery strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationCardView {
    /// Source the card displays: the thumbnail, falling back to the
    /// full-size image when no thumbnail exists. Adapters apply the same
    /// fallback when a thumbnail fails to load.
    pub thumbnail: String,
    pub full_image: String,
    pub alt: String,
    pub caption: String,
}

/// Build the certification gallery cards in declaration order.
pub fn certification_cards(certifications: &[Certification]) -> Vec<CertificationCardView> {
    certifications
        .iter()
        .map(|cert| CertificationCardView {
            thumbnail: cert.display_thumbnail().to_owned(),
            full_image: cert.image.clone(),
            alt: cert.alt.clone(),
            caption: cert.caption.clone(),
        })
        .collect()
}

/// The modal lightbox overlay for one certification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// 1-based position label, e.g. `3 / 7`.
    pub position: String,
    pub index: usize,
    pub count: usize,
}

/// Build the lightbox view for the certification at `index`, if the gallery
/// has one there.
pub fn lightbox(certifications: &[Certification], index: usize) -> Option<LightboxView> {
    let cert = certifications.get(index)?;
    Some(LightboxView {
        src: cert.image.clone(),
        alt: cert.alt.clone(),
        caption: cert.caption.clone(),
        position: format!("{} / {}", index + 1, certifications.len()),
        index,
        count: certifications.len(),
    })
}
