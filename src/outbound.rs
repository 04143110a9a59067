// SPDX-License-Identifier: MPL-2.0
//! Links leaving the application: purchase inquiries and social profiles.

use crate::domain::Artwork;
use crate::error::{Error, Result};

/// Builds a `mailto:` link asking about `artwork`.
#[must_use]
pub fn inquiry_mailto(email: &str, artwork: &Artwork) -> String {
    let subject = format!("Inquiry about \"{}\"", artwork.title());
    let body = format!(
        "Hi,\n\n\
         I'm interested in learning more about \"{title}\" ({year}).\n\n\
         Details:\n\
         \u{2022} Medium: {medium}\n\
         \u{2022} Dimensions: {dimensions}\n\n\
         Please let me know about pricing and availability.\n\n\
         Thank you!",
        title = artwork.title(),
        year = artwork.year(),
        medium = artwork.medium(),
        dimensions = artwork.dimensions(),
    );
    format!(
        "mailto:{email}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Plain `mailto:` link.
#[must_use]
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// Opens `url` with the platform handler.
pub fn open(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with("mailto:")) {
        return Err(Error::Io(format!("refusing to open link: {url}")));
    }
    webbrowser::open(url)?;
    tracing::info!(url, "opened external link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Year;

    fn artwork() -> Artwork {
        Artwork::builder("3", "Vestige", Year::new(2023).unwrap(), "a.jpg")
            .medium("Mixed media on paper")
            .dimensions("18x24 in")
            .build()
    }

    #[test]
    fn inquiry_encodes_subject_and_body() {
        let link = inquiry_mailto("studio@example.com", &artwork());
        assert!(link.starts_with("mailto:studio@example.com?subject="));
        assert!(link.contains("subject=Inquiry%20about%20%22Vestige%22"));
        assert!(link.contains("%282023%29"));
        assert!(link.contains("Medium%3A%20Mixed%20media%20on%20paper"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn open_rejects_unknown_schemes() {
        assert!(open("file:///etc/passwd").is_err());
    }
}
