//! Book record shared by the catalog, recommendation, and library views.

/// A book as held in the client-side catalog snapshot.
///
/// `rating` is the backend's aggregated average; `0.0` means unrated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Genre string, either pre-cleaned at ingestion or raw list-like
    /// (`['Fantasy', 'Fiction']`). Consumers normalize it through
    /// `genre::clean_genre`, which is idempotent, so both forms compare equal.
    pub genre: String,
    pub rating: f64,
    pub description: String,
    pub cover_image: Option<String>,
}

impl Book {
    /// Cover image URL, falling back to a placeholder keyed by the book id.
    ///
    /// The same URL is used by views as the `onerror` fallback so a broken
    /// `cover_image` and a missing one render identically.
    pub fn cover_url(&self) -> String {
        match &self.cover_image {
            Some(url) if !url.is_empty() => url.clone(),
            _ => placeholder_cover(self.id),
        }
    }
}

/// Deterministic placeholder cover for a book id.
pub fn placeholder_cover(id: i64) -> String {
    format!("https://loremflickr.com/300/400/book,artwork/all?lock={id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_url_uses_image_when_present() {
        let book = Book {
            id: 7,
            cover_image: Some("https://covers.example/7.jpg".into()),
            ..Default::default()
        };
        assert_eq!(book.cover_url(), "https://covers.example/7.jpg");
    }

    #[test]
    fn test_cover_url_falls_back_when_absent() {
        let book = Book {
            id: 7,
            ..Default::default()
        };
        assert_eq!(book.cover_url(), placeholder_cover(7));
    }

    #[test]
    fn test_cover_url_falls_back_when_empty() {
        let book = Book {
            id: 7,
            cover_image: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(book.cover_url(), placeholder_cover(7));
    }

    #[test]
    fn test_placeholder_is_stable_per_id() {
        assert_eq!(placeholder_cover(3), placeholder_cover(3));
        assert_ne!(placeholder_cover(3), placeholder_cover(4));
    }
}
