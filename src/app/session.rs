// src/app/session.rs
use tracing::warn;

use crate::app::api::ApiError;
use crate::app::genres::GenreMap;
use crate::app::images::ImageUrlCache;
use crate::app::types::Genre;

/// Caches owned by one page load. Rebuilt on every navigation, so nothing
/// leaks across pages and renderers never share ambient globals.
pub struct PageSession {
    pub genres: GenreMap,
    pub images: ImageUrlCache,
    genres_loaded: bool,
}

impl PageSession {
    pub fn new(image_base: &str) -> Self {
        Self {
            genres: GenreMap::default(),
            images: ImageUrlCache::new(image_base),
            genres_loaded: false,
        }
    }

    /// Install the genre catalog fetch result. A failure leaves the map empty
    /// and lookups degrade to the placeholder; rendering is never blocked.
    pub fn install_genres(&mut self, result: Result<Vec<Genre>, ApiError>) {
        match result {
            Ok(genres) => {
                self.genres = GenreMap::from_genres(genres);
            }
            Err(e) => {
                warn!("genre catalog fetch failed: {e}");
            }
        }
        self.genres_loaded = true;
    }

    pub fn genres_loaded(&self) -> bool {
        self.genres_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::genres::UNKNOWN_GENRE;
    use crate::app::images::QualityTier;

    #[test]
    fn failed_genre_fetch_degrades_to_placeholder() {
        let mut s = PageSession::new("https://image.tmdb.org/t/p");
        assert!(!s.genres_loaded());
        s.install_genres(Err(ApiError::Aborted));
        assert!(s.genres_loaded());
        assert_eq!(s.genres.names_for(&[28], 4), vec![UNKNOWN_GENRE]);
    }

    #[test]
    fn successful_fetch_populates_map() {
        let mut s = PageSession::new("https://image.tmdb.org/t/p");
        s.install_genres(Ok(vec![Genre {
            id: 28,
            name: "Action".into(),
        }]));
        assert_eq!(s.genres.name_of(28), Some("Action"));
    }

    #[test]
    fn session_owns_an_independent_image_cache() {
        let mut s = PageSession::new("https://img.example/t");
        s.images.resolve(Some("/p.jpg"), QualityTier::Low);
        assert_eq!(s.images.len(), 1);
        // a fresh session re-derives its caches
        let s2 = PageSession::new("https://img.example/t");
        assert!(s2.images.is_empty());
    }
}
