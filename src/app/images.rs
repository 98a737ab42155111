// src/app/images.rs — image URL resolution with per-session memoization.

use std::collections::HashMap;

use tracing::debug;

/// Sentinel returned when no image path exists. The texture layer paints the
/// placeholder rectangle for it instead of fetching.
pub const PLACEHOLDER_URL: &str = "placeholder://profile";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QualityTier {
    Low,
    Original,
}

impl QualityTier {
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Low => "w500",
            Self::Original => "original",
        }
    }
}

/// Maps (tier, cleaned path) to an absolute URL. Append-only for the life of
/// a page session; the image host's URLs are stable for a given path.
pub struct ImageUrlCache {
    base: String,
    entries: HashMap<(QualityTier, String), String>,
}

impl ImageUrlCache {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            entries: HashMap::new(),
        }
    }

    /// Resolve a relative image path to an absolute URL. Absent or empty paths
    /// yield [`PLACEHOLDER_URL`]. Idempotent for a given (path, tier).
    pub fn resolve(&mut self, path: Option<&str>, tier: QualityTier) -> String {
        let Some(path) = path else {
            return PLACEHOLDER_URL.to_string();
        };
        let clean = path.strip_prefix('/').unwrap_or(path);
        if clean.is_empty() {
            return PLACEHOLDER_URL.to_string();
        }
        if let Some(hit) = self.entries.get(&(tier, clean.to_string())) {
            return hit.clone();
        }
        let url = format!("{}/{}/{}", self.base, tier.path_segment(), clean);
        debug!("resolved image URL: {url}");
        self.entries.insert((tier, clean.to_string()), url.clone());
        url
    }

    /// Like [`resolve`](Self::resolve) but `None` for absent paths, so callers
    /// can skip the download entirely.
    pub fn resolve_opt(&mut self, path: Option<&str>, tier: QualityTier) -> Option<String> {
        match self.resolve(path, tier) {
            url if url == PLACEHOLDER_URL => None,
            url => Some(url),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> ImageUrlCache {
        ImageUrlCache::new("https://image.tmdb.org/t/p")
    }

    #[test]
    fn resolves_both_tiers() {
        let mut c = cache();
        assert_eq!(
            c.resolve(Some("/abc.jpg"), QualityTier::Low),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            c.resolve(Some("/abc.jpg"), QualityTier::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn strips_exactly_one_leading_slash() {
        let mut c = cache();
        assert_eq!(
            c.resolve(Some("//weird.jpg"), QualityTier::Low),
            "https://image.tmdb.org/t/p/w500//weird.jpg"
        );
    }

    #[test]
    fn memoizes_repeat_lookups() {
        let mut c = cache();
        let a = c.resolve(Some("/poster.jpg"), QualityTier::Low);
        let b = c.resolve(Some("poster.jpg"), QualityTier::Low); // same after cleaning
        assert_eq!(a, b);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn absent_and_empty_paths_fall_back() {
        let mut c = cache();
        assert_eq!(c.resolve(None, QualityTier::Low), PLACEHOLDER_URL);
        assert_eq!(c.resolve(Some(""), QualityTier::Original), PLACEHOLDER_URL);
        assert_eq!(c.resolve(Some("/"), QualityTier::Low), PLACEHOLDER_URL);
        // Fallbacks never populate the cache.
        assert!(c.is_empty());
        assert_eq!(c.resolve_opt(None, QualityTier::Low), None);
    }
}
