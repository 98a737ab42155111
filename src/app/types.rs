// src/app/types.rs
use std::path::PathBuf;

use eframe::egui::TextureHandle;
use serde::Deserialize;

use crate::app::api::ApiError;
use crate::app::cache::url_to_cache_key;

// ---- API payloads ----

/// One movie as it appears in listing/search responses. Immutable snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

impl MovieSummary {
    /// Poster first, backdrop as a stand-in, like the original cards.
    pub fn any_poster_path(&self) -> Option<&str> {
        self.poster_path
            .as_deref()
            .or(self.backdrop_path.as_deref())
    }

    pub fn any_backdrop_path(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieListing {
    #[serde(default = "one")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn one() -> u32 {
    1
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Movie-by-id payload; carries resolved `genres` instead of `genre_ids`.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetail {
    pub fn any_poster_path(&self) -> Option<&str> {
        self.poster_path
            .as_deref()
            .or(self.backdrop_path.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ImageRecord {
    pub file_path: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageCollection {
    #[serde(default)]
    pub backdrops: Vec<ImageRecord>,
    #[serde(default)]
    pub posters: Vec<ImageRecord>,
}

impl ImageCollection {
    /// Backdrops when present, posters otherwise (original detail-page rule).
    pub fn pictures(&self) -> &[ImageRecord] {
        if self.backdrops.is_empty() {
            &self.posters
        } else {
            &self.backdrops
        }
    }
}

/// Joined result of the detail page's four parallel fetches.
pub struct DetailBundle {
    pub movie: MovieDetail,
    pub credits: Credits,
    pub images: ImageCollection,
    pub genres: Vec<Genre>,
}

// ---- cross-thread messages ----

pub enum FetchMsg {
    Genres {
        nav_seq: u64,
        result: Result<Vec<Genre>, ApiError>,
    },
    Listing {
        nav_seq: u64,
        result: Result<MovieListing, ApiError>,
    },
    Detail {
        nav_seq: u64,
        result: Box<Result<DetailBundle, ApiError>>,
    },
    /// Per-card director/cast line on the genre page (secondary data).
    CardCredits {
        nav_seq: u64,
        row_idx: usize,
        result: Result<Credits, ApiError>,
    },
    Suggestions {
        seq: u64,
        result: Result<Vec<MovieSummary>, ApiError>,
    },
}

/// Where a finished poster download lands on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtSlot {
    Card(usize),
    Hero(usize),
    DetailPoster,
    Cast(usize),
    Picture(usize),
    Suggest(usize),
}

pub struct PosterJob {
    pub nav_seq: u64,
    pub slot: ArtSlot,
    pub key: String,
    pub url: String,
    pub cached_path: Option<PathBuf>,
}

pub struct PosterDone {
    pub nav_seq: u64,
    pub slot: ArtSlot,
    /// Cache key the job was queued for. A slot can be re-populated with
    /// different art while a download is in flight (suggestion lists rebuild
    /// within one navigation), so completions must match the key too.
    pub key: String,
    pub result: Result<PathBuf, String>,
}

// ---- per-card art state ----

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterState {
    Pending, // queued or downloading
    Cached,  // file present on disk (ready to upload)
    Ready,   // texture uploaded
    Failed,  // permanent failure; paint the placeholder
}

/// Poster/backdrop/profile art backing one visual slot.
pub struct CardArt {
    pub url: Option<String>,
    pub key: String,
    pub path: Option<PathBuf>,
    pub tex: Option<TextureHandle>, // UI thread only
    pub state: PosterState,
}

impl CardArt {
    pub fn from_url(url: Option<String>) -> Self {
        match url {
            Some(u) => {
                let key = url_to_cache_key(&u);
                Self {
                    url: Some(u),
                    key,
                    path: None,
                    tex: None,
                    state: PosterState::Pending,
                }
            }
            None => Self {
                url: None,
                key: String::new(),
                path: None,
                tex: None,
                state: PosterState::Failed,
            },
        }
    }
}

/// Director + top cast names shown on genre-page cards.
#[derive(Clone, Debug, Default)]
pub struct CardExtra {
    pub director: Option<String>,
    pub top_cast: Vec<String>,
}

pub struct MovieCard {
    pub movie: MovieSummary,
    pub art: CardArt,
    pub extra: Option<CardExtra>,
}
