use std::{env, fs, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// TMDB API key. `TMDB_API_KEY` in the environment wins over config.json.
    pub api_key: Option<String>,
    pub api_base: String,
    pub image_base: String,
    pub cache_dir: Option<String>,
    pub request_timeout_secs: u64,
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            cache_dir: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_key: Option<String>,
    api_base: Option<String>,
    image_base: Option<String>,
    cache_dir: Option<String>,
    request_timeout_secs: Option<u64>,
    debounce_ms: Option<u64>,
    min_query_len: Option<usize>,
    max_suggestions: Option<usize>,
}

pub fn load_config() -> AppConfig {
    let cfg_path = PathBuf::from("config.json");
    let mut cfg = AppConfig::default();

    match fs::read_to_string(&cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if parsed.api_key.is_some() {
                    cfg.api_key = parsed.api_key;
                }
                if let Some(base) = parsed.api_base {
                    cfg.api_base = base;
                }
                if let Some(base) = parsed.image_base {
                    cfg.image_base = base;
                }
                if parsed.cache_dir.is_some() {
                    cfg.cache_dir = parsed.cache_dir;
                }
                if let Some(secs) = parsed.request_timeout_secs {
                    cfg.request_timeout_secs = secs.clamp(1, 120);
                }
                if let Some(ms) = parsed.debounce_ms {
                    cfg.debounce_ms = ms.clamp(50, 2_000);
                }
                if let Some(n) = parsed.min_query_len {
                    cfg.min_query_len = n.clamp(1, 8);
                }
                if let Some(n) = parsed.max_suggestions {
                    cfg.max_suggestions = n.clamp(1, 20);
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!("Failed to parse config.json ({}). Using defaults.", err);
            }
        },
        Err(_) => {
            info!("No config.json found; using defaults");
        }
    }

    if let Ok(key) = env::var("TMDB_API_KEY") {
        let key = key.trim().to_string();
        if !key.is_empty() {
            cfg.api_key = Some(key);
        }
    }
    if cfg.api_key.is_none() {
        warn!("No TMDB API key configured (TMDB_API_KEY or config.json `api_key`).");
    }

    cfg
}

pub fn default_cache_dir() -> PathBuf {
    PathBuf::from(".reelgrid_cache")
}
