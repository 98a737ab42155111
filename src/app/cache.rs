// src/app/cache.rs — on-disk poster store shared by the worker pool.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use image::{GenericImageView, ImageFormat};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use tracing::warn;

use crate::config::{default_cache_dir, load_config};

const POSTER_RETENTION_DAYS: u64 = 14;
const POSTER_RETENTION_SECS: u64 = POSTER_RETENTION_DAYS * 24 * 60 * 60;

static CACHE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let cfg = load_config();
    let mut path = cfg
        .cache_dir
        .map(PathBuf::from)
        .unwrap_or_else(default_cache_dir);
    if let Err(e) = fs::create_dir_all(&path) {
        warn!("failed to create cache dir {}: {e}", path.display());
        path = default_cache_dir();
        let _ = fs::create_dir_all(&path);
    }
    path
});

static POSTER_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let mut path = cache_dir().join("posters");
    if let Err(e) = fs::create_dir_all(&path) {
        warn!("failed to create poster cache dir {}: {e}", path.display());
        path = cache_dir();
    }
    if let Err(err) = prune_poster_cache_in_dir(&path) {
        warn!("poster cache prune failed: {err}");
    }
    path
});

pub fn cache_dir() -> PathBuf {
    CACHE_DIR.clone()
}

pub fn poster_cache_dir() -> PathBuf {
    POSTER_DIR.clone()
}

pub fn url_to_cache_key(url: &str) -> String {
    format!("{:x}", md5::compute(url.as_bytes()))
}

/// Drop cached files older than the retention window. Returns removed count.
fn prune_poster_cache_in_dir(dir: &Path) -> std::io::Result<usize> {
    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(POSTER_RETENTION_SECS))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut removed = 0usize;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "webp") => {}
            _ => continue,
        }
        let metadata = entry.metadata()?;
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        if modified < cutoff {
            let _ = fs::remove_file(&path);
            removed += 1;
        }
    }
    Ok(removed)
}

pub fn find_any_by_key(key: &str) -> Option<PathBuf> {
    find_any_by_key_in(&poster_cache_dir(), key)
}

fn find_any_by_key_in(dir: &Path, key: &str) -> Option<PathBuf> {
    let candidates = [
        format!("{key}.png"),
        format!("{key}.jpg"),
        format!("{key}.jpeg"),
        format!("{key}.webp"),
    ];
    for c in candidates {
        let p = dir.join(c);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

/// Download with a shared client, normalize to PNG, store under the poster
/// cache. Returns the stored path.
pub fn download_and_store(client: &Client, url: &str, key: &str) -> Result<PathBuf, String> {
    download_and_store_in(&poster_cache_dir(), client, url, key)
}

fn download_and_store_in(
    dir: &Path,
    client: &Client,
    url: &str,
    key: &str,
) -> Result<PathBuf, String> {
    let dest = dir.join(format!("{key}.png"));
    if dest.exists() {
        return Ok(dest);
    }

    let bytes = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())
        .map_err(|e| format!("GET {url}: {e}"))?;

    let img = image::load_from_memory(&bytes).map_err(|e| format!("decode {url}: {e}"))?;

    let mut png_bytes: Vec<u8> = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| format!("encode png: {e}"))?;

    // Write to a .part file then rename so readers never see a torn file.
    if let Some(parent) = dest.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let tmp = dest.with_extension("png.part");
    {
        let mut f = fs::File::create(&tmp).map_err(|e| format!("create {}: {e}", tmp.display()))?;
        f.write_all(&png_bytes)
            .map_err(|e| format!("write {}: {e}", tmp.display()))?;
    }
    fs::rename(&tmp, &dest).map_err(|e| format!("rename: {e}"))?;
    Ok(dest)
}

/// (width, height, RGBA8 bytes) decoded from a cached image file.
pub fn load_rgba_image(path: &Path) -> Result<(u32, u32, Vec<u8>), String> {
    if !path.exists() {
        return Err("not found".into());
    }
    let img = image::ImageReader::open(path)
        .map_err(|e| format!("open image {}: {e}", path.display()))?
        .with_guessed_format()
        .map_err(|e| format!("guess format {}: {e}", path.display()))?
        .decode()
        .map_err(|e| format!("decode {}: {e}", path.display()))?;
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8().to_vec();
    Ok((w, h, rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn cache_key_is_stable_and_hex() {
        let a = url_to_cache_key("https://image.tmdb.org/t/p/w500/x.jpg");
        let b = url_to_cache_key("https://image.tmdb.org/t/p/w500/x.jpg");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, url_to_cache_key("https://image.tmdb.org/t/p/w500/y.jpg"));
    }

    #[test]
    fn find_any_probes_known_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let key = "deadbeef";
        assert_eq!(find_any_by_key_in(dir.path(), key), None);

        let jpg = dir.path().join(format!("{key}.jpg"));
        fs::write(&jpg, b"stub").unwrap();
        assert_eq!(find_any_by_key_in(dir.path(), key), Some(jpg));
    }

    #[test]
    fn prune_removes_only_stale_images() {
        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh.png");
        fs::write(&fresh, b"stub").unwrap();
        let other = dir.path().join("notes.txt");
        fs::write(&other, b"keep").unwrap();

        let removed = prune_poster_cache_in_dir(dir.path()).unwrap();
        assert_eq!(removed, 0);
        assert!(fresh.exists());
        assert!(other.exists());
    }

    #[test]
    fn round_trips_rgba_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let (w, h, bytes) = load_rgba_image(&path).unwrap();
        assert_eq!((w, h), (3, 2));
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[..4], &[10, 20, 30, 255]);
    }
}
