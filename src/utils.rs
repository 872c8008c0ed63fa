//! Utility helpers

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

static TEMP_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct Utils;

impl Utils {
    pub fn date_time_filename(prefix: &str, postfix: &str) -> String {
        let now = chrono::Local::now();
        format!("{}{}{}", prefix, now.format("%Y%m%d_%H%M%S"), postfix)
    }

    /// First `max_chars` characters of `text`, with `...` appended when cut
    pub fn shorten(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let mut short: String = text.chars().take(max_chars).collect();
            short.push_str("...");
            short
        }
    }

    /// File name without directory or extension, or an empty string
    pub fn file_stem(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lower-case extension without the dot, or an empty string
    pub fn extension(path: &Path) -> String {
        path.extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

/// Temporary directory removed, with the files in it, on drop
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let mut path = env::temp_dir();
        let unique = format!(
            "cornerstl_{}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        path.push(unique);
        fs::create_dir_all(&path)
            .map_err(|e| Error::InvalidPath(format!("Failed to create temp dir: {}", e)))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        if let Ok(entries) = fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() {
                    let _ = fs::remove_file(path);
                }
            }
        }
        let _ = fs::remove_dir(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        assert_eq!(Utils::shorten("endloop", 16), "endloop");
        assert_eq!(Utils::shorten("abcdefgh", 3), "abc...");
    }

    #[test]
    fn test_file_stem_and_extension() {
        let path = Path::new("/data/models/bunny.STL");
        assert_eq!(Utils::file_stem(path), "bunny");
        assert_eq!(Utils::extension(path), "stl");
        assert_eq!(Utils::extension(Path::new("noext")), "");
    }

    #[test]
    fn test_temp_folder_is_removed() {
        let kept;
        {
            let tmp = TempFolder::new().unwrap();
            kept = tmp.path().to_path_buf();
            fs::write(kept.join("a.txt"), "x").unwrap();
            assert!(kept.exists());
        }
        assert!(!kept.exists());
    }
}
