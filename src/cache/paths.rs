// Cache path utilities.
// Resolves where the enrichment cache file lives on disk.

use std::path::PathBuf;

use directories::ProjectDirs;

/// File name of the enrichment cache.
pub const CACHE_FILE_NAME: &str = "linkedin_cache.json";

/// Get the base cache directory (~/.cache/profile-proxy on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "profile-proxy").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default path of the enrichment cache file.
/// Falls back to the working directory when no home directory is known.
pub fn default_cache_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join(CACHE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CACHE_FILE_NAME))
}
