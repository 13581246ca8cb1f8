//! Icon file discovery

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Image extensions picked up from the icon folder (compared case-insensitively)
pub const ICON_EXTENSIONS: [&str; 4] = ["png", "webp", "jpg", "jpeg"];

/// Where an icon's image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSource<'a> {
    Found(&'a Path),
    Missing,
}

/// Icon files keyed by lowercased file stem
#[derive(Debug, Clone, Default)]
pub struct IconIndex {
    files: HashMap<String, PathBuf>,
}

impl IconIndex {
    /// Walk `dir` recursively and index every image file.
    ///
    /// Entries are visited in file-name order; when two files share a stem the
    /// one visited last wins. Unreadable subdirectories are logged and skipped.
    ///
    /// # Errors
    /// Returns an error if `dir` itself cannot be read.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut files = HashMap::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry in icon folder: {err}");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_icon_extension(path) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                let key = stem.to_string_lossy().to_lowercase();
                if let Some(previous) = files.insert(key, path.to_path_buf()) {
                    tracing::debug!("{} shadows {}", path.display(), previous.display());
                }
            }
        }

        tracing::info!("Found {} icon files in {}", files.len(), dir.display());
        Ok(Self { files })
    }

    /// Look up an icon by stem (case-insensitive)
    #[must_use]
    pub fn resolve(&self, stem: &str) -> TileSource<'_> {
        match self.files.get(&stem.to_lowercase()) {
            Some(path) => TileSource::Found(path),
            None => TileSource::Missing,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_icon_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        ICON_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}
