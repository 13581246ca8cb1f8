//! Icon sprite sheet packing
//!
//! Lays every icon out on a 16-column grid, pastes the matching image file
//! (resized to the tile size) into each cell and records the CSS position
//! and average color on the icon entries.
//!
//! Packing degrades instead of failing:
//! - no icon folder, or the crate built without the `atlas` feature: the
//!   whole step is skipped and positions keep their placeholder
//! - an icon without an image file, or one that fails to decode: its tile
//!   stays blank and the remaining icons are still packed

pub mod color;
pub mod discovery;
pub mod layout;
#[cfg(feature = "atlas")]
pub mod sheet;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lab::Icon;

pub use color::{NEUTRAL_GRAY, average_color};
pub use discovery::{ICON_EXTENSIONS, IconIndex, TileSource};
pub use layout::{COLUMNS, GridLayout};

/// What happened to one icon during packing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOutcome {
    /// Image found, resized and pasted
    Placed { color: String },
    /// No image file with the icon's stem
    Missing { stem: String },
    /// An image file was found but could not be decoded
    Failed { path: PathBuf, message: String },
}

/// Why the sprite sheet step did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No icon folder was given
    NoIconFolder,
    /// The icon folder does not exist
    IconFolderMissing,
    /// Built without the `atlas` feature
    ImageSupportDisabled,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoIconFolder => "no icon folder given",
            Self::IconFolderMissing => "icon folder not found",
            Self::ImageSupportDisabled => "built without image support",
        }
    }
}

/// Result of the sprite sheet step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasReport {
    Skipped(SkipReason),
    Packed {
        /// Written sheet, `None` when there were no icons
        sheet: Option<PathBuf>,
        /// One entry per icon, in icon order
        outcomes: Vec<TileOutcome>,
    },
}

impl AtlasReport {
    #[must_use]
    pub fn outcomes(&self) -> &[TileOutcome] {
        match self {
            Self::Skipped(_) => &[],
            Self::Packed { outcomes, .. } => outcomes,
        }
    }

    #[must_use]
    pub fn placed(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::Placed { .. }))
    }

    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::Missing { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&TileOutcome) -> bool) -> usize {
        self.outcomes().iter().filter(|o| predicate(o)).count()
    }
}

/// Sprite sheet packing request
#[derive(Debug, Clone)]
pub struct AtlasRequest<'a> {
    /// Folder searched for icon images
    pub icon_folder: Option<&'a Path>,
    /// Where the sheet is written
    pub sheet_path: &'a Path,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

/// Pack `icons` into a sprite sheet, updating their positions and colors.
///
/// `stems[i]` is the image file stem for `icons[i]`.
///
/// # Errors
/// Returns an error if the icon folder cannot be read or the sheet cannot be
/// written. Individual icons never cause an error.
pub fn pack_icons(icons: &mut [Icon], stems: &[String], request: &AtlasRequest<'_>) -> Result<AtlasReport> {
    let Some(folder) = request.icon_folder else {
        tracing::info!("No icon folder given, skipping sprite sheet generation");
        return Ok(AtlasReport::Skipped(SkipReason::NoIconFolder));
    };
    if !folder.is_dir() {
        tracing::warn!("Icon folder not found: {}", folder.display());
        return Ok(AtlasReport::Skipped(SkipReason::IconFolderMissing));
    }
    pack_with_images(icons, stems, folder, request)
}

#[cfg(feature = "atlas")]
fn pack_with_images(
    icons: &mut [Icon],
    stems: &[String],
    folder: &Path,
    request: &AtlasRequest<'_>,
) -> Result<AtlasReport> {
    tracing::info!("Generating sprite sheet from {}", folder.display());
    let index = IconIndex::scan(folder)?;
    let outcomes = sheet::pack_sheet(icons, stems, &index, request.tile_size, request.sheet_path)?;
    let sheet = (!outcomes.is_empty()).then(|| request.sheet_path.to_path_buf());
    Ok(AtlasReport::Packed { sheet, outcomes })
}

#[cfg(not(feature = "atlas"))]
fn pack_with_images(
    _icons: &mut [Icon],
    _stems: &[String],
    _folder: &Path,
    _request: &AtlasRequest<'_>,
) -> Result<AtlasReport> {
    tracing::warn!("Built without image support, skipping sprite sheet generation");
    Ok(AtlasReport::Skipped(SkipReason::ImageSupportDisabled))
}
