//! Sprite sheet composition with the `image` crate

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageError, RgbaImage};

use crate::error::{Error, Result};
use crate::lab::Icon;

use super::color::average_tile_color;
use super::discovery::{IconIndex, TileSource};
use super::layout::GridLayout;
use super::TileOutcome;

/// Place every icon on a new sheet and write it to `sheet_path`.
///
/// `stems[i]` is the image stem to look up for `icons[i]`. Every icon gets
/// its grid position; icons whose image is found and decodes also get a
/// color. Missing or broken images leave a blank tile. No file is written
/// when `icons` is empty.
///
/// # Errors
/// Returns an error only if the sheet cannot be allocated or written.
pub fn pack_sheet(
    icons: &mut [Icon],
    stems: &[String],
    index: &IconIndex,
    tile_size: u32,
    sheet_path: &Path,
) -> Result<Vec<TileOutcome>> {
    debug_assert_eq!(icons.len(), stems.len());

    if icons.is_empty() {
        tracing::info!("No icons to pack, skipping sprite sheet");
        return Ok(Vec::new());
    }

    let layout = GridLayout::new(icons.len(), tile_size);
    let (width, height) = layout.sheet_dimensions()?;
    tracing::info!(
        "Creating {width}x{height} sprite sheet ({}x{} icons)",
        super::layout::COLUMNS,
        layout.rows()
    );

    let mut sheet = RgbaImage::new(width, height);
    let mut outcomes = Vec::with_capacity(icons.len());

    for (idx, (icon, stem)) in icons.iter_mut().zip(stems).enumerate() {
        let (x, y) = layout.tile_offset(idx);
        icon.position = layout.position(idx);

        let outcome = match index.resolve(stem) {
            TileSource::Found(path) => match load_tile(path, tile_size) {
                Ok(tile) => {
                    let color = average_tile_color(&tile);
                    // Offsets fit: the sheet dimensions were checked above
                    imageops::replace(&mut sheet, &tile, x as i64, y as i64);
                    icon.color = Some(color.clone());
                    TileOutcome::Placed { color }
                }
                Err(err) => {
                    tracing::warn!(
                        "Failed to load icon file '{}' for '{}': {err}",
                        path.display(),
                        icon.id
                    );
                    TileOutcome::Failed {
                        path: path.to_path_buf(),
                        message: err.to_string(),
                    }
                }
            },
            TileSource::Missing => {
                tracing::warn!("Icon not found for '{}' (looking for: {stem})", icon.id);
                TileOutcome::Missing {
                    stem: stem.clone(),
                }
            }
        };
        outcomes.push(outcome);
    }

    write_sheet(&sheet, sheet_path)?;
    Ok(outcomes)
}

/// Decode an image as RGBA and resize it to a square tile
fn load_tile(path: &Path, tile_size: u32) -> std::result::Result<RgbaImage, ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    Ok(imageops::resize(&rgba, tile_size, tile_size, FilterType::Lanczos3))
}

/// Encode the sheet; the format follows the file extension
fn write_sheet(sheet: &RgbaImage, path: &Path) -> Result<()> {
    sheet.save(path).map_err(|e| Error::SheetWriteFailed {
        path: PathBuf::from(path),
        message: e.to_string(),
    })?;
    tracing::info!("Saved sprite sheet to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(path: &Path, size: u32, color: [u8; 4]) {
        RgbaImage::from_pixel(size, size, Rgba(color)).save(path).unwrap();
    }

    #[test]
    fn test_pack_places_and_colors() {
        let dir = tempfile::tempdir().unwrap();
        let icons_dir = dir.path().join("icons");
        std::fs::create_dir_all(&icons_dir).unwrap();
        solid(&icons_dir.join("Red.png"), 10, [255, 0, 0, 255]);
        solid(&icons_dir.join("Blue.png"), 100, [0, 0, 255, 255]);

        let mut icons: Vec<Icon> = (0..17).map(|i| Icon::placeholder(format!("icon-{i}"))).collect();
        let mut stems: Vec<String> = (0..17).map(|i| format!("none-{i}")).collect();
        stems[0] = "red".to_string();
        stems[16] = "blue".to_string();

        let index = IconIndex::scan(&icons_dir).unwrap();
        let sheet_path = dir.path().join("icons.png");
        let outcomes = pack_sheet(&mut icons, &stems, &index, 8, &sheet_path).unwrap();

        assert_eq!(outcomes.len(), 17);
        assert_eq!(outcomes[0], TileOutcome::Placed { color: "#ff0000".to_string() });
        assert!(matches!(outcomes[1], TileOutcome::Missing { .. }));
        assert_eq!(icons[16].position, "-0px -8px");
        assert_eq!(icons[16].color.as_deref(), Some("#0000ff"));
        assert_eq!(icons[1].color, None);
        assert_eq!(icons[1].position, "-8px -0px");

        let sheet = image::open(&sheet_path).unwrap().to_rgba8();
        assert_eq!(sheet.dimensions(), (128, 16));
        assert_eq!(sheet.get_pixel(4, 4), &Rgba([255, 0, 0, 255]));
        assert_eq!(sheet.get_pixel(4, 12), &Rgba([0, 0, 255, 255]));
        assert_eq!(sheet.get_pixel(12, 4)[3], 0);
    }

    #[test]
    fn test_broken_image_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Broken.png"), b"definitely not a png").unwrap();

        let mut icons = vec![Icon::placeholder("broken")];
        let index = IconIndex::scan(dir.path()).unwrap();
        let sheet_path = dir.path().join("out.png");
        let outcomes =
            pack_sheet(&mut icons, &["broken".to_string()], &index, 4, &sheet_path).unwrap();

        assert!(matches!(outcomes[0], TileOutcome::Failed { .. }));
        assert_eq!(icons[0].position, "-0px -0px");
        assert!(icons[0].color.is_none());
        assert!(sheet_path.exists());
    }

    #[test]
    fn test_empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let sheet_path = dir.path().join("icons.png");
        let outcomes = pack_sheet(&mut [], &[], &IconIndex::default(), 64, &sheet_path).unwrap();
        assert!(outcomes.is_empty());
        assert!(!sheet_path.exists());
    }
}
