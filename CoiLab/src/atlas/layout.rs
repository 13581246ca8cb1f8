//! Grid layout for the sprite sheet

use crate::error::{Error, Result};

/// Sprite sheet width in tiles
pub const COLUMNS: usize = 16;

/// Fixed-width grid: tile `i` sits at column `i % 16`, row `i / 16`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of tiles
    pub count: usize,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl GridLayout {
    #[must_use]
    pub const fn new(count: usize, tile_size: u32) -> Self {
        Self { count, tile_size }
    }

    /// Number of rows, rounded up
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.count.div_ceil(COLUMNS)
    }

    /// Pixel offset of tile `index` from the top-left corner
    #[must_use]
    pub fn tile_offset(&self, index: usize) -> (u64, u64) {
        let column = (index % COLUMNS) as u64;
        let row = (index / COLUMNS) as u64;
        let tile = u64::from(self.tile_size);
        (column * tile, row * tile)
    }

    /// CSS background-position of tile `index`, e.g. `"-64px -128px"`
    #[must_use]
    pub fn position(&self, index: usize) -> String {
        let (x, y) = self.tile_offset(index);
        format!("-{x}px -{y}px")
    }

    /// Sheet size in pixels.
    ///
    /// # Errors
    /// Returns [`Error::SheetTooLarge`] if a side or the RGBA buffer would overflow.
    pub fn sheet_dimensions(&self) -> Result<(u32, u32)> {
        let too_large = || Error::SheetTooLarge {
            icons: self.count,
            tile_size: self.tile_size,
        };
        let width = u32::try_from(COLUMNS)
            .ok()
            .and_then(|c| c.checked_mul(self.tile_size))
            .ok_or_else(too_large)?;
        let height = u32::try_from(self.rows())
            .ok()
            .and_then(|r| r.checked_mul(self.tile_size))
            .ok_or_else(too_large)?;
        // RGBA8 buffer must be addressable
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(too_large)?;
        Ok((width, height))
    }
}
