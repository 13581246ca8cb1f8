//! Average icon color

/// Returned for tiles with no visible pixels
pub const NEUTRAL_GRAY: &str = "#808080";

/// Average color of RGBA pixels as `#rrggbb`.
///
/// Fully transparent pixels (alpha 0) are ignored; the per-channel mean is
/// truncated. A tile with no visible pixels yields [`NEUTRAL_GRAY`].
#[must_use]
pub fn average_color<I>(pixels: I) -> String
where
    I: IntoIterator<Item = [u8; 4]>,
{
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for [r, g, b, a] in pixels {
        if a == 0 {
            continue;
        }
        sums[0] += u64::from(r);
        sums[1] += u64::from(g);
        sums[2] += u64::from(b);
        count += 1;
    }

    if count == 0 {
        return NEUTRAL_GRAY.to_string();
    }

    let [r, g, b] = sums.map(|sum| sum / count);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Average color of a decoded tile
#[cfg(feature = "atlas")]
#[must_use]
pub fn average_tile_color(tile: &image::RgbaImage) -> String {
    average_color(tile.pixels().map(|p| p.0))
}
