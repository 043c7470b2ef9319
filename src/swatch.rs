use crate::color::Color;

pub const SWATCH_WIDTH: u32 = 64;
pub const SWATCH_HEIGHT: u32 = 16;

/// Immutable RGBA pixel buffer drawn behind one tree row. Generated once
/// per distinct color combination and shared through the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Swatch {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes, 4 per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        Color::rgba(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }
}

/// Combine an ordered color sequence into a swatch buffer.
///
/// One color fills the whole buffer. Several colors are laid out as solid
/// vertical blocks, or, with `use_gradient`, interpolated column by column
/// between consecutive colors. Columns vary, rows never do.
pub fn build_swatch(colors: &[Color], use_gradient: bool) -> Swatch {
    let width = SWATCH_WIDTH as usize;
    let height = SWATCH_HEIGHT as usize;
    let mut pixels = vec![0u8; width * height * 4];

    if colors.is_empty() {
        // The engine never asks for an empty combination; degrade to a
        // fully transparent buffer rather than panic.
        return Swatch {
            width: SWATCH_WIDTH,
            height: SWATCH_HEIGHT,
            pixels,
        };
    }

    for x in 0..width {
        let color = column_color(colors, use_gradient, x, width);
        for y in 0..height {
            let idx = (y * width + x) * 4;
            pixels[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    Swatch {
        width: SWATCH_WIDTH,
        height: SWATCH_HEIGHT,
        pixels,
    }
}

fn column_color(colors: &[Color], use_gradient: bool, x: usize, width: usize) -> Color {
    let count = colors.len();
    if count == 1 {
        return colors[0];
    }

    if use_gradient {
        let chunk = (width + count - 2) / (count - 1);
        let lower = (x / chunk).min(count - 1);
        let upper = ((x + chunk - 1) / chunk).min(count - 1);
        let t = (x % chunk) as f32 / chunk as f32;
        colors[lower].lerp(colors[upper], t)
    } else {
        let chunk = (width + count - 1) / count;
        colors[(x / chunk).min(count - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::{build_swatch, SWATCH_HEIGHT, SWATCH_WIDTH};
    use crate::color::Color;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);
    const GREEN: Color = Color::rgb(0, 255, 0);

    #[test]
    fn single_color_fills_every_pixel() {
        let swatch = build_swatch(&[RED], false);
        assert_eq!(swatch.width(), SWATCH_WIDTH);
        assert_eq!(swatch.height(), SWATCH_HEIGHT);
        for y in 0..SWATCH_HEIGHT {
            for x in 0..SWATCH_WIDTH {
                assert_eq!(swatch.pixel(x, y), RED);
            }
        }
    }

    #[test]
    fn single_color_fill_ignores_gradient_flag() {
        assert_eq!(build_swatch(&[BLUE], true), build_swatch(&[BLUE], false));
    }

    #[test]
    fn two_colors_split_into_solid_blocks_at_chunk_boundary() {
        let swatch = build_swatch(&[RED, BLUE], false);
        let boundary = SWATCH_WIDTH / 2;
        for x in 0..SWATCH_WIDTH {
            let expected = if x < boundary { RED } else { BLUE };
            assert_eq!(swatch.pixel(x, 0), expected, "column {x}");
        }
    }

    #[test]
    fn last_block_absorbs_the_remainder() {
        // ceil(64 / 3) = 22, so the third block gets the short tail.
        let swatch = build_swatch(&[RED, GREEN, BLUE], false);
        assert_eq!(swatch.pixel(21, 0), RED);
        assert_eq!(swatch.pixel(22, 0), GREEN);
        assert_eq!(swatch.pixel(43, 0), GREEN);
        assert_eq!(swatch.pixel(44, 0), BLUE);
        assert_eq!(swatch.pixel(SWATCH_WIDTH - 1, 0), BLUE);
    }

    #[test]
    fn gradient_starts_exactly_on_the_first_color() {
        let swatch = build_swatch(&[RED, BLUE], true);
        assert_eq!(swatch.pixel(0, 0), RED);
    }

    #[test]
    fn gradient_is_strictly_monotonic_per_channel() {
        let swatch = build_swatch(&[Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)], true);
        for x in 1..SWATCH_WIDTH {
            let prev = swatch.pixel(x - 1, 0);
            let here = swatch.pixel(x, 0);
            assert!(here.r > prev.r, "column {x}: {} !> {}", here.r, prev.r);
            assert!(here.g > prev.g);
            assert!(here.b > prev.b);
        }
    }

    #[test]
    fn gradient_hits_intermediate_colors_on_chunk_boundaries() {
        // ceil(64 / 2) = 32: column 32 lands exactly on the middle color.
        let swatch = build_swatch(&[RED, GREEN, BLUE], true);
        assert_eq!(swatch.pixel(0, 0), RED);
        assert_eq!(swatch.pixel(32, 0), GREEN);
    }

    #[test]
    fn columns_are_vertically_uniform() {
        let swatch = build_swatch(&[RED, GREEN, BLUE], true);
        for x in 0..SWATCH_WIDTH {
            let top = swatch.pixel(x, 0);
            for y in 1..SWATCH_HEIGHT {
                assert_eq!(swatch.pixel(x, y), top);
            }
        }
    }

    #[test]
    fn empty_combination_degrades_to_transparent() {
        let swatch = build_swatch(&[], true);
        assert!(swatch.pixels().iter().all(|&b| b == 0));
    }
}
