use image::imageops::replace;
use image::{ImageBuffer, RgbaImage};

/// Create a collage from card images, placed in row-major order with `ncols` cards per row.
///
/// The cell size is taken from the first part; all parts must be the same size.
pub fn collage(parts: &[RgbaImage], ncols: u32) -> RgbaImage {
    if parts.is_empty() || ncols == 0 {
        return RgbaImage::new(0, 0);
    }
    let nimages = parts.len() as u32;
    let nrows = (nimages + ncols - 1) / ncols;
    let (w, h) = parts[0].dimensions();
    let mut collage: RgbaImage = ImageBuffer::new(w * ncols, h * nrows);
    for (i, part) in parts.iter().enumerate() {
        let (row, col) = ((i as u32 / ncols), (i as u32 % ncols));
        replace(&mut collage, part, col * w, row * h);
    }
    collage
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_collage_layout() {
        let parts: Vec<_> = (0..4u8)
            .map(|i| RgbaImage::from_pixel(3, 2, Rgba([i, 0, 0, 255])))
            .collect();
        let img = collage(&parts, 2);
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(3, 0)[0], 1);
        assert_eq!(img.get_pixel(0, 2)[0], 2);
        assert_eq!(img.get_pixel(5, 3)[0], 3);
    }

    #[test]
    fn test_collage_empty() {
        assert_eq!(collage(&[], 7).dimensions(), (0, 0));
    }
}
