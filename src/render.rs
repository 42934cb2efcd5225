use std::fs;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, RgbaImage};
use log::info;

use crate::error::{Error, Result};
use crate::font::GlyphFont;
use crate::models::{BACKGROUND, FOREGROUND, GLYPH_TEXT};
use crate::utils::{centered_origin, font_size_for};

/// Renders one icon canvas: a solid background with the glyph text centered
/// on it.
pub fn render_icon(size: u32, font: &GlyphFont) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let mut image: RgbaImage = ImageBuffer::from_pixel(size, size, BACKGROUND);

    let bbox = font.text_bbox(GLYPH_TEXT);
    let origin = centered_origin(size, bbox.width(), bbox.height());
    font.draw_text(&mut image, origin, GLYPH_TEXT, FOREGROUND)?;
    Ok(image)
}

/// Renders an icon of `size` pixels and writes it as a PNG to `path`.
pub fn create_icon(size: u32, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    let font = GlyphFont::load(font_size_for(size), GLYPH_TEXT);
    let image = render_icon(size, &font)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, ImageFormat::Png)?;

    info!("Wrote {}x{} icon to {}", size, size, path.display());
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_icon_has_requested_size() {
        for size in [1, 16, 90] {
            let image = render_icon(size, &GlyphFont::Bitmap).unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn bitmap_glyph_is_centered() {
        // 5x7 ink box on 16px: anchor at (5, 4), ink starts at row 4 + 2.
        let image = render_icon(16, &GlyphFont::Bitmap).unwrap();
        assert_eq!(*image.get_pixel(6, 6), FOREGROUND);
        assert_eq!(*image.get_pixel(5, 6), BACKGROUND);
        assert_eq!(*image.get_pixel(5, 7), FOREGROUND);
        assert_eq!(*image.get_pixel(9, 12), BACKGROUND);
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            render_icon(0, &GlyphFont::Bitmap),
            Err(Error::InvalidSize(0))
        ));
        assert!(matches!(create_icon(0, "icon.png"), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(create_icon(16, ""), Err(Error::EmptyPath)));
    }
}
