//! Glyph fonts: TrueType outlines rasterized with tiny-skia, plus a tiny
//! built-in bitmap face used when no font file can be loaded.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use log::{debug, warn};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::error::{Error, Result};
use crate::models::{FONT_CANDIDATES, TextBox};

/// Horizontal advance of one bitmap cell.
const BITMAP_ADVANCE: i32 = 6;
/// Width of the ink inside a bitmap cell.
const BITMAP_WIDTH: i32 = 5;
/// Rows between the ascender line and the first row of ink.
const BITMAP_TOP: i32 = 2;

const BITMAP_O: [u8; 7] = [
    0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
];
const BITMAP_NOTDEF: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// A font able to measure and draw the icon text.
#[derive(Debug, Clone)]
pub enum GlyphFont {
    Outline(OutlineFont),
    Bitmap,
}

impl GlyphFont {
    /// Loads the first usable font from [`FONT_CANDIDATES`], falling back to
    /// the built-in bitmap face.
    pub fn load(size_px: u32, text: &str) -> Self {
        Self::load_from(FONT_CANDIDATES, size_px, text)
    }

    /// Like [`GlyphFont::load`] but with an explicit candidate list.
    pub fn load_from<P: AsRef<Path>>(candidates: &[P], size_px: u32, text: &str) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();
            match OutlineFont::open(path, size_px as f32, text) {
                Ok(font) => {
                    debug!("Using font {} at {}px", path.display(), size_px);
                    return GlyphFont::Outline(font);
                }
                Err(e) => debug!("Skipping font {}: {}", path.display(), e),
            }
        }
        warn!("No usable font found, falling back to the built-in bitmap font");
        GlyphFont::Bitmap
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, GlyphFont::Bitmap)
    }

    /// Ink box of `text` drawn with its anchor at the origin.
    pub fn text_bbox(&self, text: &str) -> TextBox {
        match self {
            GlyphFont::Outline(font) => font.text_bbox(text),
            GlyphFont::Bitmap => bitmap_bbox(text),
        }
    }

    /// Draws `text` with its anchor (left edge, ascender line) at `origin`.
    pub fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        color: Rgba<u8>,
    ) -> Result<()> {
        match self {
            GlyphFont::Outline(font) => font.draw_text(canvas, origin, text, color),
            GlyphFont::Bitmap => {
                draw_bitmap_text(canvas, origin, text, color);
                Ok(())
            }
        }
    }
}

/// A parsed TrueType/OpenType face at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    data: Vec<u8>,
    size_px: f32,
}

impl OutlineFont {
    /// Reads a font file and checks that it can render `text`.
    pub fn open(path: &Path, size_px: f32, text: &str) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(data, size_px, text)
    }

    pub fn from_bytes(data: Vec<u8>, size_px: f32, text: &str) -> Result<Self> {
        if size_px.is_nan() || size_px <= 0.0 {
            return Err(Error::Font(format!("bad pixel size {}", size_px)));
        }
        let font = OutlineFont { data, size_px };
        let face = font.face()?;
        if let Some(c) = text
            .chars()
            .find(|c| !c.is_whitespace() && face.glyph_index(*c).is_none())
        {
            return Err(Error::Font(format!("no glyph for {:?}", c)));
        }
        Ok(font)
    }

    fn face(&self) -> Result<Face<'_>> {
        Face::parse(&self.data, 0).map_err(|e| Error::Font(e.to_string()))
    }

    fn scale(face: &Face<'_>, size_px: f32) -> f32 {
        size_px / face.units_per_em() as f32
    }

    /// Glyph ids paired with their pen position in font units.
    fn layout(face: &Face<'_>, text: &str) -> Vec<(GlyphId, f32)> {
        let mut pen = 0.0;
        let mut glyphs = Vec::new();
        for c in text.chars() {
            let id = face.glyph_index(c).unwrap_or(GlyphId(0));
            glyphs.push((id, pen));
            pen += face.glyph_hor_advance(id).unwrap_or(0) as f32;
        }
        glyphs
    }

    pub fn text_bbox(&self, text: &str) -> TextBox {
        let Ok(face) = self.face() else {
            return TextBox::default();
        };
        let scale = Self::scale(&face, self.size_px);
        let ascender = face.ascender() as f32;

        let mut ink: Option<(f32, f32, f32, f32)> = None;
        for (id, pen) in Self::layout(&face, text) {
            let Some(rect) = face.glyph_bounding_box(id) else {
                continue;
            };
            let (x0, x1) = (pen + rect.x_min as f32, pen + rect.x_max as f32);
            let (y0, y1) = (ascender - rect.y_max as f32, ascender - rect.y_min as f32);
            ink = Some(match ink {
                Some((l, t, r, b)) => (l.min(x0), t.min(y0), r.max(x1), b.max(y1)),
                None => (x0, y0, x1, y1),
            });
        }

        match ink {
            Some((l, t, r, b)) => TextBox {
                left: (l * scale).floor() as i32,
                top: (t * scale).floor() as i32,
                right: (r * scale).ceil() as i32,
                bottom: (b * scale).ceil() as i32,
            },
            None => TextBox::default(),
        }
    }

    pub fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        color: Rgba<u8>,
    ) -> Result<()> {
        let face = self.face()?;
        let scale = Self::scale(&face, self.size_px);
        let ascender = face.ascender() as f32;

        let (width, height) = canvas.dimensions();
        let mut coverage = Pixmap::new(width, height)
            .ok_or_else(|| Error::Render(format!("cannot allocate {}x{} pixmap", width, height)))?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;

        for (id, pen) in Self::layout(&face, text) {
            let mut sink = PathSink(PathBuilder::new());
            if face.outline_glyph(id, &mut sink).is_none() {
                continue;
            }
            let Some(path) = sink.0.finish() else {
                continue;
            };
            // Font units are y-up; flip around the ascender line.
            let transform = Transform::from_row(
                scale,
                0.0,
                0.0,
                -scale,
                origin.0 as f32 + pen * scale,
                origin.1 as f32 + ascender * scale,
            );
            coverage.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }

        for (pixel, mask) in canvas.pixels_mut().zip(coverage.pixels()) {
            let alpha = mask.alpha();
            if alpha > 0 {
                blend(pixel, color, alpha);
            }
        }
        Ok(())
    }
}

/// Feeds ttf-parser outlines into a tiny-skia path.
struct PathSink(PathBuilder);

impl OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// Source-over blend of `color` at `coverage` onto `dst`.
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: u8) {
    let a = coverage as u32 * color[3] as u32 / 255;
    let inv = 255 - a;
    for c in 0..3 {
        dst[c] = ((color[c] as u32 * a + dst[c] as u32 * inv + 127) / 255) as u8;
    }
    dst[3] = (a + dst[3] as u32 * inv / 255) as u8;
}

fn bitmap_rows(c: char) -> &'static [u8; 7] {
    match c {
        'O' | 'o' | '0' => &BITMAP_O,
        _ => &BITMAP_NOTDEF,
    }
}

fn bitmap_bbox(text: &str) -> TextBox {
    let cells = text.chars().count() as i32;
    if cells == 0 {
        return TextBox::default();
    }
    TextBox {
        left: 0,
        top: BITMAP_TOP,
        right: (cells - 1) * BITMAP_ADVANCE + BITMAP_WIDTH,
        bottom: BITMAP_TOP + BITMAP_O.len() as i32,
    }
}

fn draw_bitmap_text(canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for (i, c) in text.chars().enumerate() {
        let cell_x = origin.0 + i as i32 * BITMAP_ADVANCE;
        for (row, bits) in bitmap_rows(c).iter().enumerate() {
            let y = origin.1 + BITMAP_TOP + row as i32;
            for col in 0..BITMAP_WIDTH {
                if bits & (1 << (BITMAP_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x = cell_x + col;
                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
