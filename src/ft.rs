//! FreeType label rendering
//!
//! Glyphs are rendered monochrome, one bit per pixel, so labels stay
//! aliased like the rest of the image.

use std::path::Path;

use freetype::face::LoadFlag;

use crate::color::Rgba8;
use crate::errors::{Result, TileGridError};
use crate::pixfmt::Pixfmt;
use crate::text::LabelRenderer;
use crate::tile::Point;

fn font_err(e: freetype::Error) -> TileGridError {
    TileGridError::Font(e.to_string())
}

/// Labels drawn with a font face loaded from a file
pub struct FreeTypeLabel {
    face: freetype::Face,
    _lib: freetype::Library,
}

impl FreeTypeLabel {
    /// Load face 0 of `path` at `pixels` nominal height
    pub fn open<P: AsRef<Path>>(path: P, pixels: u32) -> Result<Self> {
        let lib = freetype::Library::init().map_err(font_err)?;
        let face = lib.new_face(path.as_ref(), 0).map_err(font_err)?;
        face.set_pixel_sizes(0, pixels).map_err(font_err)?;
        Ok(Self { face, _lib: lib })
    }
}

impl LabelRenderer for FreeTypeLabel {
    fn draw_label(&mut self, pix: &mut Pixfmt<Rgba8>, origin: Point, text: &str, color: Rgba8) -> Result<()> {
        let mut pen = origin.x;
        for ch in text.chars() {
            self.face.load_char(ch as usize, LoadFlag::RENDER | LoadFlag::MONOCHROME | LoadFlag::TARGET_MONO)
                .map_err(font_err)?;
            let glyph = self.face.glyph();
            let bitmap = glyph.bitmap();
            let buf = bitmap.buffer();
            let pitch = bitmap.pitch().unsigned_abs() as usize;
            let left = pen + i64::from(glyph.bitmap_left());
            let top = origin.y - i64::from(glyph.bitmap_top());

            for row in 0 .. bitmap.rows().max(0) as usize {
                for col in 0 .. bitmap.width().max(0) as usize {
                    let byte = buf[row * pitch + col / 8];
                    if (byte >> (7 - col % 8)) & 1 != 0 {
                        pix.copy_pixel(left + col as i64, top + row as i64, color);
                    }
                }
            }
            pen += glyph.advance().x as i64 >> 6;
        }
        Ok(())
    }
}
