//! Label text
//!
//! Labels are drawn through [LabelRenderer]. The default [GlyphLabel] uses
//! `ab_glyph` outlines of the bundled DejaVu Sans Mono face, or any font
//! file given by [load_font]. Coverage is thresholded so labels stay
//! aliased like the lines around them.
//!
//! [LabelRenderer]: trait.LabelRenderer.html
//! [GlyphLabel]: struct.GlyphLabel.html
//! [load_font]: fn.load_font.html

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontRef, FontVec, GlyphId, PxScale, ScaleFont};
use tracing::{debug, trace};

use crate::color::Rgba8;
use crate::errors::{Result, TileGridError};
use crate::pixfmt::Pixfmt;
use crate::tile::Point;

/// Draws a text string into a pixel buffer
pub trait LabelRenderer {
    /// Draw `text` with its baseline starting at `origin`
    ///
    /// Pixels falling outside of the image are dropped
    fn draw_label(&mut self, pix: &mut Pixfmt<Rgba8>, origin: Point, text: &str, color: Rgba8) -> Result<()>;
}

/// Label height in pixels, ascent plus descent
pub const LABEL_PX: f32 = 13.0;

pub const DEFAULT_FONT_NAME: &str = "DejaVuSansMono.ttf";
static DEFAULT_FONT_DATA: &[u8] = include_bytes!("../data/DejaVuSansMono.ttf");

/// The bundled label face
pub fn load_default_font() -> Result<FontRef<'static>> {
    Ok(FontRef::try_from_slice(DEFAULT_FONT_DATA)?)
}

/// TrueType or OpenType face from a file
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<FontVec> {
    let path = path.as_ref();
    let data = fs::read(path)
        .map_err(|e| TileGridError::Font(format!("could not read {}: {}", path.display(), e)))?;
    Ok(FontVec::try_from_vec(data)?)
}

/// Labels drawn from glyph outlines
#[derive(Debug,Clone)]
pub struct GlyphLabel<F> {
    font: F,
    scale: PxScale,
}

impl GlyphLabel<FontRef<'static>> {
    /// Bundled face at [LABEL_PX]
    ///
    /// [LABEL_PX]: constant.LABEL_PX.html
    pub fn bundled() -> Result<Self> {
        debug!("label font {} at {} px", DEFAULT_FONT_NAME, LABEL_PX);
        Ok(Self::new(load_default_font()?, LABEL_PX))
    }
}

impl<F: Font> GlyphLabel<F> {
    pub fn new(font: F, px: f32) -> Self {
        GlyphLabel { font, scale: PxScale::from(px) }
    }
    /// Pixels above the baseline
    pub fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }
    /// Pixels below the baseline, positive
    pub fn descent(&self) -> f32 {
        -self.font.as_scaled(self.scale).descent()
    }
}

impl<F: Font> LabelRenderer for GlyphLabel<F> {
    fn draw_label(&mut self, pix: &mut Pixfmt<Rgba8>, origin: Point, text: &str, color: Rgba8) -> Result<()> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = point(origin.x as f32, origin.y as f32);
        let mut last: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if id.0 == 0 {
                trace!("no glyph for {:?}", ch);
            }
            if let Some(prev) = last {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            last = Some(id);

            // blank glyphs have no outline
            if let Some(outline) = self.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                let (x0, y0) = (bounds.min.x as i64, bounds.min.y as i64);
                outline.draw(|gx, gy, coverage| {
                    if coverage >= 0.5 {
                        pix.copy_pixel(x0 + i64::from(gx), y0 + i64::from(gy), color);
                    }
                });
            }
        }
        Ok(())
    }
}
