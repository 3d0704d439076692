//! Tile grid rendering

use tracing::debug;

use crate::color::{Palette, Rgba8};
use crate::errors::Result;
use crate::line::draw_line;
use crate::pixfmt::Pixfmt;
use crate::text::LabelRenderer;
use crate::tile::*;

/// Draws every tile of a grid into a single image
pub struct GridRenderer<'a> {
    pub grid: GridSpec,
    pub tile: TileSpec,
    pub palette: Palette,
    labels: Option<&'a mut dyn LabelRenderer>,
}

impl<'a> GridRenderer<'a> {
    /// Renderer without labels and the default [Palette]
    ///
    /// [Palette]: ../color/struct.Palette.html
    pub fn new(grid: GridSpec, tile: TileSpec) -> Self {
        Self { grid, tile, palette: Palette::default(), labels: None }
    }
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
    /// Draw "x,y" labels using `labels`
    pub fn with_labels(mut self, labels: &'a mut dyn LabelRenderer) -> Self {
        self.labels = Some(labels);
        self
    }
    /// Size of the output image in pixels
    pub fn size(&self) -> Result<(usize,usize)> {
        self.grid.image_size(&self.tile)
    }
    /// Allocate the image and draw all tiles
    ///
    /// Tiles are visited column by column, top to bottom within a column
    pub fn render(&mut self) -> Result<Pixfmt<Rgba8>> {
        let (width, height) = self.size()?;
        let mut pix = Pixfmt::<Rgba8>::new(width, height);
        pix.fill(self.palette.background);

        for x in 0 .. self.grid.tiles_across() {
            for y in 0 .. self.grid.tiles_down() {
                self.draw_tile(&mut pix, x, y)?;
            }
        }
        Ok(pix)
    }
    /// Draw the diamond, label, and border of tile (`x`,`y`)
    pub fn draw_tile(&mut self, pix: &mut Pixfmt<Rgba8>, x: u32, y: u32) -> Result<()> {
        let diamond = diamond_for(x, y, &self.tile, self.grid.height_multiplier());
        let border = border_for(x, y, &self.tile);
        debug!(x, y, ?diamond, "tile");

        for (p1, p2) in diamond.edges().iter() {
            draw_line(pix, p1.x, p1.y, p2.x, p2.y, self.palette.diamond);
        }
        if let Some(labels) = self.labels.as_mut() {
            let origin = label_origin(x, y, &self.tile);
            labels.draw_label(pix, origin, &format!("{},{}", x, y), self.palette.label)?;
        }
        for (p1, p2) in border.edges().iter() {
            draw_line(pix, p1.x, p1.y, p2.x, p2.y, self.palette.border);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GlyphLabel, Source};

    #[test]
    fn single_tile() {
        let grid = GridSpec::new(1, 1, 2).unwrap();
        let tile = TileSpec::new(16, 16).unwrap();
        let mut ren = GridRenderer::new(grid, tile);
        let pix = ren.render().unwrap();
        let p = Palette::default();

        // border corners
        assert_eq!(pix.get((0,0)), p.border);
        assert_eq!(pix.get((15,15)), p.border);
        // diamond top (8, 8) and left/right at y_mid = 12
        assert_eq!(pix.get((8,8)), p.diamond);
        assert_eq!(pix.get((4,10)), p.diamond);
        // right vertex lands on the border column, border drawn last
        assert_eq!(pix.get((15,12)), p.border);
        // inside, off the outlines
        assert_eq!(pix.get((8,4)), p.background);
    }

    #[test]
    fn labels_are_optional() {
        let grid = GridSpec::new(1, 1, 2).unwrap();
        let tile = TileSpec::new(64, 64).unwrap();
        let label = Palette::default().label;

        let plain = GridRenderer::new(grid, tile).render().unwrap();
        let mut font = GlyphLabel::bundled().unwrap();
        let labeled = GridRenderer::new(grid, tile).with_labels(&mut font).render().unwrap();

        let count = |pix: &Pixfmt<Rgba8>| {
            let mut n = 0;
            for y in 0 .. 64 {
                for x in 0 .. 64 {
                    if pix.get((x,y)) == label {
                        n += 1;
                    }
                }
            }
            n
        };
        assert_eq!(count(&plain), 0);
        assert!(count(&labeled) > 0);
    }
}
