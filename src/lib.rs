
/// How does this work
///    pix  = Pixfmt<Rgba8>( RenderingBuffer )
///    grid = GridRenderer( GridSpec, TileSpec, Palette )
///  Per Tile ( x outer, y inner )
///    diamond_for()  -- left, bottom, right, top
///      draw_line()  -- LineKind: Point, Horizontal, Vertical,
///                                Diagonal, Shallow, Steep
///        copy_pixel()            -- out of range pixels dropped
///    label_origin()
///      LabelRenderer::draw_label()  -- "x,y"
///    border_for()   -- top_left, bottom_left, bottom_right, top_right
///      draw_line()
///  Output
///    write_png(pix, path)  -- RGBA8 via the image crate

pub mod buffer;
pub mod color;
pub mod pixfmt;
pub mod line;
pub mod tile;
pub mod text;
pub mod grid;
pub mod png;
pub mod config;
pub mod errors;
#[cfg(feature = "freetype")]
pub mod ft;

pub use buffer::*;
pub use color::*;
pub use pixfmt::*;
pub use line::*;
pub use tile::*;
pub use text::*;
pub use grid::*;
pub use png::*;
pub use config::*;
pub use errors::*;
#[cfg(feature = "freetype")]
pub use ft::*;

use std::fmt::Debug;

/// Color with 8-bit Red, Green, Blue, and Alpha components
pub trait Color: Debug + Copy {
    fn red8(&self) -> u8;
    fn green8(&self) -> u8;
    fn blue8(&self) -> u8;
    fn alpha8(&self) -> u8;
}

/// Direct access to a pixel location
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Overwrite the pixel at `id`, no blending
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
}

/// Read back a pixel
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Raw component data, row-major
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
