//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;

use crate::Color;
use crate::Source;
use crate::Pixel;
use crate::PixelData;

use std::marker::PhantomData;

/// Pixel Format Wrapper around raw pixel component data
///
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components zero
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Set every pixel to [Color] `c`
    ///
    /// [Color]: ../trait.Color.html
    pub fn fill<C: Color>(&mut self, c: C) {
        let (w, h) = (self.width(), self.height());
        for y in 0 .. h {
            for x in 0 .. w {
                self.set((x,y), c);
            }
        }
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region, including negative ones, are ignored
    ///
    ///     use tilegrid::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     let black = Rgba8::black();
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///     pix.copy_pixel(-1,0, black);  // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), c);
    }
    /// Copies the [Color] `c` to pixels from (`x`,`y`) to (`x+n-1`,y)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use tilegrid::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(10,1);
    ///     let black = Rgba8::black();
    ///     pix.copy_hline(0,0,10, black);
    ///     assert_eq!(pix.get((0,0)), black);
    ///     assert_eq!(pix.get((1,0)), black);
    ///     assert_eq!(pix.get((9,0)), black);
    ///
    ///     pix.copy_hline(1,1,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_hline<C: Color>(&mut self, x: i64, y: i64, n: i64, c: C) {
        for i in 0 .. n {
            self.copy_pixel(x + i, y, c);
        }
    }
    /// Copies the [Color] `c` to pixels from (`x`,`y`) to (`x`,`y+n-1`)
    ///
    /// Locations outside of the region are ignored
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_vline<C: Color>(&mut self, x: i64, y: i64, n: i64, c: C) {
        for i in 0 .. n {
            self.copy_pixel(x, y + i, c);
        }
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
}
