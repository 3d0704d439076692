#![allow(dead_code)]

use std::collections::BTreeSet;

use tilegrid::{Pixel, Pixfmt, Rgba8, Source};

/// Pixels that differ from the initial transparent fill
pub fn drawn(pix: &Pixfmt<Rgba8>) -> BTreeSet<(i64,i64)> {
    let mut out = BTreeSet::new();
    for y in 0 .. pix.height() {
        for x in 0 .. pix.width() {
            if pix.get((x,y)) != Rgba8::transparent() {
                out.insert((x as i64, y as i64));
            }
        }
    }
    out
}

/// Pixels set by a single line on an empty `w` x `h` image
pub fn line_pixels(w: usize, h: usize, x1: i64, y1: i64, x2: i64, y2: i64) -> BTreeSet<(i64,i64)> {
    let mut pix = Pixfmt::<Rgba8>::new(w, h);
    tilegrid::draw_line(&mut pix, x1, y1, x2, y2, Rgba8::black());
    drawn(&pix)
}

/// Pixels of exactly color `c`
pub fn pixels_of(pix: &Pixfmt<Rgba8>, c: Rgba8) -> BTreeSet<(i64,i64)> {
    let mut out = BTreeSet::new();
    for y in 0 .. pix.height() {
        for x in 0 .. pix.width() {
            if pix.get((x,y)) == c {
                out.insert((x as i64, y as i64));
            }
        }
    }
    out
}
