//! Aliased line drawing
//!
//! Integer only [Bresenham](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! with dedicated paths for points, axis aligned and 45 degree segments.

use crate::pixfmt::Pixfmt;
use crate::Color;
use crate::Pixel;

/// Shape of a segment, selects the drawing routine
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum LineKind {
    /// Both endpoints are the same pixel
    Point,
    /// Constant y
    Horizontal,
    /// Constant x
    Vertical,
    /// |dx| == |dy|
    Diagonal,
    /// |dx| > |dy|, x is the driving axis
    Shallow,
    /// |dy| > |dx|, y is the driving axis
    Steep,
}

impl LineKind {
    /// Classify the segment from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// Independent of endpoint order
    ///
    ///     use tilegrid::LineKind;
    ///
    ///     assert_eq!(LineKind::of(3,3, 3,3), LineKind::Point);
    ///     assert_eq!(LineKind::of(0,5, 9,5), LineKind::Horizontal);
    ///     assert_eq!(LineKind::of(2,0, 2,9), LineKind::Vertical);
    ///     assert_eq!(LineKind::of(0,9, 9,0), LineKind::Diagonal);
    ///     assert_eq!(LineKind::of(0,0, 9,4), LineKind::Shallow);
    ///     assert_eq!(LineKind::of(9,0, 5,9), LineKind::Steep);
    ///
    pub fn of(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        if dx == 0 && dy == 0 {
            LineKind::Point
        } else if dy == 0 {
            LineKind::Horizontal
        } else if dx == 0 {
            LineKind::Vertical
        } else if dx == dy {
            LineKind::Diagonal
        } else if dx > dy {
            LineKind::Shallow
        } else {
            LineKind::Steep
        }
    }
}

/// Draw a line from `(x1,y1)` to `(x2,y2)` of color `c`
///
/// Both endpoints are drawn. Pixels are overwritten, not blended.
/// Pixels outside of the image are dropped.
///
///     use tilegrid::{draw_line,Source,Pixfmt,Rgba8};
///
///     let mut pix = Pixfmt::<Rgba8>::new(4,4);
///     let black = Rgba8::black();
///     draw_line(&mut pix, 3,3, 0,0, black);
///     for i in 0 .. 4 {
///         assert_eq!(pix.get((i,i)), black);
///     }
///     assert_eq!(pix.get((1,0)), Rgba8::transparent());
///
pub fn draw_line<T,C>(pix: &mut Pixfmt<T>, x1: i64, y1: i64, x2: i64, y2: i64, c: C)
    where Pixfmt<T>: Pixel,
          C: Color
{
    // Drawing p1 -> p2 covers the same pixels as p2 -> p1,
    //   so only increasing x needs handling
    let (x1,y1,x2,y2) = if x1 > x2 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };

    let dx = x2 - x1;
    let dy = (y2 - y1).abs();
    let sy = if y2 < y1 { -1 } else { 1 };

    match LineKind::of(x1, y1, x2, y2) {
        LineKind::Point => pix.copy_pixel(x1, y1, c),
        LineKind::Horizontal => pix.copy_hline(x1, y1, dx + 1, c),
        LineKind::Vertical => pix.copy_vline(x1, y1.min(y2), dy + 1, c),
        LineKind::Diagonal => {
            for i in 0 ..= dx {
                pix.copy_pixel(x1 + i, y1 + sy * i, c);
            }
        },
        LineKind::Shallow => {
            let (mut x, mut y, mut e) = (x1, y1, dx);
            for _ in 0 .. dx {
                pix.copy_pixel(x, y, c);
                x += 1;
                e -= 2 * dy;
                if e < 0 {
                    y += sy;
                    e += 2 * dx;
                }
            }
            pix.copy_pixel(x2, y2, c);
        },
        LineKind::Steep => {
            let (mut x, mut y, mut e) = (x1, y1, dy);
            for _ in 0 .. dy {
                pix.copy_pixel(x, y, c);
                y += sy;
                e -= 2 * dx;
                if e < 0 {
                    x += 1;
                    e += 2 * dy;
                }
            }
            pix.copy_pixel(x2, y2, c);
        },
    }
}
