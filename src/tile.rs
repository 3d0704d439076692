//! Tile geometry
//!
//! Pixel space positions of the diamond, the border rectangle and the
//! label of one tile in the grid.

use std::num::NonZeroU32;

use crate::errors::{Result, TileGridError};

/// Pixel location, (0,0) is the top left of the image
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// Pixel footprint of a single tile
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct TileSpec {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl TileSpec {
    /// Tile of `width` x `height` pixels, both must be positive
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(TileSpec { width, height }),
            _ => Err(TileGridError::InvalidConfig(format!("tile size must be positive, got {}x{}", width, height))),
        }
    }
    pub fn width(&self) -> u32 {
        self.width.get()
    }
    pub fn height(&self) -> u32 {
        self.height.get()
    }
    /// Top left pixel of tile (`grid_x`,`grid_y`)
    ///
    /// Saturates at `i64::MAX` for tiles far beyond any drawable image
    pub fn origin(&self, grid_x: u32, grid_y: u32) -> Point {
        Point::new(i64::from(grid_x).saturating_mul(i64::from(self.width())),
                   i64::from(grid_y).saturating_mul(i64::from(self.height())))
    }
}

/// Largest width or height a PNG image can hold, 2^31 - 1
pub const MAX_IMAGE_SIDE: usize = i32::MAX as usize;

/// Tile counts and the diamond flattening factor
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct GridSpec {
    tiles_across: NonZeroU32,
    tiles_down: NonZeroU32,
    height_multiplier: NonZeroU32,
}

impl GridSpec {
    /// All values must be positive
    pub fn new(tiles_across: u32, tiles_down: u32, height_multiplier: u32) -> Result<Self> {
        let positive = |v: u32, what: &str| {
            NonZeroU32::new(v)
                .ok_or_else(|| TileGridError::InvalidConfig(format!("{} must be positive", what)))
        };
        Ok(GridSpec {
            tiles_across: positive(tiles_across, "tiles across")?,
            tiles_down: positive(tiles_down, "tiles down")?,
            height_multiplier: positive(height_multiplier, "height multiplier")?,
        })
    }
    pub fn tiles_across(&self) -> u32 {
        self.tiles_across.get()
    }
    pub fn tiles_down(&self) -> u32 {
        self.tiles_down.get()
    }
    pub fn height_multiplier(&self) -> NonZeroU32 {
        self.height_multiplier
    }
    /// Image size in pixels that exactly bounds all tiles
    ///
    /// Fails if either side exceeds [MAX_IMAGE_SIDE] or the pixel data
    /// does not fit in memory addressing
    ///
    /// [MAX_IMAGE_SIDE]: constant.MAX_IMAGE_SIDE.html
    pub fn image_size(&self, tile: &TileSpec) -> Result<(usize,usize)> {
        let overflow = || TileGridError::InvalidConfig(
            format!("image size {}x{} tiles of {}x{} pixels is too large",
                    self.tiles_across(), self.tiles_down(), tile.width(), tile.height()));
        let w = (self.tiles_across() as usize).checked_mul(tile.width() as usize).ok_or_else(overflow)?;
        let h = (self.tiles_down() as usize).checked_mul(tile.height() as usize).ok_or_else(overflow)?;
        if w > MAX_IMAGE_SIDE || h > MAX_IMAGE_SIDE {
            return Err(TileGridError::InvalidConfig(
                format!("image size {}x{} exceeds the PNG limit of {} pixels per side", w, h, MAX_IMAGE_SIDE)));
        }
        // 4 bytes per pixel must also be addressable
        w.checked_mul(h).and_then(|n| n.checked_mul(4)).ok_or_else(overflow)?;
        Ok((w, h))
    }
}

/// Rhombus inside a tile, flattened by the height multiplier
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Diamond {
    pub left: Point,
    pub bottom: Point,
    pub right: Point,
    pub top: Point,
}

impl Diamond {
    /// Outline segments: left -> bottom -> right -> top -> left
    pub fn edges(&self) -> [(Point,Point); 4] {
        [(self.left, self.bottom),
         (self.bottom, self.right),
         (self.right, self.top),
         (self.top, self.left)]
    }
}

/// Corners of the tile rectangle, inclusive
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct TileBorder {
    pub top_left: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub top_right: Point,
}

impl TileBorder {
    /// Outline segments: top left -> bottom left -> bottom right -> top right -> top left
    pub fn edges(&self) -> [(Point,Point); 4] {
        [(self.top_left, self.bottom_left),
         (self.bottom_left, self.bottom_right),
         (self.bottom_right, self.top_right),
         (self.top_right, self.top_left)]
    }
}

/// Diamond for tile (`grid_x`,`grid_y`)
///
/// The top sits `height / multiplier` above the tile bottom, the left and
/// right points half that distance. The bottom point touches the first row
/// below the tile. Integer division truncates; a degenerate or inverted
/// diamond for small tiles is accepted.
///
///     use std::num::NonZeroU32;
///     use tilegrid::{diamond_for, Point, TileSpec};
///
///     let tile = TileSpec::new(128, 128).unwrap();
///     let d = diamond_for(0, 0, &tile, NonZeroU32::new(2).unwrap());
///     assert_eq!(d.left,   Point::new(0, 96));
///     assert_eq!(d.bottom, Point::new(64, 128));
///     assert_eq!(d.right,  Point::new(127, 96));
///     assert_eq!(d.top,    Point::new(64, 64));
///
pub fn diamond_for(grid_x: u32, grid_y: u32, tile: &TileSpec, multiplier: NonZeroU32) -> Diamond {
    let o = tile.origin(grid_x, grid_y);
    let w = i64::from(tile.width());
    let h = i64::from(tile.height());
    let at = |dx: i64, dy: i64| Point::new(o.x.saturating_add(dx), o.y.saturating_add(dy));
    let m = i64::from(multiplier.get());

    let y_top = h - h / m;
    let y_mid = h - h / (m * 2);

    Diamond {
        left:   at(0,         y_mid),
        bottom: at(w / 2,     h),
        right:  at(w - 1,     y_mid),
        top:    at(w / 2,     y_top),
    }
}

/// Border rectangle for tile (`grid_x`,`grid_y`)
///
/// Right and bottom edges are the last pixel inside the tile, so adjacent
/// borders never overlap.
pub fn border_for(grid_x: u32, grid_y: u32, tile: &TileSpec) -> TileBorder {
    let o = tile.origin(grid_x, grid_y);
    let right = o.x.saturating_add(i64::from(tile.width()) - 1);
    let bottom = o.y.saturating_add(i64::from(tile.height()) - 1);
    TileBorder {
        top_left:     Point::new(o.x, o.y),
        bottom_left:  Point::new(o.x, bottom),
        bottom_right: Point::new(right, bottom),
        top_right:    Point::new(right, o.y),
    }
}

/// Baseline origin of the "x,y" label for tile (`grid_x`,`grid_y`)
pub fn label_origin(grid_x: u32, grid_y: u32, tile: &TileSpec) -> Point {
    let o = tile.origin(grid_x, grid_y);
    Point::new(o.x.saturating_add(i64::from(tile.width()) / 2 - 10), o.y.saturating_add(30))
}
