//! Colors

use crate::Color;
use crate::errors::{Result, TileGridError};

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Parse `rrggbb` or `rrggbbaa`, with an optional leading `#`
    ///
    ///     use tilegrid::Rgba8;
    ///
    ///     assert_eq!(Rgba8::from_hex("1414f0").unwrap(), Rgba8::new(20,20,240,255));
    ///     assert_eq!(Rgba8::from_hex("#ffffff80").unwrap(), Rgba8::new(255,255,255,128));
    ///     assert!(Rgba8::from_hex("fff").is_err());
    ///
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if (hex.len() != 6 && hex.len() != 8) || !hex.is_ascii() {
            return Err(TileGridError::InvalidConfig(format!("invalid color '{}', expected rrggbb or rrggbbaa", s)));
        }
        let component = |i: usize| {
            u8::from_str_radix(&hex[i .. i+2], 16)
                .map_err(|_| TileGridError::InvalidConfig(format!("invalid color '{}', not a hex value", s)))
        };
        let rgb = Rgb8::new(component(0)?, component(2)?, component(4)?);
        if hex.len() == 8 {
            Ok(Self::new(rgb.r, rgb.g, rgb.b, component(6)?))
        } else {
            Ok(rgb.into())
        }
    }
}

impl Color for Rgba8 {
    fn alpha8(&self) -> u8 { self.a }
    fn red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8 { self.b }
}

/// Color as Red, Green, Blue, always opaque
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
}

impl Color for Rgb8 {
    fn alpha8(&self) -> u8 { 255 }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
}

impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}

/// Colors used when drawing a tile grid
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Palette {
    /// Fill before any tile is drawn
    pub background: Rgba8,
    /// Diamond outline
    pub diamond: Rgba8,
    /// Coordinate label
    pub label: Rgba8,
    /// Tile border rectangle
    pub border: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgba8::transparent(),
            diamond: Rgba8::black(),
            label: Rgba8::new(20,20,240,255),
            border: Rgba8::white(),
        }
    }
}
