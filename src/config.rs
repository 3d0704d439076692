//! Command line configuration

use std::path::PathBuf;

use clap::{ArgAction, Parser, value_parser};

use crate::color::{Palette, Rgba8};
use crate::errors::{Result, TileGridError};
use crate::tile::{GridSpec, TileSpec};

fn hex_color(s: &str) -> Result<Rgba8> {
    Rgba8::from_hex(s)
}

#[derive(Parser,Debug)]
#[command(name = "tilegrid", version, about = "generate a diamond tile grid debug image")]
pub struct Args {
    #[arg(long, default_value_t = 128, value_parser = value_parser!(u32).range(1..), help = "tile width in pixels")]
    pub width: u32,

    #[arg(long, default_value_t = 128, value_parser = value_parser!(u32).range(1..), help = "base tile height in pixels")]
    pub height: u32,

    #[arg(long, default_value_t = 2, value_parser = value_parser!(u32).range(1..), help = "tile height multiplier")]
    pub multiplier: u32,

    #[arg(long, default_value_t = 8, value_parser = value_parser!(u32).range(1..), help = "number of tiles across")]
    pub x: u32,

    #[arg(long, default_value_t = 8, value_parser = value_parser!(u32).range(1..), help = "number of tiles down")]
    pub y: u32,

    #[arg(long, help = "output filename")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "00000000", value_parser = hex_color, help = "background color, rrggbb[aa]")]
    pub background: Rgba8,

    #[arg(long, default_value = "000000", value_parser = hex_color, help = "diamond color, rrggbb[aa]")]
    pub diamond_color: Rgba8,

    #[arg(long, default_value = "1414f0", value_parser = hex_color, help = "label color, rrggbb[aa]")]
    pub label_color: Rgba8,

    #[arg(long, default_value = "ffffff", value_parser = hex_color, help = "border color, rrggbb[aa]")]
    pub border_color: Rgba8,

    #[arg(long, help = "do not draw tile coordinate labels")]
    pub no_labels: bool,

    #[arg(long, help = "TrueType/OpenType font file used for labels instead of the bundled face")]
    pub font: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "more log output, repeat for more")]
    pub verbose: u8,
}

/// Validated settings for one run
#[derive(Debug,Clone)]
pub struct GridConfig {
    pub grid: GridSpec,
    pub tile: TileSpec,
    pub palette: Palette,
    pub labels: bool,
    pub output: PathBuf,
    pub font: Option<PathBuf>,
}

impl Args {
    /// True if no output file was given
    pub fn missing_output(&self) -> bool {
        self.output.as_ref().map_or(true, |p| p.as_os_str().is_empty())
    }

    /// Check values that the parser does not cover
    pub fn validate(&self) -> Result<GridConfig> {
        let output = match &self.output {
            Some(p) if !p.as_os_str().is_empty() => p.clone(),
            _ => return Err(TileGridError::InvalidConfig("no output filename".to_string())),
        };
        let grid = GridSpec::new(self.x, self.y, self.multiplier)?;
        let tile = TileSpec::new(self.width, self.height)?;
        grid.image_size(&tile)?;

        Ok(GridConfig {
            grid,
            tile,
            palette: Palette {
                background: self.background,
                diamond: self.diamond_color,
                label: self.label_color,
                border: self.border_color,
            },
            labels: !self.no_labels,
            output,
            font: self.font.clone(),
        })
    }
}
