use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{info, Level};

#[cfg(not(feature = "freetype"))]
use tilegrid::load_font;
use tilegrid::{write_png, Args, GlyphLabel, GridConfig, GridRenderer, LabelRenderer, LABEL_PX};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn label_renderer(config: &GridConfig) -> Result<Box<dyn LabelRenderer>> {
    match &config.font {
        Some(path) => font_file_renderer(path),
        None => Ok(Box::new(GlyphLabel::bundled()?)),
    }
}

#[cfg(feature = "freetype")]
fn font_file_renderer(path: &Path) -> Result<Box<dyn LabelRenderer>> {
    let face = tilegrid::FreeTypeLabel::open(path, LABEL_PX as u32)
        .with_context(|| format!("could not load font {}", path.display()))?;
    Ok(Box::new(face))
}

#[cfg(not(feature = "freetype"))]
fn font_file_renderer(path: &Path) -> Result<Box<dyn LabelRenderer>> {
    let font = load_font(path)
        .with_context(|| format!("could not load font {}", path.display()))?;
    Ok(Box::new(GlyphLabel::new(font, LABEL_PX)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.missing_output() {
        eprintln!("{}", Args::command().render_help());
        std::process::exit(1);
    }
    let config = args.validate()?;
    info!("{} x {} tiles of {} x {} pixels, multiplier {}",
          config.grid.tiles_across(), config.grid.tiles_down(),
          config.tile.width(), config.tile.height(), config.grid.height_multiplier());

    let mut labels = if config.labels { Some(label_renderer(&config)?) } else { None };
    let mut ren = GridRenderer::new(config.grid, config.tile).with_palette(config.palette);
    if let Some(labels) = labels.as_mut() {
        ren = ren.with_labels(&mut **labels);
    }
    let pix = ren.render()?;

    write_png(&pix, &config.output)?;
    Ok(())
}
