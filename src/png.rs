//! Writing of PNG (Portable Network Graphics) files
//!
//! Encoding is done by the `image` crate, RGBA 8 bits per component
//!
use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;

use crate::color::Rgba8;
use crate::errors::{Result, TileGridError};
use crate::pixfmt::Pixfmt;
use crate::{Pixel, PixelData};

/// Write `pix` to `filename` as a PNG
///
/// Nothing is left behind at `filename` if encoding or writing fails
pub fn write_png<P: AsRef<Path>>(pix: &Pixfmt<Rgba8>, filename: P) -> Result<()> {
    let path = filename.as_ref();
    let (w, h) = match (u32::try_from(pix.width()), u32::try_from(pix.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(TileGridError::InvalidConfig(
            format!("image size {}x{} is too large for PNG", pix.width(), pix.height()))),
    };

    let file = File::create(path).map_err(|source| TileGridError::Io { path: path.to_path_buf(), source })?;
    if let Err(e) = encode(pix, w, h, file, path) {
        // only regular files, never a device such as /dev/stdout
        if path.is_file() {
            let _ = fs::remove_file(path);
        }
        return Err(e);
    }

    info!("wrote {}x{} image to {}", w, h, path.display());
    Ok(())
}

fn encode(pix: &Pixfmt<Rgba8>, w: u32, h: u32, file: File, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(file);
    PngEncoder::new(&mut out)
        .write_image(pix.pixeldata(), w, h, ExtendedColorType::Rgba8)
        .map_err(|source| TileGridError::Encode { path: path.to_path_buf(), source })?;
    out.flush().map_err(|source| TileGridError::Io { path: path.to_path_buf(), source })
}

/// Read a PNG file back as RGBA data, width, and height
pub fn read_png<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let path = filename.as_ref();
    let img = image::open(path)
        .map_err(|source| TileGridError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}
