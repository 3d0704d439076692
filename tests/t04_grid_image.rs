
extern crate tilegrid;

mod common;
use common::pixels_of;

use tilegrid::{GlyphLabel, GridRenderer, GridSpec, Palette, Pixel, Rgba8, Source, TileSpec};

#[test]
fn t04_image_size_bounds_tiles() {
    for &(across, down, w, h, m) in [(1,1,1,1,1),(8,8,128,128,2),(3,5,17,9,4),(2,1,64,32,7),(1,4,5,40,1)].iter() {
        let grid = GridSpec::new(across, down, m).unwrap();
        let tile = TileSpec::new(w, h).unwrap();
        let mut font = GlyphLabel::bundled().unwrap();
        let pix = GridRenderer::new(grid, tile).with_labels(&mut font).render().unwrap();
        assert_eq!(pix.width(), (across * w) as usize);
        assert_eq!(pix.height(), (down * h) as usize);
    }
}

#[test]
fn t04_borders_cover_every_tile_edge() {
    let grid = GridSpec::new(3, 2, 2).unwrap();
    let tile = TileSpec::new(20, 16).unwrap();
    let palette = Palette::default();
    let pix = GridRenderer::new(grid, tile).render().unwrap();

    for tx in 0 .. 3 {
        for ty in 0 .. 2 {
            let (x0, y0) = (tx * 20, ty * 16);
            for i in 0 .. 20 {
                assert_eq!(pix.get((x0 + i, y0)), palette.border);
                assert_eq!(pix.get((x0 + i, y0 + 15)), palette.border);
            }
            for j in 0 .. 16 {
                assert_eq!(pix.get((x0, y0 + j)), palette.border);
                assert_eq!(pix.get((x0 + 19, y0 + j)), palette.border);
            }
        }
    }
}

#[test]
fn t04_diamond_vertices_drawn() {
    let grid = GridSpec::new(2, 2, 2).unwrap();
    let tile = TileSpec::new(32, 32).unwrap();
    let palette = Palette::default();
    let pix = GridRenderer::new(grid, tile).render().unwrap();

    for tx in 0 .. 2usize {
        for ty in 0 .. 2usize {
            let (x0, y0) = (tx * 32, ty * 32);
            // top (16,16), mid row 24; left/right vertices sit on the border
            assert_eq!(pix.get((x0 + 16, y0 + 16)), palette.diamond);
            assert_eq!(pix.get((x0 + 8, y0 + 20)), palette.diamond);
            assert_eq!(pix.get((x0 + 24, y0 + 20)), palette.diamond);
            assert_eq!(pix.get((x0 + 8, y0 + 28)), palette.diamond);
            // center of the diamond is empty
            assert_eq!(pix.get((x0 + 16, y0 + 24)), palette.background);
        }
    }
}

#[test]
fn t04_custom_palette_and_labels() {
    let grid = GridSpec::new(2, 1, 2).unwrap();
    let tile = TileSpec::new(64, 64).unwrap();
    let palette = Palette {
        background: Rgba8::new(1,2,3,255),
        diamond: Rgba8::new(200,0,0,255),
        label: Rgba8::new(0,200,0,255),
        border: Rgba8::new(0,0,200,255),
    };
    let mut font = GlyphLabel::bundled().unwrap();
    let pix = GridRenderer::new(grid, tile)
        .with_palette(palette)
        .with_labels(&mut font)
        .render()
        .unwrap();

    let labels = pixels_of(&pix, palette.label);
    assert!(!labels.is_empty());
    // labels start at x = origin + 22, baseline at y = 30
    assert!(labels.iter().any(|&(x,_)| x < 64));
    assert!(labels.iter().any(|&(x,_)| x >= 64));
    for &(x,y) in &labels {
        let lx = x % 64;
        assert!(lx >= 22 && lx < 22 + 3 * 7, "label pixel ({},{})", x, y);
        assert!(y >= 30 - 11 && y < 30 + 3, "label pixel ({},{})", x, y);
    }
    assert!(!pixels_of(&pix, palette.background).is_empty());
    assert!(pixels_of(&pix, Rgba8::transparent()).is_empty());
}

#[test]
fn t04_degenerate_tiles_render() {
    // tiny tiles push labels and diamond bottoms outside the image
    let grid = GridSpec::new(4, 3, 9).unwrap();
    let tile = TileSpec::new(3, 2).unwrap();
    let mut font = GlyphLabel::bundled().unwrap();
    let pix = GridRenderer::new(grid, tile).with_labels(&mut font).render().unwrap();
    assert_eq!((pix.width(), pix.height()), (12, 6));
}
