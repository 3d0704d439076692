
extern crate tilegrid;

use std::num::NonZeroU32;
use tilegrid::{border_for, diamond_for, label_origin, Point, TileSpec};

fn mult(m: u32) -> NonZeroU32 {
    NonZeroU32::new(m).unwrap()
}

#[test]
fn t03_diamond_default_tile() {
    let tile = TileSpec::new(128, 128).unwrap();
    let d = diamond_for(0, 0, &tile, mult(2));
    assert_eq!(d.left,   Point::new(0, 96));
    assert_eq!(d.bottom, Point::new(64, 128));
    assert_eq!(d.right,  Point::new(127, 96));
    assert_eq!(d.top,    Point::new(64, 64));
}

#[test]
fn t03_border_second_tile() {
    let tile = TileSpec::new(128, 128).unwrap();
    assert_eq!(tile.origin(1, 0), Point::new(128, 0));
    let b = border_for(1, 0, &tile);
    assert_eq!(b.top_left,     Point::new(128, 0));
    assert_eq!(b.bottom_left,  Point::new(128, 127));
    assert_eq!(b.bottom_right, Point::new(255, 127));
    assert_eq!(b.top_right,    Point::new(255, 0));
}

#[test]
fn t03_diamond_is_translated_per_tile() {
    let tile = TileSpec::new(48, 30).unwrap();
    let d0 = diamond_for(0, 0, &tile, mult(3));
    for gx in 0 .. 4 {
        for gy in 0 .. 4 {
            let d = diamond_for(gx, gy, &tile, mult(3));
            let (ox, oy) = (gx as i64 * 48, gy as i64 * 30);
            assert_eq!(d.left,   Point::new(d0.left.x + ox,   d0.left.y + oy));
            assert_eq!(d.bottom, Point::new(d0.bottom.x + ox, d0.bottom.y + oy));
            assert_eq!(d.right,  Point::new(d0.right.x + ox,  d0.right.y + oy));
            assert_eq!(d.top,    Point::new(d0.top.x + ox,    d0.top.y + oy));
        }
    }
}

#[test]
fn t03_larger_multiplier_is_flatter() {
    let tile = TileSpec::new(128, 128).unwrap();
    let mut last_height = i64::MAX;
    for m in 1 .. 9 {
        let d = diamond_for(0, 0, &tile, mult(m));
        let height = d.bottom.y - d.top.y;
        assert!(height <= last_height, "multiplier {} is not flatter", m);
        last_height = height;
        // left and right always share a row between top and bottom
        assert_eq!(d.left.y, d.right.y);
        assert!(d.left.y >= d.top.y && d.left.y <= d.bottom.y);
    }
}

#[test]
fn t03_borders_tile_the_plane() {
    // neighbouring borders are adjacent, never overlapping
    let tile = TileSpec::new(10, 7).unwrap();
    for g in 0 .. 5 {
        let a = border_for(g, g, &tile);
        let right = border_for(g + 1, g, &tile);
        let below = border_for(g, g + 1, &tile);
        assert_eq!(right.top_left.x, a.top_right.x + 1);
        assert_eq!(below.top_left.y, a.bottom_left.y + 1);
    }
}

#[test]
fn t03_label_near_center_top() {
    let tile = TileSpec::new(128, 128).unwrap();
    assert_eq!(label_origin(0, 0, &tile), Point::new(54, 30));
    assert_eq!(label_origin(3, 1, &tile), Point::new(3 * 128 + 54, 128 + 30));
}
