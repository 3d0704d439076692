//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}


impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and zeroed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Set every pixel to the component values in `pixel`
    pub fn fill(&mut self, pixel: &[u8]) {
        assert_eq!(pixel.len(), self.bpp);
        self.data.chunks_exact_mut(self.bpp).for_each(|p| p.copy_from_slice(pixel));
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i .. i + self.bpp]
    }
}

#[cfg(test)]
mod tests {
    use super::RenderingBuffer;

    #[test]
    fn fill_and_index() {
        let mut rbuf = RenderingBuffer::new(3, 2, 4);
        assert_eq!(rbuf.len(), 24);
        assert!(rbuf.data.iter().all(|&v| v == 0));

        rbuf.fill(&[1, 2, 3, 4]);
        assert_eq!(&rbuf[(2,1)], &[1, 2, 3, 4]);

        rbuf[(1,0)].copy_from_slice(&[9, 9, 9, 9]);
        assert_eq!(&rbuf.data[.. 12], &[1,2,3,4, 9,9,9,9, 1,2,3,4]);
        assert_eq!(&rbuf.data[12 ..], &[1,2,3,4, 1,2,3,4, 1,2,3,4]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let rbuf = RenderingBuffer::new(3, 2, 4);
        let _ = &rbuf[(3,0)];
    }
}
