use crate::{
    color::{self, RGB, RGB_BLACK},
    pixel_buffer::{PixelBuffer, GRID_SIZE},
};

/// The LED panel as seen by the animations: 8x8 addressable pixels, `0 <= x, y < 8`.
///
/// Implementors may assume the coordinates are in range.
pub trait PixelSurface {
    fn get_pixel(&self, x: usize, y: usize) -> RGB;
    fn set_pixel(&mut self, x: usize, y: usize, color: RGB);

    fn pixels(&self) -> PixelBuffer {
        let mut buffer = PixelBuffer::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                buffer[(x, y)] = self.get_pixel(x, y);
            }
        }
        buffer
    }

    fn set_pixels(&mut self, buffer: &PixelBuffer) {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.set_pixel(x, y, buffer[(x, y)]);
            }
        }
    }

    fn clear(&mut self) {
        self.set_pixels(&PixelBuffer::filled(RGB_BLACK));
    }
}

/// In-memory panel. Counts writes so callers can check nothing was drawn.
pub struct Fake {
    buffer: PixelBuffer,
    rgb565: bool,
    writes: usize,
}

impl Fake {
    pub fn new() -> Self {
        Self {
            buffer: PixelBuffer::new(),
            rgb565: false,
            writes: 0,
        }
    }

    /// Stores colors with the panel's 5-6-5 bits per channel, like the real hardware.
    pub fn rgb565() -> Self {
        Self {
            rgb565: true,
            ..Self::new()
        }
    }

    pub fn with_pixels(mut self, buffer: &PixelBuffer) -> Self {
        self.set_pixels(buffer);
        self.writes = 0;
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Default for Fake {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSurface for Fake {
    fn get_pixel(&self, x: usize, y: usize) -> RGB {
        self.buffer[(x, y)]
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: RGB) {
        self.writes += 1;
        self.buffer[(x, y)] = if self.rgb565 {
            color::quantize(color)
        } else {
            color
        };
    }

    fn pixels(&self) -> PixelBuffer {
        self.buffer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RGB_GREEN, RGB_WHITE};

    #[test]
    fn test_fake_counts_writes() {
        let mut surface = Fake::new();
        surface.set_pixel(1, 2, RGB_GREEN);
        surface.set_pixel(1, 2, RGB_WHITE);

        assert_eq!(2, surface.writes());
        assert_eq!(RGB_WHITE, surface.get_pixel(1, 2));
        assert_eq!(RGB_WHITE, surface.pixels()[(1, 2)]);
    }

    #[test]
    fn test_fake_rgb565_reads_back_quantized() {
        let mut surface = Fake::rgb565();
        surface.set_pixel(0, 0, RGB_WHITE);

        assert_eq!((248, 252, 248), surface.get_pixel(0, 0));
    }

    #[test]
    fn test_with_pixels_and_clear() {
        let mut surface = Fake::new().with_pixels(&PixelBuffer::filled(RGB_GREEN));
        assert_eq!(0, surface.writes());
        assert_eq!(PixelBuffer::filled(RGB_GREEN), surface.pixels());

        surface.clear();
        assert_eq!(PixelBuffer::new(), surface.pixels());
        assert_eq!(64, surface.writes());
    }
}
