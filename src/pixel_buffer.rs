use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crc::{Crc, CRC_32_ISO_HDLC};

use crate::{
    color::{self, RGB, RGB_BLACK},
    error::{check_range, check_size, Result},
};

pub const GRID_SIZE: usize = 8;
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A line of pixels, either a row (left to right) or a column (top to bottom).
pub type Line = [RGB; GRID_SIZE];

/// Row-major 8x8 grid of colors with the origin at the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    pixels: Vec<RGB>,
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self::filled(RGB_BLACK)
    }

    pub fn filled(color: RGB) -> Self {
        Self {
            pixels: vec![color; PIXEL_COUNT],
        }
    }

    pub fn from_slice(pixels: &[RGB]) -> Result<Self> {
        check_size("screen", PIXEL_COUNT, pixels.len())?;
        Ok(Self {
            pixels: pixels.to_vec(),
        })
    }

    pub fn from_rows(rows: &[Line]) -> Result<Self> {
        check_size("rows", GRID_SIZE, rows.len())?;
        Ok(Self {
            pixels: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn as_slice(&self) -> &[RGB] {
        &self.pixels
    }

    pub fn into_vec(self) -> Vec<RGB> {
        self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<RGB> {
        check_coords(x, y)?;
        Ok(self[(x, y)])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: RGB) -> Result<()> {
        check_coords(x, y)?;
        self[(x, y)] = color;
        Ok(())
    }

    pub fn fill(&mut self, color: RGB) {
        self.pixels.fill(color);
    }

    pub fn row(&self, y: usize) -> Line {
        std::array::from_fn(|x| self[(x, y)])
    }

    pub fn column(&self, x: usize) -> Line {
        std::array::from_fn(|y| self[(x, y)])
    }

    pub fn rows(&self) -> Vec<Line> {
        (0..GRID_SIZE).map(|y| self.row(y)).collect()
    }

    pub fn columns(&self) -> Vec<Line> {
        (0..GRID_SIZE).map(|x| self.column(x)).collect()
    }

    /// The buffer as a RGB565 panel would show it.
    pub fn quantized(&self) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&c| color::quantize(c)).collect(),
        }
    }

    pub fn contains(&self, color: RGB) -> bool {
        self.pixels.contains(&color)
    }

    /// CRC32 over the raw channel bytes, used to identify screens in logs.
    pub fn checksum(&self) -> u32 {
        const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
        let mut digest = CRC32.digest();
        for &(r, g, b) in &self.pixels {
            digest.update(&[r, g, b]);
        }
        digest.finalize()
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn check_coords(x: usize, y: usize) -> Result<()> {
    check_range("x", x, GRID_SIZE)?;
    check_range("y", y, GRID_SIZE)
}

impl Index<(usize, usize)> for PixelBuffer {
    type Output = RGB;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < GRID_SIZE && y < GRID_SIZE,
            "Out of bounds read on PixelBuffer: ({x}, {y})"
        );
        &self.pixels[x + y * GRID_SIZE]
    }
}

impl IndexMut<(usize, usize)> for PixelBuffer {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < GRID_SIZE && y < GRID_SIZE,
            "Out of bounds write on PixelBuffer: ({x}, {y})"
        );
        &mut self.pixels[x + y * GRID_SIZE]
    }
}

/// One character per pixel: ' ' for black, '#' for white, 'o' for anything else.
impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let c = match self[(x, y)] {
                    RGB_BLACK => ' ',
                    color::RGB_WHITE => '#',
                    _ => 'o',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::{RGB_RED, RGB_WHITE},
        error::Error,
    };

    fn diagonal() -> PixelBuffer {
        let mut buffer = PixelBuffer::new();
        for i in 0..GRID_SIZE {
            buffer[(i, i)] = RGB_WHITE;
        }
        buffer
    }

    #[test]
    fn test_from_slice_wrong_size() {
        assert_eq!(
            Err(Error::DataSize {
                what: "screen",
                expected: 64,
                actual: 10
            }),
            PixelBuffer::from_slice(&[RGB_BLACK; 10])
        );
    }

    #[test]
    fn test_row_major_layout() {
        let mut buffer = PixelBuffer::new();
        buffer.set_pixel(3, 1, RGB_RED).unwrap();

        assert_eq!(RGB_RED, buffer.as_slice()[GRID_SIZE + 3]);
        assert_eq!(RGB_RED, buffer.row(1)[3]);
        assert_eq!(RGB_RED, buffer.column(3)[1]);
    }

    #[test]
    fn test_pixel_out_of_range() {
        let mut buffer = PixelBuffer::new();
        assert_eq!(
            Err(Error::InvalidArgument {
                what: "x",
                value: 8,
                max: 8
            }),
            buffer.set_pixel(8, 0, RGB_RED)
        );
        assert!(buffer.pixel(0, 12).is_err());
    }

    #[test]
    fn test_from_rows() {
        let buffer = diagonal();
        assert_eq!(buffer, PixelBuffer::from_rows(&buffer.rows()).unwrap());
        assert!(PixelBuffer::from_rows(&buffer.rows()[..3]).is_err());
    }

    #[test]
    fn test_checksum_changes_with_content() {
        let black = PixelBuffer::new();
        assert_eq!(black.checksum(), PixelBuffer::new().checksum());
        assert_ne!(black.checksum(), diagonal().checksum());
    }

    #[test]
    fn test_display() {
        let output = diagonal().to_string();
        let first_lines: Vec<&str> = output.lines().take(2).collect();
        assert_eq!(vec!["#       ", " #      "], first_lines);
    }
}
