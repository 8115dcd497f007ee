//! Monochrome frame buffer in SSD1306 page layout.
//!
//! The display memory is split into 8 pages of 8 rows. Each byte holds one
//! column of a page, least significant bit on top. Keeping the buffer in that
//! layout lets a flush send [`FrameBuffer::as_bytes`] as-is.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Buffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            pages: [0; BUFFER_SIZE],
        }
    }

    /// Wire image of the whole display
    pub const fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.pages
    }

    /// Whether the pixel at `(x, y)` is lit. Out of range pixels read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match Self::locate(x, y) {
            Some((index, mask)) => self.pages[index] & mask != 0,
            None => false,
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let Some((index, mask)) = Self::locate(x, y) else {
            return;
        };
        if on {
            self.pages[index] |= mask;
        } else {
            self.pages[index] &= !mask;
        }
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages.iter().map(|byte| byte.count_ones()).sum()
    }

    const fn locate(x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) else {
                continue;
            };
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pages = if color.is_on() {
            [0xFF; BUFFER_SIZE]
        } else {
            [0; BUFFER_SIZE]
        };
        Ok(())
    }
}
