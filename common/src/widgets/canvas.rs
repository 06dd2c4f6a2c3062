//! In-memory draw target for widget tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Framebuffer that records every pixel and ignores out-of-bounds writes.
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new(
        size: Size,
        fill: Rgb565,
    ) -> Self {
        Self { size, pixels: vec![fill; (size.width * size.height) as usize] }
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Rgb565 {
        self.pixels[(point.y as u32 * self.size.width + point.x as u32) as usize]
    }

    /// Number of pixels with this color.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }

    /// Number of pixels with this color inside a rectangle.
    pub fn count_in(
        &self,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|p| self.contains(*p) && self.pixel(*p) == color).count()
    }

    /// Check if any pixel in the 3x3 block around `point` has this color.
    pub fn near(
        &self,
        point: Point,
        color: Rgb565,
    ) -> bool {
        Rectangle::with_center(point, Size::new(3, 3)).points().any(|p| self.contains(p) && self.pixel(p) == color)
    }

    fn contains(
        &self,
        point: Point,
    ) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size.width && (point.y as u32) < self.size.height
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.contains(point) {
                let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
