//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

/// Circle diameter for a radius, counting the center pixel.
#[inline]
const fn diameter(radius: u32) -> u32 { radius * 2 + 1 }

/// Draw a straight line of the given stroke width.
pub fn draw_line<D>(
    display: &mut D,
    start: Point,
    end: Point,
    color: Rgb565,
    width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(start, end)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

/// Fill a disc of `radius` pixels around `center`.
pub fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a 1px circle outline of `radius` pixels around `center`.
pub fn draw_circle_outline<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}
