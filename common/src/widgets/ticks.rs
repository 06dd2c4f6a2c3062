//! Background layer: hour tick marks.
//!
//! Twelve spokes are drawn from the center out past the dial edge, then the
//! interior is painted over in the background color. What survives is a short
//! tick at each hour, [`TICK_LENGTH`](crate::config::TICK_LENGTH) pixels deep
//! on the rectangular face and at least that deep on the round one.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use super::primitives::{draw_line, fill_circle};
use crate::config::{Platform, TICK_LENGTH, TICK_WIDTH};
use crate::geometry::TickSet;
use crate::settings::ColorConfig;

/// Draw the background layer: spokes in the tick color, then erase the interior.
pub fn draw_ticks<D>(
    display: &mut D,
    platform: Platform,
    colors: &ColorConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let ticks = TickSet::new(platform.center(), platform.tick_line_length());
    let tick_color = colors.tick.to_rgb565();

    for point in ticks.points {
        draw_line(display, ticks.center, point, tick_color, TICK_WIDTH);
    }

    erase_interior(display, platform, colors.background.to_rgb565());
}

/// Paint everything but the outer tick band in `color`.
///
/// Round: a disc of radius `width / 2 - TICK_LENGTH`. Rect: the surface
/// inset by `TICK_LENGTH` on each side.
pub fn erase_interior<D>(
    display: &mut D,
    platform: Platform,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = platform.size();
    if platform.is_round() {
        fill_circle(display, platform.center(), size.width / 2 - TICK_LENGTH, color);
    } else {
        let inset = TICK_LENGTH as i32;
        Rectangle::new(
            Point::new(inset, inset),
            Size::new(size.width - 2 * TICK_LENGTH, size.height - 2 * TICK_LENGTH),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    }
}
