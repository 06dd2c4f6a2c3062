//! Drawing for the watch face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence. The host composites three regions in this order:
//!
//! 1. background layer: [`draw_ticks`]
//! 2. date text: [`draw_date`]
//! 3. hands layer: [`draw_hands`] (hands, then the center cap on top)
//!
//! [`draw_face`] runs the whole sequence after clearing to the background color.

mod date;
mod hands;
mod popups;
mod primitives;
mod ticks;

#[cfg(test)]
pub(crate) mod canvas;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub use date::{date_slot_rect, draw_date};
pub use hands::{draw_center_cap, draw_hand, draw_hands};
pub use popups::draw_status_popup;
pub use primitives::{draw_circle_outline, draw_line, fill_circle};
pub use ticks::{draw_ticks, erase_interior};

use crate::config::Platform;
use crate::date::DateSlots;
use crate::geometry::FaceGeometry;
use crate::settings::ColorConfig;
use crate::time::ClockTime;

/// Draw the complete face: window background, ticks, date label, hands.
pub fn draw_face<D>(
    display: &mut D,
    platform: Platform,
    colors: &ColorConfig,
    time: ClockTime,
    slots: &DateSlots,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(colors.background.to_rgb565()).ok();
    draw_ticks(display, platform, colors);
    draw_date(display, platform.size(), slots, colors.date);
    draw_hands(display, &FaceGeometry::new(platform.size(), time), colors);
}
