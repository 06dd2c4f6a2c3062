//! Date label slots.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::colors::WatchColor;
use crate::config::{DATE_SLOT_BOTTOM_HEIGHT, DATE_SLOT_SIDE_HEIGHT, DATE_SLOT_SIDE_WIDTH, DATE_SLOT_VERTICAL_OFFSET};
use crate::date::{DateSlot, DateSlots};
use crate::styles::{DATE_FONT, DATE_TEXT_STYLE};

/// Screen area of a date slot on a surface of `size`.
pub fn date_slot_rect(
    size: Size,
    slot: DateSlot,
) -> Rectangle {
    let side_y = (size.height / 2) as i32 - DATE_SLOT_VERTICAL_OFFSET;
    let side = Size::new(DATE_SLOT_SIDE_WIDTH, DATE_SLOT_SIDE_HEIGHT);

    match slot {
        DateSlot::Right => Rectangle::new(Point::new((size.width - DATE_SLOT_SIDE_WIDTH) as i32, side_y), side),
        DateSlot::Left => Rectangle::new(Point::new(0, side_y), side),
        DateSlot::Bottom => Rectangle::new(
            Point::new(0, (size.height - DATE_SLOT_BOTTOM_HEIGHT) as i32),
            Size::new(size.width, DATE_SLOT_BOTTOM_HEIGHT),
        ),
    }
}

/// Draw the populated date slot, horizontally centered and top-aligned.
pub fn draw_date<D>(
    display: &mut D,
    size: Size,
    slots: &DateSlots,
    color: WatchColor,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some((slot, text)) = slots.active() else {
        return;
    };

    let area = date_slot_rect(size, slot);
    let anchor = Point::new(area.top_left.x + (area.size.width / 2) as i32, area.top_left.y);
    let style = MonoTextStyle::new(DATE_FONT, color.to_rgb565());

    Text::with_text_style(text, anchor, style, DATE_TEXT_STYLE)
        .draw(display)
        .ok();
}
