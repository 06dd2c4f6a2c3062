//! Non-modal popup overlays for status messages.
//!
//! Hosts use these to make otherwise invisible events visible, such as a
//! vibration request on a display without a motor.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use crate::config::surface_center;
use crate::styles::DATE_FONT;

const POPUP_WIDTH: u32 = 120;
const POPUP_HEIGHT: u32 = 36;
const BORDER: u32 = 3;

const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Draw a bordered box with one centered line of text in the middle of the surface.
pub fn draw_status_popup<D>(
    display: &mut D,
    size: Size,
    text: &str,
    foreground: Rgb565,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = surface_center(size);
    let body = Size::new(POPUP_WIDTH.min(size.width), POPUP_HEIGHT.min(size.height));

    Rectangle::with_center(center, body + Size::new(2 * BORDER, 2 * BORDER))
        .into_styled(PrimitiveStyle::with_fill(foreground))
        .draw(display)
        .ok();

    Rectangle::with_center(center, body)
        .into_styled(PrimitiveStyle::with_fill(background))
        .draw(display)
        .ok();

    Text::with_text_style(text, center, MonoTextStyle::new(DATE_FONT, foreground), CENTERED_MIDDLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::super::canvas::Canvas;
    use super::*;

    #[test]
    fn test_popup_centered() {
        let size = Size::new(144, 168);
        let mut canvas = Canvas::new(size, Rgb565::BLACK);
        draw_status_popup(&mut canvas, size, "BUZZ BUZZ", Rgb565::WHITE, Rgb565::RED);

        assert_eq!(canvas.pixel(Point::new(72, 84 - 16)), Rgb565::RED);
        assert_eq!(canvas.pixel(Point::new(72, 84 - 20)), Rgb565::WHITE);
        assert_eq!(canvas.pixel(Point::new(2, 2)), Rgb565::BLACK);
        assert!(canvas.count(Rgb565::WHITE) > 0);
    }
}
