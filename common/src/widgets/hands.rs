//! Hands layer: minute hand, hour hand, center cap.
//!
//! Each hand is built from three strokes along the same ray:
//!
//! ```text
//! center ──stem (1px)── stem ══════ body (7px) ══════ tip
//!                                hole_start ── hole (2px, background) ── hole_end
//! ```
//!
//! The minute hand is drawn first, so the hour hand sits on top where they
//! cross. The center cap covers both.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{draw_circle_outline, draw_line, fill_circle};
use crate::config::{CENTER_RADIUS, HAND_WIDTH, HOLE_WIDTH, STEM_WIDTH};
use crate::geometry::{FaceGeometry, HandGeometry};
use crate::settings::ColorConfig;

/// Draw one hand: thin stem, wide body, background-colored hole.
pub fn draw_hand<D>(
    display: &mut D,
    center: Point,
    hand: &HandGeometry,
    color: Rgb565,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_line(display, center, hand.stem, color, STEM_WIDTH);
    draw_line(display, hand.stem, hand.tip, color, HAND_WIDTH);
    draw_line(display, hand.hole_start, hand.hole_end, background, HOLE_WIDTH);
}

/// Draw the center cap: a background disc with a 1px outline in `dot`.
pub fn draw_center_cap<D>(
    display: &mut D,
    center: Point,
    dot: Rgb565,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_circle(display, center, CENTER_RADIUS, background);
    draw_circle_outline(display, center, CENTER_RADIUS, dot);
}

/// Draw both hands and the center cap.
pub fn draw_hands<D>(
    display: &mut D,
    geometry: &FaceGeometry,
    colors: &ColorConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let background = colors.background.to_rgb565();

    draw_hand(display, geometry.center, &geometry.minute_hand, colors.minute.to_rgb565(), background);
    draw_hand(display, geometry.center, &geometry.hour_hand, colors.hour.to_rgb565(), background);
    draw_center_cap(display, geometry.center, colors.dot.to_rgb565(), background);
}

#[cfg(test)]
mod tests {
    use super::super::canvas::Canvas;
    use super::*;
    use crate::colors::WatchColor;
    use crate::config::Platform;
    use crate::time::ClockTime;

    fn colors() -> ColorConfig {
        ColorConfig {
            background: WatchColor::from_hex(0x00_0000),
            hour: WatchColor::from_hex(0xFF_0000),
            minute: WatchColor::from_hex(0x00_FF00),
            dot: WatchColor::from_hex(0x00_00FF),
            ..ColorConfig::DEFAULT
        }
    }

    fn render(
        hour: u8,
        minute: u8,
    ) -> (Canvas, ColorConfig) {
        let colors = colors();
        let size = Platform::Rect.size();
        let mut canvas = Canvas::new(size, colors.background.to_rgb565());
        let geometry = FaceGeometry::new(size, ClockTime::new(hour, minute).unwrap());
        draw_hands(&mut canvas, &geometry, &colors);
        (canvas, colors)
    }

    #[test]
    fn test_minute_hand_body_and_hole() {
        // 0:15: minute hand points east, stem ends x=91, hole x=98..124, tip x=137
        let (canvas, colors) = render(0, 15);
        let minute = colors.minute.to_rgb565();

        assert_eq!(canvas.pixel(Point::new(94, 84)), minute);
        assert_eq!(canvas.pixel(Point::new(110, 82)), minute);
        assert_eq!(canvas.pixel(Point::new(130, 84)), minute);
        assert!(canvas.near(Point::new(110, 84), colors.background.to_rgb565()));
        assert_eq!(canvas.pixel(Point::new(140, 84)), colors.background.to_rgb565());
    }

    #[test]
    fn test_hour_hand_drawn_over_minute_hand() {
        // 3:15: both hands point roughly east
        let (canvas, colors) = render(3, 15);
        let hour = colors.hour.to_rgb565();

        assert!(canvas.near(Point::new(100, 86), hour));
        assert!(canvas.count(hour) > 0);
        assert!(canvas.count(colors.minute.to_rgb565()) > 0);
    }

    #[test]
    fn test_center_cap_on_top() {
        let (canvas, colors) = render(6, 0);
        let center = Platform::Rect.center();

        assert_eq!(canvas.pixel(center), colors.background.to_rgb565());
        let cap = embedded_graphics::primitives::Rectangle::with_center(center, Size::new(9, 9));
        assert!(canvas.count_in(cap, colors.dot.to_rgb565()) > 0);
    }

    #[test]
    fn test_stem_is_thin() {
        // 0:00: both hands point north; the stem region is 1px wide
        let (canvas, colors) = render(0, 0);
        let minute = colors.minute.to_rgb565();
        let hour = colors.hour.to_rgb565();
        let y = 84 - 8;

        assert_ne!(canvas.pixel(Point::new(72, y)), colors.background.to_rgb565());
        assert_eq!(canvas.pixel(Point::new(69, y)), colors.background.to_rgb565());
        assert!(canvas.pixel(Point::new(72, y)) == hour || canvas.pixel(Point::new(72, y)) == minute);
    }
}
