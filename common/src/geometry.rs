//! Hand and tick placement on the dial.
//!
//! Angles are fractions of a full turn measured clockwise from 12 o'clock.
//! A point at turn fraction `f` and radius `r` from center `C` is
//!
//! ```text
//! theta = 2 * pi * f
//! x = C.x + r * sin(theta)
//! y = C.y - r * cos(theta)
//! ```
//!
//! Screen y grows downwards, hence the negated cosine. Coordinates are computed
//! in `f32` and rounded to the nearest pixel once, at the end, so short radii
//! never collapse to the center.

use core::f32::consts::TAU;

use embedded_graphics::prelude::{Point, Size};

use crate::config::{
    HOLE_END_FRACTION,
    HOLE_START_FRACTION,
    HOUR_HAND_SCALE,
    MINUTE_HAND_SCALE,
    STEM_FRACTION,
    TICK_COUNT,
    surface_center,
};
use crate::time::ClockTime;

/// Hand angles for a time of day, as fractions of a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleVector {
    pub hour: f32,
    pub minute: f32,
}

impl AngleVector {
    pub fn from_time(time: ClockTime) -> Self {
        let minute = f32::from(time.minute()) / 60.0;
        let hour = (f32::from(time.hour()) + minute) / 12.0;
        Self { hour, minute }
    }
}

/// Point at `turn` of a full turn clockwise from 12 o'clock, `radius` pixels from `center`.
pub fn point_on_circle(
    center: Point,
    turn: f32,
    radius: f32,
) -> Point {
    let theta = turn * TAU;
    let sin = micromath::F32(theta).sin().0;
    let cos = micromath::F32(theta).cos().0;
    let dx = micromath::F32(radius * sin).round().0;
    let dy = micromath::F32(-radius * cos).round().0;
    Point::new(center.x + dx as i32, center.y + dy as i32)
}

/// The four points along one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandGeometry {
    /// Hand length in pixels.
    pub length: f32,
    /// End of the thin stem.
    pub stem: Point,
    pub hole_start: Point,
    pub hole_end: Point,
    pub tip: Point,
}

impl HandGeometry {
    pub fn new(
        center: Point,
        turn: f32,
        length: f32,
    ) -> Self {
        Self {
            length,
            stem: point_on_circle(center, turn, length * STEM_FRACTION),
            hole_start: point_on_circle(center, turn, length * HOLE_START_FRACTION),
            hole_end: point_on_circle(center, turn, length * HOLE_END_FRACTION),
            tip: point_on_circle(center, turn, length),
        }
    }
}

/// Minute-hand length for a surface: 0.9 of half its width.
#[inline]
pub fn minute_hand_length(size: Size) -> f32 { size.width as f32 / 2.0 * MINUTE_HAND_SCALE }

/// Hour-hand length for a surface: 0.75 of the minute hand.
#[inline]
pub fn hour_hand_length(size: Size) -> f32 { minute_hand_length(size) * HOUR_HAND_SCALE }

/// Everything needed to draw both hands for one time of day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub center: Point,
    pub angles: AngleVector,
    pub minute_hand: HandGeometry,
    pub hour_hand: HandGeometry,
}

impl FaceGeometry {
    pub fn new(
        size: Size,
        time: ClockTime,
    ) -> Self {
        let center = surface_center(size);
        let angles = AngleVector::from_time(time);
        Self {
            center,
            angles,
            minute_hand: HandGeometry::new(center, angles.minute, minute_hand_length(size)),
            hour_hand: HandGeometry::new(center, angles.hour, hour_hand_length(size)),
        }
    }
}

/// Outer ends of the 12 tick spokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSet {
    pub center: Point,
    pub points: [Point; TICK_COUNT],
}

impl TickSet {
    pub fn new(
        center: Point,
        radius: u32,
    ) -> Self {
        let mut points = [center; TICK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            *point = point_on_circle(center, i as f32 / TICK_COUNT as f32, radius as f32);
        }
        Self { center, points }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const RECT: Size = Size::new(144, 168);

    fn time(
        hour: u8,
        minute: u8,
    ) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    fn assert_near(
        actual: Point,
        expected: Point,
    ) {
        assert!(
            (actual.x - expected.x).abs() <= 1 && (actual.y - expected.y).abs() <= 1,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_angle_vector() {
        let angles = AngleVector::from_time(time(3, 30));
        assert!((angles.minute - 0.5).abs() < 1e-6);
        assert!((angles.hour - 3.5 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_afternoon_hour_angle_wraps_past_full_turn() {
        // 15:00 is 1.25 turns, which lands on 3 o'clock
        let angles = AngleVector::from_time(time(15, 0));
        assert!((angles.hour - 1.25).abs() < 1e-6);
        let center = Point::new(72, 84);
        assert_near(point_on_circle(center, angles.hour, 40.0), Point::new(112, 84));
    }

    #[test]
    fn test_minute_zero_points_north() {
        let geometry = FaceGeometry::new(RECT, time(6, 0));
        let len = geometry.minute_hand.length;
        assert_near(geometry.minute_hand.tip, Point::new(72, 84 - len.round() as i32));
    }

    #[test]
    fn test_minute_fifteen_points_east() {
        let geometry = FaceGeometry::new(RECT, time(6, 15));
        let len = geometry.minute_hand.length;
        assert_near(geometry.minute_hand.tip, Point::new(72 + len.round() as i32, 84));
    }

    #[test]
    fn test_minute_thirty_points_south() {
        let geometry = FaceGeometry::new(RECT, time(0, 30));
        let len = geometry.minute_hand.length;
        assert_near(geometry.minute_hand.tip, Point::new(72, 84 + len.round() as i32));
    }

    #[test]
    fn test_hand_points_ordered_along_hand() {
        let geometry = FaceGeometry::new(RECT, time(0, 15));
        let hand = geometry.minute_hand;
        assert!(geometry.center.x < hand.stem.x);
        assert!(hand.stem.x < hand.hole_start.x);
        assert!(hand.hole_start.x < hand.hole_end.x);
        assert!(hand.hole_end.x < hand.tip.x);
    }

    #[test]
    fn test_short_radius_does_not_collapse() {
        let hand = HandGeometry::new(Point::zero(), 0.25, 4.0);
        assert_eq!(hand.stem, Point::new(1, 0));
        assert_eq!(hand.hole_start, Point::new(2, 0));
        assert_eq!(hand.hole_end, Point::new(3, 0));
    }

    #[test]
    fn test_tick_set() {
        let ticks = TickSet::new(Point::new(90, 90), 90);
        assert_near(ticks.points[0], Point::new(90, 0));
        assert_near(ticks.points[3], Point::new(180, 90));
        assert_near(ticks.points[6], Point::new(90, 180));
        assert_near(ticks.points[9], Point::new(0, 90));
    }

    #[test]
    fn test_tick_set_is_symmetric() {
        let center = Point::new(72, 84);
        let ticks = TickSet::new(center, 111);
        for i in 1..6 {
            let left = ticks.points[TICK_COUNT - i];
            let right = ticks.points[i];
            assert!((center.x - left.x - (right.x - center.x)).abs() <= 1);
            assert!((left.y - right.y).abs() <= 1);
        }
    }

    proptest! {
        #[test]
        fn prop_hand_lengths(hour in 0u8..24, minute in 0u8..60) {
            let geometry = FaceGeometry::new(RECT, time(hour, minute));
            prop_assert_eq!(geometry.minute_hand.length, 72.0 * 0.9);
            prop_assert_eq!(geometry.hour_hand.length, geometry.minute_hand.length * 0.75);
        }

        #[test]
        fn prop_tip_at_hand_length(hour in 0u8..24, minute in 0u8..60) {
            let geometry = FaceGeometry::new(RECT, time(hour, minute));
            for hand in [geometry.minute_hand, geometry.hour_hand] {
                let dx = (hand.tip.x - geometry.center.x) as f32;
                let dy = (hand.tip.y - geometry.center.y) as f32;
                let distance = (dx * dx + dy * dy).sqrt();
                prop_assert!((distance - hand.length).abs() < 1.5);
            }
        }

        #[test]
        fn prop_twelve_hours_apart_share_geometry(hour in 0u8..12, minute in 0u8..60) {
            let am = FaceGeometry::new(RECT, time(hour, minute));
            let pm = FaceGeometry::new(RECT, time(hour + 12, minute));
            prop_assert_eq!(am.minute_hand, pm.minute_hand);
            prop_assert!((am.hour_hand.tip.x - pm.hour_hand.tip.x).abs() <= 1);
            prop_assert!((am.hour_hand.tip.y - pm.hour_hand.tip.y).abs() <= 1);
        }
    }
}
