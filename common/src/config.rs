//! Layout constants and display platform presets.
//!
//! All pixel sizes are compile-time constants. Fractions along a hand are
//! checked for ordering with `const` assertions.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Tick Marks
// =============================================================================

/// Visible length of each tick stub at the rim, in pixels.
pub const TICK_LENGTH: u32 = 8;

/// Stroke width of the tick spokes.
pub const TICK_WIDTH: u32 = 2;

/// Number of tick marks around the dial.
pub const TICK_COUNT: usize = 12;

// =============================================================================
// Hands
// =============================================================================

/// Stroke width of the thick part of each hand.
pub const HAND_WIDTH: u32 = 7;

/// Stroke width of the stem (center to stem point).
pub const STEM_WIDTH: u32 = 1;

/// Stroke width of the background-colored hole along each hand.
pub const HOLE_WIDTH: u32 = 2;

/// Where the stem ends, as a fraction of hand length.
pub const STEM_FRACTION: f32 = 0.3;

/// Where the hole starts, as a fraction of hand length.
pub const HOLE_START_FRACTION: f32 = 0.4;

/// Where the hole ends, as a fraction of hand length.
pub const HOLE_END_FRACTION: f32 = 0.8;

/// Minute-hand length as a fraction of half the surface width.
pub const MINUTE_HAND_SCALE: f32 = 0.9;

/// Hour-hand length as a fraction of the minute-hand length.
pub const HOUR_HAND_SCALE: f32 = 0.75;

const _: () = assert!(STEM_FRACTION < HOLE_START_FRACTION);
const _: () = assert!(HOLE_START_FRACTION < HOLE_END_FRACTION);
const _: () = assert!(HOLE_END_FRACTION < 1.0);
const _: () = assert!(HOUR_HAND_SCALE < 1.0);

// =============================================================================
// Center Cap
// =============================================================================

/// Radius of the center cap circle.
pub const CENTER_RADIUS: u32 = 3;

// =============================================================================
// Date Label Slots
// =============================================================================

/// Raises the left and right slots so their two lines sit around the center line.
pub const DATE_SLOT_VERTICAL_OFFSET: i32 = 20;

/// Width of the left and right slots.
pub const DATE_SLOT_SIDE_WIDTH: u32 = 60;

/// Height of the left and right slots.
pub const DATE_SLOT_SIDE_HEIGHT: u32 = 60;

/// Height of the bottom slot.
pub const DATE_SLOT_BOTTOM_HEIGHT: u32 = 40;

// =============================================================================
// Platforms
// =============================================================================

/// Display family the face is drawn on.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Platform {
    /// 144x168 rectangular display.
    #[default]
    Rect,
    /// 180x180 round display.
    Round,
}

impl Platform {
    /// Drawing surface size in pixels.
    pub const fn size(self) -> Size {
        match self {
            Self::Rect => Size::new(144, 168),
            Self::Round => Size::new(180, 180),
        }
    }

    /// Length of the tick spokes from the center.
    ///
    /// Long enough to reach past the rim; only the stub outside the erased
    /// interior stays visible.
    pub const fn tick_line_length(self) -> u32 {
        match self {
            Self::Rect => 111,
            Self::Round => 90,
        }
    }

    /// Whether the display is round.
    #[inline]
    pub const fn is_round(self) -> bool { matches!(self, Self::Round) }

    /// Center of the drawing surface.
    pub const fn center(self) -> Point { surface_center(self.size()) }
}

/// Center of a surface of the given size (integer halves).
#[inline]
pub const fn surface_center(size: Size) -> Point { Point::new((size.width / 2) as i32, (size.height / 2) as i32) }

// =============================================================================
// Tests
// =============================================================================
