//! Watch colors.
//!
//! Colors travel through the settings store and configuration messages as a
//! plain `int32` holding `0xRRGGBB`. [`WatchColor`] keeps that raw form (so it
//! can be persisted unchanged) and converts to the display's RGB565 format on
//! demand.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Conversion from 8-bit channels goes through `Rgb888`, which drops the low
//! bits of each channel.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

/// Mask for the bits of an int32 that carry color information.
const RGB_MASK: u32 = 0x00FF_FFFF;

/// A 24-bit `0xRRGGBB` color as sent by the companion settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchColor(u32);

impl WatchColor {
    /// Create a color from a `0xRRGGBB` value. Bits above 24 are dropped.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self { Self(hex & RGB_MASK) }

    /// Create a color from the raw int32 stored in settings or received in a message.
    ///
    /// Any value is accepted; only the low 24 bits are interpreted.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self { Self::from_hex(raw as u32) }

    /// The `0xRRGGBB` value.
    #[inline]
    pub const fn hex(self) -> u32 { self.0 }

    /// The value as persisted (always non-negative).
    #[inline]
    pub const fn raw(self) -> i32 { self.0 as i32 }

    #[inline]
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }

    #[inline]
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }

    #[inline]
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Convert to the display color format.
    pub fn to_rgb565(self) -> Rgb565 { Rgb565::from(Rgb888::new(self.r(), self.g(), self.b())) }
}

impl From<WatchColor> for Rgb565 {
    fn from(color: WatchColor) -> Self { color.to_rgb565() }
}

// =============================================================================
// Named Colors
// =============================================================================

/// Default background.
pub const BLACK: WatchColor = WatchColor::from_hex(0x00_0000);

/// Default tick color.
pub const LIGHT_GRAY: WatchColor = WatchColor::from_hex(0xAA_AAAA);

/// Default hand, dot and date color.
pub const WHITE: WatchColor = WatchColor::from_hex(0xFF_FFFF);

// =============================================================================
// Hex Parsing
// =============================================================================

/// Parse a hex color string from the companion settings page.
///
/// Accepts `RRGGBB` with an optional `#` or `0x`/`0X` prefix, in either case.
/// Returns `None` for empty strings, non-hex digits, or more than 6 digits.
pub fn parse_hex(text: &str) -> Option<WatchColor> {
    let text = text.trim();
    let digits = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok().map(WatchColor::from_hex)
}

// =============================================================================
// Tests
// =============================================================================
