//! Text styles for the date label.
//!
//! The date color is user-configurable, so only the font and alignment are
//! constants; callers build `MonoTextStyle::new(DATE_FONT, color)` per draw.

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

/// Font for the date label (`ProFont` 14pt, bold enough to read at a glance).
pub const DATE_FONT: &MonoFont = &PROFONT_14_POINT;

/// Centered, top-anchored text. Multi-line labels grow downwards from the slot top.
pub const DATE_TEXT_STYLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();
