//! Preset color schemes, sent to the face the way the companion page does:
//! hex strings turned into a configuration message.

use formal_common::message::ConfigMessage;
use formal_common::storage::SettingKey;

/// A named set of hex colors, one per color key.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: [(SettingKey, &'static str); 6],
}

impl Palette {
    const fn new(
        name: &'static str,
        colors: [&'static str; 6],
    ) -> Self {
        Self {
            name,
            colors: [
                (SettingKey::BackgroundColor, colors[0]),
                (SettingKey::TickColor, colors[1]),
                (SettingKey::HourColor, colors[2]),
                (SettingKey::MinuteColor, colors[3]),
                (SettingKey::DotColor, colors[4]),
                (SettingKey::DateColor, colors[5]),
            ],
        }
    }

    /// Configuration message applying this palette.
    pub fn message(&self) -> ConfigMessage { ConfigMessage::from_hex_fields(self.colors) }
}

/// background, tick, hour, minute, dot, date
pub const PALETTES: [Palette; 4] = [
    Palette::new("CLASSIC", ["000000", "AAAAAA", "FFFFFF", "FFFFFF", "FFFFFF", "FFFFFF"]),
    Palette::new("OCEAN", ["#000055", "#55AAFF", "#FFFFFF", "#00AAFF", "#FF5500", "#AAAAFF"]),
    Palette::new("EMBER", ["0x550000", "0xFFAA00", "0xFFFFFF", "0xFF5500", "0xFFFF00", "0xFFAA55"]),
    Palette::new("PAPER", ["ffffff", "555555", "000000", "000000", "ff0000", "000055"]),
];
