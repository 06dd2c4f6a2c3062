//! Debug page: face state and the debug log terminal.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use formal_common::face::WatchFace;
use formal_common::storage::SettingsStore;
use heapless::String;

const LABEL_FONT: &MonoFont = &FONT_5X8;

const HEADER_Y: i32 = 10;
const HEADER_DIVIDER_Y: i32 = 14;
const STATS_Y: i32 = 24;
const STAT_LINE_HEIGHT: i32 = 10;
const LOG_DIVIDER_Y: i32 = 74;
const LOG_Y: i32 = 84;
const LOG_LINE_HEIGHT: i32 = 9;
const COL1_X: i32 = 4;

const DEBUG_BG: Rgb565 = Rgb565::BLACK;
const HEADER_COLOR: Rgb565 = Rgb565::GREEN;
const VALUE_COLOR: Rgb565 = Rgb565::WHITE;
const HIGHLIGHT_COLOR: Rgb565 = Rgb565::YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = Rgb565::GREEN;
const LOG_TEXT_COLOR: Rgb565 = Rgb565::new(31, 41, 0);
const DIVIDER_COLOR: Rgb565 = Rgb565::new(16, 32, 16);

pub fn draw_debug_page<D, S>(
    display: &mut D,
    face: &WatchFace<S>,
    offset_minutes: i64,
) where
    D: DrawTarget<Color = Rgb565>,
    S: SettingsStore,
{
    display.clear(DEBUG_BG).ok();
    let width = display.bounding_box().size.width;

    draw_header(display, face);
    draw_horizontal_line(display, HEADER_DIVIDER_Y, width);
    draw_state(display, face, offset_minutes);
    draw_horizontal_line(display, LOG_DIVIDER_Y, width);
    draw_log_terminal(display, face);
}

fn draw_header<D, S>(
    display: &mut D,
    face: &WatchFace<S>,
) where
    D: DrawTarget<Color = Rgb565>,
    S: SettingsStore,
{
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let time = face.clock().time;
    let mut s: String<8> = String::new();
    let _ = write!(s, "{:02}:{:02}", time.hour(), time.minute());
    Text::new(&s, Point::new(COL1_X + 40, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_state<D, S>(
    display: &mut D,
    face: &WatchFace<S>,
    offset_minutes: i64,
) where
    D: DrawTarget<Color = Rgb565>,
    S: SettingsStore,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let colors = face.colors();

    let x = COL1_X;
    let mut y = STATS_Y;

    let link = if face.is_connected() { "up" } else { "down" };
    let vibe = if colors.vibrate_on_disconnect { "on" } else { "off" };
    let mut s: String<28> = String::new();
    let _ = write!(s, "Link: {link}  Vibe: {vibe}");
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<28> = String::new();
    let _ = write!(s, "Date: {:?}", face.date_slot());
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<28> = String::new();
    let _ = write!(s, "Bg {:06X} Tk {:06X}", colors.background.hex(), colors.tick.hex());
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<28> = String::new();
    let _ = write!(s, "Hr {:06X} Mn {:06X}", colors.hour.hex(), colors.minute.hex());
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<28> = String::new();
    let _ = write!(s, "Dt {:06X} Da {:06X}", colors.dot.hex(), colors.date.hex());
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();

    if offset_minutes != 0 {
        let mut s: String<16> = String::new();
        let _ = write!(s, ">> +{offset_minutes}m");
        Text::new(&s, Point::new(COL1_X + 72, HEADER_Y), highlight_style)
            .draw(display)
            .ok();
    }
}

fn draw_log_terminal<D, S>(
    display: &mut D,
    face: &WatchFace<S>,
) where
    D: DrawTarget<Color = Rgb565>,
    S: SettingsStore,
{
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);
    let size = display.bounding_box().size;

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(size.width, size.height.saturating_sub(LOG_DIVIDER_Y as u32 + 2)),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in face.log().iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 7, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
    width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(width as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
