//! Formal watch face simulator for desktop.
//!
//! Hosts the face in an `embedded-graphics-simulator` window: feeds it minute
//! ticks from the local clock, configuration messages and connectivity
//! changes from the keyboard, and persists settings to a file.
//!
//! | Key | Action                                   |
//! |-----|------------------------------------------|
//! | F   | Fast-forward one minute per frame        |
//! | B   | Toggle the simulated phone link          |
//! | C   | Apply the next color palette             |
//! | V   | Toggle vibrate on disconnect             |
//! | Y   | Switch between face and debug page       |
//!
//! Pass `--round` for the 180x180 round display.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod palette;
mod popup;
mod screens;
mod store;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use formal_common::face::{Effects, Event, WatchFace};
use formal_common::message::{ConfigMessage, Setting};
use formal_common::time::TimeSource;
use formal_common::widgets::draw_status_popup;
use formal_common::{Platform, WallClock};

use crate::clock::SimClock;
use crate::palette::PALETTES;
use crate::popup::Popup;
use crate::screens::{Page, draw_debug_page};
use crate::store::FileStore;
use crate::timing::{CLOCK_POLL, FRAME_TIME};

const POPUP_FG: Rgb565 = Rgb565::WHITE;
const POPUP_BG: Rgb565 = Rgb565::RED;

fn main() {
    let platform = if std::env::args().skip(1).any(|arg| arg == "--round") {
        Platform::Round
    } else {
        Platform::Rect
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(platform.size());
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Formal", &output_settings);

    let mut sim_clock = SimClock::new();
    let store = FileStore::from_env();
    let source = if store.loaded() { "loaded" } else { "defaults" };
    println!("Settings: {} ({source})", store.path().display());
    let mut face = WatchFace::start(store, platform, &sim_clock);

    face.draw(&mut display);
    window.update(&display);

    // UI state
    let mut active_popup: Option<Popup> = None;
    let mut current_page = Page::default();
    let mut connected = face.is_connected();
    let mut fast_forward = false;
    let mut palette_idx = 0usize;
    let mut last_clock_poll = Instant::now();
    let mut redraw = false;

    loop {
        let frame_start = Instant::now();
        let mut effects = Effects::NONE;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::F => {
                            fast_forward = !fast_forward;
                            if !fast_forward {
                                sim_clock.reset();
                            }
                            active_popup = Some(Popup::FastForward(Instant::now(), fast_forward));
                        }
                        Keycode::B => {
                            connected = !connected;
                            effects = effects.merge(face.handle(Event::Connectivity(connected)));
                            active_popup = Some(Popup::Link(Instant::now(), connected));
                        }
                        Keycode::C => {
                            palette_idx = (palette_idx + 1) % PALETTES.len();
                            let palette = PALETTES[palette_idx];
                            effects = effects.merge(face.handle(Event::Configure(palette.message())));
                            active_popup = Some(Popup::Palette(Instant::now(), palette.name));
                        }
                        Keycode::V => {
                            let on = !face.colors().vibrate_on_disconnect;
                            let message = ConfigMessage::new().with(Setting::VibrateOnDisconnect(on));
                            effects = effects.merge(face.handle(Event::Configure(message)));
                            active_popup = Some(Popup::VibrateSetting(Instant::now(), on));
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            active_popup = None;
                        }
                        _ => {}
                    }
                    redraw = true;
                }
                _ => {}
            }
        }

        // Minute tick
        if fast_forward {
            sim_clock.advance_minute();
        }
        if fast_forward || last_clock_poll.elapsed() >= CLOCK_POLL {
            last_clock_poll = Instant::now();
            let now: WallClock = sim_clock.now();
            if now != face.clock() {
                effects = effects.merge(face.handle(Event::MinuteTick(now)));
            }
        }

        if effects.vibe.is_some() {
            active_popup = Some(Popup::Vibe(Instant::now()));
        }
        redraw |= effects.dirty.any() || effects.vibe.is_some();

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            redraw = true;
        }

        if redraw {
            match current_page {
                Page::Face => {
                    face.draw(&mut display);
                    if let Some(ref popup) = active_popup {
                        draw_status_popup(&mut display, platform.size(), popup.text(), POPUP_FG, POPUP_BG);
                    }
                }
                Page::Debug => draw_debug_page(&mut display, &face, sim_clock.offset_minutes()),
            }
            redraw = false;
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
