//! Event dispatcher owning the face state.
//!
//! The host runtime feeds [`Event`]s into [`WatchFace::handle`] one at a time
//! and acts on the returned [`Effects`]: redraw the flagged regions, fire the
//! haptic motor. Handlers take `&mut self`, so a handler can never run while
//! another is in progress.
//!
//! # Event Flow
//!
//! ```text
//! host loop ──Event──> WatchFace::handle ──> ColorConfig / DateSlots / DebugLog
//!                              │
//!                              └──Effects { dirty, vibe }──> host redraw / motor
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::Platform;
use crate::date::{DateSlot, DateSlots};
use crate::debug_log::DebugLog;
use crate::geometry::FaceGeometry;
use crate::message::{ConfigMessage, Setting};
use crate::settings::{ColorConfig, Dirty};
use crate::storage::SettingsStore;
use crate::time::{TimeSource, WallClock};
use crate::widgets;

/// Input delivered by the host runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The wall clock reached a new minute.
    MinuteTick(WallClock),
    /// A configuration update arrived from the companion.
    Configure(ConfigMessage),
    /// Phone link status; `true` when connected.
    Connectivity(bool),
}

/// Haptic patterns the face can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibePattern {
    /// Two short pulses.
    DoublePulse,
}

/// What the host should do after handling an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    pub dirty: Dirty,
    pub vibe: Option<VibePattern>,
}

impl Effects {
    pub const NONE: Self = Self { dirty: Dirty::NONE, vibe: None };

    const fn redraw(dirty: Dirty) -> Self { Self { dirty, vibe: None } }

    /// Combine the effects of several events handled before one redraw.
    #[must_use]
    pub const fn merge(
        self,
        other: Self,
    ) -> Self {
        let vibe = if self.vibe.is_some() { self.vibe } else { other.vibe };
        Self { dirty: self.dirty.union(other.dirty), vibe }
    }
}

/// The running watch face.
pub struct WatchFace<S: SettingsStore> {
    store: S,
    colors: ColorConfig,
    clock: WallClock,
    slots: DateSlots,
    date_slot: DateSlot,
    connected: bool,
    platform: Platform,
    log: DebugLog,
}

impl<S: SettingsStore> WatchFace<S> {
    /// Load the configuration from `store` and place the date for `clock`.
    ///
    /// The link is assumed connected until the host reports otherwise.
    pub fn new(
        store: S,
        platform: Platform,
        clock: WallClock,
    ) -> Self {
        let colors = ColorConfig::load(&store);
        let mut slots = DateSlots::new();
        let date_slot = slots.update(clock);

        let mut log = DebugLog::new();
        log.push("Face started");

        Self {
            store,
            colors,
            clock,
            slots,
            date_slot,
            connected: true,
            platform,
            log,
        }
    }

    /// Start with the current reading of a time source.
    pub fn start<T: TimeSource + ?Sized>(
        store: S,
        platform: Platform,
        time: &T,
    ) -> Self {
        Self::new(store, platform, time.now())
    }

    /// Handle one event.
    pub fn handle(
        &mut self,
        event: Event,
    ) -> Effects {
        match event {
            Event::MinuteTick(clock) => self.on_minute_tick(clock),
            Event::Configure(message) => self.on_configure(&message),
            Event::Connectivity(connected) => self.on_connectivity(connected),
        }
    }

    fn on_minute_tick(
        &mut self,
        clock: WallClock,
    ) -> Effects {
        let previous = self.slots.clone();
        self.clock = clock;
        self.date_slot = self.slots.update(clock);

        Effects::redraw(Dirty {
            hands: true,
            date_text: self.slots != previous,
            ..Dirty::NONE
        })
    }

    fn on_configure(
        &mut self,
        message: &ConfigMessage,
    ) -> Effects {
        let mut dirty = Dirty::NONE;

        for setting in message.settings() {
            let (changed, written) = self.colors.apply(setting, &mut self.store);
            dirty = dirty.union(changed);

            let label = setting.key().label();
            match setting {
                Setting::VibrateOnDisconnect(on) => self.log.push_fmt(format_args!("set {label} {on}")),
                _ => self.log.push_fmt(format_args!("set {label} {:06X}", setting.raw())),
            }

            if let Err(e) = written {
                #[cfg(feature = "defmt")]
                defmt::warn!("settings write failed: {}", e);
                self.log.push_fmt(format_args!("{label}: {e}"));
            }
        }

        Effects::redraw(dirty)
    }

    fn on_connectivity(
        &mut self,
        connected: bool,
    ) -> Effects {
        if connected == self.connected {
            return Effects::NONE;
        }
        self.connected = connected;

        if connected {
            self.log.push("Connected");
            return Effects::NONE;
        }

        self.log.push("Disconnected");
        if !self.colors.vibrate_on_disconnect {
            return Effects::NONE;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("disconnect alert");
        self.log.push("Vibe: double pulse");
        Effects { dirty: Dirty::NONE, vibe: Some(VibePattern::DoublePulse) }
    }

    /// Hand geometry for the current time.
    pub fn geometry(&self) -> FaceGeometry { FaceGeometry::new(self.platform.size(), self.clock.time) }

    /// Draw the whole face onto `display`.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        widgets::draw_face(display, self.platform, &self.colors, self.clock.time, &self.slots);
    }

    #[inline]
    pub const fn colors(&self) -> &ColorConfig { &self.colors }

    #[inline]
    pub const fn clock(&self) -> WallClock { self.clock }

    #[inline]
    pub const fn slots(&self) -> &DateSlots { &self.slots }

    /// Slot holding the date label.
    #[inline]
    pub const fn date_slot(&self) -> DateSlot { self.date_slot }

    #[inline]
    pub const fn is_connected(&self) -> bool { self.connected }

    #[inline]
    pub const fn platform(&self) -> Platform { self.platform }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    /// Stop the face and hand back its store.
    pub fn into_store(self) -> S { self.store }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WatchColor;
    use crate::storage::{MemoryStore, SettingKey, StorageError};
    use crate::time::{CalendarDate, ClockTime, Weekday};
    use crate::widgets::canvas::Canvas;

    fn clock(
        hour: u8,
        minute: u8,
    ) -> WallClock {
        WallClock::new(
            ClockTime::new(hour, minute).unwrap(),
            CalendarDate { weekday: Weekday::Wednesday, day: 5 },
        )
    }

    fn face() -> WatchFace<MemoryStore> { WatchFace::new(MemoryStore::new(), Platform::Rect, clock(0, 0)) }

    struct FixedTime(WallClock);

    impl TimeSource for FixedTime {
        fn now(&self) -> WallClock { self.0 }
    }

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn read(
            &self,
            _key: SettingKey,
        ) -> Option<i32> {
            None
        }

        fn write(
            &mut self,
            _key: SettingKey,
            _value: i32,
        ) -> Result<(), StorageError> {
            Err(StorageError::Io)
        }
    }

    #[test]
    fn test_startup_places_date() {
        let face = face();
        assert_eq!(face.date_slot(), DateSlot::Right);
        assert_eq!(face.slots().text(DateSlot::Right), "Wed\n05");
        assert_eq!(face.slots().populated_count(), 1);
        assert!(face.is_connected());
        assert_eq!(face.log().last(), Some("Face started"));
    }

    #[test]
    fn test_start_reads_time_source() {
        let face = WatchFace::start(MemoryStore::new(), Platform::Round, &FixedTime(clock(2, 3)));
        assert_eq!(face.clock(), clock(2, 3));
        assert_eq!(face.date_slot(), DateSlot::Left);
    }

    #[test]
    fn test_minute_tick_moves_hands_and_date() {
        let mut face = face();

        let effects = face.handle(Event::MinuteTick(clock(0, 1)));
        assert!(effects.dirty.hands);
        assert!(!effects.dirty.date_text);
        assert_eq!(effects.vibe, None);

        let effects = face.handle(Event::MinuteTick(clock(14, 4)));
        assert!(effects.dirty.hands && effects.dirty.date_text);
        assert_eq!(face.date_slot(), DateSlot::Left);
        assert_eq!(face.slots().text(DateSlot::Right), "");
        assert_eq!(face.geometry(), FaceGeometry::new(Platform::Rect.size(), ClockTime::new(14, 4).unwrap()));

        // Day rolls over while the label stays in the right slot
        let tuesday = CalendarDate { weekday: Weekday::Tuesday, day: 4 };
        face.handle(Event::MinuteTick(WallClock::new(ClockTime::new(23, 59).unwrap(), tuesday)));
        assert_eq!(face.date_slot(), DateSlot::Right);

        let effects = face.handle(Event::MinuteTick(clock(0, 0)));
        assert_eq!(face.date_slot(), DateSlot::Right);
        assert!(effects.dirty.hands && effects.dirty.date_text);
        assert_eq!(face.slots().text(DateSlot::Right), "Wed\n05");
    }

    #[test]
    fn test_configure_applies_and_reports_dirty() {
        let mut face = face();
        let message = ConfigMessage::new()
            .with(Setting::TickColor(WatchColor::from_hex(0xFF_0000)))
            .with(Setting::DateColor(WatchColor::from_hex(0x00_FF00)));

        let effects = face.handle(Event::Configure(message));
        assert_eq!(effects.dirty, Dirty { background: true, date_color: true, ..Dirty::NONE });
        assert_eq!(face.colors().tick, WatchColor::from_hex(0xFF_0000));
        assert_eq!(face.log().last(), Some("set date 00FF00"));
        assert_eq!(face.into_store().read(SettingKey::DateColor), Some(0x00_FF00));
    }

    #[test]
    fn test_empty_message_changes_nothing() {
        let mut face = face();
        let effects = face.handle(Event::Configure(ConfigMessage::new()));
        assert_eq!(effects, Effects::NONE);
        assert_eq!(*face.colors(), ColorConfig::DEFAULT);
        assert!(face.into_store().is_empty());
    }

    #[test]
    fn test_config_survives_restart() {
        let mut face = face();
        let message = ConfigMessage::new()
            .with(Setting::BackgroundColor(WatchColor::from_hex(0x00_0055)))
            .with(Setting::VibrateOnDisconnect(false));
        face.handle(Event::Configure(message));
        let before = *face.colors();

        let restarted = WatchFace::new(face.into_store(), Platform::Rect, clock(9, 30));
        assert_eq!(*restarted.colors(), before);
        assert!(!restarted.colors().vibrate_on_disconnect);
    }

    #[test]
    fn test_failed_write_is_logged_and_kept() {
        let mut face = WatchFace::new(BrokenStore, Platform::Rect, clock(0, 0));
        let message = ConfigMessage::new().with(Setting::HourColor(WatchColor::from_hex(0x12_3456)));

        let effects = face.handle(Event::Configure(message));
        assert!(effects.dirty.hands);
        assert_eq!(face.colors().hour, WatchColor::from_hex(0x12_3456));
        assert_eq!(face.log().last(), Some("hour: store i/o error"));
    }

    #[test]
    fn test_disconnect_vibrates_once_per_transition() {
        let mut face = face();

        let effects = face.handle(Event::Connectivity(false));
        assert_eq!(effects.vibe, Some(VibePattern::DoublePulse));
        assert!(!effects.dirty.any());

        assert_eq!(face.handle(Event::Connectivity(false)).vibe, None);
        assert_eq!(face.handle(Event::Connectivity(true)).vibe, None);
        assert_eq!(face.handle(Event::Connectivity(false)).vibe, Some(VibePattern::DoublePulse));
    }

    #[test]
    fn test_merge_effects() {
        let tick = Effects::redraw(Dirty { hands: true, ..Dirty::NONE });
        let alert = Effects { dirty: Dirty::NONE, vibe: Some(VibePattern::DoublePulse) };

        let merged = tick.merge(alert);
        assert!(merged.dirty.hands);
        assert_eq!(merged.vibe, Some(VibePattern::DoublePulse));
        assert_eq!(Effects::NONE.merge(Effects::NONE), Effects::NONE);
    }

    #[test]
    fn test_disconnect_silent_when_disabled() {
        let mut face = face();
        face.handle(Event::Configure(ConfigMessage::new().with(Setting::VibrateOnDisconnect(false))));

        let effects = face.handle(Event::Connectivity(false));
        assert_eq!(effects, Effects::NONE);
        assert!(!face.is_connected());
        assert_eq!(face.log().last(), Some("Disconnected"));
    }

    #[test]
    fn test_draw_uses_current_colors() {
        let mut face = face();
        face.handle(Event::Configure(
            ConfigMessage::new().with(Setting::BackgroundColor(WatchColor::from_hex(0x00_0080))),
        ));

        let mut canvas = Canvas::new(Platform::Rect.size(), Rgb565::RED);
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(Point::new(30, 30)), WatchColor::from_hex(0x00_0080).to_rgb565());
        assert_eq!(canvas.count(Rgb565::RED), 0);
    }
}
