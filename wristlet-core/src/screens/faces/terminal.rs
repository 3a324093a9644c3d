//! Terminal face
//!
//! Shell-prompt look, one field per row:
//!
//! ```text
//! user@watch:~ $ now
//! [TIME] 13:45:30
//! [DATE] thu, 29.feb
//! [BATT] 87%
//! [NOTI] 2 messages
//! [STEP] 4211 steps
//! [HBRT] 72 bpm
//! [STAT] Connected
//! ```

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::display_hour;
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{ScreenTraits, WatchFace};
use crate::screens::{LabelText, Screen, Widgets};

pub struct Terminal {
    widgets: Widgets,
    time: WidgetId,
    date: WidgetId,
    battery: WidgetId,
    notifications: WidgetId,
    steps: WidgetId,
    heart_rate: WidgetId,
    connection: WidgetId,

    timestamp: ChangeCell<u64>,
    days: ChangeCell<u64>,
    battery_percent: ChangeCell<u8>,
    power_present: ChangeCell<bool>,
    notification_count: ChangeCell<usize>,
    step_count: ChangeCell<u32>,
    heartbeat: ChangeCell<u8>,
    heartbeat_running: ChangeCell<bool>,
    ble_connected: ChangeCell<bool>,
    ble_radio_enabled: ChangeCell<bool>,
}

impl ScreenTraits<WatchFace> for Terminal {
    const ID: WatchFace = WatchFace::Terminal;
    const NAME: &'static str = "Terminal";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "user@watch:~ $ now");

        let mut face = Self {
            time: widgets.label(surface, 1, 0),
            date: widgets.label(surface, 2, 0),
            battery: widgets.label(surface, 3, 0),
            notifications: widgets.label(surface, 4, 0),
            steps: widgets.label(surface, 5, 0),
            heart_rate: widgets.label(surface, 6, 0),
            connection: widgets.label(surface, 7, 0),
            widgets,
            timestamp: ChangeCell::new(),
            days: ChangeCell::new(),
            battery_percent: ChangeCell::new(),
            power_present: ChangeCell::new(),
            notification_count: ChangeCell::new(),
            step_count: ChangeCell::new(),
            heartbeat: ChangeCell::new(),
            heartbeat_running: ChangeCell::new(),
            ble_connected: ChangeCell::new(),
            ble_radio_enabled: ChangeCell::new(),
        };
        face.refresh(deps, surface);
        face
    }
}

impl Screen for Terminal {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.power_present.set(deps.battery.is_power_present());
        self.battery_percent.set(deps.battery.percent_remaining());
        if self.battery_percent.is_updated() || self.power_present.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "[BATT] {}%", self.battery_percent.get());
            if self.power_present.get() {
                let _ = text.push_str(" Charging");
            }
            surface.set_text(self.battery, &text);
        }

        self.ble_connected.set(deps.ble.is_connected());
        self.ble_radio_enabled.set(deps.ble.is_radio_enabled());
        if self.ble_connected.is_updated() || self.ble_radio_enabled.is_updated() {
            let state = if !self.ble_radio_enabled.get() {
                "[STAT] Disabled"
            } else if self.ble_connected.get() {
                "[STAT] Connected"
            } else {
                "[STAT] Disconnected"
            };
            surface.set_text(self.connection, state);
        }

        self.notification_count.set(deps.notifications.count());
        if self.notification_count.is_updated() {
            let count = self.notification_count.get();
            let noun = if count == 1 { "message" } else { "messages" };
            let mut text = LabelText::new();
            let _ = write!(text, "[NOTI] {} {}", count, noun);
            surface.set_text(self.notifications, &text);
        }

        self.timestamp.set(deps.clock.timestamp());
        if self.timestamp.is_updated() {
            let (hour, suffix) = display_hour(deps.clock.hours(), deps.settings.clock_type());
            let minute = deps.clock.minutes();
            let second = deps.clock.seconds();

            let mut text = LabelText::new();
            let _ = write!(text, "[TIME] {:02}:{:02}:{:02}", hour, minute, second);
            if let Some(suffix) = suffix {
                let _ = write!(text, " {}", suffix);
            }
            surface.set_text(self.time, &text);

            self.days.set(deps.clock.days());
            if self.days.is_updated() {
                let mut text = LabelText::new();
                let _ = write!(
                    text,
                    "[DATE] {}, {:02}.{}",
                    deps.clock.day_of_week().short_name_lower(),
                    deps.clock.day(),
                    deps.clock.month().short_name_lower()
                );
                surface.set_text(self.date, &text);
            }
        }

        self.step_count.set(deps.motion.step_count());
        if self.step_count.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "[STEP] {} steps", self.step_count.get());
            surface.set_text(self.steps, &text);
        }

        self.heartbeat.set(deps.heart_rate.bpm());
        self.heartbeat_running.set(deps.heart_rate.is_running());
        if self.heartbeat.is_updated() || self.heartbeat_running.is_updated() {
            if self.heartbeat_running.get() {
                let mut text = LabelText::new();
                let _ = write!(text, "[HBRT] {} bpm", self.heartbeat.get());
                surface.set_text(self.heart_rate, &text);
            } else {
                surface.set_text(self.heart_rate, "[HBRT] ---");
            }
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
