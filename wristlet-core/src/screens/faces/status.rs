//! Status row shared by the graphical faces

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::screens::{LabelText, Widgets};

/// Column of the right-aligned battery readout ("100%+" fits)
const BATTERY_COL: u8 = 16;

/// Connection, notification and battery indicators on one row
#[derive(Debug)]
pub struct StatusBar {
    icons: WidgetId,
    battery: WidgetId,
    percent: ChangeCell<u8>,
    power_present: ChangeCell<bool>,
    connected: ChangeCell<bool>,
    unread: ChangeCell<bool>,
}

impl StatusBar {
    pub fn create(widgets: &mut Widgets, surface: &mut dyn Surface, row: u8) -> Self {
        Self {
            icons: widgets.label(surface, row, 0),
            battery: widgets.label(surface, row, BATTERY_COL),
            percent: ChangeCell::new(),
            power_present: ChangeCell::new(),
            connected: ChangeCell::new(),
            unread: ChangeCell::new(),
        }
    }

    pub fn refresh(&mut self, deps: &Controllers<'_>, surface: &mut dyn Surface) {
        self.percent.set(deps.battery.percent_remaining());
        self.power_present.set(deps.battery.is_power_present());
        if self.percent.is_updated() || self.power_present.is_updated() {
            let mut readout = LabelText::new();
            let _ = write!(readout, "{}%", self.percent.get());
            if self.power_present.get() {
                let _ = readout.push('+');
            }
            let mut text = LabelText::new();
            let _ = write!(text, "{:>5}", readout.as_str());
            surface.set_text(self.battery, &text);
        }

        self.connected.set(deps.ble.is_connected());
        self.unread.set(deps.notifications.count() > 0);
        if self.connected.is_updated() || self.unread.is_updated() {
            let ble = if self.connected.get() { "BT" } else { "  " };
            let unread = if self.unread.get() { " *" } else { "" };
            let mut text = LabelText::new();
            let _ = text.push_str(ble);
            let _ = text.push_str(unread);
            surface.set_text(self.icons, &text);
        }
    }
}
