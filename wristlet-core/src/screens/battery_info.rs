//! Battery details

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::{LabelText, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

/// Below this the battery is reported as low
const LOW_PERCENT: u8 = 10;

pub struct BatteryInfo {
    widgets: Widgets,
    percent_label: WidgetId,
    status_label: WidgetId,
    voltage_label: WidgetId,
    percent: ChangeCell<u8>,
    charging: ChangeCell<bool>,
    power_present: ChangeCell<bool>,
    voltage_mv: ChangeCell<u16>,
}

impl BatteryInfo {
    fn status(&self) -> &'static str {
        if self.charging.get() {
            "Charging"
        } else if self.power_present.get() && self.percent.get() == 100 {
            "Fully charged"
        } else if self.percent.get() < LOW_PERCENT {
            "Battery low"
        } else {
            "Discharging"
        }
    }
}

impl ScreenTraits<Apps> for BatteryInfo {
    const ID: Apps = Apps::BatteryInfo;
    const NAME: &'static str = "Battery";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "===== BATTERY =====");

        let mut screen = Self {
            percent_label: widgets.label(surface, 2, 0),
            status_label: widgets.label(surface, 3, 0),
            voltage_label: widgets.label(surface, 5, 0),
            widgets,
            percent: ChangeCell::new(),
            charging: ChangeCell::new(),
            power_present: ChangeCell::new(),
            voltage_mv: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for BatteryInfo {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.percent.set(deps.battery.percent_remaining());
        self.charging.set(deps.battery.is_charging());
        self.power_present.set(deps.battery.is_power_present());

        if self.percent.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "{}%", self.percent.get());
            surface.set_text(self.percent_label, &text);
        }

        if self.percent.is_updated() || self.charging.is_updated() || self.power_present.is_updated()
        {
            surface.set_text(self.status_label, self.status());
        }

        self.voltage_mv.set(deps.battery.voltage_mv());
        if self.voltage_mv.is_updated() {
            let mv = self.voltage_mv.get();
            let mut text = LabelText::new();
            let _ = write!(text, "{}.{:02} Volts", mv / 1000, mv % 1000 / 10);
            surface.set_text(self.voltage_label, &text);
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
