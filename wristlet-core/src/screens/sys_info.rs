//! System information

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::{LabelText, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

pub struct SysInfo {
    widgets: Widgets,
    uptime: WidgetId,
    voltage: WidgetId,
    radio: WidgetId,
    uptime_secs: ChangeCell<u64>,
    voltage_mv: ChangeCell<u16>,
    radio_enabled: ChangeCell<bool>,
}

impl ScreenTraits<Apps> for SysInfo {
    const ID: Apps = Apps::SysInfo;
    const NAME: &'static str = "SystemInfo";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "=== SYSTEM INFO ===");
        widgets.static_label(surface, 1, 0, "Wristlet");
        widgets.static_label(surface, 2, 0, concat!("Version ", env!("CARGO_PKG_VERSION")));

        let mut screen = Self {
            uptime: widgets.label(surface, 4, 0),
            voltage: widgets.label(surface, 5, 0),
            radio: widgets.label(surface, 6, 0),
            widgets,
            uptime_secs: ChangeCell::new(),
            voltage_mv: ChangeCell::new(),
            radio_enabled: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for SysInfo {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.uptime_secs.set(deps.clock.uptime_ms() / 1000);
        if self.uptime_secs.is_updated() {
            let secs = self.uptime_secs.get();
            let mut text = LabelText::new();
            let _ = write!(
                text,
                "Up {}d {:02}:{:02}:{:02}",
                secs / 86_400,
                secs / 3600 % 24,
                secs / 60 % 60,
                secs % 60
            );
            surface.set_text(self.uptime, &text);
        }

        self.voltage_mv.set(deps.battery.voltage_mv());
        if self.voltage_mv.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "Battery {}mV", self.voltage_mv.get());
            surface.set_text(self.voltage, &text);
        }

        self.radio_enabled.set(deps.ble.is_radio_enabled());
        if self.radio_enabled.is_updated() {
            let text = if self.radio_enabled.get() {
                "Radio on"
            } else {
                "Radio off"
            };
            surface.set_text(self.radio, text);
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::TextSurface;

    #[test]
    fn test_uptime() {
        let mut device = FakeDevice {
            uptime_ms: 90_061_000,
            ..FakeDevice::default()
        };
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut screen = SysInfo::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(4).as_str(), "Up 1d 01:01:01");
        assert_eq!(surface.line(5).as_str(), "Battery 3950mV");

        surface.mark_clean();
        device.uptime_ms += 500;
        screen.refresh(&mut device.controllers(&mut settings), &mut surface);
        assert!(!surface.is_dirty());
    }
}
