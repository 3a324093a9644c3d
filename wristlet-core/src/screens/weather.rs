//! Current weather

use core::fmt::Write;

use wristlet_hal::storage::paths;
use wristlet_hal::{Surface, WidgetId};

use super::{LabelText, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};
use crate::traits::Weather;

pub struct WeatherApp {
    widgets: Widgets,
    temperature: WidgetId,
    condition: WidgetId,
    current: ChangeCell<Option<Weather>>,
}

impl ScreenTraits<Apps> for WeatherApp {
    const ID: Apps = Apps::Weather;
    const NAME: &'static str = "Weather";
    const RESOURCES: &'static [&'static str] = &[paths::FONT_WEATHER_ICONS];

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "===== WEATHER =====");

        let mut screen = Self {
            temperature: widgets.label(surface, 3, 8),
            condition: widgets.label(surface, 5, 0),
            widgets,
            current: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for WeatherApp {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.current.set(deps.weather.current());
        if !self.current.is_updated() {
            return;
        }

        match self.current.get() {
            Some(weather) => {
                let mut text = LabelText::new();
                let _ = write!(text, "{}C", weather.temperature_c);
                surface.set_text(self.temperature, &text);
                surface.set_text(self.condition, weather.condition.label());
            }
            None => {
                surface.set_text(self.temperature, "--");
                surface.set_text(self.condition, "No weather data");
            }
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
