//! Weather data trait

/// Coarse weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl Condition {
    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Cloudy",
            Condition::Rain => "Rain",
            Condition::Thunderstorm => "Storm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
        }
    }
}

/// Current conditions reported by the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Weather {
    /// Temperature in whole degrees Celsius
    pub temperature_c: i16,
    pub condition: Condition,
}

/// Source of weather data
pub trait WeatherSource {
    /// Latest conditions, or `None` if no data has been received
    fn current(&self) -> Option<Weather>;
}
