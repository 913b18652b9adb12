use crate::prelude::WeatherConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
    units: String,
}

impl WeatherQuery {
    pub fn new(city: String, units: String) -> Self {
        Self { city, units }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    /// Query-string parameters for the upstream weather endpoint.
    pub fn params(&self, config: &WeatherConfig) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.city.clone()),
            ("units", self.units.clone()),
            ("appid", config.api_key().to_string()),
        ]
    }
}
