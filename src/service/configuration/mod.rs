mod telemetry;

pub use telemetry::*;

use envconfig::Envconfig;
use std::fmt::Debug;

#[derive(Clone, Envconfig)]
pub struct WeatherConfig {
    #[envconfig(from = "WEATHER_API_KEY", default = "8094d87dcbeeb7f03a59c6db2bc1c8ce")]
    api_key: String,
    #[envconfig(
        from = "WEATHER_BASE_URL",
        default = "https://api.openweathermap.org/data/2.5/weather"
    )]
    /// The upstream endpoint serving current weather
    endpoint: String,
    #[envconfig(from = "WEATHER_UNITS", default = "metric")]
    /// Measurement system for the upstream response
    units: String,
    #[envconfig(from = "WEATHER_DEFAULT_CITY", default = "Istanbul")]
    /// City used when the caller does not name one
    default_city: String,
    #[envconfig(from = "TIMEOUT", default = "30000")]
    timeout: u64,
}

impl Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("endpoint", &self.endpoint)
            .field("units", &self.units)
            .field("default_city", &self.default_city)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl WeatherConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        // dotenv().ok() is already called in the main.rs
        WeatherConfig::init_from_env()
    }
}
