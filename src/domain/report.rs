use crate::domain::{Outcome, WeatherQuery};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MALFORMED_TAG: &str = "MalformedPayload";

const UNAVAILABLE_MESSAGE: &str = "Weather data not available. Check city name or API key.";

/// The reshaped upstream payload: the handful of fields callers care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    city: String,
    temperature: f64,
    description: String,
    observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Reshapes a raw upstream body into a report.
    ///
    /// The body must carry a numeric `main.temp` and a `weather[0].description`
    /// string. Anything else yields a failure tagged [`MALFORMED_TAG`] with the
    /// raw body embedded under `response`, so callers can inspect what the
    /// upstream actually said without a second request.
    pub fn reshape(query: &WeatherQuery, body: Value) -> Outcome<Self> {
        let temperature = body
            .get("main")
            .and_then(|main| main.get("temp"))
            .and_then(Value::as_f64);
        let description = body
            .get("weather")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.get("description"))
            .and_then(Value::as_str);

        match (temperature, description) {
            (Some(temperature), Some(description)) => Outcome::success(Self {
                city: body
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or(query.city())
                    .to_string(),
                temperature,
                description: description.to_string(),
                observed_at: Utc::now(),
            }),
            _ => Outcome::failure_with(
                MALFORMED_TAG,
                [
                    (
                        "message".to_string(),
                        Value::String(UNAVAILABLE_MESSAGE.to_string()),
                    ),
                    ("response".to_string(), body),
                ],
            ),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn observed_at(&self) -> &DateTime<Utc> {
        &self.observed_at
    }
}
