use crate::prelude::{Outcome, WeatherConfig, WeatherQuery, WeatherReport};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

pub const HTTP_TAG: &str = "Http";
pub const DECODE_TAG: &str = "Decode";

#[async_trait]
pub trait FetchExt {
    async fn current_weather(
        &self,
        config: &WeatherConfig,
        query: &WeatherQuery,
    ) -> Outcome<WeatherReport>;
}

#[async_trait]
impl FetchExt for Client {
    async fn current_weather(
        &self,
        config: &WeatherConfig,
        query: &WeatherQuery,
    ) -> Outcome<WeatherReport> {
        tracing::info!("Fetching current weather for {}", query.city());

        let sent = Outcome::from(
            self.get(config.endpoint())
                .query(&query.params(config))
                .send()
                .await,
        )
        .map_err(|e| {
            warn!("Failed to reach weather upstream: {}", e);
            Value::String(e.to_string())
        });

        let response = match sent {
            Outcome::Success { value } => value,
            failure => return Outcome::failure_with(HTTP_TAG, [failure.cause()]),
        };

        let decoded = Outcome::from(response.json::<Value>().await).map_err(|e| {
            warn!("Failed to decode weather payload: {}", e);
            Value::String(e.to_string())
        });

        let body = match decoded {
            Outcome::Success { value } => value,
            failure => return Outcome::failure_with(DECODE_TAG, [failure.cause()]),
        };

        Outcome::success(body).and_then(|body| WeatherReport::reshape(query, body))
    }
}
