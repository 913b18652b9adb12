mod configuration;

pub use configuration::*;

use anyhow::Context;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppState {
    configuration: WeatherConfig,
    client: Client,
}

impl AppState {
    pub fn try_from(config: WeatherConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout()))
            .build()
            .context("Failed to build http client.")?;

        Ok(AppState {
            configuration: config,
            client,
        })
    }

    pub fn configuration(&self) -> &WeatherConfig {
        &self.configuration
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
