use dotenvy::dotenv;
use serde_json::Value;
use std::env;
use weather_report::{
    arm, dispatch, fold, get_subscriber, init_subscriber, AppState, FetchExt, Metrics,
    WeatherConfig, WeatherQuery, DECODE_TAG, HTTP_TAG, MALFORMED_TAG, TYPE_KEY,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber("weather-report".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = WeatherConfig::load()?;

    tracing::info!(
        "Starting application with configuration: {}{:#?}{}",
        "\n",
        &configuration,
        "\n"
    );

    let state = AppState::try_from(configuration)?;
    let metrics = Metrics::new()?;

    let city = env::args()
        .nth(1)
        .unwrap_or_else(|| state.configuration().default_city().to_string());
    let query = WeatherQuery::new(city, state.configuration().units().to_string());

    let outcome = state
        .client()
        .current_weather(state.configuration(), &query)
        .await;

    let rendered = fold(
        outcome,
        |report| {
            metrics.add_fetched(1);
            tracing::info!("Fetched current weather for {}", report.city());

            serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)
        },
        |error| {
            metrics.add_failed_to_fetch(1);

            let tag = error
                .get(TYPE_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            dispatch(
                &tag,
                vec![
                    arm(HTTP_TAG, || {
                        tracing::warn!("Weather upstream is unreachable")
                    }),
                    arm(DECODE_TAG, || {
                        tracing::warn!("Weather upstream returned an undecodable body")
                    }),
                    arm(MALFORMED_TAG, || {
                        tracing::warn!("Weather upstream payload is missing required sections")
                    }),
                ],
            );

            serde_json::to_string_pretty(&error).map_err(anyhow::Error::from)
        },
    )?;

    println!("{}", rendered);

    Ok(())
}
