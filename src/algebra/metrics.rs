use metrics_exporter_prometheus::PrometheusBuilder;

pub const SUCCESSFULLY_FETCHED_GAUGE: &str = "successfully_fetched";
pub const FAILED_TO_FETCH_GAUGE: &str = "failed_to_fetch";
pub const FETCH_TOTAL: &str = "fetch_total";

#[derive(Clone, Debug)]
pub struct Metrics {
    is_installed: bool,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let metric = PrometheusBuilder::new()
            .install()
            .map_err(|e| {
                tracing::error!("Failed to install prometheus exporter: {}", e);
            })
            .ok();

        if metric.is_some() {
            metrics::describe_gauge!(
                SUCCESSFULLY_FETCHED_GAUGE,
                "The number of successfully fetched reports"
            );

            metrics::describe_gauge!(
                FAILED_TO_FETCH_GAUGE,
                "The number of failed to fetch reports"
            );

            metrics::describe_gauge!(FETCH_TOTAL, "The total number of fetches");

            Ok(Self { is_installed: true })
        } else {
            Ok(Self {
                is_installed: false,
            })
        }
    }

    pub fn add_fetched(&self, value: u64) {
        if self.is_installed {
            metrics::increment_gauge!(SUCCESSFULLY_FETCHED_GAUGE, value as f64);
            metrics::increment_gauge!(FETCH_TOTAL, value as f64);
        }
    }

    pub fn add_failed_to_fetch(&self, value: u64) {
        if self.is_installed {
            metrics::increment_gauge!(FAILED_TO_FETCH_GAUGE, value as f64);
            metrics::increment_gauge!(FETCH_TOTAL, value as f64);
        }
    }
}
