use anyhow::Context;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
///
/// Fails if a recorder is already installed in this process.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("boost_quotes_total", "Total number of price quotes served");
    describe_counter!("boost_orders_total", "Total number of accepted orders");
    describe_counter!(
        "boost_order_rejections_total",
        "Total number of orders that were not accepted"
    );
    describe_histogram!("boost_order_value_usd", "Final price of accepted orders in USD");
    describe_gauge!("boost_desk_info", "Service version information");

    gauge!("boost_desk_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

pub fn record_quote(service: &str) {
    counter!("boost_quotes_total", "service" => service.to_string()).increment(1);
}

pub fn record_order(service: &str, server: &str, final_price: f64) {
    counter!(
        "boost_orders_total",
        "service" => service.to_string(),
        "server" => server.to_string()
    )
    .increment(1);

    histogram!("boost_order_value_usd", "service" => service.to_string()).record(final_price);
}

pub fn record_order_rejection(service: &str, reason: &str) {
    counter!(
        "boost_order_rejections_total",
        "service" => service.to_string(),
        "reason" => reason.to_string()
    )
    .increment(1);
}
