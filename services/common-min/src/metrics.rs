use std::time::Duration;

use crate::finder::Strategy;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "common_min=info".into()),
        )
        .init();
}

pub fn init_metrics() {
    metrics::describe_counter!(
        "common_min_find_total",
        "Total number of finder invocations"
    );
    metrics::describe_counter!(
        "common_min_not_found_total",
        "Total number of invocations without a common value"
    );
    metrics::describe_counter!(
        "common_min_validation_failures_total",
        "Total number of rejected inputs"
    );
    metrics::describe_histogram!(
        "common_min_find_duration_seconds",
        "Finder duration"
    );
}

pub fn record_find(strategy: Strategy, found: bool, elapsed: Duration) {
    metrics::counter!("common_min_find_total", "strategy" => strategy.name()).increment(1);
    if !found {
        metrics::counter!("common_min_not_found_total", "strategy" => strategy.name())
            .increment(1);
    }
    metrics::histogram!("common_min_find_duration_seconds", "strategy" => strategy.name())
        .record(elapsed.as_secs_f64());
}

pub fn record_validation_failure() {
    metrics::counter!("common_min_validation_failures_total").increment(1);
}
