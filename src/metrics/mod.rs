use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for the customer API
// ============================================================================
//
// - Request counts per operation and outcome
// - Request latency per operation
// - Customers created
//
// Exposed in text format on GET /metrics.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub requests_total: IntCounterVec,
    pub request_duration: HistogramVec,
    pub customers_created: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("customer_api_requests_total", "Total customer API requests"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new("customer_api_request_duration_seconds", "Customer API request duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["operation"],
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        let customers_created = IntCounter::new(
            "customer_api_customers_created_total",
            "Total customers created",
        )?;
        registry.register(Box::new(customers_created.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
            customers_created,
        })
    }

    pub fn record(&self, operation: &str, outcome: &str, elapsed: Duration) {
        self.requests_total.with_label_values(&[operation, outcome]).inc();
        self.request_duration
            .with_label_values(&[operation])
            .observe(elapsed.as_secs_f64());
    }

    /// Render every registered metric in Prometheus text format
    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
