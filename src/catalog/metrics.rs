//! Catalog observability: lightweight counters for validation and storage
//! activity.
//!
//! Counters live in a global singleton so every service instance feeds the
//! same totals. Recording uses relaxed atomics; the numbers are for
//! reporting, not for synchronization.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use serde::Serialize;

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

/// Counters for catalog activity.
#[derive(Debug, Default)]
pub struct CatalogMetrics {
    checks_performed: AtomicUsize,
    products_saved: AtomicUsize,
    products_rejected: AtomicUsize,
    products_deleted: AtomicUsize,
}

impl CatalogMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(CatalogMetrics::default)
    }

    /// Record one validation check.
    pub fn record_check(&self) {
        self.checks_performed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one product accepted and stored.
    pub fn record_saved(&self) {
        self.products_saved.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one product rejected by validation.
    pub fn record_rejected(&self) {
        self.products_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one product deleted.
    pub fn record_deleted(&self) {
        self.products_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters into a serializable report.
    pub fn report(&self) -> MetricsReport {
        let checks_performed = self.checks_performed.load(Ordering::Relaxed);
        let products_saved = self.products_saved.load(Ordering::Relaxed);
        let products_rejected = self.products_rejected.load(Ordering::Relaxed);
        let products_deleted = self.products_deleted.load(Ordering::Relaxed);

        let attempts = products_saved + products_rejected;
        let rejection_rate = if attempts > 0 {
            products_rejected as f64 / attempts as f64
        } else {
            0.0
        };

        MetricsReport {
            checks_performed,
            products_saved,
            products_rejected,
            products_deleted,
            rejection_rate,
        }
    }

    /// Reset all counters to zero (test helper).
    #[cfg(test)]
    pub fn reset(&self) {
        self.checks_performed.store(0, Ordering::Relaxed);
        self.products_saved.store(0, Ordering::Relaxed);
        self.products_rejected.store(0, Ordering::Relaxed);
        self.products_deleted.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of catalog activity.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Validation checks performed
    pub checks_performed: usize,

    /// Products accepted and stored
    pub products_saved: usize,

    /// Save attempts rejected by validation
    pub products_rejected: usize,

    /// Products deleted
    pub products_deleted: usize,

    /// Share of save attempts that were rejected (0.0 when none)
    pub rejection_rate: f64,
}
