//! Order submission capability
//!
//! [`OrderSubmitter`] is the seam between the order flow and whatever
//! processes payments. The page ships with [`SimulatedSubmitter`], which
//! stands in for a backend: a fixed delay followed by a random outcome.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::PackageId;
use crate::config::FlowConfig;
use crate::error::SubmissionError;
use crate::order::OrderSubmission;

/// Failure message reported by the simulated backend
pub const SIMULATED_FAILURE: &str = "Payment processing failed. Please try again.";

/// Proof that an order was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub package: PackageId,
    pub submitted_at: DateTime<Utc>,
}

impl OrderReceipt {
    pub fn new(package: PackageId) -> Self {
        Self {
            package,
            submitted_at: Utc::now(),
        }
    }
}

/// Something that can process an order
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, order: &OrderSubmission) -> Result<OrderReceipt, SubmissionError>;
}

/// Simulated payment backend.
///
/// Waits `delay`, then succeeds with probability `success_rate`.
#[derive(Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedSubmitter {
    /// Create with an OS-seeded RNG
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self::with_rng(delay, success_rate, StdRng::from_os_rng())
    }

    /// Create with a fixed seed for reproducible outcomes
    pub fn seeded(delay: Duration, success_rate: f64, seed: u64) -> Self {
        Self::with_rng(delay, success_rate, StdRng::seed_from_u64(seed))
    }

    /// Out-of-range rates are clamped into `[0, 1]`; NaN means never succeed.
    fn with_rng(delay: Duration, success_rate: f64, rng: StdRng) -> Self {
        let success_rate = if success_rate.is_nan() {
            tracing::warn!("Success rate is NaN, simulating failures only");
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_rate,
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.submit_delay(), config.success_rate, seed),
            None => Self::new(config.submit_delay(), config.success_rate),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Draw the outcome for one submission
    fn roll(&self) -> bool {
        self.rng.lock().random_bool(self.success_rate)
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&FlowConfig::default())
    }
}

#[async_trait]
impl OrderSubmitter for SimulatedSubmitter {
    async fn submit(&self, order: &OrderSubmission) -> Result<OrderReceipt, SubmissionError> {
        tracing::debug!(package = %order.package, delay = ?self.delay, "Simulating order submission");
        tokio::time::sleep(self.delay).await;

        if self.roll() {
            Ok(OrderReceipt::new(order.package))
        } else {
            Err(SubmissionError::Rejected(SIMULATED_FAILURE.to_string()))
        }
    }
}
