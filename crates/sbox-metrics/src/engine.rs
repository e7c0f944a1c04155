//! Metric dispatch, with and without an execution budget.

use std::time::Duration;

use sbox_core::SBox;

use crate::avalanche::{bic_sac, bic_sac_in, sac, sac_in};
use crate::budget::{Budget, CancelToken};
use crate::differential::{dap, dap_in};
use crate::error::MetricError;
use crate::kind::MetricKind;
use crate::linear::{lap, lap_in};
use crate::nonlinearity::{bic_nl, bic_nl_in, nonlinearity, nonlinearity_in};
use crate::report::{MetricResult, Report};
use crate::sweep::Sweep;

/// Execution settings for an [`Engine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Split outer loops across the rayon thread pool.
    pub parallel: bool,
    /// Wall-clock limit for one `evaluate*` call.
    pub deadline: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            deadline: None,
        }
    }
}

/// Stateless evaluation service. Holds only its configuration and a
/// cancellation handle; every call works on its own copy of the table.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    cancel: CancelToken,
}

impl Engine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Handle that cancels every in-flight and future call on this engine.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Computes one metric.
    pub fn evaluate(&self, sbox: &SBox, metric: MetricKind) -> Result<f64, MetricError> {
        let budget = self.budget();
        self.run(*sbox, metric, &budget)
    }

    /// Computes every metric in reporting order.
    pub fn evaluate_all(&self, sbox: &SBox) -> Result<Report, MetricError> {
        self.evaluate_many(sbox, &MetricKind::ALL)
    }

    /// Computes `metrics` in the given order under one shared budget. Nothing
    /// is returned unless every metric completes.
    pub fn evaluate_many(
        &self,
        sbox: &SBox,
        metrics: &[MetricKind],
    ) -> Result<Report, MetricError> {
        let budget = self.budget();
        let snapshot = *sbox;
        let mut results = Vec::with_capacity(metrics.len());
        for &metric in metrics {
            let value = self.run(snapshot, metric, &budget)?;
            results.push(MetricResult { metric, value });
        }
        Ok(Report {
            bijective: snapshot.is_bijective(),
            results,
        })
    }

    fn budget(&self) -> Budget {
        let budget = Budget::unlimited().with_cancel(self.cancel.clone());
        match self.config.deadline {
            Some(timeout) => budget.with_timeout(timeout),
            None => budget,
        }
    }

    fn run(&self, sbox: SBox, metric: MetricKind, budget: &Budget) -> Result<f64, MetricError> {
        budget.check()?;
        let sweep = Sweep::new(self.config.parallel, budget);
        match metric {
            MetricKind::Nl => nonlinearity_in(&sbox, &sweep),
            MetricKind::Sac => sac_in(&sbox, &sweep),
            MetricKind::BicNl => bic_nl_in(&sbox, &sweep),
            MetricKind::BicSac => bic_sac_in(&sbox, &sweep),
            MetricKind::Lap => lap_in(&sbox, &sweep),
            MetricKind::Dap => dap_in(&sbox, &sweep),
        }
    }
}

/// Computes one metric sequentially with no budget.
pub fn compute(sbox: &SBox, metric: MetricKind) -> f64 {
    match metric {
        MetricKind::Nl => nonlinearity(sbox),
        MetricKind::Sac => sac(sbox),
        MetricKind::BicNl => bic_nl(sbox),
        MetricKind::BicSac => bic_sac(sbox),
        MetricKind::Lap => lap(sbox),
        MetricKind::Dap => dap(sbox),
    }
}

/// Validates `values` and computes one metric.
pub fn evaluate(values: &[i64], metric: MetricKind) -> Result<f64, MetricError> {
    let sbox = SBox::from_values(values)?;
    Ok(compute(&sbox, metric))
}

/// Validates `values` and computes every metric in reporting order.
pub fn evaluate_all(values: &[i64]) -> Result<Report, MetricError> {
    let sbox = SBox::from_values(values)?;
    let results = MetricKind::ALL
        .into_iter()
        .map(|metric| MetricResult {
            metric,
            value: compute(&sbox, metric),
        })
        .collect();
    Ok(Report {
        bijective: sbox.is_bijective(),
        results,
    })
}
