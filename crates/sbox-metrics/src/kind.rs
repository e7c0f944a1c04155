//! The closed set of supported metrics.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// One of the six supported metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Nonlinearity.
    #[serde(rename = "NL")]
    Nl,
    /// Strict avalanche criterion.
    #[serde(rename = "SAC")]
    Sac,
    /// Bit independence criterion, nonlinearity flavour.
    #[serde(rename = "BIC-NL")]
    BicNl,
    /// Bit independence criterion, avalanche flavour.
    #[serde(rename = "BIC-SAC")]
    BicSac,
    /// Linear approximation probability.
    #[serde(rename = "LAP")]
    Lap,
    /// Differential approximation probability.
    #[serde(rename = "DAP")]
    Dap,
}

impl MetricKind {
    /// Every metric, in reporting order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Nl,
        MetricKind::Sac,
        MetricKind::BicNl,
        MetricKind::BicSac,
        MetricKind::Lap,
        MetricKind::Dap,
    ];

    /// Short identifier, e.g. `BIC-NL`.
    pub const fn short_name(self) -> &'static str {
        match self {
            MetricKind::Nl => "NL",
            MetricKind::Sac => "SAC",
            MetricKind::BicNl => "BIC-NL",
            MetricKind::BicSac => "BIC-SAC",
            MetricKind::Lap => "LAP",
            MetricKind::Dap => "DAP",
        }
    }

    /// Human-readable label for reports.
    pub const fn label(self) -> &'static str {
        match self {
            MetricKind::Nl => "Non-Linearity (NL)",
            MetricKind::Sac => "Strict Avalanche Criterion (SAC)",
            MetricKind::BicNl => "BIC - NL",
            MetricKind::BicSac => "BIC - SAC",
            MetricKind::Lap => "Linear Approximation Probability (LAP)",
            MetricKind::Dap => "Differential Approximation Probability (DAP)",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    /// Accepts the short name or the label, ignoring case; `_` and `-` are
    /// interchangeable in short names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let normalized = needle.replace('_', "-");
        MetricKind::ALL
            .into_iter()
            .find(|kind| {
                kind.short_name().eq_ignore_ascii_case(&normalized)
                    || kind.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| MetricError::UnknownMetric(needle.to_string()))
    }
}
