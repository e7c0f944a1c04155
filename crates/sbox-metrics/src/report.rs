//! Ordered metric results and their text renderings.

use core::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::kind::MetricKind;

/// One computed metric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Which metric.
    pub metric: MetricKind,
    /// Its value.
    pub value: f64,
}

/// Results of one evaluation run, in the order they were requested.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Whether the analyzed table is a permutation.
    pub bijective: bool,
    /// Metric values.
    pub results: Vec<MetricResult>,
}

impl Report {
    /// Value of `metric`, if it was computed.
    pub fn get(&self, metric: MetricKind) -> Option<f64> {
        self.results
            .iter()
            .find(|r| r.metric == metric)
            .map(|r| r.value)
    }

    /// `Metric,Value` CSV with one row per result and full precision values.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Metric,Value\n");
        for r in &self.results {
            let _ = writeln!(out, "\"{}\",{}", r.metric.label(), r.value);
        }
        out
    }

    /// Aligned two-column table with values to five decimals.
    pub fn to_table(&self) -> String {
        let width = self
            .results
            .iter()
            .map(|r| r.metric.label().len())
            .max()
            .unwrap_or(0)
            .max("Metric".len());
        let mut out = String::new();
        let _ = writeln!(out, "{:<width$}  Value", "Metric");
        let _ = writeln!(out, "{}  {}", "-".repeat(width), "-".repeat(10));
        for r in &self.results {
            let _ = writeln!(out, "{:<width$}  {:.5}", r.metric.label(), r.value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            bijective: true,
            results: vec![
                MetricResult {
                    metric: MetricKind::Nl,
                    value: 112.0,
                },
                MetricResult {
                    metric: MetricKind::Lap,
                    value: 0.0625,
                },
            ],
        }
    }

    #[test]
    fn get_finds_computed_metrics_only() {
        let report = sample();
        assert_eq!(report.get(MetricKind::Lap), Some(0.0625));
        assert_eq!(report.get(MetricKind::Dap), None);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = sample().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Metric,Value");
        assert_eq!(lines[1], "\"Non-Linearity (NL)\",112");
        assert_eq!(lines[2], "\"Linear Approximation Probability (LAP)\",0.0625");
    }

    #[test]
    fn table_uses_five_decimals() {
        let table = sample().to_table();
        assert!(table.contains("Non-Linearity (NL)"));
        assert!(table.contains("112.00000"));
        assert!(table.contains("0.06250"));
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let report = sample();
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"metric\":\"NL\""));
        let decoded: Report = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, report);
    }
}
