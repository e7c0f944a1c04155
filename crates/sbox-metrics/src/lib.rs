//! Cryptanalytic strength metrics for 8-bit S-boxes.
//!
//! Six metrics are provided, each as a pure free function over an
//! [`SBox`](sbox_core::SBox) and through the [`Engine`], which adds parallel
//! execution and a cancellation/deadline budget:
//! - Nonlinearity (NL) and its bit-independence variant (BIC-NL).
//! - Strict Avalanche Criterion (SAC) and its bit-independence variant (BIC-SAC).
//! - Linear and differential approximation probabilities (LAP, DAP).
//!
//! Parallel and sequential runs return bit-identical values: every reduction
//! is either an integer maximum or an in-order sum.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod avalanche;
mod budget;
mod differential;
mod engine;
mod error;
mod kind;
mod linear;
mod nonlinearity;
mod report;
mod sweep;

pub use crate::avalanche::{bic_sac, bic_sac_pair, sac};
pub use crate::budget::{Budget, CancelToken};
pub use crate::differential::dap;
pub use crate::engine::{compute, evaluate, evaluate_all, Engine, EngineConfig};
pub use crate::error::MetricError;
pub use crate::kind::MetricKind;
pub use crate::linear::lap;
pub use crate::nonlinearity::{bic_nl, nonlinearity};
pub use crate::report::{MetricResult, Report};
