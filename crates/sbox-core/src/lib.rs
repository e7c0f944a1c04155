//! Core data model for 8-bit S-box analysis.
//!
//! This crate provides the pieces every metric is built from:
//! - A validated 256-entry substitution table.
//! - Bit-level helpers (Hamming weight, bit extraction, single-bit flips).
//! - Coordinate Boolean functions extracted from the table.
//! - An exact integer fast Walsh–Hadamard transform.
//!
//! Everything here is fixed to `n = m = 8`; the crate is not a general
//! Boolean-function library.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bits;
mod error;
pub mod reference;
mod sbox;
pub mod truth_table;
pub mod walsh;

pub use crate::error::ValidationError;
pub use crate::reference::aes_sbox;
pub use crate::sbox::{SBox, INPUT_BITS, OUTPUT_BITS, SIZE};
pub use crate::truth_table::BooleanFunction;
pub use crate::walsh::WalshSpectrum;
