//! Outer-loop executor shared by the budgeted metric paths.

use rayon::prelude::*;
use sbox_core::OUTPUT_BITS;

use crate::budget::Budget;
use crate::error::MetricError;

/// Number of unordered pairs of distinct output bits, `C(8, 2)`.
pub(crate) const PAIR_COUNT: usize = 28;

/// Runs one closure per outer-loop row, sequentially or on the rayon pool.
pub(crate) struct Sweep<'a> {
    parallel: bool,
    budget: &'a Budget,
}

impl<'a> Sweep<'a> {
    pub(crate) fn new(parallel: bool, budget: &'a Budget) -> Self {
        Self { parallel, budget }
    }

    /// Maps every row, checking the budget before each one. Output order
    /// matches `rows` regardless of execution mode.
    pub(crate) fn map<T, R, F>(&self, rows: &[T], row: F) -> Result<Vec<R>, MetricError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.parallel {
            rows.par_iter()
                .map(|item| -> Result<R, MetricError> {
                    self.budget.check()?;
                    Ok(row(item))
                })
                .collect()
        } else {
            let mut out = Vec::with_capacity(rows.len());
            for item in rows {
                self.budget.check()?;
                out.push(row(item));
            }
            Ok(out)
        }
    }

    /// Maps every row and keeps the largest integer result.
    pub(crate) fn max<T, F>(&self, rows: &[T], row: F) -> Result<u32, MetricError>
    where
        T: Sync,
        F: Fn(&T) -> u32 + Sync + Send,
    {
        Ok(self.map(rows, row)?.into_iter().max().unwrap_or(0))
    }

    /// Maps every row and adds the integer results.
    pub(crate) fn sum<T, F>(&self, rows: &[T], row: F) -> Result<u64, MetricError>
    where
        T: Sync,
        F: Fn(&T) -> u64 + Sync + Send,
    {
        Ok(self.map(rows, row)?.into_iter().sum())
    }
}

/// Every byte value, the row set of input-indexed sweeps.
pub(crate) fn all_inputs() -> Vec<u8> {
    (0u8..=255).collect()
}

/// Every nonzero byte value, the row set of mask and difference sweeps.
pub(crate) fn nonzero_inputs() -> Vec<u8> {
    (1u8..=255).collect()
}

/// Unordered pairs `(i, j)` with `i < j < 8`, in lexicographic order.
pub(crate) fn output_bit_pairs() -> [(u32, u32); PAIR_COUNT] {
    let mut pairs = [(0u32, 0u32); PAIR_COUNT];
    let mut idx = 0;
    for i in 0..OUTPUT_BITS {
        for j in (i + 1)..OUTPUT_BITS {
            pairs[idx] = (i, j);
            idx += 1;
        }
    }
    pairs
}
