//! Parsing S-box tables from user-supplied text.

use anyhow::{bail, Context, Result};
use sbox_core::SBox;

/// Parses integers separated by commas, whitespace, semicolons or newlines.
///
/// This accepts both hand-typed `1, 2, 3` lists and a spreadsheet grid
/// exported as CSV and flattened row by row.
pub fn parse_values(text: &str) -> Result<SBox> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        bail!("S-box input must not be empty");
    }
    let values = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| parse_int(token).with_context(|| format!("entry {idx}: '{token}'")))
        .collect::<Result<Vec<i64>>>()?;
    Ok(SBox::from_values(&values)?)
}

/// Parses 512 hex digits (whitespace ignored, optional `0x` prefix).
pub fn parse_hex(text: &str) -> Result<SBox> {
    let cleaned: String = text.split_whitespace().collect();
    let digits = strip_hex_prefix(&cleaned).unwrap_or(&cleaned);
    if digits.is_empty() {
        bail!("S-box input must not be empty");
    }
    let bytes = hex::decode(digits).context("decode S-box hex")?;
    Ok(SBox::try_from(bytes.as_slice())?)
}

/// Decimal, or hex with a `0x` prefix.
pub fn parse_int(token: &str) -> Result<i64> {
    let value = match strip_hex_prefix(token) {
        Some(hex) => i64::from_str_radix(hex, 16)?,
        None => token.parse::<i64>()?,
    };
    Ok(value)
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

/// Comma-separated decimal rendering, sixteen entries per line.
pub fn format_values(sbox: &SBox) -> String {
    sbox.table()
        .chunks(16)
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
