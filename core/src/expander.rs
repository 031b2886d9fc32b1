//! # Range Expander
//!
//! Turns a specifier such as `008-011,020` into the numbers it denotes.
//!
//! Each comma-separated token is either a single number or an inclusive
//! `LO-HI` range. Generated numbers are zero-padded to the digit count of the
//! single value or of `LO`, so `008-011` gives `008`, `009`, `010`, `011`.

use std::ops::RangeInclusive;

use shostspec_common::error::ExpandError;

/// One comma-separated element of a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierToken {
    Single { value: u64, width: usize },
    Range { lo: u64, hi: u64, width: usize },
}

impl SpecifierToken {
    pub fn values(&self) -> RangeInclusive<u64> {
        match *self {
            Self::Single { value, .. } => value..=value,
            Self::Range { lo, hi, .. } => lo..=hi,
        }
    }

    /// Zero-padding width taken from the original digit string.
    pub fn width(&self) -> usize {
        match *self {
            Self::Single { width, .. } | Self::Range { width, .. } => width,
        }
    }

    /// Number of values, saturating at `u64::MAX` for `0-18446744073709551615`.
    pub fn count(&self) -> u64 {
        let values = self.values();
        (values.end() - values.start()).saturating_add(1)
    }

    /// The padded decimal strings for this token, ascending.
    pub fn suffixes(&self) -> impl Iterator<Item = String> + use<> {
        let width = self.width();
        self.values().map(move |n| format!("{n:0width$}"))
    }
}

/// Splits a specifier into validated tokens, preserving their order.
pub fn tokenize(specifier: &str) -> Result<Vec<SpecifierToken>, ExpandError> {
    specifier.split(',').map(parse_token).collect()
}

/// Expands a specifier into its padded number strings, in emission order.
pub fn expand(specifier: &str) -> Result<Vec<String>, ExpandError> {
    let tokens = tokenize(specifier)?;
    Ok(tokens.iter().flat_map(SpecifierToken::suffixes).collect())
}

fn parse_token(token: &str) -> Result<SpecifierToken, ExpandError> {
    let invalid = |reason: &'static str| ExpandError::InvalidToken {
        token: token.to_string(),
        reason,
    };

    if token.is_empty() {
        return Err(invalid("empty element in list"));
    }

    let Some((lo_str, hi_str)) = token.split_once('-') else {
        let value = parse_digits(token).map_err(invalid)?;
        return Ok(SpecifierToken::Single {
            value,
            width: token.len(),
        });
    };

    if hi_str.contains('-') {
        return Err(invalid("more than one '-'"));
    }

    let lo = parse_digits(lo_str).map_err(invalid)?;
    let hi = parse_digits(hi_str).map_err(invalid)?;

    if lo > hi {
        return Err(ExpandError::ReversedRange {
            lo: lo_str.to_string(),
            hi: hi_str.to_string(),
        });
    }

    Ok(SpecifierToken::Range {
        lo,
        hi,
        width: lo_str.len(),
    })
}

fn parse_digits(digits: &str) -> Result<u64, &'static str> {
    if digits.is_empty() {
        return Err("missing number");
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a decimal number");
    }
    digits.parse::<u64>().map_err(|_| "number too large")
}
