//! # Host Specification
//!
//! Ties the parser and the expander together. A [`HostSpec`] is a fully
//! validated expression: once one exists, iterating its hosts cannot fail.

use std::str::FromStr;

use shostspec_common::config::Config;
use shostspec_common::error::{ExpandError, HostError};
use tracing::debug;

use crate::expander::{self, SpecifierToken};
use crate::parser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSpec {
    prefix: String,
    /// Empty for a plain hostname without brackets.
    tokens: Vec<SpecifierToken>,
    suffix: String,
}

impl HostSpec {
    /// Parses and validates `raw`, tagging any failure with the expression itself.
    pub fn parse_with(raw: &str, cfg: &Config) -> Result<Self, HostError> {
        Self::build(raw, cfg).map_err(|source| HostError::new(raw, source))
    }

    fn build(raw: &str, cfg: &Config) -> Result<Self, ExpandError> {
        let parsed = parser::parse(raw)?;

        let tokens = match parsed.specifier.as_deref() {
            Some(specifier) => expander::tokenize(specifier)?,
            None => {
                if cfg.strict && !ends_in_digit(&parsed.prefix) {
                    return Err(ExpandError::MissingNumber);
                }
                Vec::new()
            }
        };

        let spec = Self {
            prefix: parsed.prefix,
            tokens,
            suffix: parsed.suffix,
        };
        debug!(expression = raw, hosts = spec.count(), "parsed host expression");

        Ok(spec)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn tokens(&self) -> &[SpecifierToken] {
        &self.tokens
    }

    pub fn is_literal(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Total number of hosts, without generating them.
    pub fn count(&self) -> u64 {
        if self.is_literal() {
            return 1;
        }
        self.tokens
            .iter()
            .fold(0u64, |acc, token| acc.saturating_add(token.count()))
    }

    /// Lazily yields every host in emission order.
    pub fn hosts(&self) -> impl Iterator<Item = String> + '_ {
        let literal = self
            .is_literal()
            .then(|| format!("{}{}", self.prefix, self.suffix));

        let expanded = self.tokens.iter().flat_map(move |token| {
            token
                .suffixes()
                .map(move |number| format!("{}{number}{}", self.prefix, self.suffix))
        });

        literal.into_iter().chain(expanded)
    }
}

impl FromStr for HostSpec {
    type Err = HostError;

    /// Parses with the default (permissive) configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &Config::default())
    }
}

/// Expands one host expression into the full list of hostnames.
pub fn expand_host(raw: &str) -> Result<Vec<String>, HostError> {
    let spec: HostSpec = raw.parse()?;
    Ok(spec.hosts().collect())
}

fn ends_in_digit(host: &str) -> bool {
    host.bytes().last().is_some_and(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
