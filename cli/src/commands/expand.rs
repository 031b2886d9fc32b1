use std::io::Write;

use shostspec_common::config::Config;
use shostspec_core::HostSpec;
use tracing::{debug, info, warn};

use crate::terminal::print;

/// What happened to one invocation's expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub expressions: usize,
    pub failed: usize,
    pub hosts: u64,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Expands each expression in order, writing hosts to `out` and failures to `errs`.
///
/// A failing expression is reported on `errs` and produces no output. Later
/// expressions are still expanded unless `cfg.fail_fast` is set. Only I/O
/// failures are returned as errors.
pub fn expand<W: Write, E: Write>(
    expressions: &[String],
    cfg: &Config,
    out: &mut W,
    errs: &mut E,
) -> anyhow::Result<Outcome> {
    let mut outcome = Outcome {
        expressions: expressions.len(),
        failed: 0,
        hosts: 0,
    };

    for (idx, raw) in expressions.iter().enumerate() {
        let position = idx + 1;

        if raw.is_empty() {
            warn!("argument {position} is empty, skipping");
            continue;
        }

        match HostSpec::parse_with(raw, cfg) {
            Ok(spec) => {
                let written = print::hosts(out, &spec)?;
                debug!("argument {position} expanded to {written} hosts");
                outcome.hosts = outcome.hosts.saturating_add(written);
            }
            Err(e) => {
                print::failure(errs, &format!("argument {position}: {e}"))?;
                outcome.failed += 1;
                if cfg.fail_fast {
                    break;
                }
            }
        }
    }

    out.flush()?;

    if !outcome.is_success() {
        print::failure(
            errs,
            &format!(
                "{} of {} expressions could not be expanded",
                outcome.failed, outcome.expressions
            ),
        )?;
        return Ok(outcome);
    }

    let unit: &str = if outcome.hosts == 1 { "host" } else { "hosts" };
    info!("{} {unit} expanded successfully", outcome.hosts);

    Ok(outcome)
}
