mod commands;
mod terminal;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use commands::{CommandLine, expand};
use shostspec_common::config::Config;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        strict: commands.strict,
        fail_fast: commands.fail_fast,
        verbosity: commands.verbosity(),
    };

    logging::init_logging(cfg.verbosity);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match expand::expand(&commands.expressions, &cfg, &mut out, &mut io::stderr()) {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        // Downstream closed early, e.g. `| head`.
        Err(e) if print::is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = print::failure(&mut io::stderr(), &format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
