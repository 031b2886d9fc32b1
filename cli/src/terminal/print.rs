use std::io::{self, Write};

use colored::*;
use shostspec_core::HostSpec;

/// Writes every host of `spec` on its own line, returning how many were written.
pub fn hosts<W: Write>(out: &mut W, spec: &HostSpec) -> io::Result<u64> {
    let mut written: u64 = 0;
    for host in spec.hosts() {
        writeln!(out, "{host}")?;
        written += 1;
    }
    Ok(written)
}

/// User-facing failure line, styled like an error log event but never filtered.
pub fn failure<W: Write>(errs: &mut W, msg: &str) -> io::Result<()> {
    writeln!(errs, "{} {msg}", "[-]".red().bold())
}

pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
