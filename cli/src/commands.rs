pub mod expand;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "shostspec")]
#[command(about = "Expand host-range expressions like host[120-150,999] into one hostname per line.")]
#[command(version)]
pub struct CommandLine {
    /// Host expressions to expand, e.g. node[001-016,020]
    #[arg(value_name = "EXPR", required = true)]
    pub expressions: Vec<String>,

    /// Stop at the first expression that fails to expand
    #[arg(long)]
    pub fail_fast: bool,

    /// Reject plain hostnames that do not end in a number
    #[arg(long)]
    pub strict: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            return -1;
        }
        i8::try_from(self.verbose).unwrap_or(i8::MAX)
    }
}
