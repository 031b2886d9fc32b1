#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Requires bracket-less expressions to end in a number.
    ///
    /// Off by default, so a plain hostname such as `login` expands to itself.
    pub strict: bool,
    /// Stops at the first expression that fails instead of reporting every failure.
    pub fail_fast: bool,
    /// Log verbosity: negative for quiet, 0 for warnings, positive for more.
    pub verbosity: i8,
}

