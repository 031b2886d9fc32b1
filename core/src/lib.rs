//! Expansion of compact host-range expressions such as `host[120-150,999]`.

pub mod expander;
pub mod host;
pub mod parser;

pub use host::{HostSpec, expand_host};
pub use shostspec_common::error::{ExpandError, HostError};
