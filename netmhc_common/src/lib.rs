/*
    Pieces shared by the netMHC workflow tools
        version: netMHC/netMHCpan version tag and its fixed tables
        error: the error type every tool propagates
        struct_helper: line-by-line file reader and file helpers

    Each tool logs progress to stderr through env_logger and prints
    the files it wrote on stdout so a shell script can capture them.
*/

use std::path::Path;
use env_logger::Env;
pub mod lib_utils;
pub use lib_utils::error::{MhcError, Result};
pub use lib_utils::version::NetMhcVersion;

/// Start env_logger on stderr. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Render a list of written files for shell capture.
pub fn join_paths<P: AsRef<Path>>(paths: &[P], separator: &str) -> String {
    paths.iter()
        .map(|path| path.as_ref().display().to_string())
        .collect::<Vec<String>>()
        .join(separator)
}
