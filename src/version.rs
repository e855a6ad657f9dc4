//! loxgen version information.
//!
//! The CLI and the generated-file header both read the version from here.

/// The loxgen version string, taken from Cargo metadata at compile time.
pub const LOXGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
