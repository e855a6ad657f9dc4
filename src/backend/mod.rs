//! loxgen backend
//!
//! Turns classified fixtures into Rust test source and writes it next to the fixtures.
//!
//! ## Module Organization
//!
//! - `rust_emitter.rs` - Low-level Rust code string builder
//! - `suite_codegen.rs` - Suite header and per-fixture test stubs
//! - `output.rs` - Writing generated files

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod output;
pub mod rust_emitter;
pub mod suite_codegen;

pub use output::{GeneratedFile, write_generated};
pub use suite_codegen::{RenderedSuite, SuiteCodegen, test_name};
