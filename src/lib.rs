#![forbid(unsafe_code)]
//! loxgen: Lox conformance test-suite generator
//!
//! Walks a tree of annotated `.lox` fixture scripts and writes one Rust test file per suite directory. Positive
//! fixtures become tests that compare the interpreter's printed output with the `// expect:` annotations; fixtures
//! carrying any error annotation become tests that only require the run to fail. The generated files reach the
//! interpreter through the `loxgen_runtime` crate.
//!
//! ## Pipeline
//!
//! `discovery` -> `annotations` -> `classify` -> `backend` -> disk, driven by `generator`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The emitted test stubs `panic!` on purpose; that is how a generated test fails.
//!
//! - **True invariants**: Patterns compiled from string constants use `.expect("INVARIANT: reason")`.

pub mod annotations;
pub mod backend;
pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod generator;
pub mod version;

pub use annotations::{Annotation, AnnotationKind, Annotations, scan};
pub use classify::{Classification, classify, classify_source};
pub use config::GeneratorConfig;
pub use discovery::{FixtureFile, Suite, discover_suites};
pub use errors::{GenError, GenResult};
pub use generator::{GenerationReport, SuiteReport, generate, plan, render_suite};
