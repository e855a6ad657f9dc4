//! Runtime support for loxgen-generated test suites.
//!
//! Generated `<suite>_test.rs` files import this crate to reach the interpreter under test. The crate defines the
//! runner capability ([`FixtureRunner`]), the per-suite shared handle ([`SuiteRunner`]), and a default runner that
//! executes an interpreter binary ([`CommandRunner`]).

#![deny(clippy::unwrap_used)]

pub mod command;
pub mod runner;

pub use command::{CommandRunner, RunError};
pub use runner::{FixtureRunner, SuiteRunner};
