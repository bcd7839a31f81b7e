//! # CLI Module
//!
//! Command-line interface for inspecting and validating route directories.
//!
//! ## Commands
//!
//! ### `inspect`
//!
//! Compile a route directory and print the ordered registration table:
//!
//! ```bash
//! plumber inspect --routes app/routes
//! ```
//!
//! ### `validate`
//!
//! Compile a route directory and report whether it is valid; the process
//! exits nonzero on the first compilation error:
//!
//! ```bash
//! plumber validate --routes app/routes
//! ```
//!
//! Both commands resolve handler and middleware names leniently, since the
//! application's registries are not available to the binary: unresolved
//! handlers fall back to the default handler and unresolved middlewares are
//! skipped with a warning.
//!
//! When `--routes` is omitted the directory comes from `PLUMBER_ROUTES_DIR`
//! (default `routes`).

mod commands;


pub use commands::{run_cli, Cli, Commands};
