//! # CLI Layer
//!
//! One possible client for the reminder router. This is the only place that
//! reads the process arguments and environment, writes to stdout or stderr,
//! and picks exit codes.
//!
//! ## Invocation
//!
//! ```text
//! reminder [--backend URL] [--verbose] <command> [flags...]
//! reminder --help | reminder            # command overview
//! reminder <command> --help             # flags of one command
//! ```
//!
//! Global flags must come before the command name; everything after it is
//! handed to the router untouched.
//!
//! ## Backend selection
//!
//! `--backend` beats `$REMINDER_BACKEND`, which beats `config.json` in the
//! config directory, which beats `http://localhost:3000`. A `memory://`
//! address runs against the in-process store.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definition of the global flags, version string
//! - `commands.rs`: `run()`, context init, logging, dispatch
//! - `render.rs`: printing of results, help and usage hints

mod commands;
mod render;
mod setup;

pub use commands::run;
