//! # Reminder Architecture
//!
//! `reminder` is a small client for a remote reminder service. The binary is
//! a thin shell: almost every decision (which command, how many arguments,
//! which flags, how failures are reported) lives in the library so it can be
//! tested without a terminal or a network.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Global flags, config, logging, rendering, exit codes     │
//! │  - Builds a CommandRequest from the process arguments       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Router (router.rs)                                         │
//! │  - Resolves the command name to a CommandKind               │
//! │  - Returns structured results, never prints                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Argument count check, flag parsing, gateway call         │
//! │  - Wraps gateway failures with operation context            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway Layer (gateway/)                                   │
//! │  - ReminderGateway trait                                    │
//! │  - HttpGateway (placeholder), InMemoryGateway (offline)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `router.rs` inward, code takes its input as arguments
//! ([`model::CommandRequest`]) and returns [`commands::CmdResult`] or
//! [`error::DispatchError`]. It never reads `std::env::args`, never writes to
//! stdout and never exits the process.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `gateway::fixtures::RecordingGateway`,
//!    which counts calls and can be told to fail.
//! 2. **Router**: dispatch and help behaviour, same fake.
//! 3. **CLI**: `tests/` drives the binary with `assert_cmd`, using the
//!    `memory://` backend.
//!
//! ## Module Overview
//!
//! - [`router`]: dispatch entry point
//! - [`commands`]: per-command parsing and gateway calls
//! - [`gateway`]: backend abstraction and implementations
//! - [`model`]: request and input types, duration parsing
//! - [`config`]: backend address configuration
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod router;
