//! # Command Router
//!
//! The router is the single entry point for running a command, whatever the
//! UI. It resolves the command name to a [`CommandKind`], hands the raw
//! arguments to that command's module and returns its [`CmdResult`].
//!
//! ## What the Router Does NOT Do
//!
//! - Read the process environment: callers build a [`CommandRequest`]
//! - Print anything: help and results come back as data
//! - Retry or swallow errors: every failure is returned to the caller
//!
//! ## Generic Over ReminderGateway
//!
//! `Router<G: ReminderGateway>` works the same against the placeholder HTTP
//! gateway, the in-memory store, or a recording fake in tests.

use crate::commands::{self, CmdResult, CommandKind};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use crate::model::CommandRequest;

pub struct Router<G: ReminderGateway> {
    gateway: G,
}

impl<G: ReminderGateway> Router<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Looks up a command by its exact name.
    pub fn resolve(&self, name: &str) -> Result<CommandKind> {
        CommandKind::resolve(name).ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))
    }

    pub fn dispatch(&mut self, request: &CommandRequest) -> Result<CmdResult> {
        let kind = self.resolve(request.command())?;
        log::debug!("dispatching {kind} with {} arg(s)", request.args().len());
        self.run(kind, request.args())
    }

    pub fn run(&mut self, kind: CommandKind, args: &[String]) -> Result<CmdResult> {
        let gateway = &mut self.gateway;
        match kind {
            CommandKind::Create => commands::create::run(gateway, args),
            CommandKind::Edit => commands::edit::run(gateway, args),
            CommandKind::Fetch => commands::fetch::run(gateway, args),
            CommandKind::Delete => commands::delete::run(gateway, args),
            CommandKind::Health => commands::health::run(gateway, args),
        }
    }

    /// Registered commands, in help order.
    pub fn commands(&self) -> &'static [CommandKind] {
        &CommandKind::ALL
    }

    /// Top-level usage listing every command.
    pub fn help(&self, program: &str) -> String {
        let mut out = format!("Usage of {program}:\n  {program} <command> [<args>]\n\nCommands:\n");
        for kind in self.commands() {
            out.push_str(&format!("  {:<8} {program} {kind} --help\n", kind.name()));
        }
        out
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
