//! # Command Layer
//!
//! One module per command. Each exposes a clap `Args` struct describing its
//! flags and a `run` function that walks the same pipeline:
//!
//! 1. minimum argument count ([`check_args`]), skipped for a lone `--help`
//! 2. flag parsing ([`parse_flags`]) into typed input
//! 3. the matching [`ReminderGateway`](crate::gateway::ReminderGateway) call
//! 4. a [`CmdResult`] carrying the confirmation, or a wrapped error
//!
//! Commands never print. Output travels back as data and the CLI layer
//! decides how to show it.

use crate::error::{DispatchError, Result};
use crate::gateway::Payload;
use crate::model::ReminderInput;
use clap::error::ErrorKind;
use clap::{Args, Parser};
use std::fmt;
use std::str::FromStr;

pub mod create;
pub mod delete;
pub mod edit;
pub mod fetch;
pub mod health;

pub const HELP_FLAG: &str = "--help";

/// Every command the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Create,
    Edit,
    Fetch,
    Delete,
    Health,
}

impl CommandKind {
    /// All commands, in the order help lists them.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Create,
        CommandKind::Edit,
        CommandKind::Fetch,
        CommandKind::Delete,
        CommandKind::Health,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Create => "create",
            CommandKind::Edit => "edit",
            CommandKind::Fetch => "fetch",
            CommandKind::Delete => "delete",
            CommandKind::Health => "health",
        }
    }

    /// Fewest tokens the command accepts after its name.
    pub fn min_args(self) -> usize {
        match self {
            CommandKind::Create => 3,
            CommandKind::Edit => 2,
            CommandKind::Fetch => 1,
            CommandKind::Delete => 1,
            CommandKind::Health => 0,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "create" => Some(CommandKind::Create),
            "edit" => Some(CommandKind::Edit),
            "fetch" => Some(CommandKind::Fetch),
            "delete" => Some(CommandKind::Delete),
            "health" => Some(CommandKind::Health),
            _ => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s).ok_or_else(|| DispatchError::UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command hands back to its caller.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Raw gateway payload, when the operation returned one
    pub payload: Option<Payload>,
    /// Flag usage, set when the command was asked for `--help`
    pub help: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn help(text: impl Into<String>) -> Self {
        Self {
            help: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_help(&self) -> bool {
        self.help.is_some()
    }
}

/// Title, message and duration flags shared by `create` and `edit`.
#[derive(Args, Debug, Default)]
pub struct ReminderFlags {
    /// Reminder title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Reminder message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Reminder time, e.g. 90s, 15m or 1h30m
    #[arg(short, long)]
    pub duration: Option<String>,
}

impl ReminderFlags {
    pub fn into_input(self) -> Result<ReminderInput> {
        ReminderInput::from_flags(self.title, self.message, self.duration.as_deref())
    }
}

/// Rejects invocations with fewer than `command.min_args()` tokens.
///
/// A single `--help` token always passes.
pub fn check_args(command: CommandKind, args: &[String]) -> Result<()> {
    if args.len() == 1 && args[0] == HELP_FLAG {
        return Ok(());
    }

    let expected = command.min_args();
    if args.len() < expected {
        log::warn!(
            "{command}: {} arg(s) given, {expected} required",
            args.len()
        );
        return Err(DispatchError::InsufficientArguments {
            command,
            expected,
            provided: args.len(),
        });
    }
    Ok(())
}

/// Outcome of flag parsing.
#[derive(Debug)]
pub enum Parsed<T> {
    Flags(T),
    /// `--help` was requested; holds the rendered usage
    Help(String),
}

/// Parses `args` with the command's clap definition.
pub fn parse_flags<T: Parser>(command: CommandKind, args: &[String]) -> Result<Parsed<T>> {
    let argv = std::iter::once(command.name().to_string()).chain(args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(flags) => Ok(Parsed::Flags(flags)),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Parsed::Help(e.render().to_string())),
        Err(source) => Err(DispatchError::FlagParse { command, source }),
    }
}
