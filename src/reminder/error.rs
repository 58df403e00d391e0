use crate::commands::CommandKind;
use thiserror::Error;

/// Failure reported by a [`ReminderGateway`](crate::gateway::ReminderGateway).
///
/// The router treats it as opaque: it is wrapped with context and carried as
/// the error source, never inspected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("reminder not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("invalid command '{0}'")]
    UnknownCommand(String),

    #[error("{command} expects at least {expected} arg(s), {provided} provided")]
    InsufficientArguments {
        command: CommandKind,
        expected: usize,
        provided: usize,
    },

    #[error("could not parse '{command}' flags: {source}")]
    FlagParse {
        command: CommandKind,
        #[source]
        source: clap::Error,
    },

    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    #[error("{command} requires at least one --id")]
    MissingId { command: CommandKind },

    #[error("{context} : {source}")]
    Backend {
        context: &'static str,
        #[source]
        source: BackendError,
    },

    #[error("backend at {host} is not healthy")]
    Unhealthy { host: String },
}

impl DispatchError {
    pub(crate) fn backend(context: &'static str, source: BackendError) -> Self {
        DispatchError::Backend { context, source }
    }

    /// The usage lines shown to the user ahead of the error itself.
    ///
    /// Only argument-count failures carry a hint.
    pub fn usage_hint(&self, program: &str) -> Option<String> {
        match self {
            DispatchError::InsufficientArguments { command, .. } => Some(format!(
                "incorrect use of {command}\n{program} {command} --help"
            )),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, DispatchError>;
