use crate::error::{DispatchError, Result};
use std::time::Duration;

/// One command invocation: the command name and the tokens that follow it.
///
/// Built once at the process boundary, then handed to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    command: String,
    args: Vec<String>,
}

impl CommandRequest {
    pub fn new<S, I, A>(command: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits an argument vector that has already had the program name removed.
    /// Returns `None` when no command was given.
    pub fn from_args<I, A>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut iter = args.into_iter().map(Into::into);
        let command: String = iter.next()?;
        Some(Self {
            command,
            args: iter.collect(),
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Title, message and duration of a reminder, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderInput {
    pub title: String,
    pub message: String,
    pub duration: Duration,
}

impl ReminderInput {
    /// Builds the input from raw flag values. Missing values default to empty;
    /// the duration is parsed strictly.
    pub fn from_flags(
        title: Option<String>,
        message: Option<String>,
        duration: Option<&str>,
    ) -> Result<Self> {
        let duration = match duration {
            Some(raw) => parse_duration(raw)?,
            None => Duration::ZERO,
        };
        Ok(Self {
            title: title.unwrap_or_default(),
            message: message.unwrap_or_default(),
            duration,
        })
    }
}

/// Reminder ids collected from repeated `--id` flags, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList(Vec<String>);

impl IdList {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The id that wins when the flag was repeated.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for IdList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Parses durations such as `90s`, `15m` or `1h30m`.
///
/// Accepted units are `s`, `m`, `h` and `d`; every number needs a unit.
/// Backends receive whole seconds, so there is no sub-second unit.
/// An empty string is a zero duration.
pub fn parse_duration(raw: &str) -> Result<Duration> {
    let invalid = |reason: &str| DispatchError::InvalidDuration {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let input = raw.trim();
    if input.is_empty() {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(invalid("expected a number"));
        }
        let amount: u64 = rest[..digits]
            .parse()
            .map_err(|_| invalid("number out of range"))?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let seconds_per_unit = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit, expected one of s, m, h, d")),
        };
        let seconds = amount
            .checked_mul(seconds_per_unit)
            .ok_or_else(|| invalid("number out of range"))?;
        total = total
            .checked_add(Duration::from_secs(seconds))
            .ok_or_else(|| invalid("number out of range"))?;
    }

    Ok(total)
}
