//! `create`: adds a reminder from `--title`, `--message` and `--duration`.

use super::{check_args, parse_flags, CmdMessage, CmdResult, CommandKind, Parsed, ReminderFlags};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use clap::Parser;

/// Create a new reminder
#[derive(Parser, Debug)]
#[command(name = "create", args_override_self = true)]
pub struct CreateArgs {
    #[command(flatten)]
    pub reminder: ReminderFlags,
}

pub fn run<G: ReminderGateway + ?Sized>(gateway: &mut G, args: &[String]) -> Result<CmdResult> {
    check_args(CommandKind::Create, args)?;
    let flags = match parse_flags::<CreateArgs>(CommandKind::Create, args)? {
        Parsed::Flags(flags) => flags,
        Parsed::Help(usage) => return Ok(CmdResult::help(usage)),
    };
    let input = flags.reminder.into_input()?;

    log::debug!("creating reminder '{}'", input.title);
    let payload = gateway
        .create(&input.title, &input.message, input.duration)
        .map_err(|e| DispatchError::backend("could not create reminder", e))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reminder created successfully:\n{payload}"
    )));
    Ok(result.with_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::gateway::fixtures::{Call, RecordingGateway};
    use std::error::Error as _;
    use std::time::Duration;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn passes_parsed_flags_to_gateway() {
        let mut gw = RecordingGateway::new();
        let result = run(
            &mut gw,
            &args(&["--title=Tea", "-m", "Kettle is on", "--duration", "4m"]),
        )
        .unwrap();

        assert_eq!(
            gw.last_call(),
            Some(&Call::Create {
                title: "Tea".into(),
                message: "Kettle is on".into(),
                duration: Duration::from_secs(240),
            })
        );
        assert_eq!(result.payload.as_deref(), Some("{\"id\":\"1\"}"));
        assert!(result.messages[0]
            .content
            .starts_with("Reminder created successfully:"));
    }

    #[test]
    fn too_few_tokens_never_reach_gateway() {
        let mut gw = RecordingGateway::new();
        for tokens in [&[][..], &["-t"][..], &["-t", "x"][..]] {
            let err = run(&mut gw, &args(tokens)).unwrap_err();
            assert!(matches!(err, DispatchError::InsufficientArguments { .. }));
        }
        assert_eq!(gw.call_count(), 0);
    }

    #[test]
    fn lone_help_returns_usage() {
        let mut gw = RecordingGateway::new();
        let result = run(&mut gw, &args(&["--help"])).unwrap();
        let usage = result.help.unwrap();
        assert!(usage.contains("--title"));
        assert!(usage.contains("--duration"));
        assert_eq!(gw.call_count(), 0);
    }

    #[test]
    fn repeated_title_keeps_last() {
        let mut gw = RecordingGateway::new();
        run(&mut gw, &args(&["-t", "first", "-t", "second"])).unwrap();
        match gw.last_call() {
            Some(Call::Create { title, message, .. }) => {
                assert_eq!(title, "second");
                assert!(message.is_empty());
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let mut gw = RecordingGateway::new();
        let err = run(&mut gw, &args(&["--colour", "red", "-t"])).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::FlagParse {
                command: CommandKind::Create,
                ..
            }
        ));
        assert!(err.to_string().starts_with("could not parse 'create' flags"));
        assert_eq!(gw.call_count(), 0);
    }

    #[test]
    fn malformed_duration_is_rejected_before_gateway() {
        let mut gw = RecordingGateway::new();
        let err = run(&mut gw, &args(&["-t", "x", "-d", "soon"])).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidDuration { ref value, .. } if value == "soon"));
        assert_eq!(gw.call_count(), 0);
    }

    #[test]
    fn backend_failure_is_wrapped() {
        let mut gw = RecordingGateway::failing(BackendError::Other("X".into()));
        let err = run(&mut gw, &args(&["-t", "a", "-m", "b"])).unwrap_err();

        let text = err.to_string();
        assert!(text.contains("could not create reminder"));
        assert!(text.contains('X'));
        let cause = err.source().and_then(|s| s.downcast_ref::<BackendError>());
        assert_eq!(cause, Some(&BackendError::Other("X".into())));
    }
}
