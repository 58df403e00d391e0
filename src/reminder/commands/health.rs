//! `health`: asks the backend whether it is up.

use super::{check_args, parse_flags, CmdMessage, CmdResult, CommandKind, Parsed};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use clap::Parser;

/// Check that the reminder backend is up
#[derive(Parser, Debug)]
#[command(name = "health")]
pub struct HealthArgs {}

pub fn run<G: ReminderGateway + ?Sized>(gateway: &mut G, args: &[String]) -> Result<CmdResult> {
    check_args(CommandKind::Health, args)?;
    if let Parsed::Help(usage) = parse_flags::<HealthArgs>(CommandKind::Health, args)? {
        return Ok(CmdResult::help(usage));
    }

    let host = gateway.address().to_string();
    log::debug!("checking health of {host}");
    if !gateway.health_check(&host) {
        return Err(DispatchError::Unhealthy { host });
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backend at {host} is healthy"
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::{Call, RecordingGateway};

    #[test]
    fn healthy_backend() {
        let mut gw = RecordingGateway::new();
        let result = run(&mut gw, &[]).unwrap();
        assert_eq!(gw.last_call(), Some(&Call::HealthCheck("fake://".into())));
        assert_eq!(result.messages[0].content, "Backend at fake:// is healthy");
    }

    #[test]
    fn unhealthy_backend_is_an_error() {
        let mut gw = RecordingGateway::unhealthy();
        let err = run(&mut gw, &[]).unwrap_err();
        assert!(matches!(err, DispatchError::Unhealthy { ref host } if host == "fake://"));
    }

    #[test]
    fn takes_no_flags() {
        let mut gw = RecordingGateway::new();
        let err = run(&mut gw, &["--id=1".to_string()]).unwrap_err();
        assert!(matches!(err, DispatchError::FlagParse { .. }));
        assert_eq!(gw.call_count(), 0);
    }
}
