//! `fetch`: returns the listed reminders, or every reminder when no `--id` is given.

use super::{check_args, parse_flags, CmdMessage, CmdResult, CommandKind, Parsed};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use crate::model::IdList;
use clap::Parser;

/// Fetch reminders (all of them when no --id is given)
#[derive(Parser, Debug)]
#[command(name = "fetch", args_override_self = true)]
pub struct FetchArgs {
    /// The ID of a reminder to fetch, may be repeated
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,

    /// Fetch every reminder (same as giving no --id)
    #[arg(long, conflicts_with = "ids")]
    pub all: bool,
}

pub fn run<G: ReminderGateway + ?Sized>(gateway: &mut G, args: &[String]) -> Result<CmdResult> {
    check_args(CommandKind::Fetch, args)?;
    let flags = match parse_flags::<FetchArgs>(CommandKind::Fetch, args)? {
        Parsed::Flags(flags) => flags,
        Parsed::Help(usage) => return Ok(CmdResult::help(usage)),
    };
    let ids = IdList::new(flags.ids);

    if ids.is_empty() {
        log::debug!("fetching all reminders");
    } else {
        log::debug!("fetching reminders {ids}");
    }
    let payload = gateway
        .fetch(ids.as_slice())
        .map_err(|e| DispatchError::backend("could not fetch reminder(s)", e))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reminders fetched successfully:\n{payload}"
    )));
    Ok(result.with_payload(payload))
}
