//! `delete`: removes every reminder named by `--id`.

use super::{check_args, parse_flags, CmdMessage, CmdResult, CommandKind, Parsed};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use crate::model::IdList;
use clap::Parser;

/// Delete one or more reminders
#[derive(Parser, Debug)]
#[command(name = "delete", args_override_self = true)]
pub struct DeleteArgs {
    /// The ID of a reminder to delete, may be repeated
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,
}

pub fn run<G: ReminderGateway + ?Sized>(gateway: &mut G, args: &[String]) -> Result<CmdResult> {
    check_args(CommandKind::Delete, args)?;
    let flags = match parse_flags::<DeleteArgs>(CommandKind::Delete, args)? {
        Parsed::Flags(flags) => flags,
        Parsed::Help(usage) => return Ok(CmdResult::help(usage)),
    };
    let ids = IdList::new(flags.ids);
    if ids.is_empty() {
        return Err(DispatchError::MissingId {
            command: CommandKind::Delete,
        });
    }

    log::debug!("deleting reminders {ids}");
    gateway
        .delete(ids.as_slice())
        .map_err(|e| DispatchError::backend("could not delete reminder(s)", e))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully deleted reminder(s): {ids}"
    )));
    Ok(result)
}
