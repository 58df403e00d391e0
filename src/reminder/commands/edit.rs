//! `edit`: rewrites one reminder. Only the last `--id` given is used.

use super::{check_args, parse_flags, CmdMessage, CmdResult, CommandKind, Parsed, ReminderFlags};
use crate::error::{DispatchError, Result};
use crate::gateway::ReminderGateway;
use crate::model::IdList;
use clap::Parser;

/// Modify an existing reminder
#[derive(Parser, Debug)]
#[command(name = "edit", args_override_self = true)]
pub struct EditArgs {
    /// The ID of the reminder to edit (the last one given wins)
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub reminder: ReminderFlags,
}

pub fn run<G: ReminderGateway + ?Sized>(gateway: &mut G, args: &[String]) -> Result<CmdResult> {
    check_args(CommandKind::Edit, args)?;
    let flags = match parse_flags::<EditArgs>(CommandKind::Edit, args)? {
        Parsed::Flags(flags) => flags,
        Parsed::Help(usage) => return Ok(CmdResult::help(usage)),
    };

    let ids = IdList::new(flags.ids);
    let id = ids
        .last()
        .ok_or(DispatchError::MissingId {
            command: CommandKind::Edit,
        })?
        .to_string();
    let input = flags.reminder.into_input()?;

    let mut result = CmdResult::default();
    if ids.len() > 1 {
        result.add_message(CmdMessage::warning(format!(
            "Several ids given ({ids}), editing {id}"
        )));
    }

    log::debug!("editing reminder {id}");
    let payload = gateway
        .edit(&id, &input.title, &input.message, input.duration)
        .map_err(|e| DispatchError::backend("could not edit reminder", e))?;

    result.add_message(CmdMessage::success(format!(
        "Reminder edited successfully:\n{payload}"
    )));
    Ok(result.with_payload(payload))
}
