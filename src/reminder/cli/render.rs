use colored::Colorize;
use reminder::commands::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_result(result: &CmdResult) {
    if let Some(usage) = &result.help {
        print_help(usage);
        return;
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn print_help(text: &str) {
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
}

pub(super) fn print_usage_hint(hint: &str) {
    eprintln!("{}", hint.yellow());
}

fn format_message(message: &CmdMessage) -> String {
    let content = message.content.as_str();
    match message.level {
        MessageLevel::Success => content.green().to_string(),
        MessageLevel::Warning => content.yellow().to_string(),
    }
}
