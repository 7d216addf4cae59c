use colored::Colorize;
use memex::api::{CmdMessage, MessageLevel};

/// Status markers printed in front of messages.
#[derive(Debug, Clone)]
pub struct Symbols {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            success: "✔",
            warning: "⚠",
            error: "✘",
            info: "➜",
        }
    }
}

impl Symbols {
    fn for_level(&self, level: &MessageLevel) -> &'static str {
        match level {
            MessageLevel::Info => self.info,
            MessageLevel::Success => self.success,
            MessageLevel::Warning => self.warning,
            MessageLevel::Error => self.error,
        }
    }
}

/// A message line without color.
pub fn format_message(message: &CmdMessage, symbols: &Symbols) -> String {
    format!("{} {}", symbols.for_level(&message.level), message.content)
}

pub fn print_messages(messages: &[CmdMessage], symbols: &Symbols) {
    for message in messages {
        let line = format_message(message, symbols);
        match message.level {
            MessageLevel::Info => println!("{}", line.dimmed()),
            MessageLevel::Success => println!("{}", line.green()),
            MessageLevel::Warning => eprintln!("{}", line.yellow()),
            MessageLevel::Error => eprintln!("{}", line.red()),
        }
    }
}

pub fn print_taxa(entries: &[(String, String)]) {
    for (key, value) in entries {
        println!("{}: {}", key, value);
    }
}

pub fn print_outputs(outputs: &[String]) {
    for output in outputs {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
}
