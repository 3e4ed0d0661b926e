//! # Command Parsing
//!
//! Turns a raw message body into a typed command before any state is touched.
//! Argument shape validation stays with the registry; the parser only decides
//! which command was asked for and carries the argument string along.

/// A parsed chat command. `args` strings are trimmed but otherwise verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New { args: String },
    Created,
    Edit { args: String },
    Read { args: String },
    Delete { args: String },
    Help,
    Unknown { name: String },
}

/// Returns `None` for plain chat (no command prefix).
pub fn parse_command(body: &str, prefix: &str) -> Option<Command> {
    let rest = body.trim().strip_prefix(prefix)?;

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim().to_string();

    let command = match name {
        "new" => Command::New { args },
        "created" => Command::Created,
        "edit" => Command::Edit { args },
        "read" => Command::Read { args },
        "delete" => Command::Delete { args },
        "help" => Command::Help,
        _ => Command::Unknown {
            name: name.to_string(),
        },
    };
    Some(command)
}
