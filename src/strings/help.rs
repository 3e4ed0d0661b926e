//! # Help Text
//!
//! Help message for bot commands, displayed via `.help`.

pub const MAIN: &str = concat!(
    "**📓 CollabLog Help**\n",
    "Use: .command _args_\n",
    "\n",
    "**📝 Logs**\n",
    "* new [name]: Create a new Log\n",
    "* created: List Logs you created\n",
    "* edit [name] [text]: Overwrite a Log's text\n",
    "* read [name]: Show a Log's text\n",
    "* delete [name]: Delete a Log you created\n",
);
