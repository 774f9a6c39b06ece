/*!
 * Shell Commands
 * Parse one input line into a kernel command
 */

use crate::core::types::Pid;
use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(String),
    List,
    Kill(Pid),
    Schedule,
    Touch(String),
    Write { filename: String, data: String },
    Read(String),
    Ls,
    Rm(String),
    Stats,
    Help,
    Clear,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}\nType 'help' for available commands.")]
    Unknown(String),
}

impl Command {
    /// Parse `line` as `<command> [arg1] [rest of line]`
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        let Some((command, rest)) = split_token(line) else {
            return Ok(None);
        };
        let (arg1, arg2) = split_token(rest).unwrap_or(("", ""));

        let command = match command {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "clear" => Command::Clear,
            "list" => Command::List,
            "schedule" => Command::Schedule,
            "ls" => Command::Ls,
            "stats" => Command::Stats,
            "create" => Command::Create(required(arg1, "create <name>")?),
            "kill" => {
                let pid = arg1
                    .parse::<Pid>()
                    .map_err(|_| ParseError::Usage("kill <pid>"))?;
                Command::Kill(pid)
            }
            "touch" => Command::Touch(required(arg1, "touch <filename>")?),
            "write" => {
                if arg1.is_empty() || arg2.is_empty() {
                    return Err(ParseError::Usage("write <filename> <data>"));
                }
                Command::Write {
                    filename: arg1.to_string(),
                    data: arg2.to_string(),
                }
            }
            "read" => Command::Read(required(arg1, "read <filename>")?),
            "rm" => Command::Rm(required(arg1, "rm <filename>")?),
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// First whitespace-delimited token and the trimmed remainder
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], s[end..].trim())),
        None => Some((s, "")),
    }
}

fn required(arg: &str, usage: &'static str) -> Result<String, ParseError> {
    if arg.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(arg.to_string())
    }
}
