//! BV-CLI: command console for a Bloom Visualizer session
//!
//! Each input line is one command. Results are JSON objects so the console can
//! be scripted or piped into other tools.

use bv_03_session::{SessionError, VisualizerApi, VisualizerSession};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors from parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Check(String),
    Remove(String),
    Reset,
    Params { capacity: i64, hash_count: i64 },
    Positions(String),
    State,
    History,
    Entry(String),
    Replay,
    Restore(String),
    ClearHistory,
    Metrics,
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
///
/// Word arguments take the rest of the line, so words may contain spaces.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let word = |command: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument {
                command,
                expected: "a word",
            })
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add" => Command::Add(word("add")?),
        "check" => Command::Check(word("check")?),
        "remove" => Command::Remove(word("remove")?),
        "positions" => Command::Positions(word("positions")?),
        "entry" => Command::Entry(word("entry")?),
        "restore" => Command::Restore(word("restore")?),
        "reset" => Command::Reset,
        "state" => Command::State,
        "history" => Command::History,
        "replay" => Command::Replay,
        "clear-history" => Command::ClearHistory,
        "metrics" => Command::Metrics,
        "params" => {
            let mut args = rest.split_whitespace();
            let (Some(capacity), Some(hash_count)) = (args.next(), args.next()) else {
                return Err(CommandError::MissingArgument {
                    command: "params",
                    expected: "<capacity> <hash_count>",
                });
            };
            Command::Params {
                capacity: parse_number(capacity)?,
                hash_count: parse_number(hash_count)?,
            }
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_number(raw: &str) -> Result<i64, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

/// Run a command against a session and describe the outcome as JSON.
pub fn execute(session: &mut VisualizerSession, command: Command) -> Result<Value, SessionError> {
    let value = match command {
        Command::Add(word) => {
            let added = session.add_word(&word)?;
            let word = word.trim();
            let message = if added {
                format!("Word \"{}\" added to the filter.", word)
            } else {
                format!("Word \"{}\" is already in the filter.", word)
            };
            json!({
                "command": "add",
                "word": word,
                "added": added,
                "positions": session.hash_positions(word),
                "message": message,
            })
        }
        Command::Check(word) => {
            let result = session.check_word(&word)?;
            json!({
                "command": "check",
                "message": result.verdict.message(&result.word),
                "result": result,
            })
        }
        Command::Remove(word) => {
            let removed = session.remove_word(&word)?;
            let word = word.trim();
            let message = if removed {
                format!("Word \"{}\" removed from the filter.", word)
            } else {
                format!("Word \"{}\" is not in the filter.", word)
            };
            json!({
                "command": "remove",
                "word": word,
                "removed": removed,
                "message": message,
            })
        }
        Command::Reset => {
            session.reset_filter();
            json!({ "command": "reset", "state": session.snapshot() })
        }
        Command::Params {
            capacity,
            hash_count,
        } => {
            let update = session.update_params(capacity, hash_count);
            json!({ "command": "params", "update": update })
        }
        Command::Positions(word) => json!({
            "command": "positions",
            "word": word,
            "positions": session.hash_positions(&word),
        }),
        Command::State => {
            let snapshot = session.snapshot();
            json!({
                "command": "state",
                "bits": snapshot.bit_string(),
                "bits_set": snapshot.bits_set(),
                "fill_ratio": session.filter().fill_ratio(),
                "estimated_fpr": session.filter().estimated_fpr(),
                "state": snapshot,
            })
        }
        Command::History => json!({ "command": "history", "entries": session.history() }),
        Command::Entry(id) => json!({ "command": "entry", "entry": session.replay_entry(&id)? }),
        Command::Replay => json!({ "command": "replay", "entry": session.replay_last() }),
        Command::Restore(id) => {
            let state = session.restore_entry(&id)?;
            json!({ "command": "restore", "id": id, "state": state })
        }
        Command::ClearHistory => {
            session.clear_history();
            json!({ "command": "clear-history" })
        }
        Command::Metrics => json!({ "command": "metrics", "metrics": session.metrics() }),
    };

    Ok(value)
}
