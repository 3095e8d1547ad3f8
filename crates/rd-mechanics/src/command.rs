//! Chat command parsing.
//!
//! A command line is a command word followed by positional arguments.
//! Integers are taken in order while they parse; the first word that is
//! not an integer starts the free-text note. Integers too large for an
//! `i64` saturate, so they reach the range checks instead of being
//! mistaken for notes.
//!
//! ```text
//! ore  <dice> [<call>] [<expert>] [<note>]
//! owod <pool> [<difficulty>] [<note>]
//! dh   <test> [semi|auto] [<note>]
//! ```

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::systems::{DhRequest, OreRequest, OwodRequest};

/// Usage text listing every command.
pub const HELP: &str = "\
Commands:
  ore <dice> [<call>] [<expert>] [<note>]   One-Roll Engine: roll 1-10 d10s, report matches
  owod <pool> [<difficulty=6>] [<note>]     World of Darkness: roll 1-20 d10s, count successes
  dh <test> [semi|auto] [<note>]            Dark Heresy: roll d100 against a test of 1-300
  help                                      Show this list";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One-Roll Engine roll.
    Ore(OreRequest),
    /// Old World of Darkness roll.
    Owod(OwodRequest),
    /// Dark Heresy test.
    Dh(DhRequest),
    /// List the commands.
    Help,
}

impl Command {
    /// Parse a chat line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> DiceResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = split_word(line);
        let mut args = Args { rest };

        let command = match word.to_lowercase().as_str() {
            "ore" => {
                let dice = args.required_int("dice")?;
                Self::Ore(OreRequest {
                    dice,
                    call: args.optional_int(),
                    expert: args.optional_int(),
                    note: args.remainder(),
                })
            }
            "owod" => {
                let pool = args.required_int("pool")?;
                Self::Owod(OwodRequest {
                    pool,
                    difficulty: args.optional_int(),
                    note: args.remainder(),
                })
            }
            "dh" => {
                let test = args.required_int("test")?;
                Self::Dh(DhRequest::from_rest(test, args.remainder().as_deref()))
            }
            "help" => Self::Help,
            other => return Err(DiceError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// A reply to send back to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The reply line.
    pub text: String,
    /// Narrate the reply as the player's action instead of stating it.
    pub action: bool,
}

impl Reply {
    /// A plain statement.
    pub fn statement(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: false,
        }
    }

    /// A narrated action.
    pub fn action(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: true,
        }
    }
}

impl Reply {
    /// Render the reply as it appears in a channel: actions are shown as
    /// `* {actor} {text}`.
    pub fn render(&self, actor: &str) -> String {
        if self.action {
            format!("* {actor} {}", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

struct Args<'a> {
    rest: &'a str,
}

impl Args<'_> {
    fn required_int(&mut self, name: &'static str) -> DiceResult<i64> {
        let (word, rest) = split_word(self.rest);
        if word.is_empty() {
            return Err(DiceError::MissingArgument(name));
        }
        let value = parse_int(word)
            .ok_or_else(|| DiceError::InvalidNumber(word.to_string()))?;
        self.rest = rest;
        Ok(value)
    }

    fn optional_int(&mut self) -> Option<i64> {
        let (word, rest) = split_word(self.rest);
        let value = parse_int(word)?;
        self.rest = rest;
        Some(value)
    }

    fn remainder(&self) -> Option<String> {
        let rest = self.rest.trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}

fn parse_int(word: &str) -> Option<i64> {
    match word.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    s.split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim_start()))
        .unwrap_or((s, ""))
}
