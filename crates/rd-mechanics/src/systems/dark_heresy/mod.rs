//! Dark Heresy percentile tests.
//!
//! Roll a d100 at or under the test value to succeed. Every full 10
//! points of margin is a degree of success (or failure). A roll of 100
//! is always a critical failure; otherwise ranged attacks jam on 96 or
//! more, and a successful burst spreads extra hits over the
//! target using the table in [`location`].

pub mod location;

pub use location::{Hit, Location, Zone};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{Die, Roller};
use crate::error::{DiceError, DiceResult};
use crate::format::{clean_note, degrees_suffix, parenthesized};

/// Highest test value the `dh` command accepts.
pub const MAX_TEST: i64 = 300;

/// Ranged attacks jam at or above this roll.
pub const JAM_THRESHOLD: u32 = 96;

/// The kind of attack being rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    /// Semi-automatic fire: one extra hit per two degrees of success.
    Semi,
    /// Fully automatic fire: one extra hit per degree of success.
    Auto,
}

impl AttackKind {
    /// Parse an attack kind from a command word.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "semi" => Some(Self::Semi),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Whether this is a ranged fire mode. Every current kind is.
    pub fn is_ranged(self) -> bool {
        matches!(self, Self::Semi | Self::Auto)
    }

    /// Extra hits earned by `degrees` of success.
    pub fn extra_hits(self, degrees: u32) -> u32 {
        match self {
            Self::Semi => degrees / 2,
            Self::Auto => degrees,
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Semi => write!(f, "semi"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// The result of a Dark Heresy test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// A ranged weapon jammed.
    Jam,
    /// A roll of 100.
    CriticalFailure,
    /// Rolled at or under the test value.
    Success {
        /// Full tens of margin.
        degrees: u32,
        /// Hits landed, when the test was a ranged attack.
        hits: Vec<Hit>,
    },
    /// Rolled over the test value.
    Failure {
        /// Full tens of margin.
        degrees: u32,
    },
}

impl std::fmt::Display for HitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jam => write!(f, "your weapon jams!"),
            Self::CriticalFailure => write!(f, "a critical failure!"),
            Self::Success { degrees, .. } => write!(f, "a success{}!", degrees_suffix(*degrees)),
            Self::Failure { degrees } => write!(f, "unsuccessful{}.", degrees_suffix(*degrees)),
        }
    }
}

/// Resolve a d100 roll against a test value.
pub fn resolve(test: u32, roll: u32, kind: Option<AttackKind>) -> HitOutcome {
    let ranged = kind.filter(|k| k.is_ranged());
    if roll == Die::D100.sides() {
        return HitOutcome::CriticalFailure;
    }
    if roll >= JAM_THRESHOLD && ranged.is_some() {
        return HitOutcome::Jam;
    }
    if roll <= test {
        let degrees = (test - roll) / 10;
        let hits = ranged
            .map(|k| location::hits(roll, k.extra_hits(degrees)))
            .unwrap_or_default();
        HitOutcome::Success { degrees, hits }
    } else {
        HitOutcome::Failure {
            degrees: (roll - test) / 10,
        }
    }
}

/// Parameters of a `dh` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhRequest {
    /// The test value to roll under.
    pub test: i64,
    /// Attack kind, if this is an attack.
    pub kind: Option<AttackKind>,
    /// Free-text note.
    pub note: Option<String>,
}

impl DhRequest {
    /// A plain test.
    pub fn new(test: i64) -> Self {
        Self {
            test,
            ..Self::default()
        }
    }

    /// Build a request from the text following the test value.
    ///
    /// A leading `semi` or `auto` word sets the attack kind; whatever
    /// follows is the note.
    pub fn from_rest(test: i64, rest: Option<&str>) -> Self {
        let rest = rest.map(str::trim).unwrap_or("");
        let (first, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match AttackKind::parse(first) {
            Some(kind) => Self {
                test,
                kind: Some(kind),
                note: clean_note(Some(tail)),
            },
            None => Self {
                test,
                kind: None,
                note: clean_note(Some(rest)),
            },
        }
    }

    /// Set the attack kind.
    pub fn with_kind(mut self, kind: AttackKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A resolved Dark Heresy test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhRoll {
    /// Who rolled.
    pub actor: String,
    /// The test value.
    pub test: u32,
    /// The d100 result.
    pub roll: u32,
    /// Attack kind, if any.
    pub kind: Option<AttackKind>,
    /// What happened.
    pub outcome: HitOutcome,
    /// Free-text note.
    pub note: Option<String>,
}

impl std::fmt::Display for DhRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.actor, self.outcome, self.roll)?;
        if let HitOutcome::Success { hits, .. } = &self.outcome {
            write!(f, "{}", parenthesized(hits.iter().map(Hit::to_string)))?;
        }
        write!(f, "{}", parenthesized(self.note.iter()))
    }
}

/// Validate a `dh` request and roll it.
pub fn roll_dh(request: &DhRequest, actor: &str, roller: &mut impl Roller) -> DiceResult<DhRoll> {
    if !(1..=MAX_TEST).contains(&request.test) {
        return Err(DiceError::out_of_range(
            "test",
            request.test,
            "Is that really necessary?",
        ));
    }
    let test = request.test as u32;
    let roll = roller.roll_die(Die::D100.sides());
    let outcome = resolve(test, roll, request.kind);
    debug!(test, roll, kind = ?request.kind, ?outcome, "dh roll");
    Ok(DhRoll {
        actor: actor.to_string(),
        test,
        roll,
        kind: request.kind,
        outcome,
        note: clean_note(request.note.as_deref()),
    })
}
