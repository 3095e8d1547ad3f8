//! Old World of Darkness success counting.
//!
//! Roll a pool of d10s against a difficulty. Each die at or above the
//! difficulty is a success. No successes with at least one 1 showing is a
//! botch. Difficulties of 1 and above 10 are settled without rolling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DicePool, Die, Roller};
use crate::error::{DiceError, DiceResult};
use crate::format::clean_note;

/// Difficulty used when the caller does not give one.
pub const DEFAULT_DIFFICULTY: u32 = 6;

/// Largest pool the `owod` command accepts.
pub const MAX_DICE: i64 = 20;

const AUTOMATIC_SUCCESS: &str =
    "Somehow, against all odds, in a true show of epic talent, you manage to succeed";

const AUTOMATIC_FAILURE: &str =
    "You fail. Probably because you're too stupid to even know how many sides a d10 has.";

/// Count dice showing a face from `difficulty` through 10.
pub fn count_successes(pool: &DicePool, difficulty: u32) -> u32 {
    let faces = difficulty..=Die::D10.sides();
    pool.iter().filter(|v| faces.contains(v)).count() as u32
}

/// How a rolled OWoD pool turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwodResult {
    /// No successes and at least one die showing 1.
    Botch,
    /// No successes.
    Failure,
    /// One or more successes.
    Successes(u32),
}

impl OwodResult {
    /// Classify a rolled pool against a difficulty.
    pub fn classify(pool: &DicePool, difficulty: u32) -> Self {
        match count_successes(pool, difficulty) {
            0 if pool.contains(1) => Self::Botch,
            0 => Self::Failure,
            n => Self::Successes(n),
        }
    }
}

impl std::fmt::Display for OwodResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Botch => write!(f, "botch!"),
            Self::Failure => write!(f, "failure"),
            Self::Successes(1) => write!(f, "1 success"),
            Self::Successes(n) => write!(f, "{n} successes"),
        }
    }
}

/// Parameters of an `owod` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwodRequest {
    /// Number of d10s to roll.
    pub pool: i64,
    /// Target face; `None` or `0` means the default.
    pub difficulty: Option<i64>,
    /// Free-text note.
    pub note: Option<String>,
}

impl OwodRequest {
    /// A roll of `pool` dice at the default difficulty.
    pub fn new(pool: i64) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: i64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A resolved OWoD roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwodRoll {
    /// Difficulty 1: success without rolling.
    AutomaticSuccess {
        /// Size of the pool that would have been rolled.
        dice: u32,
    },
    /// Difficulty above 10: failure without rolling.
    AutomaticFailure,
    /// The pool was rolled and counted.
    Rolled {
        /// The dice rolled.
        pool: DicePool,
        /// Difficulty the dice were counted against.
        difficulty: u32,
        /// Classification of the pool.
        result: OwodResult,
        /// Free-text note.
        note: Option<String>,
    },
}

impl OwodRoll {
    /// Whether the reply should be narrated as the player's action.
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Rolled { .. })
    }
}

impl std::fmt::Display for OwodRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AutomaticSuccess { dice } => {
                write!(f, "{AUTOMATIC_SUCCESS}")?;
                if *dice > 1 {
                    write!(f, " {dice} times")?;
                }
                write!(f, ".")
            }
            Self::AutomaticFailure => write!(f, "{AUTOMATIC_FAILURE}"),
            Self::Rolled {
                pool, result, note, ..
            } => {
                write!(f, "rolls {pool}")?;
                if let Some(note) = note {
                    write!(f, " to {note}.")?;
                }
                write!(f, " ({result})")
            }
        }
    }
}

/// Validate an `owod` request and roll it.
///
/// `default_difficulty` applies when the request gives none (or gives 0).
pub fn roll_owod(
    request: &OwodRequest,
    default_difficulty: u32,
    roller: &mut impl Roller,
) -> DiceResult<OwodRoll> {
    if !(1..=MAX_DICE).contains(&request.pool) {
        return Err(DiceError::out_of_range(
            "pool",
            request.pool,
            "You must roll between 1 and 20 dice.",
        ));
    }
    let dice = request.pool as u32;
    let difficulty = match request.difficulty {
        None | Some(0) => default_difficulty,
        Some(d) if d < 0 => {
            return Err(DiceError::out_of_range(
                "difficulty",
                d,
                "Difficulty can't be negative.",
            ));
        }
        Some(d) => u32::try_from(d).unwrap_or(u32::MAX),
    };

    if difficulty == 1 {
        debug!(dice, "owod automatic success");
        return Ok(OwodRoll::AutomaticSuccess { dice });
    }
    if difficulty > Die::D10.sides() {
        debug!(difficulty, "owod automatic failure");
        return Ok(OwodRoll::AutomaticFailure);
    }

    let pool = DicePool::roll(roller, Die::D10.sides(), dice as usize);
    let result = OwodResult::classify(&pool, difficulty);
    debug!(%pool, difficulty, %result, "owod roll");
    Ok(OwodRoll::Rolled {
        pool,
        difficulty,
        result,
        note: clean_note(request.note.as_deref()),
    })
}
