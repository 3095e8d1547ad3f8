//! One-Roll Engine matching.
//!
//! Roll a pool of d10s and look for sets: every face that shows up more
//! than once is a match, reported as `{width}x{height}`. A called die or
//! an expert die is set to a chosen face and joins the pool before
//! matching.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DicePool, Die, Roller};
use crate::error::{DiceError, DiceResult};
use crate::format::{clean_note, parenthesized};

/// Largest pool the `ore` command accepts.
pub const MAX_DICE: i64 = 10;

/// A set of dice showing the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The face value shared by the set.
    pub face: u32,
    /// How many dice show it.
    pub width: u32,
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.face)
    }
}

/// All matches in a pool, ordered by face value ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult(pub Vec<Match>);

impl MatchResult {
    /// Returns true if the pool had no repeated faces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Match::to_string).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Find every face from 1 to 10 that appears more than once.
pub fn match_ore(pool: &DicePool) -> MatchResult {
    let matches = (1..=Die::D10.sides())
        .filter_map(|face| {
            let width = pool.count_of(face);
            (width > 1).then_some(Match { face, width })
        })
        .collect();
    MatchResult(matches)
}

/// Parameters of an `ore` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OreRequest {
    /// Number of d10s to roll.
    pub dice: i64,
    /// Face of a called die, if any.
    pub call: Option<i64>,
    /// Face of an expert die, if any.
    pub expert: Option<i64>,
    /// Free-text note.
    pub note: Option<String>,
}

impl OreRequest {
    /// A plain roll of `dice` d10s.
    pub fn new(dice: i64) -> Self {
        Self {
            dice,
            ..Self::default()
        }
    }

    /// Add a called die.
    pub fn with_call(mut self, face: i64) -> Self {
        self.call = Some(face);
        self
    }

    /// Add an expert die.
    pub fn with_expert(mut self, face: i64) -> Self {
        self.expert = Some(face);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    fn validate(&self) -> DiceResult<(usize, Option<u32>, Option<u32>)> {
        if !(1..=MAX_DICE).contains(&self.dice) {
            return Err(DiceError::out_of_range(
                "dice",
                self.dice,
                "You must roll between 1 and 10 dice.",
            ));
        }
        let call = bonus_face(
            self.call,
            "call",
            "They're d10s. You can't call a side that doesn't exist.",
        )?;
        let expert = bonus_face(
            self.expert,
            "expert",
            "They're d10s. An expert die can't show a side that doesn't exist.",
        )?;
        Ok((self.dice as usize, call, expert))
    }
}

fn bonus_face(
    value: Option<i64>,
    parameter: &'static str,
    message: &'static str,
) -> DiceResult<Option<u32>> {
    match value {
        None => Ok(None),
        Some(v) if (1..=i64::from(Die::D10.sides())).contains(&v) => Ok(Some(v as u32)),
        Some(v) => Err(DiceError::out_of_range(parameter, v, message)),
    }
}

/// A resolved ORE roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreRoll {
    /// The rolled dice plus any bonus dice.
    pub pool: DicePool,
    /// Matches found in the pool.
    pub matches: MatchResult,
    /// Face of the called die.
    pub call: Option<u32>,
    /// Face of the expert die.
    pub expert: Option<u32>,
    /// Free-text note.
    pub note: Option<String>,
}

impl OreRoll {
    /// Match a rolled pool, folding in the bonus dice.
    pub fn from_pool(
        rolled: DicePool,
        call: Option<u32>,
        expert: Option<u32>,
        note: Option<String>,
    ) -> Self {
        let pool = rolled.with_bonus(call.into_iter().chain(expert));
        let matches = match_ore(&pool);
        Self {
            pool,
            matches,
            call,
            expert,
            note,
        }
    }

    fn annotations(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(note) = &self.note {
            parts.push(note.clone());
        }
        if let Some(call) = self.call {
            parts.push(format!("called:{call}"));
        }
        if let Some(expert) = self.expert {
            parts.push(format!("expert:{expert}"));
        }
        parts
    }
}

impl std::fmt::Display for OreRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: [{}]{}",
            self.matches,
            self.pool,
            parenthesized(self.annotations())
        )
    }
}

/// Validate an `ore` request and roll it.
pub fn roll_ore(request: &OreRequest, roller: &mut impl Roller) -> DiceResult<OreRoll> {
    let (dice, call, expert) = request.validate()?;
    let rolled = DicePool::roll(roller, Die::D10.sides(), dice);
    let roll = OreRoll::from_pool(rolled, call, expert, clean_note(request.note.as_deref()));
    debug!(pool = %roll.pool, matches = %roll.matches, "ore roll");
    Ok(roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedRoller;

    fn pool(values: &[u32]) -> DicePool {
        DicePool::from_values(values.to_vec())
    }

    #[test]
    fn matches_are_listed_by_face() {
        assert_eq!(match_ore(&pool(&[3, 3, 3, 7, 7])).to_string(), "3x3, 2x7");
        assert_eq!(match_ore(&pool(&[7, 7, 3, 3, 3])).to_string(), "3x3, 2x7");
    }

    #[test]
    fn no_matches() {
        let result = match_ore(&pool(&[1, 2, 5, 9]));
        assert!(result.is_empty());
        assert_eq!(result.to_string(), "");
    }

    #[test]
    fn sets_of_every_width() {
        let result = match_ore(&pool(&[2, 2, 6, 6, 6, 9, 9]));
        assert_eq!(
            result.0,
            [
                Match { face: 2, width: 2 },
                Match { face: 6, width: 3 },
                Match { face: 9, width: 2 },
            ]
        );
    }

    #[test]
    fn bonus_dice_count_toward_matches() {
        let roll = OreRoll::from_pool(pool(&[4, 8]), Some(4), Some(8), None);
        assert_eq!(roll.pool.values(), &[4, 4, 8, 8]);
        assert_eq!(roll.matches.to_string(), "2x4, 2x8");
    }

    #[test]
    fn reply_with_annotations() {
        let mut roller = FixedRoller::new([7, 3, 3]);
        let request = OreRequest::new(3)
            .with_call(7)
            .with_expert(2)
            .with_note("leap the chasm");
        let roll = roll_ore(&request, &mut roller).unwrap();
        assert_eq!(
            roll.to_string(),
            "2x3, 2x7: [2, 3, 3, 7, 7] (leap the chasm, called:7, expert:2)"
        );
    }

    #[test]
    fn reply_without_annotations() {
        let mut roller = FixedRoller::new([5, 5, 1]);
        let roll = roll_ore(&OreRequest::new(3), &mut roller).unwrap();
        assert_eq!(roll.to_string(), "2x5: [1, 5, 5]");
    }

    #[test]
    fn reply_without_matches_has_empty_summary() {
        let mut roller = FixedRoller::new([4, 1]);
        let roll = roll_ore(&OreRequest::new(2), &mut roller).unwrap();
        assert!(roll.matches.is_empty());
        assert_eq!(roll.to_string(), ": [1, 4]");
        assert!(roll.to_string().starts_with(": ["));
    }

    #[test]
    fn call_only_annotation() {
        let mut roller = FixedRoller::new([9]);
        let roll = roll_ore(&OreRequest::new(1).with_call(9), &mut roller).unwrap();
        assert_eq!(roll.to_string(), "2x9: [9, 9] (called:9)");
    }

    #[test]
    fn pool_size_is_checked() {
        let mut roller = FixedRoller::new([1]);
        for dice in [0, 11, -3] {
            let err = roll_ore(&OreRequest::new(dice), &mut roller).unwrap_err();
            assert_eq!(err.to_string(), "You must roll between 1 and 10 dice.");
        }
        assert_eq!(roller.rolls_made(), 0);
    }

    #[test]
    fn called_face_must_exist() {
        let mut roller = FixedRoller::new([1]);
        let err = roll_ore(&OreRequest::new(2).with_call(11), &mut roller).unwrap_err();
        assert!(matches!(
            err,
            DiceError::InputRange {
                parameter: "call",
                value: 11,
                ..
            }
        ));
        assert_eq!(roller.rolls_made(), 0);
    }

    #[test]
    fn expert_face_must_exist() {
        let mut roller = FixedRoller::new([1]);
        let err = roll_ore(&OreRequest::new(2).with_expert(0), &mut roller).unwrap_err();
        assert!(matches!(
            err,
            DiceError::InputRange {
                parameter: "expert",
                ..
            }
        ));
    }

    #[test]
    fn formatting_is_stable() {
        let roll = OreRoll::from_pool(pool(&[6, 6, 2]), None, None, Some("brawl".into()));
        assert_eq!(roll.to_string(), roll.to_string());
        assert_eq!(roll.to_string(), "2x6: [2, 6, 6] (brawl)");
    }
}
