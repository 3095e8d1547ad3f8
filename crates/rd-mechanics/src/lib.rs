//! Dice resolution for tabletop RPG chat commands.
//!
//! Rolls and interprets dice for three systems: the One-Roll Engine
//! (matching sets in a d10 pool), Old World of Darkness (counting d10s
//! against a difficulty) and Dark Heresy (percentile tests with
//! degrees of success and hit locations). Every command produces one
//! formatted reply line.

pub mod command;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod format;
pub mod systems;

pub use command::{Command, Reply};
pub use config::EngineConfig;
pub use dice::{DicePool, FixedRoller, RngRoller, Roller};
pub use engine::Engine;
pub use error::{DiceError, DiceResult};
pub use systems::{
    AttackKind, DhRequest, DhRoll, HitOutcome, MatchResult, OreRequest, OreRoll, OwodRequest,
    OwodResult, OwodRoll,
};
