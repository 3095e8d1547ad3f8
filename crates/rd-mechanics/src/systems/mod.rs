//! Rule sets for the supported game systems.
//!
//! - **ORE** (One-Roll Engine): repeated faces in a d10 pool form matches
//! - **OWoD** (Old World of Darkness): count d10s at or above a difficulty
//! - **Dark Heresy**: roll a d100 under a test value, with hit locations
//!   for ranged fire

pub mod dark_heresy;
pub mod ore;
pub mod owod;

pub use dark_heresy::{AttackKind, DhRequest, DhRoll, HitOutcome};
pub use ore::{MatchResult, OreRequest, OreRoll};
pub use owod::{OwodRequest, OwodResult, OwodRoll};
