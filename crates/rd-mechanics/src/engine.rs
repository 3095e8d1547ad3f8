//! Request dispatch.
//!
//! `Engine` owns the random source and the configuration; each call
//! validates one request, rolls it and formats the reply. Nothing else
//! carries over between calls.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::command::{Command, HELP, Reply};
use crate::config::EngineConfig;
use crate::dice::{RngRoller, Roller};
use crate::error::DiceResult;
use crate::systems::dark_heresy::{self, DhRequest, DhRoll};
use crate::systems::ore::{self, OreRequest, OreRoll};
use crate::systems::owod::{self, OwodRequest, OwodRoll};

/// Rolls and formats commands for one channel.
#[derive(Debug)]
pub struct Engine<R = RngRoller<StdRng>> {
    config: EngineConfig,
    roller: R,
}

impl Engine {
    /// Create an engine backed by `StdRng`, seeded from the config when
    /// a seed is set.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_roller(config, RngRoller::new(rng))
    }
}

impl<R: Roller> Engine<R> {
    /// Create an engine with a specific random source.
    pub fn with_roller(config: EngineConfig, roller: R) -> Self {
        Self { config, roller }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Roll an ORE pool.
    pub fn ore(&mut self, request: &OreRequest) -> DiceResult<OreRoll> {
        ore::roll_ore(request, &mut self.roller)
    }

    /// Roll an OWoD pool.
    pub fn owod(&mut self, request: &OwodRequest) -> DiceResult<OwodRoll> {
        owod::roll_owod(request, self.config.owod_default_difficulty, &mut self.roller)
    }

    /// Roll a Dark Heresy test for the configured actor.
    pub fn dh(&mut self, request: &DhRequest) -> DiceResult<DhRoll> {
        dark_heresy::roll_dh(request, &self.config.actor, &mut self.roller)
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: &Command) -> DiceResult<Reply> {
        let reply = match command {
            Command::Ore(request) => Reply::statement(self.ore(request)?.to_string()),
            Command::Owod(request) => {
                let roll = self.owod(request)?;
                if roll.is_action() {
                    Reply::action(roll.to_string())
                } else {
                    Reply::statement(roll.to_string())
                }
            }
            Command::Dh(request) => Reply::statement(self.dh(request)?.to_string()),
            Command::Help => Reply::statement(HELP),
        };
        Ok(reply)
    }

    /// Parse and run a chat line. Returns `Ok(None)` for a blank line.
    pub fn process(&mut self, line: &str) -> DiceResult<Option<Reply>> {
        let Some(command) = Command::parse(line)? else {
            return Ok(None);
        };
        debug!(?command, "executing");
        self.execute(&command).map(Some).inspect_err(|e| {
            debug!(error = %e, "rejected");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedRoller;
    use crate::error::DiceError;

    fn engine(values: &[u32]) -> Engine<FixedRoller> {
        let config = EngineConfig::default().with_actor("Luna");
        Engine::with_roller(config, FixedRoller::new(values.iter().copied()))
    }

    fn reply(engine: &mut Engine<FixedRoller>, line: &str) -> Reply {
        engine.process(line).unwrap().unwrap()
    }

    #[test]
    fn ore_reply() {
        let mut engine = engine(&[3, 3, 3, 7, 7]);
        let r = reply(&mut engine, "ore 5");
        assert_eq!(r, Reply::statement("3x3, 2x7: [3, 3, 3, 7, 7]"));
    }

    #[test]
    fn owod_reply_is_an_action() {
        let mut engine = engine(&[3, 1, 3]);
        let r = reply(&mut engine, "owod 3 6 pick the lock");
        assert_eq!(r, Reply::action("rolls 1, 3, 3 to pick the lock. (botch!)"));
    }

    #[test]
    fn owod_special_cases_are_statements() {
        let mut engine = engine(&[5]);
        let r = reply(&mut engine, "owod 4 1");
        assert!(!r.action);
        assert!(r.text.ends_with("succeed 4 times."));
    }

    #[test]
    fn configured_owod_difficulty() {
        let config = EngineConfig::default().with_owod_difficulty(8);
        let mut engine = Engine::with_roller(config, FixedRoller::new([7, 8]));
        let r = engine.process("owod 2").unwrap().unwrap();
        assert_eq!(r.text, "rolls 7, 8 (1 success)");
    }

    #[test]
    fn dh_reply_uses_actor() {
        let mut engine = engine(&[30]);
        let r = reply(&mut engine, "dh 80 auto");
        assert_eq!(
            r.text,
            "Luna: a success by 5°! [30] (Head, Head, Arm, Body, Arm, Body x1)"
        );
    }

    #[test]
    fn help_reply() {
        let mut engine = engine(&[]);
        assert_eq!(reply(&mut engine, "help").text, HELP);
    }

    #[test]
    fn blank_line_has_no_reply() {
        let mut engine = engine(&[]);
        assert_eq!(engine.process("").unwrap(), None);
    }

    #[test]
    fn rejected_input() {
        let mut engine = engine(&[1]);
        let err = engine.process("owod 21").unwrap_err();
        assert!(matches!(err, DiceError::InputRange { .. }));
        assert_eq!(err.to_string(), "You must roll between 1 and 20 dice.");
    }

    #[test]
    fn oversized_pool_is_a_range_error() {
        let mut engine = engine(&[1]);
        let err = engine.process("owod 99999999999999999999").unwrap_err();
        assert!(matches!(err, DiceError::InputRange { .. }));
        assert_eq!(err.to_string(), "You must roll between 1 and 20 dice.");

        let err = engine.process("ore 2 99999999999999999999").unwrap_err();
        assert!(matches!(
            err,
            DiceError::InputRange {
                parameter: "call",
                ..
            }
        ));
    }

    #[test]
    fn seeded_engines_agree() {
        let config = EngineConfig::default().with_seed(7);
        let mut a = Engine::new(config.clone());
        let mut b = Engine::new(config);
        for _ in 0..5 {
            assert_eq!(
                a.process("owod 10").unwrap(),
                b.process("owod 10").unwrap()
            );
        }
    }
}
