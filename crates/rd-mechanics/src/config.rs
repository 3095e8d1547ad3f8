//! Configuration for a dice engine.

use crate::systems::owod::DEFAULT_DIFFICULTY;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Name that prefixes Dark Heresy replies.
    pub actor: String,
    /// Difficulty for OWoD rolls that do not give one (2-10).
    pub owod_default_difficulty: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            actor: "Player".to_string(),
            owod_default_difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the actor name. Blank names are ignored.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        let actor = actor.into();
        if !actor.trim().is_empty() {
            self.actor = actor.trim().to_string();
        }
        self
    }

    /// Set the default OWoD difficulty (clamped to 2-10).
    pub fn with_owod_difficulty(mut self, difficulty: u32) -> Self {
        self.owod_default_difficulty = difficulty.clamp(2, 10);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.actor, "Player");
        assert_eq!(cfg.owod_default_difficulty, 6);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_actor("Luna")
            .with_owod_difficulty(7);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.actor, "Luna");
        assert_eq!(cfg.owod_default_difficulty, 7);
    }

    #[test]
    fn blank_actor_is_ignored() {
        let cfg = EngineConfig::default().with_actor("  ");
        assert_eq!(cfg.actor, "Player");
    }

    #[test]
    fn difficulty_clamped() {
        let cfg = EngineConfig::default().with_owod_difficulty(1);
        assert_eq!(cfg.owod_default_difficulty, 2);
        let cfg = EngineConfig::default().with_owod_difficulty(40);
        assert_eq!(cfg.owod_default_difficulty, 10);
    }
}
