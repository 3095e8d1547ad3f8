//! Error types for dice resolution.

/// Errors that can occur while handling a roll request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A pool size, test value or bonus die fell outside its allowed bounds.
    ///
    /// The message is the rejection text shown to the player.
    #[error("{message}")]
    InputRange {
        /// Which parameter was rejected.
        parameter: &'static str,
        /// The value supplied by the caller.
        value: i64,
        /// Human-readable rejection.
        message: &'static str,
    },

    /// A chat line named a command that does not exist.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required positional argument was not supplied.
    #[error("missing argument: <{0}>")]
    MissingArgument(&'static str),

    /// A positional argument that must be an integer was not one.
    #[error("not a number: {0}")]
    InvalidNumber(String),
}

impl DiceError {
    /// Build an input range rejection.
    pub fn out_of_range(parameter: &'static str, value: i64, message: &'static str) -> Self {
        Self::InputRange {
            parameter,
            value,
            message,
        }
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
