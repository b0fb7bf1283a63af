//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::StateCodec;

/// Canonical string identity of a full board configuration.
///
/// Rows are separated by `/` and each cell is one character: `x` for player A,
/// `o` for player B and `.` for an empty cell. Two boards with the same
/// contents always produce the same key.
///
/// # Examples
///
/// ```
/// use noughts::types::StateKey;
///
/// // Parse from string (validates the format)
/// let key = StateKey::parse("x../.o./...").unwrap();
/// assert_eq!(key.as_str(), "x../.o./...");
///
/// assert!(StateKey::parse("x../.o").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key from a string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if the string does not decode
    /// to a rectangular board.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        StateCodec::decode_str(s)?;
        Ok(StateKey(s.to_string()))
    }

    /// Wrap an encoding produced by the codec (unchecked, for internal use).
    pub(crate) fn from_encoding(encoding: String) -> Self {
        StateKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StateKey {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StateCodec::decode_str(&value)?;
        Ok(StateKey(value))
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.0
    }
}
