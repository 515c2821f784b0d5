//! Direction qualifier for range filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Whether a range filter selects values above or below its operand.
///
/// # Examples
///
/// ```
/// use punk_api_rs::beers::Condition;
///
/// assert_eq!(Condition::Greater.literal(), "gt");
/// assert_eq!("lt".parse::<Condition>().unwrap(), Condition::Lower);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Strictly greater than the operand.
    #[serde(rename = "gt")]
    Greater,
    /// Strictly lower than the operand.
    #[serde(rename = "lt")]
    Lower,
}

impl Condition {
    /// All conditions, in declaration order.
    pub const ALL: [Condition; 2] = [Condition::Greater, Condition::Lower];

    /// Returns the suffix appended to a field name to form a query key.
    pub fn literal(self) -> &'static str {
        match self {
            Condition::Greater => "gt",
            Condition::Lower => "lt",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gt" | "greater" | ">" => Ok(Condition::Greater),
            "lt" | "lower" | "<" => Ok(Condition::Lower),
            _ => Err(Error::invalid_condition(s)),
        }
    }
}
