use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical security symbol: trimmed and upper-cased.
///
/// This is the only place symbols are normalized. Bookings and lookups both
/// go through [`Symbol::parse`], so `aapl` and `AAPL` are the same key.
/// Beyond being non-blank, no ticker grammar is imposed; `^GSPC` and `BRK/B`
/// are valid symbols.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "" => Err(ValidationError::MissingArgument { field: "symbol" }),
            canonical => Ok(Self(canonical.to_uppercase())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
