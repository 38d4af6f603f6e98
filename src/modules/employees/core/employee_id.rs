// Employee identifier in the document store's native format: 12 bytes, written as 24 hex chars.
//
// Path parameters are parsed here before any store call, so a malformed id never reaches
// an adapter. Adapters convert to their own key type through `bytes` / `from_bytes`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const EMPLOYEE_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEmployeeIdError {
    #[error("employee id must be 24 hex digits, got {length} bytes")]
    InvalidLength { length: usize },

    #[error("employee id has invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId([u8; EMPLOYEE_ID_LEN]);

impl EmployeeId {
    pub const fn from_bytes(bytes: [u8; EMPLOYEE_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; EMPLOYEE_ID_LEN] {
        self.0
    }

    pub fn parse(input: &str) -> Result<Self, ParseEmployeeIdError> {
        if input.len() != EMPLOYEE_ID_LEN * 2 {
            return Err(ParseEmployeeIdError::InvalidLength {
                length: input.len(),
            });
        }

        let mut bytes = [0u8; EMPLOYEE_ID_LEN];
        let mut high = 0u8;
        for (index, character) in input.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(ParseEmployeeIdError::InvalidCharacter { character, index })?
                as u8;
            if index % 2 == 0 {
                high = nibble;
            } else {
                bytes[index / 2] = (high << 4) | nibble;
            }
        }
        Ok(Self(bytes))
    }
}

impl FromStr for EmployeeId {
    type Err = ParseEmployeeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for EmployeeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
