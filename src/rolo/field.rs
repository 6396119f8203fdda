//! Typed contact attributes.
//!
//! Every attribute a [`crate::record::Record`] carries is one of these small
//! value holders. The [`Field`] trait gives them a common get/set surface;
//! the specialized types ([`Phone`], [`Birthday`]) enforce their format rule
//! inside `set_value` and at construction, so an invalid value is never
//! stored.

use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Common surface for a single-value contact attribute.
///
/// Implementations that validate must reject bad input and leave the prior
/// value (or absence) unchanged.
pub trait Field {
    fn value(&self) -> Option<&str>;
    fn set_value(&mut self, value: &str) -> Result<()>;
}

/// The contact's unique key. Set once when a record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Field for Name {
    fn value(&self) -> Option<&str> {
        Some(&self.value)
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        self.value = value.to_string();
        Ok(())
    }
}

/// A phone number: exactly 10 characters, all ASCII digits.
///
/// No normalization happens here; separators are not stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    value: Option<String>,
}

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        Self::validate(value)?;
        Ok(Self {
            value: Some(value.to_string()),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Inherent mirror of [`Field::value`], so callers don't need the trait
    /// in scope just to read.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn validate(value: &str) -> Result<()> {
        if Self::is_valid(value) {
            Ok(())
        } else {
            Err(RoloError::InvalidPhone(value.to_string()))
        }
    }
}

impl Field for Phone {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        Self::validate(value)?;
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// A birthday in strict `YYYY-MM-DD` form, required to be a real calendar
/// date (month 13 fails, as does Feb 30).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    value: Option<String>,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        Self::validate(value)?;
        Ok(Self {
            value: Some(value.to_string()),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Inherent mirror of [`Field::value`].
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The parsed calendar date, when one is set.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.value.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    fn validate(value: &str) -> Result<()> {
        // Strict 4-2-2 shape; chrono alone would also accept "1990-5-1".
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-';
        if shaped && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
            Ok(())
        } else {
            Err(RoloError::InvalidBirthday(value.to_string()))
        }
    }
}

impl Field for Birthday {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        Self::validate(value)?;
        self.value = Some(value.to_string());
        Ok(())
    }
}
