//! One contact's full set of stored attributes.

use crate::error::{Result, RoloError};
use crate::field::{Birthday, Field, Name, Phone};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single contact: a name (the book's key), an ordered list of phone
/// numbers (duplicates allowed), and an optional birthday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Birthday,
}

impl Record {
    /// Create a record with a name and, optionally, an initial birthday.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self> {
        let birthday = match birthday {
            Some(value) => Birthday::new(value)?,
            None => Birthday::empty(),
        };
        Ok(Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.value()
    }

    /// Validate and append a phone number. Duplicates are allowed and
    /// insertion order is preserved.
    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Remove every phone equal to `value`. Silent no-op when none match.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.value() != Some(value));
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is validated before the list is scanned, so a bad replacement
    /// never mutates anything.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        if !Phone::is_valid(new) {
            return Err(RoloError::InvalidPhone(new.to_string()));
        }
        match self
            .phones
            .iter_mut()
            .find(|phone| phone.value() == Some(old))
        {
            Some(phone) => phone.set_value(new),
            None => Err(RoloError::PhoneNotFound(old.to_string())),
        }
    }

    /// The first phone equal to `value`, if any.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == Some(value))
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday.set_value(value)
    }

    /// Whole days until the next occurrence of the birthday, or `None` when
    /// no birthday is set. A birthday falling today yields 0.
    pub fn days_to_birthday(&self) -> Option<i64> {
        let date = self.birthday.date()?;
        Some(days_until(
            Local::now().naive_local(),
            date.month(),
            date.day(),
        ))
    }
}

fn days_until(now: NaiveDateTime, month: u32, day: u32) -> i64 {
    let mut candidate = occurrence_in(now.year(), month, day);
    // Strictly-after on the date: today's own birthday stays in this year.
    if now.date() > candidate {
        candidate = occurrence_in(now.year() + 1, month, day);
    }
    (candidate.and_time(NaiveTime::MIN) - now).num_days()
}

fn occurrence_in(year: i32, month: u32, day: u32) -> NaiveDate {
    // Feb 29 birthdays resolve to Mar 1 in non-leap years.
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("Mar 1 exists in every year")
}
