use crate::error::{Result, RoloError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const PHONE_DIGITS: usize = 12;
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A validated phone number: exactly 12 decimal digits, no separators.
///
/// Constructed only through [`PhoneNumber::new`], so an instance never
/// holds an invalid value. Deserialization re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw))
        } else {
            Err(RoloError::InvalidPhone(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

/// A birthday, externally represented as `DD-MM-YYYY`.
///
/// Only month and day matter for the next-occurrence arithmetic; the
/// stored year is kept solely so the value round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| RoloError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar date this birthday falls on, seen from `today`.
    /// A birthday landing exactly on `today` counts as today, not next year.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let candidate = self.on_year(today.year());
        if candidate < today {
            self.on_year(today.year() + 1)
        } else {
            candidate
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    // Feb 29 birthdays fall on Mar 1 in non-leap years.
    fn on_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 always exists"))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One contact: a name, an ordered list of phones, an optional birthday.
///
/// The name is the directory key and cannot change after construction;
/// phones and birthday are edited through the methods below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>, phone: Option<PhoneNumber>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoloError::EmptyInput("name"));
        }
        Ok(Self {
            name,
            phones: phone.into_iter().collect(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone. Duplicates are allowed; insertion order is kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    pub fn replace_phone(&mut self, phone: PhoneNumber, index: usize) -> Result<()> {
        let len = self.phones.len();
        match self.phones.get_mut(index) {
            Some(slot) => {
                *slot = phone;
                Ok(())
            }
            None => Err(RoloError::PhoneIndexOutOfRange { index, len }),
        }
    }

    pub fn remove_phone(&mut self, index: usize) -> Result<PhoneNumber> {
        if index >= self.phones.len() {
            return Err(RoloError::PhoneIndexOutOfRange {
                index,
                len: self.phones.len(),
            });
        }
        Ok(self.phones.remove(index))
    }

    /// Sets the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<String> = self.phones.iter().map(|p| format!("+{}", p)).collect();
        write!(f, "{}: {}", self.name, phones.join(", "))?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday {}", birthday)?;
        }
        Ok(())
    }
}
