use crate::error::{Result, RoloError};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// The keyed collection of all contact records.
///
/// Wraps a name-ordered map and exposes only vetted operations, so the
/// invariant "every key equals its record's name" holds by construction.
/// Iteration order is lexicographic by name, which makes listing and
/// pagination deterministic and restartable.
///
/// Serialized as a plain array of records (see [`Directory::records`]);
/// the map is rebuilt on load, so a saved file cannot smuggle in a key
/// that disagrees with its record's name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Record>", try_from = "Vec<Record>")]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

/// What [`Directory::add_record`] did with the incoming record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The name was new; the record became a fresh entry.
    Added,
    /// The name existed; phones were appended and the birthday taken over
    /// if the incoming record defined one.
    Augmented,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Record-level mutable access. The name itself stays immutable, so
    /// this cannot break the key invariant.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Merge-on-add: an existing name is augmented instead of replaced.
    pub fn add_record(&mut self, record: Record) -> AddOutcome {
        match self.records.entry(record.name().to_string()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                for phone in record.phones() {
                    existing.add_phone(phone.clone());
                }
                if let Some(birthday) = record.birthday() {
                    existing.set_birthday(birthday);
                }
                AddOutcome::Augmented
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
                AddOutcome::Added
            }
        }
    }

    pub fn remove_record(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| RoloError::NotFound(name.to_string()))
    }

    /// Case-insensitive substring match on names, in directory order.
    /// No matches is an empty result, not an error.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let term = term.to_lowercase();
        self.records
            .values()
            .filter(|record| record.name().to_lowercase().contains(&term))
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// A lazy, finite iterator of pages of up to `page_size` records.
    /// The final page may be shorter; a fresh call starts over from the
    /// first record. `page_size == 0` yields no pages.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.values().collect(),
            page_size,
            offset: 0,
        }
    }
}

impl From<Directory> for Vec<Record> {
    fn from(directory: Directory) -> Self {
        directory.records.into_values().collect()
    }
}

impl TryFrom<Vec<Record>> for Directory {
    type Error = RoloError;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        let mut directory = Directory::new();
        for record in records {
            directory.add_record(record);
        }
        Ok(directory)
    }
}

pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    offset: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.offset >= self.records.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.records.len());
        let page = Page {
            records: self.records[self.offset..end].to_vec(),
        };
        self.offset = end;
        Some(page)
    }
}

/// One bounded slice of the directory, as produced by [`Directory::pages`].
pub struct Page<'a> {
    records: Vec<&'a Record>,
}

impl<'a> Page<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
