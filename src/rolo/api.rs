//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! all directory operations, regardless of the UI driving them.
//!
//! [`ContactsApi`] owns the in-memory [`Directory`] for the session and
//! the store behind it. The store is touched exactly twice: [`open`]
//! loads the saved directory (or starts fresh when there is none), and
//! [`save`] writes the snapshot back at shutdown. Everything in between
//! is pure in-memory work dispatched to `commands/*`.
//!
//! Generic over [`DirectoryStore`], so tests run against
//! `InMemoryStore` without touching the filesystem.
//!
//! [`open`]: ContactsApi::open
//! [`save`]: ContactsApi::save

use chrono::NaiveDate;

use crate::commands::{self, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DirectoryStore;

#[derive(Debug, Clone, Copy)]
struct Pager {
    page_size: usize,
    next_page: usize,
}

pub struct ContactsApi<S: DirectoryStore> {
    store: S,
    directory: Directory,
    had_prior_data: bool,
    pager: Option<Pager>,
}

impl<S: DirectoryStore> ContactsApi<S> {
    /// Loads the saved directory from `store`, or starts empty when the
    /// store has no prior data.
    pub fn open(store: S) -> Result<Self> {
        let loaded = store.load()?;
        Ok(Self {
            store,
            directory: loaded.directory,
            had_prior_data: loaded.existed,
            pager: None,
        })
    }

    pub fn had_prior_data(&self) -> bool {
        self.had_prior_data
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Persists the full directory snapshot.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.directory)
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.directory, name, phone)
    }

    pub fn change(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.directory, name, phone)
    }

    pub fn delete_phone(&mut self, name: &str, index: usize) -> Result<CmdResult> {
        commands::delete_phone::run(&mut self.directory, name, index)
    }

    pub fn lookup_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::run(&self.directory, name)
    }

    pub fn set_birthday(&mut self, name: &str, raw_date: &str) -> Result<CmdResult> {
        commands::birthday::set(&mut self.directory, name, raw_date)
    }

    pub fn days_until_birthday(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::days_until(&self.directory, name, today)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.directory, term)
    }

    pub fn remove(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.directory, name)
    }

    /// Returns the next page of the listing. Successive calls with the
    /// same page size walk forward; a different page size, or passing
    /// the last page, starts over from the first record.
    pub fn list_page(&mut self, page_size: usize) -> Result<CmdResult> {
        let next_page = match self.pager {
            Some(pager) if pager.page_size == page_size => pager.next_page,
            _ => 0,
        };

        let result = commands::list::run(&self.directory, page_size, next_page)?;
        if result.more_pages {
            self.pager = Some(Pager {
                page_size,
                next_page: next_page + 1,
            });
        } else {
            self.pager = None;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DirectoryFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with_contacts(count: usize) -> ContactsApi<InMemoryStore> {
        let fixture = DirectoryFixture::new().with_contacts(count);
        ContactsApi::open(InMemoryStore::with_snapshot(fixture.directory)).unwrap()
    }

    #[test]
    fn open_reports_whether_prior_data_existed() {
        let api = ContactsApi::open(InMemoryStore::new()).unwrap();
        assert!(!api.had_prior_data());
        assert!(api.directory().is_empty());

        let api = api_with_contacts(2);
        assert!(api.had_prior_data());
        assert_eq!(api.directory().len(), 2);
    }

    #[test]
    fn operations_flow_through_to_the_directory() {
        let mut api = ContactsApi::open(InMemoryStore::new()).unwrap();
        api.add("Anna", "380501111111").unwrap();
        api.add("Anna", "380502222222").unwrap();
        api.set_birthday("Anna", "05-07-1990").unwrap();

        let result = api.lookup_phones("Anna").unwrap();
        assert_eq!(result.phones.len(), 2);

        api.delete_phone("Anna", 1).unwrap();
        assert_eq!(api.directory().get("Anna").unwrap().phones().len(), 1);

        api.remove("Anna").unwrap();
        assert!(api.directory().is_empty());
    }

    #[test]
    fn list_page_walks_successive_pages_then_restarts() {
        let mut api = api_with_contacts(5);

        let first = api.list_page(2).unwrap();
        let second = api.list_page(2).unwrap();
        let third = api.list_page(2).unwrap();
        assert_eq!(first.listed.len(), 2);
        assert_eq!(second.listed.len(), 2);
        assert_eq!(third.listed.len(), 1);
        assert!(!third.more_pages);

        // Past the last page the cursor resets to the beginning.
        let again = api.list_page(2).unwrap();
        assert_eq!(again.listed[0].name(), first.listed[0].name());
    }

    #[test]
    fn changing_the_page_size_restarts_the_listing() {
        let mut api = api_with_contacts(5);
        api.list_page(2).unwrap();

        let result = api.list_page(3).unwrap();
        assert_eq!(result.listed.len(), 3);
        assert_eq!(result.listed[0].name(), "Contact 01");
    }

    #[test]
    fn save_writes_the_snapshot_to_the_store() {
        let mut api = ContactsApi::open(InMemoryStore::new()).unwrap();
        api.add("Anna", "380501111111").unwrap();
        api.save().unwrap();

        let snapshot = api.store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
