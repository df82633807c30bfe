use super::{DirectoryStore, Loaded};
use crate::directory::Directory;
use crate::error::Result;

/// In-memory store for testing. Does NOT persist across processes.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Directory>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that behaves as if `directory` had been saved earlier.
    pub fn with_snapshot(directory: Directory) -> Self {
        Self {
            snapshot: Some(directory),
        }
    }

    pub fn snapshot(&self) -> Option<&Directory> {
        self.snapshot.as_ref()
    }
}

impl DirectoryStore for InMemoryStore {
    fn load(&self) -> Result<Loaded> {
        match &self.snapshot {
            Some(directory) => Ok(Loaded {
                directory: directory.clone(),
                existed: true,
            }),
            None => Ok(Loaded {
                directory: Directory::new(),
                existed: false,
            }),
        }
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.snapshot = Some(directory.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::directory::Directory;
    use crate::model::{Birthday, PhoneNumber, Record};

    #[derive(Default)]
    pub struct DirectoryFixture {
        pub directory: Directory,
    }

    impl DirectoryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let phone = PhoneNumber::new(phone).unwrap();
            self.directory
                .add_record(Record::new(name, Some(phone)).unwrap());
            self
        }

        pub fn with_birthday(mut self, name: &str, raw_date: &str) -> Self {
            let record = self
                .directory
                .get_mut(name)
                .expect("fixture contact must exist before a birthday is set");
            record.set_birthday(Birthday::parse(raw_date).unwrap());
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Contact {:02}", i + 1);
                let phone = format!("38050000{:04}", i + 1);
                self = self.with_contact(&name, &phone);
            }
            self
        }
    }
}
