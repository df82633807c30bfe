use super::{DirectoryStore, Loaded};
use crate::directory::Directory;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File-backed store: the whole directory in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryStore for FileStore {
    fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            return Ok(Loaded {
                directory: Directory::new(),
                existed: false,
            });
        }

        let content = fs::read_to_string(&self.path)?;
        let directory: Directory = serde_json::from_str(&content)?;
        Ok(Loaded {
            directory,
            existed: true,
        })
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a temp file in the same directory, then rename over the
        // old snapshot: readers see either the old file or the new one.
        let temp_path = self.path.with_extension("json.tmp");
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, directory)?;
        writer.flush()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}
