//! The selection store: load prior selections, collect the current ones,
//! and persist them on an explicit save.
//!
//! Each interaction cycle is a single pass: [`SelectionStore::load`], then
//! [`SelectionStore::collect`], then optionally [`SelectionStore::save`].
//! Writes are plain overwrites with no locking or temp-file rename, so two
//! processes saving into the same root race with last-writer-wins.

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::config::AppConfig;
use crate::document::render_document;
use crate::models::*;

pub use error::{Result, StoreError};

/// Outcome of a completed save: both files have been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub snapshot: PersistedSnapshot,
    pub snapshot_path: PathBuf,
    pub document_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SelectionStore {
    config: AppConfig,
}

impl SelectionStore {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    /// Read the last saved snapshot.
    ///
    /// Returns `Ok(None)` when the file is absent or cannot be read. Content
    /// that is not a valid snapshot, including bytes that are not UTF-8, is a
    /// [`StoreError::Malformed`] fault;
    /// valid JSON that lacks some fields reads those fields as empty.
    pub fn load_snapshot(&self) -> Result<Option<PersistedSnapshot>> {
        let path = &self.config.storage.snapshot_path;

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}, starting empty", path.display());
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!("Snapshot at {} unreadable, starting empty: {}", path.display(), e);
                return Ok(None);
            }
        };

        let snapshot = serde_json::from_slice(&content).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;

        Ok(Some(snapshot))
    }

    /// Start an interaction cycle: the prior selections used as checkbox defaults.
    pub fn load(&self) -> Result<PriorSelections> {
        let prior = self
            .load_snapshot()?
            .map(|snapshot| PriorSelections::from(&snapshot))
            .unwrap_or_else(PriorSelections::empty);

        tracing::debug!(
            main = prior.get(Category::Main).len(),
            deploy = prior.get(Category::Deployment).len(),
            additional = prior.get(Category::Additional).len(),
            "Loaded prior selections"
        );
        Ok(prior)
    }

    /// Build the current selection from the UI's toggles.
    ///
    /// Every catalog label gets a toggle whose default is its membership in
    /// `prior`; the selection is exactly the labels whose toggle reports
    /// checked, in catalog order. Prior labels outside the catalog are dropped.
    pub fn collect(&self, prior: &PriorSelections, mut toggles: impl ToggleControls) -> SelectionState {
        let mut selection = SelectionState::default();

        for definition in self.catalog().iter() {
            let category = definition.category;
            let checked = selection.get_mut(category);
            for label in &definition.labels {
                let key = ToggleKey::new(category, label.as_str());
                if toggles.toggle(&key, prior.contains(category, label)) {
                    checked.push(label.clone());
                }
            }
        }

        selection
    }

    /// Persist `selection` stamped with the current local time.
    pub fn save(&self, selection: &SelectionState) -> Result<SaveReceipt> {
        self.save_at(selection, Local::now().naive_local())
    }

    /// Persist `selection` stamped with `at`.
    ///
    /// Writes the derived document, then the snapshot, each replacing any
    /// previous file. A failed write aborts the save without rolling back a
    /// file already written.
    pub fn save_at(&self, selection: &SelectionState, at: NaiveDateTime) -> Result<SaveReceipt> {
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        let storage = &self.config.storage;

        let document = render_document(
            selection,
            &self.config.links,
            &self.config.document,
            &timestamp,
        );
        write_file(&storage.document_path, &document)?;

        let snapshot = PersistedSnapshot::new(selection, timestamp);
        let json = serde_json::to_string_pretty(&snapshot)?;
        write_file(&storage.snapshot_path, &json)?;

        tracing::info!(
            main = snapshot.selected_main.len(),
            deploy = snapshot.selected_deploy.len(),
            additional = snapshot.selected_additional.len(),
            timestamp = %snapshot.timestamp,
            "Saved selections to {} and {}",
            storage.snapshot_path.display(),
            storage.document_path.display()
        );

        Ok(SaveReceipt {
            snapshot,
            snapshot_path: storage.snapshot_path.clone(),
            document_path: storage.document_path.clone(),
        })
    }
}

/// Overwrite `path`, creating its parent directory first if needed.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
