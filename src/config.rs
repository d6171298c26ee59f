//! Named configuration for storage locations, links and document literals.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::Catalog;

const JSON_DIR: &str = "json";
const SNAPSHOT_FILE: &str = "selected_agents.json";
const INTAKE_DIR: &str = "intake";
const DOCUMENT_FILE: &str = "selected_agents.mdx";

/// Port the checklist UI is served on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8501;

/// Where the snapshot and the derived document live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Full path of the structured record (`json/selected_agents.json`).
    pub snapshot_path: PathBuf,
    /// Full path of the derived document (`intake/selected_agents.mdx`).
    pub document_path: PathBuf,
}

impl StorageConfig {
    /// Default layout resolved against `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            snapshot_path: root.join(JSON_DIR).join(SNAPSHOT_FILE),
            document_path: root.join(INTAKE_DIR).join(DOCUMENT_FILE),
        }
    }
}

/// Main-category labels that render as hyperlinks in the derived document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable(HashMap<String, String>);

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.0.insert(label.into(), url.into());
        self
    }

    pub fn url_for(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fixed task links shipped with the checklist.
    pub fn builtin() -> Self {
        const WRITER_TEMPLATE: &str =
            "https://app.writer.com/organization/923431/team/838940/document/1?mode=coWrite&currentTemplateId=";
        Self::new()
            .with(
                "Medical Device FDA Compliance Checker",
                format!("{WRITER_TEMPLATE}8b8089bb-03d6-453a-b9b8-dbb9fed5db93"),
            )
            .with(
                "Regulatory document summary",
                format!("{WRITER_TEMPLATE}8c963413-d722-4104-b5f3-bb10cb6236bd"),
            )
            .with("Patient interactive chat", "http://127.0.0.1:3005/")
            .with(
                "Recruiting email",
                format!("{WRITER_TEMPLATE}373678cc-8c08-468b-aff9-a8e09b2807aa"),
            )
    }
}

/// Fixed literals of the derived document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Address of the checklist UI, linked from the intro line.
    pub app_url: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Selected Agents".to_string(),
            description: "A checklist of selected agents".to_string(),
            icon: "book".to_string(),
            app_url: format!("http://localhost:{DEFAULT_PORT}"),
        }
    }
}

/// Everything the selection store is constructed from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: Catalog,
    pub links: LinkTable,
    pub storage: StorageConfig,
    pub document: DocumentConfig,
}

impl AppConfig {
    /// Built-in catalog, links and document literals, with storage under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        Self {
            catalog: Catalog::default(),
            links: LinkTable::builtin(),
            storage: StorageConfig::under(root),
            document: DocumentConfig::default(),
        }
    }

    /// Same defaults, with storage under the current working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::under(std::env::current_dir()?))
    }

    /// Point the document's return link at the UI actually being served.
    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.document.app_url = url.into();
        self
    }
}
