use serde::{Deserialize, Serialize};

use super::SelectionState;

/// Timestamp layout shared by the snapshot and the derived document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The structured record written on every save and read at cycle start.
///
/// Always overwritten in full. Fields missing from an otherwise valid record
/// read back as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    #[serde(default)]
    pub selected_main: Vec<String>,
    #[serde(default)]
    pub selected_deploy: Vec<String>,
    #[serde(default)]
    pub selected_additional: Vec<String>,
    /// Local time of the save, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub timestamp: String,
}

impl PersistedSnapshot {
    pub fn new(state: &SelectionState, timestamp: impl Into<String>) -> Self {
        Self {
            selected_main: state.main.clone(),
            selected_deploy: state.deployment.clone(),
            selected_additional: state.additional.clone(),
            timestamp: timestamp.into(),
        }
    }

    /// The recorded selections, in the order they were saved.
    pub fn selection(&self) -> SelectionState {
        SelectionState {
            main: self.selected_main.clone(),
            deployment: self.selected_deploy.clone(),
            additional: self.selected_additional.clone(),
        }
    }
}
