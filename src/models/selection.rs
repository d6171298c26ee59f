use std::collections::HashSet;

use super::{Category, PersistedSnapshot};

/// Labels currently checked in each category, in catalog order.
///
/// Rebuilt every interaction cycle by the store's collect step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub main: Vec<String>,
    pub deployment: Vec<String>,
    pub additional: Vec<String>,
}

impl SelectionState {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Main => &self.main,
            Category::Deployment => &self.deployment,
            Category::Additional => &self.additional,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Main => &mut self.main,
            Category::Deployment => &mut self.deployment,
            Category::Additional => &mut self.additional,
        }
    }

    pub fn is_checked(&self, category: Category, label: &str) -> bool {
        self.get(category).iter().any(|l| l == label)
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.into_iter().all(|c| self.get(c).is_empty())
    }
}

/// The selections recorded by the last save, used as checkbox defaults.
///
/// Captured once at the start of an interaction cycle and passed to the
/// collect step as plain input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorSelections {
    main: HashSet<String>,
    deployment: HashSet<String>,
    additional: HashSet<String>,
}

impl PriorSelections {
    /// No prior save: every checkbox starts unchecked.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::Main => &self.main,
            Category::Deployment => &self.deployment,
            Category::Additional => &self.additional,
        }
    }

    pub fn contains(&self, category: Category, label: &str) -> bool {
        self.get(category).contains(label)
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.into_iter().all(|c| self.get(c).is_empty())
    }
}

impl From<&PersistedSnapshot> for PriorSelections {
    fn from(snapshot: &PersistedSnapshot) -> Self {
        Self {
            main: snapshot.selected_main.iter().cloned().collect(),
            deployment: snapshot.selected_deploy.iter().cloned().collect(),
            additional: snapshot.selected_additional.iter().cloned().collect(),
        }
    }
}
