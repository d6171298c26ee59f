use std::collections::HashMap;
use std::fmt;

use super::Category;

/// Stable identity of one checkbox: its category plus its label.
///
/// Rendered as `<category-key>:<label>`, e.g. `main:Recruiting email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleKey {
    pub category: Category,
    pub label: String,
}

impl ToggleKey {
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
        }
    }

    /// Parse a rendered key. Returns `None` for unknown category keys.
    pub fn parse(s: &str) -> Option<Self> {
        let (category, label) = s.split_once(':')?;
        Some(Self::new(Category::from_key(category)?, label))
    }
}

impl fmt::Display for ToggleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.key(), self.label)
    }
}

/// The checkbox capability a UI toolkit provides.
///
/// For each offered item the store asks for the toggle's current value,
/// passing the default it should start from when the user has not touched
/// it. Implementations decide where the current value comes from (a form
/// submission, a widget tree, a test fixture).
pub trait ToggleControls {
    fn toggle(&mut self, key: &ToggleKey, default: bool) -> bool;
}

/// Toggles nobody has touched: every checkbox reports its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untouched;

impl ToggleControls for Untouched {
    fn toggle(&mut self, _key: &ToggleKey, default: bool) -> bool {
        default
    }
}

/// Explicit per-key values; keys without an entry report their default.
#[derive(Debug, Clone, Default)]
pub struct Overrides(HashMap<ToggleKey, bool>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, category: Category, label: impl Into<String>, checked: bool) -> Self {
        self.0.insert(ToggleKey::new(category, label), checked);
        self
    }
}

impl ToggleControls for Overrides {
    fn toggle(&mut self, key: &ToggleKey, default: bool) -> bool {
        self.0.get(key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_renders_category_prefix() {
        let key = ToggleKey::new(Category::Deployment, "Security audit");
        assert_eq!(key.to_string(), "deploy:Security audit");
    }

    #[test]
    fn key_parse_keeps_colons_in_label() {
        let key = ToggleKey::parse("additional:Note: read me").unwrap();
        assert_eq!(key.category, Category::Additional);
        assert_eq!(key.label, "Note: read me");
    }

    #[test]
    fn key_parse_rejects_unknown_category() {
        assert!(ToggleKey::parse("other:Security audit").is_none());
        assert!(ToggleKey::parse("no separator").is_none());
    }

    #[test]
    fn overrides_fall_back_to_default() {
        let mut toggles = Overrides::new().set(Category::Main, "Recruiting email", false);
        let touched = ToggleKey::new(Category::Main, "Recruiting email");
        let untouched = ToggleKey::new(Category::Main, "Query test cases");

        assert!(!toggles.toggle(&touched, true));
        assert!(toggles.toggle(&untouched, true));
        assert!(!toggles.toggle(&untouched, false));
    }
}
