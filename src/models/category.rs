use std::fmt;

/// A fixed group of selectable items.
///
/// The declaration order is the order categories appear in the form and in
/// the derived document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    Deployment,
    Additional,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Main, Category::Deployment, Category::Additional];

    /// Short key used in toggle identities and form field names.
    pub fn key(self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Deployment => "deploy",
            Category::Additional => "additional",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Section heading shown in the form and the derived document.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Main => "Main Tasks",
            Category::Deployment => "Deployment Tasks",
            Category::Additional => "Additional Tasks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The ordered item labels offered for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub category: Category,
    pub labels: Vec<String>,
}

impl CategoryDefinition {
    pub fn new<I, S>(category: Category, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// All three category definitions.
///
/// Immutable once built; every selection set is a subset of the matching
/// definition because toggles are only ever offered for these labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    main: CategoryDefinition,
    deployment: CategoryDefinition,
    additional: CategoryDefinition,
}

impl Catalog {
    pub fn new(
        main: CategoryDefinition,
        deployment: CategoryDefinition,
        additional: CategoryDefinition,
    ) -> Self {
        debug_assert_eq!(main.category, Category::Main);
        debug_assert_eq!(deployment.category, Category::Deployment);
        debug_assert_eq!(additional.category, Category::Additional);
        Self {
            main,
            deployment,
            additional,
        }
    }

    pub fn definition(&self, category: Category) -> &CategoryDefinition {
        match category {
            Category::Main => &self.main,
            Category::Deployment => &self.deployment,
            Category::Additional => &self.additional,
        }
    }

    /// Definitions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        Category::ALL.into_iter().map(|c| self.definition(c))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            CategoryDefinition::new(
                Category::Main,
                [
                    "Medical Device FDA Compliance Checker",
                    "Regulatory document summary",
                    "Patient interactive chat",
                    "Recruiting email",
                    "Query test cases",
                    "Review hallucination risk",
                    "Stakeholder sign-off",
                ],
            ),
            CategoryDefinition::new(
                Category::Deployment,
                ["Security audit", "Deploy endpoint", "Monitor post-deployment"],
            ),
            CategoryDefinition::new(
                Category::Additional,
                ["User training", "Documentation update", "Feedback collection"],
            ),
        )
    }
}
