//! Catalog of predefined technologies, features and deployment platforms.
//!
//! The catalog is defined in `catalog.toml` and embedded in the binary at
//! compile time. It only describes what is offered up front; specs may
//! contain any custom entry.

use serde::{Deserialize, Serialize};

use crate::spec::{Category, ProjectSpec};

/// Predefined technologies, one list per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyLists {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
}

/// The full set of predefined options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub technologies: TechnologyLists,
    pub features: Vec<String>,
    /// Deployment platform tags (e.g. `github_pages`).
    pub platforms: Vec<String>,
}

/// The embedded catalog TOML.
static CATALOG_TOML: &str = include_str!("catalog.toml");

/// Load the embedded catalog.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. The `load_catalog_is_nonempty`
/// test covers it.
pub fn load_catalog() -> Catalog {
    toml::from_str(CATALOG_TOML).expect("embedded catalog.toml is invalid")
}

/// Selections in a spec that are not part of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomEntries {
    pub technologies: Vec<(Category, String)>,
    pub features: Vec<String>,
    pub platform: Option<String>,
}

impl CustomEntries {
    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty() && self.features.is_empty() && self.platform.is_none()
    }
}

impl Catalog {
    /// Predefined technologies for `category`.
    pub fn technologies(&self, category: Category) -> &[String] {
        match category {
            Category::Frontend => &self.technologies.frontend,
            Category::Backend => &self.technologies.backend,
            Category::Database => &self.technologies.database,
            Category::Tools => &self.technologies.tools,
        }
    }

    pub fn is_known_technology(&self, category: Category, name: &str) -> bool {
        self.technologies(category).iter().any(|t| t == name)
    }

    pub fn is_known_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    pub fn is_known_platform(&self, tag: &str) -> bool {
        self.platforms.iter().any(|p| p == tag)
    }

    /// Collect the spec's selections that were entered as custom values.
    pub fn custom_entries(&self, spec: &ProjectSpec) -> CustomEntries {
        let mut custom = CustomEntries::default();
        for category in Category::ALL {
            for tech in spec.tech_stack.get(category) {
                if !self.is_known_technology(category, tech) {
                    custom.technologies.push((category, tech.clone()));
                }
            }
        }
        custom.features = spec
            .features
            .iter()
            .filter(|f| !self.is_known_feature(f))
            .cloned()
            .collect();
        if !self.is_known_platform(&spec.deployment_platform) {
            custom.platform = Some(spec.deployment_platform.clone());
        }
        custom
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
