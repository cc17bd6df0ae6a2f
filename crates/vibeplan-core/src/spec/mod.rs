//! Project specification: the data model and the validated input boundary.

pub mod input;
pub mod model;

pub use input::{ProjectRequest, ValidationError, parse_project_json, parse_project_toml};
pub use model::{
    Category, DEFAULT_DEPLOYMENT_PLATFORM, Difficulty, ProjectSpec, ProjectType, TechStack,
    Timeline,
};

/// Starter project spec in TOML, with every field documented.
pub const SPEC_TEMPLATE: &str = include_str!("template.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        let spec = parse_project_toml(SPEC_TEMPLATE).expect("embedded template should parse");
        assert!(!spec.title.is_empty());
        assert!(!spec.tech_stack.is_empty());
        assert!(!spec.features.is_empty());
    }
}
