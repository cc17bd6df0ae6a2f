use anyhow::Context;

use vibeplan_core::catalog::{Catalog, load_catalog};
use vibeplan_core::spec::Category;

/// Plain-text listing of the catalog.
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("Technologies:\n");
    for category in Category::ALL {
        out.push_str(&format!("  {category}:\n"));
        for tech in catalog.technologies(category) {
            out.push_str(&format!("    - {tech}\n"));
        }
    }

    out.push_str("\nFeatures:\n");
    for feature in &catalog.features {
        out.push_str(&format!("  - {feature}\n"));
    }

    out.push_str("\nDeployment platforms:\n");
    for platform in &catalog.platforms {
        out.push_str(&format!("  - {platform}\n"));
    }

    out
}

/// Execute `vibeplan catalog`.
pub fn run_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = load_catalog();
    if json {
        let out = serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?;
        println!("{out}");
    } else {
        print!("{}", format_catalog(&catalog));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_every_section() {
        let out = format_catalog(&load_catalog());
        assert!(out.starts_with("Technologies:\n  frontend:\n    - React\n"));
        assert!(out.contains("  tools:\n"));
        assert!(out.contains("\nFeatures:\n  - Authentication (OAuth, JWT, sessions)\n"));
        assert!(out.contains("\nDeployment platforms:\n  - github\n"));
    }

    #[test]
    fn json_form_deserializes() {
        let json = serde_json::to_string_pretty(&load_catalog()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["features"].as_array().unwrap().len(), 8);
        assert!(value["technologies"]["database"].is_array());
    }
}
