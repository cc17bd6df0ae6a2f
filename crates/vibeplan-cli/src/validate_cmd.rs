use vibeplan_core::ProjectSpec;
use vibeplan_core::catalog::{CustomEntries, load_catalog};
use vibeplan_core::plan::{display, repository_url};

use crate::config::VibeplanConfig;
use crate::spec_input;

/// Normalized, human-readable summary of a validated spec.
pub fn summarize(spec: &ProjectSpec, custom: &CustomEntries) -> String {
    let mut out = String::with_capacity(512);

    out.push_str("Spec is valid.\n\n");
    out.push_str(&format!("  Title:        {}\n", display::resolved_title(spec)));
    out.push_str(&format!("  Type:         {}\n", spec.project_type));
    out.push_str(&format!(
        "  Timeline:     {}\n",
        display::timeline_label(spec.timeline, spec.timeline_days)
    ));
    out.push_str(&format!("  Difficulty:   {}\n", spec.difficulty));
    out.push_str(&format!("  Platform:     {}\n", spec.deployment_platform));
    out.push_str(&format!("  Repository:   {}\n", repository_url(spec)));
    out.push_str(&format!("  Technologies: {}\n", spec.tech_stack.len()));
    out.push_str(&format!("  Features:     {}\n", spec.features.len()));

    let includes: Vec<&str> = [
        (spec.include_readme, "README.md"),
        (spec.include_license, "LICENSE"),
        (spec.include_gitignore, ".gitignore"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();
    if !includes.is_empty() {
        out.push_str(&format!("  Includes:     {}\n", includes.join(", ")));
    }

    if !custom.is_empty() {
        out.push_str("\nCustom entries (not in the catalog):\n");
        for (category, tech) in &custom.technologies {
            out.push_str(&format!("  - {category}: {tech}\n"));
        }
        for feature in &custom.features {
            out.push_str(&format!("  - feature: {feature}\n"));
        }
        if let Some(platform) = &custom.platform {
            out.push_str(&format!("  - platform: {platform}\n"));
        }
    }

    out
}

/// Execute `vibeplan validate`.
pub fn run_validate(spec_path: &str, config: &VibeplanConfig) -> anyhow::Result<()> {
    let spec = spec_input::load_spec(spec_path, config)?;
    let custom = load_catalog().custom_entries(&spec);
    if !custom.is_empty() {
        tracing::info!(
            technologies = custom.technologies.len(),
            features = custom.features.len(),
            "spec uses custom entries"
        );
    }
    print!("{}", summarize(&spec, &custom));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibeplan_core::spec::Category;

    #[test]
    fn summary_of_default_spec() {
        let spec = ProjectSpec::default();
        let out = summarize(&spec, &CustomEntries::default());
        assert!(out.starts_with("Spec is valid.\n"));
        assert!(out.contains("  Title:        Untitled Project\n"));
        assert!(out.contains("  Timeline:     1 Week (7 days)\n"));
        assert!(out.contains("  Includes:     README.md, .gitignore\n"));
        assert!(!out.contains("Custom entries"));
    }

    #[test]
    fn summary_lists_custom_entries() {
        let mut spec = ProjectSpec {
            deployment_platform: "my_vps".to_string(),
            ..ProjectSpec::default()
        };
        spec.tech_stack.insert(Category::Backend, "Elixir");
        spec.add_feature("Dark mode");

        let custom = load_catalog().custom_entries(&spec);
        let out = summarize(&spec, &custom);
        assert!(out.contains("  - backend: Elixir\n"));
        assert!(out.contains("  - feature: Dark mode\n"));
        assert!(out.contains("  - platform: my_vps\n"));
    }
}
