use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::Datelike;

use vibeplan_core::Bundle;
use vibeplan_core::bundle::build_bundle;
use vibeplan_core::plan::{Clock, PlanGenerator, SystemClock};

use crate::config::VibeplanConfig;
use crate::spec_input;

/// Write every bundle file under `dir/<bundle.root>/`.
///
/// Refuses to write into an existing non-empty directory unless `force` is
/// set. Returns the bundle directory.
pub fn write_bundle(bundle: &Bundle, dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    let target = dir.join(&bundle.root);

    if !force && is_non_empty_dir(&target)? {
        bail!(
            "{} already exists and is not empty\nUse --force to overwrite.",
            target.display()
        );
    }

    for file in &bundle.files {
        let path = file
            .path
            .split('/')
            .fold(target.clone(), |acc, part| acc.join(part));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote bundle file");
    }

    Ok(target)
}

fn is_non_empty_dir(path: &Path) -> anyhow::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        bail!("{} exists and is not a directory", path.display());
    }
    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    Ok(entries.next().is_some())
}

/// Execute `vibeplan bundle`: generate the plan and write the project skeleton.
pub fn run_bundle(
    spec_path: &str,
    dir: &str,
    force: bool,
    config: &VibeplanConfig,
) -> anyhow::Result<()> {
    let spec = spec_input::load_spec(spec_path, config)?;
    let clock = SystemClock;
    let plan = PlanGenerator::with_clock(clock).generate(&spec);
    let bundle = build_bundle(&spec, &plan, clock.now().year());

    let target = write_bundle(&bundle, Path::new(dir), force)?;

    println!("Wrote {} files to {}", bundle.files.len(), target.display());
    for path in bundle.paths() {
        println!("  {path}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibeplan_core::ProjectSpec;
    use vibeplan_core::spec::Category;

    fn sample_bundle() -> Bundle {
        let mut spec = ProjectSpec {
            title: "Plant Diary".to_string(),
            ..ProjectSpec::default()
        };
        spec.tech_stack.insert(Category::Frontend, "React");
        spec.tech_stack.insert(Category::Backend, "Flask");
        build_bundle(&spec, "# Plant Diary\n", 2025)
    }

    #[test]
    fn writes_nested_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bundle = sample_bundle();

        let target = write_bundle(&bundle, tmp.path(), false).unwrap();
        assert_eq!(target, tmp.path().join("plant-diary"));

        for file in &bundle.files {
            let on_disk = std::fs::read_to_string(target.join(&file.path)).unwrap();
            assert_eq!(on_disk, file.contents, "{} differs", file.path);
        }
        assert!(target.join("frontend").is_dir());
        assert!(target.join("backend/requirements.txt").is_file());
    }

    #[test]
    fn refuses_non_empty_target_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bundle = sample_bundle();
        let target = tmp.path().join(&bundle.root);
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("notes.txt"), "keep me").unwrap();

        let err = write_bundle(&bundle, tmp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"), "unexpected error: {err}");
        assert!(!target.join("README.md").exists(), "nothing written");

        write_bundle(&bundle, tmp.path(), true).unwrap();
        assert!(target.join("README.md").exists());
        assert_eq!(
            std::fs::read_to_string(target.join("notes.txt")).unwrap(),
            "keep me",
            "unrelated files are left alone"
        );
    }

    #[test]
    fn empty_existing_target_is_fine() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bundle = sample_bundle();
        std::fs::create_dir_all(tmp.path().join(&bundle.root)).unwrap();
        assert!(write_bundle(&bundle, tmp.path(), false).is_ok());
    }

    #[test]
    fn target_that_is_a_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bundle = sample_bundle();
        std::fs::write(tmp.path().join(&bundle.root), "").unwrap();
        let err = write_bundle(&bundle, tmp.path(), false).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
