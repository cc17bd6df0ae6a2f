use anyhow::{Context, bail};

use vibeplan_core::spec::SPEC_TEMPLATE;

/// Execute `vibeplan template`: print the starter spec or write it to `output`.
///
/// An existing `output` file is never overwritten.
pub fn run_template(output: Option<&str>) -> anyhow::Result<()> {
    let Some(path) = output else {
        print!("{SPEC_TEMPLATE}");
        return Ok(());
    };

    if std::path::Path::new(path).exists() {
        bail!("{path} already exists");
    }
    std::fs::write(path, SPEC_TEMPLATE)
        .with_context(|| format!("failed to write template to {path}"))?;
    println!("Starter spec written to {path}");
    println!();
    println!("Next: edit it, then run `vibeplan generate {path}`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_template_once() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("project.toml");
        let path = path.to_str().unwrap();

        run_template(Some(path)).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), SPEC_TEMPLATE);

        let err = run_template(Some(path)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
