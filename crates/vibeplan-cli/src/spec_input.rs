//! Reading project specs from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use vibeplan_core::ProjectSpec;
use vibeplan_core::spec::ProjectRequest;

use crate::config::VibeplanConfig;

/// Path argument meaning "read JSON from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a request from `path` without validating it.
///
/// `.toml` files are parsed as TOML, everything else as JSON. `-` reads JSON
/// from stdin.
pub fn read_request(path: &str) -> Result<ProjectRequest> {
    if path == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read spec from stdin")?;
        return ProjectRequest::from_json(&content).context("invalid spec on stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file: {path}"))?;
    let is_toml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let request = if is_toml {
        ProjectRequest::from_toml(&content)
    } else {
        ProjectRequest::from_json(&content)
    };
    request.with_context(|| format!("invalid spec in {path}"))
}

/// Read `path`, fill blank fields from `config`, and validate.
pub fn load_spec(path: &str, config: &VibeplanConfig) -> Result<ProjectSpec> {
    let mut request = read_request(path)?;
    config.apply(&mut request);
    let spec = request
        .into_spec()
        .with_context(|| format!("invalid spec in {path}"))?;
    tracing::info!(path, title = %spec.title, "loaded project spec");
    Ok(spec)
}
