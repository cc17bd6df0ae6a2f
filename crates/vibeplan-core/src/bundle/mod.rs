//! Project bundle: the starter files for a configured project.
//!
//! The bundle is assembled in memory. Writing it to disk (or archiving it)
//! is left to the caller.

mod files;

use serde::Serialize;

use crate::plan::{display, render_roadmap};
use crate::spec::{ProjectSpec, ProjectType};

/// A single file in the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleFile {
    /// Path relative to the bundle root, `/`-separated.
    pub path: String,
    pub contents: String,
}

/// All files of a project skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    /// Top-level directory name (the repository slug).
    pub root: String,
    /// Files sorted by path.
    pub files: Vec<BundleFile>,
}

impl Bundle {
    /// Look up a file by its relative path.
    pub fn file(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }
}

/// Assemble the bundle for `spec`.
///
/// `plan` becomes `README.md` when `include_readme` is set; `year` goes into
/// the license. Frontend and backend files are placed in `frontend/` and
/// `backend/` for full-stack projects and at the root otherwise.
pub fn build_bundle(spec: &ProjectSpec, plan: &str, year: i32) -> Bundle {
    let mut out = Vec::new();
    let mut add = |path: String, contents: String| out.push(BundleFile { path, contents });

    let (frontend_dir, backend_dir) = match spec.project_type {
        ProjectType::FullStack => ("frontend/", "backend/"),
        ProjectType::FrontendOnly | ProjectType::BackendOnly => ("", ""),
    };

    if spec.project_type.has_frontend() {
        if let Some(manifest) = files::frontend_package_json(&spec.tech_stack) {
            add(format!("{frontend_dir}package.json"), manifest);
        }
        add(
            format!("{frontend_dir}index.html"),
            files::index_html(&display::resolved_title(spec)),
        );
    }

    if spec.project_type.has_backend() {
        if let Some(reqs) = files::backend_requirements(&spec.tech_stack) {
            add(format!("{backend_dir}requirements.txt"), reqs);
        }
        if let Some(manifest) = files::backend_package_json(&spec.tech_stack) {
            add(format!("{backend_dir}package.json"), manifest);
        }
    }

    if spec.include_readme {
        add("README.md".to_string(), plan.to_string());
    }
    if spec.include_gitignore {
        add(".gitignore".to_string(), files::GITIGNORE.to_string());
    }
    if spec.include_license {
        add("LICENSE".to_string(), files::mit_license(year));
    }
    add(".env.example".to_string(), files::ENV_EXAMPLE.to_string());
    add("ROADMAP.md".to_string(), render_roadmap(spec));

    out.sort_by(|a, b| a.path.cmp(&b.path));

    // The root becomes a directory name, so it is always slug-safe.
    let bundle = Bundle {
        root: display::slugify(&display::resolved_repo_name(spec)),
        files: out,
    };
    tracing::debug!(
        root = %bundle.root,
        files = bundle.files.len(),
        "project bundle assembled"
    );
    bundle
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
