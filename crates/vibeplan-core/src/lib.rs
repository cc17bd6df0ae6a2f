//! Core logic for vibeplan: turns a project selection into a Markdown
//! project plan, a companion roadmap and a starter file bundle.
//!
//! Everything in this crate is synchronous and free of I/O.

pub mod bundle;
pub mod catalog;
pub mod plan;
pub mod spec;

pub use bundle::{Bundle, BundleFile, build_bundle};
pub use plan::{PlanGenerator, generate_plan};
pub use spec::{ProjectSpec, ValidationError, parse_project_json, parse_project_toml};
