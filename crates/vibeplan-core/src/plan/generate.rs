//! Plan generation: renders a [`ProjectSpec`] into a Markdown project plan.
//!
//! Generation is pure and total. Blank fields are replaced by defaults,
//! empty selections render a "none selected" bullet, and every section is
//! always present so the document shape never changes. The only input besides
//! the [`ProjectSpec`] is the current date, supplied by a [`Clock`].

use crate::plan::clock::{Clock, SystemClock};
use crate::plan::display;
use crate::spec::{Category, ProjectSpec};

/// Tool name printed in the plan footer.
pub const TOOL_NAME: &str = "Vibe Code Assistant";

/// Format of the "Created" timestamp in the details section.
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format of the footer date.
const FOOTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder bullet for an empty feature set.
pub const NO_FEATURES: &str = "No features selected";

/// Renders project plans.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator<C = SystemClock> {
    clock: C,
}

impl PlanGenerator<SystemClock> {
    /// Generator reading the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> PlanGenerator<C> {
    /// Generator reading `clock` for the embedded dates.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Render the plan for `spec`.
    pub fn generate(&self, spec: &ProjectSpec) -> String {
        let now = self.clock.now();
        let mut plan = String::with_capacity(2048);

        // Title.
        plan.push_str(&format!("# {}\n\n", display::resolved_title(spec)));

        // Overview.
        plan.push_str("## 📋 Project Overview\n");
        plan.push_str(&display::resolved_description(spec));
        plan.push_str("\n\n");

        // Details.
        plan.push_str("## 🎯 Project Details\n");
        plan.push_str(&format!(
            "- **Type:** {}\n",
            display::project_type_label(spec.project_type)
        ));
        plan.push_str(&format!(
            "- **Timeline:** {}\n",
            display::timeline_label(spec.timeline, spec.timeline_days)
        ));
        plan.push_str(&format!(
            "- **Difficulty:** {}\n",
            display::title_case(&spec.difficulty.to_string())
        ));
        plan.push_str(&format!("- **Created:** {}\n\n", now.format(CREATED_FORMAT)));

        // Tech stack, one subsection per category in fixed order.
        plan.push_str("## 🛠️ Tech Stack\n");
        for (i, category) in Category::ALL.iter().enumerate() {
            if i > 0 {
                plan.push('\n');
            }
            plan.push_str(&format!("### {}\n", category.heading()));
            let techs = spec.tech_stack.get(*category);
            if techs.is_empty() {
                plan.push_str(&format!("- {}\n", category.none_selected()));
            } else {
                for tech in techs {
                    plan.push_str(&format!("- {}\n", display::single_line(tech)));
                }
            }
        }
        plan.push('\n');

        // Features.
        plan.push_str("## ✨ Features\n");
        if spec.features.is_empty() {
            plan.push_str(&format!("- {NO_FEATURES}\n"));
        } else {
            for feature in &spec.features {
                plan.push_str(&format!("- ✅ {}\n", display::single_line(feature)));
            }
        }
        plan.push('\n');

        // Deployment.
        plan.push_str("## 🚀 Deployment\n");
        plan.push_str(&format!(
            "- **Platform:** {}\n",
            display::platform_label(&display::resolved_platform(spec))
        ));
        plan.push_str(&format!(
            "- **Repository:** {}\n\n",
            display::repository_url(spec)
        ));

        // Footer.
        plan.push_str("---\n");
        plan.push_str(&format!(
            "*Generated by {TOOL_NAME} on {}*\n",
            now.format(FOOTER_DATE_FORMAT)
        ));

        tracing::debug!(
            title = %display::resolved_title(spec),
            bytes = plan.len(),
            "project plan generated"
        );

        plan
    }
}

/// Render the plan for `spec` using the system clock.
pub fn generate_plan(spec: &ProjectSpec) -> String {
    PlanGenerator::new().generate(spec)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
