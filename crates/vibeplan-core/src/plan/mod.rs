//! Plan rendering: the Markdown project plan and its companion roadmap.

pub mod clock;
pub mod display;
pub mod generate;
pub mod roadmap;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{repository_url, resolved_repo_name, slugify};
pub use generate::{PlanGenerator, TOOL_NAME, generate_plan};
pub use roadmap::{Phase, file_structure, getting_started, render_roadmap, timeline_phases};
