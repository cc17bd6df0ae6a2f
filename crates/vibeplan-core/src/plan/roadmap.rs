//! Roadmap: development phases, project layout and setup instructions.
//!
//! The roadmap is a companion document to the plan. It is never part of
//! the plan's fixed section list; callers append it or write it separately.

use crate::plan::display;
use crate::spec::{Category, ProjectSpec, ProjectType};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// One development phase and the days it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    /// Share of the timeline, in percent.
    pub percent: u32,
    pub tasks: &'static [&'static str],
    /// Inclusive `(first_day, last_day)`. `None` for open-ended timelines.
    pub days: Option<(u32, u32)>,
}

type PhaseTemplate = &'static [(&'static str, u32, &'static [&'static str])];

const SPRINT_PHASES: PhaseTemplate = &[
    ("Planning & Setup", 20, &["Project setup", "Environment configuration", "Basic structure"]),
    ("Core Development", 60, &["Implement main features", "Basic functionality"]),
    ("Testing & Polish", 20, &["Bug fixes", "Basic testing", "Documentation"]),
];

const WEEK_PHASES: PhaseTemplate = &[
    ("Planning & Setup", 15, &["Project setup", "Environment configuration", "Architecture planning"]),
    ("Core Development", 50, &["Database models", "API routes", "Basic UI"]),
    ("Features & Integration", 25, &["Implement features", "Third-party integrations"]),
    ("Testing & Polish", 10, &["Testing", "Bug fixes", "Documentation"]),
];

const TWO_WEEK_PHASES: PhaseTemplate = &[
    ("Planning & Setup", 10, &["Project setup", "Environment configuration", "Architecture planning"]),
    ("Core Development", 40, &["Database models", "API routes", "Basic UI"]),
    (
        "Features & Integration",
        35,
        &["Implement features", "Third-party integrations", "Advanced functionality"],
    ),
    (
        "Testing & Polish",
        15,
        &["Comprehensive testing", "Bug fixes", "Performance optimization", "Documentation"],
    ),
];

const LONG_PHASES: PhaseTemplate = &[
    (
        "Planning & Setup",
        10,
        &["Project setup", "Environment configuration", "Architecture planning", "Team setup"],
    ),
    ("Core Development", 35, &["Database models", "API routes", "Basic UI", "Core features"]),
    (
        "Features & Integration",
        35,
        &[
            "Implement features",
            "Third-party integrations",
            "Advanced functionality",
            "AI/ML integration",
        ],
    ),
    (
        "Testing & Polish",
        20,
        &[
            "Comprehensive testing",
            "Performance optimization",
            "Security audit",
            "Documentation",
            "Deployment",
        ],
    ),
];

/// Split a timeline of `days` days into phases.
///
/// Phase boundaries are the rounded cumulative percentages, so the schedule
/// always ends on day `days` with no gaps. Phases share a day only when the
/// timeline has fewer days than phases. `days == 0` (open-ended) uses the
/// longest template without day ranges.
pub fn timeline_phases(days: u32) -> Vec<Phase> {
    let template = match days {
        0 => LONG_PHASES,
        1..=3 => SPRINT_PHASES,
        4..=7 => WEEK_PHASES,
        8..=14 => TWO_WEEK_PHASES,
        _ => LONG_PHASES,
    };

    let mut phases = Vec::with_capacity(template.len());
    let mut cumulative = 0u32;
    let mut next_day = 1u32;

    for &(name, percent, tasks) in template {
        cumulative += percent;
        let range = if days == 0 {
            None
        } else {
            let start = next_day.min(days);
            // Round half up. Never exceeds `days`, so the narrowing is lossless.
            let boundary = ((u64::from(days) * u64::from(cumulative) + 50) / 100) as u32;
            let end = boundary.max(start).min(days);
            next_day = end.saturating_add(1);
            Some((start, end))
        };
        phases.push(Phase {
            name,
            percent,
            tasks,
            days: range,
        });
    }

    phases
}

fn render_phases(phases: &[Phase]) -> String {
    let mut out = String::new();
    for phase in phases {
        match phase.days {
            Some((start, end)) if start == end => {
                out.push_str(&format!("### {} (Day {start})\n", phase.name));
            }
            Some((start, end)) => {
                out.push_str(&format!("### {} (Days {start}-{end})\n", phase.name));
            }
            None => out.push_str(&format!("### {} ({}%)\n", phase.name, phase.percent)),
        }
        for task in phase.tasks {
            out.push_str(&format!("- [ ] {task}\n"));
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Project structure
// ---------------------------------------------------------------------------

/// Directory tree for the project layout, rooted at `repo_name/`.
pub fn file_structure(project_type: ProjectType, repo_name: &str) -> String {
    let body = match project_type {
        ProjectType::FullStack => {
            "\
├── 📁 frontend/
│   ├── 📄 package.json
│   ├── 📁 src/
│   │   ├── 📁 components/
│   │   ├── 📁 pages/
│   │   └── 📁 assets/
│   └── 📄 index.html
├── 📁 backend/
│   ├── 📄 app.py / server.js
│   ├── 📄 requirements.txt / package.json
│   ├── 📁 models/
│   ├── 📁 routes/
│   └── 📁 utils/
├── 📁 database/
│   └── 📁 migrations/
├── 📄 docker-compose.yml
├── 📄 .env.example
├── 📄 .gitignore
├── 📄 README.md
└── 📄 LICENSE"
        }
        ProjectType::FrontendOnly => {
            "\
├── 📁 src/
│   ├── 📁 components/
│   ├── 📁 pages/
│   ├── 📁 assets/
│   └── 📁 styles/
├── 📄 package.json
├── 📄 vite.config.js / webpack.config.js
├── 📄 .gitignore
├── 📄 README.md
├── 📄 index.html
└── 📄 LICENSE"
        }
        ProjectType::BackendOnly => {
            "\
├── 📁 src/
│   ├── 📁 controllers/
│   ├── 📁 models/
│   ├── 📁 routes/
│   ├── 📁 middleware/
│   └── 📁 utils/
├── 📄 package.json / requirements.txt
├── 📄 server.js / app.py
├── 📄 .env.example
├── 📄 .gitignore
├── 📄 README.md
├── 📄 Dockerfile
└── 📄 LICENSE"
        }
    };
    format!("📁 {repo_name}/\n{body}")
}

// ---------------------------------------------------------------------------
// Getting started
// ---------------------------------------------------------------------------

/// Numbered setup instructions for the selected stack.
pub fn getting_started(spec: &ProjectSpec) -> String {
    let repo = display::resolved_repo_name(spec);
    let user = display::resolved_username(spec);
    let stack = &spec.tech_stack;

    // Sub-directory prefix: full-stack projects keep each half in its own folder.
    let cd = |dir: &str| {
        if spec.project_type == ProjectType::FullStack {
            format!("   cd {dir}\n")
        } else {
            String::new()
        }
    };

    let mut steps: Vec<String> = Vec::new();

    steps.push(format!(
        "Clone the repository:\n   ```bash\n   git clone https://github.com/{user}/{repo}.git\n   cd {repo}\n   ```\n"
    ));

    if spec.project_type.has_frontend() && !stack.frontend.is_empty() {
        let commands = if stack.contains(Category::Frontend, "React") {
            format!("{}   npm install\n   npm start\n", cd("frontend"))
        } else if stack.contains(Category::Frontend, "Vue.js") {
            format!("{}   npm install\n   npm run dev\n", cd("frontend"))
        } else {
            "   # Follow the setup instructions for your chosen frontend\n".to_string()
        };
        steps.push(format!("Set up the frontend:\n   ```bash\n{commands}   ```\n"));
    }

    if spec.project_type.has_backend() && !stack.backend.is_empty() {
        let commands = if stack.contains_any(Category::Backend, &["Python", "Flask"]) {
            format!(
                "{}   python -m venv venv\n   source venv/bin/activate  # On Windows: venv\\Scripts\\activate\n   pip install -r requirements.txt\n   python app.py\n",
                cd("backend")
            )
        } else if stack.contains(Category::Backend, "Node.js") {
            format!("{}   npm install\n   npm start\n", cd("backend"))
        } else {
            "   # Follow the setup instructions for your chosen backend\n".to_string()
        };
        steps.push(format!("Set up the backend:\n   ```bash\n{commands}   ```\n"));
    }

    steps.push("Set up environment variables (copy .env.example to .env)\n".to_string());
    steps.push("Start the development servers\n".to_string());
    if spec.project_type.has_frontend() {
        steps.push("Open your browser to the frontend URL\n".to_string());
    }

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<String>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Full document
// ---------------------------------------------------------------------------

/// Render the roadmap document: timeline, structure, getting started.
pub fn render_roadmap(spec: &ProjectSpec) -> String {
    let repo = display::resolved_repo_name(spec);
    let mut out = String::with_capacity(2048);

    out.push_str("## 📅 Development Timeline\n");
    out.push_str(&render_phases(&timeline_phases(spec.timeline_days)));

    out.push_str("## 📁 Project Structure\n");
    out.push_str("```text\n");
    out.push_str(&file_structure(spec.project_type, &repo));
    out.push_str("\n```\n\n");

    out.push_str("## 🏁 Getting Started\n");
    out.push_str(&getting_started(spec));

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Timeline;

    fn ranges(days: u32) -> Vec<(u32, u32)> {
        timeline_phases(days)
            .iter()
            .map(|p| p.days.expect("dated phase"))
            .collect()
    }

    #[test]
    fn weekend_has_three_phases() {
        assert_eq!(ranges(3), vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn one_week_schedule() {
        assert_eq!(ranges(7), vec![(1, 1), (2, 5), (6, 6), (7, 7)]);
    }

    #[test]
    fn two_week_schedule() {
        assert_eq!(ranges(14), vec![(1, 1), (2, 7), (8, 12), (13, 14)]);
    }

    #[test]
    fn schedules_end_on_last_day_without_gaps() {
        for days in 1..=90 {
            let r = ranges(days);
            assert_eq!(r[0].0, 1, "{days}: first phase starts on day 1");
            assert_eq!(r.last().unwrap().1, days, "{days}: last phase ends on day {days}");
            for pair in r.windows(2) {
                assert!(pair[0].0 <= pair[0].1, "{days}: inverted phase {pair:?}");
                assert!(pair[1].0 <= pair[0].1 + 1, "{days}: gap between {pair:?}");
            }
        }
    }

    #[test]
    fn max_day_count_does_not_overflow() {
        let r = ranges(u32::MAX);
        assert_eq!(r[0].0, 1);
        assert_eq!(r.last().unwrap().1, u32::MAX);
        let roadmap = render_roadmap(&ProjectSpec::default().with_custom_days(u32::MAX));
        assert!(roadmap.contains(&format!("-{})\n", u32::MAX)));
    }

    #[test]
    fn open_ended_has_no_day_ranges() {
        let phases = timeline_phases(0);
        assert_eq!(phases.len(), 4);
        assert!(phases.iter().all(|p| p.days.is_none()));
        let rendered = render_phases(&phases);
        assert!(rendered.contains("### Planning & Setup (10%)"));
        assert!(!rendered.contains("Day"));
    }

    #[test]
    fn long_timelines_add_security_audit() {
        let phases = timeline_phases(30);
        assert!(phases[3].tasks.contains(&"Security audit"));
    }

    #[test]
    fn structure_per_project_type() {
        let full = file_structure(ProjectType::FullStack, "app");
        assert!(full.starts_with("📁 app/\n"));
        assert!(full.contains("📁 frontend/"));
        assert!(full.contains("📁 backend/"));

        let front = file_structure(ProjectType::FrontendOnly, "app");
        assert!(front.contains("vite.config.js"));
        assert!(!front.contains("📁 backend/"));

        let back = file_structure(ProjectType::BackendOnly, "app");
        assert!(back.contains("📁 middleware/"));
        assert!(!back.contains("index.html"));
    }

    #[test]
    fn getting_started_for_react_and_flask() {
        let mut spec = ProjectSpec {
            repo_name: "shop".to_string(),
            github_username: "octo".to_string(),
            ..ProjectSpec::default()
        };
        spec.tech_stack.insert(Category::Frontend, "React");
        spec.tech_stack.insert(Category::Backend, "Flask");

        let steps = getting_started(&spec);
        assert!(steps.contains("git clone https://github.com/octo/shop.git"));
        assert!(steps.contains("2. Set up the frontend"));
        assert!(steps.contains("   cd frontend\n   npm install\n   npm start"));
        assert!(steps.contains("3. Set up the backend"));
        assert!(steps.contains("pip install -r requirements.txt"));
        assert!(steps.contains("6. Open your browser"));
    }

    #[test]
    fn getting_started_skips_missing_halves() {
        let mut spec = ProjectSpec {
            project_type: ProjectType::BackendOnly,
            ..ProjectSpec::default()
        };
        spec.tech_stack.insert(Category::Frontend, "React");
        spec.tech_stack.insert(Category::Backend, "Node.js");

        let steps = getting_started(&spec);
        assert!(!steps.contains("Set up the frontend"));
        assert!(steps.contains("2. Set up the backend"));
        assert!(!steps.contains("cd backend"), "backend-only projects live at the root");
        assert!(!steps.contains("Open your browser"));
    }

    #[test]
    fn getting_started_generic_backend() {
        let mut spec = ProjectSpec::default();
        spec.tech_stack.insert(Category::Backend, "Go");
        let steps = getting_started(&spec);
        assert!(steps.contains("# Follow the setup instructions for your chosen backend"));
        assert!(!steps.contains("Set up the frontend"), "no frontend technologies selected");
    }

    #[test]
    fn roadmap_has_all_sections() {
        let spec = ProjectSpec::default().with_timeline(Timeline::Weekend);
        let roadmap = render_roadmap(&spec);
        assert!(roadmap.contains("## 📅 Development Timeline"));
        assert!(roadmap.contains("### Testing & Polish (Day 3)"));
        assert!(roadmap.contains("## 📁 Project Structure"));
        assert!(roadmap.contains("📁 untitled-project/"));
        assert!(roadmap.contains("## 🏁 Getting Started"));
    }
}
