use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::plan::display::single_line;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Overall shape of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    FullStack,
    FrontendOnly,
    BackendOnly,
}

impl ProjectType {
    /// Whether the project has a frontend half.
    pub fn has_frontend(self) -> bool {
        matches!(self, Self::FullStack | Self::FrontendOnly)
    }

    /// Whether the project has a backend half.
    pub fn has_backend(self) -> bool {
        matches!(self, Self::FullStack | Self::BackendOnly)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FullStack => "full_stack",
            Self::FrontendOnly => "frontend_only",
            Self::BackendOnly => "backend_only",
        };
        f.write_str(s)
    }
}

impl FromStr for ProjectType {
    type Err = ProjectTypeParseError;

    /// Accepts the canonical tags as well as the short `fullstack`,
    /// `frontend` and `backend` forms used by older clients.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_stack" | "fullstack" => Ok(Self::FullStack),
            "frontend_only" | "frontend" => Ok(Self::FrontendOnly),
            "backend_only" | "backend" => Ok(Self::BackendOnly),
            other => Err(ProjectTypeParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`ProjectType`] string.
#[derive(Debug, Clone)]
pub struct ProjectTypeParseError(pub String);

impl fmt::Display for ProjectTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid project type: {:?} (expected full_stack, frontend_only, or backend_only)",
            self.0
        )
    }
}

impl std::error::Error for ProjectTypeParseError {}

// ---------------------------------------------------------------------------

/// How long the user intends to spend on the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "weekend")]
    Weekend,
    #[default]
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "2weeks")]
    TwoWeeks,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "custom")]
    Custom,
}

impl Timeline {
    /// Smallest day count accepted for a custom timeline.
    pub const MIN_CUSTOM_DAYS: u32 = 1;
    /// Largest day count accepted for a custom timeline.
    pub const MAX_CUSTOM_DAYS: u32 = 90;

    /// Fixed day count for a named timeline. `Open` is 0 (open-ended);
    /// `Custom` has no fixed count and returns `None`.
    pub fn fixed_days(self) -> Option<u32> {
        match self {
            Self::Weekend => Some(3),
            Self::OneWeek => Some(7),
            Self::TwoWeeks => Some(14),
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(90),
            Self::Open => Some(0),
            Self::Custom => None,
        }
    }

    /// Human label shown in the plan.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weekend => "Weekend",
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::Open => "Open",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Weekend => "weekend",
            Self::OneWeek => "1week",
            Self::TwoWeeks => "2weeks",
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::Open => "open",
            Self::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for Timeline {
    type Err = TimelineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekend" => Ok(Self::Weekend),
            "1week" => Ok(Self::OneWeek),
            "2weeks" => Ok(Self::TwoWeeks),
            "1month" => Ok(Self::OneMonth),
            "3months" => Ok(Self::ThreeMonths),
            "open" => Ok(Self::Open),
            "custom" => Ok(Self::Custom),
            other => Err(TimelineParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Timeline`] string.
#[derive(Debug, Clone)]
pub struct TimelineParseError(pub String);

impl fmt::Display for TimelineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid timeline: {:?} (expected weekend, 1week, 2weeks, 1month, 3months, open, or custom)",
            self.0
        )
    }
}

impl std::error::Error for TimelineParseError {}

// ---------------------------------------------------------------------------

/// Self-assessed difficulty of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            other => Err(DifficultyParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Difficulty`] string.
#[derive(Debug, Clone)]
pub struct DifficultyParseError(pub String);

impl fmt::Display for DifficultyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid difficulty: {:?} (expected beginner, intermediate, advanced, or expert)",
            self.0
        )
    }
}

impl std::error::Error for DifficultyParseError {}

// ---------------------------------------------------------------------------

/// One of the four fixed technology groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl Category {
    /// All categories, in plan rendering order.
    pub const ALL: [Category; 4] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Tools,
    ];

    /// Subsection heading in the plan.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database & Storage",
            Self::Tools => "Tools & DevOps",
        }
    }

    /// Placeholder bullet text for an empty category.
    pub fn none_selected(self) -> &'static str {
        match self {
            Self::Frontend => "No frontend technologies selected",
            Self::Backend => "No backend technologies selected",
            Self::Database => "No database technologies selected",
            Self::Tools => "No tools selected",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "database" => Ok(Self::Database),
            "tools" => Ok(Self::Tools),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Category`] string.
#[derive(Debug, Clone)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tech stack category: {:?} (expected frontend, backend, database, or tools)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

// ---------------------------------------------------------------------------
// Tech stack
// ---------------------------------------------------------------------------

/// Selected technologies, one set per [`Category`].
///
/// Sets iterate in sorted order, so two stacks with the same members always
/// render identically regardless of the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default)]
    pub frontend: BTreeSet<String>,
    #[serde(default)]
    pub backend: BTreeSet<String>,
    #[serde(default)]
    pub database: BTreeSet<String>,
    #[serde(default)]
    pub tools: BTreeSet<String>,
}

impl TechStack {
    /// Technologies selected for `category`.
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Frontend => &self.frontend,
            Category::Backend => &self.backend,
            Category::Database => &self.database,
            Category::Tools => &self.tools,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Frontend => &mut self.frontend,
            Category::Backend => &mut self.backend,
            Category::Database => &mut self.database,
            Category::Tools => &mut self.tools,
        }
    }

    /// Add a technology to `category`. Surrounding whitespace is trimmed,
    /// line breaks become spaces and blank names are ignored. Returns `true`
    /// if the set grew.
    pub fn insert(&mut self, category: Category, name: impl AsRef<str>) -> bool {
        let name = single_line(name.as_ref().trim());
        if name.is_empty() {
            return false;
        }
        self.get_mut(category).insert(name.into_owned())
    }

    /// Union `names` into `category`.
    pub fn extend<I, S>(&mut self, category: Category, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.insert(category, name);
        }
    }

    /// Whether `name` is selected in `category` (exact match).
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.get(category).contains(name)
    }

    /// Whether any of `names` is selected in `category`.
    pub fn contains_any(&self, category: Category, names: &[&str]) -> bool {
        names.iter().any(|n| self.contains(category, n))
    }

    /// Total number of selected technologies across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// ProjectSpec
// ---------------------------------------------------------------------------

/// Default deployment platform tag.
pub const DEFAULT_DEPLOYMENT_PLATFORM: &str = "github";

/// All user selections for one plan generation call.
///
/// Build one through [`crate::spec::parse_project_json`] /
/// [`crate::spec::parse_project_toml`] (which validate), or construct it
/// directly. Blank string fields are allowed; generation substitutes
/// defaults for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    pub timeline: Timeline,
    /// Day count for the timeline; 0 means open-ended.
    pub timeline_days: u32,
    pub difficulty: Difficulty,
    pub tech_stack: TechStack,
    pub features: BTreeSet<String>,
    pub deployment_platform: String,
    pub repo_name: String,
    pub github_username: String,
    pub include_readme: bool,
    pub include_license: bool,
    pub include_gitignore: bool,
}

impl Default for ProjectSpec {
    fn default() -> Self {
        let timeline = Timeline::default();
        Self {
            title: String::new(),
            description: String::new(),
            project_type: ProjectType::default(),
            timeline,
            timeline_days: timeline.fixed_days().unwrap_or(0),
            difficulty: Difficulty::default(),
            tech_stack: TechStack::default(),
            features: BTreeSet::new(),
            deployment_platform: DEFAULT_DEPLOYMENT_PLATFORM.to_owned(),
            repo_name: String::new(),
            github_username: String::new(),
            include_readme: true,
            include_license: false,
            include_gitignore: true,
        }
    }
}

impl ProjectSpec {
    /// Set a named timeline together with its fixed day count.
    ///
    /// For [`Timeline::Custom`] use [`ProjectSpec::with_custom_days`].
    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        if let Some(days) = timeline.fixed_days() {
            self.timeline_days = days;
        }
        self
    }

    /// Switch to a custom timeline of `days` days.
    pub fn with_custom_days(mut self, days: u32) -> Self {
        self.timeline = Timeline::Custom;
        self.timeline_days = days;
        self
    }

    /// Add a feature. Whitespace is trimmed, line breaks become spaces and
    /// blank names are ignored.
    pub fn add_feature(&mut self, name: impl AsRef<str>) -> bool {
        let name = single_line(name.as_ref().trim());
        if name.is_empty() {
            return false;
        }
        self.features.insert(name.into_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
