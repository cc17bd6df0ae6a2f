//! Boundary input: parses a JSON or TOML project request and validates it
//! into a [`ProjectSpec`].
//!
//! Policy:
//! - Missing or blank strings become empty (generation substitutes defaults).
//! - Missing booleans and enum fields take their defaults.
//! - Line breaks inside text fields and names are joined with spaces, so a
//!   value always stays on its own line of the plan.
//! - Unrecognized enum tags, unknown tech stack categories, negative day
//!   counts and out-of-range custom durations are rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{
    Category, CategoryParseError, DEFAULT_DEPLOYMENT_PLATFORM, Difficulty, DifficultyParseError,
    ProjectSpec, ProjectType, ProjectTypeParseError, TechStack, Timeline, TimelineParseError,
};
use crate::plan::display::single_line;

/// Errors that can occur while turning a request into a [`ProjectSpec`].
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    InvalidProjectType(#[from] ProjectTypeParseError),

    #[error(transparent)]
    InvalidTimeline(#[from] TimelineParseError),

    #[error(transparent)]
    InvalidDifficulty(#[from] DifficultyParseError),

    #[error(transparent)]
    UnknownCategory(#[from] CategoryParseError),

    #[error("timeline_days must not be negative (got {0})")]
    NegativeDays(i64),

    #[error("custom timeline requires timeline_days")]
    MissingCustomDays,

    #[error(
        "custom timeline_days must be between {min} and {max} (got {0})",
        min = Timeline::MIN_CUSTOM_DAYS,
        max = Timeline::MAX_CUSTOM_DAYS
    )]
    CustomDaysOutOfRange(i64),
}

/// Raw, unvalidated project request as it arrives from a client or file.
///
/// Every field is optional. Enum fields are kept as strings so that an
/// unknown tag produces a [`ValidationError`] naming the field rather than
/// a generic deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub timeline_days: Option<i64>,
    pub difficulty: Option<String>,
    /// Category name -> technology names.
    pub tech_stack: BTreeMap<String, Vec<String>>,
    pub features: Vec<String>,
    pub deployment_platform: Option<String>,
    pub repo_name: Option<String>,
    pub github_username: Option<String>,
    pub include_readme: Option<bool>,
    pub include_license: Option<bool>,
    pub include_gitignore: Option<bool>,
}

/// Parse and validate a JSON project request.
pub fn parse_project_json(content: &str) -> Result<ProjectSpec, ValidationError> {
    ProjectRequest::from_json(content)?.into_spec()
}

/// Parse and validate a TOML project request.
pub fn parse_project_toml(content: &str) -> Result<ProjectSpec, ValidationError> {
    ProjectRequest::from_toml(content)?.into_spec()
}

impl ProjectRequest {
    /// Deserialize a JSON request without validating it.
    pub fn from_json(content: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Deserialize a TOML request without validating it.
    pub fn from_toml(content: &str) -> Result<Self, ValidationError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the request and build a [`ProjectSpec`].
    pub fn into_spec(self) -> Result<ProjectSpec, ValidationError> {
        let project_type = match non_blank(self.project_type.as_deref()) {
            Some(tag) => tag.parse::<ProjectType>()?,
            None => ProjectType::default(),
        };
        let timeline = match non_blank(self.timeline.as_deref()) {
            Some(tag) => tag.parse::<Timeline>()?,
            None => Timeline::default(),
        };
        let difficulty = match non_blank(self.difficulty.as_deref()) {
            Some(tag) => tag.parse::<Difficulty>()?,
            None => Difficulty::default(),
        };
        let timeline_days = resolve_days(timeline, self.timeline_days)?;

        let mut tech_stack = TechStack::default();
        for (name, techs) in &self.tech_stack {
            let category: Category = name.trim().parse()?;
            tech_stack.extend(category, techs);
        }

        let mut spec = ProjectSpec {
            title: trimmed(self.title),
            description: trimmed(self.description),
            project_type,
            timeline,
            timeline_days,
            difficulty,
            tech_stack,
            deployment_platform: match non_blank(self.deployment_platform.as_deref()) {
                Some(platform) => single_line(platform).into_owned(),
                None => DEFAULT_DEPLOYMENT_PLATFORM.to_owned(),
            },
            repo_name: trimmed(self.repo_name),
            github_username: trimmed(self.github_username),
            include_readme: self.include_readme.unwrap_or(true),
            include_license: self.include_license.unwrap_or(false),
            include_gitignore: self.include_gitignore.unwrap_or(true),
            ..ProjectSpec::default()
        };
        for feature in &self.features {
            spec.add_feature(feature);
        }

        tracing::debug!(
            project_type = %spec.project_type,
            timeline = %spec.timeline,
            timeline_days = spec.timeline_days,
            technologies = spec.tech_stack.len(),
            features = spec.features.len(),
            "validated project request"
        );

        Ok(spec)
    }
}

/// Derive the day count: fixed for named timelines, caller-supplied and
/// range-checked for custom ones.
fn resolve_days(timeline: Timeline, supplied: Option<i64>) -> Result<u32, ValidationError> {
    if let Some(days) = supplied {
        if days < 0 {
            return Err(ValidationError::NegativeDays(days));
        }
    }

    match timeline.fixed_days() {
        Some(fixed) => {
            if let Some(days) = supplied {
                if days != i64::from(fixed) {
                    tracing::debug!(
                        %timeline,
                        supplied = days,
                        fixed,
                        "ignoring timeline_days for a named timeline"
                    );
                }
            }
            Ok(fixed)
        }
        None => {
            let days = supplied.ok_or(ValidationError::MissingCustomDays)?;
            let range =
                i64::from(Timeline::MIN_CUSTOM_DAYS)..=i64::from(Timeline::MAX_CUSTOM_DAYS);
            if !range.contains(&days) {
                return Err(ValidationError::CustomDaysOutOfRange(days));
            }
            // In range, so it fits.
            Ok(days as u32)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Trimmed value with line breaks joined by spaces; missing becomes empty.
fn trimmed(value: Option<String>) -> String {
    value
        .map(|s| single_line(s.trim()).into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_json_uses_defaults() {
        let spec = parse_project_json("{}").expect("empty object is valid");
        assert_eq!(spec.project_type, ProjectType::FullStack);
        assert_eq!(spec.timeline, Timeline::OneWeek);
        assert_eq!(spec.timeline_days, 7);
        assert_eq!(spec.difficulty, Difficulty::Intermediate);
        assert_eq!(spec.deployment_platform, "github");
        assert!(spec.title.is_empty());
        assert!(spec.include_readme);
        assert!(!spec.include_license);
        assert!(spec.include_gitignore);
    }

    #[test]
    fn parse_full_json() {
        let json = r#"{
            "title": "  Recipe Box ",
            "description": "Store recipes",
            "project_type": "frontend_only",
            "timeline": "2weeks",
            "difficulty": "beginner",
            "tech_stack": {
                "frontend": ["React", "Tailwind CSS", "React"],
                "tools": ["Vite"]
            },
            "features": ["CRUD Operations", "  ", "File Upload"],
            "deployment_platform": "vercel",
            "repo_name": "recipe-box",
            "github_username": "octo",
            "include_license": true
        }"#;
        let spec = parse_project_json(json).expect("should parse");
        assert_eq!(spec.title, "Recipe Box");
        assert_eq!(spec.project_type, ProjectType::FrontendOnly);
        assert_eq!(spec.timeline_days, 14);
        assert_eq!(spec.difficulty, Difficulty::Beginner);
        assert_eq!(spec.tech_stack.frontend.len(), 2);
        assert_eq!(spec.tech_stack.tools.len(), 1);
        assert!(spec.tech_stack.backend.is_empty());
        assert_eq!(spec.features.len(), 2);
        assert_eq!(spec.deployment_platform, "vercel");
        assert!(spec.include_license);
    }

    #[test]
    fn line_breaks_are_joined() {
        let json = r#"{
            "title": "A\n## ✨ Features\n- ✅ fake",
            "description": "Line one\r\nLine two",
            "tech_stack": {"tools": ["Git\n### Backend"]},
            "features": ["Login\n\nSignup"],
            "deployment_platform": "fly\n_io",
            "repo_name": "my\nrepo",
            "github_username": "octo\ncat"
        }"#;
        let spec = parse_project_json(json).expect("should parse");
        assert_eq!(spec.title, "A ## ✨ Features - ✅ fake");
        assert_eq!(spec.description, "Line one Line two");
        assert!(spec.tech_stack.contains(Category::Tools, "Git ### Backend"));
        assert!(spec.features.contains("Login Signup"));
        assert_eq!(spec.deployment_platform, "fly _io");
        assert_eq!(spec.repo_name, "my repo");
        assert_eq!(spec.github_username, "octo cat");
    }

    #[test]
    fn parse_toml_request() {
        let toml_str = r#"
title = "CLI Tool"
project_type = "backend"
timeline = "custom"
timeline_days = 21
difficulty = "advanced"
features = ["Analytics & Statistics"]

[tech_stack]
backend = ["Rust"]
database = ["SQLite"]
"#;
        let spec = parse_project_toml(toml_str).expect("should parse");
        assert_eq!(spec.project_type, ProjectType::BackendOnly);
        assert_eq!(spec.timeline, Timeline::Custom);
        assert_eq!(spec.timeline_days, 21);
        assert!(spec.tech_stack.contains(Category::Database, "SQLite"));
    }

    #[test]
    fn blank_enum_tags_fall_back_to_defaults() {
        let spec = parse_project_json(r#"{"project_type": "", "timeline": " ", "difficulty": ""}"#)
            .expect("blank tags default");
        assert_eq!(spec.project_type, ProjectType::FullStack);
        assert_eq!(spec.timeline, Timeline::OneWeek);
        assert_eq!(spec.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn rejects_invalid_project_type() {
        let err = parse_project_json(r#"{"project_type": "invalid_type"}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidProjectType(_)),
            "expected InvalidProjectType, got: {err}"
        );
        assert!(err.to_string().contains("invalid project type"));
    }

    #[test]
    fn rejects_invalid_timeline() {
        let err = parse_project_json(r#"{"timeline": "invalid_timeline"}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidTimeline(_)),
            "expected InvalidTimeline, got: {err}"
        );
    }

    #[test]
    fn rejects_invalid_difficulty() {
        let err = parse_project_json(r#"{"difficulty": "invalid_difficulty"}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidDifficulty(_)),
            "expected InvalidDifficulty, got: {err}"
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let err = parse_project_json(r#"{"tech_stack": {"mobile": ["Flutter"]}}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::UnknownCategory(_)),
            "expected UnknownCategory, got: {err}"
        );
    }

    #[test]
    fn rejects_negative_days() {
        let err = parse_project_json(r#"{"timeline": "1week", "timeline_days": -1}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::NegativeDays(-1)),
            "expected NegativeDays, got: {err}"
        );
    }

    #[test]
    fn rejects_custom_without_days() {
        let err = parse_project_json(r#"{"timeline": "custom"}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::MissingCustomDays),
            "expected MissingCustomDays, got: {err}"
        );
    }

    #[test]
    fn custom_days_range_is_inclusive() {
        for days in [1, 45, 90] {
            let json = format!(r#"{{"timeline": "custom", "timeline_days": {days}}}"#);
            let spec = parse_project_json(&json)
                .unwrap_or_else(|e| panic!("{days} days should be valid: {e}"));
            assert_eq!(i64::from(spec.timeline_days), days);
        }
        for days in [0, 91, 365] {
            let json = format!(r#"{{"timeline": "custom", "timeline_days": {days}}}"#);
            let err = parse_project_json(&json).unwrap_err();
            assert!(
                matches!(err, ValidationError::CustomDaysOutOfRange(d) if d == days),
                "expected CustomDaysOutOfRange for {days}, got: {err}"
            );
        }
    }

    #[test]
    fn named_timeline_ignores_supplied_days() {
        let spec = parse_project_json(r#"{"timeline": "weekend", "timeline_days": 12}"#)
            .expect("should parse");
        assert_eq!(spec.timeline_days, 3);
    }

    #[test]
    fn rejects_wrong_field_type() {
        let err = parse_project_json(r#"{"timeline_days": "seven"}"#).unwrap_err();
        assert!(
            matches!(err, ValidationError::JsonError(_)),
            "expected JsonError, got: {err}"
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_project_toml("this is not valid toml {{{").unwrap_err();
        assert!(
            matches!(err, ValidationError::TomlError(_)),
            "expected TomlError, got: {err}"
        );
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let spec = parse_project_json(r#"{"title": "X", "include_venv": true}"#)
            .expect("unknown fields are ignored");
        assert_eq!(spec.title, "X");
    }
}
