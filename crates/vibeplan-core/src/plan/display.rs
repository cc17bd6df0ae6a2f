//! Display forms and default substitution for plan fields.

use std::borrow::Cow;

use crate::spec::{DEFAULT_DEPLOYMENT_PLATFORM, ProjectSpec, ProjectType, Timeline};

/// Heading used when the title is blank.
pub const DEFAULT_TITLE: &str = "Untitled Project";
/// Repository slug used when both the repo name and title are blank.
pub const DEFAULT_REPO_SLUG: &str = "untitled-project";
/// Overview text used when the description is blank.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
/// GitHub handle used when the username is blank.
pub const DEFAULT_GITHUB_USERNAME: &str = "yourusername";

/// Title-case each whitespace-separated word: first character upper case,
/// the rest lower case.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Display form of a project type tag: strip an `_only` / `Only` suffix,
/// turn underscores into spaces and title-case (`frontend_only` -> `Frontend`).
pub fn project_type_label(project_type: ProjectType) -> String {
    let tag = project_type.to_string();
    let base = tag
        .strip_suffix("_only")
        .or_else(|| tag.strip_suffix("Only"))
        .unwrap_or(&tag);
    title_case(&base.replace('_', " "))
}

/// Display form of a deployment platform: underscores to spaces, each word
/// title-cased (`github_pages` -> `Github Pages`).
pub fn platform_label(platform: &str) -> String {
    title_case(&platform.replace('_', " "))
}

/// `"{label} ({n} days)"`, with `(1 day)` for a single day and
/// `(open-ended)` for zero.
pub fn timeline_label(timeline: Timeline, days: u32) -> String {
    let span = match days {
        0 => "open-ended".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    };
    format!("{} ({span})", timeline.label())
}

/// Lowercase `s`, replace whitespace runs with `-` and drop anything that
/// is not alphanumeric, `-` or `_`. Falls back to [`DEFAULT_REPO_SLUG`]
/// when nothing is left.
pub fn slugify(s: &str) -> String {
    let slug = s
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<String>>()
        .join("-");

    if slug.is_empty() {
        DEFAULT_REPO_SLUG.to_string()
    } else {
        slug
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Join the lines of `s` with single spaces so a value can never start a new
/// Markdown block. Values without line breaks are returned unchanged.
pub fn single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(is_line_break) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>()
            .join(" "),
    )
}

// ---------------------------------------------------------------------------
// Resolved fields
// ---------------------------------------------------------------------------

/// The title, or [`DEFAULT_TITLE`] when blank.
pub fn resolved_title(spec: &ProjectSpec) -> Cow<'_, str> {
    or_default(&spec.title, DEFAULT_TITLE)
}

/// The description, or [`DEFAULT_DESCRIPTION`] when blank.
pub fn resolved_description(spec: &ProjectSpec) -> Cow<'_, str> {
    or_default(&spec.description, DEFAULT_DESCRIPTION)
}

/// The GitHub username, or [`DEFAULT_GITHUB_USERNAME`] when blank.
pub fn resolved_username(spec: &ProjectSpec) -> Cow<'_, str> {
    or_default(&spec.github_username, DEFAULT_GITHUB_USERNAME)
}

/// The deployment platform, or [`DEFAULT_DEPLOYMENT_PLATFORM`] when blank.
pub fn resolved_platform(spec: &ProjectSpec) -> Cow<'_, str> {
    or_default(&spec.deployment_platform, DEFAULT_DEPLOYMENT_PLATFORM)
}

/// The repository name, or the slugified title when blank.
pub fn resolved_repo_name(spec: &ProjectSpec) -> String {
    let repo = single_line(spec.repo_name.trim()).into_owned();
    if repo.is_empty() {
        slugify(&spec.title)
    } else {
        repo
    }
}

/// `https://github.com/{username}/{repo_name}` with defaults applied.
pub fn repository_url(spec: &ProjectSpec) -> String {
    format!(
        "https://github.com/{}/{}",
        resolved_username(spec),
        resolved_repo_name(spec)
    )
}

fn or_default<'a>(value: &'a str, default: &'a str) -> Cow<'a, str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Cow::Borrowed(default)
    } else {
        single_line(trimmed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
