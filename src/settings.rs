//! Project settings
//!
//! Typed record of everything the scaffolding steps need to know about the
//! project. Built once from the prompt answers and the project directory, then
//! passed by reference to every later step.

use crate::error::ScaffoldError;
use chrono::Datelike;
use heck::ToLowerCamelCase;
use std::path::{Path, PathBuf};

/// Entry point used when the project already has one.
pub const INDEX_FILE: &str = "index.js";

/// Answers collected from the user, already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub description: String,
    pub keywords: Vec<String>,
    pub tests: bool,
    pub browser: bool,
}

/// Facts about the project directory gathered before prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub title: String,
    pub author: String,
    pub has_index: bool,
}

impl ProjectContext {
    /// Inspect `root` and derive the project title from its directory name.
    pub fn discover(root: &Path, author: impl Into<String>) -> Result<Self, ScaffoldError> {
        let canonical = dunce::canonicalize(root).map_err(|e| ScaffoldError::ReadFailed {
            path: root.to_path_buf(),
            source: e,
        })?;
        let title = canonical
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ScaffoldError::ConfigError(format!(
                    "Cannot derive a project name from {}",
                    canonical.display()
                ))
            })?;
        let has_index = canonical.join(INDEX_FILE).exists();

        Ok(Self {
            root: canonical,
            title,
            author: author.into(),
            has_index,
        })
    }
}

/// Settings derived from the project context and the answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub repository_url: String,
    pub year: i32,
    pub camel_title: String,
    pub ci_badge: String,
    pub main: String,
    pub tests: bool,
    pub browser: bool,
}

impl ProjectSettings {
    /// Build settings for the current calendar year.
    pub fn new(context: &ProjectContext, answers: Answers, repository_host: &str) -> Self {
        Self::with_year(context, answers, repository_host, chrono::Local::now().year())
    }

    pub fn with_year(
        context: &ProjectContext,
        answers: Answers,
        repository_host: &str,
        year: i32,
    ) -> Self {
        let title = context.title.clone();
        let author = context.author.clone();
        let repository_url = format!(
            "{}/{}/{}",
            repository_host.trim_end_matches('/'),
            author,
            title
        );
        let ci_badge = format!(
            "[![Build Status](https://secure.travis-ci.org/{author}/{title}.png)](http://travis-ci.org/{author}/{title})"
        );
        let main = if context.has_index {
            INDEX_FILE.to_string()
        } else {
            format!("{}.js", title)
        };

        Self {
            camel_title: title.to_lower_camel_case(),
            title,
            description: answers.description,
            keywords: answers.keywords,
            author,
            repository_url,
            year,
            ci_badge,
            main,
            tests: answers.tests,
            browser: answers.browser,
        }
    }

    /// Ordered `(token, value)` pairs available to templates.
    pub fn template_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("author", self.author.clone()),
            ("year", self.year.to_string()),
            ("camelTitle", self.camel_title.clone()),
            ("githubUrl", self.repository_url.clone()),
            ("travisLink", self.ci_badge.clone()),
            ("main", self.main.clone()),
        ]
    }
}

/// Parse a y/n style answer into a boolean.
///
/// An empty answer means no.
pub fn parse_yes_no(question: &str, answer: &str) -> Result<bool, ScaffoldError> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "" | "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(ScaffoldError::InvalidAnswer {
            question: question.to_string(),
            answer: answer.to_string(),
        }),
    }
}

/// Split a space-delimited keyword answer, dropping empty segments.
pub fn split_keywords(answer: &str) -> Vec<String> {
    answer.split_whitespace().map(str::to_string).collect()
}
