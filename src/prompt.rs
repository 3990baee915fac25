//! Interactive question flow
//!
//! The `Prompter` trait is the seam between the question flow and the terminal.
//! `TerminalPrompter` asks through dialoguer; `DefaultsPrompter` accepts every
//! default without reading input.

use crate::error::ScaffoldError;
use crate::settings::{split_keywords, Answers};
use tracing::debug;

pub const DESCRIPTION_PROMPT: &str = "Description";
pub const KEYWORDS_PROMPT: &str = "Keywords (space-delimited)";
pub const TESTS_PROMPT: &str = "Set up tests?";
pub const BROWSER_PROMPT: &str = "Build for the browser?";

/// Source of answers to scaffolding questions.
pub trait Prompter {
    /// Ask for free text. `default` is used when the user submits nothing.
    fn text(&mut self, prompt: &str, default: &str) -> Result<String, ScaffoldError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ScaffoldError>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, default: &str) -> Result<String, ScaffoldError> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .show_default(!default.is_empty())
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ScaffoldError> {
        let answer = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// Accepts the default for every question.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&mut self, _prompt: &str, default: &str) -> Result<String, ScaffoldError> {
        Ok(default.to_string())
    }

    fn confirm(&mut self, _prompt: &str, default: bool) -> Result<bool, ScaffoldError> {
        Ok(default)
    }
}

/// Answers supplied up front (for example from command-line flags).
/// Questions with a preset are not asked.
#[derive(Debug, Clone, Default)]
pub struct AnswerPresets {
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub tests: Option<bool>,
    pub browser: Option<bool>,
}

/// Ask the scaffolding questions in order, skipping those already answered.
pub fn collect_answers(
    prompter: &mut dyn Prompter,
    presets: &AnswerPresets,
) -> Result<Answers, ScaffoldError> {
    let description = match &presets.description {
        Some(description) => description.clone(),
        None => prompter.text(DESCRIPTION_PROMPT, "")?,
    };
    let keywords = match &presets.keywords {
        Some(keywords) => keywords.clone(),
        None => prompter.text(KEYWORDS_PROMPT, "")?,
    };
    let tests = match presets.tests {
        Some(tests) => tests,
        None => prompter.confirm(TESTS_PROMPT, true)?,
    };
    let browser = match presets.browser {
        Some(browser) => browser,
        None => prompter.confirm(BROWSER_PROMPT, false)?,
    };

    let answers = Answers {
        description: description.trim().to_string(),
        keywords: split_keywords(&keywords),
        tests,
        browser,
    };
    debug!(?answers, "Collected answers");
    Ok(answers)
}
