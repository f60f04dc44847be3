//! User interaction for touch.
//! Asks the user to confirm before an existing file is overwritten.

use crate::constants::OVERWRITE_PHRASE;
use crate::error::Result;
use dialoguer::{Confirm, Input};
use std::path::Path;

/// Source of user decisions.
pub trait Prompter {
    /// Asks whether the existing file at `path` may be overwritten.
    fn confirm_overwrite(&self, path: &Path) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
///
/// Overwriting needs two steps: a yes/no question, then typing the
/// confirmation phrase.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        let action = format!("overwrite the file {}", path.display());

        let proceed = Confirm::new()
            .with_prompt(format!("Do you want to {}?", action))
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(false);
        }

        let typed: String = Input::new()
            .with_prompt(format!(
                "Please type \"{}\" to confirm that you want to {}",
                OVERWRITE_PHRASE, action
            ))
            .allow_empty(true)
            .interact_text()?;

        Ok(confirmation_matches(&typed, OVERWRITE_PHRASE))
    }
}

/// Checks the typed confirmation against the expected phrase.
///
/// Surrounding whitespace is ignored, case is not.
pub fn confirmation_matches(input: &str, phrase: &str) -> bool {
    input.trim() == phrase
}
