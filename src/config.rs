//! Page configuration: where the hook looks and what it inserts.
//!
//! Defaults target the repository-creation page. A host that renders the
//! same controls under different selectors can pass a partial JSON override;
//! any field it omits keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::HookError;

/// Selectors and fragment copy used by [`crate::augment::PageAugmenter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Element the fragment is inserted after.
    pub anchor_selector: String,
    /// Form whose submission is intercepted.
    pub form_selector: String,
    /// `id` given to the injected checkbox.
    pub checkbox_id: String,
    /// Element whose rendered text is the owner name.
    pub owner_selector: String,
    /// Input holding the repository name.
    pub repository_name_selector: String,
    /// Checkbox label.
    pub label: String,
    /// Note rendered under the label.
    pub note: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            anchor_selector: consts::ANCHOR_SELECTOR.to_owned(),
            form_selector: consts::FORM_SELECTOR.to_owned(),
            checkbox_id: consts::CHECKBOX_ID.to_owned(),
            owner_selector: consts::OWNER_SELECTOR.to_owned(),
            repository_name_selector: consts::REPOSITORY_NAME_SELECTOR.to_owned(),
            label: consts::LABEL_TEXT.to_owned(),
            note: consts::NOTE_TEXT.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Config`] if `raw` is not a valid JSON object of
    /// this shape, or [`HookError::InvalidCheckboxId`] if the override's
    /// checkbox id fails [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, HookError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `checkbox_id` survives the round trip through the inserted
    /// markup and the `#id` lookup unchanged.
    ///
    /// The id must start with an ASCII letter or `_` and contain only ASCII
    /// letters, digits, `-` and `_`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidCheckboxId`] otherwise.
    pub fn validate(&self) -> Result<(), HookError> {
        let mut chars = self.checkbox_id.chars();
        let head_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if head_ok && tail_ok {
            Ok(())
        } else {
            Err(HookError::InvalidCheckboxId(self.checkbox_id.clone()))
        }
    }

    /// CSS selector that locates the injected checkbox.
    #[must_use]
    pub fn checkbox_selector(&self) -> String {
        format!("#{}", self.checkbox_id)
    }
}
