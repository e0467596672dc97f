//! Error type shared by the page capability and the augmenter.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::page::HostPage`] operations and the augmenter.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// A required host-page element is missing.
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },
    /// The element exists but its state, text, or value could not be read.
    #[error("failed to read {selector}: {reason}")]
    StateRead { selector: String, reason: String },
    /// The submit listener could not be attached or detached.
    #[error("submit listener error: {0}")]
    Listener(String),
    /// The configured checkbox id is not a plain CSS identifier, so the
    /// checkbox could not be found again by `#id` after insertion.
    #[error("invalid checkbox id {0:?}: expected letters, digits, '-' or '_'")]
    InvalidCheckboxId(String),
    /// A configuration override could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl HookError {
    /// Shorthand for [`HookError::ElementNotFound`].
    pub fn not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound { selector: selector.into() }
    }

    /// Shorthand for [`HookError::StateRead`].
    pub fn state_read(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StateRead { selector: selector.into(), reason: reason.into() }
    }
}
