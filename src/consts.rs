//! Default selectors and copy for the repository-creation page.

// ── Host page selectors ─────────────────────────────────────────

/// Owner/repository-name header block the fragment is inserted after.
pub const ANCHOR_SELECTOR: &str = "#new_repository > div.owner-reponame.clearfix";

/// Repository-creation form whose submission is intercepted.
pub const FORM_SELECTOR: &str = "#new_repository";

/// Element whose rendered text is the selected owner's display name.
pub const OWNER_SELECTOR: &str = "#repository-owner";

/// Input holding the desired repository name.
pub const REPOSITORY_NAME_SELECTOR: &str = "#repository_name";

// ── Injected control ────────────────────────────────────────────

/// `id` attribute of the injected checkbox.
pub const CHECKBOX_ID: &str = "bind-to-bounty";

/// Wrapper classes, matching the host page's own checkbox rows.
pub const WRAPPER_CLASSES: &str = "form-checkbox unchecked mt-4 mb-3";

/// Class carried by the host page's native opt-in checkboxes.
pub const CHECKBOX_CLASS: &str = "js-repository-readme-choice";

/// Label shown next to the checkbox.
pub const LABEL_TEXT: &str = "Initialize this repository with Bounties option";

/// Note rendered under the label.
pub const NOTE_TEXT: &str =
    "Using a Smart Contract and MetaMask it is possible to offer bounties to those who collaborate on the project.";

// ── Logging ─────────────────────────────────────────────────────

/// `log` target for every record emitted by this crate.
pub const LOG_TARGET: &str = "inpage";
