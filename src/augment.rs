//! Bounty opt-in for the repository-creation form.
//!
//! [`PageAugmenter::augment`] inserts the opt-in checkbox after the
//! owner/repository header and subscribes to the form's submit event.
//! [`PageAugmenter::handle_submit`] runs on every submission: it always
//! cancels the native submission, then reads owner and repository name only
//! when the checkbox is ticked.
//!
//! The form is never resubmitted and no bounty is created. Those steps are
//! not implemented yet; the wallet passed to [`PageAugmenter::new`] is held
//! for them and otherwise unused.

#[cfg(test)]
#[path = "augment_test.rs"]
mod augment_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::consts::LOG_TARGET;
use crate::error::HookError;
use crate::fragment;
use crate::page::{HostPage, SubmitEvent, SubmitListener};

/// Wallet slot for callers that have no wallet/session object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoWallet;

/// Owner and repository name captured from a submission with the box ticked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyRequest {
    /// Owner display name, as rendered.
    pub owner: String,
    /// Repository name, as typed.
    pub repository: String,
}

/// Result of one intercepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Checkbox unticked; nothing was read.
    Ignored,
    /// Checkbox ticked; owner and repository name were captured.
    BountyRequested(BountyRequest),
}

/// Injects the bounty opt-in into a host page and gates submission on it.
pub struct PageAugmenter<P: HostPage, W = NoWallet> {
    page: Rc<P>,
    config: Rc<PageConfig>,
    wallet: Rc<W>,
    form: Rc<RefCell<Option<P::Element>>>,
}

impl<P: HostPage, W> Clone for PageAugmenter<P, W> {
    fn clone(&self) -> Self {
        Self {
            page: Rc::clone(&self.page),
            config: Rc::clone(&self.config),
            wallet: Rc::clone(&self.wallet),
            form: Rc::clone(&self.form),
        }
    }
}

impl<P, W> PageAugmenter<P, W>
where
    P: HostPage + 'static,
    W: 'static,
{
    #[must_use]
    pub fn new(page: P, config: PageConfig, wallet: W) -> Self {
        Self {
            page: Rc::new(page),
            config: Rc::new(config),
            wallet: Rc::new(wallet),
            form: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Wallet/session handle reserved for bounty creation.
    #[must_use]
    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Form the submit listener was last attached to, if any.
    #[must_use]
    pub fn form(&self) -> Option<P::Element> {
        self.form.borrow().clone()
    }

    /// Insert the opt-in fragment and subscribe to form submission.
    ///
    /// The config is validated and both the anchor and the form are resolved
    /// before the page is touched, so those failures leave the page
    /// unmodified. If subscribing fails after the fragment went in, the
    /// fragment stays on the page with no listener behind it and the form
    /// submits natively. Calling this twice inserts the fragment twice.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidCheckboxId`] if the configured checkbox id
    /// could not be looked up again, [`HookError::ElementNotFound`] if the
    /// anchor or the form is missing, or the page's error if insertion or
    /// subscription fails.
    pub fn augment(&self) -> Result<P::Subscription, HookError> {
        self.config.validate()?;
        let anchor = self.page.require(&self.config.anchor_selector)?;
        let form = self.page.require(&self.config.form_selector)?;

        self.page.insert_after(&anchor, &fragment::render(&self.config))?;
        log::debug!(target: LOG_TARGET, "bounty opt-in inserted after {}", self.config.anchor_selector);

        let this = self.clone();
        let listener: SubmitListener = Box::new(move |event: &mut dyn SubmitEvent| {
            if let Err(err) = this.handle_submit(event) {
                log::warn!(target: LOG_TARGET, "submit interception failed: {err}");
            }
        });
        let subscription = self.page.on_submit(&form, listener)?;
        *self.form.borrow_mut() = Some(form);
        log::debug!(target: LOG_TARGET, "submit listener attached to {}", self.config.form_selector);

        Ok(subscription)
    }

    /// Intercept one submission of the repository-creation form.
    ///
    /// The native submission is cancelled before anything else, whatever the
    /// checkbox state.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ElementNotFound`] if the checkbox, owner, or
    /// repository-name element is missing, or [`HookError::StateRead`] if one
    /// of them cannot be read.
    pub fn handle_submit(&self, event: &mut dyn SubmitEvent) -> Result<SubmitOutcome, HookError> {
        event.prevent_default();

        let checkbox = self.page.require(&self.config.checkbox_selector())?;
        if !self.page.read_checked(&checkbox)? {
            log::debug!(target: LOG_TARGET, "bounty opt-in unchecked; submission ignored");
            return Ok(SubmitOutcome::Ignored);
        }

        let owner_el = self.page.require(&self.config.owner_selector)?;
        let owner = self.page.read_text(&owner_el)?;
        let repository_el = self.page.require(&self.config.repository_name_selector)?;
        let repository = self.page.read_value(&repository_el)?;

        log::info!(target: LOG_TARGET, "initialized with bounties option {owner} {repository}");
        Ok(SubmitOutcome::BountyRequested(BountyRequest { owner, repository }))
    }
}
