//! Host-page capability.
//!
//! The augmenter never touches the DOM directly. Everything it needs from the
//! page it does not own goes through [`HostPage`], which the browser build
//! implements over `web-sys` (see `dom`) and tests implement over an
//! in-memory node list.

use crate::error::HookError;

/// A submit event as seen by the interceptor.
pub trait SubmitEvent {
    /// Cancel the host form's native submission for this event.
    fn prevent_default(&mut self);
}

/// Callback invoked for every submit event on a subscribed form.
pub type SubmitListener = Box<dyn FnMut(&mut dyn SubmitEvent)>;

/// Operations the augmenter performs against the host page.
pub trait HostPage {
    /// Handle to a page element.
    type Element: Clone;
    /// Registration returned by [`HostPage::on_submit`]. Dropping it
    /// unregisters the listener.
    type Subscription;

    /// Locate the first element matching `selector`.
    fn find_element(&self, selector: &str) -> Option<Self::Element>;

    /// Insert `html` as the next sibling(s) of `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::StateRead`] if the page rejects the insertion.
    fn insert_after(&self, anchor: &Self::Element, html: &str) -> Result<(), HookError>;

    /// Rendered text of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::StateRead`] if `element` has no rendered text.
    fn read_text(&self, element: &Self::Element) -> Result<String, HookError>;

    /// Current value of an input `element`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::StateRead`] if `element` is not an input.
    fn read_value(&self, element: &Self::Element) -> Result<String, HookError>;

    /// Checked state of a checkbox `element`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::StateRead`] if `element` is not a checkbox.
    fn read_checked(&self, element: &Self::Element) -> Result<bool, HookError>;

    /// Register `listener` for submit events on `form`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Listener`] if the listener cannot be attached.
    fn on_submit(&self, form: &Self::Element, listener: SubmitListener) -> Result<Self::Subscription, HookError>;

    /// Like [`HostPage::find_element`], failing with
    /// [`HookError::ElementNotFound`] when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ElementNotFound`] if no element matches `selector`.
    fn require(&self, selector: &str) -> Result<Self::Element, HookError> {
        self.find_element(selector)
            .ok_or_else(|| HookError::not_found(selector))
    }
}
