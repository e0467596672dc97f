//! `web-sys` implementation of [`HostPage`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::consts::LOG_TARGET;
use crate::error::HookError;
use crate::page::{HostPage, SubmitEvent, SubmitListener};

/// The live document of the current window.
pub struct DomPage {
    document: Document,
}

/// Live `submit` listener. Removed from its form on drop.
pub struct DomSubscription {
    form: Element,
    closure: Closure<dyn FnMut(Event)>,
}

struct DomSubmitEvent<'a>(&'a Event);

impl SubmitEvent for DomSubmitEvent<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Bind to `window.document`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ElementNotFound`] when there is no window or
    /// document (e.g. inside a worker).
    pub fn from_window() -> Result<Self, HookError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
            .ok_or_else(|| HookError::not_found("document"))
    }
}

/// Short label for error messages: `tag#id`.
fn describe(element: &Element) -> String {
    let tag = element.tag_name().to_lowercase();
    let id = element.id();
    if id.is_empty() { tag } else { format!("{tag}#{id}") }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl HostPage for DomPage {
    type Element = Element;
    type Subscription = DomSubscription;

    fn find_element(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!(target: LOG_TARGET, "invalid selector {selector}: {}", js_reason(&err));
                None
            }
        }
    }

    fn insert_after(&self, anchor: &Element, html: &str) -> Result<(), HookError> {
        anchor
            .insert_adjacent_html("afterend", html)
            .map_err(|err| HookError::state_read(describe(anchor), js_reason(&err)))
    }

    fn read_text(&self, element: &Element) -> Result<String, HookError> {
        element
            .dyn_ref::<HtmlElement>()
            .map(HtmlElement::inner_text)
            .ok_or_else(|| HookError::state_read(describe(element), "not an HTML element"))
    }

    fn read_value(&self, element: &Element) -> Result<String, HookError> {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .ok_or_else(|| HookError::state_read(describe(element), "not an input element"))
    }

    fn read_checked(&self, element: &Element) -> Result<bool, HookError> {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
            .ok_or_else(|| HookError::state_read(describe(element), "not an input element"))
    }

    fn on_submit(&self, form: &Element, listener: SubmitListener) -> Result<DomSubscription, HookError> {
        let mut listener = listener;
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut submit = DomSubmitEvent(&event);
            listener(&mut submit);
        });
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .map_err(|err| HookError::Listener(js_reason(&err)))?;
        Ok(DomSubscription { form: form.clone(), closure })
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .form
            .remove_event_listener_with_callback("submit", self.closure.as_ref().unchecked_ref())
        {
            log::warn!(target: LOG_TARGET, "failed to detach submit listener: {}", js_reason(&err));
        }
    }
}
