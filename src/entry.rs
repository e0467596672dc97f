//! JavaScript-facing install/detach exports for the browser build.
//!
//! The host's content script calls `installNewRepoHook(wallet)` once the
//! repository-creation page has rendered. The listener stays registered
//! until `detachNewRepoHook()` is called, the hook is installed again, or
//! the page unloads.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::augment::PageAugmenter;
use crate::config::PageConfig;
use crate::consts::LOG_TARGET;
use crate::dom::{DomPage, DomSubscription};
use crate::error::HookError;

thread_local! {
    static INSTALLED: RefCell<Option<DomSubscription>> = const { RefCell::new(None) };
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::trace!(target: LOG_TARGET, "console logger already installed");
    }
}

fn to_js(err: HookError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn install_with(wallet: JsValue, config: PageConfig) -> Result<(), HookError> {
    init_logging();
    let augmenter = PageAugmenter::new(DomPage::from_window()?, config, wallet);
    let subscription = augmenter.augment()?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(subscription));
    Ok(())
}

/// Augment the current page with the default repository-creation selectors.
///
/// # Errors
///
/// Rejects with a JS `Error` if the page lacks the anchor or the form.
#[wasm_bindgen(js_name = installNewRepoHook)]
pub fn install(wallet: JsValue) -> Result<(), JsValue> {
    install_with(wallet, PageConfig::default()).map_err(to_js)
}

/// Same as [`install`], with a JSON override of [`PageConfig`].
///
/// # Errors
///
/// Rejects with a JS `Error` if `config` is malformed or the page lacks the
/// anchor or the form.
#[wasm_bindgen(js_name = installNewRepoHookWithConfig)]
pub fn install_with_config(wallet: JsValue, config: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config).map_err(to_js)?;
    install_with(wallet, config).map_err(to_js)
}

/// Unregister the submit listener. Returns whether one was installed.
/// The injected checkbox stays on the page.
#[wasm_bindgen(js_name = detachNewRepoHook)]
#[must_use]
pub fn detach() -> bool {
    INSTALLED.with(|slot| slot.borrow_mut().take().is_some())
}
