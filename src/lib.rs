//! Bounty opt-in hook for the repository-creation page.
//!
//! Compiled to WebAssembly and loaded by the in-page script. When the user
//! is creating a repository, the hook inserts a checkbox offering to bind the
//! new repository to a bounty, and intercepts the form's submission to read
//! the owner and repository name when the box is ticked.
//!
//! All page access goes through [`page::HostPage`], so the logic in
//! [`augment`] runs natively against an in-memory page in tests. The
//! `browser` feature adds the `web-sys` implementation and the JS exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`augment`] | [`augment::PageAugmenter`]: insert the opt-in, gate submission |
//! | [`page`] | Host-page capability traits |
//! | [`fragment`] | Opt-in markup rendering |
//! | [`config`] | Selectors and copy, with JSON overrides |
//! | [`error`] | [`error::HookError`] |
//! | [`consts`] | Default selectors, ids, and copy |
//! | `dom` | `web-sys` [`page::HostPage`] (feature `browser`) |
//! | `entry` | `#[wasm_bindgen]` install/detach exports (feature `browser`) |

pub mod augment;
pub mod config;
pub mod consts;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod entry;
pub mod error;
pub mod fragment;
pub mod page;
