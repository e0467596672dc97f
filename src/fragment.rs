//! Markup inserted after the anchor element.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use crate::config::PageConfig;
use crate::consts::{CHECKBOX_CLASS, WRAPPER_CLASSES};

/// Render the bounty opt-in fragment for `config`.
///
/// The output is a single wrapper `div` holding a labelled checkbox and a
/// note. Config text is escaped; the markup itself is fixed.
#[must_use]
pub fn render(config: &PageConfig) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"");
    html.push_str(WRAPPER_CLASSES);
    html.push_str("\">");
    html.push_str("<label>");
    html.push_str("<input type=\"hidden\">");
    html.push_str(&format!(
        "<input class=\"{CHECKBOX_CLASS}\" type=\"checkbox\" id=\"{}\">",
        escape(&config.checkbox_id)
    ));
    html.push_str(&escape(&config.label));
    html.push_str("</label>");
    html.push_str(&format!("<span class=\"note\">{}</span>", escape(&config.note)));
    html.push_str("</div>");
    html
}

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
