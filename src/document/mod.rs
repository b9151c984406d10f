//! Document registry: where resolved assets get dispatched.
//!
//! The injector never talks to a global document. It borrows anything that
//! implements [`DocumentRegistry`]; the application decides the lifetime.
//! [`HeadDocument`] is the built-in implementation: an ordered, deduplicated
//! record of head entries that renders to markup.

use std::collections::BTreeSet;

use crate::asset::{ScriptAttrs, StyleAttrs};
use crate::utils::encode_attr;

/// Sink for resolved stylesheet/script assets.
pub trait DocumentRegistry {
    /// Add inline CSS.
    fn add_style_declaration(&mut self, contents: &str);
    /// Add a linked stylesheet.
    fn add_style_sheet(&mut self, link: &str, attrs: &StyleAttrs);
    /// Add inline JavaScript.
    fn add_script_declaration(&mut self, contents: &str);
    /// Add a linked script.
    fn add_script(&mut self, link: &str, attrs: &ScriptAttrs);
}

/// One recorded head entry, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadEntry {
    StyleDeclaration(String),
    StyleSheet { link: String, attrs: StyleAttrs },
    ScriptDeclaration(String),
    Script { link: String, attrs: ScriptAttrs },
}

/// In-memory head assembly.
///
/// Linked entries are deduplicated by URL; repeated registration of the same
/// stylesheet from different extensions emits one tag. Declarations are kept
/// verbatim in order.
#[derive(Debug, Default)]
pub struct HeadDocument {
    entries: Vec<HeadEntry>,
    seen_links: BTreeSet<String>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries recorded so far, in dispatch order.
    pub fn entries(&self) -> &[HeadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries to `<head>` markup, one tag per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                HeadEntry::StyleSheet { link, attrs } => {
                    out.push_str(&format!(
                        "<link rel=\"stylesheet\" type=\"{}\" href=\"{}\"",
                        encode_attr(&attrs.mime),
                        encode_attr(link)
                    ));
                    if let Some(media) = &attrs.media {
                        out.push_str(&format!(" media=\"{}\"", encode_attr(media)));
                    }
                    for (name, value) in &attrs.attribs {
                        let value = match value {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        out.push_str(&format!(" {}=\"{}\"", name, encode_attr(&value)));
                    }
                    out.push_str(" />\n");
                }
                HeadEntry::StyleDeclaration(css) => {
                    out.push_str(&format!("<style type=\"text/css\">\n{css}\n</style>\n"));
                }
                HeadEntry::Script { link, attrs } => {
                    out.push_str(&format!(
                        "<script type=\"{}\" src=\"{}\"",
                        encode_attr(&attrs.mime),
                        encode_attr(link)
                    ));
                    if attrs.defer {
                        out.push_str(" defer");
                    }
                    if attrs.r#async {
                        out.push_str(" async");
                    }
                    out.push_str("></script>\n");
                }
                HeadEntry::ScriptDeclaration(js) => {
                    out.push_str(&format!(
                        "<script type=\"text/javascript\">\n{js}\n</script>\n"
                    ));
                }
            }
        }
        out
    }
}

impl DocumentRegistry for HeadDocument {
    fn add_style_declaration(&mut self, contents: &str) {
        self.entries
            .push(HeadEntry::StyleDeclaration(contents.to_string()));
    }

    fn add_style_sheet(&mut self, link: &str, attrs: &StyleAttrs) {
        if !self.seen_links.insert(link.to_string()) {
            return;
        }
        self.entries.push(HeadEntry::StyleSheet {
            link: link.to_string(),
            attrs: attrs.clone(),
        });
    }

    fn add_script_declaration(&mut self, contents: &str) {
        self.entries
            .push(HeadEntry::ScriptDeclaration(contents.to_string()));
    }

    fn add_script(&mut self, link: &str, attrs: &ScriptAttrs) {
        if !self.seen_links.insert(link.to_string()) {
            return;
        }
        self.entries.push(HeadEntry::Script {
            link: link.to_string(),
            attrs: attrs.clone(),
        });
    }
}
