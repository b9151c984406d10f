//! Per-kind attribute sets and override merging.
//!
//! Each asset kind carries a fixed attribute set seeded with defaults.
//! Caller overrides arrive as a JSON-style map; only recognized keys are
//! merged, anything else is dropped. The typed structs make the invariant
//! structural: an attribute set can never grow keys its kind does not have.

use serde_json::{Map, Value};

/// Attributes for a linked stylesheet.
///
/// Defaults: `type = "text/css"`, no media query, no extra attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAttrs {
    /// MIME type emitted as the `type` attribute.
    pub mime: String,
    /// Optional media query (`media` attribute).
    pub media: Option<String>,
    /// Extra attributes carried onto the `<link>` tag.
    pub attribs: Map<String, Value>,
}

impl Default for StyleAttrs {
    fn default() -> Self {
        Self {
            mime: "text/css".to_string(),
            media: None,
            attribs: Map::new(),
        }
    }
}

impl StyleAttrs {
    /// Merge a caller override map into the defaults.
    ///
    /// Recognized keys: `type`, `media`, `attribs`. Unrecognized keys and
    /// wrongly-typed values are silently dropped.
    pub fn merged(overrides: &Map<String, Value>) -> Self {
        let mut attrs = Self::default();
        for (key, value) in overrides {
            match key.as_str() {
                "type" => {
                    if let Some(mime) = value.as_str() {
                        attrs.mime = mime.to_string();
                    }
                }
                "media" => attrs.media = value.as_str().map(str::to_string),
                "attribs" => {
                    if let Some(map) = value.as_object() {
                        attrs.attribs = map.clone();
                    }
                }
                _ => {}
            }
        }
        attrs
    }
}

/// Attributes for a linked script.
///
/// Defaults: `type = "text/javascript"`, neither `defer` nor `async`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAttrs {
    /// MIME type emitted as the `type` attribute.
    pub mime: String,
    /// Add the `defer` attribute.
    pub defer: bool,
    /// Add the `async` attribute.
    pub r#async: bool,
}

impl Default for ScriptAttrs {
    fn default() -> Self {
        Self {
            mime: "text/javascript".to_string(),
            defer: false,
            r#async: false,
        }
    }
}

impl ScriptAttrs {
    /// Merge a caller override map into the defaults.
    ///
    /// Recognized keys: `type`, `defer`, `async`. Unrecognized keys and
    /// wrongly-typed values are silently dropped.
    pub fn merged(overrides: &Map<String, Value>) -> Self {
        let mut attrs = Self::default();
        for (key, value) in overrides {
            match key.as_str() {
                "type" => {
                    if let Some(mime) = value.as_str() {
                        attrs.mime = mime.to_string();
                    }
                }
                "defer" => attrs.defer = value.as_bool().unwrap_or(attrs.defer),
                "async" => attrs.r#async = value.as_bool().unwrap_or(attrs.r#async),
                _ => {}
            }
        }
        attrs
    }
}
