//! Caller roles and extension namespace detection.
//!
//! Every inject call is made on behalf of some piece of extension code. The
//! role decides which extension namespace the asset lookup is scoped to
//! (`com_example`, `mod_example`, `plg_example_test`). Callers state their
//! role explicitly instead of being probed through a class hierarchy.

use std::collections::BTreeMap;

/// The kind of extension code asking for an asset.
///
/// Namespace derivation is total: a role the deployment does not recognize
/// maps to the empty namespace, which downstream resolves to nothing and
/// no-ops. That fallback is policy, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerRole {
    /// A plugin, identified by its folder (group) and element name.
    Plugin { folder: String, element: String },
    /// A component controller; the active request's `option` parameter wins
    /// over the configured one.
    Controller { option: String },
    /// A site module, identified by its own name (`mod_example`).
    Module { name: String },
    /// A component view with a configured option.
    View { option: String },
    /// Anything else. Resolves to the empty namespace.
    Unknown,
}

impl CallerRole {
    pub fn plugin(folder: impl Into<String>, element: impl Into<String>) -> Self {
        Self::Plugin {
            folder: folder.into(),
            element: element.into(),
        }
    }

    pub fn controller(option: impl Into<String>) -> Self {
        Self::Controller {
            option: option.into(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::Module { name: name.into() }
    }

    pub fn view(option: impl Into<String>) -> Self {
        Self::View {
            option: option.into(),
        }
    }

    /// Derive the extension namespace for this caller.
    ///
    /// Plugin is matched first: in the legacy hierarchy a plugin could also
    /// satisfy the other role checks, and that check order is the
    /// disambiguation policy this keeps.
    pub fn extension_name(&self, request: &RequestContext) -> String {
        match self {
            Self::Plugin { folder, element } => format!("plg_{folder}_{element}"),
            Self::Controller { option } => {
                request.param("option").unwrap_or(option.as_str()).to_string()
            }
            Self::Module { name } => name.clone(),
            Self::View { option } => option.clone(),
            Self::Unknown => String::new(),
        }
    }

    /// The plugin folder, when this caller is a plugin.
    ///
    /// Used for the sub-element namespace rewrite (`plg_<folder>_<element>`).
    pub fn plugin_folder(&self) -> Option<&str> {
        match self {
            Self::Plugin { folder, .. } => Some(folder),
            _ => None,
        }
    }
}

/// Request parameters visible to namespace detection.
///
/// Only controller-role detection reads from it (`option`). Kept as a plain
/// owned map so tests and adapters for any routing layer stay trivial.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    params: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request parameter (builder style).
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Look up a request parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
