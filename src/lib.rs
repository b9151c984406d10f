//! Pagehead - document head asset registration for extension-based CMS apps.
//!
//! CMS extensions (components, modules, plugins, views) want to say
//! "include my stylesheet" without knowing where their assets live on disk or
//! how the page head is assembled. [`AssetInjector`] is the single policy
//! point for that: it derives the extension namespace from the caller's role,
//! resolves the named asset against the deployment layout, and forwards the
//! result to a [`DocumentRegistry`].
//!
//! ```no_run
//! use pagehead::{AssetInjector, CallerRole, DeployConfig, HeadDocument};
//!
//! let config = DeployConfig::default();
//! let mut document = HeadDocument::new();
//! let caller = CallerRole::plugin("groups", "forum");
//!
//! AssetInjector::new(&config, caller, &mut document)
//!     .add_stylesheet("forum.css")
//!     .add_script("forum.js");
//!
//! let head = document.render();
//! ```
//!
//! Inject calls never fail: an asset that does not resolve to real content is
//! a silent no-op and the chain continues.

pub mod asset;
pub mod caller;
pub mod config;
pub mod document;
pub mod injector;
pub mod utils;

pub use asset::{Asset, AssetKind, ExtensionType, ScriptAttrs, StyleAttrs};
pub use caller::{CallerRole, RequestContext};
pub use config::{ConfigError, DeployConfig};
pub use document::{DocumentRegistry, HeadDocument, HeadEntry};
pub use injector::{AssetInjector, ImageOptions, ScriptOptions, StyleOptions};
