//! The asset injector: resolve, rewrite, dispatch.

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::asset::{Asset, AssetKind, ScriptAttrs, StyleAttrs, apply_group_override};
use crate::caller::{CallerRole, RequestContext};
use crate::config::DeployConfig;
use crate::document::DocumentRegistry;

/// Options for a stylesheet inject call.
///
/// The legacy API overloaded one parameter as either an attribute map or a
/// plugin sub-element name; here the two are separate fields and can be
/// combined freely.
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    /// Explicit extension namespace. Wins over caller-role detection.
    pub extension: Option<String>,
    /// Plugin sub-element: rewrites the namespace to `plg_<folder>_<element>`.
    pub element: Option<String>,
    /// Attribute overrides, merged into the CSS defaults for recognized
    /// keys only (`type`, `media`, `attribs`).
    pub attrs: Map<String, Value>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }
}

/// Options for a script inject call.
///
/// Recognized attribute keys: `type`, `defer`, `async`.
#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
    /// Explicit extension namespace. Wins over caller-role detection.
    pub extension: Option<String>,
    /// Plugin sub-element: rewrites the namespace to `plg_<folder>_<element>`.
    pub element: Option<String>,
    /// Attribute overrides, merged into the JS defaults.
    pub attrs: Map<String, Value>,
}

impl ScriptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }
}

/// Options for an image path lookup. No attributes apply.
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    pub extension: Option<String>,
    pub element: Option<String>,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Translates "this caller wants a stylesheet/script/image" into a resolved,
/// namespaced operation against a [`DocumentRegistry`].
///
/// Stateless per call: each inject resolves independently and the only side
/// effects are registry calls. Nothing here returns an error; content that
/// does not resolve is skipped and the chain continues.
pub struct AssetInjector<'a, D: DocumentRegistry> {
    config: &'a DeployConfig,
    caller: CallerRole,
    request: RequestContext,
    document: &'a mut D,
}

impl<'a, D: DocumentRegistry> AssetInjector<'a, D> {
    pub fn new(config: &'a DeployConfig, caller: CallerRole, document: &'a mut D) -> Self {
        Self {
            config,
            caller,
            request: RequestContext::new(),
            document,
        }
    }

    /// Attach the active request's parameters (controller-role detection
    /// reads `option` from it).
    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    /// Register a stylesheet: a file name, inline CSS, or an external URL.
    pub fn add_stylesheet(&mut self, content: &str) -> &mut Self {
        self.add_stylesheet_with(content, StyleOptions::default())
    }

    /// Register a stylesheet with explicit options.
    pub fn add_stylesheet_with(&mut self, content: &str, options: StyleOptions) -> &mut Self {
        let extension =
            self.resolve_extension(options.extension.as_deref(), options.element.as_deref());
        let attrs = StyleAttrs::merged(&options.attrs);

        let mut asset = Asset::resolve(AssetKind::Stylesheet, &extension, content, self.config);
        apply_group_override(&mut asset, self.config);

        if !asset.exists() {
            debug!("skipping stylesheet `{content}` for `{extension}`: no content");
            return self;
        }

        if asset.is_declaration() {
            trace!("style declaration for `{extension}`");
            self.document.add_style_declaration(&asset.contents());
        } else {
            trace!("stylesheet {} for `{extension}`", asset.link());
            self.document.add_style_sheet(&asset.link(), &attrs);
        }
        self
    }

    /// Register a script: a file name, inline JS, or an external URL.
    pub fn add_script(&mut self, content: &str) -> &mut Self {
        self.add_script_with(content, ScriptOptions::default())
    }

    /// Register a script with explicit options.
    pub fn add_script_with(&mut self, content: &str, options: ScriptOptions) -> &mut Self {
        let extension =
            self.resolve_extension(options.extension.as_deref(), options.element.as_deref());
        let attrs = ScriptAttrs::merged(&options.attrs);

        let mut asset = Asset::resolve(AssetKind::Javascript, &extension, content, self.config);
        apply_group_override(&mut asset, self.config);

        if !asset.exists() {
            debug!("skipping script `{content}` for `{extension}`: no content");
            return self;
        }

        if asset.is_declaration() {
            trace!("script declaration for `{extension}`");
            self.document.add_script_declaration(&asset.contents());
        } else {
            trace!("script {} for `{extension}`", asset.link());
            self.document.add_script(&asset.link(), &attrs);
        }
        self
    }

    /// Resolve an image URL.
    ///
    /// Always returns a link, missing file or not: callers embed it and let
    /// the browser's 404 be the signal. No registry interaction, no group
    /// override.
    pub fn image_path(&self, name: &str) -> String {
        self.image_path_with(name, ImageOptions::default())
    }

    /// Resolve an image URL with explicit options.
    pub fn image_path_with(&self, name: &str, options: ImageOptions) -> String {
        let extension =
            self.resolve_extension(options.extension.as_deref(), options.element.as_deref());
        Asset::resolve(AssetKind::Image, &extension, name, self.config).link()
    }

    /// Final namespace for one call.
    ///
    /// A sub-element rewrites to `plg_<base>_<element>` where the base is
    /// the explicit override or, for a plugin caller, its folder. Otherwise
    /// the explicit override wins over role detection.
    fn resolve_extension(&self, explicit: Option<&str>, element: Option<&str>) -> String {
        if let Some(element) = element {
            let base = explicit
                .map(str::to_string)
                .or_else(|| self.caller.plugin_folder().map(str::to_string))
                .unwrap_or_else(|| self.caller.extension_name(&self.request));
            return format!("plg_{base}_{element}");
        }

        explicit
            .map(str::to_string)
            .unwrap_or_else(|| self.caller.extension_name(&self.request))
    }
}
