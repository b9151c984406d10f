//! Asset descriptors: (namespace, raw content) → form, source path, URL.

use std::path::PathBuf;

use crate::config::DeployConfig;
use crate::utils::is_external_link;

use super::{AssetKind, ExtensionType, extension};

/// A resolved asset descriptor.
///
/// Created per call, never persisted. Resolution classifies the raw content
/// into one of four forms and, for file assets, maps it onto the deployment
/// layout:
///
/// - **External**: the content carries a URL scheme; used verbatim as a link.
/// - **Declaration**: inline CSS/JS emitted directly into markup.
/// - **File**: a file under the owning extension's `assets/` directory.
/// - **Unresolved**: the namespace maps to no directory; `exists()` is false.
#[derive(Debug, Clone)]
pub struct Asset {
    kind: AssetKind,
    extension: String,
    raw: String,
    form: AssetForm,
}

#[derive(Debug, Clone)]
enum AssetForm {
    External,
    Declaration,
    File { source: PathBuf, link: String },
    Unresolved,
}

impl Asset {
    /// Resolve raw content against an extension namespace.
    ///
    /// Content that does not end with the kind's file extension is treated
    /// as an inline declaration (images have no declaration form). Never
    /// fails: content that cannot be placed yields a descriptor whose
    /// `exists()` is false.
    pub fn resolve(kind: AssetKind, extension_name: &str, raw: &str, config: &DeployConfig) -> Self {
        let form = if is_external_link(raw) {
            AssetForm::External
        } else if kind.file_ext().is_some_and(|ext| !raw.ends_with(ext)) {
            AssetForm::Declaration
        } else {
            match extension::relative_dir(extension_name, config) {
                Some(dir) => {
                    let source = config
                        .root
                        .join(dir)
                        .join("assets")
                        .join(kind.subdir())
                        .join(raw);
                    let link = config.url_for(&source).unwrap_or_default();
                    AssetForm::File { source, link }
                }
                None => AssetForm::Unresolved,
            }
        };

        Self {
            kind,
            extension: extension_name.to_string(),
            raw: raw.to_string(),
            form,
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// The namespace this asset was resolved under.
    pub fn extension_name(&self) -> &str {
        &self.extension
    }

    /// Which extension type the namespace belongs to.
    pub fn extension_type(&self) -> ExtensionType {
        ExtensionType::parse(&self.extension)
    }

    /// Whether the descriptor resolves to real content.
    ///
    /// External links are taken on faith, declarations exist when non-empty,
    /// file assets are checked on disk.
    pub fn exists(&self) -> bool {
        match &self.form {
            AssetForm::External => true,
            AssetForm::Declaration => !self.raw.trim().is_empty(),
            AssetForm::File { source, .. } => source.is_file(),
            AssetForm::Unresolved => false,
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.form, AssetForm::Declaration)
    }

    pub fn is_external(&self) -> bool {
        matches!(self.form, AssetForm::External)
    }

    /// The URL this asset is served under.
    ///
    /// File assets get their computed URL, external assets their raw string.
    /// Unresolved content passes through unchanged (best effort, matching the
    /// no-existence-gate contract of image resolution).
    pub fn link(&self) -> String {
        match &self.form {
            AssetForm::External | AssetForm::Unresolved => self.raw.clone(),
            AssetForm::File { link, .. } => link.clone(),
            AssetForm::Declaration => String::new(),
        }
    }

    /// Inline contents: the raw string for declarations, the file contents
    /// for file assets (empty on read failure).
    pub fn contents(&self) -> String {
        match &self.form {
            AssetForm::Declaration => self.raw.clone(),
            AssetForm::File { source, .. } => std::fs::read_to_string(source).unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// File name component of the raw content, if any.
    pub fn file_name(&self) -> Option<String> {
        std::path::Path::new(&self.raw)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Source path of a file asset.
    pub fn source(&self) -> Option<&std::path::Path> {
        match &self.form {
            AssetForm::File { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Repoint a file asset at a different source path, recomputing its URL.
    ///
    /// No-op for non-file forms. A path outside the deployment root keeps a
    /// separator-normalized rendering of the path itself as the link.
    pub(crate) fn set_source(&mut self, path: PathBuf, config: &DeployConfig) {
        if let AssetForm::File { source, link } = &mut self.form {
            *link = config
                .url_for(&path)
                .unwrap_or_else(|_| path.to_string_lossy().replace('\\', "/"));
            *source = path;
        }
    }
}
