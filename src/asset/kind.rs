//! Asset kind definitions.

/// Kind of document asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// CSS stylesheet (linked file or inline declaration).
    Stylesheet,
    /// JavaScript (linked file or inline declaration).
    Javascript,
    /// Image, resolved to a URL only.
    Image,
}

impl AssetKind {
    /// Subdirectory under an extension's `assets/` directory.
    pub const fn subdir(self) -> &'static str {
        match self {
            Self::Stylesheet => "css",
            Self::Javascript => "js",
            Self::Image => "img",
        }
    }

    /// File extension a linkable asset of this kind must carry.
    ///
    /// `None` for images: any file name is a link candidate and there is
    /// no inline declaration form.
    pub const fn file_ext(self) -> Option<&'static str> {
        match self {
            Self::Stylesheet => Some(".css"),
            Self::Javascript => Some(".js"),
            Self::Image => None,
        }
    }
}
