//! Asset resolution: namespaces, attribute sets, descriptors.

mod attrs;
mod descriptor;
mod extension;
mod group;
mod kind;

pub use attrs::{ScriptAttrs, StyleAttrs};
pub use descriptor::Asset;
pub use extension::ExtensionType;
pub use group::apply_group_override;
pub use kind::AssetKind;
