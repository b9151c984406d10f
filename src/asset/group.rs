//! Group override: redirect component assets to a shared directory.

use log::trace;

use crate::config::DeployConfig;

use super::{Asset, ExtensionType};

/// Rewrite a component asset's source into the configured group override
/// directory: `<group_root>/assets/<css|js>/<file>`.
///
/// Only component-scoped file assets are candidates; declarations, external
/// links, and module/plugin assets pass through. With no group root
/// configured this is a pure pass-through, which is the common case.
///
/// Runs before the existence check, so a group deployment that does not ship
/// the file turns the inject call into a no-op rather than falling back.
pub fn apply_group_override(asset: &mut Asset, config: &DeployConfig) {
    if asset.extension_type() != ExtensionType::Component
        || asset.is_declaration()
        || asset.is_external()
    {
        return;
    }

    let Some(group_root) = config.group.root.as_ref() else {
        return;
    };
    let Some(file) = asset.file_name() else {
        return;
    };

    let path = group_root
        .join("assets")
        .join(asset.kind().subdir())
        .join(&file);
    trace!("group override: {} -> {}", asset.extension_name(), path.display());
    asset.set_source(path, config);
}
