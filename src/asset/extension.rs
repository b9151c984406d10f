//! Extension namespace parsing.
//!
//! Namespaces follow the `<prefix>_<name>` convention: `com_example`,
//! `mod_example`, `plg_example_test`. The prefix decides which directory
//! tree the extension's assets live under.

use std::path::{Path, PathBuf};

use crate::config::DeployConfig;

/// Which extension type a namespace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    Component,
    Module,
    Plugin,
    /// Empty or unprefixed namespace. Resolves to no directory.
    Unknown,
}

impl ExtensionType {
    /// Classify a namespace by its prefix.
    pub fn parse(name: &str) -> Self {
        if name.starts_with("com_") {
            Self::Component
        } else if name.starts_with("mod_") {
            Self::Module
        } else if name.starts_with("plg_") {
            Self::Plugin
        } else {
            Self::Unknown
        }
    }
}

/// Directory of an extension's files, relative to the deployment root.
///
/// Components and modules live in a directory named after the full
/// namespace; plugins nest by folder and element
/// (`plg_example_test` → `plugins/example/test`).
///
/// Returns `None` for unknown namespaces and for plugin namespaces missing
/// the folder/element split.
pub fn relative_dir(name: &str, config: &DeployConfig) -> Option<PathBuf> {
    match ExtensionType::parse(name) {
        ExtensionType::Component => Some(Path::new(&config.extensions.components).join(name)),
        ExtensionType::Module => Some(Path::new(&config.extensions.modules).join(name)),
        ExtensionType::Plugin => {
            let rest = name.strip_prefix("plg_")?;
            let (folder, element) = rest.split_once('_')?;
            if folder.is_empty() || element.is_empty() {
                return None;
            }
            Some(Path::new(&config.extensions.plugins).join(folder).join(element))
        }
        ExtensionType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ExtensionType::parse("com_example"), ExtensionType::Component);
        assert_eq!(ExtensionType::parse("mod_example"), ExtensionType::Module);
        assert_eq!(ExtensionType::parse("plg_example_test"), ExtensionType::Plugin);
        assert_eq!(ExtensionType::parse(""), ExtensionType::Unknown);
        assert_eq!(ExtensionType::parse("example"), ExtensionType::Unknown);
    }

    #[test]
    fn test_relative_dir_component() {
        let config = DeployConfig::default();
        assert_eq!(
            relative_dir("com_example", &config),
            Some(PathBuf::from("components/com_example"))
        );
    }

    #[test]
    fn test_relative_dir_module() {
        let config = DeployConfig::default();
        assert_eq!(
            relative_dir("mod_example", &config),
            Some(PathBuf::from("modules/mod_example"))
        );
    }

    #[test]
    fn test_relative_dir_plugin() {
        let config = DeployConfig::default();
        assert_eq!(
            relative_dir("plg_example_test", &config),
            Some(PathBuf::from("plugins/example/test"))
        );
        // Element names may themselves contain underscores
        assert_eq!(
            relative_dir("plg_groups_forum_tools", &config),
            Some(PathBuf::from("plugins/groups/forum_tools"))
        );
    }

    #[test]
    fn test_relative_dir_unresolvable() {
        let config = DeployConfig::default();
        assert_eq!(relative_dir("", &config), None);
        assert_eq!(relative_dir("example", &config), None);
        assert_eq!(relative_dir("plg_broken", &config), None);
    }
}
