//! End-to-end injector behavior against a real deployment tree.

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use pagehead::{
    Asset, AssetInjector, AssetKind, CallerRole, DeployConfig, HeadDocument, HeadEntry,
    ImageOptions, RequestContext, ScriptOptions, StyleOptions,
};

/// Build a deployment with one component, one module, and one plugin,
/// each shipping a couple of assets.
fn make_site() -> (TempDir, DeployConfig) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let write = |rel: &str, contents: &str| {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    };

    write("components/com_example/assets/css/site.css", "body {}");
    write("components/com_example/assets/js/site.js", "init();");
    write("components/com_example/assets/img/logo.png", "png");
    write("modules/mod_example/assets/css/module.css", ".module {}");
    write("plugins/example/test/assets/css/plugin.css", ".plugin {}");

    let config = DeployConfig::default().with_root(root);
    (dir, config)
}

#[test]
fn stylesheet_dispatches_to_linked_sink() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("site.css");

    assert_eq!(doc.len(), 1);
    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, attrs } => {
            assert_eq!(link, "/components/com_example/assets/css/site.css");
            assert_eq!(attrs.mime, "text/css");
            assert!(attrs.media.is_none());
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn inline_content_dispatches_to_declaration_sink() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("body { color: red; }")
        .add_script("window.ready = true;");

    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc.entries()[0], HeadEntry::StyleDeclaration(css) if css == "body { color: red; }"));
    assert!(matches!(&doc.entries()[1], HeadEntry::ScriptDeclaration(js) if js == "window.ready = true;"));
}

#[test]
fn missing_asset_is_a_silent_noop_and_chain_continues() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("missing.css")
        .add_script("missing.js")
        .add_stylesheet("site.css");

    // The two misses made no registry calls; the chain still delivered
    // the third asset.
    assert_eq!(doc.len(), 1);
}

#[test]
fn unknown_caller_resolves_nothing() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::Unknown, &mut doc).add_stylesheet("site.css");

    assert!(doc.is_empty());
}

#[test]
fn plugin_caller_resolves_plugin_assets() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::plugin("example", "test"), &mut doc)
        .add_stylesheet("plugin.css");

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/plugins/example/test/assets/css/plugin.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn module_caller_resolves_module_assets() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::module("mod_example"), &mut doc)
        .add_stylesheet("module.css");

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/modules/mod_example/assets/css/module.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn controller_reads_option_from_request() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    let request = RequestContext::new().with_param("option", "com_example");
    AssetInjector::new(&config, CallerRole::controller("com_other"), &mut doc)
        .with_request(request)
        .add_stylesheet("site.css");

    assert_eq!(doc.len(), 1);
}

#[test]
fn explicit_extension_override_wins() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::module("mod_example"), &mut doc)
        .add_stylesheet_with("site.css", StyleOptions::new().extension("com_example"));

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/components/com_example/assets/css/site.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn plugin_element_rewrites_namespace() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    // Caller is the "example" plugin folder; element selects the sibling
    // "test" plugin's assets.
    AssetInjector::new(&config, CallerRole::plugin("example", "page"), &mut doc)
        .add_stylesheet_with("plugin.css", StyleOptions::new().element("test"));

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/plugins/example/test/assets/css/plugin.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn style_attribute_overrides_merge_and_drop_unknown_keys() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet_with(
            "site.css",
            StyleOptions::new()
                .attr("media", json!("print"))
                .attr("onload", json!("evil()")),
        );

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { attrs, .. } => {
            assert_eq!(attrs.media.as_deref(), Some("print"));
            assert!(attrs.attribs.is_empty());
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn script_defer_and_async_overrides() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_script_with(
            "site.js",
            ScriptOptions::new().attr("defer", json!(true)).attr("async", json!(true)),
        );

    match &doc.entries()[0] {
        HeadEntry::Script { link, attrs } => {
            assert_eq!(link, "/components/com_example/assets/js/site.js");
            assert!(attrs.defer);
            assert!(attrs.r#async);
        }
        other => panic!("expected linked script, got {other:?}"),
    }
}

#[test]
fn external_url_is_linked_verbatim() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_script("https://cdn.example.com/lib.js");

    match &doc.entries()[0] {
        HeadEntry::Script { link, .. } => assert_eq!(link, "https://cdn.example.com/lib.js"),
        other => panic!("expected linked script, got {other:?}"),
    }
}

#[test]
fn image_path_matches_direct_resolution_and_never_fails() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    let injector = AssetInjector::new(&config, CallerRole::Unknown, &mut doc);

    let via_injector =
        injector.image_path_with("logo.png", ImageOptions::new().extension("com_example"));
    let direct = Asset::resolve(AssetKind::Image, "com_example", "logo.png", &config).link();
    assert_eq!(via_injector, direct);
    assert_eq!(via_injector, "/components/com_example/assets/img/logo.png");

    // Missing file: still a link, no gate.
    let missing =
        injector.image_path_with("ghost.png", ImageOptions::new().extension("com_example"));
    assert_eq!(missing, "/components/com_example/assets/img/ghost.png");
}

#[test]
fn group_override_rewrites_component_stylesheet() {
    let (site, mut config) = make_site();
    let group_root = site.path().join("site/groups/hub");
    fs::create_dir_all(group_root.join("assets/css")).unwrap();
    fs::write(group_root.join("assets/css/site.css"), "body { color: blue }").unwrap();
    config.group.root = Some(group_root);

    let mut doc = HeadDocument::new();
    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("site.css");

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/site/groups/hub/assets/css/site.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn group_override_leaves_modules_untouched() {
    let (site, mut config) = make_site();
    config.group.root = Some(site.path().join("site/groups/hub"));

    let mut doc = HeadDocument::new();
    AssetInjector::new(&config, CallerRole::module("mod_example"), &mut doc)
        .add_stylesheet("module.css");

    match &doc.entries()[0] {
        HeadEntry::StyleSheet { link, .. } => {
            assert_eq!(link, "/modules/mod_example/assets/css/module.css");
        }
        other => panic!("expected linked stylesheet, got {other:?}"),
    }
}

#[test]
fn group_override_without_shipped_file_noops() {
    let (site, mut config) = make_site();
    // Group root configured but the group never shipped site.css: the
    // rewrite happens before the existence check, so nothing is dispatched.
    config.group.root = Some(site.path().join("site/groups/empty"));

    let mut doc = HeadDocument::new();
    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("site.css");

    assert!(doc.is_empty());
}

#[test]
fn rendered_head_markup() {
    let (_site, config) = make_site();
    let mut doc = HeadDocument::new();

    AssetInjector::new(&config, CallerRole::controller("com_example"), &mut doc)
        .add_stylesheet("site.css")
        .add_script_with("site.js", ScriptOptions::new().attr("defer", json!(true)));

    let html = doc.render();
    assert!(html.contains(
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"/components/com_example/assets/css/site.css\" />"
    ));
    assert!(html.contains(
        "<script type=\"text/javascript\" src=\"/components/com_example/assets/js/site.js\" defer></script>"
    ));
}

#[test]
fn config_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pagehead.toml");
    fs::write(&path, "base_url = \"/cms\"\n[group]\nroot = \"/srv/groups/hub\"\n").unwrap();

    let config = DeployConfig::load(Path::new(&path)).unwrap();
    assert_eq!(config.base_url, "/cms");
    assert_eq!(config.group.root.as_deref(), Some(Path::new("/srv/groups/hub")));
}
