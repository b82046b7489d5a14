//! Integration tests for the language registry.
//!
//! These tests exercise the public API end to end: global discovery, lookup,
//! instantiation, rendering, and the error paths for unknown tags, empty
//! registration tables, and failing plugin constructors.

use std::collections::HashSet;

use lemma_render::{
    lang_code, LanguagePlugin, PluginRegistration, Registry, RegistryError,
};

// ==================== Test Helpers ====================

fn fallback_factory() -> anyhow::Result<Box<dyn LanguagePlugin>> {
    struct Fallback;
    impl LanguagePlugin for Fallback {}
    Ok(Box::new(Fallback))
}

// ==================== Global Registry Tests ====================

#[test]
fn test_builtin_languages_are_collected() {
    let registry = Registry::global().expect("discovery should succeed");

    let expected: HashSet<&str> = ["de-DE", "en-US"].into_iter().collect();
    assert_eq!(registry.supported_languages(), expected);
}

#[test]
fn test_every_supported_language_resolves() {
    let registry = Registry::global().expect("discovery should succeed");

    for tag in registry.supported_languages() {
        let entry = registry.get_class(tag).expect("listed tag should resolve");
        assert_eq!(entry.tag(), tag);
        assert_eq!(entry.lang_code(), lang_code(tag));
    }
}

#[test]
fn test_supported_languages_is_idempotent() {
    let registry = Registry::global().expect("discovery should succeed");

    let first = registry.supported_languages();
    let second = registry.supported_languages();
    assert_eq!(first, second);
}

// ==================== Rendering Tests ====================

#[test]
fn test_german_instance_renders_with_locale_prefix() {
    let registry = Registry::global().expect("discovery should succeed");

    let instance = registry.get_instance("de-DE").expect("should construct");
    assert_eq!(instance.render("a"), "rendered (DE): a");
}

#[test]
fn test_english_instance_renders_with_fallback() {
    let registry = Registry::global().expect("discovery should succeed");

    let instance = registry.get_instance("en-US").expect("should construct");
    assert_eq!(instance.render("a"), "rendered: a");
}

// ==================== Error Path Tests ====================

#[test]
fn test_unregistered_tag_fails_lookup() {
    let registry = Registry::global().expect("discovery should succeed");

    let err = registry
        .get_class("fr-FR")
        .expect_err("fr-FR is not registered");
    match err {
        RegistryError::UnknownLanguage { tag } => assert_eq!(tag, "fr-FR"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_registration_table_is_fatal() {
    let err = Registry::discover(&[]).expect_err("no registrations should be fatal");
    assert!(matches!(err, RegistryError::PluginDiscovery));
}

#[test]
fn test_failing_constructor_propagates_plugin_error() {
    let registry = Registry::discover(&[PluginRegistration {
        tag: "xx-XX",
        factory: || anyhow::bail!("language model 'xx_core' is not installed"),
    }])
    .expect("discovery should succeed");

    let err = registry
        .get_instance("xx-XX")
        .expect_err("construction should fail");
    match err {
        RegistryError::PluginConstruction { tag, source } => {
            assert_eq!(tag, "xx-XX");
            // The plugin's own error reaches the caller unchanged.
            assert_eq!(source.to_string(), "language model 'xx_core' is not installed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ==================== Custom Table Tests ====================

#[test]
fn test_registry_from_explicit_registrations() {
    let registry = Registry::discover(&[
        PluginRegistration {
            tag: "nl-NL",
            factory: fallback_factory,
        },
        PluginRegistration {
            tag: "nl-BE",
            factory: fallback_factory,
        },
    ])
    .expect("discovery should succeed");

    let expected: HashSet<&str> = ["nl-NL", "nl-BE"].into_iter().collect();
    assert_eq!(registry.supported_languages(), expected);
    assert_eq!(registry.get_class("nl-BE").unwrap().lang_code(), "nl");
}
