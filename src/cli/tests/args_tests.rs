use clap::Parser;

use super::args::{CliArgs, OutputFormat};
use scimitar_binder::{AmbiguityPolicy, BindingConfig, ProviderFlavor};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["scimitar", "bindings.json"])
        .expect("default args should parse");

    assert_eq!(args.manifest, std::path::PathBuf::from("bindings.json"));
    assert!(!args.androidx);
    assert!(!args.deny_ambiguous);
    assert!(args.observer_slot.is_none());
    assert_eq!(args.format, OutputFormat::Java);
    assert!(args.out_dir.is_none());
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "scimitar",
        "--androidx",
        "--deny-ambiguous",
        "--observer-slot",
        "usersObserver",
        "--format",
        "json",
        "-o",
        "gen",
        "bindings.json",
    ])
    .expect("flagged args should parse");

    assert!(args.androidx);
    assert!(args.deny_ambiguous);
    assert_eq!(args.observer_slot.as_deref(), Some("usersObserver"));
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.out_dir.as_deref(), Some(std::path::Path::new("gen")));
}

#[test]
fn rejects_missing_manifest_and_unknown_format() {
    assert!(CliArgs::try_parse_from(["scimitar"]).is_err());
    assert!(CliArgs::try_parse_from(["scimitar", "--format", "kotlin", "m.json"]).is_err());
}

#[test]
fn flags_override_manifest_config() {
    let args = CliArgs::try_parse_from([
        "scimitar",
        "--androidx",
        "--deny-ambiguous",
        "--observer-slot",
        "slot",
        "m.json",
    ])
    .expect("args should parse");
    let resolved = args.resolve_config(&BindingConfig::default());

    assert_eq!(resolved.provider, ProviderFlavor::AndroidX);
    assert_eq!(resolved.ambiguity, AmbiguityPolicy::Deny);
    assert_eq!(resolved.observer_slot, "slot");
    assert_eq!(resolved.target_param, "target");
}

#[test]
fn absent_flags_keep_manifest_config() {
    let args = CliArgs::try_parse_from(["scimitar", "m.json"]).expect("args should parse");
    let manifest = BindingConfig::new(true)
        .with_ambiguity(AmbiguityPolicy::Deny)
        .with_observer_slot("fromManifest");

    assert_eq!(args.resolve_config(&manifest), manifest);
}
