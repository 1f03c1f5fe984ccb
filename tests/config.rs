//! Tests for the layered configuration tree and its sources.

use logmate::{Config, ConfigOption, Error};
use std::fs;
use tempfile::TempDir;

fn tree(text: &str) -> Config {
    Config::parse(text).unwrap()
}

#[test]
fn scalar_reads_with_defaults() {
    let conf = tree(
        r#"
level = "warn"
retries = 3
verbose = true
[out]
name = "file"
"#,
    );
    assert_eq!(conf.get_string("level", "info"), "warn");
    assert_eq!(conf.get_string("missing", "info"), "info");
    assert_eq!(conf.get_string("retries", ""), "3");
    assert_eq!(conf.get_string("out.name", "stdout"), "file");
    // Tables are not scalars.
    assert_eq!(conf.get_string("out", "none"), "none");
    assert!(conf.get_bool("verbose", false));
    assert!(conf.get_bool("missing", true));
}

#[test]
fn string_lists() {
    let conf = tree(
        r#"
levels = ["error", "fatal"]
single = "warn"
"#,
    );
    assert_eq!(
        conf.get_string_list("levels").unwrap(),
        vec!["error".to_string(), "fatal".to_string()]
    );
    assert_eq!(conf.get_string_list("single").unwrap(), vec!["warn".to_string()]);
    assert!(conf.get_string_list("missing").is_none());
}

#[test]
fn subtrees_by_path_and_by_key() {
    let conf = tree(
        r#"
[out.options]
path = "/tmp/x.log"

[hooks."my.hook"]
enabled = true
"#,
    );
    let options = conf.get_config("out.options").unwrap();
    assert_eq!(options.get_string("path", ""), "/tmp/x.log");
    assert!(conf.get_config("formatter").is_none());

    let hooks = conf.get_config("hooks").unwrap();
    assert!(hooks.child("my.hook").unwrap().get_bool("enabled", false));
    assert!(hooks.get_config("my.hook").is_none());
}

#[test]
fn keys_keep_document_order() {
    let conf = tree(
        r"
[zeta]
[alpha]
[mid]
",
    );
    assert_eq!(conf.keys(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn fallback_fills_gaps_without_overriding() {
    let primary = tree(
        r#"
level = "warn"
[out]
name = "file"
"#,
    );
    let fallback = tree(
        r#"
level = "debug"
[out.options]
path = "/tmp/fallback.log"
[formatter]
name = "json"
"#,
    );

    let merged = primary.with_fallback(&fallback);
    assert_eq!(merged.get_string("level", ""), "warn");
    assert_eq!(merged.get_string("formatter.name", ""), "json");

    let out = merged.get_config("out").unwrap();
    assert_eq!(out.get_string("name", ""), "file");
    assert_eq!(out.get_string("options.path", ""), "/tmp/fallback.log");

    assert_eq!(merged.keys(), vec!["level", "out", "formatter"]);

    // Neither input changed.
    assert!(primary.get_config("formatter").is_none());
    assert_eq!(fallback.get_string("level", ""), "debug");
}

#[test]
fn scalar_in_primary_hides_fallback_table() {
    let primary = tree(r#"out = "stdout""#);
    let fallback = tree(
        r#"
[out]
name = "file"
"#,
    );
    assert!(primary.with_fallback(&fallback).get_config("out").is_none());
}

#[test]
fn scalar_in_primary_hides_fallback_paths_below_it() {
    let primary = tree(r#"out = "x""#);
    let fallback = tree(
        r#"
[out]
name = "file"
[out.options]
path = "/tmp/fallback.log"
"#,
    );
    let merged = primary.with_fallback(&fallback);

    assert!(merged.get_config("out").is_none());
    assert!(merged.get_config("out.options").is_none());
    assert_eq!(merged.get_string("out.name", "stdout"), "stdout");
    assert_eq!(merged.get_string("out.options.path", ""), "");
    assert_eq!(merged.get_string("out", ""), "x");

    // A fallback scalar under a path the primary does hold as a table still fills the gap.
    let primary = tree("[out]\nname = \"file\"\n");
    let fallback = tree("[out.options]\npath = \"/tmp/fallback.log\"\n");
    assert_eq!(
        primary
            .with_fallback(&fallback)
            .get_string("out.options.path", ""),
        "/tmp/fallback.log"
    );
}

#[test]
fn empty_sources() {
    assert!(Config::empty().is_empty());
    assert!(Config::from_options(&[]).unwrap().is_empty());
    assert!(tree("").is_empty());
    assert!(tree("").keys().is_empty());
}

#[test]
fn later_options_override_earlier_ones() {
    let conf = Config::from_options(&[
        ConfigOption::toml("level = \"debug\"\nname = \"first\""),
        ConfigOption::toml("level = \"error\""),
    ])
    .unwrap();
    assert_eq!(conf.get_string("level", ""), "error");
    assert_eq!(conf.get_string("name", ""), "first");
}

#[test]
fn tree_option_is_used_as_is() {
    let conf = Config::from_options(&[ConfigOption::tree(tree("level = \"warn\""))]).unwrap();
    assert_eq!(conf.get_string("level", ""), "warn");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::from_options(&[ConfigOption::toml("level = ")]).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = ConfigOption::file(tmp_dir.path().join("nope.toml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn file_sources_are_layered_under_the_including_file() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    fs::write(
        &base_path,
        r#"
source = "child.toml"

[default]
level = "warn"
"#,
    )
    .unwrap();
    fs::write(
        &child_path,
        r#"
[default]
level = "debug"
[default.formatter]
name = "json"

[audit]
level = "error"
"#,
    )
    .unwrap();

    let conf = ConfigOption::file(&base_path).load().unwrap();
    assert_eq!(conf.keys(), vec!["default", "audit"]);
    assert_eq!(conf.get_string("default.level", ""), "warn");
    assert_eq!(conf.get_string("default.formatter.name", ""), "json");
    assert_eq!(conf.get_string("audit.level", ""), "error");
}

#[test]
fn missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    fs::write(
        &base_path,
        format!(
            "source = \"{}\"\n[default]\nlevel = \"warn\"\n",
            tmp_dir.path().join("missing.toml").display()
        ),
    )
    .unwrap();

    let conf = ConfigOption::file(&base_path).load().unwrap();
    assert_eq!(conf.get_string("default.level", ""), "warn");
}

#[test]
fn cyclic_sources_error() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    fs::write(&a_path, format!("source = \"{}\"", b_path.display())).unwrap();
    fs::write(&b_path, format!("source = \"{}\"", a_path.display())).unwrap();

    let err = ConfigOption::file(&a_path).load().unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn shared_source_is_not_a_cycle() {
    let tmp_dir = TempDir::new().unwrap();
    fs::write(
        tmp_dir.path().join("root.toml"),
        "source = \"left.toml\"\nsource = \"right.toml\"\n",
    )
    .unwrap();
    fs::write(tmp_dir.path().join("left.toml"), "source = \"common.toml\"\n").unwrap();
    fs::write(tmp_dir.path().join("right.toml"), "source = \"common.toml\"\n").unwrap();
    fs::write(
        tmp_dir.path().join("common.toml"),
        "[default]\nlevel = \"trace\"\n",
    )
    .unwrap();

    let conf = ConfigOption::file(tmp_dir.path().join("root.toml"))
        .load()
        .unwrap();
    assert_eq!(conf.get_string("default.level", ""), "trace");
}
