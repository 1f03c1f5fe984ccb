//! Tests for the text and JSON formatters.

use logmate::fmt::{FormatSegment, FormatTemplate, Placeholder};
use logmate::{Config, Entry, Error, Formatter, JsonFormatter, Level, TextFormatter};

fn entry() -> Entry {
    Entry::new(Level::Warn, "disk low").field("mount", "/var")
}

#[test]
fn template_parses_known_placeholders() {
    let template = FormatTemplate::parse("{level}: {msg}");
    assert_eq!(
        template.segments(),
        &[
            FormatSegment::Placeholder(Placeholder::Level),
            FormatSegment::Literal(": ".to_string()),
            FormatSegment::Placeholder(Placeholder::Msg),
        ]
    );
}

#[test]
fn unknown_placeholder_stays_literal() {
    let text = TextFormatter::new()
        .template("{host} {msg}")
        .render(&entry())
        .unwrap();
    assert_eq!(text, "{host} disk low");
}

#[test]
fn unclosed_brace_stays_literal() {
    let text = TextFormatter::new()
        .template("{msg} {oops")
        .render(&entry())
        .unwrap();
    assert_eq!(text, "disk low {oops");
}

#[test]
fn default_text_layout() {
    let line = TextFormatter::new().format(&entry()).unwrap();
    let line = String::from_utf8(line).unwrap();
    assert!(line.ends_with("[warn] disk low mount=/var\n"));
}

#[test]
fn text_options_from_config() {
    let conf = Config::parse(
        r#"
template = "{timestamp}|{level}|{msg}"
timestamp_format = "%Y"
uppercase_level = true
"#,
    )
    .unwrap();
    let e = entry();
    let text = TextFormatter::from_config(Some(&conf)).render(&e).unwrap();
    assert_eq!(text, format!("{}|WARN|disk low", e.time.format("%Y")));
}

#[test]
fn bad_timestamp_format_is_an_error() {
    let err = TextFormatter::new()
        .timestamp_format("%Q%")
        .render(&entry())
        .unwrap_err();
    assert!(matches!(err, Error::Format(_)));

    let err = JsonFormatter::new()
        .timestamp_format("%Q%")
        .format(&entry())
        .unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn json_has_core_keys_and_fields() {
    let bytes = JsonFormatter::new().format(&entry()).unwrap();
    assert_eq!(bytes.last(), Some(&b'\n'));

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["level"], "warn");
    assert_eq!(value["msg"], "disk low");
    assert_eq!(value["mount"], "/var");
    assert!(value["ts"].as_str().is_some_and(|ts| ts.contains('T')));
    assert!(value.get("id").is_none());
}

#[test]
fn json_with_id_adds_a_ulid() {
    let conf = Config::parse("with_id = true").unwrap();
    let bytes = JsonFormatter::from_config(Some(&conf)).format(&entry()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let id = value["id"].as_str().unwrap();
    assert_eq!(id.len(), 26);
}

#[test]
fn json_reserved_field_names_are_moved_aside() {
    let e = Entry::new(Level::Info, "real").field("msg", "shadow");
    let bytes = JsonFormatter::new().format(&e).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["msg"], "real");
    assert_eq!(value["fields.msg"], "shadow");
}
