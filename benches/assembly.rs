use criterion::{Criterion, criterion_group, criterion_main};
use logmate::fmt::{FormatTemplate, FormatValues};
use logmate::{
    Config, ConfigOption, Entry, Formatter, JsonFormatter, Level, Logger, Mate, Providers,
    TextFormatter, assemble,
};
use std::hint::black_box;

const PROFILE: &str = r#"
level = "debug"
[out]
name = "null"
[formatter]
name = "json"
[formatter.options]
with_id = true
"#;

const PROFILES: &str = r#"
[default]
level = "debug"
[default.out]
name = "null"
[default.formatter]
name = "json"
[default.formatter.options]
with_id = true
"#;

fn bench_assemble(c: &mut Criterion) {
    let conf = Config::parse(PROFILE).unwrap();
    let providers = Providers::builtin();
    let logger = Logger::new();

    c.bench_function("assemble", |b| {
        b.iter(|| assemble(Some(black_box(&conf)), &providers, &logger).unwrap());
    });
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mate = Mate::new(&[ConfigOption::toml(PROFILES)]).unwrap();
    assert_eq!(mate.logger_names(), vec!["default".to_string()]);
    assert_eq!(mate.logger(None).unwrap().level(), Level::Debug);

    let mut group = c.benchmark_group("Mate::logger");
    group.bench_function("cached", |b| {
        b.iter(|| mate.logger(black_box(None)));
    });
    group.bench_function("by_name", |b| {
        b.iter(|| mate.logger(black_box(Some("default"))));
    });
    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let entry = Entry::new(Level::Info, "Application started successfully")
        .field("user", "ada")
        .field("attempt", "3");

    let template = FormatTemplate::default();
    let values = FormatValues::new()
        .timestamp("2025-01-15 14:30:00")
        .level("info")
        .msg("Application started successfully");
    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });

    let mut group = c.benchmark_group("Formatter::format");
    let text = TextFormatter::new();
    group.bench_function("text", |b| {
        b.iter(|| text.format(black_box(&entry)).unwrap());
    });
    let json = JsonFormatter::new();
    group.bench_function("json", |b| {
        b.iter(|| json.format(black_box(&entry)).unwrap());
    });
    group.finish();
}

fn bench_filtered_log(c: &mut Criterion) {
    let logger = Logger::builder().level(Level::Error).build();
    c.bench_function("Logger::debug (filtered)", |b| {
        b.iter(|| logger.debug(black_box("dropped before formatting")));
    });
}

criterion_group!(
    benches,
    bench_assemble,
    bench_cached_lookup,
    bench_formatters,
    bench_filtered_log
);
criterion_main!(benches);
