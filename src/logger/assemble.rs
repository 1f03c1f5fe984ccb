//! Turns one profile subtree into a fully wired logger.
//!
//! ```toml
//! level = "warn"                 # default "info"
//! [out]                          # default { name = "stdout" }
//! name = "file"
//! options = { path = "/var/log/app.log" }
//! [formatter]                    # default { name = "text" }
//! name = "json"
//! [hooks.file]                   # one table per hook, fired in document order
//! path = "/var/log/app-errors.log"
//! levels = ["error"]
//! ```

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::registry::Providers;
use crate::Error;

pub const DEFAULT_OUTPUT: &str = "stdout";
pub const DEFAULT_FORMATTER: &str = "text";
pub const DEFAULT_LEVEL: &str = "info";

/// Resolves every component named in `conf` and publishes them onto `target` in one swap.
///
/// `None` is a successful no-op. On any failure `target` is left exactly as it was.
///
/// # Errors
/// Provider resolution errors pass through unchanged; an unknown level is
/// [`Error::InvalidLevel`].
pub fn assemble(conf: Option<&Config>, providers: &Providers, target: &Logger) -> Result<(), Error> {
    let Some(conf) = conf else {
        return Ok(());
    };

    let (out_name, out_options) = component(conf, "out", DEFAULT_OUTPUT);
    let output = providers.resolve_output(&out_name, out_options.as_ref())?;

    let (formatter_name, formatter_options) = component(conf, "formatter", DEFAULT_FORMATTER);
    let formatter = providers.resolve_formatter(&formatter_name, formatter_options.as_ref())?;

    let mut hooks = Vec::new();
    let mut hook_names = Vec::new();
    if let Some(hooks_conf) = conf.get_config("hooks") {
        for name in hooks_conf.keys() {
            let options = hooks_conf.child(&name).unwrap_or_default();
            hooks.push(providers.resolve_hook(&name, &options)?);
            hook_names.push(name);
        }
    }

    let level = conf.get_string("level", "");
    let level: Level = if level.is_empty() {
        DEFAULT_LEVEL
    } else {
        level.as_str()
    }
    .parse()?;

    let state = LoggerBuilder::new()
        .level(level)
        .output(output)
        .formatter(formatter)
        .hooks(hooks)
        .build_state();
    target.publish(state);

    internal::debug(
        "ASSEMBLE",
        &format!(
            "level={level} out={out_name} formatter={formatter_name} hooks=[{}]",
            hook_names.join(", ")
        ),
    );
    Ok(())
}

/// `name` and `options` of a component section, with the section itself optional.
fn component(conf: &Config, key: &str, default_name: &str) -> (String, Option<Config>) {
    conf.get_config(key).map_or_else(
        || (default_name.to_string(), None),
        |section| {
            (
                section.get_string("name", default_name),
                section.get_config("options"),
            )
        },
    )
}
