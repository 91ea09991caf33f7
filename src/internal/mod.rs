//! patlog's own diagnostic log, rendered through the same directive pipeline it serves
//! and written to stderr.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several entry
//! points race to call `init`. Nothing is emitted before that.

use crate::config::Config;
use crate::entry::Entry;
use crate::fmt::{DEFAULT_LEVEL_TEMPLATE, DEFAULT_TIME_LAYOUT, Directive, Pattern};
use crate::level::Level;
use crate::render::Renderer;
use std::io::Write;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

const APP_NAME: &str = "patlog";

struct InternalLogger {
    min_level: Level,
    renderer: Renderer,
    pattern: Pattern,
}

impl InternalLogger {
    fn new(min_level: Level) -> Self {
        Self {
            min_level,
            renderer: Renderer::default(),
            pattern: Pattern::new([
                Directive::time(DEFAULT_TIME_LAYOUT),
                Directive::level(DEFAULT_LEVEL_TEMPLATE),
                Directive::app_name(),
                Directive::message(),
                Directive::fields(),
            ]),
        }
    }
}

/// Only the first call takes effect; later calls are no-ops.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| InternalLogger::new(level));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Takes the diagnostic level from `[general] level`.
pub fn init_with_config(config: &Config) {
    init(config.parse_level());
}

/// Pre-init calls silently vanish rather than crashing, so early startup is safe.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if level < logger.min_level {
        return;
    }

    let entry = Entry::new(level, msg)
        .app_name(APP_NAME)
        .field("scope", scope);
    let line = logger.renderer.render(&logger.pattern, &entry);
    let _ = std::io::stderr().lock().write_all(&line);
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Formats that degrade to defaults are reported here.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
