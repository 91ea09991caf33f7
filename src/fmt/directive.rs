//! Compiled pattern steps. An upstream pattern compiler hands over `{kind, name, format}`
//! triples; each format is parsed once here so the render hot path never re-scans it.

use super::layout::TimeLayout;
use super::printf::ValueFormat;
use crate::internal;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// Closed set of directive kinds. `Unknown` must never reach the renderer but is skipped if it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Level,
    AppName,
    InstanceName,
    RequestId,
    Principal,
    Time,
    UtcTime,
    LongFile,
    ShortFile,
    Line,
    Message,
    Fields,
    Custom,
    Unknown,
}

impl DirectiveKind {
    /// Every kind an upstream compiler may produce; `Unknown` is deliberately absent.
    pub const ALL: &'static [Self] = &[
        Self::Level,
        Self::AppName,
        Self::InstanceName,
        Self::RequestId,
        Self::Principal,
        Self::Time,
        Self::UtcTime,
        Self::LongFile,
        Self::ShortFile,
        Self::Line,
        Self::Message,
        Self::Fields,
        Self::Custom,
    ];

    /// The name used in pattern text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::AppName => "appname",
            Self::InstanceName => "insname",
            Self::RequestId => "reqid",
            Self::Principal => "principal",
            Self::Time => "time",
            Self::UtcTime => "utctime",
            Self::LongFile => "longfile",
            Self::ShortFile => "shortfile",
            Self::Line => "line",
            Self::Message => "message",
            Self::Fields => "fields",
            Self::Custom => "custom",
            Self::Unknown => "unknown",
        }
    }

    /// Exact, lowercase match against the pattern vocabulary.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectiveError(String);

impl fmt::Display for ParseDirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown directive: '{}'", self.0)
    }
}

impl std::error::Error for ParseDirectiveError {}

impl FromStr for DirectiveKind {
    type Err = ParseDirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseDirectiveError(s.to_string()))
    }
}

/// Kind-specific interpretation of a directive's format string.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSpec {
    /// The kind ignores its format string.
    Ignored,
    /// printf-style template for `level`, `longfile`, `shortfile` and `line`.
    Value(ValueFormat),
    /// Date/time layout for `time` and `utctime`.
    Time(TimeLayout),
    /// `custom` emits the format string itself.
    Literal,
}

impl FormatSpec {
    fn compile(kind: DirectiveKind, format: &str) -> Self {
        match kind {
            DirectiveKind::Level
            | DirectiveKind::LongFile
            | DirectiveKind::ShortFile
            | DirectiveKind::Line => {
                let value = ValueFormat::parse(format);
                if value == ValueFormat::Plain && !format.is_empty() {
                    internal::debug(
                        "DIRECTIVE",
                        &format!("{kind}: template '{format}' not usable, rendering plain value"),
                    );
                }
                Self::Value(value)
            }
            DirectiveKind::Time | DirectiveKind::UtcTime => {
                let layout = TimeLayout::parse(format);
                if layout.is_default() && !format.is_empty() {
                    internal::debug(
                        "DIRECTIVE",
                        &format!("{kind}: layout '{format}' not usable, rendering default time"),
                    );
                }
                Self::Time(layout)
            }
            DirectiveKind::Custom => Self::Literal,
            DirectiveKind::AppName
            | DirectiveKind::InstanceName
            | DirectiveKind::RequestId
            | DirectiveKind::Principal
            | DirectiveKind::Message
            | DirectiveKind::Fields
            | DirectiveKind::Unknown => Self::Ignored,
        }
    }
}

/// One step of a compiled pattern. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    kind: DirectiveKind,
    name: String,
    format: String,
    spec: FormatSpec,
}

impl Directive {
    /// Name defaults to the kind's vocabulary name.
    #[must_use]
    pub fn new(kind: DirectiveKind, format: impl Into<String>) -> Self {
        Self::named(kind, kind.as_str(), format)
    }

    /// The name is kept for diagnostics only; rendering dispatches on `kind`.
    #[must_use]
    pub fn named(kind: DirectiveKind, name: impl Into<String>, format: impl Into<String>) -> Self {
        let format = format.into();
        let spec = FormatSpec::compile(kind, &format);
        Self {
            kind,
            name: name.into(),
            format,
            spec,
        }
    }

    #[must_use]
    pub fn level(template: &str) -> Self {
        Self::new(DirectiveKind::Level, template)
    }

    #[must_use]
    pub fn app_name() -> Self {
        Self::new(DirectiveKind::AppName, "")
    }

    #[must_use]
    pub fn instance_name() -> Self {
        Self::new(DirectiveKind::InstanceName, "")
    }

    #[must_use]
    pub fn request_id() -> Self {
        Self::new(DirectiveKind::RequestId, "")
    }

    #[must_use]
    pub fn principal() -> Self {
        Self::new(DirectiveKind::Principal, "")
    }

    #[must_use]
    pub fn time(layout: &str) -> Self {
        Self::new(DirectiveKind::Time, layout)
    }

    #[must_use]
    pub fn utc_time(layout: &str) -> Self {
        Self::new(DirectiveKind::UtcTime, layout)
    }

    #[must_use]
    pub fn long_file(template: &str) -> Self {
        Self::new(DirectiveKind::LongFile, template)
    }

    #[must_use]
    pub fn short_file(template: &str) -> Self {
        Self::new(DirectiveKind::ShortFile, template)
    }

    #[must_use]
    pub fn line(template: &str) -> Self {
        Self::new(DirectiveKind::Line, template)
    }

    #[must_use]
    pub fn message() -> Self {
        Self::new(DirectiveKind::Message, "")
    }

    #[must_use]
    pub fn fields() -> Self {
        Self::new(DirectiveKind::Fields, "")
    }

    /// Literal text such as a `-` separator.
    #[must_use]
    pub fn custom(text: &str) -> Self {
        Self::new(DirectiveKind::Custom, text)
    }

    #[must_use]
    pub const fn kind(&self) -> DirectiveKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The format string exactly as it was handed in.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub const fn spec(&self) -> &FormatSpec {
        &self.spec
    }
}

/// Layout of the default pattern: `2016-07-02 22:26:01.530 INFO  message`.
pub const DEFAULT_TIME_LAYOUT: &str = "YYYY-MM-DD HH:mm:ss.SSS";
pub const DEFAULT_LEVEL_TEMPLATE: &str = "%-5s";

/// Immutable, shareable directive sequence; clone it into as many threads as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    directives: Arc<[Directive]>,
}

impl Pattern {
    #[must_use]
    pub fn new(directives: impl IntoIterator<Item = Directive>) -> Self {
        Self {
            directives: directives.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new([
            Directive::time(DEFAULT_TIME_LAYOUT),
            Directive::level(DEFAULT_LEVEL_TEMPLATE),
            Directive::message(),
        ])
    }
}

impl Deref for Pattern {
    type Target = [Directive];

    fn deref(&self) -> &Self::Target {
        &self.directives
    }
}

impl FromIterator<Directive> for Pattern {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        Self::new(iter)
    }
}
