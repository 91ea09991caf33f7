//! Walks a compiled directive sequence once and turns an [`Entry`] into one text line.
//!
//! Rendering is total: every directive kind has an output for every entry state, malformed
//! formats were already degraded at compile time, and unknown kinds are skipped.

use crate::entry::{Entry, display_value};
use crate::fmt::{Directive, DirectiveKind, FieldFilter, FormatSpec, TimeLayout};
use chrono::Utc;

/// Written after every non-empty directive, including the last one.
const SEPARATOR: char = ' ';

/// Holds no per-call state, so one renderer can serve every thread.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    filter: FieldFilter,
}

impl Renderer {
    /// The filter is shared, not copied: replacing its contents later affects this renderer.
    #[must_use]
    pub const fn new(filter: FieldFilter) -> Self {
        Self { filter }
    }

    #[must_use]
    pub const fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    /// Formats `entry` per `directives`; the result always ends with exactly one `\n`.
    #[must_use]
    pub fn render(&self, directives: &[Directive], entry: &Entry) -> Vec<u8> {
        self.render_string(directives, entry).into_bytes()
    }

    /// Appends to a caller-owned buffer so sinks can reuse their allocation.
    pub fn render_into(&self, directives: &[Directive], entry: &Entry, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.render_string(directives, entry).as_bytes());
    }

    #[must_use]
    pub fn render_string(&self, directives: &[Directive], entry: &Entry) -> String {
        let mut out = String::with_capacity(128);
        for directive in directives {
            self.write_directive(directive, entry, &mut out);
        }
        out.push('\n');
        out
    }

    fn write_directive(&self, directive: &Directive, entry: &Entry, out: &mut String) {
        match directive.kind() {
            DirectiveKind::Level => {
                out.push_str(&format_str(directive, entry.level.as_str()));
                out.push(SEPARATOR);
            }
            DirectiveKind::AppName => write_optional(&entry.app_name, out),
            DirectiveKind::InstanceName => write_optional(&entry.instance_name, out),
            DirectiveKind::RequestId => write_optional(&entry.request_id, out),
            DirectiveKind::Principal => write_optional(&entry.principal, out),
            DirectiveKind::Time => {
                time_layout(directive).format_into(&entry.time, out);
                out.push(SEPARATOR);
            }
            DirectiveKind::UtcTime => {
                time_layout(directive).format_into(&entry.time.with_timezone(&Utc), out);
                out.push(SEPARATOR);
            }
            DirectiveKind::LongFile => {
                out.push_str(&format_str(directive, &entry.file));
                out.push(SEPARATOR);
            }
            DirectiveKind::ShortFile => {
                out.push_str(&format_str(directive, short_file(&entry.file)));
                out.push(SEPARATOR);
            }
            DirectiveKind::Line => {
                out.push('L');
                out.push_str(&format_uint(directive, u64::from(entry.line)));
                out.push(SEPARATOR);
            }
            DirectiveKind::Message => {
                out.push_str(&entry.message);
                out.push(SEPARATOR);
            }
            DirectiveKind::Custom => {
                out.push_str(directive.format());
                out.push(SEPARATOR);
            }
            DirectiveKind::Fields => self.write_fields(entry, out),
            DirectiveKind::Unknown => {}
        }
    }

    /// Keys are sorted so the same entry always renders the same bytes.
    fn write_fields(&self, entry: &Entry, out: &mut String) {
        let excluded = self.filter.snapshot();
        let mut pairs: Vec<_> = entry
            .fields
            .iter()
            .filter(|(key, _)| !excluded.contains(key.as_str()))
            .collect();
        if pairs.is_empty() {
            return;
        }
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

        out.push_str("fields[");
        for (i, (key, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&display_value(value));
        }
        out.push(']');
        out.push(SEPARATOR);
    }
}

/// Final path element, splitting on both `/` and `\` regardless of platform.
///
/// Trailing separators are ignored; an empty path yields `.` and a path made only of
/// separators yields its first separator.
#[must_use]
pub fn short_file(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return &path[..1];
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

fn write_optional(value: &str, out: &mut String) {
    if !value.is_empty() {
        out.push_str(value);
        out.push(SEPARATOR);
    }
}

fn format_str(directive: &Directive, value: &str) -> String {
    match directive.spec() {
        FormatSpec::Value(template) => template.format_str(value),
        _ => value.to_string(),
    }
}

fn format_uint(directive: &Directive, value: u64) -> String {
    match directive.spec() {
        FormatSpec::Value(template) => template.format_uint(value),
        _ => value.to_string(),
    }
}

fn time_layout(directive: &Directive) -> &TimeLayout {
    const FALLBACK: &TimeLayout = &TimeLayout::Default;
    match directive.spec() {
        FormatSpec::Time(layout) => layout,
        _ => FALLBACK,
    }
}
