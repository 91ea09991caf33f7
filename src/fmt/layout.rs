//! Date/time layouts for the `time` and `utctime` directives.
//!
//! Two syntaxes are accepted. A layout containing `%` is a chrono strftime string
//! (`%Y-%m-%d %H:%M:%S%.3f`). Anything else uses tokens (`YYYY-MM-DD HH:mm:ss.SSS`),
//! with `[...]` quoting literal text. Both compile down to owned chrono items once.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Longest first so `SSSSSS` never matches as `SSS` + `SSS`.
const TOKENS: &[(&str, &str)] = &[
    ("SSSSSSSSS", "%9f"),
    ("SSSSSS", "%6f"),
    ("SSS", "%3f"),
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("Z", "%:z"),
    ("A", "%p"),
];

/// Pre-parsed layout; `Default` stands in for empty or unparseable layouts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TimeLayout {
    #[default]
    Default,
    Items(Vec<Item<'static>>),
}

impl TimeLayout {
    #[must_use]
    pub fn parse(layout: &str) -> Self {
        if layout.is_empty() {
            return Self::Default;
        }
        let strftime = if layout.contains('%') {
            layout.to_string()
        } else {
            translate_tokens(layout)
        };
        StrftimeItems::new(&strftime)
            .parse_to_owned()
            .map_or(Self::Default, Self::Items)
    }

    /// `true` when the layout could not be compiled and output uses chrono's default display.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Never panics: a formatting error mid-way restarts with the default display.
    pub fn format_into<Tz>(&self, time: &DateTime<Tz>, out: &mut String)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let start = out.len();
        if let Self::Items(items) = self
            && write!(out, "{}", time.format_with_items(items.iter())).is_ok()
        {
            return;
        }
        out.truncate(start);
        let _ = write!(out, "{time}");
    }

    #[must_use]
    pub fn format<Tz>(&self, time: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        self.format_into(time, &mut out);
        out
    }
}

/// Rewrites token syntax into a strftime string chrono can parse.
fn translate_tokens(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '['
            && let Some(end) = rest.find(']')
        {
            push_literal(&mut out, &rest[1..end]);
            rest = &rest[end + 1..];
            continue;
        }

        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }

        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}
