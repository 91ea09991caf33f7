//! printf-style value templates (`%-5s`, `%04d`, `[%s]`) used by the `level`, `longfile`,
//! `shortfile` and `line` directives.
//!
//! Templates are compiled once when the directive is built. Anything that does not compile
//! to exactly one known verb degrades to [`ValueFormat::Plain`] so rendering stays total.

use regex::Regex;
use std::sync::LazyLock;

static VERB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-+0]*)([0-9]*)(?:\.([0-9]*))?([A-Za-z%])").expect("Invalid verb regex")
});

/// Keeps a hostile template from allocating megabytes of padding per line.
const MAX_WIDTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `%s`
    Str,
    /// `%v`
    Value,
    /// `%d`
    Decimal,
    /// `%x`
    LowerHex,
    /// `%X`
    UpperHex,
    /// `%o`
    Octal,
    /// `%b`
    Binary,
}

impl Verb {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Str),
            'v' => Some(Self::Value),
            'd' => Some(Self::Decimal),
            'x' => Some(Self::LowerHex),
            'X' => Some(Self::UpperHex),
            'o' => Some(Self::Octal),
            'b' => Some(Self::Binary),
            _ => None,
        }
    }

    const fn is_numeric(self) -> bool {
        !matches!(self, Self::Str | Self::Value)
    }
}

/// A template with exactly one value verb and the literal text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
    verb: Verb,
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Compiled form of a directive's value template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// The value's own `Display` form, used for empty and malformed templates.
    #[default]
    Plain,
    Template(Template),
}

impl ValueFormat {
    /// Never fails; a template it cannot make sense of becomes `Plain`.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        Self::compile(spec).map_or(Self::Plain, Self::Template)
    }

    fn compile(spec: &str) -> Option<Template> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut verb = None;
        let mut last = 0;

        for caps in VERB_REGEX.captures_iter(spec) {
            let whole = caps.get(0)?;
            let literal = &spec[last..whole.start()];
            last = whole.end();
            let target = if verb.is_some() { &mut suffix } else { &mut prefix };
            target.push_str(literal);

            let verb_char = caps[4].chars().next()?;
            if verb_char == '%' {
                target.push('%');
                continue;
            }
            // A second value verb has nothing to bind to.
            if verb.is_some() {
                return None;
            }

            let flags = &caps[1];
            let width = match &caps[2] {
                "" => None,
                digits => Some(digits.parse::<usize>().ok().filter(|w| *w <= MAX_WIDTH)?),
            };
            let precision = match caps.get(3) {
                None => None,
                Some(m) if m.as_str().is_empty() => Some(0),
                Some(m) => Some(m.as_str().parse::<usize>().ok().filter(|p| *p <= MAX_WIDTH)?),
            };

            verb = Some(Template {
                prefix: String::new(),
                suffix: String::new(),
                verb: Verb::from_char(verb_char)?,
                left: flags.contains('-'),
                zero: flags.contains('0'),
                plus: flags.contains('+'),
                width,
                precision,
            });
        }

        let mut template = verb?;
        let rest = &spec[last..];
        suffix.push_str(rest);
        template.prefix = prefix;
        template.suffix = suffix;
        Some(template)
    }

    /// Numeric verbs applied to text fall back to the text itself.
    #[must_use]
    pub fn format_str(&self, value: &str) -> String {
        let Self::Template(t) = self else {
            return value.to_string();
        };

        let body: String = match t.precision {
            Some(p) if !t.verb.is_numeric() => value.chars().take(p).collect(),
            _ => value.to_string(),
        };
        t.wrap(&pad(body, t.width, t.left, ' '))
    }

    #[must_use]
    pub fn format_uint(&self, value: u64) -> String {
        let Self::Template(t) = self else {
            return value.to_string();
        };

        let mut digits = match t.verb {
            Verb::Str | Verb::Value | Verb::Decimal => value.to_string(),
            Verb::LowerHex => format!("{value:x}"),
            Verb::UpperHex => format!("{value:X}"),
            Verb::Octal => format!("{value:o}"),
            Verb::Binary => format!("{value:b}"),
        };
        if let Some(p) = t.precision.filter(|_| t.verb.is_numeric()) {
            digits = pad(digits, Some(p), false, '0');
        }
        let sign = if t.plus && t.verb.is_numeric() { "+" } else { "" };

        let body = if t.zero && !t.left && t.precision.is_none() {
            let inner = t.width.map(|w| w.saturating_sub(sign.len()));
            format!("{sign}{}", pad(digits, inner, false, '0'))
        } else {
            pad(format!("{sign}{digits}"), t.width, t.left, ' ')
        };
        t.wrap(&body)
    }
}

impl Template {
    fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(body);
        out.push_str(&self.suffix);
        out
    }
}

/// Width counts characters, not bytes, so multi-byte labels line up.
fn pad(body: String, width: Option<usize>, left: bool, fill: char) -> String {
    let len = body.chars().count();
    let Some(missing) = width.and_then(|w| w.checked_sub(len)).filter(|m| *m > 0) else {
        return body;
    };
    let filler: String = std::iter::repeat_n(fill, missing).collect();
    if left { body + &filler } else { filler + &body }
}
