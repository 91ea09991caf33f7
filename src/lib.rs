//! `patlog` - directive-driven text rendering for structured log entries.
//!
//! A pattern is compiled upstream into an ordered sequence of [`Directive`]s
//! (time, level, message, literal text, ...). The [`Renderer`] walks that sequence
//! for one [`Entry`] and produces a single newline-terminated line:
//!
//! ```
//! use chrono::DateTime;
//! use patlog::{Entry, Level, Pattern, Renderer};
//!
//! let time = DateTime::parse_from_rfc3339("2016-07-02T22:26:01.530+02:00").unwrap();
//! let entry = Entry::new(Level::Info, "Yes, I would love to see").time(time);
//!
//! let line = Renderer::default().render_string(&Pattern::default(), &entry);
//! assert_eq!(line, "2016-07-02 22:26:01.530 INFO  Yes, I would love to see \n");
//! ```
//!
//! Rendering never fails. Malformed formats degrade to default rendering when the
//! directive is built, and field names in the shared [`FieldFilter`] never appear
//! in the `fields[...]` block.

pub mod config;
pub mod entry;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod render;

pub use config::Config;
pub use entry::Entry;
pub use error::Error;
pub use fmt::{Directive, DirectiveKind, FieldFilter, Pattern};
pub use level::Level;
pub use render::Renderer;
