//! Compiled directives and the per-kind format machinery behind them. Value templates,
//! time layouts, and the field exclusion set each live in their own module.

mod directive;
mod fields;
mod layout;
mod printf;

pub use directive::{
    DEFAULT_LEVEL_TEMPLATE, DEFAULT_TIME_LAYOUT, Directive, DirectiveKind, FormatSpec,
    ParseDirectiveError, Pattern,
};
pub use fields::FieldFilter;
pub use layout::TimeLayout;
pub use printf::{Template, ValueFormat, Verb};
