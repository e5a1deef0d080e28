pub mod animation;
pub mod at_rules;
pub mod compiler;
pub mod error;
pub mod property;
pub mod query;
pub mod registry;
pub mod rule;
pub mod selector;
pub mod style;
pub mod theme;

#[cfg(test)]
mod tests_compiler;

#[cfg(test)]
mod tests_nesting;

pub use animation::{AnimationFrames, Keyframe};
pub use compiler::Compiler;
pub use error::{StyleError, StyleResult};
pub use property::Property;
pub use query::{Query, QueryKind};
pub use rule::Rule;
pub use selector::{AttrOperator, Attribute, Selector};
pub use style::{Declaration, Style, StyleId, ValueStyle};
pub use theme::Theme;

pub use stylist_values::{Color, Numeric, Properties, Unit, Value, Vendor};
