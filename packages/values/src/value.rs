//! Vendor-aware CSS values.
//!
//! A [`Value`] is immutable: joining produces a new value that shares its
//! operands. Every value renders for [`Vendor::Standard`]; text values can
//! carry alternate renderings for other vendors.

use crate::color::Color;
use crate::numeric::{Numeric, Unit};
use crate::vendor::Vendor;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Text(Text),
    Numeric(Numeric),
    Color(Color),
    Joined(Arc<Joined>),
}

/// Text payload with optional per-vendor overrides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    standard: Arc<str>,
    renderings: BTreeMap<Vendor, Arc<str>>,
}

/// Ordered pair of values rendered with a separator in between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Joined {
    before: Value,
    separator: Arc<str>,
    after: Value,
}

impl Value {
    /// The canonical empty value; identity element of [`Value::join`].
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(Text {
            standard: Arc::from(text.into()),
            renderings: BTreeMap::new(),
        })
    }

    /// Text that renders with the vendor prefix for each of `vendors`.
    pub fn vendored(text: impl Into<String>, vendors: impl IntoIterator<Item = Vendor>) -> Self {
        let text = text.into();
        let renderings = vendors
            .into_iter()
            .filter(|vendor| *vendor != Vendor::Standard)
            .map(|vendor| (vendor, Arc::from(format!("{}{}", vendor.prefix(), text))))
            .collect();

        Value::Text(Text {
            standard: Arc::from(text),
            renderings,
        })
    }

    /// Text with explicit renderings for some vendors.
    pub fn text_with(
        text: impl Into<String>,
        overrides: impl IntoIterator<Item = (Vendor, String)>,
    ) -> Self {
        Value::Text(Text {
            standard: Arc::from(text.into()),
            renderings: overrides
                .into_iter()
                .filter(|(vendor, _)| *vendor != Vendor::Standard)
                .map(|(vendor, text)| (vendor, Arc::from(text)))
                .collect(),
        })
    }

    pub fn numeric(magnitude: f64, unit: Unit) -> Self {
        Value::Numeric(Numeric::new(magnitude, unit))
    }

    pub fn number(magnitude: f64) -> Self {
        Self::numeric(magnitude, Unit::None)
    }

    pub fn color(color: Color) -> Self {
        Value::Color(color)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(text) if text.standard.is_empty() && text.renderings.is_empty())
    }

    /// Join two values with a separator. The empty value is an identity on
    /// both sides, so folding from [`Value::empty`] never emits a leading
    /// separator.
    pub fn join(&self, separator: &str, other: &Value) -> Value {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        Value::Joined(Arc::new(Joined {
            before: self.clone(),
            separator: Arc::from(separator),
            after: other.clone(),
        }))
    }

    /// Concatenate without a separator.
    pub fn concat(&self, other: &Value) -> Value {
        self.join("", other)
    }

    /// Fold `values` into one value joined by `separator`.
    pub fn join_all(separator: &str, values: impl IntoIterator<Item = Value>) -> Value {
        values
            .into_iter()
            .fold(Value::empty(), |joined, value| joined.join(separator, &value))
    }

    /// Rendering for `vendor`, falling back to the standard form.
    pub fn render(&self, vendor: Vendor) -> String {
        self.render_with(vendor, &|color: &Color| color.to_hsl())
    }

    /// Like [`Value::render`] but with a custom color writer.
    pub fn render_with(&self, vendor: Vendor, color: &dyn Fn(&Color) -> String) -> String {
        let mut out = String::new();
        self.write_to(&mut out, vendor, color);
        out
    }

    fn write_to(&self, out: &mut String, vendor: Vendor, color: &dyn Fn(&Color) -> String) {
        match self {
            Value::Text(text) => out.push_str(
                text.renderings
                    .get(&vendor)
                    .unwrap_or(&text.standard),
            ),
            Value::Numeric(numeric) => out.push_str(&numeric.to_string()),
            Value::Color(c) => out.push_str(&color(c)),
            Value::Joined(joined) => {
                joined.before.write_to(out, vendor, color);
                out.push_str(&joined.separator);
                joined.after.write_to(out, vendor, color);
            }
        }
    }

    /// Vendors with a rendering of their own, always including `Standard`.
    pub fn vendors(&self) -> BTreeSet<Vendor> {
        let mut vendors = Vendor::standard();
        self.collect_vendors(&mut vendors);
        vendors
    }

    fn collect_vendors(&self, vendors: &mut BTreeSet<Vendor>) {
        match self {
            Value::Text(text) => vendors.extend(text.renderings.keys().copied()),
            Value::Joined(joined) => {
                joined.before.collect_vendors(vendors);
                joined.after.collect_vendors(vendors);
            }
            Value::Numeric(_) | Value::Color(_) => {}
        }
    }

    /// Case-insensitive comparison against the standard rendering. A joined
    /// value also matches when either operand does.
    pub fn matches(&self, literal: &str) -> bool {
        if self.render(Vendor::Standard).eq_ignore_ascii_case(literal) {
            return true;
        }
        match self {
            Value::Joined(joined) => joined.before.matches(literal) || joined.after.matches(literal),
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Vendor::Standard))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::text(text.as_str())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Numeric> for Value {
    fn from(numeric: Numeric) -> Self {
        Value::Numeric(numeric)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::number(number as f64)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::number(number)
    }
}
