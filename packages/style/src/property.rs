//! Property handles over the compiler's writing primitive.

use crate::compiler::Compiler;
use crate::error::StyleResult;
use stylist_values::{Value, Vendor};

/// A named CSS property, optionally requiring vendor-prefixed declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: Value,
}

impl Property {
    pub fn new(name: &str) -> Self {
        Self {
            name: Value::text(name),
        }
    }

    /// A property that is also written with the prefix of each vendor, e.g.
    /// `-webkit-user-select` next to `user-select`.
    pub fn vendored(name: &str, vendors: impl IntoIterator<Item = Vendor>) -> Self {
        Self {
            name: Value::vendored(name, vendors),
        }
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn set(&self, compiler: &mut Compiler, value: impl Into<Value>) -> StyleResult<()> {
        compiler.set_property(&self.name, value)?;
        Ok(())
    }

    pub fn set_all<I>(&self, compiler: &mut Compiler, values: I, separator: &str) -> StyleResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        compiler.set_properties(&self.name, values, separator)?;
        Ok(())
    }

    pub fn inherit(&self, compiler: &mut Compiler) -> StyleResult<()> {
        self.set(compiler, "inherit")
    }

    pub fn initial(&self, compiler: &mut Compiler) -> StyleResult<()> {
        self.set(compiler, "initial")
    }

    pub fn unset(&self, compiler: &mut Compiler) -> StyleResult<()> {
        self.set(compiler, "unset")
    }

    /// Whether the active rule already holds `literal` for this property.
    pub fn is(&self, compiler: &mut Compiler, literal: &str) -> StyleResult<bool> {
        compiler.currently_equals(&self.name.render(Vendor::Standard), literal)
    }
}
