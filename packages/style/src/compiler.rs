//! Rule tree builder.
//!
//! A [`Compiler`] owns the active-rule slot for one compilation. Declaration
//! procedures receive the compiler and write through it; entering a nested
//! declaration swaps a new rule into the slot and restores the previous one
//! on the way out, whether the procedure succeeded or not.

use crate::animation::AnimationFrames;
use crate::at_rules;
use crate::error::{StyleError, StyleResult};
use crate::query::Query;
use crate::rule::Rule;
use crate::selector::Selector;
use crate::style::Style;
use stylist_values::{Properties, Value};
use tracing::{debug, instrument};

#[derive(Debug, Default)]
pub struct Compiler {
    active: Option<Rule>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `style` as a root rule under its own selector.
    #[instrument(skip(self, style), fields(style = %style.detail()))]
    pub fn compile(&mut self, style: &Style) -> StyleResult<Rule> {
        let selector = style.selector();
        let mut rule = Rule::new(Selector::from_text(&selector), style.detail());
        rule.style = Some(style.id());

        let rule = self.run(rule, |compiler| style.declare(compiler))?;
        debug!(selector = %rule.selector, rules = rule.len(), "style compiled");
        Ok(rule)
    }

    /// Properties a style declares, without naming the style or keeping any
    /// nested rules. Used for keyframes.
    pub fn capture(style: &Style) -> StyleResult<Properties> {
        let rule = Rule::new(Selector::from_text(""), style.detail());
        let rule = Compiler::new().run(rule, |compiler| style.declare(compiler))?;
        Ok(rule.properties)
    }

    fn run<F>(&mut self, rule: Rule, declare: F) -> StyleResult<Rule>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        let saved = self.active.replace(rule);
        let outcome = declare(self);
        let rule = std::mem::replace(&mut self.active, saved);

        outcome?;
        rule.ok_or_else(|| StyleError::declaration("active rule was lost during declaration"))
    }

    fn active_rule(&mut self, property: impl FnOnce() -> String) -> StyleResult<&mut Rule> {
        self.active
            .as_mut()
            .ok_or_else(|| StyleError::missing_property_context(property()))
    }

    /// Whether a declaration is currently being compiled.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Declare a nested rule. Placeholders in `selector` stand for the rule
    /// being populated.
    pub fn nest<F>(&mut self, selector: Selector, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest_rule(selector, None, declare)
    }

    fn nest_rule<F>(&mut self, selector: Selector, query: Option<Query>, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        selector.validate()?;

        let parent = self
            .active
            .as_ref()
            .ok_or_else(|| StyleError::missing_property_context(selector.to_string()))?;

        let mut rule = Rule::new(selector.resolve(parent.expression()), parent.description.clone());
        rule.style = parent.style;
        rule.query = query;

        let child = self.run(rule, declare)?;
        debug!(selector = %child.selector, "nested rule compiled");

        if let Some(parent) = self.active.as_mut() {
            parent.children.push(child);
        }
        Ok(())
    }

    /// Nest another style's declarations under `selector`.
    pub fn nest_style(&mut self, selector: Selector, style: &Style) -> StyleResult<()> {
        self.nest(selector, |compiler| style.declare(compiler))
    }

    /// Declarations that apply only while `query` holds.
    pub fn on<F>(&mut self, query: Query, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest_rule(Selector::new(), Some(query), declare)
    }

    pub fn hover<F>(&mut self, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest(Selector::new().hover(), declare)
    }

    pub fn focus<F>(&mut self, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest(Selector::new().focus(), declare)
    }

    pub fn before<F>(&mut self, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest(Selector::new().before(), declare)
    }

    pub fn after<F>(&mut self, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest(Selector::new().after(), declare)
    }

    /// Descendants matching literal selector text.
    pub fn select<F>(&mut self, selector: &str, declare: F) -> StyleResult<()>
    where
        F: FnOnce(&mut Compiler) -> StyleResult<()>,
    {
        self.nest(Selector::new().select(selector)?, declare)
    }

    /// Write a property into the active rule.
    pub fn set_property(
        &mut self,
        name: impl Into<Value>,
        value: impl Into<Value>,
    ) -> StyleResult<&mut Self> {
        let name = name.into();
        self.active_rule(|| name.to_string())?
            .properties
            .set(name, value);
        Ok(self)
    }

    /// Write a property whose value is several values joined by `separator`.
    pub fn set_properties<I>(
        &mut self,
        name: impl Into<Value>,
        values: I,
        separator: &str,
    ) -> StyleResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let value = Value::join_all(separator, values.into_iter().map(Into::into));
        self.set_property(name, value)
    }

    /// Value already written for `name` in the active rule.
    pub fn current_value(&mut self, name: &str) -> StyleResult<Option<Value>> {
        let rule = self.active_rule(|| name.to_string())?;
        Ok(rule.properties.get(name).cloned())
    }

    /// Whether the active rule's `name` matches `literal`, ignoring case.
    pub fn currently_equals(&mut self, name: &str, literal: &str) -> StyleResult<bool> {
        let rule = self.active_rule(|| name.to_string())?;
        Ok(rule.properties.contains(name, literal))
    }

    /// Use `frames` as the active rule's animation and register its keyframes
    /// for the stylesheet preamble.
    pub fn animate(&mut self, frames: &AnimationFrames) -> StyleResult<&mut Self> {
        self.set_property("animation-name", frames.name())?;
        at_rules::register_animation(frames.clone());
        Ok(self)
    }
}
