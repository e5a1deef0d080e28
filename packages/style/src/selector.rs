//! Composable selector expressions.
//!
//! A [`Selector`] is a chain of compound selectors joined by combinators. A
//! fresh selector starts with a [`Token::Placeholder`] that stands for the
//! enclosing rule; the compiler resolves it by rewriting the tree against the
//! parent selector, so a literal `$` in user text is never touched.

use crate::error::{StyleError, StyleResult};
use crate::style::Style;
use std::fmt;
use stylist_values::{Value, Vendor};

/// Text rendered for an unresolved placeholder.
pub const PLACEHOLDER: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The enclosing rule's selector, substituted during compilation.
    Placeholder,
    Literal(Value),
}

/// One simple-selector segment with its pseudo-classes and pseudo-element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Compound {
    tokens: Vec<Token>,
    pseudo_classes: Vec<Value>,
    pseudo_element: Option<Value>,
}

impl Compound {
    fn placeholder() -> Self {
        Self {
            tokens: vec![Token::Placeholder],
            ..Self::default()
        }
    }

    /// With `bare`, placeholders render as nothing; used for arguments of
    /// functional pseudo-classes which only accept simple selectors.
    fn render(&self, bare: bool) -> Value {
        let mut base = if self.tokens.is_empty() {
            Value::text("*")
        } else {
            self.tokens
                .iter()
                .fold(Value::empty(), |base, token| match token {
                    Token::Placeholder if bare => base,
                    Token::Placeholder => base.concat(&Value::text(PLACEHOLDER)),
                    Token::Literal(value) => base.concat(value),
                })
        };

        for pseudo in &self.pseudo_classes {
            base = base.concat(&Value::text(":").concat(pseudo));
        }
        if let Some(pseudo) = &self.pseudo_element {
            base = base.concat(&Value::text("::").concat(pseudo));
        }
        base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    segments: Vec<Compound>,
    /// `combinators[i]` links `segments[i]` and `segments[i + 1]`.
    combinators: Vec<String>,
    /// Segment that basic tokens and pseudo selectors apply to.
    cursor: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// A selector consisting of the placeholder only.
    pub fn new() -> Self {
        Self {
            segments: vec![Compound::placeholder()],
            combinators: Vec::new(),
            cursor: 0,
        }
    }

    /// A resolved selector from literal text. A trailing `::pseudo` is kept
    /// structurally so that nested rules can strip it.
    pub fn from_text(text: &str) -> Self {
        let (base, pseudo_element) = match pseudo_element_start(text) {
            Some(index) => (&text[..index], Some(Value::text(&text[index + 2..]))),
            None => (text, None),
        };

        Self {
            segments: vec![Compound {
                tokens: vec![Token::Literal(Value::text(base))],
                pseudo_classes: Vec::new(),
                pseudo_element,
            }],
            combinators: Vec::new(),
            cursor: 0,
        }
    }

    fn current(&mut self) -> &mut Compound {
        &mut self.segments[self.cursor]
    }

    /// Append a literal token to the current segment.
    pub fn basic(mut self, token: impl Into<Value>) -> Self {
        self.current().tokens.push(Token::Literal(token.into()));
        self
    }

    /// Append another style's selector to the current segment.
    pub fn with(self, style: &Style) -> Self {
        let selector = style.selector();
        self.basic(selector.as_ref())
    }

    /// Link a new segment. With `forward` the current segment is the left
    /// operand (ancestor, previous sibling); otherwise the new segment is.
    pub fn combine(mut self, operator: &str, forward: bool) -> StyleResult<Self> {
        if self.segments[self.cursor].pseudo_element.is_some() {
            return Err(StyleError::invalid_selector(format!(
                "cannot combine '{}' after the pseudo-element in '{}'",
                operator, self
            )));
        }

        if forward {
            self.segments.insert(self.cursor + 1, Compound::default());
            self.combinators.insert(self.cursor, operator.to_string());
            self.cursor += 1;
        } else {
            self.segments.insert(self.cursor, Compound::default());
            self.combinators.insert(self.cursor, operator.to_string());
        }
        Ok(self)
    }

    pub fn pseudo_class(mut self, name: impl Into<Value>) -> Self {
        self.current().pseudo_classes.push(name.into());
        self
    }

    pub fn pseudo_element(mut self, name: impl Into<Value>) -> Self {
        self.current().pseudo_element = Some(name.into());
        self
    }

    /// Append an attribute predicate: `[name]` or `[name<op>="value"]`.
    pub fn attribute(
        self,
        name: &str,
        operator: Option<AttrOperator>,
        value: Option<&str>,
        ignore_case: bool,
    ) -> StyleResult<Self> {
        if name.trim().is_empty() {
            return Err(StyleError::invalid_selector("attribute name must not be empty"));
        }

        Ok(self.basic(predicate(name, operator, value, ignore_case)))
    }

    /// Start an attribute predicate on the current segment.
    pub fn attr(self, name: &str) -> StyleResult<Attribute> {
        if name.trim().is_empty() {
            return Err(StyleError::invalid_selector("attribute name must not be empty"));
        }
        Ok(Attribute {
            selector: self,
            name: name.to_string(),
            ignore_case: false,
        })
    }

    // Combinators

    pub fn descendant(self) -> StyleResult<Self> {
        self.combine(" ", true)
    }

    pub fn ancestor(self) -> StyleResult<Self> {
        self.combine(" ", false)
    }

    pub fn child(self) -> StyleResult<Self> {
        self.combine(">", true)
    }

    pub fn parent(self) -> StyleResult<Self> {
        self.combine(">", false)
    }

    pub fn next(self) -> StyleResult<Self> {
        self.combine("+", true)
    }

    pub fn prev(self) -> StyleResult<Self> {
        self.combine("+", false)
    }

    pub fn nexts(self) -> StyleResult<Self> {
        self.combine("~", true)
    }

    pub fn prevs(self) -> StyleResult<Self> {
        self.combine("~", false)
    }

    /// Descendant matching literal selector text.
    pub fn select(self, selector: &str) -> StyleResult<Self> {
        Ok(self.descendant()?.basic(selector))
    }

    // Pseudo-classes

    pub fn active(self) -> Self {
        self.pseudo_class("active")
    }

    pub fn checked(self) -> Self {
        self.pseudo_class("checked")
    }

    pub fn defaults(self) -> Self {
        self.pseudo_class("default")
    }

    pub fn disabled(self) -> Self {
        self.pseudo_class("disabled")
    }

    pub fn empty(self) -> Self {
        self.pseudo_class("empty")
    }

    pub fn enabled(self) -> Self {
        self.pseudo_class("enabled")
    }

    pub fn first_child(self) -> Self {
        self.pseudo_class("first-child")
    }

    pub fn first_type(self) -> Self {
        self.pseudo_class("first-of-type")
    }

    pub fn focus(self) -> Self {
        self.pseudo_class("focus")
    }

    pub fn focus_within(self) -> Self {
        self.pseudo_class("focus-within")
    }

    pub fn hover(self) -> Self {
        self.pseudo_class("hover")
    }

    pub fn indeterminate(self) -> Self {
        self.pseudo_class("indeterminate")
    }

    pub fn invalid(self) -> Self {
        self.pseudo_class("invalid")
    }

    pub fn last_child(self) -> Self {
        self.pseudo_class("last-child")
    }

    pub fn last_type(self) -> Self {
        self.pseudo_class("last-of-type")
    }

    pub fn link(self) -> Self {
        self.pseudo_class("link")
    }

    pub fn only_child(self) -> Self {
        self.pseudo_class("only-child")
    }

    pub fn only_type(self) -> Self {
        self.pseudo_class("only-of-type")
    }

    pub fn optional(self) -> Self {
        self.pseudo_class("optional")
    }

    pub fn required(self) -> Self {
        self.pseudo_class("required")
    }

    pub fn target(self) -> Self {
        self.pseudo_class("target")
    }

    pub fn valid(self) -> Self {
        self.pseudo_class("valid")
    }

    pub fn visited(self) -> Self {
        self.pseudo_class("visited")
    }

    pub fn nth_child(self, pattern: &str) -> Self {
        self.pseudo_class(format!("nth-child({})", pattern))
    }

    pub fn nth_last_child(self, pattern: &str) -> Self {
        self.pseudo_class(format!("nth-last-child({})", pattern))
    }

    pub fn nth_type(self, pattern: &str) -> Self {
        self.pseudo_class(format!("nth-of-type({})", pattern))
    }

    pub fn nth_last_type(self, pattern: &str) -> Self {
        self.pseudo_class(format!("nth-last-of-type({})", pattern))
    }

    pub fn has(self, selector: &str) -> Self {
        self.pseudo_class(format!("has({})", selector))
    }

    /// `:not(...)` of a simple selector; placeholders in `selector` are dropped.
    pub fn not(self, selector: &Selector) -> Self {
        let argument = Value::text("not(")
            .concat(&selector.render_with(true))
            .concat(&Value::text(")"));
        self.pseudo_class(argument)
    }

    pub fn not_style(self, style: &Style) -> Self {
        self.pseudo_class(format!("not({})", style.selector()))
    }

    // Pseudo-elements

    pub fn after(self) -> Self {
        self.pseudo_element("after")
    }

    pub fn before(self) -> Self {
        self.pseudo_element("before")
    }

    pub fn first_letter(self) -> Self {
        self.pseudo_element("first-letter")
    }

    pub fn first_line(self) -> Self {
        self.pseudo_element("first-line")
    }

    pub fn placeholder(self) -> Self {
        self.pseudo_element("placeholder")
    }

    /// Gecko still needs `::-moz-selection`, and a rule with an unknown
    /// pseudo-element is dropped entirely, so the formatter writes one block
    /// per vendor rendering.
    pub fn selection(self) -> Self {
        self.pseudo_element(Value::vendored("selection", [Vendor::Mozilla]))
    }

    /// Rendered form; unresolved placeholders render as `$`.
    pub fn render(&self) -> Value {
        self.render_with(false)
    }

    fn render_with(&self, bare: bool) -> Value {
        let mut rendered = self.segments[0].render(bare);

        for (combinator, segment) in self.combinators.iter().zip(&self.segments[1..]) {
            rendered = rendered.concat(&Value::text(combinator.as_str()).concat(&segment.render(bare)));
        }
        rendered
    }

    /// Pseudo-element of the trailing segment.
    pub fn pseudo_element_value(&self) -> Option<&Value> {
        self.segments.last().and_then(|segment| segment.pseudo_element.as_ref())
    }

    pub fn without_pseudo_element(&self) -> Selector {
        let mut stripped = self.clone();
        for segment in &mut stripped.segments {
            segment.pseudo_element = None;
        }
        stripped
    }

    pub fn has_placeholder(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.tokens.contains(&Token::Placeholder))
    }

    /// Reject pseudo-elements that are not on the trailing segment.
    pub fn validate(&self) -> StyleResult<()> {
        let trailing = self.segments.len() - 1;

        match self.segments[..trailing]
            .iter()
            .position(|segment| segment.pseudo_element.is_some())
        {
            Some(_) => Err(StyleError::invalid_selector(format!(
                "pseudo-element must be the last part of '{}'",
                self
            ))),
            None => Ok(()),
        }
    }

    /// Substitute `parent` for every placeholder in this selector.
    ///
    /// The parent's pseudo-element cannot precede further selectors, so it is
    /// stripped before substitution and moved onto this selector's trailing
    /// segment instead.
    pub fn resolve(&self, parent: &Selector) -> Selector {
        let ancestor = parent.without_pseudo_element().render();
        let mut resolved = self.clone();

        for segment in &mut resolved.segments {
            for token in &mut segment.tokens {
                if *token == Token::Placeholder {
                    *token = Token::Literal(ancestor.clone());
                }
            }
        }

        if let Some(pseudo) = parent.pseudo_element_value() {
            if let Some(trailing) = resolved.segments.last_mut() {
                trailing.pseudo_element = Some(pseudo.clone());
            }
        }
        resolved
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOperator {
    /// `=`
    Equals,
    /// `~=`
    Whitespace,
    /// `|=`
    Hyphen,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

impl AttrOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AttrOperator::Equals => "",
            AttrOperator::Whitespace => "~",
            AttrOperator::Hyphen => "|",
            AttrOperator::Prefix => "^",
            AttrOperator::Suffix => "$",
            AttrOperator::Substring => "*",
        }
    }
}

/// Byte offset of the first `::` outside brackets, parentheses and quotes.
fn pseudo_element_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;

    for (index, &byte) in bytes.iter().enumerate() {
        match (quote, byte) {
            (Some(open), _) if byte == open => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'[' | b'(') => depth += 1,
            (None, b']' | b')') => depth = depth.saturating_sub(1),
            (None, b':') if depth == 0 && bytes.get(index + 1) == Some(&b':') => {
                return Some(index)
            }
            _ => {}
        }
    }
    None
}

/// `[name]` or `[name<op>="value"]`, with ` i` for case-insensitive matching.
fn predicate(name: &str, operator: Option<AttrOperator>, value: Option<&str>, ignore_case: bool) -> String {
    match operator {
        None => format!("[{}]", name),
        Some(operator) => format!(
            "[{}{}=\"{}\"{}]",
            name,
            operator.as_str(),
            value.unwrap_or_default(),
            if ignore_case { " i" } else { "" }
        ),
    }
}

/// Builder for an attribute predicate.
#[derive(Debug, Clone)]
pub struct Attribute {
    selector: Selector,
    name: String,
    ignore_case: bool,
}

impl Attribute {
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    fn finish(self, operator: Option<AttrOperator>, value: Option<&str>) -> Selector {
        let predicate = predicate(&self.name, operator, value, self.ignore_case);
        self.selector.basic(predicate)
    }

    pub fn exists(self) -> Selector {
        self.finish(None, None)
    }

    pub fn is(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Equals), Some(value))
    }

    pub fn is_space(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Whitespace), Some(value))
    }

    pub fn is_hyphen(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Hyphen), Some(value))
    }

    pub fn starts_with(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Prefix), Some(value))
    }

    pub fn ends_with(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Suffix), Some(value))
    }

    pub fn contains(self, value: &str) -> Selector {
        self.finish(Some(AttrOperator::Substring), Some(value))
    }
}
