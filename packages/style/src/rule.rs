use crate::query::Query;
use crate::selector::Selector;
use crate::style::StyleId;
use stylist_values::{Properties, Value, Vendor};

/// A compiled node: resolved selector, own properties and nested rules.
#[derive(Debug, Clone)]
pub struct Rule {
    pub selector: Value,
    /// Ordering key shared by a root rule and all of its descendants.
    pub description: String,
    pub style: Option<StyleId>,
    pub properties: Properties,
    pub children: Vec<Rule>,
    /// Rules tied to a query are written inside that at-rule.
    pub query: Option<Query>,
    expression: Selector,
}

impl Rule {
    pub fn new(expression: Selector, description: impl Into<String>) -> Self {
        Self {
            selector: expression.render(),
            description: description.into(),
            style: None,
            properties: Properties::new(),
            children: Vec::new(),
            query: None,
            expression,
        }
    }

    /// Structured selector the rule was built from.
    pub fn expression(&self) -> &Selector {
        &self.expression
    }

    /// Depth-first search by standard selector text, this rule included.
    pub fn find(&self, selector: &str) -> Option<&Rule> {
        if self.selector.render(Vendor::Standard) == selector {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(selector))
    }

    /// Nested rule for `<selector>:<pseudo>` or `<selector>::<pseudo>`.
    pub fn sub(&self, pseudo: &str) -> Option<&Rule> {
        let selector = self.selector.render(Vendor::Standard);
        self.find(&format!("{}:{}", selector, pseudo))
            .or_else(|| self.find(&format!("{}::{}", selector, pseudo)))
    }

    /// Number of rules in this subtree.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Rule::len).sum::<usize>()
    }

    /// Whether neither this rule nor any descendant declares anything.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.iter().all(Rule::is_empty)
    }
}
