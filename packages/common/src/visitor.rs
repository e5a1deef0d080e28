use stylist_style::{Properties, Query, Rule};

/// Visitor pattern for traversing compiled rule trees immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait RuleVisitor: Sized {
    fn visit_rule(&mut self, rule: &Rule) {
        walk_rule(self, rule);
    }

    fn visit_properties(&mut self, _rule: &Rule, _properties: &Properties) {
        // Leaf node, no children to walk
    }

    fn visit_query(&mut self, _rule: &Rule, _query: &Query) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming rule trees
///
/// Similar to RuleVisitor, but provides mutable access to nodes.
/// Use this when you need to rewrite properties before emission.
pub trait RuleVisitorMut: Sized {
    fn visit_rule_mut(&mut self, rule: &mut Rule) {
        walk_rule_mut(self, rule);
    }

    fn visit_properties_mut(&mut self, _selector: &str, _properties: &mut Properties) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_rule<V: RuleVisitor>(visitor: &mut V, rule: &Rule) {
    if let Some(query) = &rule.query {
        visitor.visit_query(rule, query);
    }
    visitor.visit_properties(rule, &rule.properties);
    for child in &rule.children {
        visitor.visit_rule(child);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_rule_mut<V: RuleVisitorMut>(visitor: &mut V, rule: &mut Rule) {
    let selector = rule.selector.to_string();
    visitor.visit_properties_mut(&selector, &mut rule.properties);
    for child in &mut rule.children {
        visitor.visit_rule_mut(child);
    }
}

/// Distinct query headers used anywhere in the tree, in first-seen order.
pub fn collect_queries(rule: &Rule) -> Vec<String> {
    struct Queries(Vec<String>);

    impl RuleVisitor for Queries {
        fn visit_query(&mut self, _rule: &Rule, query: &Query) {
            let header = query.to_string();
            if !self.0.contains(&header) {
                self.0.push(header);
            }
        }
    }

    let mut queries = Queries(Vec::new());
    queries.visit_rule(rule);
    queries.0
}
