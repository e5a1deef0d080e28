/// Nested declaration tests
/// Placeholder resolution, pseudo-element handling and query association
use crate::*;

#[cfg(test)]
mod nesting_tests {
    use super::*;

    fn compile(style: &Style) -> Rule {
        Compiler::new().compile(style).expect("Failed to compile")
    }

    #[test]
    fn test_hover_child() {
        let style = Style::new(|compiler| {
            compiler.set_property("display", "block")?;
            compiler.hover(|compiler| {
                compiler.set_property("text-decoration", "underline")?;
                Ok(())
            })
        });
        let rule = compile(&style);

        assert_eq!(rule.children.len(), 1);
        let hover = &rule.children[0];
        assert_eq!(hover.selector.to_string(), format!("{}:hover", style.selector()));
        assert_eq!(hover.properties.len(), 1);
        assert!(hover.properties.contains("text-decoration", "underline"));
        assert_eq!(rule.sub("hover").map(|r| r.selector.to_string()), Some(hover.selector.to_string()));
    }

    #[test]
    fn test_children_share_root_description() {
        let style = Style::described("components/button", |compiler| {
            compiler.hover(|compiler| {
                compiler.focus(|compiler| {
                    compiler.set_property("outline", "none")?;
                    Ok(())
                })
            })
        });
        let rule = compile(&style);

        let focus = &rule.children[0].children[0];
        assert_eq!(focus.description, "components/button");
        assert_eq!(focus.style, Some(style.id()));
        assert_eq!(focus.selector.to_string(), format!("{}:hover:focus", style.selector()));
    }

    #[test]
    fn test_parent_pseudo_element_moves_to_child() {
        let style = Style::named(".A", |compiler| {
            compiler.before(|compiler| {
                compiler.set_property("content", "\"\"")?;
                compiler.hover(|compiler| {
                    compiler.set_property("color", "red")?;
                    Ok(())
                })
            })
        });
        let rule = compile(&style);

        let before = rule.sub("before").expect("Failed to find ::before");
        assert_eq!(before.selector.to_string(), ".A::before");
        assert!(rule.find(".A:hover::before").is_some());
    }

    #[test]
    fn test_backward_combinator_substitutes_parent() {
        let style = Style::named(".item", |compiler| {
            let selector = Selector::new().prev()?.checked();
            compiler.nest(selector, |compiler| {
                compiler.set_property("display", "none")?;
                Ok(())
            })
        });
        let rule = compile(&style);

        assert!(rule.find("*:checked+.item").is_some());
    }

    #[test]
    fn test_nest_style_with_combinator() {
        let label = Style::named(".label", |compiler| {
            compiler.set_property("color", "gray")?;
            Ok(())
        });
        let card = Style::named(".card", move |compiler| {
            let selector = Selector::new().child()?.with(&label);
            compiler.nest_style(selector, &label)
        });
        let rule = compile(&card);

        let child = rule.find(".card>.label").expect("Failed to find child rule");
        assert!(child.properties.contains("color", "gray"));
    }

    #[test]
    fn test_select_descendant() {
        let style = Style::named("nav", |compiler| {
            compiler.select("a", |compiler| {
                compiler.set_property("text-decoration", "none")?;
                compiler.hover(|compiler| {
                    compiler.set_property("text-decoration", "underline")?;
                    Ok(())
                })
            })
        });
        let rule = compile(&style);

        assert!(rule.find("nav a").is_some());
        assert!(rule.find("nav a:hover").is_some());
        assert_eq!(rule.len(), 3);
    }

    #[test]
    fn test_not_argument_keeps_parent() {
        let style = Style::named("li", |compiler| {
            let selector = Selector::new().not(&Selector::new().last_child());
            compiler.nest(selector, |compiler| {
                compiler.set_property("margin-bottom", Numeric::px(4.0))?;
                Ok(())
            })
        });
        let rule = compile(&style);

        assert!(rule.find("li:not(:last-child)").is_some());
    }

    #[test]
    fn test_attribute_with_dollar_operator() {
        let style = Style::named("a", |compiler| {
            let selector = Selector::new().attr("href")?.ends_with(".pdf");
            compiler.nest(selector, |compiler| {
                compiler.set_property("color", "red")?;
                Ok(())
            })
        });
        let rule = compile(&style);

        assert!(rule.find("a[href$=\".pdf\"]").is_some());
    }

    #[test]
    fn test_query_rule_is_marked() {
        let style = Style::named(".panel", |compiler| {
            compiler.set_property("width", Numeric::px(400.0))?;
            compiler.on(Query::screen().max_width(Numeric::px(600.0)), |compiler| {
                compiler.set_property("width", Numeric::percent(100.0))?;
                Ok(())
            })
        });
        let rule = compile(&style);

        let narrow = &rule.children[0];
        assert_eq!(narrow.selector.to_string(), ".panel");
        assert_eq!(
            narrow.query.as_ref().map(ToString::to_string),
            Some("@media screen and (max-width:600px)".to_string())
        );
        assert!(narrow.properties.contains("width", "100%"));
        assert!(rule.query.is_none());
    }

    #[test]
    fn test_selection_pseudo_element_is_vendored() {
        let style = Style::named("p", |compiler| {
            compiler.nest(Selector::new().selection(), |compiler| {
                compiler.set_property("color", "white")?;
                Ok(())
            })
        });
        let rule = compile(&style);

        let selection = &rule.children[0];
        assert_eq!(selection.selector.render(Vendor::Standard), "p::selection");
        assert_eq!(selection.selector.render(Vendor::Mozilla), "p::-moz-selection");
    }
}
