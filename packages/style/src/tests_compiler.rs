/// Rule tree builder tests
/// Covers root compilation, property primitives and error propagation
use crate::*;

#[cfg(test)]
mod compiler_tests {
    use super::*;

    fn compile(style: &Style) -> Rule {
        Compiler::new().compile(style).expect("Failed to compile")
    }

    #[test]
    fn test_root_rule_uses_style_selector_and_detail() {
        let style = Style::new(|compiler| {
            compiler.set_property("display", "block")?;
            Ok(())
        });
        let rule = compile(&style);

        assert_eq!(rule.selector.to_string(), style.selector().to_string());
        assert_eq!(rule.description, style.detail());
        assert_eq!(rule.style, Some(style.id()));
        assert!(rule.properties.contains("display", "block"));
    }

    #[test]
    fn test_empty_style_yields_empty_rule() {
        let rule = compile(&Style::empty());
        assert!(rule.properties.is_empty());
        assert!(rule.children.is_empty());
        assert!(rule.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let style = Style::new(|compiler| {
            compiler
                .set_property("display", "block")?
                .set_property("color", "red")?
                .set_property("display", "flex")?;
            Ok(())
        });
        let rule = compile(&style);

        assert_eq!(rule.properties.len(), 2);
        assert_eq!(rule.properties.index_of("display"), Some(0));
        assert!(rule.properties.contains("display", "flex"));
    }

    #[test]
    fn test_set_properties_joins_values() {
        let style = Style::new(|compiler| {
            compiler.set_properties(
                "transition-property",
                ["opacity", "transform"],
                ",",
            )?;
            compiler.set_properties("margin", [Numeric::px(1.0), Numeric::px(2.0)], " ")?;
            Ok(())
        });
        let rule = compile(&style);

        assert_eq!(
            rule.properties.get("transition-property").unwrap().to_string(),
            "opacity,transform"
        );
        assert_eq!(rule.properties.get("margin").unwrap().to_string(), "1px 2px");
    }

    #[test]
    fn test_current_value_reads_active_rule() {
        let style = Style::new(|compiler| {
            compiler.set_property("position", "absolute")?;
            if compiler.currently_equals("position", "ABSOLUTE")? {
                compiler.set_property("top", 0)?;
            }
            let display = compiler.current_value("display")?;
            assert!(display.is_none());
            Ok(())
        });
        let rule = compile(&style);

        assert!(rule.properties.contains("top", "0"));
    }

    #[test]
    fn test_nested_reads_do_not_see_parent() {
        let style = Style::new(|compiler| {
            compiler.set_property("color", "red")?;
            compiler.hover(|compiler| {
                assert!(compiler.current_value("color")?.is_none());
                Ok(())
            })
        });
        compile(&style);
    }

    #[test]
    fn test_error_restores_slot() {
        let failing = Style::new(|compiler| {
            compiler.set_property("display", "block")?;
            compiler.hover(|_| Err(StyleError::declaration("boom")))?;
            Ok(())
        });

        let mut compiler = Compiler::new();
        let error = compiler.compile(&failing).unwrap_err();
        assert_eq!(error, StyleError::declaration("boom"));
        assert!(!compiler.is_active());

        let rule = compiler.compile(&Style::empty()).expect("Failed to compile after error");
        assert!(rule.properties.is_empty());
    }

    #[test]
    fn test_invalid_selector_fails_at_declaration() {
        let style = Style::new(|compiler| {
            let selector = Selector::new().before().child()?;
            compiler.nest(selector, |_| Ok(()))
        });

        let error = Compiler::new().compile(&style).unwrap_err();
        assert!(matches!(error, StyleError::InvalidSelector { .. }));
    }

    #[test]
    fn test_inner_pseudo_element_is_rejected() {
        let style = Style::new(|compiler| {
            let selector = Selector::new().parent()?.after();
            compiler.nest(selector, |_| Ok(()))
        });

        let error = Compiler::new().compile(&style).unwrap_err();
        assert!(matches!(error, StyleError::InvalidSelector { .. }));
    }

    #[test]
    fn test_vendored_property_name() {
        let select = Property::vendored("user-select", [Vendor::Webkit, Vendor::Mozilla]);
        let style = Style::new(move |compiler| select.set(compiler, "none"));
        let rule = compile(&style);

        let name = rule.properties.name(0).unwrap();
        assert_eq!(name.render(Vendor::Webkit), "-webkit-user-select");
        assert_eq!(name.render(Vendor::Mozilla), "-moz-user-select");
        assert_eq!(name.render(Vendor::Standard), "user-select");
    }

    #[test]
    fn test_property_keywords() {
        let color = Property::new("color");
        let style = Style::new(move |compiler| {
            color.inherit(compiler)?;
            assert!(color.is(compiler, "inherit")?);
            Ok(())
        });
        let rule = compile(&style);
        assert!(rule.properties.contains("color", "inherit"));
    }

    #[test]
    fn test_combined_style_declares_members_in_order() {
        let a = Style::new(|compiler| {
            compiler.set_property("color", "red")?.set_property("width", "1px")?;
            Ok(())
        });
        let b = Style::new(|compiler| {
            compiler.set_property("color", "blue")?;
            Ok(())
        });
        let rule = compile(&a.with(&b));

        assert!(rule.properties.contains("color", "blue"));
        assert_eq!(rule.properties.index_of("color"), Some(0));
        assert_eq!(rule.selector.to_string(), format!("{}{}", a.selector(), b.selector()));
    }

    #[test]
    fn test_animate_registers_frames() {
        let fade = AnimationFrames::named("compiler-test-fade")
            .frame(&[0], &Style::new(|compiler| {
                compiler.set_property("opacity", 0)?;
                Ok(())
            }))
            .expect("Failed to build frames");

        let style = Style::new(move |compiler| {
            compiler.animate(&fade)?;
            Ok(())
        });
        let rule = compile(&style);

        assert!(rule.properties.contains("animation-name", "compiler-test-fade"));
        assert!(at_rules::animations()
            .iter()
            .any(|frames| frames.name() == "compiler-test-fade"));
    }
}
