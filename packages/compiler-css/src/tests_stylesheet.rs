/// Stylesheet assembly tests
/// Ordering, hoisting, vendor expansion and the at-rule preamble
use crate::*;
use stylist_style::*;

#[cfg(test)]
mod stylesheet_tests {
    use super::*;

    fn compact(styles: &[Style]) -> String {
        Stylesheet::isolated()
            .styles(styles)
            .format(&Formatter::compact())
            .expect("Failed to format")
    }

    #[test]
    fn test_hover_scenario() {
        let style = Style::new(|compiler| {
            compiler.set_property("display", "block")?;
            compiler.hover(|compiler| {
                compiler.set_property("width", Numeric::px(20.0))?;
                Ok(())
            })
        });
        let selector = style.selector();

        let css = Stylesheet::isolated()
            .style(&style)
            .format(&Formatter::compact().end_brace("", " "))
            .expect("Failed to format");

        assert_eq!(
            css,
            format!("{0}{{display:block;}} {0}:hover{{width:20px;}} ", selector)
        );
    }

    #[test]
    fn test_empty_parent_is_hoisted() {
        let style = Style::named(".hoist", |compiler| {
            compiler.hover(|compiler| {
                compiler.set_property("color", "red")?;
                Ok(())
            })
        });

        assert_eq!(compact(&[style.clone()]), ".hoist:hover{color:red;}");

        let shown = Stylesheet::isolated()
            .style(&style)
            .format(&Formatter::compact().show_empty_style(true))
            .expect("Failed to format");
        assert_eq!(shown, ".hoist{}.hoist:hover{color:red;}");
    }

    #[test]
    fn test_webkit_property_renders_both_declarations() {
        let style = Style::named(".vendor", |compiler| {
            compiler.set_property(Value::vendored("user-select", [Vendor::Webkit]), "none")?;
            Ok(())
        });

        assert_eq!(
            compact(&[style]),
            ".vendor{-webkit-user-select:none;user-select:none;}"
        );
    }

    #[test]
    fn test_vendored_selector_writes_separate_blocks() {
        let style = Style::named(".text", |compiler| {
            compiler.nest(Selector::new().selection(), |compiler| {
                compiler.set_property("color", "white")?;
                Ok(())
            })
        });

        assert_eq!(
            compact(&[style]),
            ".text::-moz-selection{color:white;}.text::selection{color:white;}"
        );
    }

    #[test]
    fn test_rules_sorted_by_description() {
        let b = Style::described("b", |compiler| {
            compiler.set_property("order", 2)?;
            Ok(())
        });
        let a = Style::described("a", |compiler| {
            compiler.set_property("order", 1)?;
            Ok(())
        });

        let css = compact(&[b.clone(), a.clone()]);
        assert_eq!(
            css,
            format!("{}{{order:1;}}{}{{order:2;}}", a.selector(), b.selector())
        );
    }

    #[test]
    fn test_equal_descriptions_keep_given_order() {
        let sizes = ValueStyle::new(|compiler, size: &u32| {
            compiler.set_property("width", Numeric::px(*size as f64))?;
            Ok(())
        });
        let large = sizes.of(30);
        let small = sizes.of(10);
        assert_eq!(large.detail(), small.detail());

        // name the later style first so selector order disagrees with input order
        let small_selector = small.selector();
        let large_selector = large.selector();

        let css = compact(&[large, small]);
        assert_eq!(
            css,
            format!(
                "{}{{width:30px;}}{}{{width:10px;}}",
                large_selector, small_selector
            )
        );
    }

    #[test]
    fn test_duplicate_styles_compiled_once() {
        let style = Style::named(".once", |compiler| {
            compiler.set_property("margin", 0)?;
            Ok(())
        });

        assert_eq!(compact(&[style.clone(), style.clone(), style]), ".once{margin:0;}");
    }

    #[test]
    fn test_preamble_order() {
        let fade = AnimationFrames::named("sheet-fade")
            .frame(&[0, 100], &Style::new(|compiler| {
                compiler.set_property("opacity", 1)?;
                Ok(())
            }))
            .and_then(|frames| {
                frames.frame(&[50], &Style::new(|compiler| {
                    compiler.set_property("opacity", 0)?;
                    Ok(())
                }))
            })
            .expect("Failed to build frames");

        let style = Style::named(".pre", |compiler| {
            compiler.set_property("color", "var(--main)")?;
            Ok(())
        });

        let css = Stylesheet::isolated()
            .style(&style)
            .import("https://example.com/base.css")
            .animation(fade)
            .theme(Theme::root().define("main", "black"))
            .format(&Formatter::compact())
            .expect("Failed to format");

        assert_eq!(
            css,
            concat!(
                "@import url(\"https://example.com/base.css\");",
                "@keyframes sheet-fade{0%,100%{opacity:1;}50%{opacity:0;}}",
                ":root{--main:black;}",
                ".pre{color:var(--main);}"
            )
        );
    }

    #[test]
    fn test_keyframes_union_merges_equal_frames() {
        let visible = Style::new(|compiler| {
            compiler.set_property("opacity", 1)?;
            Ok(())
        });
        let hidden = Style::new(|compiler| {
            compiler.set_property("opacity", 0)?;
            Ok(())
        });

        let blink = AnimationFrames::named("blink")
            .frame(&[0], &visible)
            .and_then(|frames| frames.frame(&[50], &hidden))
            .and_then(|frames| frames.frame(&[100], &visible))
            .expect("Failed to build frames");

        assert_eq!(
            Formatter::compact().format_keyframes(&blink),
            "@keyframes blink{0%,100%{opacity:1;}50%{opacity:0;}}"
        );
    }

    #[test]
    fn test_animate_lands_in_global_sheet() {
        let spin = AnimationFrames::named("sheet-spin")
            .frame(&[100], &Style::new(|compiler| {
                compiler.set_property("transform", "rotate(360deg)")?;
                Ok(())
            }))
            .expect("Failed to build frames");

        let style = Style::named(".spinner", move |compiler| {
            compiler.animate(&spin)?;
            Ok(())
        });

        let css = Stylesheet::new()
            .style(&style)
            .format(&Formatter::compact())
            .expect("Failed to format");

        assert!(css.contains("@keyframes sheet-spin{100%{transform:rotate(360deg);}}"));
        assert!(css.contains(".spinner{animation-name:sheet-spin;}"));
        let keyframes = css.find("@keyframes sheet-spin").unwrap();
        let rule = css.find(".spinner{").unwrap();
        assert!(keyframes < rule);
    }

    #[test]
    fn test_compile_error_is_returned() {
        let style = Style::new(|compiler| {
            compiler.nest(Selector::new().attr(" ")?.exists(), |_| Ok(()))
        });

        let error = Stylesheet::isolated()
            .style(&style)
            .format(&Formatter::compact())
            .unwrap_err();
        assert!(matches!(error, StyleError::InvalidSelector { .. }));
    }

    #[test]
    fn test_write_through_mock_file_system() {
        let style = Style::named(".mocked", |compiler| {
            compiler.set_property("display", "none")?;
            Ok(())
        });
        let fs = stylist_common::MockFileSystem::new();
        let path = std::path::PathBuf::from("/virtual/app.css");

        Stylesheet::isolated()
            .style(&style)
            .write_to_fs(&Formatter::compact(), &fs, &path)
            .expect("Failed to write");
        assert_eq!(fs.read(&path).as_deref(), Some(".mocked{display:none;}"));

        let failing = stylist_common::MockFileSystem::failing();
        let error = Stylesheet::isolated()
            .style(&style)
            .write_to_fs(&Formatter::compact(), &failing, &path)
            .unwrap_err();
        assert!(matches!(error, stylist_common::CommonError::Output { .. }));
    }

    #[test]
    fn test_write_to_sink() {
        let style = Style::named(".sink", |compiler| {
            compiler.set_property("display", "grid")?;
            Ok(())
        });

        let mut sink = Vec::new();
        Stylesheet::isolated()
            .style(&style)
            .write(&Formatter::compact(), &mut sink)
            .expect("Failed to write");
        assert_eq!(String::from_utf8(sink).unwrap(), ".sink{display:grid;}");
    }

    #[test]
    fn test_formatter_from_config() {
        let config = FormatterConfig::from_json(
            r#"{ "preset": "compact", "afterEndBrace": "\n", "colorFormat": "hex" }"#,
        )
        .expect("Failed to parse config");
        let style = Style::named(".configured", |compiler| {
            compiler.set_property("color", Color::rgb(17, 17, 17))?;
            Ok(())
        });

        let css = Stylesheet::isolated()
            .style(&style)
            .format(&Formatter::from_config(&config))
            .expect("Failed to format");
        assert_eq!(css, ".configured{color:#111111;}\n");
    }
}
