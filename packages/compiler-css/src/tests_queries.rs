/// Query bucket tests
/// Rules tied to a media or container query are written inside its block
use crate::*;
use stylist_style::*;

#[cfg(test)]
mod query_tests {
    use super::*;

    fn format(styles: &[Style]) -> String {
        Stylesheet::isolated()
            .styles(styles)
            .format(&Formatter::compact())
            .expect("Failed to format")
    }

    #[test]
    fn test_query_rules_follow_plain_rules() {
        let panel = Style::named(".q-panel", |compiler| {
            compiler.set_property("width", Numeric::px(400.0))?;
            compiler.on(Query::screen().max_width(Numeric::px(600.0)), |compiler| {
                compiler.set_property("width", Numeric::percent(100.0))?;
                Ok(())
            })
        });

        assert_eq!(
            format(&[panel]),
            ".q-panel{width:400px;}@media screen and (max-width:600px){.q-panel{width:100%;}}"
        );
    }

    #[test]
    fn test_same_query_shares_one_block() {
        let narrow = || Query::screen().max_width(Numeric::px(600.0));
        let a = Style::described("q-1", move |compiler| {
            compiler.on(narrow(), |compiler| {
                compiler.set_property("display", "none")?;
                Ok(())
            })
        });
        let b = Style::described("q-2", move |compiler| {
            compiler.on(narrow(), |compiler| {
                compiler.set_property("display", "block")?;
                Ok(())
            })
        });

        let css = format(&[a.clone(), b.clone()]);
        assert_eq!(
            css,
            format!(
                "@media screen and (max-width:600px){{{}{{display:none;}}{}{{display:block;}}}}",
                a.selector(),
                b.selector()
            )
        );
    }

    #[test]
    fn test_nested_rules_inside_query_stay_in_bucket() {
        let link = Style::named(".q-link", |compiler| {
            compiler.on(Query::print(), |compiler| {
                compiler.set_property("color", "black")?;
                compiler.hover(|compiler| {
                    compiler.set_property("text-decoration", "none")?;
                    Ok(())
                })
            })
        });

        assert_eq!(
            format(&[link]),
            "@media print{.q-link{color:black;}.q-link:hover{text-decoration:none;}}"
        );
    }

    #[test]
    fn test_container_query_block() {
        let card = Style::named(".q-card", |compiler| {
            compiler.on(
                Query::named_container("sidebar").min_width(Numeric::px(400.0)),
                |compiler| {
                    compiler.set_property("display", "flex")?;
                    Ok(())
                },
            )
        });

        assert_eq!(
            format(&[card]),
            "@container sidebar (min-width:400px){.q-card{display:flex;}}"
        );
    }

    #[test]
    fn test_distinct_queries_keep_first_seen_order() {
        let style = Style::named(".q-order", |compiler| {
            compiler.on(Query::print(), |compiler| {
                compiler.set_property("color", "black")?;
                Ok(())
            })?;
            compiler.on(Query::screen().landscape(), |compiler| {
                compiler.set_property("color", "blue")?;
                Ok(())
            })
        });

        assert_eq!(
            format(&[style]),
            concat!(
                "@media print{.q-order{color:black;}}",
                "@media screen and (orientation:landscape){.q-order{color:blue;}}"
            )
        );
    }
}
