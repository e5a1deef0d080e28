//! Stock post-processors.

use crate::formatter::PostProcessor;
use stylist_style::{Properties, Value, Vendor};

/// Rewrites physical box properties to their flow-relative equivalents,
/// e.g. `margin-left` to `margin-inline-start`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalProperties;

fn logical(name: &str) -> Option<&'static str> {
    let mapped = match name {
        "margin-top" => "margin-block-start",
        "margin-bottom" => "margin-block-end",
        "margin-left" => "margin-inline-start",
        "margin-right" => "margin-inline-end",
        "padding-top" => "padding-block-start",
        "padding-bottom" => "padding-block-end",
        "padding-left" => "padding-inline-start",
        "padding-right" => "padding-inline-end",
        "border-top" => "border-block-start",
        "border-bottom" => "border-block-end",
        "border-left" => "border-inline-start",
        "border-right" => "border-inline-end",
        "top" => "inset-block-start",
        "bottom" => "inset-block-end",
        "left" => "inset-inline-start",
        "right" => "inset-inline-end",
        "width" => "inline-size",
        "height" => "block-size",
        "min-width" => "min-inline-size",
        "min-height" => "min-block-size",
        "max-width" => "max-inline-size",
        "max-height" => "max-block-size",
        _ => return None,
    };
    Some(mapped)
}

impl PostProcessor for LogicalProperties {
    fn process(&self, _selector: &str, properties: &mut Properties) {
        properties.rename(|name| match logical(&name.render(Vendor::Standard)) {
            Some(mapped) => Value::text(mapped),
            None => name.clone(),
        });
    }
}

/// Adapts declarations to JavaFX CSS: padding longhands become one `padding`,
/// `cursor:pointer` becomes `hand`, `width`/`height` become preferred sizes and
/// every name gets the `-fx-` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFxLizer;

impl PostProcessor for JavaFxLizer {
    fn process(&self, _selector: &str, properties: &mut Properties) {
        properties.compact_to(
            "padding",
            "0",
            &["padding-top", "padding-right", "padding-bottom", "padding-left"],
        );
        properties.revalue("cursor", |value| {
            if value.matches("pointer") {
                Value::text("hand")
            } else {
                value.clone()
            }
        });
        properties.rename(|name| {
            let standard = name.render(Vendor::Standard);
            let mapped = match standard.as_str() {
                "width" => "pref-width",
                "height" => "pref-height",
                other => other,
            };
            Value::text(format!("{}{}", Vendor::JavaFX.prefix(), mapped))
        });
    }
}
