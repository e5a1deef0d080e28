pub mod config;
pub mod formatter;
pub mod processors;
pub mod stylesheet;

#[cfg(test)]
mod tests_stylesheet;

#[cfg(test)]
mod tests_queries;

pub use config::{ColorFormat, FormatterConfig, Preset, DEFAULT_CONFIG_NAME};
pub use formatter::{Formatter, PostProcessor};
pub use processors::{JavaFxLizer, LogicalProperties};
pub use stylesheet::Stylesheet;

use stylist_style::{Style, StyleResult};

/// Compile styles to pretty-printed CSS
pub fn compile_to_css(styles: &[Style]) -> StyleResult<String> {
    compile_to_css_with(styles, &Formatter::pretty())
}

/// Compile with a specific formatter
pub fn compile_to_css_with(styles: &[Style], formatter: &Formatter) -> StyleResult<String> {
    Stylesheet::new().styles(styles).format(formatter)
}
