//! Rule tree serialization.
//!
//! A [`Formatter`] is a decoration scheme plus post-processors. It writes
//! rules depth-first, routes rules tied to a query into one buffer per query
//! header, and appends those buffers wrapped in their at-rule after the
//! plain rules.

use crate::config::{ColorFormat, FormatterConfig, Preset};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use stylist_common::RuleVisitorMut;
use stylist_style::{AnimationFrames, Color, Properties, Rule, Theme, Value, Vendor};
use tracing::debug;

/// Rewrites a rule's properties right before it is written.
pub trait PostProcessor: Send + Sync {
    fn process(&self, selector: &str, properties: &mut Properties);
}

impl<F> PostProcessor for F
where
    F: Fn(&str, &mut Properties) + Send + Sync,
{
    fn process(&self, selector: &str, properties: &mut Properties) {
        self(selector, properties)
    }
}

type ColorWriter = Arc<dyn Fn(&Color) -> String + Send + Sync>;

#[derive(Clone)]
pub struct Formatter {
    before_selector: String,
    after_selector: String,
    after_start_brace: String,
    before_end_brace: String,
    after_end_brace: String,
    before_property_name: String,
    after_property_name: String,
    before_property_value: String,
    after_property_value: String,
    after_property_line: String,
    comment: bool,
    show_empty_style: bool,
    color: ColorWriter,
    post_processors: Vec<Arc<dyn PostProcessor>>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::pretty()
    }
}

impl Formatter {
    fn plain() -> Self {
        Self {
            before_selector: String::new(),
            after_selector: String::new(),
            after_start_brace: String::new(),
            before_end_brace: String::new(),
            after_end_brace: String::new(),
            before_property_name: String::new(),
            after_property_name: String::new(),
            before_property_value: String::new(),
            after_property_value: String::new(),
            after_property_line: String::new(),
            comment: false,
            show_empty_style: false,
            color: Arc::new(Color::to_hsl),
            post_processors: Vec::new(),
        }
    }

    /// One declaration per line, blank line between rules, description
    /// comments on.
    pub fn pretty() -> Self {
        Self::plain()
            .comment(true)
            .selector("", " ")
            .start_brace("\n")
            .property_name("\t", "")
            .property_value(" ", "")
            .property_line("\n")
            .end_brace("", "\n\n")
    }

    /// No decoration at all.
    pub fn compact() -> Self {
        Self::plain()
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        let mut formatter = match config.preset {
            Preset::Pretty => Self::pretty(),
            Preset::Compact => Self::compact(),
        };

        let overrides = [
            (&config.before_selector, &mut formatter.before_selector),
            (&config.after_selector, &mut formatter.after_selector),
            (&config.after_start_brace, &mut formatter.after_start_brace),
            (&config.before_end_brace, &mut formatter.before_end_brace),
            (&config.after_end_brace, &mut formatter.after_end_brace),
            (&config.before_property_name, &mut formatter.before_property_name),
            (&config.after_property_name, &mut formatter.after_property_name),
            (&config.before_property_value, &mut formatter.before_property_value),
            (&config.after_property_value, &mut formatter.after_property_value),
            (&config.after_property_line, &mut formatter.after_property_line),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if let Some(comment) = config.comment {
            formatter.comment = comment;
        }
        if let Some(show) = config.show_empty_style {
            formatter.show_empty_style = show;
        }

        match config.color_format {
            ColorFormat::Hsl => formatter,
            ColorFormat::Rgb => formatter.color(Color::to_rgb),
            ColorFormat::Hex => formatter.color(Color::to_hex),
        }
    }

    pub fn selector(mut self, before: &str, after: &str) -> Self {
        self.before_selector = before.to_string();
        self.after_selector = after.to_string();
        self
    }

    pub fn start_brace(mut self, after: &str) -> Self {
        self.after_start_brace = after.to_string();
        self
    }

    pub fn end_brace(mut self, before: &str, after: &str) -> Self {
        self.before_end_brace = before.to_string();
        self.after_end_brace = after.to_string();
        self
    }

    pub fn property_name(mut self, before: &str, after: &str) -> Self {
        self.before_property_name = before.to_string();
        self.after_property_name = after.to_string();
        self
    }

    pub fn property_value(mut self, before: &str, after: &str) -> Self {
        self.before_property_value = before.to_string();
        self.after_property_value = after.to_string();
        self
    }

    pub fn property_line(mut self, after: &str) -> Self {
        self.after_property_line = after.to_string();
        self
    }

    pub fn comment(mut self, comment: bool) -> Self {
        self.comment = comment;
        self
    }

    pub fn show_empty_style(mut self, show: bool) -> Self {
        self.show_empty_style = show;
        self
    }

    pub fn color<F>(mut self, writer: F) -> Self
    where
        F: Fn(&Color) -> String + Send + Sync + 'static,
    {
        self.color = Arc::new(writer);
        self
    }

    pub fn post_processor(mut self, processor: impl PostProcessor + 'static) -> Self {
        self.post_processors.push(Arc::new(processor));
        self
    }

    /// Render a value with this formatter's color writer.
    pub fn render(&self, value: &Value, vendor: Vendor) -> String {
        value.render_with(vendor, &*self.color)
    }

    /// Format one rule tree, query blocks included.
    pub fn format(&self, rule: &Rule) -> String {
        self.format_rules(std::slice::from_ref(rule))
    }

    /// Format rule trees in the given order, then append every query block
    /// in the order its header was first met.
    pub fn format_rules(&self, rules: &[Rule]) -> String {
        let mut output = Output::default();

        for rule in rules {
            let mut rule = rule.clone();
            self.post_process(&mut rule);
            self.emit(&rule, None, &mut output);
        }

        let mut text = output.main;
        for (header, body) in &output.queries {
            debug!(query = %header, "writing query block");
            self.wrap(&mut text, header, body);
        }
        text
    }

    fn post_process(&self, rule: &mut Rule) {
        if self.post_processors.is_empty() {
            return;
        }
        PostProcessing(&self.post_processors).visit_rule_mut(rule);
    }

    fn emit(&self, rule: &Rule, bucket: Option<&str>, output: &mut Output) {
        let header = rule.query.as_ref().map(ToString::to_string);
        let bucket = header.as_deref().or(bucket);

        if rule.properties.is_empty() && !self.show_empty_style {
            debug!(selector = %rule.selector, "empty rule suppressed");
        } else {
            let target = match bucket {
                Some(header) => output.queries.entry(header.to_string()).or_default(),
                None => &mut output.main,
            };
            self.write_rule(rule, target);
        }

        for child in &rule.children {
            self.emit(child, bucket, output);
        }
    }

    /// One block per distinct selector rendering, prefixed renderings first.
    fn write_rule(&self, rule: &Rule, out: &mut String) {
        let mut written: Vec<String> = Vec::new();

        for vendor in rule.selector.vendors() {
            let selector = self.render(&rule.selector, vendor);
            if written.contains(&selector) {
                continue;
            }
            self.write_block(&selector, Some(&rule.description), &rule.properties, out);
            written.push(selector);
        }
    }

    fn write_block(&self, selector: &str, description: Option<&str>, properties: &Properties, out: &mut String) {
        out.push_str(&self.before_selector);
        if let Some(description) = description {
            if self.comment && !description.is_empty() {
                out.push_str(&format!("/* {} */", description));
            }
        }
        out.push_str(selector);
        out.push_str(&self.after_selector);
        out.push('{');
        out.push_str(&self.after_start_brace);
        self.write_declarations(properties, out);
        out.push_str(&self.before_end_brace);
        out.push('}');
        out.push_str(&self.after_end_brace);
    }

    /// Each property is written once per vendor of its name or value,
    /// prefixed vendors before the standard declaration. Vendors that render
    /// identically collapse into one declaration.
    fn write_declarations(&self, properties: &Properties, out: &mut String) {
        for (name, value) in properties.iter() {
            let mut vendors = name.vendors();
            vendors.extend(value.vendors());

            let mut written: Vec<(String, String)> = Vec::new();
            for vendor in vendors {
                let declaration = (self.render(name, vendor), self.render(value, vendor));
                if declaration.1.is_empty() || written.contains(&declaration) {
                    continue;
                }

                out.push_str(&self.before_property_name);
                out.push_str(&declaration.0);
                out.push_str(&self.after_property_name);
                out.push(':');
                out.push_str(&self.before_property_value);
                out.push_str(&declaration.1);
                out.push_str(&self.after_property_value);
                out.push(';');
                out.push_str(&self.after_property_line);
                written.push(declaration);
            }
        }
    }

    fn wrap(&self, out: &mut String, header: &str, body: &str) {
        out.push_str(&self.before_selector);
        out.push_str(header);
        out.push_str(&self.after_selector);
        out.push('{');
        out.push_str(&self.after_start_brace);
        out.push_str(body);
        out.push_str(&self.before_end_brace);
        out.push('}');
        out.push_str(&self.after_end_brace);
    }

    /// `@keyframes` block; keyframes with identical declarations share one
    /// block listing all their stops.
    pub fn format_keyframes(&self, frames: &AnimationFrames) -> String {
        let mut body = String::new();
        for frame in frames.grouped() {
            let stops = frame
                .stops
                .iter()
                .map(|stop| format!("{}%", stop))
                .collect::<Vec<_>>()
                .join(",");
            self.write_block(&stops, None, &frame.properties, &mut body);
        }

        let mut text = String::new();
        self.wrap(&mut text, &format!("@keyframes {}", frames.name()), &body);
        text
    }

    /// Variable block of a theme.
    pub fn format_theme(&self, theme: &Theme) -> String {
        let mut text = String::new();
        self.write_block(theme.selector(), None, &theme.properties(), &mut text);
        text
    }

    /// `@import` statement.
    pub fn format_import(&self, url: &str) -> String {
        format!("@import url(\"{}\");{}", url, self.after_property_line)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("after_selector", &self.after_selector)
            .field("after_start_brace", &self.after_start_brace)
            .field("after_end_brace", &self.after_end_brace)
            .field("comment", &self.comment)
            .field("show_empty_style", &self.show_empty_style)
            .field("post_processors", &self.post_processors.len())
            .finish()
    }
}

#[derive(Default)]
struct Output {
    main: String,
    queries: IndexMap<String, String>,
}

struct PostProcessing<'a>(&'a [Arc<dyn PostProcessor>]);

impl RuleVisitorMut for PostProcessing<'_> {
    fn visit_properties_mut(&mut self, selector: &str, properties: &mut Properties) {
        for processor in self.0 {
            processor.process(selector, properties);
        }
    }
}
