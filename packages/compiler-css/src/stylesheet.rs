//! Whole-sheet assembly and output.

use crate::formatter::Formatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use stylist_common::{collect_queries, CommonError, CommonResult, FileSystem, RealFileSystem};
use stylist_style::{at_rules, registry, AnimationFrames, Compiler, Rule, Style, StyleResult, Theme};
use tracing::{info, instrument};

/// A set of styles plus the at-rules written ahead of them.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    styles: Vec<Style>,
    imports: Vec<String>,
    animations: Vec<AnimationFrames>,
    themes: Vec<Theme>,
    global: bool,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// Sheet that also carries every globally registered import, animation
    /// and theme. Without explicit styles it writes every identified style.
    pub fn new() -> Self {
        Self {
            styles: Vec::new(),
            imports: Vec::new(),
            animations: Vec::new(),
            themes: Vec::new(),
            global: true,
        }
    }

    /// Sheet limited to what is added to it explicitly.
    pub fn isolated() -> Self {
        Self {
            global: false,
            ..Self::new()
        }
    }

    pub fn style(mut self, style: &Style) -> Self {
        self.styles.push(style.clone());
        self
    }

    pub fn styles<'a>(mut self, styles: impl IntoIterator<Item = &'a Style>) -> Self {
        self.styles.extend(styles.into_iter().cloned());
        self
    }

    pub fn import(mut self, url: impl Into<String>) -> Self {
        self.imports.push(url.into());
        self
    }

    pub fn animation(mut self, frames: AnimationFrames) -> Self {
        self.animations.push(frames);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    /// Compile every style, ordered by description. Styles with the same
    /// description keep the order they were given in. Styles sharing an
    /// identity are compiled once.
    pub fn compile(&self) -> StyleResult<Vec<Rule>> {
        let styles = if self.styles.is_empty() && self.global {
            registry::styles()
        } else {
            self.styles.clone()
        };

        let mut seen = Vec::new();
        let mut compiler = Compiler::new();
        let mut rules = Vec::new();
        for style in styles {
            if seen.contains(&style.id()) {
                continue;
            }
            seen.push(style.id());
            rules.push(compiler.compile(&style)?);
        }

        rules.sort_by(|a, b| a.description.cmp(&b.description));
        Ok(rules)
    }

    fn collect_imports(&self) -> Vec<String> {
        let mut imports = self.imports.clone();
        if self.global {
            imports.extend(at_rules::imports());
        }

        let mut unique = Vec::new();
        for url in imports {
            if !unique.contains(&url) {
                unique.push(url);
            }
        }
        unique
    }

    fn collect_animations(&self) -> Vec<AnimationFrames> {
        let mut animations = self.animations.clone();
        if self.global {
            for frames in at_rules::animations() {
                if !animations.iter().any(|known| known.name() == frames.name()) {
                    animations.push(frames);
                }
            }
        }
        animations
    }

    fn collect_themes(&self) -> Vec<Theme> {
        let mut themes = self.themes.clone();
        if self.global {
            for theme in at_rules::themes() {
                if !themes.iter().any(|known| known.selector() == theme.selector()) {
                    themes.push(theme);
                }
            }
        }
        themes
    }

    /// Render the sheet: imports, keyframes and themes first, then rules,
    /// then query blocks.
    #[instrument(skip_all, fields(styles = self.styles.len(), global = self.global))]
    pub fn format(&self, formatter: &Formatter) -> StyleResult<String> {
        let _pass = at_rules::lock_pass();
        info!("stylesheet pass started");

        // Compile first; declarations may register animations.
        let rules = self.compile()?;
        let imports = self.collect_imports();
        let animations = self.collect_animations();
        let themes = self.collect_themes();

        let mut text = String::new();
        for url in &imports {
            text.push_str(&formatter.format_import(url));
        }
        for frames in &animations {
            text.push_str(&formatter.format_keyframes(frames));
        }
        for theme in themes.iter().filter(|theme| !theme.is_empty()) {
            text.push_str(&formatter.format_theme(theme));
        }
        text.push_str(&formatter.format_rules(&rules));

        let mut queries = Vec::new();
        for header in rules.iter().flat_map(collect_queries) {
            if !queries.contains(&header) {
                queries.push(header);
            }
        }

        info!(
            rules = rules.len(),
            queries = queries.len(),
            imports = imports.len(),
            animations = animations.len(),
            themes = themes.len(),
            "stylesheet pass completed"
        );
        Ok(text)
    }

    /// Write the rendered sheet to `sink`.
    pub fn write(&self, formatter: &Formatter, sink: &mut impl Write) -> CommonResult<()> {
        let text = self.format(formatter)?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Write the rendered sheet to `path`, replacing any previous file.
    pub fn write_to(&self, formatter: &Formatter, path: impl AsRef<Path>) -> CommonResult<PathBuf> {
        let path = path.as_ref();
        self.write_to_fs(formatter, &RealFileSystem, path)?;
        Ok(path.to_path_buf())
    }

    /// Like [`Stylesheet::write_to`] through a [`FileSystem`].
    pub fn write_to_fs(&self, formatter: &Formatter, fs: &dyn FileSystem, path: &Path) -> CommonResult<()> {
        let text = self.format(formatter)?;
        fs.write(path, &text)
            .map_err(|error| CommonError::output(path, error))?;
        info!(path = %path.display(), bytes = text.len(), "stylesheet written");
        Ok(())
    }
}
