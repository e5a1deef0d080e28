//! Process-wide at-rule registrations shared by every stylesheet pass.

use crate::animation::AnimationFrames;
use crate::theme::Theme;
use dashmap::{DashMap, DashSet};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

struct AtRules {
    animations: DashMap<String, AnimationFrames>,
    themes: DashMap<String, Theme>,
    imports: DashSet<String>,
    pass: Mutex<()>,
}

static AT_RULES: Lazy<AtRules> = Lazy::new(|| AtRules {
    animations: DashMap::new(),
    themes: DashMap::new(),
    imports: DashSet::new(),
    pass: Mutex::new(()),
});

pub fn register_animation(frames: AnimationFrames) {
    AT_RULES.animations.insert(frames.name().to_string(), frames);
}

pub fn register_theme(theme: Theme) {
    AT_RULES.themes.insert(theme.selector().to_string(), theme);
}

/// External stylesheet to `@import` ahead of every rule.
pub fn register_import(url: impl Into<String>) {
    AT_RULES.imports.insert(url.into());
}

/// Registered animations, ordered by name.
pub fn animations() -> Vec<AnimationFrames> {
    let mut animations: Vec<_> = AT_RULES
        .animations
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    animations.sort_by(|a, b| a.name().cmp(b.name()));
    animations
}

/// Registered themes, ordered by selector.
pub fn themes() -> Vec<Theme> {
    let mut themes: Vec<_> = AT_RULES
        .themes
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    themes.sort_by(|a, b| a.selector().cmp(b.selector()));
    themes
}

/// Registered imports, ordered by URL.
pub fn imports() -> Vec<String> {
    let mut imports: Vec<_> = AT_RULES.imports.iter().map(|url| url.key().clone()).collect();
    imports.sort();
    imports
}

/// Coarse lock held for a whole stylesheet pass so the registrations it
/// reads match the rules it emits.
pub fn lock_pass() -> MutexGuard<'static, ()> {
    AT_RULES.pass.lock()
}
