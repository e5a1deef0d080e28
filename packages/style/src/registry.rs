//! Process-wide selector naming for styles.

use crate::style::{Style, StyleId};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

const DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

struct Registry {
    counter: AtomicUsize,
    names: DashMap<StyleId, Arc<str>>,
    styles: DashMap<StyleId, Style>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry {
    counter: AtomicUsize::new(0),
    names: DashMap::new(),
    styles: DashMap::new(),
});

/// Base-52 digits, least significant first. `0` encodes as `A`.
pub fn encode_identifier(mut id: usize) -> String {
    if id == 0 {
        return (DIGITS[0] as char).to_string();
    }

    let base = DIGITS.len();
    let mut encoded = String::new();
    while id != 0 {
        encoded.push(DIGITS[id % base] as char);
        id /= base;
    }
    encoded
}

/// Selector text of `style`, assigned on first request and never changed.
///
/// Anonymous styles receive `.` plus the next short identifier; styles with
/// a literal selector keep it. Either way the style is remembered so that a
/// stylesheet without explicit styles can emit everything identified so far.
pub fn identify(style: &Style) -> Arc<str> {
    let name = REGISTRY
        .names
        .entry(style.id())
        .or_insert_with(|| {
            let name: Arc<str> = match style.explicit_selector() {
                Some(selector) => Arc::from(selector),
                None => {
                    let id = REGISTRY.counter.fetch_add(1, Ordering::Relaxed);
                    Arc::from(format!(".{}", encode_identifier(id)))
                }
            };
            debug!(style = style.id().get(), name = %name, "style identified");
            name
        })
        .clone();

    REGISTRY
        .styles
        .entry(style.id())
        .or_insert_with(|| style.clone());
    name
}

/// Every style identified so far, ordered by identity.
pub fn styles() -> Vec<Style> {
    let mut styles: Vec<Style> = REGISTRY
        .styles
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    styles.sort_by_key(Style::id);
    styles
}
