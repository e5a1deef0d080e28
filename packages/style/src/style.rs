//! Style declarations and their identity.

use crate::compiler::Compiler;
use crate::error::StyleResult;
use crate::registry;
use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Surrogate identity of a [`Style`], allocated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(u64);

impl StyleId {
    fn next() -> Self {
        StyleId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A declaration procedure. It writes properties and nested rules through
/// the compiler it is handed.
pub trait Declaration: Send + Sync {
    fn declare(&self, compiler: &mut Compiler) -> StyleResult<()>;
}

impl<F> Declaration for F
where
    F: Fn(&mut Compiler) -> StyleResult<()> + Send + Sync,
{
    fn declare(&self, compiler: &mut Compiler) -> StyleResult<()> {
        self(compiler)
    }
}

enum Body {
    Single(Box<dyn Declaration>),
    Multiple(Vec<Style>),
}

struct Inner {
    id: StyleId,
    selector: Option<String>,
    detail: String,
    body: Body,
}

/// A shareable source of CSS rules.
///
/// Cloning is cheap and keeps the identity, so a clone renders under the same
/// selector as the original.
#[derive(Clone)]
pub struct Style {
    inner: Arc<Inner>,
}

impl Style {
    fn build(selector: Option<String>, detail: String, body: Body) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: StyleId::next(),
                selector,
                detail,
                body,
            }),
        }
    }

    /// Anonymous style; the caller's source location becomes its detail.
    #[track_caller]
    pub fn new<F>(declaration: F) -> Self
    where
        F: Fn(&mut Compiler) -> StyleResult<()> + Send + Sync + 'static,
    {
        Self::build(None, caller(), Body::Single(Box::new(declaration)))
    }

    /// Style rendered under a literal selector such as `body` or `.button`.
    #[track_caller]
    pub fn named<F>(selector: impl Into<String>, declaration: F) -> Self
    where
        F: Fn(&mut Compiler) -> StyleResult<()> + Send + Sync + 'static,
    {
        Self::build(
            Some(selector.into()),
            caller(),
            Body::Single(Box::new(declaration)),
        )
    }

    /// Anonymous style with an explicit detail text, used for ordering.
    pub fn described<F>(detail: impl Into<String>, declaration: F) -> Self
    where
        F: Fn(&mut Compiler) -> StyleResult<()> + Send + Sync + 'static,
    {
        Self::build(None, detail.into(), Body::Single(Box::new(declaration)))
    }

    /// Anonymous style backed by a custom [`Declaration`].
    #[track_caller]
    pub fn from_declaration(declaration: impl Declaration + 'static) -> Self {
        Self::build(None, caller(), Body::Single(Box::new(declaration)))
    }

    /// Style without declarations.
    #[track_caller]
    pub fn empty() -> Self {
        Self::new(|_| Ok(()))
    }

    pub fn id(&self) -> StyleId {
        self.inner.id
    }

    pub fn detail(&self) -> &str {
        &self.inner.detail
    }

    pub fn explicit_selector(&self) -> Option<&str> {
        self.inner.selector.as_deref()
    }

    /// Selector text: the literal selector when given, otherwise the stable
    /// short identifier. A combination renders its members as one compound.
    pub fn selector(&self) -> Arc<str> {
        match &self.inner.body {
            Body::Multiple(members) => {
                let compound: String = members.iter().map(|m| m.selector().to_string()).collect();
                Arc::from(compound)
            }
            Body::Single(_) => registry::identify(self),
        }
    }

    /// Class names carried by this style, without the leading `.`.
    pub fn class_names(&self) -> Vec<String> {
        match &self.inner.body {
            Body::Multiple(members) => members.iter().flat_map(Style::class_names).collect(),
            Body::Single(_) => {
                let selector = self.selector();
                match selector.strip_prefix('.') {
                    Some(name) => vec![name.to_string()],
                    None => Vec::new(),
                }
            }
        }
    }

    /// Run the declaration procedure against the compiler's active rule.
    pub fn declare(&self, compiler: &mut Compiler) -> StyleResult<()> {
        match &self.inner.body {
            Body::Single(declaration) => declaration.declare(compiler),
            Body::Multiple(members) => {
                for member in members {
                    member.declare(compiler)?;
                }
                Ok(())
            }
        }
    }

    /// Combined style that declares `self` then `other`. Nested combinations
    /// flatten and members with the same identity appear once.
    pub fn with(&self, other: &Style) -> Style {
        let mut members = Vec::new();
        self.flatten_into(&mut members);
        other.flatten_into(&mut members);

        let detail = members
            .first()
            .map(|first| first.detail().to_string())
            .unwrap_or_default();
        Self::build(None, detail, Body::Multiple(members))
    }

    fn flatten_into(&self, members: &mut Vec<Style>) {
        match &self.inner.body {
            Body::Multiple(nested) => {
                for member in nested {
                    member.flatten_into(members);
                }
            }
            Body::Single(_) => {
                if !members.iter().any(|member| member.id() == self.id()) {
                    members.push(self.clone());
                }
            }
        }
    }

    /// Members of a combination; a plain style is its own single member.
    pub fn members(&self) -> Vec<Style> {
        let mut members = Vec::new();
        self.flatten_into(&mut members);
        members
    }
}

#[track_caller]
fn caller() -> String {
    let location = Location::caller();
    format!("{}:{}", location.file(), location.line())
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("id", &self.inner.id)
            .field("selector", &self.inner.selector)
            .field("detail", &self.inner.detail)
            .finish()
    }
}

type ValueDeclaration<V> = dyn Fn(&mut Compiler, &V) -> StyleResult<()> + Send + Sync;

/// A family of styles parameterised by a value.
///
/// Each distinct value maps to one memoized [`Style`], so its identifier is
/// stable for the life of the family.
pub struct ValueStyle<V> {
    declaration: Arc<ValueDeclaration<V>>,
    detail: String,
    cache: DashMap<V, Style>,
}

impl<V> ValueStyle<V>
where
    V: Eq + Hash + Clone + Send + Sync + 'static,
{
    #[track_caller]
    pub fn new<F>(declaration: F) -> Self
    where
        F: Fn(&mut Compiler, &V) -> StyleResult<()> + Send + Sync + 'static,
    {
        Self {
            declaration: Arc::new(declaration),
            detail: caller(),
            cache: DashMap::new(),
        }
    }

    pub fn of(&self, value: V) -> Style {
        self.cache
            .entry(value.clone())
            .or_insert_with(|| {
                let declaration = Arc::clone(&self.declaration);
                Style::described(self.detail.clone(), move |compiler| {
                    declaration(compiler, &value)
                })
            })
            .clone()
    }

    /// Styles created so far, in no particular order.
    pub fn members(&self) -> Vec<Style> {
        self.cache.iter().map(|entry| entry.value().clone()).collect()
    }
}
