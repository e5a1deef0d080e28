use std::fmt;
use stylist_values::Numeric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Media,
    Container,
}

/// `@media` / `@container` at-rule descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    kind: QueryKind,
    name: String,
    orientation: Option<&'static str>,
    hover: Option<&'static str>,
    max_width: Option<Numeric>,
    min_width: Option<Numeric>,
    max_height: Option<Numeric>,
    min_height: Option<Numeric>,
}

impl Query {
    fn of(kind: QueryKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            orientation: None,
            hover: None,
            max_width: None,
            min_width: None,
            max_height: None,
            min_height: None,
        }
    }

    pub fn all() -> Self {
        Self::of(QueryKind::Media, "all")
    }

    pub fn print() -> Self {
        Self::of(QueryKind::Media, "print")
    }

    pub fn screen() -> Self {
        Self::of(QueryKind::Media, "screen")
    }

    pub fn speech() -> Self {
        Self::of(QueryKind::Media, "speech")
    }

    /// Anonymous container query.
    pub fn container() -> Self {
        Self::of(QueryKind::Container, "")
    }

    pub fn named_container(name: impl Into<String>) -> Self {
        Self::of(QueryKind::Container, name)
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn max_width(mut self, width: Numeric) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn min_width(mut self, width: Numeric) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_height(mut self, height: Numeric) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn min_height(mut self, height: Numeric) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn landscape(mut self) -> Self {
        self.orientation = Some("landscape");
        self
    }

    pub fn portrait(mut self) -> Self {
        self.orientation = Some("portrait");
        self
    }

    pub fn hover(mut self) -> Self {
        self.hover = Some("hover");
        self
    }

    fn conditions(&self) -> Vec<String> {
        let mut conditions = Vec::new();

        if let Some(orientation) = self.orientation {
            conditions.push(format!("(orientation:{})", orientation));
        }
        if let Some(hover) = self.hover {
            conditions.push(format!("(hover:{})", hover));
        }
        let sizes = [
            ("max-width", &self.max_width),
            ("min-width", &self.min_width),
            ("max-height", &self.max_height),
            ("min-height", &self.min_height),
        ];
        for (feature, size) in sizes {
            if let Some(size) = size {
                conditions.push(format!("({}:{})", feature, size));
            }
        }
        conditions
    }
}

/// Renders the at-rule header, e.g. `@media screen and (max-width:600px)`.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions = self.conditions();

        match self.kind {
            QueryKind::Media => {
                write!(f, "@media {}", self.name)?;
                for condition in conditions {
                    write!(f, " and {}", condition)?;
                }
                Ok(())
            }
            // container conditions are not preceded by a media type
            QueryKind::Container => {
                f.write_str("@container")?;
                if !self.name.is_empty() {
                    write!(f, " {}", self.name)?;
                }
                if !conditions.is_empty() {
                    write!(f, " {}", conditions.join(" and "))?;
                }
                Ok(())
            }
        }
    }
}
