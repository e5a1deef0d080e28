use thiserror::Error;

pub type StyleResult<T> = Result<T, StyleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid selector: {message}")]
    InvalidSelector { message: String },

    #[error("Property '{property}' was written outside of any style declaration")]
    MissingPropertyContext { property: String },

    #[error("Declaration failed: {message}")]
    Declaration { message: String },
}

impl StyleError {
    pub fn invalid_selector(message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            message: message.into(),
        }
    }

    pub fn missing_property_context(property: impl Into<String>) -> Self {
        Self::MissingPropertyContext {
            property: property.into(),
        }
    }

    pub fn declaration(message: impl Into<String>) -> Self {
        Self::Declaration {
            message: message.into(),
        }
    }
}
