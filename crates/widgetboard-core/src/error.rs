//! Error types for catalog operations.

use crate::catalog::{CategoryId, WidgetId};
use std::fmt;
use thiserror::Error;

/// The kind of entity a name was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Widget,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Widget => f.write_str("widget"),
        }
    }
}

/// Catalog errors.
///
/// Every operation that returns one of these has left the catalog untouched.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} name must not be blank")]
    BlankName { kind: EntityKind },
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),
    #[error("Widget {widget} not found in category {category}")]
    WidgetNotFound {
        category: CategoryId,
        widget: WidgetId,
    },
    #[error("No {kind} ids left to assign")]
    IdsExhausted { kind: EntityKind },
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// Input was rejected before any lookup happened.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::BlankName { .. })
    }

    /// A category or widget id did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_) | Self::WidgetNotFound { .. })
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from submitting the entry panel.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("No entry panel is open")]
    NotOpen,
    #[error(transparent)]
    Rejected(#[from] CatalogError),
}
