//! Widgetboard Core Library
//!
//! UI-agnostic state for the widget dashboard: the category/widget catalog,
//! its search projection, and the interaction state a front-end drives.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod seed;

pub use catalog::{Catalog, CatalogView, Category, CategoryId, CategoryView, Widget, WidgetId};
pub use config::{CatalogConfig, IdPolicy};
pub use dashboard::{Dashboard, DashboardAction, DeletionState, EntryMode, EntryPanel, Outcome, Submitted};
pub use error::{CatalogError, CatalogResult, EntityKind, EntryError};
