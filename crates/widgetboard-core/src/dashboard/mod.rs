//! Dashboard session state driven by a presentation layer.
//!
//! A [`Dashboard`] owns the catalog together with the interaction state that
//! sits around it:
//! - the search term the visible view is filtered by
//! - the entry panel used to add categories and widgets
//! - the two-step confirmation guarding widget deletion
//!
//! Front-ends call the methods directly or dispatch [`DashboardAction`]s, then
//! re-render from [`Dashboard::visible`].

mod state;

pub use state::{DeletionState, EntryMode, EntryPanel};

use crate::catalog::{Catalog, CatalogView, CategoryId, Widget, WidgetId};
use crate::error::{CatalogError, EntryError};

/// What a successful entry-panel submit created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Category(CategoryId),
    Widget {
        category_id: CategoryId,
        widget_id: WidgetId,
    },
}

/// A user-triggered dashboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Replace the search term.
    SetSearchTerm(String),
    /// Open the entry panel for a new category.
    BeginAddCategory,
    /// Open the entry panel for a new widget in a category.
    BeginAddWidget(CategoryId),
    /// Edit the open entry panel's draft text.
    SetDraft(String),
    /// Submit the open entry panel.
    SubmitEntry,
    /// Dismiss the entry panel without submitting.
    CloseEntry,
    /// Pick a widget for deletion (awaits confirmation).
    RequestDelete(CategoryId, WidgetId),
    /// Abandon the pending deletion.
    CancelDelete,
    /// Carry out the pending deletion.
    ConfirmDelete,
}

/// Result of applying a [`DashboardAction`].
#[derive(Debug)]
pub enum Outcome {
    /// State changed; re-render.
    Applied,
    /// Nothing to do in the current state.
    Ignored,
    /// Input was refused; state is unchanged.
    Rejected(CatalogError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Session state for one dashboard.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    catalog: Catalog,
    search_term: String,
    entry: EntryPanel,
    deletion: DeletionState,
}

impl Dashboard {
    /// Create a dashboard over an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_term: String::new(),
            entry: EntryPanel::default(),
            deletion: DeletionState::Idle,
        }
    }

    /// Create a dashboard over the bundled seed data.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Direct access for callers that drive the catalog operations themselves.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    // --- Search ---

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The catalog filtered by the current search term.
    pub fn visible(&self) -> CatalogView<'_> {
        self.catalog.search(&self.search_term)
    }

    // --- Entry panel ---

    pub fn entry(&self) -> &EntryPanel {
        &self.entry
    }

    pub fn begin_add_category(&mut self) {
        self.entry.open(EntryMode::Category);
    }

    pub fn begin_add_widget(&mut self, category_id: CategoryId) {
        self.entry.open(EntryMode::Widget(category_id));
    }

    /// Replace the open form's draft. Returns false when the panel is closed.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        self.entry.set_draft(text.into())
    }

    pub fn close_entry(&mut self) {
        self.entry.close();
    }

    /// Create the entity described by the open panel.
    ///
    /// On success the draft is cleared and the panel closes. On rejection the
    /// panel stays open with its draft intact.
    pub fn submit_entry(&mut self) -> Result<Submitted, EntryError> {
        let (mode, draft) = match (self.entry.mode(), self.entry.draft()) {
            (Some(mode), Some(draft)) => (mode, draft.to_string()),
            _ => return Err(EntryError::NotOpen),
        };

        let submitted = match mode {
            EntryMode::Category => Submitted::Category(self.catalog.add_category(draft)?),
            EntryMode::Widget(category_id) => Submitted::Widget {
                category_id,
                widget_id: self.catalog.add_widget(category_id, draft)?,
            },
        };
        self.entry.finish();
        Ok(submitted)
    }

    // --- Deletion ---

    pub fn deletion(&self) -> &DeletionState {
        &self.deletion
    }

    /// Pick a widget for deletion. Nothing is removed until confirmed.
    pub fn request_delete(&mut self, category_id: CategoryId, widget_id: WidgetId) {
        log::debug!("Deletion requested for widget {} in category {}", widget_id, category_id);
        self.deletion.request(category_id, widget_id);
    }

    /// Drop the pending deletion, leaving the catalog alone.
    /// Returns true if a deletion was pending.
    pub fn cancel_delete(&mut self) -> bool {
        self.deletion.cancel()
    }

    /// Remove the pending widget and return to idle.
    ///
    /// Returns the removed widget; `None` if nothing was pending or the widget
    /// was already gone.
    pub fn confirm_delete(&mut self) -> Option<Widget> {
        let (category_id, widget_id) = self.deletion.take()?;
        self.catalog.delete_widget(category_id, widget_id)
    }

    /// Apply a user event.
    pub fn apply(&mut self, action: DashboardAction) -> Outcome {
        match action {
            DashboardAction::SetSearchTerm(term) => {
                self.set_search_term(term);
                Outcome::Applied
            }
            DashboardAction::BeginAddCategory => {
                self.begin_add_category();
                Outcome::Applied
            }
            DashboardAction::BeginAddWidget(category_id) => {
                self.begin_add_widget(category_id);
                Outcome::Applied
            }
            DashboardAction::SetDraft(text) => {
                if self.set_draft(text) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            DashboardAction::SubmitEntry => match self.submit_entry() {
                Ok(_) => Outcome::Applied,
                Err(EntryError::NotOpen) => Outcome::Ignored,
                Err(EntryError::Rejected(e)) => Outcome::Rejected(e),
            },
            DashboardAction::CloseEntry => {
                if self.entry.is_open() {
                    self.close_entry();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            DashboardAction::RequestDelete(category_id, widget_id) => {
                self.request_delete(category_id, widget_id);
                Outcome::Applied
            }
            DashboardAction::CancelDelete => {
                if self.cancel_delete() {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            DashboardAction::ConfirmDelete => {
                if self.deletion.is_pending() {
                    self.confirm_delete();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
        }
    }
}
