//! Dashboard interaction state definitions.

use crate::catalog::{CategoryId, WidgetId};

/// Confirmation state for widget deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionState {
    /// Nothing awaiting confirmation.
    #[default]
    Idle,
    /// A widget has been picked for deletion and awaits confirm or cancel.
    Pending {
        category_id: CategoryId,
        widget_id: WidgetId,
    },
}

impl DeletionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The widget awaiting confirmation, if any.
    pub fn target(&self) -> Option<(CategoryId, WidgetId)> {
        match *self {
            Self::Idle => None,
            Self::Pending { category_id, widget_id } => Some((category_id, widget_id)),
        }
    }

    /// Target a widget. Replaces any earlier pending target.
    pub(crate) fn request(&mut self, category_id: CategoryId, widget_id: WidgetId) {
        *self = Self::Pending { category_id, widget_id };
    }

    /// Return to idle. Returns true if something was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        std::mem::take(self).is_pending()
    }

    /// Return to idle, handing back the target that was pending.
    pub(crate) fn take(&mut self) -> Option<(CategoryId, WidgetId)> {
        std::mem::take(self).target()
    }
}

/// Which add form the entry panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Creating a new category.
    Category,
    /// Creating a widget inside the given category.
    Widget(CategoryId),
}

/// The add-entity panel: open mode plus draft text.
///
/// Category and widget drafts are kept separately and survive closing the
/// panel; only a successful submit clears the draft it used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPanel {
    mode: Option<EntryMode>,
    category_draft: String,
    widget_draft: String,
}

impl EntryPanel {
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<EntryMode> {
        self.mode
    }

    /// Draft text for the currently open form, or `None` when closed.
    pub fn draft(&self) -> Option<&str> {
        self.mode.map(|mode| match mode {
            EntryMode::Category => self.category_draft.as_str(),
            EntryMode::Widget(_) => self.widget_draft.as_str(),
        })
    }

    pub(crate) fn open(&mut self, mode: EntryMode) {
        self.mode = Some(mode);
    }

    pub(crate) fn close(&mut self) {
        self.mode = None;
    }

    /// Replace the draft of the open form. Returns false when closed.
    pub(crate) fn set_draft(&mut self, text: String) -> bool {
        match self.mode {
            Some(EntryMode::Category) => self.category_draft = text,
            Some(EntryMode::Widget(_)) => self.widget_draft = text,
            None => return false,
        }
        true
    }

    /// Clear the draft of the open form and close the panel.
    pub(crate) fn finish(&mut self) {
        match self.mode.take() {
            Some(EntryMode::Category) => self.category_draft.clear(),
            Some(EntryMode::Widget(_)) => self.widget_draft.clear(),
            None => {}
        }
    }
}
