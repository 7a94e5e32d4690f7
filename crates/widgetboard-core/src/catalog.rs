//! The category/widget tree and its mutation and search rules.

use crate::config::{CatalogConfig, IdPolicy};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::seed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a category, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

/// Identifier of a widget, unique within its parent category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named leaf entry of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
}

/// A named group of widgets, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    /// Display name. Serialized as `category` to match the seed format.
    #[serde(rename = "category")]
    name: String,
    #[serde(default)]
    widgets: Vec<Widget>,
    /// Highest widget id ever issued in this category.
    #[serde(skip)]
    last_widget_id: u32,
}

// Id counters are bookkeeping, not content.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.widgets == other.widgets
    }
}

impl Eq for Category {}

impl Category {
    fn new(id: CategoryId, name: String) -> Self {
        Self {
            id,
            name,
            widgets: Vec::new(),
            last_widget_id: 0,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Widgets in insertion order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn next_widget_id(&self, policy: IdPolicy) -> Option<WidgetId> {
        next_id(policy, self.widgets.len(), self.last_widget_id, |candidate| {
            self.widgets.iter().any(|w| w.id.0 == candidate)
        })
        .map(WidgetId)
    }
}

/// Pick the next id for a scope holding `count` entries.
///
/// `last_issued` is the highest id handed out so far; `taken` reports whether
/// an id is currently in use. Returns `None` once the id space is used up.
fn next_id(policy: IdPolicy, count: usize, last_issued: u32, taken: impl Fn(u32) -> bool) -> Option<u32> {
    match policy {
        IdPolicy::Monotonic => last_issued.checked_add(1),
        IdPolicy::CountBased => {
            let mut candidate = u32::try_from(count).ok()?.checked_add(1)?;
            while taken(candidate) {
                candidate = candidate.checked_add(1)?;
            }
            Some(candidate)
        }
    }
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// The full ordered collection of categories.
///
/// Insertion order is display order. All mutations either succeed completely
/// or leave the catalog untouched.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    config: CatalogConfig,
    /// Highest category id ever issued.
    last_category_id: u32,
}

impl Catalog {
    /// Create an empty catalog with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given settings.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            categories: Vec::new(),
            config,
            last_category_id: 0,
        }
    }

    /// Catalog populated from the bundled seed data.
    pub fn seeded() -> Self {
        Self::seeded_with(CatalogConfig::default())
    }

    /// Catalog populated from the bundled seed data, with the given settings.
    ///
    /// Falls back to an empty catalog if the bundle fails to load.
    pub fn seeded_with(config: CatalogConfig) -> Self {
        match seed::bundled_categories().and_then(|c| Self::from_categories(c, config.clone())) {
            Ok(catalog) => {
                log::info!(
                    "Seeded catalog with {} categories and {} widgets",
                    catalog.len(),
                    catalog.widget_count()
                );
                catalog
            }
            Err(e) => {
                log::error!("Failed to load bundled seed data: {}", e);
                Self::with_config(config)
            }
        }
    }

    /// Build a catalog from existing categories, checking id uniqueness and
    /// names. Id counters resume past the highest id present.
    pub fn from_categories(mut categories: Vec<Category>, config: CatalogConfig) -> CatalogResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &mut categories {
            if !category_ids.insert(category.id) {
                return Err(CatalogError::InvalidSeed(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
            if is_blank(&category.name) {
                return Err(CatalogError::InvalidSeed(format!(
                    "category {} has a blank name",
                    category.id
                )));
            }

            let mut widget_ids = HashSet::new();
            for widget in &category.widgets {
                if !widget_ids.insert(widget.id) {
                    return Err(CatalogError::InvalidSeed(format!(
                        "duplicate widget id {} in category {}",
                        widget.id, category.id
                    )));
                }
                if is_blank(&widget.name) {
                    return Err(CatalogError::InvalidSeed(format!(
                        "widget {} in category {} has a blank name",
                        widget.id, category.id
                    )));
                }
            }
            category.last_widget_id = category.widgets.iter().map(|w| w.id.0).max().unwrap_or(0);
        }

        let last_category_id = categories.iter().map(|c| c.id.0).max().unwrap_or(0);
        Ok(Self {
            categories,
            config,
            last_category_id,
        })
    }

    /// Parse a catalog from JSON in the seed format.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Self::from_json_with(json, CatalogConfig::default())
    }

    /// Parse a catalog from JSON in the seed format, with the given settings.
    pub fn from_json_with(json: &str, config: CatalogConfig) -> CatalogResult<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::from_categories(categories, config)
    }

    /// Serialize the catalog to JSON in the seed format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.categories)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of widgets across all categories.
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Append a new, empty category.
    pub fn add_category(&mut self, name: impl Into<String>) -> CatalogResult<CategoryId> {
        let name = name.into();
        if is_blank(&name) {
            log::warn!("Rejected category with blank name");
            return Err(CatalogError::BlankName {
                kind: EntityKind::Category,
            });
        }

        let Some(raw) = next_id(
            self.config.id_policy,
            self.categories.len(),
            self.last_category_id,
            |candidate| self.categories.iter().any(|c| c.id.0 == candidate),
        ) else {
            log::warn!("Cannot add category: no category ids left");
            return Err(CatalogError::IdsExhausted {
                kind: EntityKind::Category,
            });
        };
        let id = CategoryId(raw);
        self.last_category_id = self.last_category_id.max(id.0);

        log::debug!("Added category {} ({:?})", id, name);
        self.categories.push(Category::new(id, name));
        Ok(id)
    }

    /// Append a new widget to an existing category.
    ///
    /// An unknown category is reported, never created.
    pub fn add_widget(&mut self, category_id: CategoryId, name: impl Into<String>) -> CatalogResult<WidgetId> {
        let name = name.into();
        if is_blank(&name) {
            log::warn!("Rejected widget with blank name for category {}", category_id);
            return Err(CatalogError::BlankName {
                kind: EntityKind::Widget,
            });
        }

        let policy = self.config.id_policy;
        let Some(category) = self.category_mut(category_id) else {
            log::warn!("Cannot add widget: category {} not found", category_id);
            return Err(CatalogError::CategoryNotFound(category_id));
        };

        let Some(id) = category.next_widget_id(policy) else {
            log::warn!("Cannot add widget: no widget ids left in category {}", category_id);
            return Err(CatalogError::IdsExhausted {
                kind: EntityKind::Widget,
            });
        };
        category.last_widget_id = category.last_widget_id.max(id.0);

        log::debug!("Added widget {} ({:?}) to category {}", id, name, category_id);
        category.widgets.push(Widget { id, name });
        Ok(id)
    }

    /// Remove a widget, returning it if it existed.
    ///
    /// Unknown ids are a no-op, so repeating a delete is harmless.
    pub fn delete_widget(&mut self, category_id: CategoryId, widget_id: WidgetId) -> Option<Widget> {
        match self.try_delete_widget(category_id, widget_id) {
            Ok(widget) => Some(widget),
            Err(e) => {
                log::debug!("Delete ignored: {}", e);
                None
            }
        }
    }

    /// Remove a widget, reporting which reference did not resolve.
    pub fn try_delete_widget(&mut self, category_id: CategoryId, widget_id: WidgetId) -> CatalogResult<Widget> {
        let category = self
            .category_mut(category_id)
            .ok_or(CatalogError::CategoryNotFound(category_id))?;
        let pos = category
            .widgets
            .iter()
            .position(|w| w.id == widget_id)
            .ok_or(CatalogError::WidgetNotFound {
                category: category_id,
                widget: widget_id,
            })?;

        let widget = category.widgets.remove(pos);
        log::debug!("Deleted widget {} ({:?}) from category {}", widget.id, widget.name, category_id);
        Ok(widget)
    }

    /// Filtered view of the catalog.
    ///
    /// Every category is kept; each shows only the widgets whose name contains
    /// `term` (case-insensitive unless configured otherwise). An empty term
    /// shows everything. The catalog itself is never changed.
    pub fn search(&self, term: &str) -> CatalogView<'_> {
        let case_sensitive = self.config.search_case_sensitive;
        let needle = if case_sensitive {
            term.to_string()
        } else {
            term.to_lowercase()
        };

        let categories = self
            .categories
            .iter()
            .map(|category| CategoryView {
                id: category.id,
                name: &category.name,
                widgets: category
                    .widgets
                    .iter()
                    .filter(|w| name_matches(&w.name, &needle, case_sensitive))
                    .collect(),
            })
            .collect();

        CatalogView { categories }
    }
}

fn name_matches(name: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    if case_sensitive {
        name.contains(needle)
    } else {
        name.to_lowercase().contains(needle)
    }
}

/// A read-only projection of the catalog produced by [`Catalog::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    categories: Vec<CategoryView<'a>>,
}

/// One category within a [`CatalogView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView<'a> {
    pub id: CategoryId,
    pub name: &'a str,
    pub widgets: Vec<&'a Widget>,
}

impl<'a> CatalogView<'a> {
    /// Categories in display order, including those with no matches.
    pub fn categories(&self) -> &[CategoryView<'a>] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&CategoryView<'a>> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of matching widgets across all categories.
    pub fn match_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryView<'a>> {
        self.categories.iter()
    }
}

impl CategoryView<'_> {
    pub fn widget_names(&self) -> Vec<&str> {
        self.widgets.iter().map(|w| w.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"[{ "id": 1, "category": "A", "widgets": [{ "id": 1, "name": "Foo" }] }]"#;

    fn names(catalog: &Catalog, id: CategoryId) -> Vec<(u32, String)> {
        catalog
            .category(id)
            .unwrap()
            .widgets()
            .iter()
            .map(|w| (w.id.0, w.name.clone()))
            .collect()
    }

    #[test]
    fn test_add_category() {
        let mut catalog = Catalog::new();
        let id = catalog.add_category("Monitoring").unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(id, CategoryId(1));
        let category = catalog.category(id).unwrap();
        assert_eq!(category.name(), "Monitoring");
        assert!(category.is_empty());
    }

    #[test]
    fn test_add_category_blank_rejected() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        let before = catalog.to_json().unwrap();

        for name in ["", "  ", "\t\n"] {
            let err = catalog.add_category(name).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.to_json().unwrap(), before);
    }

    #[test]
    fn test_name_kept_untrimmed() {
        let mut catalog = Catalog::new();
        let id = catalog.add_category("  Padded ").unwrap();
        assert_eq!(catalog.category(id).unwrap().name(), "  Padded ");
    }

    #[test]
    fn test_add_widget_only_touches_target() {
        let mut catalog = Catalog::seeded();
        let target = catalog.categories()[0].id();
        let others: Vec<_> = catalog.categories()[1..].to_vec();
        let before = catalog.category(target).unwrap().len();

        catalog.add_widget(target, "Compliance Score").unwrap();

        assert_eq!(catalog.category(target).unwrap().len(), before + 1);
        assert_eq!(&catalog.categories()[1..], others.as_slice());
    }

    #[test]
    fn test_add_widget_unknown_category() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        let err = catalog.add_widget(CategoryId(42), "Orphan").unwrap_err();

        assert!(matches!(err, CatalogError::CategoryNotFound(CategoryId(42))));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.widget_count(), 1);
    }

    #[test]
    fn test_add_widget_blank_rejected() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        let err = catalog.add_widget(CategoryId(1), "   ").unwrap_err();

        assert!(matches!(err, CatalogError::BlankName { kind: EntityKind::Widget }));
        assert_eq!(catalog.widget_count(), 1);
    }

    #[test]
    fn test_widget_ids_scoped_per_category() {
        let mut catalog = Catalog::new();
        let a = catalog.add_category("A").unwrap();
        let b = catalog.add_category("B").unwrap();

        assert_eq!(catalog.add_widget(a, "x").unwrap(), WidgetId(1));
        assert_eq!(catalog.add_widget(b, "y").unwrap(), WidgetId(1));
        assert_eq!(catalog.add_widget(a, "z").unwrap(), WidgetId(2));
    }

    #[test]
    fn test_delete_widget_idempotent() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();

        let removed = catalog.delete_widget(CategoryId(1), WidgetId(1));
        assert_eq!(removed.map(|w| w.name), Some("Foo".to_string()));
        let after_first = catalog.to_json().unwrap();

        assert!(catalog.delete_widget(CategoryId(1), WidgetId(1)).is_none());
        assert_eq!(catalog.to_json().unwrap(), after_first);
    }

    #[test]
    fn test_try_delete_reports_missing_reference() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();

        let err = catalog.try_delete_widget(CategoryId(5), WidgetId(1)).unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(CategoryId(5))));

        let err = catalog.try_delete_widget(CategoryId(1), WidgetId(9)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::WidgetNotFound {
                category: CategoryId(1),
                widget: WidgetId(9)
            }
        ));
        assert_eq!(catalog.widget_count(), 1);
    }

    #[test]
    fn test_monotonic_ids_not_reused() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        catalog.add_widget(CategoryId(1), "Bar").unwrap();
        catalog.delete_widget(CategoryId(1), WidgetId(2));

        let id = catalog.add_widget(CategoryId(1), "Baz").unwrap();
        assert_eq!(id, WidgetId(3));
    }

    #[test]
    fn test_count_based_ids_skip_taken() {
        let config = CatalogConfig::default().with_id_policy(IdPolicy::CountBased);
        let mut catalog = Catalog::from_json_with(SINGLE, config).unwrap();
        catalog.add_widget(CategoryId(1), "Bar").unwrap();
        catalog.add_widget(CategoryId(1), "Baz").unwrap();

        // Leaves ids 2 and 3; count + 1 = 3 is taken, so 4 is used.
        catalog.delete_widget(CategoryId(1), WidgetId(1));
        let id = catalog.add_widget(CategoryId(1), "Qux").unwrap();
        assert_eq!(id, WidgetId(4));

        // Leaves ids 3 and 4; 3 and 4 are both taken, so 5 is used.
        catalog.delete_widget(CategoryId(1), WidgetId(2));
        let id = catalog.add_widget(CategoryId(1), "Quux").unwrap();
        assert_eq!(id, WidgetId(5));
    }

    #[test]
    fn test_count_based_matches_observed_rule() {
        let config = CatalogConfig::default().with_id_policy(IdPolicy::CountBased);
        let mut catalog = Catalog::with_config(config);
        assert_eq!(catalog.add_category("A").unwrap(), CategoryId(1));
        assert_eq!(catalog.add_category("B").unwrap(), CategoryId(2));
        assert_eq!(catalog.add_widget(CategoryId(2), "w").unwrap(), WidgetId(1));
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        catalog.add_widget(CategoryId(1), "Bar").unwrap();
        catalog.add_category("Empty").unwrap();

        let view = catalog.search("FO");
        assert_eq!(view.categories().len(), 2);
        assert_eq!(view.category(CategoryId(1)).unwrap().widget_names(), vec!["Foo"]);
        assert!(view.category(CategoryId(2)).unwrap().widgets.is_empty());
        assert_eq!(view.match_count(), 1);
    }

    #[test]
    fn test_search_case_sensitive_config() {
        let config = CatalogConfig {
            search_case_sensitive: true,
            ..CatalogConfig::default()
        };
        let catalog = Catalog::from_json_with(SINGLE, config).unwrap();

        assert_eq!(catalog.search("FO").match_count(), 0);
        assert_eq!(catalog.search("Fo").match_count(), 1);
    }

    #[test]
    fn test_search_empty_term_shows_all() {
        let catalog = Catalog::seeded();
        let view = catalog.search("");

        assert_eq!(view.categories().len(), catalog.len());
        assert_eq!(view.match_count(), catalog.widget_count());
        for (shown, original) in view.iter().zip(catalog.categories()) {
            assert_eq!(shown.id, original.id());
            assert_eq!(shown.widgets.len(), original.len());
        }
    }

    #[test]
    fn test_search_idempotent_and_pure() {
        let catalog = Catalog::seeded();
        let before = catalog.to_json().unwrap();

        let first = catalog.search("risk");
        let second = catalog.search("risk");
        assert_eq!(first, second);
        assert_eq!(catalog.to_json().unwrap(), before);
    }

    #[test]
    fn test_scenario() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        let a = CategoryId(1);

        catalog.add_widget(a, "Bar").unwrap();
        assert_eq!(names(&catalog, a), vec![(1, "Foo".to_string()), (2, "Bar".to_string())]);

        assert_eq!(catalog.search("oo").category(a).unwrap().widget_names(), vec!["Foo"]);

        catalog.delete_widget(a, WidgetId(1));
        assert_eq!(names(&catalog, a), vec![(2, "Bar".to_string())]);

        assert!(catalog.add_category("  ").is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_duplicates_and_blanks() {
        let dup_category = r#"[
            { "id": 1, "category": "A", "widgets": [] },
            { "id": 1, "category": "B", "widgets": [] }
        ]"#;
        assert!(matches!(Catalog::from_json(dup_category), Err(CatalogError::InvalidSeed(_))));

        let dup_widget = r#"[{ "id": 1, "category": "A", "widgets": [
            { "id": 3, "name": "x" }, { "id": 3, "name": "y" }
        ] }]"#;
        assert!(matches!(Catalog::from_json(dup_widget), Err(CatalogError::InvalidSeed(_))));

        let blank = r#"[{ "id": 1, "category": " ", "widgets": [] }]"#;
        assert!(matches!(Catalog::from_json(blank), Err(CatalogError::InvalidSeed(_))));

        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Serialization(_))));
    }

    #[test]
    fn test_from_json_resumes_ids() {
        let sparse = r#"[{ "id": 7, "category": "A", "widgets": [{ "id": 4, "name": "x" }] }]"#;
        let mut catalog = Catalog::from_json(sparse).unwrap();

        assert_eq!(catalog.add_category("B").unwrap(), CategoryId(8));
        assert_eq!(catalog.add_widget(CategoryId(7), "y").unwrap(), WidgetId(5));
    }

    #[test]
    fn test_json_uses_category_field() {
        let catalog = Catalog::from_json(SINGLE).unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"category\": \"A\""));
        let reparsed = Catalog::from_json(&json).unwrap();
        assert_eq!(reparsed.categories(), catalog.categories());
    }

    #[test]
    fn test_category_equality_ignores_id_counter() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        catalog.add_widget(CategoryId(1), "Bar").unwrap();
        catalog.delete_widget(CategoryId(1), WidgetId(2));

        // Counter still remembers id 2; a fresh load only knows id 1.
        let fresh = Catalog::from_json(SINGLE).unwrap();
        assert_eq!(catalog.categories(), fresh.categories());
    }

    #[test]
    fn test_search_non_ascii_case_insensitive() {
        let mut catalog = Catalog::from_json(SINGLE).unwrap();
        catalog.add_widget(CategoryId(1), "Écran principal").unwrap();

        let view = catalog.search("ÉCRAN");
        assert_eq!(view.category(CategoryId(1)).unwrap().widget_names(), vec!["Écran principal"]);
        assert_eq!(catalog.search("écran").match_count(), 1);
    }

    const MAX_CATEGORY: &str = r#"[{ "id": 4294967295, "category": "A", "widgets": [] }]"#;
    const MAX_WIDGET: &str =
        r#"[{ "id": 1, "category": "A", "widgets": [{ "id": 4294967295, "name": "x" }] }]"#;

    #[test]
    fn test_monotonic_ids_exhausted() {
        let mut catalog = Catalog::from_json(MAX_CATEGORY).unwrap();
        let before = catalog.to_json().unwrap();
        let err = catalog.add_category("B").unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted { kind: EntityKind::Category }));
        assert_eq!(catalog.to_json().unwrap(), before);

        let mut catalog = Catalog::from_json(MAX_WIDGET).unwrap();
        let before = catalog.to_json().unwrap();
        let err = catalog.add_widget(CategoryId(1), "y").unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted { kind: EntityKind::Widget }));
        assert_eq!(catalog.to_json().unwrap(), before);

        // Still exhausted on retry; no id is ever handed out twice.
        assert!(catalog.add_widget(CategoryId(1), "y").is_err());
    }

    #[test]
    fn test_count_based_ids_near_max() {
        let config = CatalogConfig::default().with_id_policy(IdPolicy::CountBased);

        let mut catalog = Catalog::from_json_with(MAX_CATEGORY, config.clone()).unwrap();
        assert_eq!(catalog.add_category("B").unwrap(), CategoryId(2));

        let mut catalog = Catalog::from_json_with(MAX_WIDGET, config).unwrap();
        assert_eq!(catalog.add_widget(CategoryId(1), "y").unwrap(), WidgetId(2));
    }

    #[test]
    fn test_count_based_next_id_overflow() {
        assert_eq!(next_id(IdPolicy::CountBased, u32::MAX as usize, 0, |_| false), None);
        assert_eq!(
            next_id(IdPolicy::CountBased, u32::MAX as usize - 1, 0, |c| c == u32::MAX),
            None
        );
        assert_eq!(next_id(IdPolicy::Monotonic, 0, u32::MAX, |_| false), None);
    }
}
