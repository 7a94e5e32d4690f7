//! Bundled starting data for a new session.

use crate::catalog::Category;
use crate::error::CatalogResult;

/// Seed catalog in the `[{ id, category, widgets: [{ id, name }] }]` format.
pub const BUNDLED_SEED: &str = include_str!("../data/seed.json");

/// Parse the bundled seed into categories.
pub fn bundled_categories() -> CatalogResult<Vec<Category>> {
    Ok(serde_json::from_str(BUNDLED_SEED)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, CatalogConfig};

    #[test]
    fn test_bundle_is_valid() {
        let categories = bundled_categories().unwrap();
        assert!(!categories.is_empty());
        assert!(Catalog::from_categories(categories, CatalogConfig::default()).is_ok());
    }

    #[test]
    fn test_seeded_matches_bundle() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.widget_count(), 6);
        assert_eq!(catalog.categories()[0].name(), "CSPM Executive Dashboard");
    }
}
