//! In-memory Catalog Source Adapter
//!
//! Holds a pre-built catalog. Used in tests and demo setups where no
//! catalog file exists.

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source that returns a fixed, pre-built catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    catalog: Catalog,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Section;

    #[tokio::test]
    async fn returns_the_catalog_it_was_built_with() {
        let catalog = Catalog {
            sections: vec![Section {
                section_number: 1,
                title: "Intake".to_string(),
                questions: vec![],
            }],
        };
        let source = InMemoryCatalogSource::new(catalog.clone());
        assert_eq!(source.load().await.unwrap(), catalog);
    }
}
