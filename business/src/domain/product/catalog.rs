use std::collections::BTreeMap;

use super::category::Category;
use super::model::Product;

/// One menu section: a category and the products listed under it.
#[derive(Debug, Clone)]
pub struct CatalogSection {
    pub category: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
    pub featured: Vec<Product>,
}

/// Groups available products into sections.
///
/// Known categories come first, by `sort_order` then name. Products whose
/// category has no matching row form extra sections after them, alphabetically.
/// Category names are compared case-insensitively. Empty sections are dropped.
pub fn build_catalog(products: Vec<Product>, categories: &[Category]) -> Catalog {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    let mut by_category: BTreeMap<String, (String, Vec<Product>)> = BTreeMap::new();
    for product in products.into_iter().filter(|p| p.is_available) {
        let key = product.category.trim().to_lowercase();
        by_category
            .entry(key)
            .or_insert_with(|| (product.category.trim().to_string(), Vec::new()))
            .1
            .push(product);
    }

    let mut sections = Vec::new();
    for category in ordered {
        if let Some((_, products)) = by_category.remove(&category.name.trim().to_lowercase()) {
            sections.push(CatalogSection {
                category: category.name.clone(),
                products,
            });
        }
    }

    // BTreeMap iteration is already alphabetical by lowercase key
    sections.extend(
        by_category
            .into_values()
            .map(|(category, products)| CatalogSection { category, products }),
    );

    for section in &mut sections {
        section
            .products
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }

    let featured = sections
        .iter()
        .flat_map(|s| s.products.iter())
        .filter(|p| p.is_featured)
        .cloned()
        .collect();

    Catalog { sections, featured }
}
