//! Catalog queries: inventory filtering and barcode lookup

use chrono::{DateTime, Utc};

use crate::models::Product;
use crate::types::FilterMode;

/// Filter the catalog by search text and stock state
pub fn filter_products<'a>(products: &'a [Product], search: &str, mode: FilterMode) -> Vec<&'a Product> {
    filter_products_at(products, search, mode, Utc::now())
}

/// Filter the catalog as of `now`.
///
/// The search text matches name, SKU or category case-insensitively; the
/// result keeps catalog order.
pub fn filter_products_at<'a>(
    products: &'a [Product],
    search: &str,
    mode: FilterMode,
    now: DateTime<Utc>,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle) && matches_mode(p, mode, now))
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.sku.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

fn matches_mode(product: &Product, mode: FilterMode, now: DateTime<Utc>) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Low => product.is_low_stock(),
        FilterMode::Out => product.is_out_of_stock(),
        FilterMode::Expired => product.is_expired(now),
    }
}

/// First product whose barcode equals `code`
pub fn find_by_barcode<'a>(products: &'a [Product], code: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.barcode == code)
}
