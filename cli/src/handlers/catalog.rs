//! Handlers for catalog browsing and product creation

use shared::{FilterMode, InventoryError, NewProduct};

use crate::cli::AddArgs;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{ProductDetail, ProductList};

/// List products matching the search text and filter
pub fn list_products(state: &mut AppState, search: &str, filter: FilterMode) -> AppResult<()> {
    let products = state.store.filter(search, filter);
    tracing::debug!(search, filter = %filter, matches = products.len(), "Filtered catalog");
    state.emit(&ProductList(products))
}

/// Show a product with its movement history
pub fn show_product(state: &mut AppState, product_id: &str) -> AppResult<()> {
    let product = state
        .store
        .product(product_id)
        .ok_or_else(|| InventoryError::NotFound(format!("Product {}", product_id)))?;
    let history = state.store.history_for(product_id);
    state.emit(&ProductDetail { product, history })
}

/// Look up a scanned barcode and show the product
pub fn scan_barcode(state: &mut AppState, barcode: &str) -> AppResult<()> {
    let product = state.store.find_by_barcode(barcode)?;
    let history = state.store.history_for(&product.id);
    state.emit(&ProductDetail { product, history })
}

/// Add a product from the command-line fields
pub fn add_product(state: &mut AppState, args: AddArgs) -> AppResult<()> {
    let input = NewProduct {
        name: args.name,
        sku: args.sku,
        barcode: args.barcode,
        category: args.category,
        supplier: args.supplier,
        cost_price: args.cost_price,
        sell_price: args.sell_price,
        stock: args.stock,
        low_stock_threshold: args.low_stock_threshold,
        expiry_date: args.expiry_date,
        image_path: args.image_path,
    };

    let product = state.store.add_product(input)?.clone();
    let history = Vec::new();
    state.emit(&ProductDetail {
        product: &product,
        history,
    })
}
