//! Application store: owns the product and movement collections.
//!
//! The store is initialized from persistence (or the seed data), mutated
//! through a small set of transitions, and writes every mutated collection
//! back through the injected [`KeyValueStore`] before returning.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::backup::{backup_filename, parse_backup, BackupDocument, RestoreSummary};
use crate::catalog::{filter_products, find_by_barcode};
use crate::error::{InventoryError, InventoryResult};
use crate::export::{csv_filename, export_products_csv};
use crate::ledger;
use crate::models::{
    BestSeller, DashboardStats, MovementType, NewProduct, Product, StockMovement, User,
};
use crate::seed;
use crate::statistics::{compute_best_sellers, compute_dashboard_stats};
use crate::storage::{self, KeyValueStore, MOVEMENTS_KEY, PRODUCTS_KEY};
use crate::types::{now_millis, Brand, FilterMode};
use crate::validation::validate_new_product;

/// Placeholder stored for optional text fields left empty on the add form
pub const NOT_AVAILABLE: &str = "N/A";

/// Inventory state with its persistence adapter
#[derive(Debug)]
pub struct InventoryStore<S: KeyValueStore> {
    storage: S,
    brand: Brand,
    products: Vec<Product>,
    /// Most recent first
    movements: Vec<StockMovement>,
    users: Vec<User>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Load both collections, falling back to the seed data when absent
    pub fn open(storage: S, brand: Brand) -> InventoryResult<Self> {
        let now = now_millis();
        let products = storage::load(&storage, PRODUCTS_KEY, || seed::initial_products(now))?;
        let movements = storage::load(&storage, MOVEMENTS_KEY, || seed::initial_movements(now))?;

        tracing::info!(
            products = products.len(),
            movements = movements.len(),
            brand = brand.code(),
            "Inventory loaded"
        );

        Ok(Self {
            storage,
            brand,
            products,
            movements,
            users: seed::initial_users(),
        })
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Movement history, most recent first
    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a scanned barcode
    pub fn find_by_barcode(&self, code: &str) -> InventoryResult<&Product> {
        find_by_barcode(&self.products, code).ok_or_else(|| {
            tracing::info!(barcode = code, "Barcode lookup missed");
            InventoryError::BarcodeNotFound(code.to_string())
        })
    }

    pub fn filter(&self, search: &str, mode: FilterMode) -> Vec<&Product> {
        filter_products(&self.products, search, mode)
    }

    /// Movements of one product, most recent first
    pub fn history_for(&self, product_id: &str) -> Vec<&StockMovement> {
        self.movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .collect()
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        compute_dashboard_stats(&self.products, &self.movements)
    }

    pub fn best_sellers(&self, top_n: usize) -> Vec<BestSeller> {
        compute_best_sellers(&self.movements, top_n)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Validate and append a new product to the catalog
    pub fn add_product(&mut self, input: NewProduct) -> InventoryResult<&Product> {
        self.add_product_at(input, now_millis())
    }

    pub fn add_product_at(&mut self, input: NewProduct, at: DateTime<Utc>) -> InventoryResult<&Product> {
        validate_new_product(&input)?;

        let sku = match input.sku {
            Some(sku) => {
                let sku = sku.trim().to_string();
                if self.has_sku(&sku) {
                    return Err(InventoryError::DuplicateEntry(format!("SKU {}", sku)));
                }
                sku
            }
            None => self.unused_sku(at),
        };

        let product = Product {
            id: Uuid::new_v4().to_string(),
            sku,
            name: input.name.trim().to_string(),
            barcode: non_blank_or_na(input.barcode),
            category: input.category,
            supplier: non_blank_or_na(input.supplier),
            cost_price: input.cost_price,
            sell_price: input.sell_price,
            stock: input.stock,
            low_stock_threshold: input.low_stock_threshold,
            expiry_date: input
                .expiry_date
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc()),
            image_path: input.image_path,
        };

        self.products.push(product);
        storage::save(&mut self.storage, PRODUCTS_KEY, &self.products)?;

        let product = &self.products[self.products.len() - 1];
        tracing::info!(product_id = %product.id, sku = %product.sku, "Product added");
        Ok(product)
    }

    /// Apply a stock movement to the product with `product_id`.
    ///
    /// A missing product, a missing actor or a zero quantity leaves the store
    /// untouched and returns `Ok(None)`.
    pub fn apply_movement(
        &mut self,
        product_id: &str,
        quantity: u32,
        movement_type: MovementType,
        reason: &str,
        actor: Option<&User>,
    ) -> InventoryResult<Option<(Product, StockMovement)>> {
        self.apply_movement_at(product_id, quantity, movement_type, reason, actor, now_millis())
    }

    pub fn apply_movement_at(
        &mut self,
        product_id: &str,
        quantity: u32,
        movement_type: MovementType,
        reason: &str,
        actor: Option<&User>,
        at: DateTime<Utc>,
    ) -> InventoryResult<Option<(Product, StockMovement)>> {
        let Some(actor) = actor else {
            tracing::debug!(product_id, "No signed-in user, ignoring movement");
            return Ok(None);
        };
        let Some(slot) = self.products.iter().position(|p| p.id == product_id) else {
            tracing::debug!(product_id, "Unknown product, ignoring movement");
            return Ok(None);
        };
        let Some((updated, movement)) =
            ledger::apply_movement(&self.products[slot], quantity, movement_type, reason, actor, at)
        else {
            return Ok(None);
        };

        self.products[slot] = updated.clone();
        self.movements.insert(0, movement.clone());
        self.persist()?;

        tracing::info!(
            product_id,
            movement_type = %movement_type,
            quantity,
            balance_after = movement.balance_after,
            user_id = %actor.id,
            "Stock movement recorded"
        );
        Ok(Some((updated, movement)))
    }

    /// Replace collections from a backup file's text.
    ///
    /// Collections missing from the file are kept. On a parse failure the
    /// store is left exactly as it was.
    pub fn restore_backup(&mut self, raw: &str) -> InventoryResult<RestoreSummary> {
        let payload = parse_backup(raw).map_err(|e| {
            tracing::warn!(error = %e, "Backup restore rejected");
            e
        })?;

        let summary = RestoreSummary {
            products: payload.products.as_ref().map(Vec::len),
            movements: payload.movements.as_ref().map(Vec::len),
        };

        // Both blobs are encoded before the first write
        let products_raw = payload.products.as_ref().map(serde_json::to_string).transpose()?;
        let movements_raw = payload.movements.as_ref().map(serde_json::to_string).transpose()?;

        if let Some(raw) = &products_raw {
            self.storage.set(PRODUCTS_KEY, raw)?;
        }
        if let Some(raw) = &movements_raw {
            self.storage.set(MOVEMENTS_KEY, raw)?;
        }
        if let Some(products) = payload.products {
            self.products = products;
        }
        if let Some(movements) = payload.movements {
            self.movements = movements;
        }

        tracing::info!(
            products = ?summary.products,
            movements = ?summary.movements,
            "Backup restored"
        );
        Ok(summary)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn backup_document(&self) -> BackupDocument {
        BackupDocument {
            products: self.products.clone(),
            movements: self.movements.clone(),
            users: self.users.clone(),
        }
    }

    /// File name and JSON text of a full backup
    pub fn export_backup(&self, at: DateTime<Utc>) -> InventoryResult<(String, String)> {
        let json = serde_json::to_string(&self.backup_document())?;
        Ok((backup_filename(&self.brand, at), json))
    }

    /// File name and CSV text of the catalog
    pub fn export_csv(&self, at: DateTime<Utc>) -> InventoryResult<(String, String)> {
        Ok((csv_filename(at), export_products_csv(&self.products)?))
    }

    fn has_sku(&self, sku: &str) -> bool {
        self.products.iter().any(|p| p.sku == sku)
    }

    /// Generated SKU, stepping the clock tail forward past any taken code
    fn unused_sku(&self, at: DateTime<Utc>) -> String {
        let mut tick = at;
        loop {
            let sku = self.brand.generate_sku(tick);
            if !self.has_sku(&sku) {
                return sku;
            }
            tracing::debug!(sku = %sku, "Generated SKU taken, trying the next one");
            tick += Duration::milliseconds(1);
        }
    }

    fn persist(&mut self) -> InventoryResult<()> {
        storage::save(&mut self.storage, PRODUCTS_KEY, &self.products)?;
        storage::save(&mut self.storage, MOVEMENTS_KEY, &self.movements)
    }
}

fn non_blank_or_na(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
