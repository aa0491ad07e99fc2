//! WebAssembly front end for the Stockroom inventory
//!
//! Exposes the shared inventory store to JavaScript as an `InventoryApp`
//! class persisted in `localStorage`. Every query returns JSON text in the
//! same camelCase wire format used by backups.

use std::str::FromStr;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    authenticate, now_millis, parse_quantity, Brand, FilterMode, InventoryError, InventoryResult,
    InventoryStore, KeyValueStore, MemoryStore, MovementType, NewProduct, Product, StockMovement,
    User, DEFAULT_BEST_SELLERS, DEFAULT_IN_REASON, DEFAULT_OUT_REASON,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("stockroom: module loaded"));
}

// ============================================================================
// Persistence
// ============================================================================

/// Browser persistence: `localStorage` when available, memory otherwise
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Uses `window.localStorage`, falling back to memory when storage is
    /// disabled (private browsing, sandboxed frames)
    pub fn detect() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                web_sys::console::warn_1(&JsValue::from_str(
                    "stockroom: localStorage unavailable, data will not survive a reload",
                ));
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| InventoryError::Storage(describe(&e))),
            BrowserStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> InventoryResult<()> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| InventoryError::Storage(describe(&e))),
            BrowserStore::Memory(memory) => memory.set(key, value),
        }
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Convert a library error into a JS `Error` whose `name` is the error code
fn to_js(err: InventoryError) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&format!("stockroom: {}", err)));
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.code());
    js_err.into()
}

// ============================================================================
// Application
// ============================================================================

/// Result of a stock-in or stock-out call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StockResult {
    product: Product,
    movement: StockMovement,
}

#[wasm_bindgen]
pub struct InventoryApp {
    store: InventoryStore<BrowserStore>,
    session: Option<User>,
}

#[wasm_bindgen]
impl InventoryApp {
    /// Open the inventory saved in this browser
    #[wasm_bindgen(constructor)]
    pub fn new(brand: Option<String>) -> Result<InventoryApp, JsValue> {
        Self::open(BrowserStore::detect(), brand.as_deref().unwrap_or_default()).map_err(to_js)
    }

    /// Sign in; returns the user as JSON
    pub fn login(&mut self, email: &str, password: &str) -> Result<String, JsValue> {
        self.sign_in(email, password)
            .and_then(|user| to_json(&user))
            .map_err(to_js)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    #[wasm_bindgen(js_name = currentUserJson)]
    pub fn current_user_json(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|user| serde_json::to_string(user).ok())
    }

    #[wasm_bindgen(js_name = productsJson)]
    pub fn products_json(&self) -> Result<String, JsValue> {
        to_json(self.store.products()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = movementsJson)]
    pub fn movements_json(&self) -> Result<String, JsValue> {
        to_json(self.store.movements()).map_err(to_js)
    }

    /// `mode` is one of `all`, `low`, `out`, `expired`
    #[wasm_bindgen(js_name = filterJson)]
    pub fn filter_json(&self, search: &str, mode: &str) -> Result<String, JsValue> {
        self.filter(search, mode).map_err(to_js)
    }

    #[wasm_bindgen(js_name = dashboardJson)]
    pub fn dashboard_json(&self) -> Result<String, JsValue> {
        to_json(&self.store.dashboard_stats()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = bestSellersJson)]
    pub fn best_sellers_json(&self, top_n: Option<u32>) -> Result<String, JsValue> {
        let top_n = top_n.map_or(DEFAULT_BEST_SELLERS, |n| n as usize);
        to_json(&self.store.best_sellers(top_n)).map_err(to_js)
    }

    /// Look up a scanned barcode; throws `BARCODE_NOT_FOUND` on a miss
    pub fn scan(&self, code: &str) -> Result<String, JsValue> {
        self.store
            .find_by_barcode(code)
            .and_then(to_json)
            .map_err(to_js)
    }

    /// Add a product from the add-product form, given as JSON
    #[wasm_bindgen(js_name = addProductJson)]
    pub fn add_product_json(&mut self, json: &str) -> Result<String, JsValue> {
        self.add_product(json).map_err(to_js)
    }

    /// Returns `undefined` when nothing was recorded
    #[wasm_bindgen(js_name = stockIn)]
    pub fn stock_in(
        &mut self,
        product_id: &str,
        quantity: &str,
        reason: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        self.record(product_id, quantity, reason, MovementType::In)
            .map_err(to_js)
    }

    /// Returns `undefined` when nothing was recorded
    #[wasm_bindgen(js_name = stockOut)]
    pub fn stock_out(
        &mut self,
        product_id: &str,
        quantity: &str,
        reason: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        self.record(product_id, quantity, reason, MovementType::Out)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = backupJson)]
    pub fn backup_json(&self) -> Result<String, JsValue> {
        self.store
            .export_backup(now_millis())
            .map(|(_, json)| json)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = backupFilename)]
    pub fn backup_filename(&self) -> String {
        shared::backup_filename(self.store.brand(), now_millis())
    }

    /// Replace products and movements; returns a summary as JSON
    pub fn restore(&mut self, json: &str) -> Result<String, JsValue> {
        self.store
            .restore_backup(json)
            .and_then(|summary| to_json(&summary))
            .map_err(to_js)
    }

    pub fn csv(&self) -> Result<String, JsValue> {
        self.store
            .export_csv(now_millis())
            .map(|(_, csv)| csv)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = csvFilename)]
    pub fn csv_filename(&self) -> String {
        shared::csv_filename(now_millis())
    }
}

impl InventoryApp {
    pub fn open(storage: BrowserStore, brand: &str) -> InventoryResult<Self> {
        Ok(Self {
            store: InventoryStore::open(storage, Brand::new(brand))?,
            session: None,
        })
    }

    /// In-memory app, for tests and storage-less hosts
    pub fn in_memory(brand: &str) -> InventoryResult<Self> {
        Self::open(BrowserStore::Memory(MemoryStore::new()), brand)
    }

    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    fn sign_in(&mut self, email: &str, password: &str) -> InventoryResult<User> {
        let user = authenticate(self.store.users(), email, password)?.clone();
        self.session = Some(user.clone());
        Ok(user)
    }

    fn filter(&self, search: &str, mode: &str) -> InventoryResult<String> {
        let mode = FilterMode::from_str(mode)?;
        to_json(&self.store.filter(search, mode))
    }

    fn add_product(&mut self, json: &str) -> InventoryResult<String> {
        let input: NewProduct = serde_json::from_str(json)
            .map_err(|e| InventoryError::validation("product", &e.to_string()))?;
        let product = self.store.add_product(input)?;
        to_json(product)
    }

    fn record(
        &mut self,
        product_id: &str,
        quantity: &str,
        reason: Option<String>,
        movement_type: MovementType,
    ) -> InventoryResult<Option<String>> {
        let Some(quantity) = parse_quantity(quantity) else {
            return Ok(None);
        };
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| {
                if movement_type.is_inbound() {
                    DEFAULT_IN_REASON.to_string()
                } else {
                    DEFAULT_OUT_REASON.to_string()
                }
            });

        let outcome = self.store.apply_movement(
            product_id,
            quantity,
            movement_type,
            &reason,
            self.session.as_ref(),
        )?;
        outcome
            .map(|(product, movement)| to_json(&StockResult { product, movement }))
            .transpose()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> InventoryResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn signed_in() -> InventoryApp {
        let mut app = InventoryApp::in_memory("V254").unwrap();
        app.sign_in("admin@v254.com", "password").unwrap();
        app
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut app = InventoryApp::in_memory("").unwrap();
        assert!(app.sign_in("admin@v254.com", "nope").is_err());
        assert!(app.session().is_none());

        let user = app.sign_in("staff@v254.com", "password").unwrap();
        assert_eq!(user.id, "u2");
        app.logout();
        assert!(app.current_user_json().is_none());
    }

    #[test]
    fn test_stock_out_without_session_is_noop() {
        let mut app = InventoryApp::in_memory("V254").unwrap();
        let result = app.record("p1", "3", None, MovementType::Out).unwrap();
        assert!(result.is_none());
        assert_eq!(app.store.product("p1").unwrap().stock, 42);
    }

    #[test]
    fn test_stock_out_uses_default_reason() {
        let mut app = signed_in();
        let json = app
            .record("p1", "3", Some("  ".into()), MovementType::Out)
            .unwrap()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["product"]["stock"], 39);
        assert_eq!(value["movement"]["type"], "OUT");
        assert_eq!(value["movement"]["reason"], "Sale");
        assert_eq!(value["movement"]["userId"], "u1");
    }

    #[test]
    fn test_non_numeric_quantity_is_noop() {
        let mut app = signed_in();
        assert!(app.record("p1", "abc", None, MovementType::In).unwrap().is_none());
        assert_eq!(app.store.movements().len(), 2);
    }

    #[test]
    fn test_filter_modes() {
        let app = InventoryApp::in_memory("V254").unwrap();
        let low: Vec<serde_json::Value> =
            serde_json::from_str(&app.filter("", "low").unwrap()).unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0]["id"], "p2");

        assert!(matches!(
            app.filter("", "soon"),
            Err(InventoryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_add_product_from_json() {
        let mut app = InventoryApp::in_memory("V254").unwrap();
        let json = app
            .add_product(r#"{"name": "USB Cable", "sellPrice": 400, "stock": 12}"#)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["sku"].as_str().unwrap().starts_with("V254-"));
        assert_eq!(value["supplier"], "N/A");
        assert_eq!(app.store.products().len(), 4);

        let sell_price = app.store.products()[3].sell_price;
        assert_eq!(sell_price, Decimal::from(400));
    }

    #[test]
    fn test_add_product_rejects_bad_json() {
        let mut app = InventoryApp::in_memory("V254").unwrap();
        let err = app.add_product(r#"{"sellPrice": 10}"#).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(app.store.products().len(), 3);
    }

    #[test]
    fn test_backup_restores_into_fresh_app() {
        let mut source = signed_in();
        source.record("p2", "1", None, MovementType::In).unwrap();
        let (_, backup) = source.store.export_backup(now_millis()).unwrap();

        let mut target = InventoryApp::in_memory("V254").unwrap();
        target.store.restore_backup(&backup).unwrap();
        assert_eq!(target.store.products(), source.store.products());
        assert_eq!(target.store.movements(), source.store.movements());
    }
}
