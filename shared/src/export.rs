//! CSV export of the product catalog

use chrono::{DateTime, Utc};

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;

/// Column order of the inventory export
pub const CSV_HEADERS: [&str; 9] = [
    "ID", "SKU", "Name", "Category", "Stock", "Cost", "Price", "Supplier", "Barcode",
];

/// Render one row per product, in catalog order.
///
/// Fields containing commas, quotes or newlines are quoted.
pub fn export_products_csv(products: &[Product]) -> InventoryResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADERS)?;
    for p in products {
        let stock = p.stock.to_string();
        let cost = p.cost_price.normalize().to_string();
        let price = p.sell_price.normalize().to_string();
        wtr.write_record([
            p.id.as_str(),
            p.sku.as_str(),
            p.name.as_str(),
            p.category.as_str(),
            stock.as_str(),
            cost.as_str(),
            price.as_str(),
            p.supplier.as_str(),
            p.barcode.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| InventoryError::Csv(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| InventoryError::Csv(format!("UTF-8 conversion error: {}", e)))
}

/// `inventory_export_<YYYY-MM-DD>.csv`
pub fn csv_filename(at: DateTime<Utc>) -> String {
    format!("inventory_export_{}.csv", at.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product {
            id: "p1".into(),
            sku: "V254-001".into(),
            name: name.into(),
            barcode: "123456789".into(),
            category: "Audio".into(),
            supplier: "Global Imports Ltd".into(),
            cost_price: Decimal::new(150050, 2),
            sell_price: Decimal::from(3000),
            stock: 42,
            low_stock_threshold: 10,
            expiry_date: None,
            image_path: None,
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = export_products_csv(&[product("Wireless Earbuds")]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,SKU,Name,Category,Stock,Cost,Price,Supplier,Barcode");
        assert_eq!(
            lines[1],
            "p1,V254-001,Wireless Earbuds,Audio,42,1500.5,3000,Global Imports Ltd,123456789"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_embedded_commas_are_quoted() {
        let csv = export_products_csv(&[product("Earbuds, Black")]).unwrap();
        assert!(csv.contains("\"Earbuds, Black\""));
    }

    #[test]
    fn test_csv_filename() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(csv_filename(at), "inventory_export_2024-03-09.csv");
    }
}
