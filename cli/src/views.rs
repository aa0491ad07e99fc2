//! Printable command results

use std::fmt::Write;

use serde::Serialize;
use shared::{BestSeller, DashboardStats, Product, RestoreSummary, StockMovement, User};

/// A result that can be printed as text or serialized as JSON
pub trait Render: Serialize {
    fn render_text(&self) -> String;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub best_sellers: Vec<BestSeller>,
}

impl Render for DashboardView {
    fn render_text(&self) -> String {
        let s = &self.stats;
        let mut out = String::new();
        let _ = writeln!(out, "Units in stock   {}", s.total_products);
        let _ = writeln!(out, "Low stock        {}", s.low_stock_count);
        let _ = writeln!(out, "Expired          {}", s.expired_count);
        let _ = writeln!(out, "Stock value      {}", s.total_value.normalize());
        let _ = write!(out, "Movements today  {}", s.movements_today);
        if !self.best_sellers.is_empty() {
            let _ = write!(out, "\n\nBest sellers");
            for (rank, seller) in self.best_sellers.iter().enumerate() {
                let _ = write!(out, "\n  {}. {} ({} sold)", rank + 1, seller.name, seller.qty);
            }
        }
        out
    }
}

/// Catalog listing
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ProductList<'a>(pub Vec<&'a Product>);

impl Render for ProductList<'_> {
    fn render_text(&self) -> String {
        if self.0.is_empty() {
            return "No products found".to_string();
        }
        self.0
            .iter()
            .map(|p| {
                let mut flags = Vec::new();
                if p.is_out_of_stock() {
                    flags.push("OUT");
                } else if p.is_low_stock() {
                    flags.push("LOW");
                }
                if p.is_expired(chrono::Utc::now()) {
                    flags.push("EXPIRED");
                }
                format!(
                    "{:<10} {:<14} {:<28} {:>6}  {}",
                    p.id,
                    p.sku,
                    p.name,
                    p.stock,
                    flags.join(" ")
                )
                .trim_end()
                .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One product with its movement history
#[derive(Debug, Serialize)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub history: Vec<&'a StockMovement>,
}

impl Render for ProductDetail<'_> {
    fn render_text(&self) -> String {
        let p = self.product;
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", p.name, p.sku);
        let _ = writeln!(out, "  id         {}", p.id);
        let _ = writeln!(out, "  barcode    {}", p.barcode);
        let _ = writeln!(out, "  category   {}", p.category);
        let _ = writeln!(out, "  supplier   {}", p.supplier);
        let _ = writeln!(out, "  cost/price {} / {}", p.cost_price.normalize(), p.sell_price.normalize());
        let _ = writeln!(out, "  stock      {} (alert at {})", p.stock, p.low_stock_threshold);
        let expiry = p
            .expiry_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let _ = write!(out, "  expiry     {}", expiry);
        if !self.history.is_empty() {
            let _ = write!(out, "\n\n{}", MovementList(self.history.clone()).render_text());
        }
        out
    }
}

/// Movement history, most recent first
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct MovementList<'a>(pub Vec<&'a StockMovement>);

impl Render for MovementList<'_> {
    fn render_text(&self) -> String {
        if self.0.is_empty() {
            return "No movements recorded".to_string();
        }
        self.0
            .iter()
            .map(|m| {
                format!(
                    "{}  {:<6} {:>5} -> {:<5} {:<24} {} [{}]",
                    m.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                    m.movement_type,
                    m.quantity,
                    m.balance_after,
                    m.product_name,
                    m.reason,
                    m.user_id
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of a stock-in or stock-out command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementOutcome {
    pub recorded: bool,
    pub movement: Option<StockMovement>,
}

impl Render for MovementOutcome {
    fn render_text(&self) -> String {
        match &self.movement {
            Some(m) => format!(
                "{} {} x{} recorded, balance now {}",
                m.product_name, m.movement_type, m.quantity, m.balance_after
            ),
            None => "Nothing recorded".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserList<'a>(pub &'a [User]);

impl Render for UserList<'_> {
    fn render_text(&self) -> String {
        self.0
            .iter()
            .map(|u| format!("{:<4} {:<16} {:<20} {}", u.id, u.name, u.email, u.role.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for User {
    fn render_text(&self) -> String {
        format!("{} <{}> ({})", self.name, self.email, self.role.as_str())
    }
}

/// A file written by an export command
#[derive(Debug, Serialize)]
pub struct FileWritten {
    pub path: String,
    pub bytes: usize,
}

impl Render for FileWritten {
    fn render_text(&self) -> String {
        format!("Wrote {} ({} bytes)", self.path, self.bytes)
    }
}

impl Render for RestoreSummary {
    fn render_text(&self) -> String {
        let describe = |count: Option<usize>| match count {
            Some(n) => n.to_string(),
            None => "unchanged".to_string(),
        };
        format!(
            "Data restored successfully: products {}, movements {}",
            describe(self.products),
            describe(self.movements)
        )
    }
}
