//! # Order Types
//!
//! Orders and their line items. An order only ever moves from
//! [`OrderStatus::Open`] to [`OrderStatus::Paid`], and only a payment
//! processor makes that move.

use crate::error::PaymentResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name
    pub name: String,

    /// Quantity
    pub quantity: u32,

    /// Unit price
    #[serde(alias = "price")]
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculate the total price for this line item
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment
    Open,
    /// Payment completed
    Paid,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => write!(f, "open"),
            OrderStatus::Paid => write!(f, "paid"),
        }
    }
}

/// Item list document, as read from TOML:
///
/// ```toml
/// [[items]]
/// name = "Keyboard"
/// quantity = 1
/// price = 50.0
/// ```
#[derive(Debug, Default, Deserialize)]
struct ItemList {
    #[serde(default)]
    items: Vec<LineItem>,
}

/// An order being assembled and paid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items, in insertion order
    line_items: Vec<LineItem>,

    /// Payment status; always `open` on a freshly read order
    #[serde(default, skip_deserializing)]
    status: OrderStatus,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create an empty, open order with a generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// Build an open order from a TOML item list
    pub fn from_toml(toml_str: &str) -> PaymentResult<Self> {
        let list: ItemList = toml::from_str(toml_str)?;
        let mut order = Self::new();
        for item in list.items {
            order.push_item(item);
        }
        Ok(order)
    }

    /// Append an item. Quantity and price are taken as given.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32, price: f64) {
        self.push_item(LineItem::new(name, quantity, price));
    }

    /// Append an already built line item
    pub fn push_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Sum of quantity × unit price over all items
    pub fn total_price(&self) -> f64 {
        self.line_items.iter().map(LineItem::total).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.line_items.iter().map(|i| i.name.as_str())
    }

    pub fn quantities(&self) -> impl Iterator<Item = u32> + '_ {
        self.line_items.iter().map(|i| i.quantity)
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.line_items.iter().map(|i| i.unit_price)
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Get item count (sum of quantities)
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Transition the order to paid, returning the status it had before.
    ///
    /// Marking an already paid order is a no-op on the status.
    pub(crate) fn mark_paid(&mut self) -> OrderStatus {
        std::mem::replace(&mut self.status, OrderStatus::Paid)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new();
        order.add_item("Keyboard", 1, 50.0);
        order.add_item("SSD", 1, 150.0);
        order.add_item("USB Cable", 2, 10.0);
        order
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItem::new("USB Cable", 3, 10.0);
        assert_eq!(item.total(), 30.0);
    }

    #[test]
    fn test_order_total() {
        let order = sample_order();

        assert_eq!(order.total_price(), 220.0);
        assert_eq!(order.item_count(), 4);
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();

        assert!(order.is_empty());
        assert_eq!(order.total_price(), 0.0);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_aligned_views() {
        let order = sample_order();

        let names: Vec<&str> = order.names().collect();
        let quantities: Vec<u32> = order.quantities().collect();
        let prices: Vec<f64> = order.prices().collect();

        assert_eq!(names, vec!["Keyboard", "SSD", "USB Cable"]);
        assert_eq!(quantities, vec![1, 1, 2]);
        assert_eq!(prices, vec![50.0, 150.0, 10.0]);
    }

    #[test]
    fn test_orders_do_not_share_items() {
        let first = sample_order();
        let second = Order::new();

        assert_eq!(first.items().len(), 3);
        assert!(second.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_negative_values_accepted() {
        let mut order = Order::new();
        order.add_item("Refund", 1, -20.0);
        order.add_item("Widget", 0, 5.0);

        assert_eq!(order.total_price(), -20.0);
    }

    #[test]
    fn test_mark_paid() {
        let mut order = sample_order();

        assert_eq!(order.mark_paid(), OrderStatus::Open);
        assert!(order.is_paid());
        assert_eq!(order.mark_paid(), OrderStatus::Paid);
        assert!(order.is_paid());
    }

    #[test]
    fn test_from_toml() {
        let order = Order::from_toml(
            r#"
            [[items]]
            name = "Monitor"
            quantity = 2
            price = 120.5

            [[items]]
            name = "HDMI Cable"
            quantity = 1
            unit_price = 9.0
            "#,
        )
        .unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total_price(), 250.0);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = Order::from_toml("[[items]]\nname = 3").unwrap_err();
        assert!(matches!(err, crate::PaymentError::Serialization(_)));
    }

    #[test]
    fn test_item_count_large_quantities() {
        let mut order = Order::new();
        order.add_item("Bulk", u32::MAX, 0.0);
        order.add_item("Extra", 1, 0.0);

        assert_eq!(order.item_count(), u64::from(u32::MAX) + 1);
        assert_eq!(order.total_price(), 0.0);
    }

    #[test]
    fn test_deserialized_order_is_open() {
        let mut paid = sample_order();
        paid.mark_paid();
        let json = serde_json::to_string(&paid).unwrap();
        assert!(json.contains(r#""status":"paid""#));

        let order: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(order.items().len(), 3);
        assert_eq!(order.id, paid.id);
    }

    #[test]
    fn test_status_serialization() {
        let mut order = sample_order();
        order.mark_paid();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "paid");
        assert_eq!(json["line_items"][2]["name"], "USB Cable");
    }
}
