//! The session cart
//!
//! Cart items wrap a job's player lines. Per-player quantities live in a
//! separate index keyed by `(item id, design id)` so they survive item
//! removal and reordering; the default quantity is 1 until a player's row is
//! touched.

use std::collections::HashMap;

use protodeck_catalog::Player;
use serde::{Deserialize, Serialize};

/// One line item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable id assigned when the item enters the cart
    pub item_id: String,
    pub job_name: String,
    pub tb_parent_id: Option<String>,
    pub roster_name: Option<String>,
    pub service_type: String,
    pub players: Vec<Player>,
}

/// Cart contents plus the quantity index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    quantities: HashMap<String, u32>,
}

fn quantity_key(item_id: &str, design_id: &str) -> String {
    format!("{item_id}:{design_id}")
}

impl CartState {
    /// Append an item
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove an item by id, dropping its quantity entries
    pub fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|i| i.item_id != item_id);
        let prefix = format!("{item_id}:");
        self.quantities.retain(|key, _| !key.starts_with(&prefix));
    }

    /// Quantity for one player row, defaulting to 1 when never set
    #[must_use]
    pub fn quantity(&self, item_id: &str, design_id: &str) -> u32 {
        self.quantities
            .get(&quantity_key(item_id, design_id))
            .copied()
            .unwrap_or(1)
    }

    /// Set a player row's quantity; zero keeps the row but orders nothing
    pub fn set_quantity(&mut self, item_id: &str, design_id: &str, quantity: u32) {
        self.quantities.insert(quantity_key(item_id, design_id), quantity);
    }

    /// Total units across one item's player rows
    #[must_use]
    pub fn item_quantity(&self, item: &CartItem) -> u32 {
        item.players
            .iter()
            .map(|p| self.quantity(&item.item_id, &p.design_id))
            .sum()
    }

    /// Price of one item, summing quantity-weighted player prices
    #[must_use]
    pub fn item_total(&self, item: &CartItem) -> f64 {
        item.players
            .iter()
            .map(|p| p.item_price * f64::from(self.quantity(&item.item_id, &p.design_id)))
            .sum()
    }

    /// Subtotal across every item
    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.items.iter().map(|i| self.item_total(i)).sum()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
