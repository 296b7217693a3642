//! JSON files describing the platform side of a shipment

use anyhow::{Context, Result};
use mondial_relay::platform::{
    Fulfillment, LineItem, LookupError, Order, ReturnRecord, ShippingMethod,
};
use mondial_relay::OrderLookup;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Everything a forward shipment is assembled from
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForwardFacts {
    pub method: ShippingMethod,
    pub items: Vec<LineItem>,
    pub order: Order,
    pub fulfillment: Fulfillment,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn read_forward(path: &Path) -> Result<ForwardFacts> {
    read_json(path)
}

pub fn read_return(path: &Path) -> Result<ReturnRecord> {
    read_json(path)
}

/// Order lookup backed by a JSON array of orders
#[derive(Debug, Default)]
pub struct JsonOrders {
    orders: Vec<Order>,
}

impl JsonOrders {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            orders: read_json(path)?,
        })
    }
}

impl OrderLookup for JsonOrders {
    fn retrieve(&self, order_id: &str, _relations: &[&str]) -> Result<Order, LookupError> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}
