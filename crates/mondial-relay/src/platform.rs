//! Read-only view of the host platform's order domain
//!
//! These are the facts the assembler consumes. They deserialize from the platform's
//! JSON shapes (snake_case, mostly optional) so hosts and the CLI can feed them directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Free-form metadata bag attached to shipping options and addresses
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Relation requested when loading an order for a return
pub const SHIPPING_ADDRESS_RELATION: &str = "shipping_address";

/// Relation requested when loading a stock location
pub const ADDRESS_RELATION: &str = "address";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_1: Option<String>,
    /// Storefronts put the chosen relay point id here
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub display_id: Option<u64>,
    pub customer_id: Option<String>,
    pub email: Option<String>,
    pub shipping_address: Option<PlatformAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Per-unit weight in grams; platforms may store fractional values
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub id: String,
    pub fulfilled_quantity: Option<u64>,
    pub returned_quantity: Option<u64>,
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fulfillment {
    pub id: String,
    /// Stock location the parcel leaves from, when multi-warehouse sending is used
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingOption {
    pub id: Option<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingMethod {
    pub shipping_option: Option<ShippingOption>,
    /// Provider data stored on the method; may request an output type/format
    pub data: Metadata,
}

impl ShippingMethod {
    pub fn option_metadata(&self) -> Option<&Metadata> {
        self.shipping_option.as_ref().map(|o| &o.metadata)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnItem {
    pub item: Option<LineItem>,
}

/// A return as handed to the provider: either with the order embedded or only its id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnRecord {
    pub id: String,
    pub order: Option<Order>,
    pub order_id: Option<String>,
    pub items: Vec<ReturnItem>,
    pub shipping_method: Option<ShippingMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockLocation {
    pub id: String,
    pub address: Option<PlatformAddress>,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Backend(String),
}

/// Order retrieval collaborator used by the return flow
pub trait OrderLookup: Send + Sync {
    fn retrieve(&self, order_id: &str, relations: &[&str]) -> Result<Order, LookupError>;
}

/// Warehouse retrieval collaborator used for multi-warehouse sending
pub trait LocationLookup: Send + Sync {
    fn retrieve(&self, location_id: &str, relations: &[&str])
    -> Result<StockLocation, LookupError>;
}

/// Order lookup for hosts that always embed orders in returns
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOrders;

impl OrderLookup for NoOrders {
    fn retrieve(&self, _order_id: &str, _relations: &[&str]) -> Result<Order, LookupError> {
        Err(LookupError::NotFound)
    }
}
