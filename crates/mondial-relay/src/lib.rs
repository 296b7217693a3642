//! Mondial Relay shipment-creation client
//!
//! Turns order and fulfillment facts into a `ShipmentCreationRequest`, sends it to the
//! carrier's XML endpoint and turns the answer into a shipment number plus label.
//!
//! The pipeline runs one way:
//! platform facts -> [`ShipmentAssembler`] -> [`xml::write_request`] -> [`Transport`]
//! -> [`xml::read_response`] -> [`status::classify`] -> [`ShipmentResult`].

pub mod address;
pub mod assemble;
pub mod client;
pub mod config;
pub mod platform;
pub mod policy;
pub mod provider;
pub mod status;
pub mod transport;
pub mod types;
pub mod weight;
pub mod xml;

pub use assemble::ShipmentAssembler;
pub use client::MondialRelayClient;
pub use config::{BusinessAddress, CarrierOptions, Credentials, Environment, Features};
pub use platform::{LocationLookup, LookupError, OrderLookup};
pub use policy::{DeliveryPolicy, DeliverySignals, RequestedOutput};
pub use provider::{DocumentKind, FulfillmentOption, FulfillmentProvider};
pub use status::CarrierOutcome;
pub use transport::{HttpTransport, Transport, TransportOutcome};
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MondialRelayError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Carrier endpoint returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("XML write error: {0}")]
    XmlWrite(String),

    #[error("Missing required element: {0}")]
    MissingElement(&'static str),

    #[error("Missing required attribute '{attr}' on element '{element}'")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },

    #[error("Invalid response structure: {0}")]
    InvalidStructure(String),

    #[error("Error from Mondial Relay API ({code}): {message}")]
    CarrierRejected { code: String, message: String },

    #[error("Order with id {order_id} not found")]
    OrderNotFound { order_id: String },

    #[error("Stock location with id {location_id} not found")]
    LocationNotFound { location_id: String },

    #[error("{0} is not implemented by the Mondial Relay provider")]
    Unsupported(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Coarse failure classes callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity failure or non-200 answer
    Transport,
    /// Response body could not be decoded
    ProtocolDecode,
    /// HTTP succeeded but the carrier reported an Error-level status
    CarrierRejected,
    OrderNotFound,
    LocationNotFound,
    Unsupported,
    Config,
}

impl MondialRelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(_) | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::XmlParse(_)
            | Self::MissingElement(_)
            | Self::MissingAttribute { .. }
            | Self::InvalidStructure(_) => ErrorKind::ProtocolDecode,
            Self::CarrierRejected { .. } => ErrorKind::CarrierRejected,
            Self::OrderNotFound { .. } => ErrorKind::OrderNotFound,
            Self::LocationNotFound { .. } => ErrorKind::LocationNotFound,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::XmlWrite(_) | Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, MondialRelayError>;
