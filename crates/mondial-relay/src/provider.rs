//! Host-facing fulfillment provider
//!
//! Wraps assembly and transmission behind the operations a commerce platform expects
//! from a shipping provider. Pricing, documents and cancellation are not offered by
//! this carrier integration and fail with [`MondialRelayError::Unsupported`].

use serde::Serialize;

use crate::assemble::ShipmentAssembler;
use crate::client::MondialRelayClient;
use crate::config::{CarrierOptions, Environment};
use crate::platform::{
    Fulfillment, LineItem, LocationLookup, Metadata, Order, OrderLookup, ReturnRecord,
    ShippingMethod,
};
use crate::transport::Transport;
use crate::types::ShipmentResult;
use crate::{MondialRelayError, Result};

pub const PROVIDER_ID: &str = "mondialrelay";
pub const PRINT_IN_STORE_PROVIDER_ID: &str = "mondialrelay-print-in-store";

pub const FULFILLMENT_OPTION_ID: &str = "mondialrelay-fulfillment";
pub const RETURN_OPTION_ID: &str = "mondialrelay-fulfillment-return";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulfillmentOption {
    pub id: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_return: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Invoice,
    Label,
}

pub struct FulfillmentProvider {
    assembler: ShipmentAssembler,
    client: MondialRelayClient,
    orders: Box<dyn OrderLookup>,
    locations: Option<Box<dyn LocationLookup>>,
    print_in_store: bool,
}

impl FulfillmentProvider {
    pub fn new(
        options: &CarrierOptions,
        environment: Environment,
        orders: Box<dyn OrderLookup>,
    ) -> Result<Self> {
        Ok(Self::from_client(
            options,
            MondialRelayClient::new(options, environment)?,
            orders,
        ))
    }

    pub fn with_transport(
        options: &CarrierOptions,
        environment: Environment,
        orders: Box<dyn OrderLookup>,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self::from_client(
            options,
            MondialRelayClient::with_transport(options, environment, transport)?,
            orders,
        ))
    }

    fn from_client(
        options: &CarrierOptions,
        client: MondialRelayClient,
        orders: Box<dyn OrderLookup>,
    ) -> Self {
        let assembler = ShipmentAssembler::new(
            client.context(),
            client.credentials().clone(),
            options.business_address.clone(),
            options.features,
        );
        Self {
            assembler,
            client,
            orders,
            locations: None,
            print_in_store: false,
        }
    }

    /// Variant rendering every label as an in-store QR code
    pub fn print_in_store(mut self) -> Self {
        self.assembler = self.assembler.with_forced_print_in_store();
        self.print_in_store = true;
        self
    }

    /// Stock-location lookup used for multi-warehouse sending
    pub fn with_locations(mut self, locations: Box<dyn LocationLookup>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn identifier(&self) -> &'static str {
        if self.print_in_store {
            PRINT_IN_STORE_PROVIDER_ID
        } else {
            PROVIDER_ID
        }
    }

    pub fn assembler(&self) -> &ShipmentAssembler {
        &self.assembler
    }

    pub fn client(&self) -> &MondialRelayClient {
        &self.client
    }

    pub fn fulfillment_options(&self) -> Vec<FulfillmentOption> {
        vec![
            FulfillmentOption {
                id: FULFILLMENT_OPTION_ID,
                is_return: false,
            },
            FulfillmentOption {
                id: RETURN_OPTION_ID,
                is_return: true,
            },
        ]
    }

    pub fn validate_fulfillment_data(&self, _option_data: &Metadata, data: Metadata) -> Metadata {
        data
    }

    pub fn validate_option(&self, _data: &Metadata) -> bool {
        true
    }

    pub fn can_calculate(&self, _data: &Metadata) -> bool {
        false
    }

    pub fn calculate_price(&self, _option_data: &Metadata, _data: &Metadata) -> Result<u64> {
        Err(MondialRelayError::Unsupported("price calculation"))
    }

    pub fn create_fulfillment(
        &self,
        method: &ShippingMethod,
        items: &[LineItem],
        order: &Order,
        fulfillment: &Fulfillment,
    ) -> Result<ShipmentResult> {
        let request =
            self.assembler
                .forward(method, items, order, fulfillment, self.locations.as_deref())?;
        self.client.create_shipment(&request)
    }

    pub fn create_return(&self, record: &ReturnRecord) -> Result<ShipmentResult> {
        let request = self.assembler.returning(record, self.orders.as_ref())?;
        self.client.create_shipment(&request)
    }

    pub fn cancel_fulfillment(&self, _fulfillment: &Fulfillment) -> Result<()> {
        Err(MondialRelayError::Unsupported("fulfillment cancellation"))
    }

    pub fn fulfillment_documents(&self, _data: &Metadata) -> Result<Vec<String>> {
        Err(MondialRelayError::Unsupported("fulfillment documents"))
    }

    pub fn return_documents(&self, _data: &Metadata) -> Result<Vec<String>> {
        Err(MondialRelayError::Unsupported("return documents"))
    }

    pub fn shipment_documents(&self, _data: &Metadata) -> Result<Vec<String>> {
        Err(MondialRelayError::Unsupported("shipment documents"))
    }

    pub fn retrieve_documents(&self, _data: &Metadata, _kind: DocumentKind) -> Result<Vec<String>> {
        Err(MondialRelayError::Unsupported("document retrieval"))
    }
}
