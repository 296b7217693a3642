//! Shipment request assembly for the forward and return flows
//!
//! The assembler is permissive: missing platform data turns into empty strings and the
//! carrier's status list decides whether the request is acceptable. The only failures
//! raised here are collaborator lookups that come back empty.

use log::debug;

use crate::config::{BusinessAddress, Credentials, Features};
use crate::platform::{
    ADDRESS_RELATION, Fulfillment, LineItem, LocationLookup, Order, OrderLookup, ReturnRecord,
    SHIPPING_ADDRESS_RELATION, ShippingMethod,
};
use crate::policy::{self, DeliveryPolicy, DeliverySignals, RequestedOutput};
use crate::types::{Address, Context, Parcel, Shipment, ShipmentRequest};
use crate::weight::{WeightedItem, total_weight};
use crate::{MondialRelayError, Result};

#[derive(Debug, Clone)]
pub struct ShipmentAssembler {
    context: Context,
    contact: Credentials,
    business: BusinessAddress,
    features: Features,
    force_print_in_store: bool,
}

impl ShipmentAssembler {
    pub fn new(
        context: Context,
        contact: Credentials,
        business: BusinessAddress,
        features: Features,
    ) -> Self {
        Self {
            context,
            contact,
            business,
            features,
            force_print_in_store: false,
        }
    }

    /// Render every label as an in-store QR code, whatever the shipping option says
    pub fn with_forced_print_in_store(mut self) -> Self {
        self.force_print_in_store = true;
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn signals(&self, method: Option<&ShippingMethod>, order: &Order) -> DeliverySignals {
        let option_metadata = method.and_then(|m| m.option_metadata());
        let address_metadata = order.shipping_address.as_ref().map(|a| &a.metadata);
        let mut signals = DeliverySignals::from_metadata(option_metadata, address_metadata)
            .masked(&self.features);
        signals.print_in_store |= self.force_print_in_store;
        signals
    }

    fn business_address(&self) -> Address {
        Address::from_business(&self.business, &self.contact)
    }

    fn request(
        &self,
        policy: DeliveryPolicy,
        order: &Order,
        parcel: Parcel,
        sender: Address,
        recipient: Address,
    ) -> ShipmentRequest {
        let shipment = Shipment {
            order_no: order_no(order),
            // Platform customer ids exceed the carrier's 9 character limit
            customer_no: String::new(),
            delivery_mode: policy.delivery_mode,
            collection_mode: policy.collection_mode,
            parcels: vec![parcel],
            delivery_instruction: String::new(),
            sender,
            recipient,
        };

        ShipmentRequest {
            context: self.context.clone(),
            output_options: policy.output_options,
            shipments: vec![shipment],
        }
    }

    /// Business -> customer shipment for a fulfillment.
    ///
    /// The parcel goes to the relay point stored in the order's shipping address. When
    /// multi-warehouse sending is enabled and the fulfillment names a stock location,
    /// the sender address is that location's.
    pub fn forward(
        &self,
        method: &ShippingMethod,
        items: &[LineItem],
        order: &Order,
        fulfillment: &Fulfillment,
        locations: Option<&dyn LocationLookup>,
    ) -> Result<ShipmentRequest> {
        let parcel = Parcel {
            content: fulfillment.id.clone(),
            weight: total_weight(items.iter().map(WeightedItem::fulfilled)),
        };

        let relay_point = order
            .shipping_address
            .as_ref()
            .and_then(|a| a.address_2.as_deref())
            .unwrap_or_default();
        let policy = policy::select(
            self.signals(Some(method), order),
            relay_point,
            RequestedOutput::from_data(&method.data),
        );

        let sender = self.sender_for(fulfillment, locations)?;
        let recipient =
            Address::from_customer(order.shipping_address.as_ref(), order.email.as_deref());

        debug!(
            "Assembled shipment for order {}: {} gr, mode {}",
            order_no(order),
            parcel.weight.value,
            policy.delivery_mode.mode.code()
        );
        Ok(self.request(policy, order, parcel, sender, recipient))
    }

    fn sender_for(
        &self,
        fulfillment: &Fulfillment,
        locations: Option<&dyn LocationLookup>,
    ) -> Result<Address> {
        let (Some(location_id), Some(locations)) = (
            fulfillment.location_id.as_deref(),
            locations.filter(|_| self.features.stock_location),
        ) else {
            return Ok(self.business_address());
        };

        let not_found = || MondialRelayError::LocationNotFound {
            location_id: location_id.to_string(),
        };
        let location = locations
            .retrieve(location_id, &[ADDRESS_RELATION])
            .map_err(|_| not_found())?;
        let address = location.address.ok_or_else(not_found)?;

        Ok(Address::from_stock_location(
            &address,
            &self.business,
            &self.contact,
        ))
    }

    /// Customer -> business shipment for a return.
    ///
    /// Returns travel to the business' registered return relay point. When the return
    /// carries only an order id, the order is loaded through `orders` first.
    pub fn returning(
        &self,
        record: &ReturnRecord,
        orders: &dyn OrderLookup,
    ) -> Result<ShipmentRequest> {
        let order = resolve_order(record, orders)?;

        let parcel = Parcel {
            content: record.id.clone(),
            weight: total_weight(record.items.iter().map(WeightedItem::returned)),
        };

        let requested = record
            .shipping_method
            .as_ref()
            .map(|m| RequestedOutput::from_data(&m.data))
            .unwrap_or_default();
        let policy = policy::select(
            self.signals(record.shipping_method.as_ref(), &order),
            self.business.return_location.as_deref().unwrap_or_default(),
            requested,
        );

        let sender =
            Address::from_customer(order.shipping_address.as_ref(), order.email.as_deref());
        let recipient = self.business_address();

        Ok(self.request(policy, &order, parcel, sender, recipient))
    }
}

/// Carrier order number: the platform's display id, empty when the order has none
fn order_no(order: &Order) -> String {
    order
        .display_id
        .map(|id| id.to_string())
        .unwrap_or_default()
}

fn resolve_order(record: &ReturnRecord, orders: &dyn OrderLookup) -> Result<Order> {
    if let Some(order) = &record.order {
        return Ok(order.clone());
    }

    let order_id = record.order_id.clone().unwrap_or_default();
    if order_id.is_empty() {
        return Err(MondialRelayError::OrderNotFound { order_id });
    }

    orders
        .retrieve(&order_id, &[SHIPPING_ADDRESS_RELATION])
        .map_err(|e| {
            debug!("Order lookup for {} failed: {}", order_id, e);
            MondialRelayError::OrderNotFound {
                order_id: order_id.clone(),
            }
        })
}
