//! Delivery policy selection
//!
//! Three independent signals decide a shipment's routing and label artifact:
//!
//! | print in store | home | locker | delivery mode           | output            |
//! |----------------|------|--------|-------------------------|-------------------|
//! | no             | no   | no     | relay point (location)  | PDF URL, A4       |
//! | no             | no   | yes    | locker (location)       | PDF URL           |
//! | no             | yes  | any    | home, no location       | PDF URL           |
//! | yes            | any  | any    | as above                | QR code, no format|
//!
//! Print-in-store only ever changes the artifact, never the routing.

use serde::de::DeserializeOwned;

use crate::config::Features;
use crate::platform::Metadata;
use crate::types::{CollectionMode, DeliveryMode, OutputFormat, OutputOptions, OutputType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliverySignals {
    pub home_delivery: bool,
    pub locker: bool,
    pub print_in_store: bool,
}

impl DeliverySignals {
    /// Read the signals from shipping-option metadata (`type = "home"`,
    /// `print = "in_store"`) and shipping-address metadata (`isLocker = true`).
    pub fn from_metadata(option: Option<&Metadata>, address: Option<&Metadata>) -> Self {
        let option_value = |key: &str| option.and_then(|m| m.get(key)).and_then(|v| v.as_str());
        Self {
            home_delivery: option_value("type") == Some("home"),
            print_in_store: option_value("print") == Some("in_store"),
            locker: address
                .and_then(|m| m.get("isLocker"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        }
    }

    /// Drop the signals the deployment has switched off
    pub fn masked(self, features: &Features) -> Self {
        Self {
            home_delivery: self.home_delivery,
            locker: self.locker && features.locker,
            print_in_store: self.print_in_store && features.print_in_store,
        }
    }
}

/// Output type/format explicitly requested in the shipping method's data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedOutput {
    pub output_type: Option<OutputType>,
    pub output_format: Option<OutputFormat>,
}

impl RequestedOutput {
    pub fn from_data(data: &Metadata) -> Self {
        Self {
            output_type: lookup(data, &["output_type", "outputType"]),
            output_format: lookup(data, &["output_format", "outputFormat"]),
        }
    }
}

fn lookup<T: DeserializeOwned>(data: &Metadata, keys: &[&str]) -> Option<T> {
    keys.iter()
        .filter_map(|key| data.get(*key))
        .find_map(|value| serde_json::from_value(value.clone()).ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPolicy {
    pub delivery_mode: DeliveryMode,
    pub collection_mode: CollectionMode,
    pub output_options: OutputOptions,
}

/// Pick delivery mode, collection mode and output options.
///
/// `location` is the relay point the parcel goes to when it is not delivered at home:
/// the customer's chosen point for shipments, the business' return point for returns.
pub fn select(
    signals: DeliverySignals,
    location: &str,
    requested: RequestedOutput,
) -> DeliveryPolicy {
    let delivery_mode = if signals.home_delivery {
        DeliveryMode::home()
    } else if signals.locker {
        DeliveryMode::locker(location)
    } else {
        DeliveryMode::relay_point(location)
    };

    DeliveryPolicy {
        delivery_mode,
        collection_mode: CollectionMode::default(),
        output_options: output_options(signals.print_in_store, requested),
    }
}

fn output_options(print_in_store: bool, requested: RequestedOutput) -> OutputOptions {
    if print_in_store {
        return OutputOptions::qr_code();
    }
    match requested.output_type {
        Some(OutputType::QrCode) => OutputOptions::qr_code(),
        Some(OutputType::PdfUrl) => OutputOptions::pdf(requested.output_format.unwrap_or_default()),
        // A format alone does not override the default
        None => OutputOptions::default(),
    }
}
