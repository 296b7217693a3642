use serde::{Deserialize, Serialize};

use super::Address;

/// Account credentials and protocol version sent in every request's `Context`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub login: String,
    pub password: String,
    pub customer_id: String,
    pub culture: String,
    pub version_api: String,
}

/// Label artifact kind (`OutputOptions/OutputType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputType {
    #[serde(rename = "PdfUrl")]
    PdfUrl,
    #[serde(rename = "QRCode")]
    QrCode,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PdfUrl => "PdfUrl",
            Self::QrCode => "QRCode",
        }
    }
}

/// Page size of a PDF label (`OutputOptions/OutputFormat`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    A4,
    A5,
    #[serde(rename = "10x15")]
    Label10x15,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::Label10x15 => "10x15",
        }
    }
}

/// Desired label artifact. A PDF always carries a page format; a QR code never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    output_format: Option<OutputFormat>,
    output_type: OutputType,
}

impl OutputOptions {
    pub fn pdf(format: OutputFormat) -> Self {
        Self {
            output_format: Some(format),
            output_type: OutputType::PdfUrl,
        }
    }

    pub fn qr_code() -> Self {
        Self {
            output_format: None,
            output_type: OutputType::QrCode,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::pdf(OutputFormat::A4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryModeKind {
    RelayPoint,
    Home,
    Locker,
}

impl DeliveryModeKind {
    /// Carrier mode code written to `DeliveryMode/@Mode`
    pub fn code(&self) -> &'static str {
        match self {
            Self::RelayPoint => "24R",
            Self::Home => "HOM",
            Self::Locker => "APM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryMode {
    pub mode: DeliveryModeKind,
    /// Relay point or locker id; empty for home delivery
    pub location: String,
}

impl DeliveryMode {
    pub fn relay_point(location: impl Into<String>) -> Self {
        Self {
            mode: DeliveryModeKind::RelayPoint,
            location: location.into(),
        }
    }

    pub fn locker(location: impl Into<String>) -> Self {
        Self {
            mode: DeliveryModeKind::Locker,
            location: location.into(),
        }
    }

    pub fn home() -> Self {
        Self {
            mode: DeliveryModeKind::Home,
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionModeKind {
    /// Parcel is dropped off by the sender at a relay point
    Relay,
}

impl CollectionModeKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Relay => "REL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMode {
    pub mode: CollectionModeKind,
    pub location: String,
}

impl Default for CollectionMode {
    fn default() -> Self {
        Self {
            mode: CollectionModeKind::Relay,
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Gram,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "gr",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weight {
    pub value: u64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn grams(value: u64) -> Self {
        Self {
            value,
            unit: WeightUnit::Gram,
        }
    }
}

/// One physical package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    /// Opaque reference (fulfillment or return id)
    pub content: String,
    pub weight: Weight,
}

/// One order's worth of parcels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub order_no: String,
    pub customer_no: String,
    pub delivery_mode: DeliveryMode,
    pub collection_mode: CollectionMode,
    pub parcels: Vec<Parcel>,
    pub delivery_instruction: String,
    pub sender: Address,
    pub recipient: Address,
}

impl Shipment {
    /// Value of `ParcelCount`, always derived from the parcel list
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }
}

/// Root of an outbound `ShipmentCreationRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentRequest {
    pub context: Context,
    pub output_options: OutputOptions,
    pub shipments: Vec<Shipment>,
}
