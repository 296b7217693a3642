use super::XmlElement;
use crate::types::{ApiStatus, ShipmentResult, StatusLevel};
use crate::{MondialRelayError, Result};

/// Decoded `ShipmentCreationResponse`, before status classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentCreationResponse {
    pub statuses: Vec<ApiStatus>,
    pub shipment: Option<ResponseShipment>,
}

/// First `ShipmentsList/Shipment` of a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseShipment {
    pub shipment_number: Option<String>,
    pub label_url: Option<String>,
    pub raw_content: Option<String>,
}

pub fn read_response(xml: &str) -> Result<ShipmentCreationResponse> {
    let root = XmlElement::parse(xml)?;
    if root.name != "ShipmentCreationResponse" {
        return Err(MondialRelayError::InvalidStructure(format!(
            "Expected root element 'ShipmentCreationResponse', found '{}'",
            root.name
        )));
    }

    let statuses = root
        .child("StatusList")
        .map(|list| {
            list.children_named("Status")
                .map(parse_status)
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    let shipment = root
        .find(&["ShipmentsList", "Shipment"])
        .map(|shipment| ResponseShipment {
            shipment_number: shipment.attribute("ShipmentNumber").map(str::to_string),
            label_url: shipment
                .text_at(&["LabelList", "Label", "Output"])
                .map(str::to_string),
            raw_content: shipment
                .text_at(&["LabelList", "Label", "RawContent"])
                .map(str::to_string),
        });

    Ok(ShipmentCreationResponse { statuses, shipment })
}

/// `Level` decides the outcome and is required; `Code` and `Message` default to empty
fn parse_status(node: &XmlElement) -> Result<ApiStatus> {
    let level = node
        .attribute("Level")
        .ok_or(MondialRelayError::MissingAttribute {
            element: "Status",
            attr: "Level",
        })?;

    Ok(ApiStatus {
        code: node.attribute("Code").unwrap_or_default().to_string(),
        level: StatusLevel::parse(level),
        message: node.attribute("Message").unwrap_or_default().to_string(),
    })
}

impl ShipmentCreationResponse {
    /// Build the final result once the status list has been accepted
    pub fn into_result(self, statuses: Vec<ApiStatus>) -> Result<ShipmentResult> {
        let shipment = self
            .shipment
            .ok_or(MondialRelayError::MissingElement("ShipmentsList/Shipment"))?;
        let shipment_number = shipment.shipment_number.ok_or(MondialRelayError::MissingAttribute {
            element: "Shipment",
            attr: "ShipmentNumber",
        })?;

        Ok(ShipmentResult {
            shipment_number,
            label_url: shipment.label_url,
            raw_content: shipment.raw_content,
            statuses,
        })
    }
}
