use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::REQUEST_NAMESPACE;
use crate::types::{
    Address, CollectionMode, Context, DeliveryMode, OutputOptions, Parcel, Shipment,
    ShipmentRequest,
};
use crate::{MondialRelayError, Result};

/// Serialize a request as a `ShipmentCreationRequest` document.
///
/// Element order is fixed by the carrier schema. Values are written as-is (escaped);
/// all normalisation happened when the request was assembled.
pub fn write_request(request: &ShipmentRequest) -> Result<String> {
    let mut w = RequestWriter::new();

    w.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    let mut root = BytesStart::new("ShipmentCreationRequest");
    root.push_attribute(("xmlns", REQUEST_NAMESPACE));
    w.event(Event::Start(root))?;

    w.context(&request.context)?;
    w.output_options(&request.output_options)?;

    w.start("ShipmentsList")?;
    for shipment in &request.shipments {
        w.shipment(shipment)?;
    }
    w.end("ShipmentsList")?;

    w.end("ShipmentCreationRequest")?;
    w.finish()
}

struct RequestWriter {
    writer: Writer<Vec<u8>>,
}

impl RequestWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| MondialRelayError::XmlWrite(e.to_string()))
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| MondialRelayError::XmlWrite(e.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// `<name>value</name>`; an empty value still gets both tags
    fn text(&mut self, name: &str, value: &str) -> Result<()> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(value)))?;
        self.end(name)
    }

    /// Self-closing `<name Mode=".." Location=".."/>`
    fn mode(&mut self, name: &str, mode: &str, location: &str) -> Result<()> {
        let mut elem = BytesStart::new(name);
        elem.push_attribute(("Mode", mode));
        elem.push_attribute(("Location", location));
        self.event(Event::Empty(elem))
    }

    fn context(&mut self, context: &Context) -> Result<()> {
        self.start("Context")?;
        self.text("Login", &context.login)?;
        self.text("Password", &context.password)?;
        self.text("CustomerId", &context.customer_id)?;
        self.text("Culture", &context.culture)?;
        self.text("VersionAPI", &context.version_api)?;
        self.end("Context")
    }

    fn output_options(&mut self, options: &OutputOptions) -> Result<()> {
        self.start("OutputOptions")?;
        self.text(
            "OutputFormat",
            options.output_format().map(|f| f.as_str()).unwrap_or_default(),
        )?;
        self.text("OutputType", options.output_type().as_str())?;
        self.end("OutputOptions")
    }

    fn shipment(&mut self, shipment: &Shipment) -> Result<()> {
        self.start("Shipment")?;
        self.text("OrderNo", &shipment.order_no)?;
        self.text("CustomerNo", &shipment.customer_no)?;
        self.text("ParcelCount", &shipment.parcel_count().to_string())?;
        self.delivery_mode(&shipment.delivery_mode)?;
        self.collection_mode(&shipment.collection_mode)?;

        self.start("Parcels")?;
        for parcel in &shipment.parcels {
            self.parcel(parcel)?;
        }
        self.end("Parcels")?;

        self.text("DeliveryInstruction", &shipment.delivery_instruction)?;
        self.party("Sender", &shipment.sender)?;
        self.party("Recipient", &shipment.recipient)?;
        self.end("Shipment")
    }

    fn delivery_mode(&mut self, mode: &DeliveryMode) -> Result<()> {
        self.mode("DeliveryMode", mode.mode.code(), &mode.location)
    }

    fn collection_mode(&mut self, mode: &CollectionMode) -> Result<()> {
        self.mode("CollectionMode", mode.mode.code(), &mode.location)
    }

    fn parcel(&mut self, parcel: &Parcel) -> Result<()> {
        self.start("Parcel")?;
        self.text("Content", &parcel.content)?;
        let mut weight = BytesStart::new("Weight");
        weight.push_attribute(("Value", parcel.weight.value.to_string().as_str()));
        weight.push_attribute(("Unit", parcel.weight.unit.as_str()));
        self.event(Event::Empty(weight))?;
        self.end("Parcel")
    }

    fn party(&mut self, role: &str, address: &Address) -> Result<()> {
        self.start(role)?;
        self.start("Address")?;
        self.text("Title", &address.title)?;
        self.text("Firstname", &address.first_name)?;
        self.text("Lastname", &address.last_name)?;
        self.text("Streetname", &address.streetname)?;
        self.text("CountryCode", &address.country_code)?;
        self.text("PostCode", &address.post_code)?;
        self.text("City", &address.city)?;
        self.text("AddressAdd1", &address.address_add1)?;
        self.text("AddressAdd2", &address.address_add2)?;
        self.text("MobileNo", &address.mobile_no)?;
        self.text("Email", &address.email)?;
        self.end("Address")?;
        self.end(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputFormat, Weight};
    use roxmltree::{Document, Node};

    fn request(delivery_mode: DeliveryMode, output_options: OutputOptions) -> ShipmentRequest {
        ShipmentRequest {
            context: crate::config::Credentials::sandbox().context("fr-FR", "1.0"),
            output_options,
            shipments: vec![Shipment {
                order_no: "123".to_string(),
                customer_no: String::new(),
                delivery_mode,
                collection_mode: CollectionMode::default(),
                parcels: vec![Parcel {
                    content: "ful_1".to_string(),
                    weight: Weight::grams(1500),
                }],
                delivery_instruction: String::new(),
                sender: Address {
                    first_name: "John".to_string(),
                    streetname: "1 rue de la paix & co".to_string(),
                    country_code: "FR".to_string(),
                    ..Default::default()
                },
                recipient: Address {
                    first_name: "Jane".to_string(),
                    country_code: "BE".to_string(),
                    ..Default::default()
                },
            }],
        }
    }

    fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Node<'a, 'input> {
        node.children()
            .find(|n| n.is_element() && n.tag_name().name() == name)
            .unwrap_or_else(|| panic!("missing <{name}>"))
    }

    fn element_names(node: Node) -> Vec<String> {
        node.children()
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name().to_string())
            .collect()
    }

    #[test]
    fn relay_point_pdf_request() {
        let xml = write_request(&request(
            DeliveryMode::relay_point("FR-21607"),
            OutputOptions::pdf(OutputFormat::A4),
        ))
        .unwrap();
        let doc = Document::parse(&xml).unwrap();
        let root = doc.root_element();

        assert_eq!(root.tag_name().name(), "ShipmentCreationRequest");
        assert_eq!(root.tag_name().namespace(), Some(REQUEST_NAMESPACE));
        assert_eq!(
            element_names(root),
            ["Context", "OutputOptions", "ShipmentsList"]
        );

        let context = child(root, "Context");
        assert_eq!(
            element_names(context),
            ["Login", "Password", "CustomerId", "Culture", "VersionAPI"]
        );
        assert_eq!(child(context, "CustomerId").text(), Some("BDTEST"));

        let output = child(root, "OutputOptions");
        assert_eq!(child(output, "OutputFormat").text(), Some("A4"));
        assert_eq!(child(output, "OutputType").text(), Some("PdfUrl"));

        let shipment = child(child(root, "ShipmentsList"), "Shipment");
        assert_eq!(
            element_names(shipment),
            [
                "OrderNo",
                "CustomerNo",
                "ParcelCount",
                "DeliveryMode",
                "CollectionMode",
                "Parcels",
                "DeliveryInstruction",
                "Sender",
                "Recipient"
            ]
        );
        assert_eq!(child(shipment, "ParcelCount").text(), Some("1"));

        let delivery = child(shipment, "DeliveryMode");
        assert_eq!(delivery.attribute("Mode"), Some("24R"));
        assert_eq!(delivery.attribute("Location"), Some("FR-21607"));
        assert!(!delivery.has_children());

        let collection = child(shipment, "CollectionMode");
        assert_eq!(collection.attribute("Mode"), Some("REL"));
        assert_eq!(collection.attribute("Location"), Some(""));

        let parcel = child(child(shipment, "Parcels"), "Parcel");
        assert_eq!(child(parcel, "Content").text(), Some("ful_1"));
        let weight = child(parcel, "Weight");
        assert_eq!(weight.attribute("Value"), Some("1500"));
        assert_eq!(weight.attribute("Unit"), Some("gr"));
    }

    #[test]
    fn addresses_are_escaped_and_complete() {
        let xml = write_request(&request(
            DeliveryMode::relay_point("FR-21607"),
            OutputOptions::default(),
        ))
        .unwrap();
        assert!(xml.contains("1 rue de la paix &amp; co"));

        let doc = Document::parse(&xml).unwrap();
        let shipment = child(child(doc.root_element(), "ShipmentsList"), "Shipment");
        let sender = child(child(shipment, "Sender"), "Address");
        insta::assert_snapshot!(
            element_names(sender).join(","),
            @"Title,Firstname,Lastname,Streetname,CountryCode,PostCode,City,AddressAdd1,AddressAdd2,MobileNo,Email"
        );
        assert_eq!(child(sender, "Streetname").text(), Some("1 rue de la paix & co"));
        // Empty values are empty elements, never missing ones
        assert_eq!(child(sender, "MobileNo").text(), None);

        let recipient = child(child(shipment, "Recipient"), "Address");
        assert_eq!(child(recipient, "Firstname").text(), Some("Jane"));
        assert_eq!(child(recipient, "CountryCode").text(), Some("BE"));
    }

    #[test]
    fn qr_code_request_has_empty_format() {
        let xml = write_request(&request(DeliveryMode::home(), OutputOptions::qr_code())).unwrap();
        let doc = Document::parse(&xml).unwrap();
        let root = doc.root_element();

        let output = child(root, "OutputOptions");
        assert_eq!(child(output, "OutputFormat").text(), None);
        assert_eq!(child(output, "OutputType").text(), Some("QRCode"));

        let shipment = child(child(root, "ShipmentsList"), "Shipment");
        let delivery = child(shipment, "DeliveryMode");
        assert_eq!(delivery.attribute("Mode"), Some("HOM"));
        assert_eq!(delivery.attribute("Location"), Some(""));
    }

    #[test]
    fn output_is_deterministic() {
        let req = request(DeliveryMode::locker("FR-1"), OutputOptions::default());
        let xml = write_request(&req).unwrap();
        assert_eq!(xml, write_request(&req).unwrap());

        let doc = Document::parse(&xml).unwrap();
        let shipment = child(child(doc.root_element(), "ShipmentsList"), "Shipment");
        let delivery = child(shipment, "DeliveryMode");
        assert_eq!(delivery.attribute("Mode"), Some("APM"));
        assert_eq!(delivery.attribute("Location"), Some("FR-1"));
    }
}
