use log::{debug, info};

use crate::config::{CarrierOptions, Credentials, Environment};
use crate::status;
use crate::transport::{HttpTransport, Transport};
use crate::types::{Context, ShipmentRequest, ShipmentResult};
use crate::xml::{read_response, write_request};
use crate::Result;

/// Shipment-creation client bound to one endpoint and account.
///
/// Endpoint and credentials are resolved once at construction and never change, so a
/// client can be shared across threads. Every call to [`create_shipment`] issues
/// exactly one POST; calling it twice for the same order creates two shipments.
///
/// [`create_shipment`]: MondialRelayClient::create_shipment
pub struct MondialRelayClient {
    credentials: Credentials,
    culture: String,
    version_api: String,
    transport: Box<dyn Transport>,
}

impl MondialRelayClient {
    pub fn new(options: &CarrierOptions, environment: Environment) -> Result<Self> {
        Self::with_transport(options, environment, Box::new(HttpTransport::new()?))
    }

    pub fn with_transport(
        options: &CarrierOptions,
        environment: Environment,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            credentials: Credentials::resolve(options, environment)?,
            culture: options.culture.clone(),
            version_api: options.version_api.clone(),
            transport,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &str {
        &self.credentials.api_base_url
    }

    /// Request context carrying this client's account
    pub fn context(&self) -> Context {
        self.credentials.context(&self.culture, &self.version_api)
    }

    /// Serialize a request without sending it
    pub fn render(&self, request: &ShipmentRequest) -> Result<String> {
        write_request(request)
    }

    pub fn create_shipment(&self, request: &ShipmentRequest) -> Result<ShipmentResult> {
        let body = self.render(request)?;
        debug!(
            "POST {} (order {}, {} bytes)",
            self.endpoint(),
            request
                .shipments
                .first()
                .map(|s| s.order_no.as_str())
                .unwrap_or_default(),
            body.len()
        );

        let body = self.transport.post_xml(self.endpoint(), body)?.into_body()?;
        let response = read_response(&body)?;
        let statuses = status::classify(&response.statuses).into_result()?;
        let result = response.into_result(statuses)?;

        info!("Shipment created with number: {}", result.shipment_number);
        Ok(result)
    }
}
