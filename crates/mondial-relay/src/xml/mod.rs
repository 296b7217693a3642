//! Carrier XML codec
//!
//! Requests are written with `quick-xml` in the carrier's fixed element order.
//! Responses are parsed with `roxmltree` into a generic [`XmlElement`] tree, then read
//! along fixed paths.

mod read;
mod response;
mod write;

pub use read::XmlElement;
pub use response::{ResponseShipment, ShipmentCreationResponse, read_response};
pub use write::write_request;

pub const REQUEST_NAMESPACE: &str = "http://www.example.org/Request";
