pub mod address;
pub mod response;
pub mod shipment;

pub use address::*;
pub use response::*;
pub use shipment::*;
