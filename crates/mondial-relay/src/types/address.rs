/// Carrier-side address block, used for both `Sender` and `Recipient`
///
/// Every field is populated: absent source data maps to an empty string at the
/// mapping boundary (see [`crate::address`]), never to a missing element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub streetname: String,
    pub address_add1: String,
    pub address_add2: String,
    /// Upper-case ISO 3166 alpha-2 code
    pub country_code: String,
    pub post_code: String,
    pub city: String,
    pub mobile_no: String,
    pub email: String,
}
