//! Platform address records -> carrier `Address` blocks
//!
//! All defaulting happens here: every field ends up as a string (empty when the source
//! had nothing) and the country code is upper-cased, so the XML writer can emit values
//! as-is.

use crate::config::{BusinessAddress, Credentials};
use crate::platform::PlatformAddress;
use crate::types::Address;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn country(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_uppercase()
}

impl Address {
    /// The configured business address. Missing phone/e-mail fall back to the
    /// business contact attached to the credentials.
    pub fn from_business(business: &BusinessAddress, contact: &Credentials) -> Self {
        Self {
            title: text(&business.title),
            first_name: text(&business.first_name),
            last_name: text(&business.last_name),
            streetname: text(&business.streetname),
            address_add1: text(&business.address_add1),
            address_add2: text(&business.address_add2),
            country_code: country(&business.country_code),
            post_code: text(&business.post_code),
            city: text(&business.city),
            mobile_no: text_or(&business.mobile_no, &contact.business_phone),
            email: text_or(&business.email, &contact.business_email),
        }
    }

    /// A customer's shipping address. The order e-mail stands in for the address'
    /// missing e-mail field.
    pub fn from_customer(address: Option<&PlatformAddress>, email: Option<&str>) -> Self {
        let Some(address) = address else {
            return Self {
                email: email.unwrap_or_default().to_string(),
                ..Self::default()
            };
        };

        Self {
            title: String::new(),
            first_name: text(&address.first_name),
            last_name: text(&address.last_name),
            streetname: text(&address.address_1),
            address_add1: String::new(),
            address_add2: text(&address.address_2),
            country_code: country(&address.country_code),
            post_code: text(&address.postal_code),
            city: text(&address.city),
            mobile_no: text(&address.phone),
            email: email.unwrap_or_default().to_string(),
        }
    }

    /// A warehouse address: postal fields from the stock location, contact fields
    /// from the business.
    pub fn from_stock_location(
        location: &PlatformAddress,
        business: &BusinessAddress,
        contact: &Credentials,
    ) -> Self {
        Self {
            streetname: text(&location.address_1),
            address_add1: String::new(),
            address_add2: text(&location.address_2),
            country_code: country(&location.country_code),
            post_code: text(&location.postal_code),
            city: text(&location.city),
            ..Self::from_business(business, contact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business() -> BusinessAddress {
        BusinessAddress {
            title: Some("Mr".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            streetname: Some("1 rue de la paix".to_string()),
            address_add2: Some("Bâtiment B".to_string()),
            country_code: Some("fr".to_string()),
            post_code: Some("75000".to_string()),
            city: Some("Paris".to_string()),
            mobile_no: Some("0612345678".to_string()),
            return_location: Some("FR-12345".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn business_address_is_fully_populated() {
        let address = Address::from_business(&business(), &Credentials::sandbox());
        assert_eq!(address.title, "Mr");
        assert_eq!(address.country_code, "FR");
        assert_eq!(address.address_add1, "");
        assert_eq!(address.mobile_no, "0612345678");
        // e-mail missing from the address: contact fallback
        assert_eq!(address.email, "test@business.com");
    }

    #[test]
    fn empty_business_address_maps_to_empty_strings() {
        let mut contact = Credentials::sandbox();
        contact.business_email.clear();
        contact.business_phone.clear();

        let address = Address::from_business(&BusinessAddress::default(), &contact);
        assert_eq!(address, Address::default());
    }

    #[test]
    fn customer_address_defaults_and_uppercases() {
        let platform = PlatformAddress {
            first_name: Some("Jane".to_string()),
            address_1: Some("Test Street".to_string()),
            address_2: Some("FR-21607".to_string()),
            country_code: Some("fr".to_string()),
            ..Default::default()
        };

        let address = Address::from_customer(Some(&platform), Some("jane@example.com"));
        assert_eq!(address.first_name, "Jane");
        assert_eq!(address.last_name, "");
        assert_eq!(address.streetname, "Test Street");
        assert_eq!(address.address_add2, "FR-21607");
        assert_eq!(address.country_code, "FR");
        assert_eq!(address.post_code, "");
        assert_eq!(address.mobile_no, "");
        assert_eq!(address.email, "jane@example.com");
    }

    #[test]
    fn missing_customer_address_keeps_email() {
        let address = Address::from_customer(None, Some("jane@example.com"));
        assert_eq!(address.email, "jane@example.com");
        assert_eq!(address.streetname, "");
        assert_eq!(address.country_code, "");
    }

    #[test]
    fn stock_location_overrides_postal_fields() {
        let location = PlatformAddress {
            address_1: Some("Test Street".to_string()),
            address_2: Some("FR-02071".to_string()),
            city: Some("Créteil".to_string()),
            country_code: Some("fr".to_string()),
            postal_code: Some("94000".to_string()),
            ..Default::default()
        };

        let address =
            Address::from_stock_location(&location, &business(), &Credentials::sandbox());
        assert_eq!(address.first_name, "John");
        assert_eq!(address.streetname, "Test Street");
        assert_eq!(address.address_add2, "FR-02071");
        assert_eq!(address.city, "Créteil");
        assert_eq!(address.country_code, "FR");
        assert_eq!(address.post_code, "94000");
        assert_eq!(address.mobile_no, "0612345678");
    }
}
