//! Business identity constants.

use crate::domain::entities::{BusinessInfo, PostalAddress};

pub const BUSINESS_NAME: &str = "Gulf Coast Builders";
pub const BUSINESS_PHONE: &str = "(813) 555-0142";
pub const BUSINESS_EMAIL: &str = "estimates@gulfcoastbuilders.com";
pub const LICENSE_NUMBER: &str = "CGC1531234";

pub const SERVICE_AREAS: &[&str] = &[
    "Tampa",
    "St. Petersburg",
    "Clearwater",
    "Sarasota",
    "Bradenton",
    "Brandon",
];

pub fn business() -> BusinessInfo {
    BusinessInfo {
        name: BUSINESS_NAME.to_string(),
        phone: Some(BUSINESS_PHONE.to_string()),
        email: Some(BUSINESS_EMAIL.to_string()),
        address: Some(PostalAddress {
            street: "2401 W Kennedy Blvd, Suite 300".to_string(),
            locality: "Tampa".to_string(),
            region: "FL".to_string(),
            postal_code: "33609".to_string(),
            country: "US".to_string(),
        }),
        license_number: Some(LICENSE_NUMBER.to_string()),
        service_areas: SERVICE_AREAS.iter().map(|area| area.to_string()).collect(),
    }
}
