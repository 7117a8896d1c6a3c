//! Business identity shared by every page.

/// Postal address of the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// Business identity used by the call-to-action block, the footer and the
/// `LocalBusiness` structured data.
///
/// Phone and address are optional: a page still renders without them, but
/// the `LocalBusiness` block is only emitted when name and phone are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessInfo {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<PostalAddress>,
    pub license_number: Option<String>,
    pub service_areas: Vec<String>,
}

impl BusinessInfo {
    /// Phone number with surrounding whitespace removed, `None` when blank.
    pub fn phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }

    /// `tel:` URI for the phone number, digits and a leading `+` only.
    pub fn phone_href(&self) -> Option<String> {
        self.phone().map(|phone| {
            let digits: String = phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            format!("tel:{digits}")
        })
    }
}
