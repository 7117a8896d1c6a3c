//! schema.org JSON-LD shapes.
//!
//! Each struct borrows from the catalog so the emitted text is the same
//! string the page displays.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Which schema.org block a [`JsonLdBlock`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    LocalBusiness,
    BreadcrumbList,
    FaqPage,
    Article,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalBusiness => "LocalBusiness",
            Self::BreadcrumbList => "BreadcrumbList",
            Self::FaqPage => "FAQPage",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serialized block ready to embed in `<script type="application/ld+json">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonLdBlock {
    pub kind: SchemaKind,
    pub json: String,
}

#[derive(Debug, Serialize)]
pub struct LocalBusinessSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'a str,
    pub telephone: &'a str,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddressSchema<'a>>,
    #[serde(rename = "areaServed", skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressSchema<'a> {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub street_address: &'a str,
    pub address_locality: &'a str,
    pub address_region: &'a str,
    pub postal_code: &'a str,
    pub address_country: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<ListItemSchema<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ListItemSchema<'a> {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: &'a str,
    pub item: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub main_entity: Vec<QuestionSchema<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSchema<'a> {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'a str,
    pub accepted_answer: AnswerSchema<'a>,
}

#[derive(Debug, Serialize)]
pub struct AnswerSchema<'a> {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: &'a str,
    pub description: &'a str,
    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
    pub main_entity_of_page: String,
    pub author: OrganizationSchema<'a>,
    pub publisher: OrganizationSchema<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationSchema<'a> {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'a str,
}
