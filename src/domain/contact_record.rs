use serde::{Deserialize, Serialize};

/// One company's contact details as scraped from its directory profile.
///
/// Field order is the report's column order. A record with every field unset
/// is the "empty" record produced for pages without a profile section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "Company Name")]
    pub company_name: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Telephone")]
    pub telephone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Domain")]
    pub domain: Option<String>,
    #[serde(rename = "Panel")]
    pub panel: Option<String>,
    #[serde(rename = "Service Coverage")]
    pub service_coverage: Option<String>,
    #[serde(rename = "Languages Spoken")]
    pub languages_spoken: Option<String>,
    #[serde(rename = "Last Update")]
    pub last_update: Option<String>,
    #[serde(rename = "Panel Suppliers")]
    pub panel_suppliers: Option<String>,
    #[serde(rename = "Operating Area")]
    pub operating_area: Option<String>,
}

impl ContactRecord {
    pub const FIELD_NAMES: [&'static str; 13] = [
        "Company Name",
        "Address",
        "Country",
        "Telephone",
        "Email",
        "Website",
        "Domain",
        "Panel",
        "Service Coverage",
        "Languages Spoken",
        "Last Update",
        "Panel Suppliers",
        "Operating Area",
    ];

    pub fn empty() -> Self {
        ContactRecord::default()
    }

    /// Field name and value pairs, in column order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 13] {
        let values = [
            &self.company_name,
            &self.address,
            &self.country,
            &self.telephone,
            &self.email,
            &self.website,
            &self.domain,
            &self.panel,
            &self.service_coverage,
            &self.languages_spoken,
            &self.last_update,
            &self.panel_suppliers,
            &self.operating_area,
        ];

        let mut fields = [("", None); 13];
        for (i, (name, value)) in Self::FIELD_NAMES.iter().zip(values).enumerate() {
            fields[i] = (*name, value.as_deref());
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }
}
