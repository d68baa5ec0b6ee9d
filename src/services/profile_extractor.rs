use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::{
    dal::page_store::PageStore,
    domain::{contact_record::ContactRecord, website::extract_domain},
};

const SECTION_BODY_CLASS: &str = ".enf-section-body-content";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("company profile on page {title:?} has no heading")]
    MissingCompanyName { title: String },
}

/// Parses saved company profile pages into contact records.
pub struct ProfileExtractor {
    company_profile: Selector,
    heading: Selector,
    address: Selector,
    telephone: Selector,
    email: Selector,
    url: Selector,
    breadcrumb: Selector,
    list_item: Selector,
    section_body: Selector,
    title: Selector,
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        ProfileExtractor::new()
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should parse")
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl ProfileExtractor {
    pub fn new() -> Self {
        ProfileExtractor {
            company_profile: selector(".enf-company-profile"),
            heading: selector("h1"),
            address: selector(r#"[itemprop="address"]"#),
            telephone: selector(r#"[itemprop="telephone"]"#),
            email: selector(r#"[itemprop="email"]"#),
            url: selector(r#"[itemprop="url"]"#),
            breadcrumb: selector(".enf-breadcrumb"),
            list_item: selector("li"),
            section_body: selector(SECTION_BODY_CLASS),
            title: selector("title"),
        }
    }

    /// Extracts one record from a page's markup.
    ///
    /// Pages without a company profile give an empty record. Every field other
    /// than the company name is optional and looked up on its own, so a missing
    /// or malformed field only ever blanks that field.
    pub fn extract(&self, html: &str) -> Result<ContactRecord, ExtractionError> {
        let document = Html::parse_document(html);

        let Some(profile) = document.select(&self.company_profile).next() else {
            log::info!("Company {} has no contact info", self.page_title(&document));
            return Ok(ContactRecord::empty());
        };

        let company_name = profile
            .select(&self.heading)
            .next()
            .map(element_text)
            .ok_or_else(|| ExtractionError::MissingCompanyName {
                title: self.page_title(&document),
            })?;

        let address = self.profile_field(profile, &self.address);
        let telephone = self.profile_field(profile, &self.telephone);
        let email = self.profile_field(profile, &self.email);
        let website = self.profile_field(profile, &self.url);
        let country = self.country(&document);

        let last_update = self
            .find_section_by_label(&document, "Last Update")
            .map(|text| text.split('\n').next().unwrap_or_default().to_string());
        let languages_spoken = self.find_section_by_label(&document, "Languages Spoken");
        // Suppliers first: "Panel" is also a substring of its label.
        let panel_suppliers = self.find_section_by_label(&document, "Panel Suppliers");
        let panel = self.find_section_by_label(&document, "Panel");
        let service_coverage = self.find_section_by_label(&document, "Service Coverage");
        let operating_area = self.find_section_by_label(&document, "Operating Area");

        let domain = website.as_deref().and_then(extract_domain);

        Ok(ContactRecord {
            company_name: Some(company_name),
            address,
            country,
            telephone,
            email,
            website,
            domain,
            panel,
            service_coverage,
            languages_spoken,
            last_update,
            panel_suppliers,
            operating_area,
        })
    }

    /// Text of the body of the page section whose heading mentions `label`.
    ///
    /// The label is matched case-insensitively against every text node in
    /// document order. A node that is exactly the label wins over one that only
    /// contains it; otherwise the first containing node is used. The section
    /// body is searched for under the label node's grandparent.
    pub fn find_section_by_label(&self, document: &Html, label: &str) -> Option<String> {
        let label = label.to_lowercase();
        let mut first_match = None;
        let mut exact_match = None;

        for node in document.tree.root().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let content: &str = &text.text;
            let content = content.trim().to_lowercase();

            if content == label {
                exact_match = Some(node);
                break;
            }
            if first_match.is_none() && content.contains(&label) {
                first_match = Some(node);
            }
        }

        let label_node = exact_match.or(first_match)?;
        let section = ElementRef::wrap(label_node.parent()?.parent()?)?;
        let body = section.select(&self.section_body).next()?;

        Some(element_text(body))
    }

    fn profile_field(&self, profile: ElementRef, field: &Selector) -> Option<String> {
        profile.select(field).next().map(element_text)
    }

    fn country(&self, document: &Html) -> Option<String> {
        let breadcrumb = document.select(&self.breadcrumb).next()?;
        breadcrumb.select(&self.list_item).nth(1).map(element_text)
    }

    fn page_title(&self, document: &Html) -> String {
        document
            .select(&self.title)
            .next()
            .map(element_text)
            .unwrap_or_else(|| "<untitled>".to_string())
    }
}

/// Extracts a record from every page in the store, in path order.
///
/// Unreadable pages and pages whose profile has no company name are logged
/// and left out. Pages without a profile yield an empty record.
pub async fn extract_pages(
    store: &PageStore,
    extractor: &ProfileExtractor,
) -> anyhow::Result<Vec<ContactRecord>> {
    let pages = store.list_pages().await?;
    let total = pages.len();
    let mut records = Vec::with_capacity(total);

    for (i, path) in pages.iter().enumerate() {
        log::info!("Extracting {} / {}: {:?}", i + 1, total, path);

        let html = match store.read_page(path).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Skipping unreadable page: {:?}", e);
                continue;
            }
        };

        match extractor.extract(&html) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping {:?}: {}", path, e),
        }
    }

    Ok(records)
}
