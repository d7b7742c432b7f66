use std::sync::LazyLock;

use serde::Deserialize;

/// Literal accepted by the enquiry form in addition to catalog entries, for
/// visitors whose job does not match a single offering.
pub const OTHER_SERVICE: &str = "Other";

static SERVICES_JSON: &str = include_str!("../content/services.json");

static SERVICES: LazyLock<Vec<ServiceOffering>> =
    LazyLock::new(|| serde_json::from_str(SERVICES_JSON).unwrap());

/// One named offering from the static service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceOffering {
    pub slug: String,
    pub title: String,
    pub summary: String,
}

/// The static catalog of offerings used to populate service selection.
pub fn services() -> &'static [ServiceOffering] {
    &SERVICES
}

/// Whether `name` is a catalog offering title or the [`OTHER_SERVICE`]
/// literal.
pub fn is_catalog_service(name: &str) -> bool {
    name == OTHER_SERVICE || services().iter().any(|service| service.title == name)
}
