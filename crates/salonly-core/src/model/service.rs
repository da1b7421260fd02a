// ── Service domain type ──

use serde::{Deserialize, Serialize};

use super::entity_ref::Identified;

/// A bookable salon service.
///
/// Immutable once fetched; the booking flow selects services by
/// reference and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Appointment length in minutes. Drives slot granularity.
    pub duration_minutes: i64,
    /// Price in the salon's currency unit (non-negative).
    pub price: i64,
    pub description: Option<String>,
    pub features: Vec<String>,
    /// Catalog category code (e.g. `"ROSE"`, `"ORCHID"`).
    pub code: Option<String>,
    pub service_type: Option<String>,
    /// Optional add-on services offered together with this one.
    pub sub_services: Vec<Service>,
}

impl Service {
    pub fn has_sub_services(&self) -> bool {
        !self.sub_services.is_empty()
    }

    /// Category match: case-insensitive equality against the catalog
    /// code. Services without a code never match.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == code.to_lowercase())
    }

    /// Free-text match against name and description, case-insensitive.
    /// An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

impl Identified for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Narrow a fetched catalog to one category code plus a search query.
pub fn filter_catalog<'a>(services: &'a [Service], code: &str, query: &str) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|s| s.matches_code(code) && s.matches_search(query))
        .collect()
}
