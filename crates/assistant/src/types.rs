//! Catalog snapshot input and the parsed quotation draft.

use lenscraft_core::catalog::ServiceItem;
use lenscraft_core::quotation::LineItem;
use lenscraft_core::resources::{Asset, Freelancer};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the catalog handed to the quote model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    pub services: Vec<ServiceItem>,
    pub contractors: Vec<Freelancer>,
    pub assets: Vec<Asset>,
}

/// Model-produced quotation draft, parsed from the schema-constrained
/// completion. Prices are whole rupees from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDraft {
    pub project_type: String,
    pub tier: String,
    pub items: Vec<LineItem>,
    pub explanation: String,
}
