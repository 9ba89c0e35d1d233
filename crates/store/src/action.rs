//! Typed mutation actions and the collections they touch.

use lenscraft_core::auth::SessionUser;
use lenscraft_core::billing::{Coupon, Invoice};
use lenscraft_core::catalog::{Pillar, ServiceItem};
use lenscraft_core::client::Client;
use lenscraft_core::log::action_names;
use lenscraft_core::pipeline::StageDirection;
use lenscraft_core::project::Project;
use lenscraft_core::quotation::Quotation;
use lenscraft_core::resources::{Asset, Freelancer};
use lenscraft_core::types::EntityId;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Addressable snapshot collections. Each maps to one persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Clients,
    Projects,
    Contractors,
    Assets,
    Invoices,
    Services,
    Quotations,
    Coupons,
    Logs,
    Session,
}

impl Collection {
    /// All collections, in snapshot-key order.
    pub const ALL: [Collection; 10] = [
        Collection::Clients,
        Collection::Projects,
        Collection::Contractors,
        Collection::Assets,
        Collection::Invoices,
        Collection::Services,
        Collection::Quotations,
        Collection::Coupons,
        Collection::Logs,
        Collection::Session,
    ];

    /// Snapshot key for this collection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Clients => "lc_clients",
            Self::Projects => "lc_projects",
            Self::Contractors => "lc_contractors",
            Self::Assets => "lc_assets",
            Self::Invoices => "lc_invoices",
            Self::Services => "lc_services",
            Self::Quotations => "lc_quotations",
            Self::Coupons => "lc_coupons",
            Self::Logs => "lc_logs",
            Self::Session => "lc_auth",
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Every mutation the dashboard can perform.
///
/// `Updated` variants carry the full replacement record (direct field
/// replacement, no patch semantics). Deletes address a single record;
/// nothing cascades.
#[derive(Debug, Clone)]
pub enum Action {
    ClientAdded(Client),
    ClientUpdated(Client),
    ClientDeleted { id: EntityId },

    ProjectAdded(Project),
    ProjectUpdated(Project),
    ProjectDeleted { id: EntityId },
    ProjectStageMoved { id: EntityId, direction: StageDirection },

    ContractorAdded(Freelancer),
    ContractorUpdated(Freelancer),
    ContractorRatingSet { id: EntityId, rating: f32 },
    ContractorDeleted { id: EntityId },

    AssetAdded(Asset),
    AssetUpdated(Asset),
    AssetStatusToggled { id: EntityId },
    AssetDeleted { id: EntityId },

    ServiceAdded(ServiceItem),
    ServiceUpdated(ServiceItem),
    ServiceDeleted { id: EntityId },
    ServiceCategoryDeleted { pillar: Pillar, category: String },

    QuotationSaved(Quotation),
    QuotationUpdated(Quotation),
    QuotationDeleted { id: EntityId },

    InvoiceAdded(Invoice),

    CouponAdded(Coupon),
    CouponDeleted { code: String },

    LoggedIn(SessionUser),
    LoggedOut,

    /// Admin reset: restore clients and projects to the bundled fixtures.
    SystemReset,
}

impl Action {
    /// Stable action name for logging and mutation hooks.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClientAdded(_)
            | Self::ProjectAdded(_)
            | Self::ContractorAdded(_)
            | Self::AssetAdded(_)
            | Self::ServiceAdded(_)
            | Self::QuotationSaved(_)
            | Self::InvoiceAdded(_)
            | Self::CouponAdded(_) => action_names::ENTITY_CREATE,

            Self::ClientUpdated(_)
            | Self::ProjectUpdated(_)
            | Self::ContractorUpdated(_)
            | Self::ContractorRatingSet { .. }
            | Self::AssetUpdated(_)
            | Self::AssetStatusToggled { .. }
            | Self::ServiceUpdated(_)
            | Self::QuotationUpdated(_) => action_names::ENTITY_UPDATE,

            Self::ClientDeleted { .. }
            | Self::ProjectDeleted { .. }
            | Self::ContractorDeleted { .. }
            | Self::AssetDeleted { .. }
            | Self::ServiceDeleted { .. }
            | Self::ServiceCategoryDeleted { .. }
            | Self::QuotationDeleted { .. }
            | Self::CouponDeleted { .. } => action_names::ENTITY_DELETE,

            Self::ProjectStageMoved { .. } => action_names::STAGE_MOVE,
            Self::LoggedIn(_) => action_names::LOGIN,
            Self::LoggedOut => action_names::LOGOUT,
            Self::SystemReset => action_names::SYSTEM,
        }
    }
}
