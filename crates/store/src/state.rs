//! The application-state container.

use lenscraft_core::auth::SessionUser;
use lenscraft_core::billing::{Coupon, Invoice};
use lenscraft_core::catalog::ServiceItem;
use lenscraft_core::client::Client;
use lenscraft_core::log::SystemLog;
use lenscraft_core::project::Project;
use lenscraft_core::quotation::Quotation;
use lenscraft_core::resources::{Asset, Freelancer};

use crate::fixtures;

/// Every entity collection plus the auth session.
///
/// Collections are plain vectors mutated in place by the reducer; each is
/// persisted as one JSON snapshot under its own key.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub contractors: Vec<Freelancer>,
    pub assets: Vec<Asset>,
    pub invoices: Vec<Invoice>,
    pub services: Vec<ServiceItem>,
    pub quotations: Vec<Quotation>,
    pub coupons: Vec<Coupon>,
    pub logs: Vec<SystemLog>,
    pub session: Option<SessionUser>,
}

impl AppState {
    /// Fresh state populated from the bundled fixtures, logged out.
    pub fn seeded() -> Self {
        Self {
            clients: fixtures::clients(),
            projects: fixtures::projects(),
            contractors: fixtures::freelancers(),
            assets: fixtures::assets(),
            invoices: fixtures::invoices(),
            services: fixtures::services(),
            quotations: fixtures::quotations(),
            coupons: fixtures::coupons(),
            logs: Vec::new(),
            session: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_matches_fixture_counts() {
        let state = AppState::seeded();
        assert_eq!(state.clients.len(), 2);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.contractors.len(), 4);
        assert_eq!(state.assets.len(), 5);
        assert_eq!(state.services.len(), 3);
        assert_eq!(state.quotations.len(), 2);
        assert_eq!(state.coupons.len(), 2);
        assert!(state.logs.is_empty());
        assert!(state.session.is_none());
    }
}
