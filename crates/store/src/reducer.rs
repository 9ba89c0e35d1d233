//! The pure `(state, action)` transform.
//!
//! `reduce` applies one [`Action`] to the state in place and reports
//! which collections it actually touched. An empty result means the
//! action was a no-op. Addressing a missing id is silent by design,
//! and a stage move clamped at a pipeline boundary changes nothing.

use lenscraft_core::client::normalize_client_name;
use lenscraft_core::pipeline;
use lenscraft_core::resources::clamp_rating;

use crate::action::{Action, Collection};
use crate::fixtures;
use crate::state::AppState;

/// Replace the record with a matching id. Returns whether a record matched.
fn replace_by_id<T, F: Fn(&T) -> &str>(records: &mut [T], id: &str, key: F, replacement: T) -> bool {
    match records.iter_mut().find(|record| key(record) == id) {
        Some(slot) => {
            *slot = replacement;
            true
        }
        None => false,
    }
}

/// Remove the record with a matching key. Returns whether a record matched.
fn remove_by<T, F: Fn(&T) -> bool>(records: &mut Vec<T>, matches: F) -> bool {
    match records.iter().position(matches) {
        Some(position) => {
            records.remove(position);
            true
        }
        None => false,
    }
}

/// Apply `action` to `state`, returning the collections that changed.
pub fn reduce(state: &mut AppState, action: &Action) -> Vec<Collection> {
    match action {
        // -- Clients --------------------------------------------------------
        Action::ClientAdded(client) => {
            let mut client = client.clone();
            client.name = normalize_client_name(&client.name);
            state.clients.push(client);
            vec![Collection::Clients]
        }
        Action::ClientUpdated(client) => {
            let mut client = client.clone();
            client.name = normalize_client_name(&client.name);
            let id = client.id.clone();
            if replace_by_id(&mut state.clients, &id, |c| &c.id, client) {
                vec![Collection::Clients]
            } else {
                Vec::new()
            }
        }
        Action::ClientDeleted { id } => {
            if remove_by(&mut state.clients, |c| c.id == *id) {
                vec![Collection::Clients]
            } else {
                Vec::new()
            }
        }

        // -- Projects -------------------------------------------------------
        Action::ProjectAdded(project) => {
            // Newest first on the board.
            state.projects.insert(0, project.clone());
            vec![Collection::Projects]
        }
        Action::ProjectUpdated(project) => {
            let id = project.id.clone();
            if replace_by_id(&mut state.projects, &id, |p| &p.id, project.clone()) {
                vec![Collection::Projects]
            } else {
                Vec::new()
            }
        }
        Action::ProjectDeleted { id } => {
            if remove_by(&mut state.projects, |p| p.id == *id) {
                vec![Collection::Projects]
            } else {
                Vec::new()
            }
        }
        Action::ProjectStageMoved { id, direction } => {
            let Some(project) = state.projects.iter_mut().find(|p| p.id == *id) else {
                return Vec::new();
            };
            let next = pipeline::step(project.status, *direction);
            if next == project.status {
                return Vec::new();
            }
            project.status = next;
            vec![Collection::Projects]
        }

        // -- Contractors ----------------------------------------------------
        Action::ContractorAdded(freelancer) => {
            state.contractors.push(freelancer.clone());
            vec![Collection::Contractors]
        }
        Action::ContractorUpdated(freelancer) => {
            let id = freelancer.id.clone();
            if replace_by_id(&mut state.contractors, &id, |f| &f.id, freelancer.clone()) {
                vec![Collection::Contractors]
            } else {
                Vec::new()
            }
        }
        Action::ContractorRatingSet { id, rating } => {
            let Some(freelancer) = state.contractors.iter_mut().find(|f| f.id == *id) else {
                return Vec::new();
            };
            freelancer.rating = clamp_rating(*rating);
            vec![Collection::Contractors]
        }
        Action::ContractorDeleted { id } => {
            if remove_by(&mut state.contractors, |f| f.id == *id) {
                vec![Collection::Contractors]
            } else {
                Vec::new()
            }
        }

        // -- Assets ---------------------------------------------------------
        Action::AssetAdded(asset) => {
            state.assets.push(asset.clone());
            vec![Collection::Assets]
        }
        Action::AssetUpdated(asset) => {
            let id = asset.id.clone();
            if replace_by_id(&mut state.assets, &id, |a| &a.id, asset.clone()) {
                vec![Collection::Assets]
            } else {
                Vec::new()
            }
        }
        Action::AssetStatusToggled { id } => {
            let Some(asset) = state.assets.iter_mut().find(|a| a.id == *id) else {
                return Vec::new();
            };
            asset.status = asset.status.toggled();
            vec![Collection::Assets]
        }
        Action::AssetDeleted { id } => {
            if remove_by(&mut state.assets, |a| a.id == *id) {
                vec![Collection::Assets]
            } else {
                Vec::new()
            }
        }

        // -- Services -------------------------------------------------------
        Action::ServiceAdded(service) => {
            state.services.push(service.clone());
            vec![Collection::Services]
        }
        Action::ServiceUpdated(service) => {
            let id = service.id.clone();
            if replace_by_id(&mut state.services, &id, |s| &s.id, service.clone()) {
                vec![Collection::Services]
            } else {
                Vec::new()
            }
        }
        Action::ServiceDeleted { id } => {
            if remove_by(&mut state.services, |s| s.id == *id) {
                vec![Collection::Services]
            } else {
                Vec::new()
            }
        }
        Action::ServiceCategoryDeleted { pillar, category } => {
            let before = state.services.len();
            state
                .services
                .retain(|s| !(s.pillar == *pillar && s.category == *category));
            if state.services.len() == before {
                Vec::new()
            } else {
                vec![Collection::Services]
            }
        }

        // -- Quotations -----------------------------------------------------
        Action::QuotationSaved(quotation) => {
            let mut quotation = quotation.clone();
            quotation.snapshot_total();
            state.quotations.insert(0, quotation);
            vec![Collection::Quotations]
        }
        Action::QuotationUpdated(quotation) => {
            let mut quotation = quotation.clone();
            quotation.snapshot_total();
            let id = quotation.id.clone();
            if replace_by_id(&mut state.quotations, &id, |q| &q.id, quotation) {
                vec![Collection::Quotations]
            } else {
                Vec::new()
            }
        }
        Action::QuotationDeleted { id } => {
            if remove_by(&mut state.quotations, |q| q.id == *id) {
                vec![Collection::Quotations]
            } else {
                Vec::new()
            }
        }

        // -- Invoices -------------------------------------------------------
        Action::InvoiceAdded(invoice) => {
            state.invoices.push(invoice.clone());
            vec![Collection::Invoices]
        }

        // -- Coupons --------------------------------------------------------
        Action::CouponAdded(coupon) => {
            state.coupons.push(coupon.clone());
            vec![Collection::Coupons]
        }
        Action::CouponDeleted { code } => {
            if remove_by(&mut state.coupons, |c| c.code == *code) {
                vec![Collection::Coupons]
            } else {
                Vec::new()
            }
        }

        // -- Session --------------------------------------------------------
        Action::LoggedIn(user) => {
            state.session = Some(user.clone());
            vec![Collection::Session]
        }
        Action::LoggedOut => {
            state.session = None;
            vec![Collection::Session]
        }

        // -- Admin ----------------------------------------------------------
        Action::SystemReset => {
            state.clients = fixtures::clients();
            state.projects = fixtures::projects();
            vec![Collection::Clients, Collection::Projects]
        }
    }
}
