//! End-to-end store scenarios: dispatch, persistence, and restore.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lenscraft_core::billing::{Coupon, DiscountType};
use lenscraft_core::pipeline::{ProjectStatus, StageDirection};
use lenscraft_core::quotation::{LineItem, LineItemSource, QuotationStatus};
use lenscraft_store::{
    Action, AppState, DirSnapshotStore, MemorySnapshotStore, MutationHook, Store,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn memory_store() -> Store {
    Store::load(Box::new(MemorySnapshotStore::new())).expect("load from empty store")
}

fn forward(id: &str) -> Action {
    Action::ProjectStageMoved {
        id: id.to_string(),
        direction: StageDirection::Forward,
    }
}

struct CountingHook(Arc<AtomicUsize>);

impl MutationHook for CountingHook {
    fn on_mutation(&self, _action: &Action, _state: &AppState) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Scenario A: pipeline walk with boundary clamp
// ---------------------------------------------------------------------------

#[test]
fn pipeline_walk_from_shot_to_closed() {
    let mut store = memory_store();
    let id = store.state().projects[0].id.clone();
    assert_eq!(store.state().projects[0].status, ProjectStatus::Shot);

    assert!(store.dispatch(forward(&id)).unwrap());
    assert_eq!(store.state().projects[0].status, ProjectStatus::PostProduction);

    for _ in 0..6 {
        store.dispatch(forward(&id)).unwrap();
    }
    assert_eq!(store.state().projects[0].status, ProjectStatus::Closed);

    // One more forward clamps: no change, no persist.
    assert!(!store.dispatch(forward(&id)).unwrap());
    assert_eq!(store.state().projects[0].status, ProjectStatus::Closed);
}

// ---------------------------------------------------------------------------
// Scenario B: quotation totals
// ---------------------------------------------------------------------------

#[test]
fn saved_quotation_total_is_the_item_sum() {
    let mut store = memory_store();
    let mut quotation = store.state().quotations[0].clone();
    quotation.id = "QT-777".to_string();
    quotation.status = QuotationStatus::Draft;
    quotation.items = vec![
        LineItem::new("Recap Protocol", 3000, LineItemSource::Catalog),
        LineItem::new("Drone Aerial Coverage", 2500, LineItemSource::Resource),
        LineItem::new("4K Cinema Delivery", 1500, LineItemSource::Manual),
    ];
    quotation.total_amount = 0;

    store.dispatch(Action::QuotationSaved(quotation)).unwrap();
    let saved = &store.state().quotations[0];
    assert_eq!(saved.id, "QT-777");
    assert_eq!(saved.total_amount, 7000);
}

// ---------------------------------------------------------------------------
// Scenario C: coupon add then delete by code
// ---------------------------------------------------------------------------

#[test]
fn coupon_add_and_delete_by_code() {
    let mut store = memory_store();
    let before: Vec<String> = store.state().coupons.iter().map(|c| c.code.clone()).collect();

    store
        .dispatch(Action::CouponAdded(Coupon {
            code: "FLASH50".to_string(),
            discount_type: DiscountType::Percentage,
            value: 50,
            expiry: "2026-12-31".to_string(),
        }))
        .unwrap();
    assert!(store.state().coupons.iter().any(|c| c.code == "FLASH50"));

    store
        .dispatch(Action::CouponDeleted {
            code: "FLASH50".to_string(),
        })
        .unwrap();
    assert!(!store.state().coupons.iter().any(|c| c.code == "FLASH50"));
    let after: Vec<String> = store.state().coupons.iter().map(|c| c.code.clone()).collect();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// Persistence round trips
// ---------------------------------------------------------------------------

#[test]
fn mutations_survive_a_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let project_id;
    {
        let snapshots = DirSnapshotStore::open(dir.path()).unwrap();
        let mut store = Store::load(Box::new(snapshots)).unwrap();
        project_id = store.state().projects[0].id.clone();
        store.dispatch(forward(&project_id)).unwrap();
        store
            .dispatch(Action::CouponDeleted {
                code: "WINTER20".to_string(),
            })
            .unwrap();
    }

    let reopened = Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
    let project = reopened
        .state()
        .projects
        .iter()
        .find(|p| p.id == project_id)
        .expect("project persisted");
    assert_eq!(project.status, ProjectStatus::PostProduction);
    assert!(!reopened.state().coupons.iter().any(|c| c.code == "WINTER20"));
    // Untouched collections restored from fixtures.
    assert_eq!(reopened.state().contractors.len(), 4);
}

#[test]
fn asset_option_edits_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();

    let asset_id;
    {
        let mut store =
            Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
        let mut asset = store.state().assets[0].clone();
        asset_id = asset.id.clone();
        asset.suitable_categories = Some(vec!["Low-light ceremony".to_string()]);
        assert!(store.dispatch(Action::AssetUpdated(asset)).unwrap());
    }

    let reopened = Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
    let asset = reopened
        .state()
        .assets
        .iter()
        .find(|a| a.id == asset_id)
        .expect("asset persisted");
    assert_eq!(
        asset.suitable_categories.as_deref(),
        Some(&["Low-light ceremony".to_string()][..])
    );
}

#[test]
fn session_key_is_deleted_on_logout() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store =
            Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
        store.login("creative", "password").unwrap();
        assert!(dir.path().join("lc_auth.json").exists());
    }

    // Session restores across a reload.
    {
        let mut store =
            Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
        assert_eq!(store.state().session.as_ref().unwrap().name, "Creative Lead");
        store.logout().unwrap();
        assert!(!dir.path().join("lc_auth.json").exists());
    }

    let store = Store::load(Box::new(DirSnapshotStore::open(dir.path()).unwrap())).unwrap();
    assert!(store.state().session.is_none());
}

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

#[test]
fn hooks_fire_only_for_real_mutations() {
    let mut store = memory_store();
    let count = Arc::new(AtomicUsize::new(0));
    store.add_hook(Box::new(CountingHook(count.clone())));

    let id = store.state().projects[0].id.clone();
    store.dispatch(forward(&id)).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Missing id: silent no-op, hook not called.
    store.dispatch(forward("nope")).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn system_log_collection_stays_empty() {
    let mut store = memory_store();
    let id = store.state().projects[0].id.clone();
    store.dispatch(forward(&id)).unwrap();
    store
        .dispatch(Action::QuotationDeleted {
            id: "QT-2024-881".to_string(),
        })
        .unwrap();
    // No mutation path writes the log; that is what the hook seam is for.
    assert!(store.state().logs.is_empty());
}
