//! The store: state + snapshots + hooks.

use serde::de::DeserializeOwned;
use serde::Serialize;

use lenscraft_core::auth::{self, SessionUser};

use crate::action::{Action, Collection};
use crate::error::StoreError;
use crate::fixtures;
use crate::hooks::MutationHook;
use crate::reducer::reduce;
use crate::snapshot::SnapshotStore;
use crate::state::AppState;

/// Owns the application state and keeps it mirrored to a
/// [`SnapshotStore`] on every change.
pub struct Store {
    state: AppState,
    snapshots: Box<dyn SnapshotStore>,
    hooks: Vec<Box<dyn MutationHook>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn read_collection<T: DeserializeOwned>(
    snapshots: &dyn SnapshotStore,
    collection: Collection,
    fallback: impl FnOnce() -> Vec<T>,
) -> Result<Vec<T>, StoreError> {
    let key = collection.key();
    match snapshots.get(key)? {
        Some(payload) => {
            serde_json::from_str(&payload).map_err(|source| StoreError::Corrupt { key, source })
        }
        None => Ok(fallback()),
    }
}

impl Store {
    /// Restore state from the snapshot store, falling back to the
    /// bundled fixtures for any absent collection. The session restores
    /// to logged-out when its key is missing.
    pub fn load(snapshots: Box<dyn SnapshotStore>) -> Result<Self, StoreError> {
        let session = match snapshots.get(Collection::Session.key())? {
            Some(payload) => Some(
                serde_json::from_str::<SessionUser>(&payload).map_err(|source| {
                    StoreError::Corrupt {
                        key: Collection::Session.key(),
                        source,
                    }
                })?,
            ),
            None => None,
        };

        let state = AppState {
            clients: read_collection(snapshots.as_ref(), Collection::Clients, fixtures::clients)?,
            projects: read_collection(snapshots.as_ref(), Collection::Projects, fixtures::projects)?,
            contractors: read_collection(
                snapshots.as_ref(),
                Collection::Contractors,
                fixtures::freelancers,
            )?,
            assets: read_collection(snapshots.as_ref(), Collection::Assets, fixtures::assets)?,
            invoices: read_collection(snapshots.as_ref(), Collection::Invoices, fixtures::invoices)?,
            services: read_collection(snapshots.as_ref(), Collection::Services, fixtures::services)?,
            quotations: read_collection(
                snapshots.as_ref(),
                Collection::Quotations,
                fixtures::quotations,
            )?,
            coupons: read_collection(snapshots.as_ref(), Collection::Coupons, fixtures::coupons)?,
            logs: read_collection(snapshots.as_ref(), Collection::Logs, Vec::new)?,
            session,
        };

        Ok(Self {
            state,
            snapshots,
            hooks: Vec::new(),
        })
    }

    /// Current state, read-only. All mutation goes through [`dispatch`](Self::dispatch).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a mutation observer.
    pub fn add_hook(&mut self, hook: Box<dyn MutationHook>) {
        self.hooks.push(hook);
    }

    /// Apply an action, persist every collection it touched, and notify
    /// hooks. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, StoreError> {
        let changed = reduce(&mut self.state, &action);
        if changed.is_empty() {
            tracing::debug!(action = action.kind(), "dispatch was a no-op");
            return Ok(false);
        }

        for collection in &changed {
            self.persist(*collection)?;
        }
        tracing::debug!(
            action = action.kind(),
            collections = changed.len(),
            "dispatched"
        );

        for hook in &self.hooks {
            hook.on_mutation(&action, &self.state);
        }
        Ok(true)
    }

    /// Authenticate against the fixed allow-list and open a session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<SessionUser, StoreError> {
        let user = auth::authenticate(&fixtures::allow_list(), username, password)?;
        self.dispatch(Action::LoggedIn(user.clone()))?;
        Ok(user)
    }

    /// Close the session. The session key is deleted, not nulled.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.dispatch(Action::LoggedOut)?;
        Ok(())
    }

    fn persist(&self, collection: Collection) -> Result<(), StoreError> {
        let key = collection.key();
        match collection {
            Collection::Clients => self.write(key, &self.state.clients),
            Collection::Projects => self.write(key, &self.state.projects),
            Collection::Contractors => self.write(key, &self.state.contractors),
            Collection::Assets => self.write(key, &self.state.assets),
            Collection::Invoices => self.write(key, &self.state.invoices),
            Collection::Services => self.write(key, &self.state.services),
            Collection::Quotations => self.write(key, &self.state.quotations),
            Collection::Coupons => self.write(key, &self.state.coupons),
            Collection::Logs => self.write(key, &self.state.logs),
            Collection::Session => match &self.state.session {
                Some(user) => self.write(key, user),
                None => Ok(self.snapshots.delete(key)?),
            },
        }
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(value).map_err(|source| StoreError::Serialize { key, source })?;
        self.snapshots.put(key, &payload)?;
        Ok(())
    }
}
