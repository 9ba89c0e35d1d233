//! Lenscraft application state.
//!
//! This crate is the single place state lives and changes:
//!
//! - [`AppState`]: every entity collection plus the auth session.
//! - [`Action`]: the typed mutation vocabulary.
//! - [`reduce`]: the pure `(state, action)` transform.
//! - [`SnapshotStore`]: the key-value persistence seam, with in-memory
//!   and directory-backed implementations.
//! - [`Store`]: glue: dispatch an action, persist what changed, fire
//!   the registered [`MutationHook`]s.
//!
//! Persistence is whole-collection snapshotting on every change,
//! last-write-wins. Collections restore from their snapshot keys at
//! load time and fall back to the bundled [`fixtures`] when absent.

pub mod action;
pub mod error;
pub mod fixtures;
pub mod hooks;
pub mod reducer;
pub mod snapshot;
pub mod state;
pub mod store;

pub use action::{Action, Collection};
pub use error::{SnapshotError, StoreError};
pub use hooks::{MutationHook, TracingHook};
pub use reducer::reduce;
pub use snapshot::{DirSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use state::AppState;
pub use store::Store;
