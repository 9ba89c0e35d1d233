//! System log records.
//!
//! The log collection is part of the persisted data model but no
//! mutation path writes to it yet. Audit capture is expected to hang off
//! the store's mutation hooks once the retention story is settled, so
//! this module defines the record shape and the action vocabulary only.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Coarse classification of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    QuotationEdit,
    QuotationDelete,
    System,
}

/// One log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    pub id: EntityId,
    pub timestamp: Timestamp,
    pub user: String,
    pub action: String,
    pub details: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

/// Known action names for log entries and mutation hooks.
pub mod action_names {
    pub const LOGIN: &str = "login";
    pub const LOGOUT: &str = "logout";
    pub const ENTITY_CREATE: &str = "entity_create";
    pub const ENTITY_UPDATE: &str = "entity_update";
    pub const ENTITY_DELETE: &str = "entity_delete";
    pub const STAGE_MOVE: &str = "stage_move";
    pub const SYSTEM: &str = "system";
}
