//! Project records: the card that moves through the pipeline board.

use serde::{Deserialize, Serialize};

use crate::catalog::Pillar;
use crate::client::ClientType;
use crate::pipeline::ProjectStatus;
use crate::types::{EntityId, Money};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Shoot category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Wedding,
    Event,
    Corporate,
    #[serde(rename = "Music Video")]
    MusicVideo,
    Other,
}

/// Commercial tier of the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectTier {
    Standard,
    Premium,
    Luxury,
}

/// Single or multi-day production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShootType {
    #[serde(rename = "Single-day")]
    SingleDay,
    #[serde(rename = "Multi-day")]
    MultiDay,
}

/// Booked slot on each shoot date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "Half-Day")]
    HalfDay,
    #[serde(rename = "Full-Day")]
    FullDay,
    Custom,
}

// ---------------------------------------------------------------------------
// Financial overview
// ---------------------------------------------------------------------------

/// Invoicing state as seen from the project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectInvoiceStatus {
    #[serde(rename = "Not Created")]
    NotCreated,
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Payment collection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project record.
///
/// Client contact fields are denormalized copies taken at creation time;
/// deleting or editing the client does not cascade here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    // Identity
    pub id: EntityId,
    pub title: String,
    pub status: ProjectStatus,
    pub creation_date: String,
    pub project_owner: String,

    // Client snapshot
    pub client_id: EntityId,
    pub client_name: String,
    pub client_type: ClientType,
    pub primary_contact: String,
    pub phone: String,
    pub email: String,
    pub location: String,

    // Classification
    pub category: ProjectCategory,
    pub tier: ProjectTier,
    #[serde(rename = "type")]
    pub service: Pillar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<Money>,

    // Schedule
    pub shoot_type: ShootType,
    pub shoot_dates: Vec<String>,
    pub time_slot: TimeSlot,
    pub delivery_deadline: String,
    pub event_locations: String,

    // Scope
    pub services_included: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,

    // Commercials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation_id: Option<EntityId>,
    pub budget: Money,
    pub invoice_status: ProjectInvoiceStatus,
    pub payment_status: PaymentStatus,
    pub advance_received: bool,
    pub outstanding_amount: Money,

    // Notes & audit trail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    pub created_by: String,
    pub last_modified_by: String,
    pub last_modified_date: String,
}
