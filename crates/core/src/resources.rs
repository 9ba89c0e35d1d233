//! Resource records: equipment assets and the freelancer pool.

use serde::{Deserialize, Serialize};

use crate::catalog::Pillar;
use crate::types::{EntityId, Money};

// ---------------------------------------------------------------------------
// Price variants
// ---------------------------------------------------------------------------

/// Stocking/availability label on a price variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantAvailability {
    #[serde(rename = "In stock")]
    InStock,
    #[serde(rename = "Out of stock")]
    OutOfStock,
    Available,
    Busy,
}

/// An alternative pricing option attached to an asset or freelancer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVariant {
    pub id: EntityId,
    pub name: String,
    pub price_difference: Money,
    pub variant_price: Money,
    pub status: VariantAvailability,
    pub is_visible: bool,
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Equipment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCategory {
    Camera,
    Lens,
    Light,
    Audio,
    Drone,
    Accessory,
}

/// Equipment availability, toggled manually by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    Maintenance,
}

impl AssetStatus {
    /// The one-click toggle used from the inventory view: `Available`
    /// goes out on a job, anything else comes back to `Available`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Available => Self::InUse,
            Self::InUse | Self::Maintenance => Self::Available,
        }
    }
}

/// A piece of owned equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: EntityId,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub cost: Money,
    pub rental_rate: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<PriceVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_types: Option<Vec<Pillar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_categories: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Freelancers
// ---------------------------------------------------------------------------

/// Freelancer specialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreelancerRole {
    Photographer,
    Cinematographer,
    Editor,
    #[serde(rename = "Drone Pilot")]
    DronePilot,
    Designer,
    Influencer,
}

/// Seniority band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Junior,
    Mid,
    Senior,
}

/// Freelancer availability, toggled manually by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreelancerStatus {
    Available,
    #[serde(rename = "On Shoot")]
    OnShoot,
    Vacation,
}

/// A contractor in the talent pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    pub id: EntityId,
    pub name: String,
    pub role: FreelancerRole,
    pub level: SkillLevel,
    pub rate_per_day: Money,
    pub rating: f32,
    pub status: FreelancerStatus,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<PriceVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<Pillar>>,
}

/// Highest rating a freelancer can carry.
pub const MAX_RATING: f32 = 5.0;

/// Clamp a submitted rating into the displayable range.
pub fn clamp_rating(rating: f32) -> f32 {
    rating.clamp(0.0, MAX_RATING)
}
