//! Service catalog: pillars, plans, and plan sub-components.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Money};

// ---------------------------------------------------------------------------
// Pillar
// ---------------------------------------------------------------------------

/// Top-level service category used to partition the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pillar {
    Photography,
    Videography,
    #[serde(rename = "Post-Production")]
    PostProduction,
    Hybrid,
}

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photography => "Photography",
            Self::Videography => "Videography",
            Self::PostProduction => "Post-Production",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// How a plan's base price is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateType {
    Fixed,
    Hourly,
    #[serde(rename = "Day Rate")]
    DayRate,
}

/// One independently priced component of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSubItem {
    pub id: EntityId,
    pub name: String,
    pub price: Money,
    pub is_mandatory: bool,
}

/// A priced package within a pillar/category.
///
/// `price` is the plan's advertised starting price. It is an independent
/// field, not the sum of the sub-items; the two can and do disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: EntityId,
    pub pillar: Pillar,
    pub category: String,
    pub plan_name: String,
    pub price: Money,
    pub rate_type: RateType,
    pub description: String,
    pub items: Vec<PlanSubItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_index: Option<u32>,
}
