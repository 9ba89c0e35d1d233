//! Client directory records.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Money};

/// Client classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    Individual,
    Corporate,
    Agency,
}

/// A client directory entry.
///
/// `total_revenue` and `past_projects` are denormalized counters. They
/// are updated by whoever registers the revenue event and are never
/// recomputed from the project collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_revenue: Money,
    pub past_projects: u32,
}

/// Fallback display name for clients submitted without one.
pub const UNKNOWN_CLIENT_NAME: &str = "Unknown";

/// Blank or whitespace-only names become [`UNKNOWN_CLIENT_NAME`] instead
/// of blocking submission.
pub fn normalize_client_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNKNOWN_CLIENT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_defaults_to_unknown() {
        assert_eq!(normalize_client_name(""), "Unknown");
        assert_eq!(normalize_client_name("   "), "Unknown");
    }

    #[test]
    fn non_blank_name_is_trimmed() {
        assert_eq!(normalize_client_name("  Acme Corp "), "Acme Corp");
    }

    #[test]
    fn client_serde_uses_type_field() {
        let client = Client {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            client_type: ClientType::Corporate,
            email: "contact@acme.com".to_string(),
            phone: "+91 8811186951".to_string(),
            address: "Guwahati, Assam".to_string(),
            total_revenue: 45000,
            past_projects: 3,
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["type"], "Corporate");
        assert_eq!(json["totalRevenue"], 45000);
        assert_eq!(json["pastProjects"], 3);
    }
}
