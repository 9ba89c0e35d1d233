//! Quotations and line-item calculus.
//!
//! A quotation is an editable list of priced line items plus a
//! `total_amount` snapshot taken when the quotation is saved. The total
//! is recomputed from scratch on every edit; item lists are small enough
//! that incremental updates would buy nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::Pillar;
use crate::error::CoreError;
use crate::types::{EntityId, Money};

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

/// Where a line item came from: a catalog plan, a priced resource
/// (equipment or freelancer), or a freehand entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemSource {
    Catalog,
    Resource,
    Manual,
}

/// One priced entry within a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub price: Money,
    #[serde(rename = "type")]
    pub source: LineItemSource,
}

impl LineItem {
    pub fn new(description: impl Into<String>, price: Money, source: LineItemSource) -> Self {
        Self {
            description: description.into(),
            quantity: 1,
            price,
            source,
        }
    }
}

/// Sum of `price * quantity` across all items. Exact for whole-rupee
/// inputs.
pub fn line_items_total(items: &[LineItem]) -> Money {
    items
        .iter()
        .map(|item| item.price * item.quantity as Money)
        .sum()
}

/// Toggle membership of a catalog or resource entry in a draft item list.
///
/// Re-selecting an entry whose description is already present removes it
/// rather than bumping its quantity; otherwise the entry is appended with
/// quantity 1.
pub fn toggle_line_item(
    items: &mut Vec<LineItem>,
    description: &str,
    price: Money,
    source: LineItemSource,
) {
    if let Some(position) = items.iter().position(|item| item.description == description) {
        items.remove(position);
    } else {
        items.push(LineItem::new(description, price, source));
    }
}

/// Reject negatively priced line items. Quantity is unsigned and needs
/// no check.
pub fn validate_line_item(item: &LineItem) -> Result<(), CoreError> {
    if item.price < 0 {
        return Err(CoreError::Validation(format!(
            "Line item '{}' has a negative price",
            item.description
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Quotation
// ---------------------------------------------------------------------------

/// Delivery status of a quotation. Any value may be set at any time;
/// there are no enforced transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
}

/// Quotation pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationTier {
    Standard,
    Premium,
}

/// A saved quotation.
///
/// `total_amount` is a denormalized copy of [`line_items_total`] taken at
/// save time. Catalog price edits made later never reach back into saved
/// quotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: EntityId,
    pub client_id: EntityId,
    pub client_name: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub expiry_date: String,
    pub project_type: Pillar,
    pub tier: QuotationTier,
    pub items: Vec<LineItem>,
    pub total_amount: Money,
    pub status: QuotationStatus,
}

impl Quotation {
    /// Recompute and freeze `total_amount` from the current item list.
    pub fn snapshot_total(&mut self) {
        self.total_amount = line_items_total(&self.items);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn item(description: &str, price: Money, quantity: u32) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity,
            price,
            source: LineItemSource::Manual,
        }
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(line_items_total(&[]), 0);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let items = vec![item("A", 3000, 1), item("B", 2500, 1), item("C", 1500, 1)];
        assert_eq!(line_items_total(&items), 7000);
    }

    #[test]
    fn total_respects_quantities() {
        let items = vec![item("Retouching", 1000, 3), item("Album", 4000, 1)];
        assert_eq!(line_items_total(&items), 7000);
    }

    #[test]
    fn total_is_exact_for_integer_currency() {
        let items = vec![item("Day rate", 1900, 7), item("Editing", 3000, 11)];
        assert_eq!(line_items_total(&items), 1900 * 7 + 3000 * 11);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut items = Vec::new();
        toggle_line_item(&mut items, "Recap Protocol", 3000, LineItemSource::Catalog);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        toggle_line_item(&mut items, "Recap Protocol", 3000, LineItemSource::Catalog);
        assert!(items.is_empty());
    }

    #[test]
    fn toggle_matches_by_description_only() {
        let mut items = vec![item("Drone Aerials", 2500, 1)];
        // Same description from a different source still toggles off.
        toggle_line_item(&mut items, "Drone Aerials", 3000, LineItemSource::Resource);
        assert!(items.is_empty());
    }

    #[test]
    fn toggle_leaves_other_items_alone() {
        let mut items = vec![item("Album", 4000, 1), item("Editing", 1000, 1)];
        toggle_line_item(&mut items, "Album", 4000, LineItemSource::Catalog);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Editing");
    }

    #[test]
    fn negative_price_rejected() {
        let bad = item("Refund", -500, 1);
        assert_matches!(validate_line_item(&bad), Err(CoreError::Validation(_)));
        assert!(validate_line_item(&item("Free", 0, 1)).is_ok());
    }

    #[test]
    fn snapshot_total_freezes_current_items() {
        let mut quotation = Quotation {
            id: "QT-101".to_string(),
            client_id: "1".to_string(),
            client_name: "Acme Corp".to_string(),
            date: "2024-03-15".to_string(),
            start_date: "2024-04-10".to_string(),
            end_date: "2024-04-10".to_string(),
            expiry_date: "2024-03-29".to_string(),
            project_type: Pillar::Videography,
            tier: QuotationTier::Premium,
            items: vec![item("Recap Protocol", 3000, 1), item("4K Delivery", 1500, 1)],
            total_amount: 0,
            status: QuotationStatus::Draft,
        };
        quotation.snapshot_total();
        assert_eq!(quotation.total_amount, 4500);

        // Editing an item after the snapshot does not move the saved total.
        quotation.items[0].price = 9999;
        assert_eq!(quotation.total_amount, 4500);
    }

    #[test]
    fn line_item_serde_uses_type_field() {
        let json = serde_json::to_value(item("Album", 4000, 1)).unwrap();
        assert_eq!(json["type"], "manual");
        let back: LineItem =
            serde_json::from_value(serde_json::json!({
                "description": "Recap Protocol",
                "quantity": 1,
                "price": 3000,
                "type": "catalog"
            }))
            .unwrap();
        assert_eq!(back.source, LineItemSource::Catalog);
    }
}
