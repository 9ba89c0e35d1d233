//! Invoices and discount coupons.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Money};

/// Invoice lifecycle label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Draft,
}

/// A registered invoice. References the client by display name only;
/// there is no enforced link back to the client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,
    pub client_name: String,
    pub amount: Money,
    pub date: String,
    pub status: InvoiceStatus,
}

/// Whether a coupon takes a percentage or a flat amount off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A discount code. The code itself is the identity; deletes address it
/// by code, not by a separate id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub code: String,
    pub discount_type: DiscountType,
    pub value: Money,
    pub expiry: String,
}
