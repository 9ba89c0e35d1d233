/// Entity identifiers are client-generated strings (see [`crate::ids`]).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts are whole rupees. Line-item and quotation arithmetic
/// stays exact for integer inputs.
pub type Money = i64;
