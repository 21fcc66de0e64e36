//! Order Line Model

use serde::{Deserialize, Serialize};

/// One committed (item, quantity) pairing belonging to a single customer
/// submission. Never mutated and never deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Snowflake ID of this line
    pub id: i64,
    /// Shared by all lines created by one cart commit; receipts group on it
    pub submission_id: i64,
    /// Weak reference to the ordered dish; may dangle after a menu delete
    pub menu_item: i64,
    pub customer_name: String,
    /// Always >= 1 at creation
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// UTC millis, shared by all lines of one submission
    pub submitted_at: i64,
}
