//! One-off payments from guests who are not mess members.

use dineflow_core::types::{Amount, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPayment {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub amount: Amount,
    #[serde(default)]
    pub payment_date: Timestamp,
}

impl Entity for GuestPayment {
    const NAME: &'static str = "guestPayment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /guest/pay`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGuestPayment {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub amount: Option<Amount>,
}
