//! Manager broadcast messages.

use dineflow_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    pub id: RecordId,
    pub message: String,
    #[serde(default)]
    pub sent_date: Timestamp,
}

impl Entity for Broadcast {
    const NAME: &'static str = "broadcast";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /manager/broadcast`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBroadcast {
    pub message: Option<String>,
}
