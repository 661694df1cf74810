//! Student suggestions.

use dineflow_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<RecordId>,
    pub text: String,
    #[serde(default)]
    pub submitted_date: Timestamp,
    /// Author name captured at submission time.
    #[serde(default)]
    pub student_name: String,
}

impl Entity for Suggestion {
    const NAME: &'static str = "suggestion";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed_data() -> Vec<Self> {
        seed::suggestions()
    }
}

/// Body of `POST /student/suggestions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSuggestion {
    pub text: Option<String>,
}
