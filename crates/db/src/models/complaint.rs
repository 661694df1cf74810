//! Student complaints and manager replies.

use dineflow_core::status::ComplaintStatus;
use dineflow_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: RecordId,
    /// Author. Absent on records created before authorship was tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<RecordId>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub submitted_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_reply: Option<String>,
}

impl Complaint {
    pub fn is_owned_by(&self, student_id: &str) -> bool {
        self.student_id.as_deref() == Some(student_id)
    }
}

impl Entity for Complaint {
    const NAME: &'static str = "complaint";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed_data() -> Vec<Self> {
        seed::complaints()
    }
}

/// Short form used in the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintSummary {
    pub id: RecordId,
    pub title: String,
    pub status: ComplaintStatus,
}

impl From<&Complaint> for ComplaintSummary {
    fn from(c: &Complaint) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            status: c.status,
        }
    }
}

/// Body of `POST /student/complaints`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Body of `POST /manager/complaints/{id}/reply`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyToComplaint {
    pub reply: Option<String>,
}
