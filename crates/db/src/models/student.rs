//! Students and pending registration requests.

use dineflow_core::status::RequestStatus;
use dineflow_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::seed;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// An approved mess member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    /// Argon2id PHC string. Never leaves the server.
    pub password_hash: String,
}

impl Entity for Student {
    const NAME: &'static str = "student";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed_data() -> Vec<Self> {
        seed::students()
    }
}

/// A registration awaiting a manager decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub password_hash: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub submitted_date: Timestamp,
}

impl StudentRequest {
    /// Promote an approved request to a student record with a fresh id.
    pub fn into_student(self, id: RecordId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            room_number: self.room_number,
            password_hash: self.password_hash,
        }
    }
}

impl Entity for StudentRequest {
    const NAME: &'static str = "studentRequest";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed_data() -> Vec<Self> {
        seed::student_requests()
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Public student fields returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
}

impl From<&Student> for StudentProfile {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            room_number: s.room_number.clone(),
        }
    }
}

/// Minimal student reference embedded in billing records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id: RecordId,
    pub name: String,
    pub room_number: String,
}

impl From<&Student> for StudentRef {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            room_number: s.room_number.clone(),
        }
    }
}

/// Public fields of a registration request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequestView {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub status: RequestStatus,
    pub submitted_date: Timestamp,
}

impl From<&StudentRequest> for StudentRequestView {
    fn from(r: &StudentRequest) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            email: r.email.clone(),
            phone: r.phone.clone(),
            room_number: r.room_number.clone(),
            status: r.status,
            submitted_date: r.submitted_date,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /student/register`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub room_number: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /manager/students/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

/// Body of `POST /manager/student-requests/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDecision {
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_never_contains_password_hash() {
        let student = Student {
            id: "s9".into(),
            name: "Test".into(),
            email: "t@example.com".into(),
            phone: "9999999999".into(),
            room_number: "Z-1".into(),
            password_hash: "$argon2id$secret".into(),
        };
        let json = serde_json::to_value(StudentProfile::from(&student)).unwrap();
        assert_eq!(json["roomNumber"], "Z-1");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn promoted_request_keeps_contact_details() {
        let request = StudentRequest {
            id: "sr9".into(),
            name: "Kavita Iyer".into(),
            email: "kavita.iyer@example.com".into(),
            phone: "9123456780".into(),
            room_number: "C-301".into(),
            password_hash: "hash".into(),
            ..Default::default()
        };
        let student = request.into_student("new-id".into());
        assert_eq!(student.id, "new-id");
        assert_eq!(student.name, "Kavita Iyer");
        assert_eq!(student.room_number, "C-301");
        assert_eq!(student.password_hash, "hash");
    }

    #[test]
    fn update_serializes_only_present_fields() {
        let update = UpdateStudent {
            room_number: Some("B-1".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({ "roomNumber": "B-1" })
        );
    }
}
