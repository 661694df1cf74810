//! Status enums for complaints, bills and registration requests.
//!
//! Each enum serializes to the exact label clients display (`"In Progress"`,
//! `"Overdue"`, ...). Transition helpers return [`CoreError::Conflict`] when a
//! manager action does not apply to the current status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

/// Lifecycle of a student complaint.
///
/// Only `Pending -> In Progress` is driven by an endpoint (a manager reply).
/// `Resolved` exists in stored data but no action produces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Status a complaint moves to when a manager replies.
    ///
    /// Replying again to an in-progress complaint keeps it in progress and
    /// replaces the reply. Resolved complaints are closed to replies.
    pub fn after_reply(self) -> Result<Self, CoreError> {
        match self {
            Self::Pending | Self::InProgress => Ok(Self::InProgress),
            Self::Resolved => Err(CoreError::Conflict(
                "Complaint is already resolved".into(),
            )),
        }
    }

    /// Whether the complaint still needs manager attention.
    pub fn is_active(self) -> bool {
        self != Self::Resolved
    }
}

// ---------------------------------------------------------------------------
// Bills
// ---------------------------------------------------------------------------

/// Payment state of a monthly bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    Paid,
    #[default]
    Due,
    Overdue,
}

impl BillStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Overdue => "Overdue",
        }
    }

    /// Due and overdue bills both count towards what a student owes.
    pub fn is_outstanding(self) -> bool {
        self != Self::Paid
    }

    /// Validate that a bill in this state can be marked as paid.
    pub fn ensure_payable(self) -> Result<(), CoreError> {
        if self.is_outstanding() {
            Ok(())
        } else {
            Err(CoreError::Conflict("Bill is already paid".into()))
        }
    }
}

// ---------------------------------------------------------------------------
// Registration requests
// ---------------------------------------------------------------------------

/// State of a student registration request. Requests leave the store when
/// acted on, so only `Pending` is ever persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
}

/// Manager decision on a registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    /// Parse the action name sent by clients (`"approve"` / `"reject"`).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::Validation(format!(
                "Unknown action '{other}'. Must be one of: approve, reject"
            ))),
        }
    }
}
