//! Monthly bills and the manager billing overview.

use std::collections::HashMap;

use dineflow_core::status::BillStatus;
use dineflow_core::types::{Amount, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::models::student::{Student, StudentRef};
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: RecordId,
    pub student_id: RecordId,
    /// Billing period label, e.g. `"August 2025"`.
    pub month: String,
    pub amount: Amount,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub due_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<Timestamp>,
}

impl Entity for Bill {
    const NAME: &'static str = "bill";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed_data() -> Vec<Self> {
        seed::bills()
    }
}

/// A bill joined with the student it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingRecord {
    #[serde(flatten)]
    pub bill: Bill,
    pub student: StudentRef,
}

/// Bills grouped by status for the manager dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillingOverview {
    pub unpaid: Vec<BillingRecord>,
    pub paid: Vec<BillingRecord>,
    pub overdue: Vec<BillingRecord>,
}

impl BillingOverview {
    /// Group `bills` by status. Bills whose student no longer exists are
    /// left out.
    pub fn build(bills: Vec<Bill>, students: &[Student]) -> Self {
        let by_id: HashMap<&str, &Student> =
            students.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut overview = Self::default();
        for bill in bills {
            let Some(student) = by_id.get(bill.student_id.as_str()) else {
                continue;
            };
            let bucket = match bill.status {
                BillStatus::Due => &mut overview.unpaid,
                BillStatus::Paid => &mut overview.paid,
                BillStatus::Overdue => &mut overview.overdue,
            };
            bucket.push(BillingRecord {
                student: StudentRef::from(*student),
                bill,
            });
        }
        overview
    }
}
