//! Demo records inserted into empty stores by `ensure_seed`.
//!
//! Seed students and pending requests all use the password `password123`.

use std::sync::OnceLock;

use chrono::{TimeZone, Utc};
use dineflow_core::menu::{MenuItem, WeeklyMenu};
use dineflow_core::password::hash_password;
use dineflow_core::status::{BillStatus, ComplaintStatus, RequestStatus};
use dineflow_core::types::Timestamp;

use crate::models::bill::Bill;
use crate::models::complaint::Complaint;
use crate::models::settings::MessSettings;
use crate::models::student::{Student, StudentRequest};
use crate::models::suggestion::Suggestion;

/// Plaintext password of every seeded account.
pub const DEMO_PASSWORD: &str = "password123";

/// Argon2 hash of [`DEMO_PASSWORD`], computed once per process.
fn demo_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        hash_password(DEMO_PASSWORD).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to hash demo password");
            String::new()
        })
    })
    .clone()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn settings() -> MessSettings {
    MessSettings {
        monthly_amount: 3500,
        rules: vec![
            "Mess timings must be strictly followed.".into(),
            "Wastage of food is strictly prohibited.".into(),
            "Students must maintain cleanliness in the mess hall.".into(),
            "Outside food is not allowed inside the mess hall.".into(),
            "Monthly dues must be cleared by the 5th of each month.".into(),
        ],
    }
}

pub fn menu() -> WeeklyMenu {
    WeeklyMenu {
        monday: MenuItem::new(
            &["Poha", "Jalebi"],
            &["Roti", "Dal Fry", "Rice", "Aloo Gobi"],
            &["Roti", "Paneer Butter Masala", "Rice"],
        ),
        tuesday: MenuItem::new(
            &["Upma", "Tea"],
            &["Roti", "Rajma", "Rice", "Salad"],
            &["Roti", "Mix Veg", "Dal"],
        ),
        wednesday: MenuItem::new(
            &["Idli", "Sambar"],
            &["Roti", "Chole", "Rice", "Raita"],
            &["Roti", "Sev Bhaji", "Rice"],
        ),
        thursday: MenuItem::new(
            &["Aloo Paratha", "Curd"],
            &["Roti", "Dal Makhani", "Rice", "Papad"],
            &["Roti", "Lauki Sabzi", "Dal"],
        ),
        friday: MenuItem::new(
            &["Dosa", "Chutney"],
            &["Roti", "Kadhi Pakoda", "Rice"],
            &["Roti", "Bhindi Fry", "Rice"],
        ),
        saturday: MenuItem::new(
            &["Bread Butter", "Jam"],
            &["Roti", "Mix Dal", "Rice", "Jeera Aloo"],
            &["Special Dinner", "Ice Cream"],
        ),
        sunday: MenuItem::new(
            &["Puri", "Sabzi"],
            &["Special Lunch"],
            &["Roti", "Aloo Matar", "Rice"],
        ),
    }
}

fn student(id: &str, name: &str, email: &str, phone: &str, room: &str) -> Student {
    Student {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        room_number: room.into(),
        password_hash: demo_password_hash(),
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student("s1", "Rohan Sharma", "rohan.sharma@example.com", "9876543210", "A-101"),
        student("s2", "Priya Patel", "priya.patel@example.com", "9876543211", "B-204"),
        student("s3", "Amit Singh", "amit.singh@example.com", "9876543212", "A-102"),
        student("s4", "Sunita Gupta", "sunita.gupta@example.com", "9876543213", "C-401"),
    ]
}

pub fn student_requests() -> Vec<StudentRequest> {
    let request = |id: &str, name: &str, email: &str, phone: &str, room: &str, day: u32| {
        StudentRequest {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            room_number: room.into(),
            password_hash: demo_password_hash(),
            status: RequestStatus::Pending,
            submitted_date: at(2025, 8, day, 9),
        }
    };
    vec![
        request("sr1", "Kavita Iyer", "kavita.iyer@example.com", "9123456780", "C-301", 27),
        request("sr2", "Suresh Kumar", "suresh.kumar@example.com", "9123456781", "D-110", 28),
    ]
}

pub fn complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "c1".into(),
            student_id: Some("s1".into()),
            title: "Water quality is poor".into(),
            description: "The water from the cooler tastes weird. Please check it.".into(),
            image_url: None,
            status: ComplaintStatus::Resolved,
            submitted_date: at(2025, 8, 15, 10),
            resolved_date: Some(at(2025, 8, 16, 12)),
            manager_reply: Some("We have cleaned the water cooler and replaced the filter.".into()),
        },
        Complaint {
            id: "c2".into(),
            student_id: Some("s2".into()),
            title: "Roti is not cooked properly".into(),
            description: "The rotis served today were half-cooked.".into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1589302168068-964664d93dc0?q=80&w=800".into(),
            ),
            status: ComplaintStatus::InProgress,
            submitted_date: at(2025, 8, 20, 13),
            resolved_date: None,
            manager_reply: Some("We are looking into this with the kitchen staff.".into()),
        },
        Complaint {
            id: "c3".into(),
            student_id: Some("s3".into()),
            title: "Mess hall cleanliness".into(),
            description: "The tables were not clean during lunch time.".into(),
            image_url: None,
            status: ComplaintStatus::Pending,
            submitted_date: at(2025, 8, 22, 14),
            resolved_date: None,
            manager_reply: None,
        },
    ]
}

pub fn suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: "sug1".into(),
            student_id: Some("s2".into()),
            text: "Can we have a feedback box in the mess hall?".into(),
            submitted_date: at(2025, 8, 25, 11),
            student_name: "Priya Patel".into(),
        },
        Suggestion {
            id: "sug2".into(),
            student_id: Some("s1".into()),
            text: "It would be great to have more variety in the Sunday special dinner.".into(),
            submitted_date: at(2025, 8, 26, 15),
            student_name: "Rohan Sharma".into(),
        },
    ]
}

pub fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "b1".into(),
            student_id: "s1".into(),
            month: "August 2025".into(),
            amount: 3500,
            status: BillStatus::Due,
            due_date: at(2025, 9, 5, 0),
            paid_date: None,
        },
        Bill {
            id: "b2".into(),
            student_id: "s2".into(),
            month: "July 2025".into(),
            amount: 3500,
            status: BillStatus::Paid,
            due_date: at(2025, 8, 5, 0),
            paid_date: Some(at(2025, 8, 2, 0)),
        },
        Bill {
            id: "b3".into(),
            student_id: "s3".into(),
            month: "June 2025".into(),
            amount: 3200,
            status: BillStatus::Paid,
            due_date: at(2025, 7, 5, 0),
            paid_date: Some(at(2025, 7, 1, 0)),
        },
        Bill {
            id: "b4".into(),
            student_id: "s4".into(),
            month: "July 2025".into(),
            amount: 3500,
            status: BillStatus::Overdue,
            due_date: at(2025, 8, 5, 0),
            paid_date: None,
        },
    ]
}
